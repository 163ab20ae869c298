use std::fmt;
use std::str::FromStr;

use serde::{ Deserialize, Deserializer, Serialize, Serializer };

use crate::errors::UnknownClass;

pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGIT_CHARS: &str = "0123456789";
pub const SYMBOL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Pool concatenation order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE_CHARS,
            CharacterClass::Lowercase => LOWERCASE_CHARS,
            CharacterClass::Digits => DIGIT_CHARS,
            CharacterClass::Symbols => SYMBOL_CHARS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uppercase" | "upper" => Ok(CharacterClass::Uppercase),
            "lowercase" | "lower" => Ok(CharacterClass::Lowercase),
            "digits" | "numbers" => Ok(CharacterClass::Digits),
            "symbols" | "specials" => Ok(CharacterClass::Symbols),
            _ => Err(UnknownClass(s.to_string())),
        }
    }
}

/// A set of character classes, iterated in pool order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSet {
    bits: u8,
}

impl ClassSet {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn all() -> Self {
        CharacterClass::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.bits |= class.bit();
    }

    pub fn with(mut self, class: CharacterClass) -> Self {
        self.insert(class);
        self
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.bits & class.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(|class| self.contains(*class))
    }

    /// Whether `c` belongs to any class in the set.
    pub fn admits(&self, c: char) -> bool {
        self.iter().any(|class| class.contains(c))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(CharacterClass::name).collect();
        write!(f, "{}", names.join(", "))
    }
}

impl Serialize for ClassSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer, {
            serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for ClassSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>, {
            let classes = Vec::<CharacterClass>::deserialize(deserializer)?;
            Ok(classes.into_iter().collect())
    }
}

/// Concatenates the character sets of `classes`. Duplicates across classes are kept.
pub fn pool(classes: ClassSet) -> Vec<char> {
    classes.iter().flat_map(|class| class.chars().chars()).collect()
}
