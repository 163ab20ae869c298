use std::fs;
use std::io::ErrorKind;
use std::path::{ Path, PathBuf };

use serde::{ Deserialize, Serialize };

use crate::charset::{ CharacterClass, ClassSet };
use crate::errors::ConfigError;
use crate::generators::PasswordRequest;

/// Generation defaults, read from `config.json` and overridden by flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub specials: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: 12,
            uppercase: true,
            lowercase: true,
            numbers: true,
            specials: true,
        }
    }
}

impl Config {
    const DIR_NAME: &str = "strongpass";
    const FILE_NAME: &str = "config.json";

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::DIR_NAME).join(Self::FILE_NAME))
    }

    /// Loads `path` if given, otherwise the default location. Only the default
    /// file is allowed to be missing.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::read(path),
            None => match Self::default_path() {
                Some(path) => match Self::read(&path) {
                    Err(ConfigError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                        log::debug!("no config at {}, using defaults", path.display());
                        Ok(Self::default())
                    }
                    other => other,
                },
                None => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn classes(&self) -> ClassSet {
        let mut classes = ClassSet::empty();

        if self.uppercase {
            classes.insert(CharacterClass::Uppercase);
        }
        if self.lowercase {
            classes.insert(CharacterClass::Lowercase);
        }
        if self.numbers {
            classes.insert(CharacterClass::Digits);
        }
        if self.specials {
            classes.insert(CharacterClass::Symbols);
        }

        classes
    }

    pub fn request(&self) -> PasswordRequest {
        PasswordRequest {
            length: self.length,
            classes: self.classes(),
        }
    }
}
