pub mod charset;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod generators;
pub mod output;
pub mod strength;

pub use charset::{ CharacterClass, ClassSet };
pub use generators::{ generate, Generated, PasswordRequest };
pub use strength::{ evaluate, score, tier, Strength, StrengthTier };
