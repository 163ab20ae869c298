use rand::Rng;
use rand::seq::SliceRandom;

use crate::charset::{ pool, ClassSet };
use crate::errors::GenerateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequest {
    pub length: usize,
    pub classes: ClassSet,
}

/// A generated password together with the classes actually drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub password: String,
    pub classes: ClassSet,
    /// Set when the request named no classes and all of them were used instead.
    pub fallback: bool,
}

pub fn generate(request: &PasswordRequest) -> Result<Generated, GenerateError> {
    let mut rng = rand::rng();

    generate_with(&mut rng, request)
}

pub fn generate_with<R>(rng: &mut R, request: &PasswordRequest) -> Result<Generated, GenerateError>
    where R: Rng + ?Sized, {
        if request.length == 0 {
            return Err(GenerateError::InvalidLength(request.length));
        }

        let fallback = request.classes.is_empty();
        let classes = if fallback { ClassSet::all() } else { request.classes };

        let chars = pool(classes);
        log::debug!("drawing {} characters from a pool of {} ({})", request.length, chars.len(), classes);

        let mut password: Vec<char> = (0..request.length)
            .map(|_| chars[rng.random_range(0..chars.len())])
            .collect();

        // Redundant after independent uniform draws; kept for parity with the classic generator.
        password.shuffle(rng);

        Ok(Generated {
            password: password.into_iter().collect(),
            classes,
            fallback,
        })
}
