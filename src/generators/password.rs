// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::models::{GenerationOptions, Password, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

pub const LOWERCASE_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGIT_CHARS: &[u8] = b"0123456789";
pub const SYMBOL_CHARS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Please select at least one character type")]
    EmptyPool,

    #[error("Password length must be between {min} and {max}, got {length}")]
    LengthOutOfRange { length: usize, min: usize, max: usize },

    #[error("Character pool must be ASCII, found byte 0x{0:02x}")]
    NonAsciiPool(u8),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// The set of characters eligible for a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<u8>,
}

impl CharacterPool {
    pub fn from_options(options: &GenerationOptions) -> Self {
        let mut chars = Vec::with_capacity(
            LOWERCASE_CHARS.len() + UPPERCASE_CHARS.len() + DIGIT_CHARS.len() + SYMBOL_CHARS.len(),
        );

        chars.extend_from_slice(LOWERCASE_CHARS);
        if options.include_uppercase {
            chars.extend_from_slice(UPPERCASE_CHARS);
        }
        if options.include_digits {
            chars.extend_from_slice(DIGIT_CHARS);
        }
        if options.include_symbols {
            chars.extend_from_slice(SYMBOL_CHARS);
        }

        Self { chars }
    }

    /// Pools are ASCII-only so every byte maps to exactly one `char`.
    pub fn from_bytes(chars: &[u8]) -> Result<Self> {
        if let Some(&byte) = chars.iter().find(|b| !b.is_ascii()) {
            return Err(GeneratorError::NonAsciiPool(byte));
        }
        Ok(Self { chars: chars.to_vec() })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.chars.contains(&(c as u8))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }
}

/// Draw `length` characters uniformly, with replacement, from `pool`.
pub fn generate_from_pool<R: Rng + ?Sized>(rng: &mut R, pool: &CharacterPool, length: usize) -> Result<Password> {
    if pool.is_empty() {
        return Err(GeneratorError::EmptyPool);
    }

    let dist = Uniform::from(0..pool.len());
    let password: String = (0..length)
        .map(|_| pool.chars[dist.sample(rng)] as char)
        .collect();

    Ok(Password::from(password))
}

pub fn generate_password<R: Rng + ?Sized>(rng: &mut R, options: &GenerationOptions) -> Result<Password> {
    if !options.length_in_range() {
        return Err(GeneratorError::LengthOutOfRange {
            length: options.length,
            min: MIN_PASSWORD_LENGTH,
            max: MAX_PASSWORD_LENGTH,
        });
    }

    let pool = CharacterPool::from_options(options);
    generate_from_pool(rng, &pool, options.length)
}

pub struct PasswordGenerator {
    rng: ChaCha8Rng,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Reproducible generator, for tests and `--seed`.
    pub fn with_seed(seed: u64) -> Self {
        PasswordGenerator {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn generate_password(&mut self, options: &GenerationOptions) -> Result<Password> {
        let password = generate_password(&mut self.rng, options)?;
        log::debug!(
            "Generated password of length {} (uppercase={}, digits={}, symbols={})",
            password.len(),
            options.include_uppercase,
            options.include_digits,
            options.include_symbols
        );
        Ok(password)
    }

    pub fn generate_from_pool(&mut self, pool: &CharacterPool, length: usize) -> Result<Password> {
        generate_from_pool(&mut self.rng, pool, length)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
