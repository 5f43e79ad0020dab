// src/models.rs
use serde::{Serialize, Deserialize};
use std::fmt;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 20;
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

// Password generation options. Lowercase letters are always part of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            include_uppercase: false,
            include_digits: false,
            include_symbols: false,
        }
    }
}

impl GenerationOptions {
    /// Set the length, clamped into the supported range the way a bounded slider would.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = clamp_length(length);
        self
    }

    pub fn length_in_range(&self) -> bool {
        (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&self.length)
    }
}

pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH)
}

/// A generated password. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Password(value)
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Password(value.to_string())
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_home_screen() {
        let options = GenerationOptions::default();
        assert_eq!(options.length, 12);
        assert!(!options.include_uppercase);
        assert!(!options.include_digits);
        assert!(!options.include_symbols);
        assert!(options.length_in_range());
    }

    #[test]
    fn with_length_clamps() {
        assert_eq!(GenerationOptions::default().with_length(2).length, MIN_PASSWORD_LENGTH);
        assert_eq!(GenerationOptions::default().with_length(64).length, MAX_PASSWORD_LENGTH);
        assert_eq!(GenerationOptions::default().with_length(9).length, 9);
    }

    #[test]
    fn password_serializes_as_plain_string() {
        let json = serde_json::to_string(&Password::from("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}
