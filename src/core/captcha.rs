// src/core/captcha.rs
//! Numeric human-check for the login screen.
//!
//! This is a "type the number you see" gate with no security value: the code
//! is shown in plain text and there is no lockout.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use thiserror::Error;

const CAPTCHA_MIN: u16 = 1000;
const CAPTCHA_MAX: u16 = 9999;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("Please enter your name")]
    MissingName,

    #[error("CAPTCHA does not match. Try again")]
    CaptchaMismatch,
}

pub type Result<T> = std::result::Result<T, LoginError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captcha {
    code: u16,
}

impl Captcha {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            code: rng.gen_range(CAPTCHA_MIN..=CAPTCHA_MAX),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn matches(&self, input: &str) -> bool {
        input.trim() == self.code.to_string()
    }
}

impl fmt::Display for Captcha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Who got past the login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
}

pub struct LoginGate {
    rng: ChaCha8Rng,
    captcha: Captcha,
    failed_attempts: u32,
}

impl LoginGate {
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: ChaCha8Rng) -> Self {
        let captcha = Captcha::generate(&mut rng);
        Self {
            rng,
            captcha,
            failed_attempts: 0,
        }
    }

    pub fn captcha(&self) -> Captcha {
        self.captcha
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    pub fn refresh(&mut self) -> Captcha {
        self.captcha = Captcha::generate(&mut self.rng);
        self.captcha
    }

    /// A blank name leaves the CAPTCHA alone; a wrong code issues a new one.
    pub fn attempt(&mut self, name: &str, input: &str) -> Result<Identity> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LoginError::MissingName);
        }

        if !self.captcha.matches(input) {
            self.failed_attempts += 1;
            log::warn!("CAPTCHA mismatch (attempt {})", self.failed_attempts);
            self.refresh();
            return Err(LoginError::CaptchaMismatch);
        }

        log::info!("Login passed after {} failed attempt(s)", self.failed_attempts);
        Ok(Identity { name: name.to_string() })
    }
}

impl Default for LoginGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_four_digits() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let captcha = Captcha::generate(&mut rng);
            assert!((1000..=9999).contains(&captcha.code()));
            assert_eq!(captcha.to_string().len(), 4);
        }
    }

    #[test]
    fn matches_ignores_surrounding_whitespace() {
        let captcha = Captcha { code: 4321 };
        assert!(captcha.matches(" 4321\n"));
        assert!(!captcha.matches("04321"));
        assert!(!captcha.matches(""));
    }

    #[test]
    fn blank_name_keeps_captcha() {
        let mut gate = LoginGate::with_seed(1);
        let before = gate.captcha();
        let code = before.to_string();
        assert_eq!(gate.attempt("   ", &code), Err(LoginError::MissingName));
        assert_eq!(gate.captcha(), before);
        assert_eq!(gate.failed_attempts(), 0);
    }

    #[test]
    fn correct_code_logs_in() {
        let mut gate = LoginGate::with_seed(2);
        let code = gate.captcha().to_string();
        let identity = gate.attempt("  Ada ", &code).unwrap();
        assert_eq!(identity.name, "Ada");
    }

    #[test]
    fn mismatch_counts_and_refreshes() {
        // Same stream the gate draws from: first code at construction, second after a miss.
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let first = Captcha::generate(&mut rng);
        let second = Captcha::generate(&mut rng);

        let mut gate = LoginGate::with_seed(3);
        assert_eq!(gate.captcha(), first);
        let wrong = if first.code() == 1000 { "1001" } else { "1000" };
        assert_eq!(gate.attempt("Ada", wrong), Err(LoginError::CaptchaMismatch));
        assert_eq!(gate.failed_attempts(), 1);
        assert_eq!(gate.captcha(), second);

        // The new code is what counts now.
        let code = gate.captcha().to_string();
        assert!(gate.attempt("Ada", &code).is_ok());
    }
}
