// src/core/state.rs
use thiserror::Error;

use crate::core::captcha::Identity;
use crate::core::store::{PasswordStore, StoreError};
use crate::generators::{GeneratorError, PasswordGenerator};
use crate::models::{GenerationOptions, Password};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, StateError>;

/// Everything the screens share. Owned by the menu loop and handed to each
/// screen as `&mut AppState`.
pub struct AppState {
    generator: PasswordGenerator,
    options: GenerationOptions,
    current: Option<Password>,
    store: PasswordStore,
    identity: Option<Identity>,
}

impl AppState {
    pub fn new(generator: PasswordGenerator, options: GenerationOptions) -> Self {
        Self {
            generator,
            options: options.with_length(options.length),
            current: None,
            store: PasswordStore::new(),
            identity: None,
        }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Returns the length actually applied after clamping.
    pub fn set_length(&mut self, length: usize) -> usize {
        self.options = self.options.with_length(length);
        self.options.length
    }

    pub fn toggle_uppercase(&mut self) -> bool {
        self.options.include_uppercase = !self.options.include_uppercase;
        self.options.include_uppercase
    }

    pub fn toggle_digits(&mut self) -> bool {
        self.options.include_digits = !self.options.include_digits;
        self.options.include_digits
    }

    pub fn toggle_symbols(&mut self) -> bool {
        self.options.include_symbols = !self.options.include_symbols;
        self.options.include_symbols
    }

    pub fn generate(&mut self) -> Result<&Password> {
        let password = self.generator.generate_password(&self.options)?;
        let current: &Password = self.current.insert(password);
        Ok(current)
    }

    pub fn current(&self) -> Option<&Password> {
        self.current.as_ref()
    }

    pub fn reset_current(&mut self) {
        self.current = None;
    }

    pub fn save_current(&mut self) -> Result<()> {
        let password = self.current.clone().ok_or(StoreError::NoPassword)?;
        self.store.save(password)?;
        Ok(())
    }

    pub fn saved(&self) -> &[Password] {
        self.store.list()
    }

    pub fn delete_saved(&mut self, index: usize) -> Result<Password> {
        Ok(self.store.delete_at(index)?)
    }

    pub fn delete_all_saved(&mut self) -> usize {
        self.store.delete_all()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn sign_in(&mut self, identity: Identity) {
        log::info!("Session started");
        self.identity = Some(identity);
    }

    pub fn sign_out(&mut self) {
        self.identity = None;
        self.current = None;
    }
}
