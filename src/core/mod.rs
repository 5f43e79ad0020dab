// src/core/mod.rs
pub mod captcha;
pub mod config;
pub mod state;
pub mod store;

pub use captcha::{Captcha, Identity, LoginError, LoginGate};
pub use state::{AppState, StateError};
pub use store::{PasswordStore, StoreError};
