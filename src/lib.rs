// src/lib.rs
//! Password generator with an in-memory saved list, a numeric CAPTCHA login
//! gate, and a terminal front end.

pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::core::{AppState, PasswordStore};
pub use crate::generators::PasswordGenerator;
pub use crate::models::{GenerationOptions, Password};
