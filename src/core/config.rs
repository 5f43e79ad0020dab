// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::models::{clamp_length, GenerationOptions, DEFAULT_PASSWORD_LENGTH};

// Configuration for the generator front end
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_uppercase: bool,
    pub default_include_digits: bool,
    pub default_include_symbols: bool,

    // Login
    pub require_captcha: bool,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: DEFAULT_PASSWORD_LENGTH,
            default_include_uppercase: false,
            default_include_digits: false,
            default_include_symbols: false,

            // Login
            require_captcha: true,

            // Logging
            log_level: LevelFilter::Info,
            log_file: PathBuf::from("./logs/passgen_vault.log"),
        }
    }
}

impl Config {
    // Load configuration from environment variables. Runs before the logger
    // exists, so problems come back as warnings for the caller to log.
    pub fn load() -> (Self, Vec<String>) {
        Self::load_from(|key| env::var(key).ok())
    }

    // Load configuration from any key lookup, falling back to defaults
    pub fn load_from<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) => {
                    config.default_password_length = clamp_length(length);
                    if config.default_password_length != length {
                        warnings.push(format!("DEFAULT_PASSWORD_LENGTH {} clamped to {}", length, config.default_password_length));
                    }
                }
                Err(_) => warnings.push(format!("Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}'", val)),
            }
        }

        parse_bool(&lookup, "DEFAULT_INCLUDE_UPPERCASE", &mut config.default_include_uppercase, &mut warnings);
        parse_bool(&lookup, "DEFAULT_INCLUDE_DIGITS", &mut config.default_include_digits, &mut warnings);
        parse_bool(&lookup, "DEFAULT_INCLUDE_SYMBOLS", &mut config.default_include_symbols, &mut warnings);

        // Login
        parse_bool(&lookup, "REQUIRE_CAPTCHA", &mut config.require_captcha, &mut warnings);

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Unknown log level '{}', keeping {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = PathBuf::from(file);
        }

        (config, warnings)
    }

    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            length: self.default_password_length,
            include_uppercase: self.default_include_uppercase,
            include_digits: self.default_include_digits,
            include_symbols: self.default_include_symbols,
        }
    }
}

fn parse_bool<F>(lookup: &F, key: &str, target: &mut bool, warnings: &mut Vec<String>)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(key) {
        match val.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => *target = true,
            "false" | "0" | "no" | "off" => *target = false,
            _ => warnings.push(format!("Ignoring invalid {} '{}'", key, val)),
        }
    }
}
