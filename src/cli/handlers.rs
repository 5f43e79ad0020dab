// src/cli/handlers.rs
use serde::Serialize;
use std::error::Error;

use crate::generators::PasswordGenerator;
use crate::models::{GenerationOptions, Password};

pub const MAX_GENERATE_COUNT: usize = 1000;

#[derive(Debug, Serialize)]
struct GeneratedOutput<'a> {
    options: &'a GenerationOptions,
    passwords: &'a [Password],
}

// Command-line flags only switch classes on; anything not given falls back to the config
pub fn build_options(
    base: GenerationOptions,
    length: Option<u8>,
    uppercase: bool,
    digits: bool,
    symbols: bool,
) -> GenerationOptions {
    GenerationOptions {
        length: length.map(usize::from).unwrap_or(base.length),
        include_uppercase: base.include_uppercase || uppercase,
        include_digits: base.include_digits || digits,
        include_symbols: base.include_symbols || symbols,
    }
}

pub fn handle_generate(
    generator: &mut PasswordGenerator,
    options: &GenerationOptions,
    count: usize,
) -> Result<Vec<Password>, Box<dyn Error>> {
    if count > MAX_GENERATE_COUNT {
        return Err(format!("Can generate at most {} passwords at once, got {}", MAX_GENERATE_COUNT, count).into());
    }

    let passwords = (0..count)
        .map(|_| generator.generate_password(options))
        .collect::<Result<Vec<_>, _>>()?;
    log::info!("Generated {} password(s) from the command line", passwords.len());
    Ok(passwords)
}

pub fn render_generated(
    options: &GenerationOptions,
    passwords: &[Password],
    json: bool,
) -> Result<String, Box<dyn Error>> {
    if json {
        let output = GeneratedOutput { options, passwords };
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    Ok(passwords
        .iter()
        .map(Password::as_str)
        .collect::<Vec<_>>()
        .join("\n"))
}
