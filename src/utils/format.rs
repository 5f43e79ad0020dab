// src/utils/format.rs
use crate::models::{GenerationOptions, Password};

// Truncate a string if it's too long
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

pub fn format_saved_entry(index: usize, password: &Password) -> String {
    format!("{:>3}. {}", index + 1, password)
}

pub fn format_options(options: &GenerationOptions) -> String {
    let flag = |on: bool| if on { "on" } else { "off" };
    format!(
        "length {} | uppercase {} | numbers {} | symbols {}",
        options.length,
        flag(options.include_uppercase),
        flag(options.include_digits),
        flag(options.include_symbols)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_long_strings() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("abcdefghijkl", 8), "abcde...");
    }

    #[test]
    fn entries_are_one_based() {
        assert_eq!(format_saved_entry(0, &Password::from("pw")), "  1. pw");
    }

    #[test]
    fn options_summary() {
        let options = GenerationOptions { include_digits: true, ..GenerationOptions::default() };
        assert_eq!(format_options(&options), "length 12 | uppercase off | numbers on | symbols off");
    }
}
