// src/cli/menu.rs
use inquire::{Confirm, InquireError, Select, Text};
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::{AppState, LoginError, LoginGate};
use crate::models::{Password, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::utils::{format_options, format_saved_entry, truncate_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Login,
    Home,
    Saved,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HomeAction {
    Generate,
    Save,
    ViewSaved,
    Reset,
    Length,
    Uppercase,
    Numbers,
    Symbols,
    Logout,
    Exit,
}

impl HomeAction {
    const ALL: [HomeAction; 10] = [
        HomeAction::Generate,
        HomeAction::Save,
        HomeAction::ViewSaved,
        HomeAction::Reset,
        HomeAction::Length,
        HomeAction::Uppercase,
        HomeAction::Numbers,
        HomeAction::Symbols,
        HomeAction::Logout,
        HomeAction::Exit,
    ];
}

impl fmt::Display for HomeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HomeAction::Generate => "🔐  Generate password",
            HomeAction::Save => "💾  Save password",
            HomeAction::ViewSaved => "📂  View saved passwords",
            HomeAction::Reset => "🔄  Reset password",
            HomeAction::Length => "📏  Set password length",
            HomeAction::Uppercase => "🔠  Toggle uppercase",
            HomeAction::Numbers => "🔢  Toggle numbers",
            HomeAction::Symbols => "🔣  Toggle symbols",
            HomeAction::Logout => "🚪  Log out",
            HomeAction::Exit => "❌  Exit",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SavedAction {
    View,
    Delete,
    DeleteAll,
    Back,
}

impl fmt::Display for SavedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SavedAction::View => "📋  Show a password",
            SavedAction::Delete => "🗑️  Delete a password",
            SavedAction::DeleteAll => "🧹  Delete all",
            SavedAction::Back => "⬅️  Back",
        };
        f.write_str(label)
    }
}

// One row of the saved-passwords picker; carries its index back out of the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
struct SavedChoice {
    index: usize,
    label: String,
}

impl fmt::Display for SavedChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn saved_choices(saved: &[Password]) -> Vec<SavedChoice> {
    saved
        .iter()
        .enumerate()
        .map(|(index, password)| SavedChoice {
            index,
            label: format_saved_entry(index, password),
        })
        .collect()
}

// Ctrl+C inside a prompt ends the session like Exit does
fn interrupted_to_exit(result: Result<Screen, InquireError>) -> Result<Screen, InquireError> {
    match result {
        Err(InquireError::OperationInterrupted) => {
            log::info!("Prompt interrupted. Leaving menu");
            Ok(Screen::Exit)
        }
        other => other,
    }
}

pub fn run_cli_menu(state: &mut AppState, require_login: bool, should_exit: Arc<AtomicBool>) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║    🔐 Welcome to Password Manager    ║");
    println!("╚══════════════════════════════════════╝");

    let mut gate = LoginGate::new();
    let mut screen = if require_login { Screen::Login } else { Screen::Home };

    while !should_exit.load(Ordering::SeqCst) {
        let next = match screen {
            Screen::Login => login_screen(state, &mut gate),
            Screen::Home => home_screen(state, require_login),
            Screen::Saved => saved_screen(state),
            Screen::Exit => break,
        };
        screen = interrupted_to_exit(next)?;
    }

    log::info!("Leaving menu with {} saved password(s) discarded", state.saved().len());
    println!("👋 Goodbye! Saved passwords are not kept after exit.");
    Ok(())
}

fn login_screen(state: &mut AppState, gate: &mut LoginGate) -> Result<Screen, InquireError> {
    let name = match Text::new("Enter your name:").prompt_skippable()? {
        Some(name) => name,
        None => return Ok(Screen::Exit),
    };

    println!("CAPTCHA: {}", gate.captcha());
    let input = match Text::new("Enter CAPTCHA:").prompt_skippable()? {
        Some(input) => input,
        None => return Ok(Screen::Exit),
    };

    match gate.attempt(&name, &input) {
        Ok(identity) => {
            println!("✅ Welcome, {}!", truncate_string(&identity.name, 32));
            state.sign_in(identity);
            Ok(Screen::Home)
        }
        Err(LoginError::MissingName) => {
            println!("❌ {}.", LoginError::MissingName);
            Ok(Screen::Login)
        }
        Err(e) => {
            println!("❌ {}. A new CAPTCHA has been issued.", e);
            Ok(Screen::Login)
        }
    }
}

fn home_screen(state: &mut AppState, require_login: bool) -> Result<Screen, InquireError> {
    println!("\n🔐 Password Generator");
    match state.current() {
        Some(password) => println!("Password: {}", password),
        None => println!("Password: (none generated)"),
    }
    println!("Options: {}", format_options(state.options()));

    let selection = Select::new("Choose an option:", HomeAction::ALL.to_vec())
        .with_help_message("Use arrow keys to navigate, Enter to select, Esc to exit.")
        .with_page_size(HomeAction::ALL.len())
        .prompt_skippable()?;

    let action = match selection {
        Some(action) => action,
        None => return Ok(Screen::Exit),
    };

    match action {
        HomeAction::Generate => match state.generate() {
            Ok(password) => println!("✅ Generated: {}", password),
            Err(e) => println!("❌ {}", e),
        },
        HomeAction::Save => match state.save_current() {
            Ok(()) => println!("✅ Password saved successfully."),
            Err(e) => println!("❌ {}.", e),
        },
        HomeAction::ViewSaved => return Ok(Screen::Saved),
        HomeAction::Reset => {
            state.reset_current();
            println!("🔄 Password has been reset.");
        }
        HomeAction::Length => {
            let prompt = format!("Password length ({}-{}):", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);
            let current = state.options().length.to_string();
            let input = match Text::new(&prompt).with_default(&current).prompt_skippable()? {
                Some(input) => input,
                None => return Ok(Screen::Home),
            };
            match input.trim().parse::<usize>() {
                Ok(length) => {
                    let applied = state.set_length(length);
                    if applied != length {
                        println!("⚠️ Length must be between {} and {}; using {}.", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, applied);
                    }
                }
                Err(_) => println!("❌ '{}' is not a number.", input.trim()),
            }
        }
        HomeAction::Uppercase => {
            state.toggle_uppercase();
        }
        HomeAction::Numbers => {
            state.toggle_digits();
        }
        HomeAction::Symbols => {
            state.toggle_symbols();
        }
        HomeAction::Logout => {
            state.sign_out();
            return Ok(if require_login { Screen::Login } else { Screen::Exit });
        }
        HomeAction::Exit => return Ok(Screen::Exit),
    }

    Ok(Screen::Home)
}

fn saved_screen(state: &mut AppState) -> Result<Screen, InquireError> {
    println!("\n🔒 Saved Passwords");
    if state.saved().is_empty() {
        println!("No passwords saved yet.");
    } else {
        for (index, password) in state.saved().iter().enumerate() {
            println!("{}", format_saved_entry(index, password));
        }
    }

    let actions = vec![SavedAction::View, SavedAction::Delete, SavedAction::DeleteAll, SavedAction::Back];
    let action = match Select::new("Choose an option:", actions).prompt_skippable()? {
        Some(action) => action,
        None => return Ok(Screen::Home),
    };

    match action {
        SavedAction::View => {
            if let Some(index) = pick_saved(state, "Select a password to show:")? {
                if let Some(password) = state.saved().get(index) {
                    println!("📋 {}", password);
                }
            }
        }
        SavedAction::Delete => {
            if let Some(index) = pick_saved(state, "Select a password to delete:")? {
                match state.delete_saved(index) {
                    Ok(_) => println!("✅ Password has been deleted."),
                    Err(e) => println!("❌ {}", e),
                }
            }
        }
        SavedAction::DeleteAll => {
            let confirm = Confirm::new("Delete all saved passwords?")
                .with_default(false)
                .prompt_skippable()?;
            if confirm == Some(true) {
                let removed = state.delete_all_saved();
                println!("✅ Deleted {} saved password(s).", removed);
            }
        }
        SavedAction::Back => return Ok(Screen::Home),
    }

    Ok(Screen::Saved)
}

// Returns the index of the chosen entry, or None when nothing is saved or the prompt was skipped
fn pick_saved(state: &AppState, message: &str) -> Result<Option<usize>, InquireError> {
    if state.saved().is_empty() {
        println!("❗ No passwords saved yet.");
        return Ok(None);
    }

    let choice = Select::new(message, saved_choices(state.saved()))
        .with_page_size(20)
        .prompt_skippable()?;

    Ok(choice.map(|choice| choice.index))
}
