use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::process;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

use passgen_vault::cli::{self, Args, CliCommand};
use passgen_vault::core::config::Config;
use passgen_vault::{logging, AppState, PasswordGenerator};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ {}", e);
        log::error!("Fatal: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (config, config_warnings) = Config::load();

    match logging::init(&config) {
        Ok(()) => {
            for warning in &config_warnings {
                log::warn!("{}", warning);
            }
        }
        Err(e) => {
            eprintln!("⚠️ Logging disabled: {}", e);
            for warning in &config_warnings {
                eprintln!("⚠️ {}", warning);
            }
        }
    }
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let mut generator = match args.seed {
        Some(seed) => {
            log::info!("Using seeded generator");
            PasswordGenerator::with_seed(seed)
        }
        None => PasswordGenerator::new(),
    };

    match args.command {
        Some(CliCommand::Generate { length, uppercase, digits, symbols, count }) => {
            let options = cli::handlers::build_options(config.generation_options(), length, uppercase, digits, symbols);
            let passwords = cli::handlers::handle_generate(&mut generator, &options, usize::from(count))?;
            println!("{}", cli::handlers::render_generated(&options, &passwords, args.json)?);
        }
        Some(CliCommand::Interactive) | None => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                // Prompts catch Ctrl+C themselves while in raw mode; this covers the gaps between them
                ctrlc::set_handler(move || {
                    log::info!("🔴 Ctrl+C received. Shutting down...");
                    should_exit.store(true, Ordering::SeqCst);
                })?;
            }

            let require_login = config.require_captcha && !args.skip_login;
            let mut state = AppState::new(generator, config.generation_options());
            cli::menu::run_cli_menu(&mut state, require_login, should_exit)?;
        }
    }

    Ok(())
}
