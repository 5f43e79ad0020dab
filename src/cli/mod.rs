// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print generated passwords as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Seed the generator for reproducible output
    #[arg(long, env = "PASSGEN_SEED")]
    pub seed: Option<u64>,

    /// Skip the CAPTCHA login screen
    #[arg(long)]
    pub skip_login: bool,

    /// Command to execute (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
