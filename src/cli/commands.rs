// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the login, generator and saved-passwords screens
    Interactive,

    /// Generate passwords and print them
    Generate {
        /// Password length (6-20)
        #[arg(long, short, value_parser = clap::value_parser!(u8).range(6..=20))]
        length: Option<u8>,

        /// Include uppercase letters
        #[arg(long, short)]
        uppercase: bool,

        /// Include digits 0-9
        #[arg(long, short)]
        digits: bool,

        /// Include symbols
        #[arg(long, short)]
        symbols: bool,

        /// How many passwords to print (1-1000)
        #[arg(long, short = 'n', default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=1000))]
        count: u16,
    },
}
