//! CLI definitions and entry point

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use ccvalidator::output::OutputMode;

/// ccvalidator - Credit card issuer detection and Luhn validation
#[derive(Parser, Debug)]
#[command(
    name = "ccvalidator",
    version,
    about = "Credit card issuer detection and Luhn validation",
    long_about = "Identify the issuing network of credit card numbers and validate them.\n\n\
                  Each input line is matched against issuer prefix and length rules, \
                  then checked with the Luhn checksum."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Issuer definition file (TOML) to register after the built-in issuers
    #[arg(long, global = true, value_name = "PATH")]
    pub issuers: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Identify and validate card numbers
    Check {
        /// Numbers separated by newlines, a file containing them, or - for stdin
        input: String,

        /// Exit with status 1 if any number is invalid
        #[arg(long)]
        strict: bool,
    },

    /// List the registered issuers
    Issuers,

    /// Run the built-in self test against well-known test numbers
    SelfTest,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let issuers = cli.issuers.as_deref();

    match cli.command {
        Some(Command::Check { input, strict }) => commands::check(&input, strict, issuers, output_mode),
        Some(Command::Issuers) => commands::issuers(issuers, output_mode),
        Some(Command::SelfTest) => commands::self_test(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("ccvalidator v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("ccvalidator v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'ccvalidator --help' for usage");
                println!("Run 'ccvalidator check \"4111 1111 1111 1111\"' to validate a number");
            }
            Ok(())
        },
    }
}
