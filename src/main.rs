//! Dicepass CLI
//!
//! Prints Diceware numbers (and optionally words) on stdout; all
//! diagnostics and logs go to stderr.

use clap::{CommandFactory, Parser};
use dicepass::cli::Cli;
use dicepass::dictionary::Dictionary;
use dicepass::{entropy, output};
use tracing::info;

fn main() {
    // Initialize logging to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // All fallible work happens inside run() so destructors (the TPM
    // context in particular) release their handles before the exit.
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", Cli::command().render_help());
            return 1;
        }
    };

    let dictionary = match &config.dictionary {
        Some(path) => match Dictionary::load(path) {
            Ok(dictionary) => Some(dictionary),
            Err(e) => {
                eprintln!("Error loading dictionary: {}", e);
                return 1;
            }
        },
        None => None,
    };

    let mut source = match entropy::open(config.source) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error opening entropy source: {}", e);
            return 1;
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match output::run(&config, source.as_mut(), dictionary.as_ref(), &mut out) {
        Ok(summary) => {
            info!(
                rolls = summary.rolls,
                matched = summary.words_matched,
                "done"
            );
            0
        }
        Err(e) => {
            eprintln!("Error generating Diceware number: {}", e);
            1
        }
    }
}
