// this_file: fontindex/src/main.rs
//
// fontindex - build a searchable index of the Google Fonts catalog

use clap::Parser;
use fontindex::cli::{self, Cli};
use std::process;

fn main() {
    // Settings may come from a .env file; the real environment wins
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = cli::execute(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
