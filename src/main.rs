use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use colored::Colorize;
use gh_issue::cli::Cli;
use log::{debug, error, LevelFilter};

/// A missing `.env` is fine, a malformed one is not.
fn load_dotenv() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(anyhow!("Error loading .env file: {}", err)),
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

async fn run() -> Result<()> {
    // must happen before clap reads GITHUB_PAT and GITHUB_API_URL
    let dotenv = load_dotenv();
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match dotenv? {
        Some(path) => debug!("Loaded {}", path.display()),
        None => debug!("No .env file found"),
    }

    gh_issue::commands::run(cli).await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        error!("{:?}", err);
        eprintln!("{}: {}", "Error".red().bold(), err);
        std::process::exit(1);
    }
}
