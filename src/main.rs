// src/main.rs

use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use bookshelf::application::AppState;
use bookshelf::cli::Session;
use bookshelf::config::{AppConfig, DATABASE_ENV};
use bookshelf::repositories::JsonFileBookRepository;
use bookshelf::services::CatalogService;

#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about = "Console book catalog")]
struct Args {
    /// Path to the JSON book store
    #[arg(short, long, env = DATABASE_ENV)]
    database: Option<PathBuf>,

    /// Fail instead of creating the store when it is missing
    #[arg(long)]
    no_init: bool,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // 1. CONFIGURATION
    let config = AppConfig::resolve(args.database, !args.no_init)?;
    let path = config.database_path.clone();

    // 2. STORE
    let repo = Arc::new(JsonFileBookRepository::new(&path));
    if config.initialize_store && repo.initialize()? {
        log::info!("Created empty book store at {}", path.display());
    }

    // 3. CATALOG (a malformed store is fatal here)
    let catalog = CatalogService::load(repo)
        .with_context(|| format!("Failed to load book store {}", path.display()))?;

    // 4. CONSOLE
    let mut state = AppState::new(catalog);
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock())
        .run(&mut state)
        .context("Console session aborted")?;

    Ok(())
}
