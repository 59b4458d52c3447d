//! Interactive player ratings search.
//!
//! Loads the player, rating and tag CSV files, builds the indices once, then
//! answers `player`, `user`, `top` and `tags` queries read from stdin.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use scoutdex::core::config::Config;
use scoutdex::ingest;
use scoutdex::search::engine::QueryEngine;
use scoutdex::session::session::Session;

#[derive(Parser)]
#[command(name = "scoutdex")]
#[command(about = "Index player ratings and query them interactively")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Player CSV file
    #[arg(long)]
    players: Option<PathBuf>,

    /// Rating CSV file
    #[arg(long)]
    ratings: Option<PathBuf>,

    /// Tag CSV file
    #[arg(long)]
    tags: Option<PathBuf>,

    /// Treat the first row of every CSV file as data
    #[arg(long)]
    no_headers: bool,

    /// Bucket count of the player hash index
    #[arg(long)]
    player_table_size: Option<usize>,

    /// Bucket count of the user hash index
    #[arg(long)]
    user_table_size: Option<usize>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG wins when set
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.players {
            config.players_path = path.clone();
        }
        if let Some(path) = &self.ratings {
            config.ratings_path = path.clone();
        }
        if let Some(path) = &self.tags {
            config.tags_path = path.clone();
        }
        if self.no_headers {
            config.has_headers = false;
        }
        if let Some(size) = self.player_table_size {
            config.player_table_size = size;
        }
        if let Some(size) = self.user_table_size {
            config.user_table_size = size;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    let (indices, report) = ingest::load(&config)?;
    info!(
        players = report.players,
        users = report.users,
        ratings = report.ratings,
        tags = report.tags,
        elapsed_ms = report.elapsed_ms,
        "build finished"
    );

    let engine = QueryEngine::new(&indices, &config);
    let mut session = Session::new(engine);
    if !io::stdin().is_terminal() {
        session = session.without_prompt();
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session.run(stdin.lock(), &mut stdout)?;

    Ok(())
}
