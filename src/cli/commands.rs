//! CLI command implementations

use std::path::Path;

use diesel::{Connection, SqliteConnection};
use tracing::info;

use crate::config::Config;
use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::store::{self, SeedData, SeedReport, Store, StoreError};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Seed { config, file } => seed(&config, file.as_deref()).map(|_| ()),
        Command::Start { config } => start(&config),
    }
}

/// Load `.env`, the config file, and install logging
fn boot(config_path: &Path) -> CliResult<Config> {
    dotenvy::dotenv().ok();
    let config = Config::load(config_path)?;
    init_logging(&config.logging);
    Ok(config)
}

/// Create the database tables
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = boot(config_path)?;
    Store::open(&config.database_url, config.pool_size)?;
    info!(database_url = %config.database_url, "database initialized");
    Ok(())
}

/// Load seed data into the database
pub fn seed(config_path: &Path, file: Option<&Path>) -> CliResult<SeedReport> {
    let config = boot(config_path)?;
    let data = match file {
        Some(path) => SeedData::load(path)?,
        None => SeedData::builtin()?,
    };

    let store = Store::open(&config.database_url, config.pool_size)?;
    let mut pooled = store.pool().get().map_err(StoreError::from)?;
    let conn: &mut SqliteConnection = &mut pooled;

    let report = conn.transaction(|conn| store::seed(conn, &data))?;
    println!(
        "Seeded {} categories and {} questions",
        report.categories, report.questions
    );
    Ok(report)
}

/// Start the HTTP API
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = boot(config_path)?;
    let store = Store::open(&config.database_url, config.pool_size)?;
    let server = HttpServer::with_config(config.http.clone(), store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}
