//! # minipoll-report: poll report printer
//!
//! Composition root that wires the storage adapter into the application
//! services and prints the reporting views.
//!
//! ## Responsibilities
//! - Load configuration (`minipoll.toml` plus env overrides)
//! - Initialise `tracing` logging on stderr
//! - Open the `SQLite` database and run migrations
//! - Construct repositories and inject them into the services
//! - Print per-user poll completion and per-question tallies to stdout
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;
mod report;

use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;

use minipoll_adapter_storage_sqlite_sqlx::Config as DatabaseConfig;

use crate::config::Config;
use crate::report::{Report, Services};

fn init_tracing(filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("invalid log filter `{filter}`"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config.logging.filter)?;

    let db = DatabaseConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .context("failed to open database")?;
    tracing::info!(url = config.database_url(), "database ready");

    let services = Services::new(&db);
    let report = Report::collect(&services).await?;

    let mut stdout = std::io::stdout().lock();
    report
        .render(config.report.format, &mut stdout)
        .context("failed to write report")?;

    Ok(())
}
