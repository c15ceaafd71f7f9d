//! Seeds the ledger database.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed -- development
//! ```
//!
//! The single argument names the assembly to activate (`development` when
//! omitted). `DATABASE_URL` overrides the connection string.

use seed_data::assembly::{self, Assembly};
use seed_data::config::SeedConfig;
use seed_data::db::DbHandle;
use seed_data::seeders::SeedError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let profile = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "development".to_string());

    // Reject unknown assembly names before touching the database.
    let compose = match profile.as_str() {
        "common" => assembly::common as fn(&DbHandle) -> Assembly,
        "development" => assembly::development,
        other => return Err(SeedError::UnknownAssembly(other.to_string()).into()),
    };

    let config = SeedConfig::from_env();
    let db = DbHandle::connect(&config).await?;

    let result = compose(&db).activate().await;
    db.close().await;
    let report = result?;

    tracing::info!("Seed completed!");
    for unit in &report.units {
        tracing::info!(
            "  {}: {} rows in {:?}",
            unit.name,
            unit.rows_written,
            unit.elapsed
        );
    }
    tracing::info!("  Total: {} rows", report.total_rows());

    Ok(())
}
