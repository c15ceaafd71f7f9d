//! The owned database handle.

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::SeedConfig;
use crate::seeders::SeedError;

/// Owns the single Postgres pool for the lifetime of a seeding run.
///
/// Connection failure is terminal: there is no retry or reconnect. A run
/// either gets its pool at startup or aborts before any seeding executes.
pub struct DbHandle {
    pool: PgPool,
}

impl DbHandle {
    /// Connects to the database described by `config`.
    pub async fn connect(config: &SeedConfig) -> Result<Self, SeedError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.database_url)
            .await?;

        info!("Connected to database");

        Ok(Self { pool })
    }

    /// Wraps an existing pool. Used by callers that manage their own
    /// connection, such as the integration tests.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The shared client surface seed units clone from.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Teardown hook: releases the connection pool.
    pub async fn close(self) {
        self.pool.close().await;
        info!("Database handle closed");
    }
}
