//! Currency reference data seeding.

use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use super::{SeedError, SeedUnit};
use crate::data::CURRENCIES;

/// Seeds the `currencies` table from a static code/name table.
///
/// Inserts are plain and strictly sequential: the table is assumed empty,
/// and the first duplicate code aborts the run with the database's own
/// uniqueness error. There is no batching and no duplicate check.
pub struct CurrencySeeder {
    pool: PgPool,
    entries: &'static [(&'static str, &'static str)],
}

impl CurrencySeeder {
    /// Creates a seeder over the built-in [`CURRENCIES`] table.
    pub fn new(pool: PgPool) -> Self {
        Self::with_entries(pool, CURRENCIES)
    }

    /// Creates a seeder over a custom code/name table.
    pub fn with_entries(pool: PgPool, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { pool, entries }
    }
}

#[async_trait]
impl SeedUnit for CurrencySeeder {
    fn name(&self) -> &'static str {
        "currencies"
    }

    async fn seed(&self) -> Result<u64, SeedError> {
        info!("Seeding {} currencies...", self.entries.len());

        for &(code, name) in self.entries {
            sqlx::query(
                r#"
                INSERT INTO currencies (id, code, name, created_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(code)
            .bind(name)
            .bind(OffsetDateTime::now_utc())
            .execute(&self.pool)
            .await?;
        }

        info!("Seeded {} currencies", self.entries.len());
        Ok(self.entries.len() as u64)
    }
}
