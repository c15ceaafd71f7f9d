//! Development user fixture seeding.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use super::{SeedError, SeedUnit};
use crate::factories::UserFactory;

/// Resets the `users` table and inserts the fixed development user.
///
/// The delete is unconditional, so every activation starts from an empty
/// user table. That makes this unit idempotent by destructive reset, and it
/// is the only such mitigation in the seeding system.
pub struct UserSeeder {
    pool: PgPool,
    factory: UserFactory,
}

impl UserSeeder {
    /// The factory arrives fully constructed; it is owned here and is never
    /// registered as a unit of its own.
    pub fn new(pool: PgPool, factory: UserFactory) -> Self {
        Self { pool, factory }
    }
}

#[async_trait]
impl SeedUnit for UserSeeder {
    fn name(&self) -> &'static str {
        "users"
    }

    async fn seed(&self) -> Result<u64, SeedError> {
        info!("Seeding users...");

        let deleted = sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await?
            .rows_affected();
        if deleted > 0 {
            info!("Deleted {} existing users", deleted);
        }

        let user = self.factory.create().await?;

        info!("Seeded user {}", user.email);
        Ok(1)
    }
}
