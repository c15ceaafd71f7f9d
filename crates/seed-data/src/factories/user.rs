//! The development user factory.

use ledger::models::{Role, User};
use sqlx::PgPool;
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

use crate::data::fixtures;
use crate::seeders::SeedError;

/// Inserts the fixed development user and returns the created row.
///
/// Stateless between calls: invoking [`UserFactory::create`] twice without
/// an intervening delete fails on the unique email constraint.
pub struct UserFactory {
    pool: PgPool,
}

impl UserFactory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the fixture user.
    pub async fn create(&self) -> Result<User, SeedError> {
        debug!("Creating fixture user {}", fixtures::USER_EMAIL);

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, firstname, lastname, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, email, firstname, lastname, password_hash, role, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(fixtures::USER_EMAIL)
        .bind(fixtures::USER_FIRSTNAME)
        .bind(fixtures::USER_LASTNAME)
        .bind(fixtures::USER_PASSWORD_HASH)
        .bind(Role::User)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}
