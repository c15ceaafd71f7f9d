//! Seed units: one-shot writers of initial data.
//!
//! Construction and execution are separate phases. Composition functions in
//! [`crate::assembly`] build units with plain constructors, wiring every
//! dependency through constructor arguments; an assembly's `activate` later
//! drives each unit's [`SeedUnit::seed`] to completion. Constructing a unit
//! must have no side effects.

mod currencies;
mod users;

pub use currencies::CurrencySeeder;
pub use users::UserSeeder;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Unknown assembly: {0}")]
    UnknownAssembly(String),
}

/// A unit of seeding work, run exactly once by its owning assembly.
#[async_trait]
pub trait SeedUnit: Send + Sync {
    /// Stable name; also the unit's identity within one activation.
    fn name(&self) -> &'static str;

    /// Writes this unit's data, returning the number of rows written.
    ///
    /// Errors are terminal for the whole run. Implementations do not catch
    /// or translate database failures.
    async fn seed(&self) -> Result<u64, SeedError>;
}
