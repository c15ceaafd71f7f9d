//! Database seeding for the ledger application.
//!
//! Populates a Postgres database with currency reference data and, for
//! development environments, a fixed fake user. Seeding is organized as
//! assemblies: ordered lists of one-shot seed units, built by explicit
//! composition functions and run to completion in registration order.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = SeedConfig::from_env();
//! let db = DbHandle::connect(&config).await?;
//! let report = development(&db).activate().await?;
//! db.close().await;
//! ```

pub mod assembly;
pub mod config;
pub mod data;
pub mod db;
pub mod factories;
pub mod seeders;

// Re-export the row types seeding produces
pub use ledger::models::{Currency, Role, User};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::assembly::{Assembly, AssemblyReport, UnitReport, common, development};
    pub use crate::config::SeedConfig;
    pub use crate::data::CURRENCIES;
    pub use crate::db::DbHandle;
    pub use crate::factories::UserFactory;
    pub use crate::seeders::{CurrencySeeder, SeedError, SeedUnit, UserSeeder};
    pub use crate::{Currency, Role, User};
}
