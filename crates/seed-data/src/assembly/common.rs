//! The common assembly: reference data every environment needs.

use super::Assembly;
use crate::db::DbHandle;
use crate::seeders::CurrencySeeder;

/// Builds the assembly shared by all environments.
pub fn common(db: &DbHandle) -> Assembly {
    Assembly::new("common").register(CurrencySeeder::new(db.pool().clone()))
}
