//! The development assembly: common data plus local fixtures.

use super::{Assembly, common};
use crate::db::DbHandle;
use crate::factories::UserFactory;
use crate::seeders::UserSeeder;

/// Builds the development assembly.
///
/// Includes [`common`] first, so reference data lands before fixtures. The
/// user seeder receives its factory fully constructed, as a plain
/// constructor argument.
pub fn development(db: &DbHandle) -> Assembly {
    let factory = UserFactory::new(db.pool().clone());

    Assembly::new("development")
        .include(common(db))
        .register(UserSeeder::new(db.pool().clone(), factory))
}
