//! Database connection ownership for seeding runs.
//!
//! The [`DbHandle`] owns the one pool every seed unit shares. Units clone
//! the pool out of it at construction time; nothing reaches for an ambient
//! or global connection.

mod handle;

pub use handle::DbHandle;
