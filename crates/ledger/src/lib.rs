//! Core domain types for the ledger application.
//!
//! Row structs map one-to-one onto database tables and derive [`sqlx::FromRow`]
//! so queries can decode them directly.

pub mod models;
