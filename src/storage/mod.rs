//! Storage Layer - SQLite-backed persistence
//!
//! One table:
//! - inventory(id, name, category, quantity, price)
//!
//! Every gateway call opens its own connection and runs a single
//! auto-committed statement.

pub mod schema;
pub mod sqlite;

pub use sqlite::InventoryStore;
