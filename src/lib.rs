//! # Inventory - single-user inventory tracker
//!
//! One SQLite table of items, edited through a single terminal window
//! holding an input form, three commands (Add, Update, Delete) and a
//! sortable table.
//!
//! Inventory provides:
//! - `InventoryStore`: per-call SQLite gateway over the `inventory` table
//! - `Form`: text inputs and numeric validation
//! - `App`: toolkit-independent window state (selection, sort, dialog)
//! - `ui`: ratatui rendering and the synchronous event loop

pub mod item;
pub mod storage;
pub mod form;
pub mod app;
pub mod ui;
pub mod config;

// Re-exports for convenient access
pub use item::{Column, InventoryItem, ItemDraft};
pub use storage::InventoryStore;
pub use form::{Field, Form, ValidationError};
pub use app::{App, Command, Focus, SortOrder};

/// Result type alias for inventory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for inventory operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The command was committed but the table could not be read back
    #[error("Saved, but reloading the table failed: {0}")]
    Reload(#[source] Box<Error>),

    #[error("Stylesheet error: {0}")]
    Stylesheet(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_transparent() {
        let err: Error = ValidationError::NameRequired.into();
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn test_storage_error_display() {
        let err: Error = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(err.to_string().starts_with("Storage error:"));
    }
}
