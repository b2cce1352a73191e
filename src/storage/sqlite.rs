//! SQLite storage implementation

use std::path::{Path, PathBuf};
use rusqlite::{Connection, OptionalExtension, Row, params};
use crate::Result;
use crate::item::{InventoryItem, ItemDraft};
use super::schema;

/// SQLite-backed gateway for inventory items.
///
/// Holds only the database path. No connection is kept between calls, so
/// the file can be inspected or replaced while the window is open.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    path: PathBuf,
}

impl InventoryStore {
    /// Create a gateway for a database file without touching the disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open a database file (creates file and table if they don't exist)
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(path);
        store.initialize()?;
        Ok(store)
    }

    /// Path of the backing database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Create the backing file and the inventory table. Safe to call on
    /// every start.
    pub fn initialize(&self) -> Result<()> {
        let conn = self.connect()?;
        for stmt in schema::all_schema_statements() {
            conn.execute(stmt, [])?;
        }
        tracing::debug!("Initialized {:?}", self.path);
        Ok(())
    }

    // ========== Item Operations ==========

    /// Insert a new item and return the id storage assigned to it
    pub fn add(&self, draft: &ItemDraft) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO inventory (name, category, quantity, price) VALUES (?1, ?2, ?3, ?4)",
            params![draft.name, draft.category, draft.quantity, draft.price],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// All items in storage scan order
    pub fn list(&self) -> Result<Vec<InventoryItem>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM {}",
            schema::ITEM_COLUMNS,
            schema::INVENTORY_TABLE
        ))?;

        let items = stmt
            .query_map([], row_to_item)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(items)
    }

    /// Get a single item by id
    pub fn get(&self, id: i64) -> Result<Option<InventoryItem>> {
        let conn = self.connect()?;
        conn.query_row(
            &format!(
                "SELECT {} FROM {} WHERE id = ?1",
                schema::ITEM_COLUMNS,
                schema::INVENTORY_TABLE
            ),
            [id],
            row_to_item,
        )
        .optional()
        .map_err(Into::into)
    }

    /// Overwrite every field of an item. Returns `false` when no row has
    /// this id; that case is not an error.
    pub fn update(&self, id: i64, draft: &ItemDraft) -> Result<bool> {
        let conn = self.connect()?;
        let changed = conn.execute(
            r#"
            UPDATE inventory
            SET name = ?1, category = ?2, quantity = ?3, price = ?4
            WHERE id = ?5
            "#,
            params![draft.name, draft.category, draft.quantity, draft.price, id],
        )?;
        Ok(changed > 0)
    }

    /// Remove an item. Returns `false` when no row has this id.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.connect()?;
        let changed = conn.execute("DELETE FROM inventory WHERE id = ?1", [id])?;
        Ok(changed > 0)
    }

    /// Number of stored items
    pub fn count(&self) -> Result<usize> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM inventory", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

// Files written by other tools may hold NULLs in the optional columns.
fn row_to_item(row: &Row<'_>) -> rusqlite::Result<InventoryItem> {
    Ok(InventoryItem {
        id: row.get(0)?,
        name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        category: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        quantity: row.get::<_, Option<i64>>(3)?.unwrap_or(0),
        price: row.get::<_, Option<f64>>(4)?.unwrap_or(0.0),
    })
}
