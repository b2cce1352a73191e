//! Database schema definitions

/// Name of the only table
pub const INVENTORY_TABLE: &str = "inventory";

/// SQL to create the inventory table.
///
/// `AUTOINCREMENT` keeps deleted ids from ever being handed out again.
pub const CREATE_INVENTORY_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS inventory (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    category TEXT,
    quantity INTEGER DEFAULT 0,
    price REAL DEFAULT 0.0
)
"#;

/// Column list shared by every SELECT
pub const ITEM_COLUMNS: &str = "id, name, category, quantity, price";

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_INVENTORY_TABLE]
}
