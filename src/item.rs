//! Item types - the single persisted record and its editable fields

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One row of the `inventory` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Surrogate key assigned by storage, never reused
    pub id: i64,
    pub name: String,
    /// May be empty
    pub category: String,
    pub quantity: i64,
    pub price: f64,
}

impl InventoryItem {
    /// The user-editable part of this item
    pub fn draft(&self) -> ItemDraft {
        ItemDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            quantity: self.quantity,
            price: self.price,
        }
    }
}

/// Field values for an insert or an overwrite; everything except the id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
}

impl ItemDraft {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i64,
        price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity,
            price,
        }
    }
}

/// Table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Name,
    Category,
    Quantity,
    Price,
}

impl Column {
    /// Header title shown in the table
    pub fn title(&self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Name => "Name",
            Column::Category => "Category",
            Column::Quantity => "Quantity",
            Column::Price => "Price",
        }
    }

    /// Get all columns in display order
    pub fn all() -> &'static [Column] {
        &[
            Column::Id,
            Column::Name,
            Column::Category,
            Column::Quantity,
            Column::Price,
        ]
    }

    /// Column at a zero-based display position
    pub fn from_index(index: usize) -> Option<Column> {
        Self::all().get(index).copied()
    }

    /// Compare two items on this column. Text compares case-insensitively.
    pub fn compare(&self, a: &InventoryItem, b: &InventoryItem) -> Ordering {
        match self {
            Column::Id => a.id.cmp(&b.id),
            Column::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Column::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
            Column::Quantity => a.quantity.cmp(&b.quantity),
            Column::Price => a.price.total_cmp(&b.price),
        }
    }

    /// Cell text for this column
    pub fn cell(&self, item: &InventoryItem) -> String {
        match self {
            Column::Id => item.id.to_string(),
            Column::Name => item.name.clone(),
            Column::Category => item.category.clone(),
            Column::Quantity => item.quantity.to_string(),
            Column::Price => format!("{:.2}", item.price),
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str, price: f64) -> InventoryItem {
        InventoryItem {
            id,
            name: name.to_string(),
            category: String::new(),
            quantity: 0,
            price,
        }
    }

    #[test]
    fn test_column_order_and_titles() {
        let titles: Vec<_> = Column::all().iter().map(Column::title).collect();
        assert_eq!(titles, ["ID", "Name", "Category", "Quantity", "Price"]);
        assert_eq!(Column::from_index(4), Some(Column::Price));
        assert_eq!(Column::from_index(5), None);
    }

    #[test]
    fn test_name_compare_ignores_case() {
        let a = item(1, "apple", 0.0);
        let b = item(2, "Banana", 0.0);
        assert_eq!(Column::Name.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_price_cell_has_two_decimals() {
        assert_eq!(Column::Price.cell(&item(1, "x", 9.5)), "9.50");
        assert_eq!(Column::Price.compare(&item(1, "x", 1.0), &item(2, "y", 0.5)), Ordering::Greater);
    }
}
