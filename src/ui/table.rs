//! `tabled` rendering of stored items for `inventory list`

use crate::item::InventoryItem;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct ItemRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Quantity")]
    pub quantity: i64,
    #[tabled(rename = "Price")]
    pub price: String,
}

impl From<&InventoryItem> for ItemRow {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            category: item.category.clone(),
            quantity: item.quantity,
            price: format!("{:.2}", item.price),
        }
    }
}

/// Render items as a rounded table; empty string when there are none
pub fn items_table(items: &[InventoryItem]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let rows: Vec<ItemRow> = items.iter().map(ItemRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}
