//! Input form - the four text fields and their validation

use crate::item::{InventoryItem, ItemDraft};

/// Reasons a command is refused before it reaches storage.
///
/// The `Display` text is what the error dialog shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Invalid Quantity or Price")]
    InvalidNumber,

    #[error("No item selected")]
    NoSelection,
}

/// The editable text inputs, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Category,
    Quantity,
    Price,
}

impl Field {
    /// Get all fields in focus order
    pub fn all() -> &'static [Field] {
        &[Field::Name, Field::Category, Field::Quantity, Field::Price]
    }

    /// Hint shown while the input is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Item Name",
            Field::Category => "Category",
            Field::Quantity => "Quantity",
            Field::Price => "Price",
        }
    }
}

/// Current text of the four inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
}

impl Form {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Category => &self.category,
            Field::Quantity => &self.quantity,
            Field::Price => &self.price,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Category => &mut self.category,
            Field::Quantity => &mut self.quantity,
            Field::Price => &mut self.price,
        }
    }

    /// Replace every input with the fields of a selected row
    pub fn fill_from(&mut self, item: &InventoryItem) {
        self.name = item.name.clone();
        self.category = item.category.clone();
        self.quantity = item.quantity.to_string();
        self.price = price_text(item.price);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::all().iter().all(|f| self.get(*f).is_empty())
    }

    /// Draft for the Add command: name required, numbers parsed.
    pub fn to_new_item(&self) -> Result<ItemDraft, ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        self.to_draft()
    }

    /// Draft for the Update command: only the numbers are checked.
    pub fn to_draft(&self) -> Result<ItemDraft, ValidationError> {
        Ok(ItemDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            quantity: parse_quantity(&self.quantity)?,
            price: parse_price(&self.price)?,
        })
    }
}

/// Parse quantity text; blank means zero.
pub fn parse_quantity(text: &str) -> Result<i64, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0);
    }
    text.parse().map_err(|_| ValidationError::InvalidNumber)
}

/// Parse price text; blank means zero. Infinities and NaN are rejected.
pub fn parse_price(text: &str) -> Result<f64, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0.0);
    }
    match text.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(ValidationError::InvalidNumber),
    }
}

/// Price as form text. Always parses back to the same value and keeps a
/// decimal point on whole numbers ("3.0", not "3").
pub fn price_text(price: f64) -> String {
    format!("{:?}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, category: &str, quantity: &str, price: &str) -> Form {
        Form {
            name: name.to_string(),
            category: category.to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let draft = form("Widget", "Tools", "5", "9.99").to_new_item().unwrap();
        assert_eq!(draft, ItemDraft::new("Widget", "Tools", 5, 9.99));
    }

    #[test]
    fn test_blank_numbers_are_zero() {
        let draft = form("Widget", "", "", " ").to_new_item().unwrap();
        assert_eq!(draft.quantity, 0);
        assert_eq!(draft.price, 0.0);
    }

    #[test]
    fn test_name_required_for_new_item() {
        assert_eq!(
            form("", "Tools", "1", "1").to_new_item(),
            Err(ValidationError::NameRequired)
        );
        // Update keeps whatever name is typed, including none
        assert!(form("", "Tools", "1", "1").to_draft().is_ok());
    }

    #[test]
    fn test_invalid_numbers() {
        assert_eq!(parse_quantity("abc"), Err(ValidationError::InvalidNumber));
        assert_eq!(parse_quantity("1.5"), Err(ValidationError::InvalidNumber));
        assert_eq!(parse_price("1,50"), Err(ValidationError::InvalidNumber));
        assert_eq!(parse_price("inf"), Err(ValidationError::InvalidNumber));
        assert_eq!(parse_price("NaN"), Err(ValidationError::InvalidNumber));
        assert_eq!(
            form("Widget", "", "2", "x").to_new_item(),
            Err(ValidationError::InvalidNumber)
        );
    }

    #[test]
    fn test_signed_and_padded_numbers() {
        assert_eq!(parse_quantity(" -3 "), Ok(-3));
        assert_eq!(parse_quantity("+7"), Ok(7));
        assert_eq!(parse_price("1e2"), Ok(100.0));
    }

    #[test]
    fn test_fill_from_round_trips_price() {
        let item = InventoryItem {
            id: 1,
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            quantity: 5,
            price: 3.0,
        };
        let mut f = Form::default();
        f.fill_from(&item);
        assert_eq!(f, form("Widget", "Tools", "5", "3.0"));
        assert_eq!(f.to_draft().unwrap(), item.draft());

        f.clear();
        assert!(f.is_empty());
    }
}
