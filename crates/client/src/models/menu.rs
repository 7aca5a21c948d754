//! Menu item shapes.

use serde::{Deserialize, Serialize};
use yom_kitchen_core::{LineInput, MenuItemId, Money};

/// A dish on the menu, as returned by `GET /client/menus`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    pub price: Money,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_true")]
    pub available: bool,
}

impl MenuItem {
    /// Capture this item as a cart line input, at its current price.
    #[must_use]
    pub fn to_line(&self, quantity: u32) -> LineInput {
        LineInput {
            menu_item_id: self.id,
            item_name: self.name.clone(),
            unit_price: self.price,
            quantity,
        }
    }
}

/// Payload for creating or updating a menu item via the admin API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    pub price: Money,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_true")]
    pub available: bool,
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_item_defaults_available() {
        let item: MenuItem =
            serde_json::from_str(r#"{"id":1,"name":"Injera","price":5.0}"#).unwrap();
        assert!(item.available);
        assert_eq!(item.desc, None);
    }

    #[test]
    fn test_to_line_captures_price_at_add_time() {
        let item: MenuItem = serde_json::from_str(
            r#"{"id":1,"name":"Injera","price":5.0,"category":"Mains","available":true}"#,
        )
        .unwrap();

        let line = item.to_line(2);
        assert_eq!(line.menu_item_id, MenuItemId::new(1));
        assert_eq!(line.item_name, "Injera");
        assert_eq!(line.unit_price, "5.00".parse().unwrap());
        assert_eq!(line.quantity, 2);
    }
}
