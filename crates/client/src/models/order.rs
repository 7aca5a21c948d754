//! Order shapes: submission payloads and server-side order records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use yom_kitchen_core::{CartLine, ClientId, Money, OrderId, OrderStatus, Passcode};

use super::Client;

/// Payload for `POST /client/orders`: the checkout submission.
///
/// Lines are echoed with their client-side subtotals for display, but the
/// authoritative total is whatever the server computes and accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSubmission {
    pub passcode: Passcode,
    pub order_items: Vec<CartLine>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A submitted order, as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// The backend emits this field as `ID`.
    #[serde(alias = "ID")]
    pub id: OrderId,
    pub client: Client,
    pub order_date: DateTime<Utc>,
    pub order_items: Vec<CartLine>,
    pub total_amount: Money,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Payload for creating an order on a client's behalf via the admin API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub client_id: ClientId,
    pub order_date: DateTime<Utc>,
    pub order_items: Vec<CartLine>,
    pub total_amount: Money,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_order_accepts_uppercase_id_alias() {
        let json = r#"{
            "ID": 7,
            "client": {"id": 3, "name": "Abebe"},
            "order_date": "2025-03-01T12:30:00Z",
            "order_items": [
                {"menu_item_id": 1, "item_name": "Injera", "item_price": 5.0,
                 "quantity": 2, "subtotal": 10.0}
            ],
            "total_amount": 10.0,
            "status": "Pending",
            "notes": "no berbere"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, OrderId::new(7));
        assert_eq!(order.order_items[0].quantity, 2);
        assert_eq!(order.total_amount, "10.00".parse().unwrap());
    }

    #[test]
    fn test_order_status_defaults_to_pending() {
        let json = r#"{
            "id": 1,
            "client": {"id": 3, "name": "Abebe"},
            "order_date": "2025-03-01T12:30:00Z",
            "order_items": [],
            "total_amount": 0
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_submission_wire_shape() {
        let submission = OrderSubmission {
            passcode: "1234".parse().unwrap(),
            order_items: Vec::new(),
            notes: Some("ring the bell".to_owned()),
        };

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["passcode"], "1234");
        assert_eq!(value["notes"], "ring the bell");
        assert!(value["order_items"].as_array().unwrap().is_empty());
    }
}
