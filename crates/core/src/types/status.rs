//! Order status values.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a submitted order.
///
/// The wire representation uses the capitalized words the kitchen dashboard
/// displays (`"Pending"`, `"Accepted"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Submitted, not yet acknowledged by the kitchen.
    #[default]
    Pending,
    /// Acknowledged and being prepared.
    Accepted,
    /// Ready for pickup or delivery.
    Ready,
    /// Handed to the customer.
    Delivered,
    /// Cancelled by the kitchen or the customer.
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in dashboard display order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Accepted,
        Self::Ready,
        Self::Delivered,
        Self::Cancelled,
    ];
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Accepted => write!(f, "Accepted"),
            Self::Ready => write!(f, "Ready"),
            Self::Delivered => write!(f, "Delivered"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Accepted" => Ok(Self::Accepted),
            "Ready" => Ok(Self::Ready),
            "Delivered" => Ok(Self::Delivered),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}
