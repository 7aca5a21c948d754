//! Admin dashboard statistics.

use serde::{Deserialize, Serialize};
use yom_kitchen_core::{Money, OrderStatus};

/// Response of `GET /admin/stats`. The dashboard endpoint speaks camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub pending_orders: u64,
    #[serde(default)]
    pub revenue_today: Money,
    #[serde(default)]
    pub total_clients: u64,
    #[serde(default)]
    pub total_menus: u64,
    #[serde(default)]
    pub orders_by_status: Vec<StatusCount>,
}

/// Number of orders in one status bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "totalOrders": 12,
            "pendingOrders": 3,
            "revenueToday": 145.5,
            "totalClients": 8,
            "totalMenus": 20,
            "ordersByStatus": [{"status": "Pending", "count": 3}]
        }"#;

        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_orders, 12);
        assert_eq!(stats.revenue_today, "145.50".parse().unwrap());
        assert_eq!(stats.orders_by_status[0].status, OrderStatus::Pending);
    }
}
