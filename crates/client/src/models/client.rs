//! Restaurant client (customer) shapes.

use serde::{Deserialize, Serialize};
use yom_kitchen_core::{ClientId, Passcode};

/// A registered customer of the restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Lookup passcode issued to the customer. Only present on admin reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passcode: Option<Passcode>,
}

/// Payload for creating or updating a client via the admin API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passcode: Option<Passcode>,
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_client() {
        let client: Client = serde_json::from_str(r#"{"id":3,"name":"Abebe"}"#).unwrap();
        assert!(client.is_active);
        assert_eq!(client.passcode, None);
    }

    #[test]
    fn test_passcode_validated_on_receipt() {
        let result =
            serde_json::from_str::<Client>(r#"{"id":3,"name":"Abebe","passcode":"has space"}"#);
        assert!(result.is_err());
    }
}
