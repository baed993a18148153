//! Shop settings as served by the backend settings endpoint.

use serde::{Deserialize, Serialize};

/// Backend-owned shop configuration.
///
/// The shape is owned by the backend and consumed read-only; only the fields
/// the storefront actually reads are typed, everything else is preserved
/// opaquely in `extra` so a round-trip does not lose data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopSettings {
    /// Contact channels for the shop.
    #[serde(default)]
    pub contact_info: ContactInfo,
    /// Fields the storefront does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Contact channels advertised by the shop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// WhatsApp phone number, in whatever formatting the merchant entered.
    /// Absent when the shop has not configured WhatsApp contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    /// Fields the storefront does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
