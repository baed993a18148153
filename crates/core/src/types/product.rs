//! Catalog product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product as served by the backend API.
///
/// Pure record - no behavior. The `id` is backend-owned and unique across
/// the catalog; it is also the identity used for cart deduplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend-owned unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Current price. Non-negative.
    pub price: Decimal,
    /// Pre-discount price, when the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    /// Media URL for the primary image. May be relative or legacy-hosted;
    /// resolve with the storefront's media URL resolver before display.
    pub image: String,
    /// Brand name.
    pub brand: String,
    /// Ordered list of feature bullet points.
    #[serde(default)]
    pub features: Vec<String>,
    /// Whether the product can currently be ordered.
    pub in_stock: bool,
}
