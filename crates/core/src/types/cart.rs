//! Cart line item.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Product;

/// Error constructing a [`CartItem`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartItemError {
    /// Quantity must be at least 1.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

/// A product in the cart together with its quantity.
///
/// Invariant: `quantity >= 1`, enforced by [`CartItem::new`]. Two cart items
/// refer to the same line when their products share an `id`; merging lines
/// is the cart owner's job, this type only carries the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(flatten)]
    product: Product,
    quantity: u32,
}

impl CartItem {
    /// Create a cart item for `quantity` units of `product`.
    ///
    /// # Errors
    ///
    /// Returns [`CartItemError::ZeroQuantity`] when `quantity` is 0.
    pub fn new(product: Product, quantity: u32) -> Result<Self, CartItemError> {
        if quantity == 0 {
            return Err(CartItemError::ZeroQuantity);
        }
        Ok(Self { product, quantity })
    }

    /// The underlying product.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Units of the product in the cart. Always >= 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Identity used for deduplicating cart lines.
    #[must_use]
    pub fn dedup_key(&self) -> &str {
        &self.product.id
    }
}
