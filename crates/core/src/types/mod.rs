//! Core types for Papaya Commerce.
//!
//! This module provides the plain records shared between the storefront and
//! the backend catalog API.

pub mod cart;
pub mod product;
pub mod settings;

pub use cart::{CartItem, CartItemError};
pub use product::Product;
pub use settings::{ContactInfo, ShopSettings};
