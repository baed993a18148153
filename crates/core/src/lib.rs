//! Papaya Core - Shared types library.
//!
//! This crate provides common types used across all Papaya Commerce
//! components:
//! - `storefront` - Public-facing e-commerce site
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Catalog, cart, and shop-settings records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
