//! Outbound services for the storefront.
//!
//! # Services
//!
//! - `settings` - one-shot shop settings fetch and the session-wide store
//! - `whatsapp` - WhatsApp deep-link generation

pub mod settings;
pub mod whatsapp;

pub use settings::{SettingsClient, SettingsError, SettingsState, SettingsStore};
pub use whatsapp::whatsapp_link;
