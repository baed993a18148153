//! Route handlers for the storefront.

pub mod contact;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Build the storefront router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/contact/whatsapp", get(contact::whatsapp_contact))
}
