//! Contact-link route handlers.
//!
//! Exposes the shop's WhatsApp deep link, gated on the loaded shop settings.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::services::whatsapp_link;
use crate::state::AppState;

/// Query parameters for the WhatsApp link endpoint.
#[derive(Debug, Deserialize)]
pub struct WhatsappLinkQuery {
    /// Optional pre-filled message for the conversation.
    #[serde(default)]
    pub text: Option<String>,
}

/// Response carrying the WhatsApp deep link.
#[derive(Debug, Serialize)]
pub struct WhatsappLinkResponse {
    pub url: String,
}

/// Get the shop's WhatsApp deep link.
///
/// GET /contact/whatsapp?text=...
///
/// Returns 204 No Content while settings are loading, when they failed to
/// load, or when the shop has no usable WhatsApp number. Consumers render
/// nothing in all of those cases.
#[instrument(skip(state))]
pub async fn whatsapp_contact(
    State(state): State<AppState>,
    Query(query): Query<WhatsappLinkQuery>,
) -> Response {
    let Some(settings) = state.settings().settings().await else {
        return StatusCode::NO_CONTENT.into_response();
    };

    let Some(phone) = settings.contact_info.whatsapp else {
        return StatusCode::NO_CONTENT.into_response();
    };

    whatsapp_link(&phone, query.text.as_deref()).map_or_else(
        || StatusCode::NO_CONTENT.into_response(),
        |url| Json(WhatsappLinkResponse { url }).into_response(),
    )
}
