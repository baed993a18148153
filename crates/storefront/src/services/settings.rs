//! Shop settings fetch and session-wide store.
//!
//! The backend owns shop configuration (contact channels, shop-wide flags).
//! The storefront fetches it exactly once per process lifetime and shares
//! the result with every consumer. A failed fetch is logged and swallowed:
//! settings-gated features degrade to "render nothing" instead of erroring.

use std::sync::Arc;

use papaya_core::ShopSettings;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::instrument;

/// Errors that can occur when fetching shop settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint returned a non-success status.
    #[error("settings endpoint returned HTTP {0}")]
    Status(u16),

    /// Response body did not deserialize.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the backend shop-settings endpoint.
#[derive(Debug, Clone)]
pub struct SettingsClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SettingsClient {
    /// Create a client for the settings endpoint under `base_api_url`.
    #[must_use]
    pub fn new(base_api_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/settings", base_api_url.trim_end_matches('/')),
        }
    }

    /// Fetch the shop settings.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a body that
    /// does not deserialize into [`ShopSettings`].
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch(&self) -> Result<ShopSettings, SettingsError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(SettingsError::Status(status.as_u16()));
        }

        // Read the body as text first for better parse-error diagnostics.
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::debug!(
                body = %body.chars().take(500).collect::<String>(),
                "Settings response did not deserialize"
            );
            SettingsError::Parse(e)
        })
    }
}

/// State of the session-wide settings store.
///
/// "Not yet loaded" and "load failed" are distinct variants so consumers can
/// disambiguate; the legacy [`SettingsStore::settings`] accessor collapses
/// both to `None`.
#[derive(Debug, Clone, Default)]
pub enum SettingsState {
    /// The one-shot fetch has not completed yet.
    #[default]
    Loading,
    /// Settings were fetched successfully.
    Loaded(ShopSettings),
    /// The fetch failed; terminal for this session (no retry).
    Unavailable,
}

/// Session-wide shop settings, populated by a single fetch.
///
/// Write-once-then-read-many: the only writer is [`SettingsStore::load`],
/// which runs once at startup. Readers during the fetch window observe
/// [`SettingsState::Loading`]. Cheaply cloneable.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    state: Arc<RwLock<SettingsState>>,
}

impl SettingsStore {
    /// Create a store in the [`SettingsState::Loading`] state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Perform the one-shot settings fetch.
    ///
    /// On success the store transitions to `Loaded`; on failure the error is
    /// logged and the store transitions to `Unavailable`. Once the store has
    /// left `Loading` this is a no-op, preserving fetch-once semantics.
    pub async fn load(&self, client: &SettingsClient) {
        // Resolve the fetch before taking the write lock; readers keep
        // observing `Loading` for the duration.
        let result = client.fetch().await;

        let mut state = self.state.write().await;
        if !matches!(*state, SettingsState::Loading) {
            return;
        }
        *state = match result {
            Ok(settings) => {
                tracing::info!("Shop settings loaded");
                SettingsState::Loaded(settings)
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to load shop settings, continuing without them");
                SettingsState::Unavailable
            }
        };
    }

    /// Current state of the store.
    pub async fn snapshot(&self) -> SettingsState {
        self.state.read().await.clone()
    }

    /// The loaded settings, or `None` while loading or after a failed fetch.
    pub async fn settings(&self) -> Option<ShopSettings> {
        match self.snapshot().await {
            SettingsState::Loaded(settings) => Some(settings),
            SettingsState::Loading | SettingsState::Unavailable => None,
        }
    }

    /// Whether the one-shot fetch is still in flight.
    pub async fn is_loading(&self) -> bool {
        matches!(self.snapshot().await, SettingsState::Loading)
    }
}
