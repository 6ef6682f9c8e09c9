//! Client Configuration Settings
//!
//! Endpoint configuration for the REST and streaming clients. Both values
//! are plain configuration carried by the constructors — there is no
//! module-level global and no environment lookup.

/// Default base URL for the IEX HTTP API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.iextrading.com/1.0";

/// Default base URL for the IEX streaming feeds.
///
/// The feed path (`/tops`, `/deep`) is appended per stream manager, so
/// one value covers both the quote and the book/event connection.
pub const DEFAULT_WEBSOCKET_BASE_URL: &str = "https://ws-api.iextrading.com/1.0";

/// Endpoint configuration for the REST and streaming clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Base URL for HTTP API requests.
    pub api_base_url: String,

    /// Base URL for the quote and book/event feed connections.
    pub websocket_base_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            websocket_base_url: DEFAULT_WEBSOCKET_BASE_URL.to_string(),
        }
    }
}

impl ClientSettings {
    /// Create settings pointing at the production IEX endpoints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the HTTP API base URL.
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Override the feed host for both streaming connections.
    #[must_use]
    pub fn with_websocket_base_url(mut self, url: impl Into<String>) -> Self {
        self.websocket_base_url = url.into();
        self
    }
}
