//! IEX REST Adapter
//!
//! Thin typed wrapper over the IEX HTTP API. [`RestClient::request`] is a
//! straight pass-through call that sniffs the response content type; the
//! typed endpoint methods deserialize into the catalog in [`responses`].
//!
//! No retries and no caching: transport and HTTP failures surface
//! directly as [`RestError`].

pub mod responses;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use crate::infrastructure::config::ClientSettings;
use crate::infrastructure::iex::messages::{SystemEventMessage, TopsMessage};
use responses::{
    ChartPoint, ChartRange, CompanyResponse, DelayedQuoteResponse, Dividend, EarningsResponse,
    EffectiveSpread, FinancialsResponse, HistoryRange, KeyStatsResponse, LogoResponse, MarketList,
    News, OpenCloseResponse, Previous, PreviousMarket, QuoteResponse, RelevantResponse, Split,
    SymbolEntry, VolumeByVenue,
};

/// Errors surfaced by the REST wrapper.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// The HTTP request failed (connection, TLS, or non-success status).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Pass-through response of [`RestClient::request`].
#[derive(Debug, Clone, PartialEq)]
pub enum RestResponse {
    /// The response declared `application/json` and parsed as JSON.
    Json(serde_json::Value),

    /// The response declared some other content type.
    Text(String),

    /// The response carried no content-type header.
    Empty,
}

/// Typed client for the IEX HTTP API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    api_base_url: String,
}

impl RestClient {
    /// Create a client against the production IEX endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(&ClientSettings::default())
    }

    /// Create a client against the endpoint in `settings`.
    #[must_use]
    pub fn with_settings(settings: &ClientSettings) -> Self {
        Self::with_http_client(reqwest::Client::new(), settings)
    }

    /// Reuse an existing `reqwest` client (connection pool, proxy,
    /// timeout configuration).
    #[must_use]
    pub fn with_http_client(http: reqwest::Client, settings: &ClientSettings) -> Self {
        Self {
            http,
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Perform a pass-through request against `path`.
    ///
    /// The path is joined to the API base URL, so any endpoint is
    /// reachable, including ones without a typed method:
    ///
    /// ```no_run
    /// # async fn example() -> Result<(), iex_client::RestError> {
    /// let client = iex_client::RestClient::new();
    /// let _price = client.request("stock/aapl/price").await?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// The response body is parsed as JSON when the `content-type` header
    /// contains `application/json`, returned as raw text for any other
    /// content type, and reported as [`RestResponse::Empty`] when the
    /// header is absent.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] on transport failure and
    /// [`RestError::Decode`] when a JSON body does not parse.
    pub async fn request(&self, path: &str) -> Result<RestResponse, RestError> {
        let response = self.http.get(self.url(path)).send().await?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        match content_type {
            Some(kind) if kind.contains("application/json") => {
                let body = response.text().await?;
                Ok(RestResponse::Json(serde_json::from_str(&body)?))
            }
            Some(_) => Ok(RestResponse::Text(response.text().await?)),
            None => Ok(RestResponse::Empty),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RestError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    // =========================================================================
    // Reference Data
    // =========================================================================

    /// List every symbol IEX supports for trading (`/ref-data/symbols`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn symbols(&self) -> Result<Vec<SymbolEntry>, RestError> {
        self.get_json("ref-data/symbols").await
    }

    // =========================================================================
    // Stocks
    // =========================================================================

    /// Fetch the full quote for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn quote(&self, symbol: &str) -> Result<QuoteResponse, RestError> {
        self.get_json(&format!("stock/{symbol}/quote")).await
    }

    /// Fetch the latest price for `symbol` (a bare number).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn price(&self, symbol: &str) -> Result<Decimal, RestError> {
        self.get_json(&format!("stock/{symbol}/price")).await
    }

    /// Fetch chart bars for `symbol` over `range`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn chart(
        &self,
        symbol: &str,
        range: &ChartRange,
    ) -> Result<Vec<ChartPoint>, RestError> {
        self.get_json(&format!("stock/{symbol}/chart/{}", range.as_path()))
            .await
    }

    /// Fetch the official open and close for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn open_close(&self, symbol: &str) -> Result<OpenCloseResponse, RestError> {
        self.get_json(&format!("stock/{symbol}/open-close")).await
    }

    /// Fetch the previous trading day summary for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn previous(&self, symbol: &str) -> Result<Previous, RestError> {
        self.get_json(&format!("stock/{symbol}/previous")).await
    }

    /// Fetch previous-day summaries for the whole market, keyed by
    /// symbol.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn previous_market(&self) -> Result<PreviousMarket, RestError> {
        self.get_json("stock/market/previous").await
    }

    /// Fetch the company profile for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn company(&self, symbol: &str) -> Result<CompanyResponse, RestError> {
        self.get_json(&format!("stock/{symbol}/company")).await
    }

    /// Fetch key statistics for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn key_stats(&self, symbol: &str) -> Result<KeyStatsResponse, RestError> {
        self.get_json(&format!("stock/{symbol}/stats")).await
    }

    /// Fetch peer symbols for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn peers(&self, symbol: &str) -> Result<Vec<String>, RestError> {
        self.get_json(&format!("stock/{symbol}/peers")).await
    }

    /// Fetch symbols IEX considers related to `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn relevant(&self, symbol: &str) -> Result<RelevantResponse, RestError> {
        self.get_json(&format!("stock/{symbol}/relevant")).await
    }

    /// Fetch reported financials for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn financials(&self, symbol: &str) -> Result<FinancialsResponse, RestError> {
        self.get_json(&format!("stock/{symbol}/financials")).await
    }

    /// Fetch earnings history for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn earnings(&self, symbol: &str) -> Result<EarningsResponse, RestError> {
        self.get_json(&format!("stock/{symbol}/earnings")).await
    }

    /// Fetch dividend history for `symbol` over `range`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn dividends(
        &self,
        symbol: &str,
        range: HistoryRange,
    ) -> Result<Vec<Dividend>, RestError> {
        self.get_json(&format!("stock/{symbol}/dividends/{}", range.as_str()))
            .await
    }

    /// Fetch split history for `symbol` over `range`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn splits(&self, symbol: &str, range: HistoryRange) -> Result<Vec<Split>, RestError> {
        self.get_json(&format!("stock/{symbol}/splits/{}", range.as_str()))
            .await
    }

    /// Fetch the company logo URL for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn logo(&self, symbol: &str) -> Result<LogoResponse, RestError> {
        self.get_json(&format!("stock/{symbol}/logo")).await
    }

    /// Fetch the 15-minute delayed quote for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn delayed_quote(&self, symbol: &str) -> Result<DelayedQuoteResponse, RestError> {
        self.get_json(&format!("stock/{symbol}/delayed-quote")).await
    }

    /// Fetch effective spread figures for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn effective_spread(&self, symbol: &str) -> Result<Vec<EffectiveSpread>, RestError> {
        self.get_json(&format!("stock/{symbol}/effective-spread"))
            .await
    }

    /// Fetch per-venue volume share for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn volume_by_venue(&self, symbol: &str) -> Result<Vec<VolumeByVenue>, RestError> {
        self.get_json(&format!("stock/{symbol}/volume-by-venue"))
            .await
    }

    /// Fetch the last `count` news articles for `symbol` (1 to 50).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn news(&self, symbol: &str, count: u8) -> Result<Vec<News>, RestError> {
        self.get_json(&format!("stock/{symbol}/news/last/{count}"))
            .await
    }

    /// Fetch quotes for a named market list.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn market_list(&self, list: MarketList) -> Result<Vec<QuoteResponse>, RestError> {
        self.get_json(&format!("stock/market/list/{}", list.as_str()))
            .await
    }

    // =========================================================================
    // Market Data Snapshots
    // =========================================================================

    /// Fetch TOPS snapshot records for the given symbols.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn tops(&self, symbols: &[&str]) -> Result<Vec<TopsMessage>, RestError> {
        self.get_json(&format!("tops?symbols={}", symbols.join(",")))
            .await
    }

    /// Fetch TOPS snapshot records for every symbol.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn tops_all(&self) -> Result<Vec<TopsMessage>, RestError> {
        self.get_json("tops").await
    }

    /// Fetch the DEEP order-book snapshot for `symbol`.
    ///
    /// The snapshot shape varies with market phase, so it is returned as
    /// raw JSON.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn deep(&self, symbol: &str) -> Result<serde_json::Value, RestError> {
        self.get_json(&format!("deep?symbols={symbol}")).await
    }

    /// Fetch the most recent market-wide system event.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected body shape.
    pub async fn deep_system_event(&self) -> Result<SystemEventMessage, RestError> {
        self.get_json("deep/system-event").await
    }
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new()
    }
}
