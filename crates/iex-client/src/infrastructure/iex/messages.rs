//! IEX WebSocket Message Types
//!
//! Wire format types for the TOPS and DEEP streaming feeds.
//!
//! # Message Types
//!
//! ## TOPS Feed
//! - [`TopsMessage`]: top-of-book quote for one symbol
//!
//! ## DEEP Feed
//! - [`DeepMessage`]: channel-tagged book/event record (routed to data
//!   listeners)
//! - [`SystemEventMessage`]: market-wide session event (routed to
//!   system-event listeners)
//! - [`DeepEvent`]: classification of an inbound DEEP record by shape
//!
//! ## Outbound
//! - [`DeepSubscriptionRequest`]: symbols/channels bundle sent as the
//!   payload of a DEEP subscribe command
//!
//! # References
//!
//! - [TOPS](https://iextrading.com/developer/docs/#tops)
//! - [DEEP](https://iextrading.com/developer/docs/#deep)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// TOPS Feed Messages
// =============================================================================

/// Real-time top-of-book quote from the TOPS feed.
///
/// IEX's aggregated best bid and offer for one symbol, plus last-sale and
/// venue share data. Timestamps are epoch milliseconds; `-1` marks fields
/// IEX has no value for (e.g. `lastUpdated` outside market hours).
///
/// # Wire Format (JSON)
/// ```json
/// {
///   "symbol": "SPY",
///   "sector": "n/a",
///   "securityType": "etp",
///   "bidPrice": 2,
///   "bidSize": 100,
///   "askPrice": 3,
///   "askSize": 100,
///   "lastUpdated": -1,
///   "lastSalePrice": 2.5,
///   "lastSaleSize": 200,
///   "lastSaleTime": 1480446206461,
///   "volume": 205208,
///   "marketPercent": 0.00901
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopsMessage {
    /// Ticker symbol (feed convention is upper-case; routing normalizes).
    pub symbol: String,

    /// Sector the security belongs to ("n/a" when unclassified).
    pub sector: String,

    /// Security type code (e.g. "cs" common stock, "etp" exchange-traded
    /// product).
    pub security_type: String,

    /// Best bid price on IEX.
    pub bid_price: Decimal,

    /// Best bid size (shares).
    pub bid_size: i64,

    /// Best ask price on IEX.
    pub ask_price: Decimal,

    /// Best ask size (shares).
    pub ask_size: i64,

    /// Last book update time (epoch ms, `-1` when unknown).
    pub last_updated: i64,

    /// Price of the last trade on IEX.
    pub last_sale_price: Decimal,

    /// Size of the last trade (shares).
    pub last_sale_size: i64,

    /// Time of the last trade (epoch ms).
    pub last_sale_time: i64,

    /// Shares traded on IEX today.
    pub volume: i64,

    /// IEX's share of total market volume for the symbol.
    pub market_percent: Decimal,

    /// Message sequence number (present on the realtime quote variant).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq: Option<i64>,
}

// =============================================================================
// DEEP Feed Channels
// =============================================================================

/// Named sub-topic of the DEEP feed.
///
/// Channels are a fixed closed set; the wire names below are the strings
/// the feed expects in subscription payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeepChannel {
    /// Trading status updates (halts, pauses).
    #[serde(rename = "tradingstatus")]
    TradingStatus,

    /// Opening/closing auction information.
    #[serde(rename = "auction")]
    Auction,

    /// Operational halt status.
    #[serde(rename = "op-halt-status")]
    OpHaltStatus,

    /// Short sale price test (restriction) status.
    #[serde(rename = "ssr-status")]
    SsrStatus,

    /// Security events (opening/closing process markers).
    #[serde(rename = "security-event")]
    SecurityEvent,

    /// Trade break (bust) reports.
    #[serde(rename = "trade-breaks")]
    TradeBreaks,

    /// Last-sale trade reports.
    #[serde(rename = "trades")]
    Trades,

    /// Aggregated order-book price levels.
    #[serde(rename = "book")]
    Book,

    /// Market-wide system events.
    #[serde(rename = "systemevent")]
    SystemEvent,

    /// IEX official opening and closing prices.
    #[serde(rename = "official-price")]
    OfficialPrice,
}

impl DeepChannel {
    /// The wire name used in subscription payloads.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TradingStatus => "tradingstatus",
            Self::Auction => "auction",
            Self::OpHaltStatus => "op-halt-status",
            Self::SsrStatus => "ssr-status",
            Self::SecurityEvent => "security-event",
            Self::TradeBreaks => "trade-breaks",
            Self::Trades => "trades",
            Self::Book => "book",
            Self::SystemEvent => "systemevent",
            Self::OfficialPrice => "official-price",
        }
    }
}

// =============================================================================
// DEEP Feed Messages
// =============================================================================

/// Channel-tagged record from the DEEP feed.
///
/// `messageType` names the channel the record belongs to and `data`
/// carries the channel-specific body. Both stay loosely typed on purpose:
/// records with message types this crate does not know about must still
/// reach data listeners instead of failing classification.
///
/// # Wire Format (JSON)
/// ```json
/// {
///   "symbol": "SPOT",
///   "messageType": "book",
///   "data": {
///     "bids": [{"price": 179.8, "size": 200, "timestamp": 1529592055425}],
///     "asks": [{"price": 182.45, "size": 100, "timestamp": 1529585641644}]
///   },
///   "seq": 440
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepMessage {
    /// Ticker symbol the record refers to.
    pub symbol: String,

    /// Channel name (e.g. "book", "trades", "auction").
    pub message_type: String,

    /// Channel-specific record body.
    #[serde(default)]
    pub data: serde_json::Value,

    /// Message sequence number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq: Option<i64>,
}

/// Market-wide session event code.
///
/// One code per session phase, sent on the `systemevent` channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemEventCode {
    /// Start of messages ("O").
    #[serde(rename = "O")]
    MessagesStart,

    /// Start of system hours ("S").
    #[serde(rename = "S")]
    SystemHoursStart,

    /// Start of regular market hours ("R").
    #[serde(rename = "R")]
    RegularHoursStart,

    /// End of regular market hours ("M").
    #[serde(rename = "M")]
    RegularHoursEnd,

    /// End of system hours ("E").
    #[serde(rename = "E")]
    SystemHoursEnd,

    /// End of messages ("C").
    #[serde(rename = "C")]
    MessagesEnd,
}

/// Market-wide system event from the DEEP feed.
///
/// # Wire Format (JSON)
/// ```json
/// {"systemEvent": "R", "timestamp": 1529587800001}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemEventMessage {
    /// Session phase code.
    pub system_event: SystemEventCode,

    /// Event time (epoch ms).
    pub timestamp: i64,
}

/// Classification of one inbound DEEP record by shape.
///
/// A record carrying a `messageType` field is a data event; a record
/// carrying a `systemEvent` field is a system event. Records matching
/// neither shape fail classification and are dropped by the dispatcher.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DeepEvent {
    /// Channel-tagged book/event record.
    Data(DeepMessage),

    /// Market-wide system event.
    System(SystemEventMessage),
}

// =============================================================================
// Outbound Messages (Client -> Feed)
// =============================================================================

/// Payload of a DEEP subscribe command.
///
/// Pairs one or more symbols with the channels to receive for them. The
/// system-event subscription carries channels only.
///
/// # Wire Format (JSON)
/// ```json
/// {"symbols": ["SPOT"], "channels": ["book"]}
/// {"channels": ["systemevent"]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepSubscriptionRequest {
    /// Symbols to subscribe (omitted entirely for feed-wide channels).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub symbols: Vec<String>,

    /// Channels to receive.
    pub channels: Vec<DeepChannel>,
}

impl DeepSubscriptionRequest {
    /// Build a request subscribing `symbols` to `channels`.
    #[must_use]
    pub fn for_symbols(symbols: Vec<String>, channels: &[DeepChannel]) -> Self {
        Self {
            symbols,
            channels: channels.to_vec(),
        }
    }

    /// Build the fixed system-event subscription (no symbols).
    #[must_use]
    pub fn system_events() -> Self {
        Self {
            symbols: Vec::new(),
            channels: vec![DeepChannel::SystemEvent],
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
