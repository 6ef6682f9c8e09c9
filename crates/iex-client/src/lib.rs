#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access
    )
)]

//! IEX Market Data Client
//!
//! A typed client for the IEX market-data API: a REST request wrapper
//! with a typed endpoint catalog, and a real-time subscription layer for
//! the TOPS (top-of-book quote) and DEEP (order book / market event)
//! streaming feeds.
//!
//! The socket transport is a caller-supplied collaborator: implement
//! [`SocketClient`]/[`Socket`] over your socket.io client of choice and
//! hand the factory to [`StreamingClient`]. This crate handles everything
//! above the transport — subscription bookkeeping, command deferral until
//! the connection is established, and per-symbol message fan-out.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Pure subscription bookkeeping
//!   - `symbol`: canonical symbol normalization
//!   - `subscription`: listener registries and empty/non-empty transitions
//!
//! - **Application**: Ports and stream services
//!   - `ports`: socket transport contracts, commands, lifecycle events
//!   - `services`: connection gate, TOPS/DEEP managers, streaming facade
//!
//! - **Infrastructure**: Adapters and wire formats
//!   - `iex`: TOPS/DEEP wire message types
//!   - `rest`: HTTP adapter and typed REST response catalog
//!   - `config`: endpoint settings with documented defaults
//!
//! # Data Flow
//!
//! ```text
//! IEX /tops  ─▶ Socket ─▶ TopsService ──▶ listeners per symbol
//! IEX /deep  ─▶ Socket ─▶ DeepService ──▶ data / system-event listeners
//!
//! StreamingClient ─▶ manager ─▶ connection gate ─▶ Socket.emit(subscribe)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Pure subscription bookkeeping with no I/O.
pub mod domain;

/// Application layer - Transport ports and stream services.
pub mod application;

/// Infrastructure layer - Wire formats, REST adapter, configuration.
pub mod infrastructure;

/// Attribution constants required by the IEX terms.
pub mod attribution;

// =============================================================================
// Re-exports
// =============================================================================

// Domain types
pub use domain::subscription::{ListenerSet, SymbolListeners, Transition};
pub use domain::symbol::normalize;

// Transport ports
pub use application::ports::{
    Command, ConnectHandler, ExceptionHandlers, LifecycleEvent, LifecycleHandler, MessageHandler,
    Socket, SocketClient, init_exception_handlers,
};

// Stream services
pub use application::services::deep::{
    DeepDispatchError, DeepListener, DeepService, SystemEventListener,
};
pub use application::services::gate::send_when_connected;
pub use application::services::streaming::{DEFAULT_DEEP_CHANNELS, StreamingClient};
pub use application::services::tops::{TopsDispatchError, TopsListener, TopsService};

// Feed wire types
pub use infrastructure::iex::messages::{
    DeepChannel, DeepEvent, DeepMessage, DeepSubscriptionRequest, SystemEventCode,
    SystemEventMessage, TopsMessage,
};

// REST adapter and response catalog
pub use infrastructure::rest::responses::{
    CalculationPrice, ChartPoint, ChartRange, CompanyResponse, DelayedQuoteResponse, Dividend,
    DividendType, Earning, EarningsResponse, EffectiveSpread, Financial, FinancialsResponse,
    HistoryRange, IssueType, KeyStatsResponse, LatestSource, LogoResponse, MarketList,
    MultiDayChartItem, News, OneDayChartItem, OpenCloseResponse, Previous, PreviousMarket,
    PricePoint, QuoteResponse, RelevantResponse, Split, SymbolEntry, VolumeByVenue,
};
pub use infrastructure::rest::{RestClient, RestError, RestResponse};

// Configuration
pub use infrastructure::config::{
    ClientSettings, DEFAULT_API_BASE_URL, DEFAULT_WEBSOCKET_BASE_URL,
};
