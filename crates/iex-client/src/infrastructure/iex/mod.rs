//! IEX Feed Wire Formats
//!
//! Message types for the two streaming feeds:
//!
//! - **TOPS**: top-of-book quotes per symbol (JSON records with a
//!   `symbol` field that drives dispatch routing)
//! - **DEEP**: order-book depth, trades and market-wide system events
//!   (JSON records classified by shape)

pub mod messages;

pub use messages::{
    DeepChannel, DeepEvent, DeepMessage, DeepSubscriptionRequest, SystemEventCode,
    SystemEventMessage, TopsMessage,
};
