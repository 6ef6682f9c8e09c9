//! Symbol Normalization
//!
//! The quote feed treats ticker symbols case-insensitively: listener
//! registration and inbound message routing must agree on one canonical
//! form regardless of caller-supplied case. The feed's wire convention is
//! lower-case, so lower-case is the canonical form used for both map keys
//! and outbound subscribe/unsubscribe payloads.

/// Normalize a ticker symbol to its canonical lower-case form.
///
/// `subscribe("SPY")` and a later `unsubscribe("spy")` must affect the
/// same subscription entry, and a quote arriving with `"symbol": "SPY"`
/// must route to listeners registered under either spelling.
#[must_use]
pub fn normalize(symbol: &str) -> String {
    symbol.to_lowercase()
}
