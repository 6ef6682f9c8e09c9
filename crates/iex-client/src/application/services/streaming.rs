//! Streaming Client Facade
//!
//! Public entry point for the real-time feeds. Creates the TOPS and DEEP
//! stream managers lazily — at most once each, on the first call that
//! needs them — and forwards every operation 1:1. Transport lifecycle
//! callbacks supplied at construction are registered when the quote-feed
//! connection is created.

use std::sync::{Arc, OnceLock};

use crate::application::ports::{ExceptionHandlers, SocketClient};
use crate::application::services::deep::{DeepListener, DeepService, SystemEventListener};
use crate::application::services::tops::{TopsListener, TopsService};
use crate::infrastructure::config::ClientSettings;
use crate::infrastructure::iex::messages::DeepChannel;

/// Channels subscribed by [`StreamingClient::subscribe_deep_default`].
pub const DEFAULT_DEEP_CHANNELS: [DeepChannel; 2] = [DeepChannel::Trades, DeepChannel::Book];

/// Client for subscribing to updates published over the IEX streaming
/// feeds.
///
/// The socket transport is caller-supplied: any socket.io-compatible
/// implementation of [`SocketClient`] works. Neither feed connection is
/// opened until the first call that touches it.
pub struct StreamingClient {
    socket_client: Arc<dyn SocketClient>,
    exception_handlers: ExceptionHandlers,
    settings: ClientSettings,
    tops: OnceLock<TopsService>,
    deep: OnceLock<DeepService>,
}

impl StreamingClient {
    /// Create a client over `socket_client` with default endpoints and no
    /// lifecycle callbacks.
    #[must_use]
    pub fn new(socket_client: Arc<dyn SocketClient>) -> Self {
        Self::with_settings(
            socket_client,
            ExceptionHandlers::default(),
            ClientSettings::default(),
        )
    }

    /// Create a client with explicit lifecycle callbacks and endpoint
    /// settings.
    #[must_use]
    pub fn with_settings(
        socket_client: Arc<dyn SocketClient>,
        exception_handlers: ExceptionHandlers,
        settings: ClientSettings,
    ) -> Self {
        Self {
            socket_client,
            exception_handlers,
            settings,
            tops: OnceLock::new(),
            deep: OnceLock::new(),
        }
    }

    fn tops(&self) -> &TopsService {
        self.tops.get_or_init(|| {
            TopsService::new(
                self.socket_client.as_ref(),
                &self.exception_handlers,
                &self.settings.websocket_base_url,
            )
        })
    }

    fn deep(&self) -> &DeepService {
        self.deep.get_or_init(|| {
            DeepService::new(
                self.socket_client.as_ref(),
                &self.settings.websocket_base_url,
            )
        })
    }

    // =========================================================================
    // TOPS Feed
    // =========================================================================

    /// Subscribe `listener` to TOPS updates on `symbol`.
    pub fn subscribe_tops(&self, symbol: &str, listener: TopsListener) {
        self.tops().subscribe(symbol, listener);
    }

    /// Remove `listener` from TOPS updates on `symbol`.
    pub fn unsubscribe_tops(&self, symbol: &str, listener: &TopsListener) {
        self.tops().unsubscribe(symbol, listener);
    }

    /// Remove every TOPS listener registered for `symbol`.
    pub fn unsubscribe_all_tops_for_symbol(&self, symbol: &str) {
        self.tops().unsubscribe_all_for_symbol(symbol);
    }

    /// Remove every TOPS listener for every symbol.
    pub fn remove_all_tops_listeners(&self) {
        self.tops().remove_all_listeners();
    }

    // =========================================================================
    // DEEP Feed
    // =========================================================================

    /// Subscribe `symbol` to the given DEEP channels.
    pub fn subscribe_deep(&self, symbol: &str, channels: &[DeepChannel]) {
        self.deep().subscribe(symbol, channels);
    }

    /// Subscribe `symbol` to [`DEFAULT_DEEP_CHANNELS`].
    pub fn subscribe_deep_default(&self, symbol: &str) {
        self.deep().subscribe(symbol, &DEFAULT_DEEP_CHANNELS);
    }

    /// Subscribe several symbols to the same DEEP channels in one command.
    pub fn subscribe_deep_all(&self, symbols: &[&str], channels: &[DeepChannel]) {
        self.deep().subscribe_all(symbols, channels);
    }

    /// Subscribe to market-wide system events.
    pub fn subscribe_system_events(&self) {
        self.deep().subscribe_system_events();
    }

    /// Register a DEEP data listener.
    pub fn add_deep_listener(&self, listener: DeepListener) {
        self.deep().add_deep_listener(listener);
    }

    /// Remove a DEEP data listener.
    pub fn remove_deep_listener(&self, listener: &DeepListener) {
        self.deep().remove_deep_listener(listener);
    }

    /// Drop all DEEP data listeners.
    pub fn remove_all_deep_listeners(&self) {
        self.deep().remove_all_deep_listeners();
    }

    /// Register a system-event listener.
    pub fn add_system_event_listener(&self, listener: SystemEventListener) {
        self.deep().add_system_event_listener(listener);
    }

    /// Remove a system-event listener.
    pub fn remove_system_event_listener(&self, listener: &SystemEventListener) {
        self.deep().remove_system_event_listener(listener);
    }

    /// Drop all system-event listeners.
    pub fn remove_all_system_event_listeners(&self) {
        self.deep().remove_all_system_event_listeners();
    }
}
