//! Quote Stream Manager ("TOPS" service)
//!
//! Owns the quote-feed connection and a per-symbol listener registry.
//! Subscribe and unsubscribe commands are issued only on empty/non-empty
//! transitions of a symbol's listener list, so any number of listeners
//! share one upstream subscription per symbol. Inbound quotes fan out to
//! exactly the listeners registered for the quote's symbol.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;

use crate::application::ports::{
    Command, ExceptionHandlers, Socket, SocketClient, init_exception_handlers,
};
use crate::application::services::gate::send_when_connected;
use crate::domain::subscription::{SymbolListeners, Transition};
use crate::domain::symbol::normalize;
use crate::infrastructure::iex::messages::TopsMessage;

/// Callback invoked with each quote record for a subscribed symbol.
pub type TopsListener = Arc<dyn Fn(&TopsMessage) + Send + Sync>;

type ListenerMap = SymbolListeners<dyn Fn(&TopsMessage) + Send + Sync>;

/// Error surfaced when an inbound quote payload cannot be dispatched.
#[derive(Debug, thiserror::Error)]
pub enum TopsDispatchError {
    /// The payload was not a well-formed quote record.
    #[error("malformed quote payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Manages subscriptions to streaming TOPS data.
///
/// Created once per client, lazily, by the streaming facade; the
/// connection it opens is never torn down.
pub struct TopsService {
    socket: Arc<dyn Socket>,
    listeners: Arc<RwLock<ListenerMap>>,
}

impl TopsService {
    /// Connect to the quote feed and wire up message dispatch.
    ///
    /// Supplied exception handlers are registered on the new connection.
    /// Inbound messages are parsed and fanned out to the listeners of the
    /// record's symbol; a malformed payload is logged and dropped without
    /// affecting later messages.
    #[must_use]
    pub fn new(
        socket_client: &dyn SocketClient,
        exception_handlers: &ExceptionHandlers,
        websocket_base_url: &str,
    ) -> Self {
        let socket = socket_client.connect(&format!("{websocket_base_url}/tops"));
        init_exception_handlers(&socket, exception_handlers);

        let listeners = Arc::new(RwLock::new(SymbolListeners::new()));
        let dispatch = Arc::clone(&listeners);
        socket.on_message(Arc::new(move |raw: &str| {
            if let Err(error) = dispatch_message(&dispatch, raw) {
                warn!(%error, "dropping inbound quote payload");
            }
        }));

        Self { socket, listeners }
    }

    /// Register `listener` for quote updates on `symbol`.
    ///
    /// The subscribe command is emitted — or deferred until the
    /// connection is established — only when this is the symbol's first
    /// active listener; later listeners reuse the upstream subscription.
    pub fn subscribe(&self, symbol: &str, listener: TopsListener) {
        let symbol = normalize(symbol);
        let transition = self.listeners.write().add(&symbol, listener);
        if transition == Transition::BecameActive {
            send_when_connected(&self.socket, Command::Subscribe(symbol));
        }
    }

    /// Remove `listener` from `symbol`.
    ///
    /// The unsubscribe command is emitted exactly once, when the symbol's
    /// last listener leaves.
    pub fn unsubscribe(&self, symbol: &str, listener: &TopsListener) {
        let symbol = normalize(symbol);
        let transition = self.listeners.write().remove(&symbol, listener);
        if transition == Transition::BecameIdle {
            send_when_connected(&self.socket, Command::Unsubscribe(symbol));
        }
    }

    /// Drop every listener for `symbol`, unsubscribing upstream if the
    /// symbol was active.
    pub fn unsubscribe_all_for_symbol(&self, symbol: &str) {
        let symbol = normalize(symbol);
        let transition = self.listeners.write().remove_all(&symbol);
        if transition == Transition::BecameIdle {
            send_when_connected(&self.socket, Command::Unsubscribe(symbol));
        }
    }

    /// Drop every listener for every symbol, unsubscribing each active
    /// symbol upstream.
    pub fn remove_all_listeners(&self) {
        let idled = self.listeners.write().clear();
        for symbol in idled {
            send_when_connected(&self.socket, Command::Unsubscribe(symbol));
        }
    }

    /// Invoke the listeners registered for `message`'s symbol, in
    /// registration order. No-op when none are registered.
    pub fn broadcast(&self, message: &TopsMessage) {
        broadcast(&self.listeners, message);
    }

    /// Parse one raw quote payload and fan it out.
    ///
    /// # Errors
    ///
    /// Returns [`TopsDispatchError::Malformed`] if the payload is not a
    /// well-formed quote record. The failure is scoped to this message;
    /// the connection and later messages are unaffected.
    pub fn handle_message(&self, raw: &str) -> Result<(), TopsDispatchError> {
        dispatch_message(&self.listeners, raw)
    }
}

fn dispatch_message(listeners: &RwLock<ListenerMap>, raw: &str) -> Result<(), TopsDispatchError> {
    let message: TopsMessage = serde_json::from_str(raw)?;
    broadcast(listeners, &message);
    Ok(())
}

fn broadcast(listeners: &RwLock<ListenerMap>, message: &TopsMessage) {
    // Snapshot under the read lock, invoke outside it, so a listener may
    // re-enter the service.
    let snapshot = listeners.read().snapshot(&normalize(&message.symbol));
    for listener in snapshot {
        listener(message);
    }
}
