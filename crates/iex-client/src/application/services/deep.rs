//! Book/Event Stream Manager ("DEEP" service)
//!
//! Owns the book/event-feed connection and two independent listener
//! lists: data listeners for channel-tagged records, and system-event
//! listeners for market-wide session events. Inbound records are
//! classified by shape and fanned out to the matching list only; shapes
//! matching neither are dropped.
//!
//! Unlike the quote feed, this manager keeps no per-symbol bookkeeping:
//! every subscribe call re-issues its command and the feed tolerates
//! repeats.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, error, warn};

use crate::application::ports::{Command, Socket, SocketClient};
use crate::application::services::gate::send_when_connected;
use crate::domain::subscription::ListenerSet;
use crate::infrastructure::iex::messages::{
    DeepChannel, DeepEvent, DeepMessage, DeepSubscriptionRequest, SystemEventMessage,
};

/// Callback invoked with each channel-tagged book/event record.
pub type DeepListener = Arc<dyn Fn(&DeepMessage) + Send + Sync>;

/// Callback invoked with each market-wide system event.
pub type SystemEventListener = Arc<dyn Fn(&SystemEventMessage) + Send + Sync>;

#[derive(Default)]
struct DeepListeners {
    data: ListenerSet<dyn Fn(&DeepMessage) + Send + Sync>,
    system_events: ListenerSet<dyn Fn(&SystemEventMessage) + Send + Sync>,
}

/// Error surfaced when an inbound book/event payload cannot be dispatched.
#[derive(Debug, thiserror::Error)]
pub enum DeepDispatchError {
    /// The payload was not well-formed JSON.
    #[error("malformed book/event payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Manages subscriptions to streaming DEEP data.
///
/// Created once per client, lazily, by the streaming facade; the
/// connection it opens is never torn down.
pub struct DeepService {
    socket: Arc<dyn Socket>,
    listeners: Arc<RwLock<DeepListeners>>,
}

impl DeepService {
    /// Connect to the book/event feed and wire up message dispatch.
    #[must_use]
    pub fn new(socket_client: &dyn SocketClient, websocket_base_url: &str) -> Self {
        let socket = socket_client.connect(&format!("{websocket_base_url}/deep"));

        let listeners = Arc::new(RwLock::new(DeepListeners::default()));
        let dispatch = Arc::clone(&listeners);
        socket.on_message(Arc::new(move |raw: &str| {
            if let Err(error) = dispatch_message(&dispatch, raw) {
                warn!(%error, "dropping inbound book/event payload");
            }
        }));

        Self { socket, listeners }
    }

    /// Subscribe `symbol` to the given channels.
    ///
    /// The symbol passes through with the caller's casing; the feed
    /// matches DEEP symbols as sent.
    pub fn subscribe(&self, symbol: &str, channels: &[DeepChannel]) {
        self.send_subscription(&DeepSubscriptionRequest::for_symbols(
            vec![symbol.to_string()],
            channels,
        ));
    }

    /// Subscribe several symbols to the same channel set in one command.
    pub fn subscribe_all(&self, symbols: &[&str], channels: &[DeepChannel]) {
        self.send_subscription(&DeepSubscriptionRequest::for_symbols(
            symbols.iter().map(|&s| s.to_string()).collect(),
            channels,
        ));
    }

    /// Subscribe to market-wide system events (no symbol).
    pub fn subscribe_system_events(&self) {
        self.send_subscription(&DeepSubscriptionRequest::system_events());
    }

    fn send_subscription(&self, request: &DeepSubscriptionRequest) {
        match serde_json::to_string(request) {
            Ok(payload) => send_when_connected(&self.socket, Command::Subscribe(payload)),
            Err(error) => error!(%error, "failed to encode subscription request"),
        }
    }

    /// Register a data listener.
    pub fn add_deep_listener(&self, listener: DeepListener) {
        self.listeners.write().data.add(listener);
    }

    /// Remove a data listener.
    pub fn remove_deep_listener(&self, listener: &DeepListener) {
        self.listeners.write().data.remove(listener);
    }

    /// Drop all data listeners.
    pub fn remove_all_deep_listeners(&self) {
        self.listeners.write().data.clear();
    }

    /// Register a system-event listener.
    pub fn add_system_event_listener(&self, listener: SystemEventListener) {
        self.listeners.write().system_events.add(listener);
    }

    /// Remove a system-event listener.
    pub fn remove_system_event_listener(&self, listener: &SystemEventListener) {
        self.listeners.write().system_events.remove(listener);
    }

    /// Drop all system-event listeners.
    pub fn remove_all_system_event_listeners(&self) {
        self.listeners.write().system_events.clear();
    }

    /// Invoke every data listener with `message`, in registration order.
    pub fn broadcast(&self, message: &DeepMessage) {
        broadcast_data(&self.listeners, message);
    }

    /// Invoke every system-event listener with `event`, in registration
    /// order.
    pub fn broadcast_system_event(&self, event: &SystemEventMessage) {
        broadcast_system_event(&self.listeners, event);
    }

    /// Parse one raw book/event payload, classify it, and fan it out.
    ///
    /// # Errors
    ///
    /// Returns [`DeepDispatchError::Malformed`] if the payload is not
    /// well-formed JSON. Well-formed records of unrecognized shape are
    /// not an error: they are dropped silently. Either way the failure is
    /// scoped to this one message.
    pub fn handle_message(&self, raw: &str) -> Result<(), DeepDispatchError> {
        dispatch_message(&self.listeners, raw)
    }
}

fn dispatch_message(
    listeners: &RwLock<DeepListeners>,
    raw: &str,
) -> Result<(), DeepDispatchError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;

    match serde_json::from_value::<DeepEvent>(value) {
        Ok(DeepEvent::Data(message)) => broadcast_data(listeners, &message),
        Ok(DeepEvent::System(event)) => broadcast_system_event(listeners, &event),
        Err(_) => debug!("ignoring book/event record of unrecognized shape"),
    }

    Ok(())
}

fn broadcast_data(listeners: &RwLock<DeepListeners>, message: &DeepMessage) {
    // Snapshot under the read lock, invoke outside it, so a listener may
    // re-enter the service.
    let snapshot = listeners.read().data.snapshot();
    for listener in snapshot {
        listener(message);
    }
}

fn broadcast_system_event(listeners: &RwLock<DeepListeners>, event: &SystemEventMessage) {
    let snapshot = listeners.read().system_events.snapshot();
    for listener in snapshot {
        listener(event);
    }
}
