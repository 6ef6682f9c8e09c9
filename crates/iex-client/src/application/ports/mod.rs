//! Port Interfaces
//!
//! Contracts for the socket transport the streaming services drive. The
//! transport (a socket.io-compatible connection in practice) is an
//! external collaborator: this crate never opens sockets itself and never
//! implements the wire protocol, reconnection, or backoff. It only
//! consumes connection handles produced by a [`SocketClient`] factory.
//!
//! ## Driven Ports (Outbound)
//!
//! - [`Socket`]: one long-lived logical connection to one feed endpoint
//! - [`SocketClient`]: produces a [`Socket`] for a feed URL
//!
//! Callers embed their transport of choice by implementing these two
//! traits; the test suite drives the services through scripted in-memory
//! implementations the same way.

use std::sync::Arc;

// =============================================================================
// Handler Aliases
// =============================================================================

/// Handler invoked when a connection reports it has been established.
pub type ConnectHandler = Arc<dyn Fn() + Send + Sync>;

/// Handler invoked with the raw serialized payload of one inbound message.
pub type MessageHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Handler invoked with the transport's detail string for a lifecycle
/// event (disconnect reason, attempt count, error text).
pub type LifecycleHandler = Arc<dyn Fn(&str) + Send + Sync>;

// =============================================================================
// Commands
// =============================================================================

/// A command emitted on a feed connection.
///
/// The payload is the wire value the feed expects: a normalized symbol
/// for the quote feed, a serialized symbols/channels object for the
/// book/event feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Subscribe to a topic.
    Subscribe(String),
    /// Unsubscribe from a topic.
    Unsubscribe(String),
}

impl Command {
    /// Wire-level event name for this command.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Subscribe(_) => "subscribe",
            Self::Unsubscribe(_) => "unsubscribe",
        }
    }

    /// Wire-level payload for this command.
    #[must_use]
    pub fn payload(&self) -> &str {
        match self {
            Self::Subscribe(payload) | Self::Unsubscribe(payload) => payload,
        }
    }
}

// =============================================================================
// Lifecycle Events
// =============================================================================

/// Transport lifecycle events surfaced to caller-supplied handlers.
///
/// The client never acts on these internally — no retry, no state change
/// beyond what [`Socket::connected`] already reflects. The set mirrors
/// the socket.io client event names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// The initial connection attempt failed.
    ConnectError,
    /// The initial connection attempt timed out.
    ConnectTimeout,
    /// An established connection was lost.
    Disconnect,
    /// A transport-level error occurred.
    Error,
    /// The transport re-established a lost connection.
    Reconnect,
    /// The transport is about to attempt a reconnect.
    ReconnectAttempt,
    /// A reconnect attempt failed.
    ReconnectError,
    /// The transport gave up reconnecting.
    ReconnectFailed,
}

impl LifecycleEvent {
    /// The transport-side event name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ConnectError => "connect_error",
            Self::ConnectTimeout => "connect_timeout",
            Self::Disconnect => "disconnect",
            Self::Error => "error",
            Self::Reconnect => "reconnect",
            Self::ReconnectAttempt => "reconnect_attempt",
            Self::ReconnectError => "reconnect_error",
            Self::ReconnectFailed => "reconnect_failed",
        }
    }
}

// =============================================================================
// Socket Ports
// =============================================================================

/// One long-lived logical connection to one feed endpoint.
///
/// # Contract
///
/// - `connect` handlers run in registration order on every establishment
///   notification. The connection gate relies on this to flush deferred
///   commands in issue order.
/// - `message` handlers receive one serialized record per invocation, in
///   transport delivery order.
/// - [`emit`](Self::emit) delivers the command when the connection is
///   established; behavior while disconnected is transport-defined, which
///   is why the services route every command through
///   [`send_when_connected`](crate::application::services::gate::send_when_connected).
pub trait Socket: Send + Sync {
    /// Whether the connection is currently established.
    fn connected(&self) -> bool;

    /// Whether the connection is currently down.
    fn disconnected(&self) -> bool;

    /// Register a handler for the establishment notification.
    fn on_connect(&self, handler: ConnectHandler);

    /// Register a handler for inbound messages.
    fn on_message(&self, handler: MessageHandler);

    /// Register a handler for a named lifecycle event.
    fn on_lifecycle(&self, event: LifecycleEvent, handler: LifecycleHandler);

    /// Emit a subscribe/unsubscribe command on the connection.
    fn emit(&self, command: &Command);
}

/// Factory producing connection handles for feed URLs.
///
/// Called once per stream manager; the returned handle lives as long as
/// the manager and is never torn down by this crate.
pub trait SocketClient: Send + Sync {
    /// Open (or begin opening) a connection to `url` and return its handle.
    ///
    /// The handle may be returned before the connection is established;
    /// [`Socket::connected`] reports the live state.
    fn connect(&self, url: &str) -> Arc<dyn Socket>;
}

// =============================================================================
// Exception Handlers
// =============================================================================

/// Caller-supplied callbacks for transport lifecycle events.
///
/// Each supplied callback is registered under its event when the quote
/// feed connection is created; unsupplied fields are simply not
/// registered. No default logging or recovery behavior is attached —
/// instrumentation is a caller concern.
#[derive(Clone, Default)]
pub struct ExceptionHandlers {
    /// Invoked when the initial connection attempt fails.
    pub connect_error: Option<LifecycleHandler>,
    /// Invoked when the initial connection attempt times out.
    pub connect_timeout: Option<LifecycleHandler>,
    /// Invoked when an established connection is lost.
    pub disconnect: Option<LifecycleHandler>,
    /// Invoked on transport-level errors.
    pub error: Option<LifecycleHandler>,
    /// Invoked when the transport re-establishes a lost connection.
    pub reconnect: Option<LifecycleHandler>,
    /// Invoked before each reconnect attempt.
    pub reconnect_attempt: Option<LifecycleHandler>,
    /// Invoked when a reconnect attempt fails.
    pub reconnect_error: Option<LifecycleHandler>,
    /// Invoked when the transport gives up reconnecting.
    pub reconnect_failed: Option<LifecycleHandler>,
}

impl std::fmt::Debug for ExceptionHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExceptionHandlers")
            .field("connect_error", &self.connect_error.is_some())
            .field("connect_timeout", &self.connect_timeout.is_some())
            .field("disconnect", &self.disconnect.is_some())
            .field("error", &self.error.is_some())
            .field("reconnect", &self.reconnect.is_some())
            .field("reconnect_attempt", &self.reconnect_attempt.is_some())
            .field("reconnect_error", &self.reconnect_error.is_some())
            .field("reconnect_failed", &self.reconnect_failed.is_some())
            .finish()
    }
}

/// Register each supplied handler on `socket` under its lifecycle event.
pub fn init_exception_handlers(socket: &Arc<dyn Socket>, handlers: &ExceptionHandlers) {
    let supplied = [
        (LifecycleEvent::ConnectError, &handlers.connect_error),
        (LifecycleEvent::ConnectTimeout, &handlers.connect_timeout),
        (LifecycleEvent::Disconnect, &handlers.disconnect),
        (LifecycleEvent::Error, &handlers.error),
        (LifecycleEvent::Reconnect, &handlers.reconnect),
        (LifecycleEvent::ReconnectAttempt, &handlers.reconnect_attempt),
        (LifecycleEvent::ReconnectError, &handlers.reconnect_error),
        (LifecycleEvent::ReconnectFailed, &handlers.reconnect_failed),
    ];

    for (event, handler) in supplied {
        if let Some(handler) = handler {
            socket.on_lifecycle(event, Arc::clone(handler));
        }
    }
}
