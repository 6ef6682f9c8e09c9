//! Streaming Subscription Integration Tests
//!
//! Exercises the connection gate, the TOPS and DEEP stream managers, and
//! the streaming facade against a scripted in-memory socket transport.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use iex_client::{
    ClientSettings, Command, ConnectHandler, DeepChannel, DeepListener, DeepMessage, DeepService,
    ExceptionHandlers, LifecycleEvent, LifecycleHandler, MessageHandler, Socket, SocketClient,
    StreamingClient, SystemEventListener, SystemEventMessage, TopsListener, TopsMessage, TopsService,
    send_when_connected,
};

// =============================================================================
// Mock Transport
// =============================================================================

#[derive(Default)]
struct MockSocket {
    connected: AtomicBool,
    emitted: Mutex<Vec<Command>>,
    connect_handlers: Mutex<Vec<ConnectHandler>>,
    message_handlers: Mutex<Vec<MessageHandler>>,
    lifecycle_handlers: Mutex<Vec<(LifecycleEvent, LifecycleHandler)>>,
}

impl MockSocket {
    fn established() -> Arc<Self> {
        let socket = Self::default();
        socket.connected.store(true, Ordering::SeqCst);
        Arc::new(socket)
    }

    fn dormant() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Flip to connected and fire connect handlers in registration order.
    fn establish(&self) {
        self.connected.store(true, Ordering::SeqCst);
        let handlers = self.connect_handlers.lock().clone();
        for handler in handlers {
            handler();
        }
    }

    /// Deliver one raw inbound message to every message handler.
    fn deliver(&self, raw: &str) {
        let handlers = self.message_handlers.lock().clone();
        for handler in handlers {
            handler(raw);
        }
    }

    /// Raise a lifecycle event with a detail string.
    fn raise(&self, event: LifecycleEvent, detail: &str) {
        let handlers = self.lifecycle_handlers.lock().clone();
        for (registered, handler) in handlers {
            if registered == event {
                handler(detail);
            }
        }
    }

    fn emitted(&self) -> Vec<Command> {
        self.emitted.lock().clone()
    }

    fn registered_lifecycle_events(&self) -> Vec<LifecycleEvent> {
        self.lifecycle_handlers
            .lock()
            .iter()
            .map(|(event, _)| *event)
            .collect()
    }
}

impl Socket for MockSocket {
    fn connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn disconnected(&self) -> bool {
        !self.connected()
    }

    fn on_connect(&self, handler: ConnectHandler) {
        self.connect_handlers.lock().push(handler);
    }

    fn on_message(&self, handler: MessageHandler) {
        self.message_handlers.lock().push(handler);
    }

    fn on_lifecycle(&self, event: LifecycleEvent, handler: LifecycleHandler) {
        self.lifecycle_handlers.lock().push((event, handler));
    }

    fn emit(&self, command: &Command) {
        self.emitted.lock().push(command.clone());
    }
}

/// Factory handing out one `MockSocket` per `connect` call, recording
/// the requested URLs.
struct MockSocketClient {
    sockets: Mutex<Vec<(String, Arc<MockSocket>)>>,
    connect_established: bool,
}

impl MockSocketClient {
    fn established() -> Arc<Self> {
        Arc::new(Self {
            sockets: Mutex::new(Vec::new()),
            connect_established: true,
        })
    }

    fn dormant() -> Arc<Self> {
        Arc::new(Self {
            sockets: Mutex::new(Vec::new()),
            connect_established: false,
        })
    }

    fn connected_urls(&self) -> Vec<String> {
        self.sockets
            .lock()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    /// The socket serving the URL that ends with `suffix`.
    fn socket_for(&self, suffix: &str) -> Arc<MockSocket> {
        self.sockets
            .lock()
            .iter()
            .find(|(url, _)| url.ends_with(suffix))
            .map(|(_, socket)| Arc::clone(socket))
            .expect("no connection for suffix")
    }
}

impl SocketClient for MockSocketClient {
    fn connect(&self, url: &str) -> Arc<dyn Socket> {
        let socket = if self.connect_established {
            MockSocket::established()
        } else {
            MockSocket::dormant()
        };
        self.sockets.lock().push((url.to_string(), Arc::clone(&socket)));
        socket
    }
}

// =============================================================================
// Helpers
// =============================================================================

const WS_BASE_URL: &str = "https://ws-api.iextrading.com/1.0";

fn tops_service(client: &MockSocketClient) -> TopsService {
    TopsService::new(client, &ExceptionHandlers::default(), WS_BASE_URL)
}

fn deep_service(client: &MockSocketClient) -> DeepService {
    DeepService::new(client, WS_BASE_URL)
}

fn quote_json(symbol: &str) -> String {
    format!(
        r#"{{
            "symbol": "{symbol}",
            "sector": "n/a",
            "securityType": "etp",
            "bidPrice": 2,
            "bidSize": 100,
            "askPrice": 3,
            "askSize": 100,
            "lastUpdated": -1,
            "lastSalePrice": 2.5,
            "lastSaleSize": 200,
            "lastSaleTime": 1480446206461,
            "volume": 205208,
            "marketPercent": 0.00901
        }}"#
    )
}

const DEEP_BOOK_JSON: &str = r#"{"symbol":"SPOT","messageType":"book","data":{"bids":[{"price":179.8,"size":200,"timestamp":1529592055425}],"asks":[{"price":182.45,"size":100,"timestamp":1529585641644}]},"seq":440}"#;

const SYSTEM_EVENT_JSON: &str = r#"{"systemEvent":"R","timestamp":1529587800001}"#;

fn subscribe(payload: &str) -> Command {
    Command::Subscribe(payload.to_string())
}

fn unsubscribe(payload: &str) -> Command {
    Command::Unsubscribe(payload.to_string())
}

/// A TOPS listener appending `tag` to `log` on every invocation.
fn tagged_tops_listener(tag: &'static str, log: &Arc<Mutex<Vec<&'static str>>>) -> TopsListener {
    let log = Arc::clone(log);
    Arc::new(move |_: &TopsMessage| {
        log.lock().push(tag);
    })
}

// =============================================================================
// Connection Gate Tests
// =============================================================================

#[test]
fn test_gate_emits_synchronously_while_connected() {
    let mock = MockSocket::established();
    let socket: Arc<dyn Socket> = Arc::clone(&mock) as Arc<dyn Socket>;

    send_when_connected(&socket, subscribe("spy"));

    assert_eq!(mock.emitted(), vec![subscribe("spy")]);
}

#[test]
fn test_gate_defers_until_establishment() {
    let mock = MockSocket::dormant();
    let socket: Arc<dyn Socket> = Arc::clone(&mock) as Arc<dyn Socket>;

    send_when_connected(&socket, subscribe("msft"));
    assert!(mock.emitted().is_empty());

    mock.establish();
    assert_eq!(mock.emitted(), vec![subscribe("msft")]);
}

#[test]
fn test_gate_deferred_command_fires_once_across_reconnects() {
    let mock = MockSocket::dormant();
    let socket: Arc<dyn Socket> = Arc::clone(&mock) as Arc<dyn Socket>;

    send_when_connected(&socket, subscribe("msft"));

    mock.establish();
    mock.establish();

    assert_eq!(mock.emitted(), vec![subscribe("msft")]);
}

#[test]
fn test_gate_flushes_deferred_commands_in_issue_order() {
    let mock = MockSocket::dormant();
    let socket: Arc<dyn Socket> = Arc::clone(&mock) as Arc<dyn Socket>;

    send_when_connected(&socket, subscribe("aapl"));
    send_when_connected(&socket, subscribe("msft"));
    send_when_connected(&socket, unsubscribe("aapl"));

    mock.establish();

    assert_eq!(
        mock.emitted(),
        vec![subscribe("aapl"), subscribe("msft"), unsubscribe("aapl")]
    );
}

// =============================================================================
// TOPS Service Tests
// =============================================================================

#[test]
fn test_tops_connects_to_tops_endpoint() {
    let client = MockSocketClient::established();
    let _service = tops_service(&client);

    assert_eq!(
        client.connected_urls(),
        vec![format!("{WS_BASE_URL}/tops")]
    );
}

#[test]
fn test_tops_subscribe_while_connected_emits_normalized_symbol() {
    let client = MockSocketClient::established();
    let service = tops_service(&client);

    service.subscribe("SPY", Arc::new(|_: &TopsMessage| {}));

    assert_eq!(
        client.socket_for("/tops").emitted(),
        vec![subscribe("spy")]
    );
}

#[test]
fn test_tops_subscribe_while_disconnected_defers_until_connect() {
    let client = MockSocketClient::dormant();
    let service = tops_service(&client);
    let socket = client.socket_for("/tops");

    service.subscribe("MSFT", Arc::new(|_: &TopsMessage| {}));
    assert!(socket.emitted().is_empty());

    socket.establish();
    assert_eq!(socket.emitted(), vec![subscribe("msft")]);
}

#[test]
fn test_tops_second_listener_reuses_upstream_subscription() {
    let client = MockSocketClient::established();
    let service = tops_service(&client);

    service.subscribe("SPY", Arc::new(|_: &TopsMessage| {}));
    service.subscribe("spy", Arc::new(|_: &TopsMessage| {}));

    assert_eq!(
        client.socket_for("/tops").emitted(),
        vec![subscribe("spy")]
    );
}

#[test]
fn test_tops_unsubscribe_only_when_last_listener_leaves() {
    let client = MockSocketClient::established();
    let service = tops_service(&client);
    let first: TopsListener = Arc::new(|_: &TopsMessage| {});
    let second: TopsListener = Arc::new(|_: &TopsMessage| {});

    service.subscribe("SPY", Arc::clone(&first));
    service.subscribe("SPY", Arc::clone(&second));

    service.unsubscribe("SPY", &first);
    assert_eq!(
        client.socket_for("/tops").emitted(),
        vec![subscribe("spy")]
    );

    service.unsubscribe("SPY", &second);
    assert_eq!(
        client.socket_for("/tops").emitted(),
        vec![subscribe("spy"), unsubscribe("spy")]
    );
}

#[test]
fn test_tops_unsubscribe_round_trips_normalization() {
    let client = MockSocketClient::established();
    let service = tops_service(&client);
    let listener: TopsListener = Arc::new(|_: &TopsMessage| {});

    service.subscribe("spy", Arc::clone(&listener));
    service.unsubscribe("SPY", &listener);

    assert_eq!(
        client.socket_for("/tops").emitted(),
        vec![subscribe("spy"), unsubscribe("spy")]
    );
}

#[test]
fn test_tops_double_unsubscribe_sends_no_second_command() {
    let client = MockSocketClient::established();
    let service = tops_service(&client);
    let listener: TopsListener = Arc::new(|_: &TopsMessage| {});

    service.subscribe("SPY", Arc::clone(&listener));
    service.unsubscribe("SPY", &listener);
    service.unsubscribe("SPY", &listener);

    assert_eq!(
        client.socket_for("/tops").emitted(),
        vec![subscribe("spy"), unsubscribe("spy")]
    );
}

#[test]
fn test_tops_unsubscribe_all_for_symbol() {
    let client = MockSocketClient::established();
    let service = tops_service(&client);
    let log = Arc::new(Mutex::new(Vec::new()));

    service.subscribe("SPY", tagged_tops_listener("l1", &log));
    service.subscribe("SPY", tagged_tops_listener("l2", &log));

    service.unsubscribe_all_for_symbol("SPY");

    assert_eq!(
        client.socket_for("/tops").emitted(),
        vec![subscribe("spy"), unsubscribe("spy")]
    );

    client.socket_for("/tops").deliver(&quote_json("SPY"));
    assert!(log.lock().is_empty());
}

#[test]
fn test_tops_remove_all_listeners_unsubscribes_each_active_symbol() {
    let client = MockSocketClient::established();
    let service = tops_service(&client);

    service.subscribe("MSFT", Arc::new(|_: &TopsMessage| {}));
    service.subscribe("AAPL", Arc::new(|_: &TopsMessage| {}));

    service.remove_all_listeners();

    assert_eq!(
        client.socket_for("/tops").emitted(),
        vec![
            subscribe("msft"),
            subscribe("aapl"),
            unsubscribe("aapl"),
            unsubscribe("msft"),
        ]
    );
}

#[test]
fn test_tops_dispatch_routes_by_symbol_only() {
    let client = MockSocketClient::established();
    let service = tops_service(&client);
    let log = Arc::new(Mutex::new(Vec::new()));

    service.subscribe("AAPL", tagged_tops_listener("aapl", &log));
    service.subscribe("MSFT", tagged_tops_listener("msft", &log));

    client.socket_for("/tops").deliver(&quote_json("AAPL"));

    assert_eq!(*log.lock(), vec!["aapl"]);
}

#[test]
fn test_tops_dispatch_normalizes_inbound_symbol_case() {
    let client = MockSocketClient::established();
    let service = tops_service(&client);
    let log = Arc::new(Mutex::new(Vec::new()));

    service.subscribe("aapl", tagged_tops_listener("aapl", &log));

    // The feed sends upper-case symbols; routing must not care.
    client.socket_for("/tops").deliver(&quote_json("AAPL"));

    assert_eq!(*log.lock(), vec!["aapl"]);
}

#[test]
fn test_tops_dispatch_preserves_registration_order() {
    let client = MockSocketClient::established();
    let service = tops_service(&client);
    let log = Arc::new(Mutex::new(Vec::new()));

    service.subscribe("SPY", tagged_tops_listener("l1", &log));
    service.subscribe("SPY", tagged_tops_listener("l2", &log));
    service.subscribe("SPY", tagged_tops_listener("l3", &log));

    client.socket_for("/tops").deliver(&quote_json("SPY"));

    assert_eq!(*log.lock(), vec!["l1", "l2", "l3"]);
}

#[test]
fn test_tops_removed_listener_stops_receiving_mid_stream() {
    let client = MockSocketClient::established();
    let service = tops_service(&client);
    let log = Arc::new(Mutex::new(Vec::new()));
    let removed = tagged_tops_listener("removed", &log);

    service.subscribe("SPY", Arc::clone(&removed));
    service.subscribe("SPY", tagged_tops_listener("kept", &log));

    let socket = client.socket_for("/tops");
    socket.deliver(&quote_json("SPY"));
    socket.deliver(&quote_json("SPY"));

    service.unsubscribe("SPY", &removed);
    socket.deliver(&quote_json("SPY"));

    assert_eq!(
        *log.lock(),
        vec!["removed", "kept", "removed", "kept", "kept"]
    );
}

#[test]
fn test_tops_duplicate_listener_registration_invokes_twice() {
    let client = MockSocketClient::established();
    let service = tops_service(&client);
    let log = Arc::new(Mutex::new(Vec::new()));
    let duplicated = tagged_tops_listener("dup", &log);

    service.subscribe("SPY", Arc::clone(&duplicated));
    service.subscribe("SPY", Arc::clone(&duplicated));

    client.socket_for("/tops").deliver(&quote_json("SPY"));

    assert_eq!(*log.lock(), vec!["dup", "dup"]);
}

#[test]
fn test_tops_message_without_listeners_is_noop() {
    let client = MockSocketClient::established();
    let _service = tops_service(&client);

    // No listener registered for the symbol: dispatch must not fail.
    client.socket_for("/tops").deliver(&quote_json("TSLA"));
}

#[test]
fn test_tops_malformed_payload_is_isolated_per_message() {
    let client = MockSocketClient::established();
    let service = tops_service(&client);
    let log = Arc::new(Mutex::new(Vec::new()));

    service.subscribe("SPY", tagged_tops_listener("spy", &log));

    let socket = client.socket_for("/tops");
    socket.deliver("not json at all");
    socket.deliver(&quote_json("SPY"));

    assert_eq!(*log.lock(), vec!["spy"]);
}

#[test]
fn test_tops_handle_message_surfaces_parse_failure() {
    let client = MockSocketClient::established();
    let service = tops_service(&client);

    assert!(service.handle_message("{\"garbage\":true}").is_err());
    assert!(service.handle_message(&quote_json("SPY")).is_ok());
}

#[test]
fn test_tops_broadcast_invokes_listeners_directly() {
    let client = MockSocketClient::established();
    let service = tops_service(&client);
    let log = Arc::new(Mutex::new(Vec::new()));

    service.subscribe("SPY", tagged_tops_listener("spy", &log));

    let quote: TopsMessage = serde_json::from_str(&quote_json("SPY")).unwrap();
    service.broadcast(&quote);

    assert_eq!(*log.lock(), vec!["spy"]);
}

// =============================================================================
// DEEP Service Tests
// =============================================================================

#[test]
fn test_deep_connects_to_deep_endpoint() {
    let client = MockSocketClient::established();
    let _service = deep_service(&client);

    assert_eq!(
        client.connected_urls(),
        vec![format!("{WS_BASE_URL}/deep")]
    );
}

#[test]
fn test_deep_subscribe_bundles_symbol_and_channels() {
    let client = MockSocketClient::established();
    let service = deep_service(&client);

    service.subscribe("SPOT", &[DeepChannel::Book]);

    assert_eq!(
        client.socket_for("/deep").emitted(),
        vec![subscribe(r#"{"symbols":["SPOT"],"channels":["book"]}"#)]
    );
}

#[test]
fn test_deep_subscribe_preserves_caller_case() {
    let client = MockSocketClient::established();
    let service = deep_service(&client);

    service.subscribe("spot", &[DeepChannel::Trades, DeepChannel::Book]);

    assert_eq!(
        client.socket_for("/deep").emitted(),
        vec![subscribe(r#"{"symbols":["spot"],"channels":["trades","book"]}"#)]
    );
}

#[test]
fn test_deep_subscribe_all_bundles_symbols_in_one_command() {
    let client = MockSocketClient::established();
    let service = deep_service(&client);

    service.subscribe_all(&["SPOT", "AAPL"], &[DeepChannel::Trades]);

    assert_eq!(
        client.socket_for("/deep").emitted(),
        vec![subscribe(r#"{"symbols":["SPOT","AAPL"],"channels":["trades"]}"#)]
    );
}

#[test]
fn test_deep_repeated_subscribe_reissues_commands() {
    let client = MockSocketClient::established();
    let service = deep_service(&client);

    service.subscribe("SPOT", &[DeepChannel::Book]);
    service.subscribe("SPOT", &[DeepChannel::Book]);

    // No bookkeeping on this feed: both commands go out.
    assert_eq!(client.socket_for("/deep").emitted().len(), 2);
}

#[test]
fn test_deep_system_event_subscription_has_no_symbols() {
    let client = MockSocketClient::established();
    let service = deep_service(&client);

    service.subscribe_system_events();

    assert_eq!(
        client.socket_for("/deep").emitted(),
        vec![subscribe(r#"{"channels":["systemevent"]}"#)]
    );
}

#[test]
fn test_deep_subscribe_while_disconnected_defers() {
    let client = MockSocketClient::dormant();
    let service = deep_service(&client);
    let socket = client.socket_for("/deep");

    service.subscribe("SPOT", &[DeepChannel::Book]);
    assert!(socket.emitted().is_empty());

    socket.establish();
    assert_eq!(
        socket.emitted(),
        vec![subscribe(r#"{"symbols":["SPOT"],"channels":["book"]}"#)]
    );
}

#[test]
fn test_deep_data_message_routes_to_data_listeners_only() {
    let client = MockSocketClient::established();
    let service = deep_service(&client);
    let data_log = Arc::new(Mutex::new(Vec::new()));
    let system_log = Arc::new(Mutex::new(Vec::new()));

    let data_sink = Arc::clone(&data_log);
    service.add_deep_listener(Arc::new(move |message: &DeepMessage| {
        data_sink.lock().push(message.message_type.clone());
    }));
    let system_sink = Arc::clone(&system_log);
    service.add_system_event_listener(Arc::new(move |event: &SystemEventMessage| {
        system_sink.lock().push(event.timestamp);
    }));

    client.socket_for("/deep").deliver(DEEP_BOOK_JSON);

    assert_eq!(*data_log.lock(), vec!["book".to_string()]);
    assert!(system_log.lock().is_empty());
}

#[test]
fn test_deep_system_event_routes_to_system_listeners_only() {
    let client = MockSocketClient::established();
    let service = deep_service(&client);
    let data_log = Arc::new(Mutex::new(Vec::new()));
    let system_log = Arc::new(Mutex::new(Vec::new()));

    let data_sink = Arc::clone(&data_log);
    service.add_deep_listener(Arc::new(move |message: &DeepMessage| {
        data_sink.lock().push(message.message_type.clone());
    }));
    let system_sink = Arc::clone(&system_log);
    service.add_system_event_listener(Arc::new(move |event: &SystemEventMessage| {
        system_sink.lock().push(event.timestamp);
    }));

    client.socket_for("/deep").deliver(SYSTEM_EVENT_JSON);

    assert!(data_log.lock().is_empty());
    assert_eq!(*system_log.lock(), vec![1_529_587_800_001]);
}

#[test]
fn test_deep_unrecognized_shape_is_silently_dropped() {
    let client = MockSocketClient::established();
    let service = deep_service(&client);
    let data_log = Arc::new(Mutex::new(Vec::new()));

    let data_sink = Arc::clone(&data_log);
    service.add_deep_listener(Arc::new(move |message: &DeepMessage| {
        data_sink.lock().push(message.message_type.clone());
    }));

    let socket = client.socket_for("/deep");
    socket.deliver(r#"{"heartbeat":true}"#);
    assert!(data_log.lock().is_empty());

    assert!(service.handle_message(r#"{"heartbeat":true}"#).is_ok());
}

#[test]
fn test_deep_unknown_message_type_still_reaches_data_listeners() {
    let client = MockSocketClient::established();
    let service = deep_service(&client);
    let data_log = Arc::new(Mutex::new(Vec::new()));

    let data_sink = Arc::clone(&data_log);
    service.add_deep_listener(Arc::new(move |message: &DeepMessage| {
        data_sink.lock().push(message.message_type.clone());
    }));

    client
        .socket_for("/deep")
        .deliver(r#"{"symbol":"SPOT","messageType":"flux-capacitor","data":{"x":1}}"#);

    assert_eq!(*data_log.lock(), vec!["flux-capacitor".to_string()]);
}

#[test]
fn test_deep_invalid_json_surfaces_from_handle_message() {
    let client = MockSocketClient::established();
    let service = deep_service(&client);

    assert!(service.handle_message("{{nope").is_err());
    assert!(service.handle_message(DEEP_BOOK_JSON).is_ok());
}

#[test]
fn test_deep_removed_listener_stops_receiving() {
    let client = MockSocketClient::established();
    let service = deep_service(&client);
    let data_log = Arc::new(Mutex::new(Vec::new()));

    let data_sink = Arc::clone(&data_log);
    let removable: DeepListener = Arc::new(move |message: &DeepMessage| {
        data_sink.lock().push(message.message_type.clone());
    });
    service.add_deep_listener(Arc::clone(&removable));

    let socket = client.socket_for("/deep");
    socket.deliver(DEEP_BOOK_JSON);

    service.remove_deep_listener(&removable);
    socket.deliver(DEEP_BOOK_JSON);

    assert_eq!(data_log.lock().len(), 1);
}

#[test]
fn test_deep_remove_all_listener_lists_are_independent() {
    let client = MockSocketClient::established();
    let service = deep_service(&client);
    let data_log = Arc::new(Mutex::new(Vec::new()));
    let system_log = Arc::new(Mutex::new(Vec::new()));

    let data_sink = Arc::clone(&data_log);
    service.add_deep_listener(Arc::new(move |message: &DeepMessage| {
        data_sink.lock().push(message.message_type.clone());
    }));
    let system_sink = Arc::clone(&system_log);
    let system_listener: SystemEventListener = Arc::new(move |event: &SystemEventMessage| {
        system_sink.lock().push(event.timestamp);
    });
    service.add_system_event_listener(system_listener);

    service.remove_all_deep_listeners();

    let socket = client.socket_for("/deep");
    socket.deliver(DEEP_BOOK_JSON);
    socket.deliver(SYSTEM_EVENT_JSON);

    assert!(data_log.lock().is_empty());
    assert_eq!(system_log.lock().len(), 1);
}

// =============================================================================
// Facade Tests
// =============================================================================

#[test]
fn test_facade_opens_no_connection_until_first_use() {
    let factory = MockSocketClient::established();
    let _client = StreamingClient::new(Arc::clone(&factory) as Arc<dyn SocketClient>);

    assert!(factory.connected_urls().is_empty());
}

#[test]
fn test_facade_creates_each_feed_connection_lazily_and_once() {
    let factory = MockSocketClient::established();
    let client = StreamingClient::new(Arc::clone(&factory) as Arc<dyn SocketClient>);

    client.subscribe_tops("SPY", Arc::new(|_: &TopsMessage| {}));
    client.subscribe_tops("AAPL", Arc::new(|_: &TopsMessage| {}));

    assert_eq!(
        factory.connected_urls(),
        vec![format!("{WS_BASE_URL}/tops")]
    );

    client.add_deep_listener(Arc::new(|_: &DeepMessage| {}));

    assert_eq!(
        factory.connected_urls(),
        vec![
            format!("{WS_BASE_URL}/tops"),
            format!("{WS_BASE_URL}/deep"),
        ]
    );
}

#[test]
fn test_facade_forwards_tops_operations() {
    let factory = MockSocketClient::established();
    let client = StreamingClient::new(Arc::clone(&factory) as Arc<dyn SocketClient>);
    let log = Arc::new(Mutex::new(Vec::new()));
    let listener = tagged_tops_listener("spy", &log);

    client.subscribe_tops("SPY", Arc::clone(&listener));
    factory.socket_for("/tops").deliver(&quote_json("SPY"));
    assert_eq!(*log.lock(), vec!["spy"]);

    client.unsubscribe_tops("SPY", &listener);
    assert_eq!(
        factory.socket_for("/tops").emitted(),
        vec![subscribe("spy"), unsubscribe("spy")]
    );
}

#[test]
fn test_facade_subscribe_deep_default_channels() {
    let factory = MockSocketClient::established();
    let client = StreamingClient::new(Arc::clone(&factory) as Arc<dyn SocketClient>);

    client.subscribe_deep_default("SPOT");

    assert_eq!(
        factory.socket_for("/deep").emitted(),
        vec![subscribe(r#"{"symbols":["SPOT"],"channels":["trades","book"]}"#)]
    );
}

#[test]
fn test_facade_forwards_system_event_operations() {
    let factory = MockSocketClient::established();
    let client = StreamingClient::new(Arc::clone(&factory) as Arc<dyn SocketClient>);
    let log = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&log);
    client.add_system_event_listener(Arc::new(move |event: &SystemEventMessage| {
        sink.lock().push(event.timestamp);
    }));
    client.subscribe_system_events();

    factory.socket_for("/deep").deliver(SYSTEM_EVENT_JSON);

    assert_eq!(*log.lock(), vec![1_529_587_800_001]);
}

#[test]
fn test_facade_registers_supplied_exception_handlers_on_quote_feed() {
    let factory = MockSocketClient::established();
    let disconnects = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&disconnects);

    let handlers = ExceptionHandlers {
        disconnect: Some(Arc::new(move |reason: &str| {
            sink.lock().push(reason.to_string());
        })),
        ..ExceptionHandlers::default()
    };

    let client = StreamingClient::with_settings(
        Arc::clone(&factory) as Arc<dyn SocketClient>,
        handlers,
        ClientSettings::default(),
    );
    client.subscribe_tops("SPY", Arc::new(|_: &TopsMessage| {}));

    let socket = factory.socket_for("/tops");

    // Only the supplied callback is registered.
    assert_eq!(
        socket.registered_lifecycle_events(),
        vec![LifecycleEvent::Disconnect]
    );

    socket.raise(LifecycleEvent::Disconnect, "transport close");
    assert_eq!(*disconnects.lock(), vec!["transport close".to_string()]);
}

#[test]
fn test_facade_websocket_base_url_override_applies_to_both_feeds() {
    let factory = MockSocketClient::established();
    let settings = ClientSettings::new().with_websocket_base_url("https://mock.local/1.0");
    let client = StreamingClient::with_settings(
        Arc::clone(&factory) as Arc<dyn SocketClient>,
        ExceptionHandlers::default(),
        settings,
    );

    client.subscribe_tops("SPY", Arc::new(|_: &TopsMessage| {}));
    client.subscribe_deep_default("SPOT");

    assert_eq!(
        factory.connected_urls(),
        vec![
            "https://mock.local/1.0/tops".to_string(),
            "https://mock.local/1.0/deep".to_string(),
        ]
    );
}
