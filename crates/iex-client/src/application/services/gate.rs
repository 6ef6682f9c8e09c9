//! Connection Gate
//!
//! Commands issued before a feed connection is established must not be
//! lost. [`send_when_connected`] emits immediately on a live connection
//! and otherwise parks the command until the next establishment
//! notification.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::application::ports::{Command, Socket};

/// Emit `command` on `socket` now if connected, otherwise on the next
/// establishment notification.
///
/// The deferred handler is single-use: the command is emitted at most
/// once no matter how many establishment notifications follow, so a later
/// reconnect does not replay it. Commands deferred by successive calls
/// flush in issue order, because connect handlers run in registration
/// order (see the [`Socket`] contract).
///
/// There is no error path: if the connection never becomes established
/// the command stays parked indefinitely.
pub fn send_when_connected(socket: &Arc<dyn Socket>, command: Command) {
    if socket.connected() {
        socket.emit(&command);
        return;
    }

    let pending = Mutex::new(Some(command));
    // Weak, so the handler the socket retains does not keep the socket
    // alive through its own handler list.
    let weak: Weak<dyn Socket> = Arc::downgrade(socket);
    socket.on_connect(Arc::new(move || {
        let Some(command) = pending.lock().take() else {
            return;
        };
        if let Some(socket) = weak.upgrade() {
            socket.emit(&command);
        }
    }));
}
