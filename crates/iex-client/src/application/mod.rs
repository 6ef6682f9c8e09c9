//! Application Layer
//!
//! Port definitions for the socket transport and the services that drive
//! it: the connection gate, the TOPS and DEEP stream managers, and the
//! streaming facade.

pub mod ports;
pub mod services;
