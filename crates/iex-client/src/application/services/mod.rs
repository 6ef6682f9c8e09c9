//! Stream Services
//!
//! The services that drive the feed connections:
//!
//! - [`gate`]: defer commands until the connection is established
//! - [`tops`]: quote stream manager (per-symbol fan-out)
//! - [`deep`]: book/event stream manager (shape-classified fan-out)
//! - [`streaming`]: public facade over both managers

pub mod deep;
pub mod gate;
pub mod streaming;
pub mod tops;
