//! Infrastructure Layer
//!
//! Adapters and wire-format definitions:
//!
//! - `iex`: message types for the TOPS and DEEP streaming feeds
//! - `rest`: HTTP adapter and the typed REST response catalog
//! - `config`: endpoint configuration with documented defaults

pub mod config;
pub mod iex;
pub mod rest;
