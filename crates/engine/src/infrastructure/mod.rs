//! Infrastructure implementations.
//!
//! Storage adapters behind the `PlayerRepo` port, plus runtime configuration.

pub mod config;
pub mod memory;
pub mod ports;
pub mod sqlite;
