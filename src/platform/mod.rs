// LogTally - platform/mod.rs
//
// Platform abstraction layer: filesystem access and configuration.
// Must NOT depend on: app.

pub mod config;
pub mod fs;
