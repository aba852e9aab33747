// LogTally - app/mod.rs
//
// Application layer: loading and command orchestration.
// Dependencies: core, platform, util.

pub mod driver;
pub mod loader;
