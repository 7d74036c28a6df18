// LogReader - app/mod.rs
//
// Application layer: orchestration.
// Dependencies: core, platform.

pub mod aggregate;
pub mod present;
