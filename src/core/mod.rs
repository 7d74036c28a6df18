// LogReader - core/mod.rs
//
// Core business logic layer.
// Dependencies: util only.
// Must NOT depend on: app, platform, or any I/O crate directly.

pub mod model;
pub mod report;
