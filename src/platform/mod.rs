// LogReader - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: util, core (options type only), walkdir, rfd, directories.
// Must NOT depend on: app.

pub mod config;
pub mod dialog;
pub mod fs;
