// LogReader - lib.rs
//
// Library entry point, exposing every module for integration testing and
// for embedding the aggregator in other programs.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
