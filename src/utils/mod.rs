//! Shared helpers for the demo binaries.

pub mod logging;

pub use logging::init_logger;
