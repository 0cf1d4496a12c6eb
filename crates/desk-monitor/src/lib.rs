//! Logging and observability bootstrap.

mod logging;

pub use logging::setup_logging;
