//! Observability subsystem.
//!
//! The crate itself only emits `tracing` events; `logging.rs` offers a
//! subscriber for hosts that want one.

pub mod logging;

pub use logging::init_logging;
