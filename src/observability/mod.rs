//! Observability module
//!
//! Logging setup for the `confcache` binary. The library only emits
//! `tracing` events; installing a subscriber is the host's job.

pub mod logging;

pub use logging::{LogFormat, init_logging};
