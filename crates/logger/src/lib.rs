//! `singleton-logger` — a lazily constructed, process-wide message logger.
//!
//! The logger is built on first request through a [`singleton_core::LazySingleton`]
//! gate and then shared by every caller. Its message list is guarded by its own
//! mutex: the gate only covers construction, not later mutation.

pub mod global;
pub mod logger;

pub use global::{instance, instance_with};
pub use logger::{LogEntry, Logger, LoggerConfig};
