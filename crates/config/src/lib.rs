//! `singleton-config` — an eagerly constructed, process-wide settings store.
//!
//! [`AppConfig::new`] is `const`, so the global instance is a plain `static`
//! that exists before any code runs. No initialization gate is involved;
//! [`instance`] is a trivial accessor. The settings map still needs its own lock
//! because callers mutate it concurrently.

pub mod config;

pub use config::{AppConfig, DEFAULT_SETTINGS, instance};
