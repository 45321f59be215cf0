//! Console demo of the lazy logger and eager config singletons.

pub mod config;
pub mod scenario;

pub use config::DemoConfig;
pub use scenario::{ConfigReport, LoggerReport, run_config_demo, run_logger_demo};
