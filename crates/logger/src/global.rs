//! Process-wide logger instance.

use std::sync::Arc;

use tracing::debug;

use singleton_core::{InitResult, LazySingleton};

use crate::logger::{Logger, LoggerConfig};

static INSTANCE: LazySingleton<Logger> = LazySingleton::new();

/// Return the process-wide logger, constructing it with defaults on first use.
pub fn instance() -> InitResult<Arc<Logger>> {
    instance_with(LoggerConfig::default())
}

/// Return the process-wide logger, constructing it from `config` on first use.
///
/// Only the first caller's `config` is used. Later configs are ignored; the
/// existing instance is returned unchanged.
pub fn instance_with(config: LoggerConfig) -> InitResult<Arc<Logger>> {
    debug!("logger instance requested");

    let requested = config.name.clone();
    let mut constructed = false;
    let logger = INSTANCE.get_or_try_init(|| {
        constructed = true;
        Logger::new(config)
    })?;

    if !constructed && logger.name() != requested {
        debug!(
            existing = %logger.name(),
            requested = %requested,
            "logger already initialized; ignoring new config"
        );
    }

    Ok(logger)
}
