//! The two demo scenarios, returned as reports so they can be asserted on.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use anyhow::{Context, anyhow};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::info;

use crate::config::DemoConfig;

/// Outcome of the concurrent lazy-logger run.
#[derive(Debug, Clone)]
pub struct LoggerReport {
    pub workers: usize,
    pub same_instance: bool,
    pub first_created_at: DateTime<Utc>,
    pub second_created_at: DateTime<Utc>,
    pub entries: usize,
}

/// Outcome of the eager-config run.
#[derive(Debug, Clone)]
pub struct ConfigReport {
    pub app_name: String,
    pub db_host_before: Option<Value>,
    pub db_host_after: Option<Value>,
    pub same_instance: bool,
    pub settings: BTreeMap<String, Value>,
}

/// Spawn `config.workers` threads that each fetch the logger and log once,
/// then fetch it twice more and compare.
pub fn run_logger_demo(config: &DemoConfig) -> anyhow::Result<LoggerReport> {
    let handles = (0..config.workers)
        .map(|id| {
            let logger_config = config.logger_config();
            thread::Builder::new()
                .name(format!("worker-{id}"))
                .spawn(move || {
                    info!(worker = id, "requesting logger instance");
                    let logger = singleton_logger::instance_with(logger_config)?;
                    logger.log(format!(
                        "Message from worker {id}, logger init time: {}",
                        logger.created_at().format("%H:%M:%S%.3f")
                    ));
                    Ok::<_, singleton_core::InitError>(())
                })
                .with_context(|| format!("failed to spawn worker {id}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    for (id, handle) in handles.into_iter().enumerate() {
        handle
            .join()
            .map_err(|_| anyhow!("worker {id} panicked"))?
            .with_context(|| format!("worker {id} could not obtain the logger"))?;
    }
    info!(workers = config.workers, "all workers finished");

    let first = singleton_logger::instance().context("logger unavailable")?;
    let second = singleton_logger::instance().context("logger unavailable")?;

    Ok(LoggerReport {
        workers: config.workers,
        same_instance: Arc::ptr_eq(&first, &second),
        first_created_at: first.created_at(),
        second_created_at: second.created_at(),
        entries: first.len(),
    })
}

/// Mutate a setting through one reference and read it back through another.
pub fn run_config_demo() -> ConfigReport {
    let cfg1 = singleton_config::instance();
    let db_host_before = cfg1.get_setting("db_host");

    let cfg2 = singleton_config::instance();
    cfg2.set_setting("db_host", "remote-db.example.com");

    ConfigReport {
        app_name: cfg1.app_name().to_string(),
        db_host_before,
        db_host_after: cfg1.get_setting("db_host"),
        same_instance: std::ptr::eq(cfg1, cfg2),
        settings: cfg1.all_settings(),
    }
}
