//! Demo configuration (environment variables only).

use std::time::Duration;

use anyhow::{Context, bail};

use singleton_logger::LoggerConfig;

pub const WORKERS_VAR: &str = "SINGLETON_WORKERS";
pub const INIT_DELAY_VAR: &str = "SINGLETON_INIT_DELAY_MS";

/// Knobs for the demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of concurrent workers requesting the logger.
    pub workers: usize,
    /// Simulated cost of building the logger.
    pub init_delay: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            workers: 5,
            init_delay: Duration::from_secs(1),
        }
    }
}

impl DemoConfig {
    /// Read `SINGLETON_WORKERS` and `SINGLETON_INIT_DELAY_MS`, falling back to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(WORKERS_VAR) {
            let workers: usize = raw.trim().parse().with_context(|| {
                format!("{WORKERS_VAR} must be a positive integer, got {raw:?}")
            })?;
            if workers == 0 {
                bail!("{WORKERS_VAR} must be at least 1");
            }
            config.workers = workers;
        }

        if let Some(raw) = lookup(INIT_DELAY_VAR) {
            let millis: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{INIT_DELAY_VAR} must be milliseconds, got {raw:?}"))?;
            config.init_delay = Duration::from_millis(millis);
        }

        Ok(config)
    }

    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig::default().with_init_delay(self.init_delay)
    }
}
