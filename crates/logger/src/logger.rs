//! Logger payload.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use singleton_core::{InitError, InitResult, InstanceId};

/// Construction parameters for a [`Logger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Name stamped on every emitted line.
    pub name: String,
    /// Simulated cost of the construction routine.
    pub init_delay: Duration,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: "AppLogger".to_string(),
            init_delay: Duration::ZERO,
        }
    }
}

impl LoggerConfig {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_init_delay(mut self, delay: Duration) -> Self {
        self.init_delay = delay;
        self
    }

    pub fn validate(&self) -> InitResult<()> {
        if self.name.trim().is_empty() {
            return Err(InitError::construction("logger name must not be empty"));
        }
        Ok(())
    }
}

/// One recorded message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// 1-based position in the logger's message sequence.
    pub sequence: u64,
    pub message: String,
    pub logged_at: DateTime<Utc>,
}

/// Shared message logger.
///
/// Created once, never replaced. `log` may be called from any number of
/// threads; appends are serialized so no message is lost.
#[derive(Debug)]
pub struct Logger {
    id: InstanceId,
    name: String,
    created_at: DateTime<Utc>,
    entries: Mutex<Vec<LogEntry>>,
}

impl Logger {
    /// Run the (deliberately slow) construction routine.
    pub fn new(config: LoggerConfig) -> InitResult<Self> {
        config.validate()?;

        if !config.init_delay.is_zero() {
            debug!(
                logger = %config.name,
                delay_ms = config.init_delay.as_millis() as u64,
                "simulating heavy logger initialization"
            );
            thread::sleep(config.init_delay);
        }

        let logger = Self {
            id: InstanceId::new(),
            name: config.name,
            created_at: Utc::now(),
            entries: Mutex::new(Vec::new()),
        };
        info!(logger = %logger.name, instance = %logger.id, "logger created");
        Ok(logger)
    }

    /// Append `message` and emit it with this logger's creation time.
    pub fn log(&self, message: impl Into<String>) {
        let message = message.into();
        let mut entries = self.lock_entries();
        let sequence = entries.len() as u64 + 1;

        info!(
            logger = %self.name,
            created_at = %self.created_at.format("%H:%M:%S"),
            sequence,
            "{message}"
        );

        entries.push(LogEntry {
            sequence,
            message,
            logged_at: Utc::now(),
        });
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Snapshot of every message logged so far, in order.
    pub fn messages(&self) -> Vec<LogEntry> {
        self.lock_entries().clone()
    }

    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic mid-`log` cannot leave the vector half-written, so a poisoned
    // lock still guards valid data.
    fn lock_entries(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use singleton_core::LazySingleton;

    #[test]
    fn empty_name_is_rejected() {
        let err = Logger::new(LoggerConfig::default().with_name("  ")).unwrap_err();
        assert!(matches!(err, InitError::Construction(_)));
    }

    #[test]
    fn log_appends_in_order() {
        let logger = Logger::new(LoggerConfig::default()).unwrap();

        logger.log("Application Started.");
        logger.log("User performed an action.");

        let messages = logger.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sequence, 1);
        assert_eq!(messages[0].message, "Application Started.");
        assert_eq!(messages[1].sequence, 2);
        assert_eq!(messages[1].message, "User performed an action.");
        assert!(messages[0].logged_at >= logger.created_at());
    }

    #[test]
    fn init_delay_is_applied() {
        let delay = Duration::from_millis(30);
        let started = std::time::Instant::now();

        Logger::new(LoggerConfig::default().with_init_delay(delay)).unwrap();

        assert!(started.elapsed() >= delay);
    }

    #[test]
    fn concurrent_logs_are_not_lost() {
        let logger = Arc::new(Logger::new(LoggerConfig::default()).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let logger = logger.clone();
                thread::spawn(move || {
                    for n in 0..25 {
                        logger.log(format!("worker {worker} message {n}"));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let messages = logger.messages();
        assert_eq!(messages.len(), 200);
        let sequences: Vec<u64> = messages.iter().map(|e| e.sequence).collect();
        assert_eq!(sequences, (1..=200).collect::<Vec<_>>());
    }

    #[test]
    fn shared_through_an_owned_holder() {
        let holder: LazySingleton<Logger> = LazySingleton::new();

        let a = holder
            .get_or_try_init(|| Logger::new(LoggerConfig::default().with_name("first")))
            .unwrap();
        let b = holder
            .get_or_try_init(|| Logger::new(LoggerConfig::default().with_name("second")))
            .unwrap();

        a.log("via a");
        b.log("via b");

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(b.name(), "first");
        assert_eq!(a.id(), b.id());
        assert_eq!(a.created_at(), b.created_at());
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn entries_serialize() {
        let logger = Logger::new(LoggerConfig::default()).unwrap();
        logger.log("hello");

        let json = serde_json::to_value(logger.messages()).unwrap();
        assert_eq!(json[0]["sequence"], 1);
        assert_eq!(json[0]["message"], "hello");
    }
}
