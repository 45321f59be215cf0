//! Application configuration payload.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use serde_json::Value;
use tracing::{debug, info};

/// Built-in settings, visible until overridden with [`AppConfig::set_setting`].
pub const DEFAULT_SETTINGS: &[(&str, &str)] = &[("db_host", "localhost")];

const APP_NAME: &str = "SingletonApp";
const VERSION: &str = "0.1.0";

static GLOBAL: AppConfig = AppConfig::new(APP_NAME, VERSION, DEFAULT_SETTINGS);

/// The process-wide configuration.
pub fn instance() -> &'static AppConfig {
    debug!("config instance requested");
    &GLOBAL
}

/// Key-value application settings.
///
/// Reads fall back to the static defaults when a key has not been overridden.
#[derive(Debug)]
pub struct AppConfig {
    app_name: &'static str,
    version: &'static str,
    defaults: &'static [(&'static str, &'static str)],
    overrides: RwLock<BTreeMap<String, Value>>,
}

impl AppConfig {
    pub const fn new(
        app_name: &'static str,
        version: &'static str,
        defaults: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            app_name,
            version,
            defaults,
            overrides: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn app_name(&self) -> &str {
        self.app_name
    }

    pub fn version(&self) -> &str {
        self.version
    }

    pub fn get_setting(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.read_overrides().get(key) {
            return Some(value.clone());
        }
        self.defaults
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| Value::from(*v))
    }

    pub fn set_setting(&self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        info!(key = %key, value = %value, "setting updated");

        self.overrides
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, value);
    }

    /// Snapshot of every setting: defaults merged with overrides.
    pub fn all_settings(&self) -> BTreeMap<String, Value> {
        let mut all: BTreeMap<String, Value> = self
            .defaults
            .iter()
            .map(|(k, v)| ((*k).to_string(), Value::from(*v)))
            .collect();
        all.extend(
            self.read_overrides()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        all
    }

    fn read_overrides(&self) -> RwLockReadGuard<'_, BTreeMap<String, Value>> {
        self.overrides.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(APP_NAME, VERSION, DEFAULT_SETTINGS)
    }
}
