//! App settings and preferences
//!
//! Persisted separately from the saved ads list, in the same key-value store.

use serde::{Deserialize, Serialize};

use crate::persistence::{KeyValueStore, PersistError};

/// Console log level choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    All,
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
    Off,
}

impl LogLevel {
    pub const ALL: [LogLevel; 8] = [
        LogLevel::All,
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Off,
    ];

    /// Menu title
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::All => "All",
            LogLevel::Trace => "Trace",
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Informational",
            LogLevel::Warn => "Warnings",
            LogLevel::Error => "Errors",
            LogLevel::Fatal => "Fatal",
            LogLevel::Off => "Off",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(LogLevel::All),
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" | "informational" => Some(LogLevel::Info),
            "warn" | "warning" | "warnings" => Some(LogLevel::Warn),
            "error" | "errors" => Some(LogLevel::Error),
            "fatal" => Some(LogLevel::Fatal),
            "off" | "none" => Some(LogLevel::Off),
            _ => None,
        }
    }

    /// Equivalent `log` filter. `log` has no fatal level, so Fatal maps to Error.
    pub fn to_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::All | LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error | LogLevel::Fatal => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

/// App preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Console log level
    pub log_level: LogLevel,
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "com.mopub.canary.settings";

    /// Load settings, falling back to defaults on missing or bad data
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::debug!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring invalid settings: {e}"),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read settings: {e}"),
        }

        log::debug!("Using default settings");
        Self::default()
    }

    /// Save settings (failures are logged)
    pub fn save(&self, store: &mut impl KeyValueStore) {
        let result = serde_json::to_string(self)
            .map_err(PersistError::from)
            .and_then(|json| store.set(Self::STORAGE_KEY, &json));

        match result {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Failed to save settings: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::from_str("Warnings"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_str("INFO"), Some(LogLevel::Info));
        assert_eq!(LogLevel::from_str("verbose"), None);
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_str(level.as_str()), Some(level));
        }
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::All.to_filter(), log::LevelFilter::Trace);
        assert_eq!(LogLevel::Fatal.to_filter(), log::LevelFilter::Error);
        assert_eq!(LogLevel::Off.to_filter(), log::LevelFilter::Off);
    }

    #[test]
    fn test_settings_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(Settings::load(&store), Settings::default());

        let settings = Settings {
            log_level: LogLevel::Debug,
        };
        settings.save(&mut store);
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_bad_settings_fall_back_to_default() {
        let mut store = MemoryStore::new();
        store.set(Settings::STORAGE_KEY, "{\"log_level\":\"Loud\"}").unwrap();
        assert_eq!(Settings::load(&store), Settings::default());

        store.set(Settings::STORAGE_KEY, "{}").unwrap();
        assert_eq!(Settings::load(&store).log_level, LogLevel::Info);
    }
}
