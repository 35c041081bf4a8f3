//! Configuration module
//!
//! Reads TOML from the platform config dir
//! (e.g. ~/.config/bikeshare-booking/config.toml), overridable through
//! `BOOKING_CONFIG`; missing file or keys fall back to defaults.

use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
    pub booking: BookingSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseSettings::default(),
            logging: LoggingSettings::default(),
            booking: BookingSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn policy(&self) -> BookingPolicy {
        self.booking.policy()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Database URL; a `DATABASE_URL` env var wins when set
    pub url: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "sqlite://./bookings.db?mode=rwc".to_string(),
        }
    }
}

impl DatabaseSettings {
    pub fn connection_url(&self) -> String {
        std::env::var("DATABASE_URL").unwrap_or_else(|_| self.url.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default tracing filter, e.g. "info" or "bikeshare_booking=debug"
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Booking policy knobs. Duration bounds and the handover buffer are
/// deployment configuration, not core constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingSettings {
    pub min_duration_minutes: i64,
    pub max_duration_minutes: i64,
    pub handover_buffer_minutes: i64,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            min_duration_minutes: 60,
            max_duration_minutes: 24 * 60,
            handover_buffer_minutes: 60,
        }
    }
}

impl BookingSettings {
    pub fn policy(&self) -> BookingPolicy {
        BookingPolicy {
            min_duration: Duration::minutes(self.min_duration_minutes),
            max_duration: Duration::minutes(self.max_duration_minutes),
            handover_buffer: Duration::minutes(self.handover_buffer_minutes),
        }
    }
}

/// Duration bounds and handover buffer consumed by the services.
#[derive(Debug, Clone, Copy)]
pub struct BookingPolicy {
    pub min_duration: Duration,
    pub max_duration: Duration,
    pub handover_buffer: Duration,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        BookingSettings::default().policy()
    }
}

/// Default location of the config file.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bikeshare-booking")
        .join("config.toml")
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_policy() {
        let policy = AppConfig::default().policy();
        assert_eq!(policy.min_duration, Duration::hours(1));
        assert_eq!(policy.max_duration, Duration::hours(24));
        assert_eq!(policy.handover_buffer, Duration::hours(1));
    }

    #[test]
    fn partial_toml_keeps_defaults_for_the_rest() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [booking]
            handover_buffer_minutes = 30

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.booking.handover_buffer_minutes, 30);
        assert_eq!(cfg.booking.min_duration_minutes, 60);
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.database.url, DatabaseSettings::default().url);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.booking.max_duration_minutes, 24 * 60);
    }
}
