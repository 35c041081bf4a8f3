//! Database connection and configuration

pub mod entities;
pub mod migrator;
pub mod repositories;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./bookings.db?mode=rwc")
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./bookings.db?mode=rwc".to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Create config for SQLite
    pub fn sqlite(path: &str) -> Self {
        Self {
            url: format!("sqlite://{}?mode=rwc", path),
        }
    }

    /// Create config from environment variable
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://./bookings.db?mode=rwc".to_string()),
        }
    }

    fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite")
    }
}

/// Initialize the database connection pool.
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);
    let mut opts = ConnectOptions::new(config.url.clone());
    if config.is_sqlite() {
        // SQLite admits one writer; a single connection also keeps the
        // overlap check-and-insert serialized without row locks
        opts.max_connections(1);
    }
    let db = Database::connect(opts).await?;
    info!("Database connected successfully");
    Ok(db)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_helper_builds_a_rwc_url() {
        let cfg = DatabaseConfig::sqlite("./data/test.db");
        assert_eq!(cfg.url, "sqlite://./data/test.db?mode=rwc");
        assert!(cfg.is_sqlite());
    }

    #[test]
    fn postgres_urls_are_not_sqlite() {
        let cfg = DatabaseConfig {
            url: "postgres://localhost/bookings".into(),
        };
        assert!(!cfg.is_sqlite());
    }
}
