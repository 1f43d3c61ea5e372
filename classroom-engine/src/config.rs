//! Engine configuration

use std::path::PathBuf;

/// Engine configuration
///
/// # Environment variables
///
/// Every field can be overridden through an environment variable:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DESKMATE_WORK_DIR | ./deskmate-data | Working directory (store + logs) |
/// | DESKMATE_MAX_ATTEMPTS | 100 | Seating assignment attempt budget |
/// | DESKMATE_LOG_LEVEL | info | Log level |
/// | DESKMATE_LOG_JSON | false | JSON log format (production) |
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Working directory for the feature store and log files
    pub work_dir: String,
    /// Attempt budget for the randomized seating search
    ///
    /// A fixed count, not a wall-clock timeout; sized so that tens of
    /// seats with tens of rules stay well under human-perceptible latency.
    pub max_assign_attempts: u32,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// Whether logs are emitted as JSON
    pub log_json: bool,
}

/// Default attempt budget for the seating search
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to the defaults above.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("DESKMATE_WORK_DIR")
                .unwrap_or_else(|_| "./deskmate-data".into()),
            max_assign_attempts: std::env::var("DESKMATE_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_ATTEMPTS),
            log_level: std::env::var("DESKMATE_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("DESKMATE_LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Override the working directory, keeping everything else from the
    /// environment. Used by tests.
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// Path of the feature store database file
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("deskmate.redb")
    }

    /// Directory for log files
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
