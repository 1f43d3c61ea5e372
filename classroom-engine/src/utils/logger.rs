//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and
//! production environments. Features:
//! - Console logging, pretty in development and JSON in production
//! - Optional daily rotating application logs (deleted after 14 days)

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Number of days daily log files are kept before [`cleanup_old_logs`]
/// deletes them
const LOG_RETENTION_DAYS: i64 = 14;

/// Clean up old application log files (older than the retention window)
///
/// The engine spawns no background tasks; call this from the host on its
/// own schedule (e.g., at startup or daily).
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<()> {
    use chrono::{Local, TimeZone};

    let cutoff = Local::now() - chrono::Duration::days(LOG_RETENTION_DAYS);

    if !log_dir.exists() {
        return Ok(());
    }

    // Read directory and filter old app.YYYY-MM-DD files
    for entry in fs::read_dir(log_dir)? {
        let entry = entry?;
        let path = entry.path();

        if let Some(name) = path.file_name().and_then(|n| n.to_str())
            && let Some(date_part) = name.strip_prefix("app.")
            && let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && let Some(local_datetime) = Local
                .from_local_datetime(&naive_date.and_hms_opt(0, 0, 0).unwrap())
                .single()
            && local_datetime < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(())
}

/// Initialize the logging system with optional daily rotating file output
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn")
/// * `json_format` - Whether to use JSON format (true for production, false for development)
/// * `log_dir` - Optional directory for file logging (e.g., Some("./work_dir/logs"))
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            fs::create_dir_all(log_dir)?;

            // Daily rotating appender for application logs
            let app_log = RollingFileAppender::new(Rotation::DAILY, log_dir, "app");
            let layer = if json_format {
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::sync::Mutex::new(app_log))
                    .boxed()
            } else {
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(app_log))
                    .boxed()
            };
            Some(layer)
        }
        None => None,
    };

    let console_layer = if json_format {
        // JSON format for production
        fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        // Pretty format for development
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Initialize the logging system (console only)
///
/// Convenience function for console-only logging
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_missing_dir_is_ok() {
        let dir = Path::new("/nonexistent/deskmate-logs");
        assert!(cleanup_old_logs(dir).is_ok());
    }

    #[test]
    fn test_cleanup_removes_only_stale_app_logs() {
        let tmp = tempfile::tempdir().unwrap();
        let stale = tmp.path().join("app.2000-01-01");
        let fresh = tmp
            .path()
            .join(format!("app.{}", chrono::Local::now().format("%Y-%m-%d")));
        let unrelated = tmp.path().join("notes.txt");
        for path in [&stale, &fresh, &unrelated] {
            fs::write(path, b"log line\n").unwrap();
        }

        cleanup_old_logs(tmp.path()).unwrap();

        assert!(!stale.exists());
        assert!(fresh.exists());
        assert!(unrelated.exists());
    }
}
