//! Logging Infrastructure
//!
//! Structured logging setup for development and production:
//! - Console output (pretty or JSON)
//! - Daily rotating application logs under `<log_dir>/app/`
//! - Retention cleanup of rotated files

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const APP_LOG_PREFIX: &str = "app";
const APP_LOG_SUFFIX: &str = "log";

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn")
/// * `json_format` - JSON output (production) instead of pretty output
/// * `log_dir` - Optional directory for file logging (e.g., Some("./hr-data/logs"))
///
/// # Examples
/// ```no_run
/// use hr_server::utils::logger::init_logger_with_file;
///
/// // Development setup (console only)
/// init_logger_with_file("debug", false, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let file_layer = match log_dir {
        Some(dir) => {
            let app_log_dir = dir.join("app");
            fs::create_dir_all(&app_log_dir)?;

            // app.YYYY-MM-DD.log, subject to cleanup_old_logs
            let app_log = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(APP_LOG_PREFIX)
                .filename_suffix(APP_LOG_SUFFIX)
                .build(&app_log_dir)?;

            Some(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::sync::Mutex::new(app_log))
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Delete rotated application logs older than `retention_days`
///
/// Returns the number of files removed.
pub fn cleanup_old_logs(log_dir: &Path, retention_days: u64) -> anyhow::Result<usize> {
    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(0);
    }

    let cutoff = chrono::Local::now().date_naive() - chrono::Duration::days(retention_days as i64);
    let mut removed = 0;

    for entry in fs::read_dir(&app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if let Some(date) = rotated_log_date(name)
            && date < cutoff
        {
            fs::remove_file(&path)?;
            removed += 1;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(removed)
}

/// Parse the date out of `app.YYYY-MM-DD.log`
fn rotated_log_date(name: &str) -> Option<chrono::NaiveDate> {
    let date_part = name
        .strip_prefix(APP_LOG_PREFIX)?
        .strip_prefix('.')?
        .strip_suffix(APP_LOG_SUFFIX)?
        .strip_suffix('.')?;
    chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotated_log_date() {
        assert_eq!(
            rotated_log_date("app.2024-03-09.log"),
            chrono::NaiveDate::from_ymd_opt(2024, 3, 9)
        );
        assert_eq!(rotated_log_date("app.log"), None);
        assert_eq!(rotated_log_date("audit.2024-03-09.log"), None);
        assert_eq!(rotated_log_date("app.not-a-date.log"), None);
    }

    #[test]
    fn test_cleanup_old_logs() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("app");
        fs::create_dir_all(&app_dir).unwrap();

        let today = chrono::Local::now().date_naive();
        let old = today - chrono::Duration::days(30);
        let recent = today - chrono::Duration::days(2);

        let old_file = app_dir.join(format!("app.{}.log", old.format("%Y-%m-%d")));
        let recent_file = app_dir.join(format!("app.{}.log", recent.format("%Y-%m-%d")));
        let other_file = app_dir.join("notes.txt");
        for f in [&old_file, &recent_file, &other_file] {
            fs::write(f, b"x").unwrap();
        }

        let removed = cleanup_old_logs(dir.path(), 14).unwrap();
        assert_eq!(removed, 1);
        assert!(!old_file.exists());
        assert!(recent_file.exists());
        assert!(other_file.exists());
    }

    #[test]
    fn test_cleanup_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(cleanup_old_logs(dir.path(), 14).unwrap(), 0);
    }
}
