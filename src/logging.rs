use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Environment variable naming a log file; wins over `logging.file`.
pub const LOG_ENV_VAR: &str = "TRIAD_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default so a host UI drawing to the terminal is
/// not corrupted. Set `TRIAD_LOG` (or `logging.file`) to a path to enable it.
///
/// Log files are created with unique names to prevent conflicts when
/// multiple instances run simultaneously: `{path}.{timestamp}.{pid}`
///
/// Returns the path written to, if any.
pub fn init_tracing(config: &LoggingConfig) -> Option<PathBuf> {
    let log_path = std::env::var(LOG_ENV_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(|| config.file.clone())?;

    let unique_path = unique_log_path(&log_path);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path.display());
        return None;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already installed");
        return None;
    }

    Some(unique_path)
}

fn unique_log_path(base: &std::path::Path) -> PathBuf {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_path_appends_timestamp_and_pid() {
        let path = unique_log_path(std::path::Path::new("/tmp/triad.log"));
        let name = path.to_string_lossy().into_owned();
        assert!(name.starts_with("/tmp/triad.log."));
        assert!(name.ends_with(&format!(".{}", std::process::id())));
    }

    #[test]
    fn configured_file_receives_events() {
        if std::env::var_os(LOG_ENV_VAR).is_some() || std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            filter: "debug".to_string(),
            file: Some(dir.path().join("triad.log")),
        };

        let path = init_tracing(&config).expect("subscriber installed");
        tracing::info!("hello from the log test");

        assert!(path.starts_with(dir.path()));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("hello from the log test"));
    }

    #[test]
    fn no_file_means_no_logging() {
        if std::env::var_os(LOG_ENV_VAR).is_some() {
            return;
        }
        assert!(init_tracing(&LoggingConfig::default()).is_none());
    }
}
