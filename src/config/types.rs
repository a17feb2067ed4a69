use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub context: ContextConfig,
}

/// Tracing output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file path. Logging stays off when neither this nor `TRIAD_LOG` is set.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Presentation context settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Max jobs executed by one `run_pending` call (default: 64).
    #[serde(default = "default_drain_budget")]
    pub drain_budget: usize,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_drain_budget() -> usize {
    64
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            drain_budget: default_drain_budget(),
        }
    }
}
