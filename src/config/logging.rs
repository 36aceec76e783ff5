use crate::core::{AppError, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging toggles carried alongside the PayPal credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub enabled: bool,
    /// Write to this file instead of stdout
    pub filename: Option<PathBuf>,
    /// `trace`, `debug`, `info`, `warn`, `error`; PayPal's `FINE` maps to `debug`
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            filename: None,
            level: "info".to_string(),
        }
    }
}

impl LogConfig {
    pub fn from_vars<F>(var: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let enabled = var("PAYPAL_LOG_ENABLED")
            .unwrap_or_else(|| "true".to_string())
            .parse()
            .map_err(|_| AppError::configuration("Invalid PAYPAL_LOG_ENABLED"))?;

        Ok(Self {
            enabled,
            filename: var("PAYPAL_LOG_FILENAME")
                .filter(|f| !f.trim().is_empty())
                .map(PathBuf::from),
            level: var("PAYPAL_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        match self.level.to_lowercase().as_str() {
            "trace" => Ok(LevelFilter::TRACE),
            "fine" | "debug" => Ok(LevelFilter::DEBUG),
            "info" => Ok(LevelFilter::INFO),
            "warn" | "warning" => Ok(LevelFilter::WARN),
            "error" => Ok(LevelFilter::ERROR),
            other => Err(AppError::configuration(format!(
                "Invalid PAYPAL_LOG_LEVEL '{}'",
                other
            ))),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.level_filter().map(|_| ())
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set. Does nothing when
/// logging is disabled. Fails if a subscriber is already installed.
pub fn init_tracing(config: &LogConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = config.level_filter()?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("paypal_bridge={}", level)));

    let (file_layer, stdout_layer) = match &config.filename {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    AppError::configuration(format!(
                        "Cannot open log file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
            let layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));
            (Some(layer), None)
        }
        None => (None, Some(fmt::layer())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| AppError::configuration(format!("Failed to install tracing: {}", e)))
}
