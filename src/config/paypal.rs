use crate::core::{AppError, Result};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::time::Duration;

use super::logging::LogConfig;

/// PayPal environment the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaypalMode {
    #[default]
    Sandbox,
    Live,
}

impl PaypalMode {
    /// REST API base URL for this mode
    pub fn base_url(&self) -> &'static str {
        match self {
            PaypalMode::Sandbox => "https://api.sandbox.paypal.com",
            PaypalMode::Live => "https://api.paypal.com",
        }
    }
}

impl fmt::Display for PaypalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaypalMode::Sandbox => write!(f, "sandbox"),
            PaypalMode::Live => write!(f, "live"),
        }
    }
}

impl std::str::FromStr for PaypalMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sandbox" => Ok(PaypalMode::Sandbox),
            "live" => Ok(PaypalMode::Live),
            _ => Err(AppError::configuration(format!(
                "Invalid PAYPAL_MODE '{}', expected 'sandbox' or 'live'",
                s
            ))),
        }
    }
}

/// Credentials and transport settings for the PayPal REST client
#[derive(Debug, Clone)]
pub struct PaypalConfig {
    pub client_id: String,
    pub secret: SecretString,
    pub mode: PaypalMode,
    /// Connection timeout for calls to PayPal
    pub http_connection_timeout: Duration,
    /// Not applied by `PaypalClient`; install with `init_tracing(&config.log)`
    /// or load everything through `Config::load`
    pub log: LogConfig,
}

impl PaypalConfig {
    pub fn new(client_id: impl Into<String>, secret: impl Into<String>, mode: PaypalMode) -> Self {
        Self {
            client_id: client_id.into(),
            secret: SecretString::new(secret.into().into()),
            mode,
            http_connection_timeout: Duration::from_secs(30),
            log: LogConfig::default(),
        }
    }

    /// Load PayPal settings from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load PayPal settings through an arbitrary variable lookup
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = var("PAYPAL_CLIENT_ID")
            .ok_or_else(|| AppError::configuration("PAYPAL_CLIENT_ID not set"))?;
        let secret =
            var("PAYPAL_SECRET").ok_or_else(|| AppError::configuration("PAYPAL_SECRET not set"))?;

        let mode = match var("PAYPAL_MODE") {
            Some(mode) => mode.parse()?,
            None => PaypalMode::default(),
        };

        let timeout_secs: u64 = var("PAYPAL_HTTP_CONNECTION_TIMEOUT")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .map_err(|_| AppError::configuration("Invalid PAYPAL_HTTP_CONNECTION_TIMEOUT"))?;

        Ok(Self {
            client_id,
            secret: SecretString::new(secret.into()),
            mode,
            http_connection_timeout: Duration::from_secs(timeout_secs),
            log: LogConfig::from_vars(&var)?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.client_id.trim().is_empty() {
            return Err(AppError::configuration("PayPal client id cannot be empty"));
        }

        if self.secret.expose_secret().trim().is_empty() {
            return Err(AppError::configuration("PayPal secret cannot be empty"));
        }

        if self.http_connection_timeout.is_zero() {
            return Err(AppError::configuration(
                "HTTP connection timeout must be greater than 0",
            ));
        }

        self.log.validate()
    }
}
