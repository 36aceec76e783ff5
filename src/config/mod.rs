use crate::core::{AppError, Result};

pub mod logging;
pub mod paypal;

pub use logging::{init_tracing, LogConfig};
pub use paypal::{PaypalConfig, PaypalMode};

/// Main library configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub paypal: PaypalConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment from `APP_ENV`; live PayPal requires `production`
    pub env: String,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            app: AppConfig {
                env: var("APP_ENV").unwrap_or_else(|| "development".to_string()),
            },
            paypal: PaypalConfig::from_vars(var)?,
        })
    }

    /// Load, validate and install logging in one step
    ///
    /// Entry point for hosts that configure the adapter from the environment.
    pub fn load() -> Result<Self> {
        let config = Self::from_env()?;
        config.validate()?;
        init_tracing(&config.paypal.log)?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.paypal.validate()?;

        if self.paypal.mode == PaypalMode::Live && !self.app.is_production() {
            return Err(AppError::configuration(format!(
                "PAYPAL_MODE=live requires APP_ENV=production (APP_ENV is '{}')",
                self.app.env
            )));
        }

        Ok(())
    }
}
