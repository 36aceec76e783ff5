use rust_decimal::Decimal;

/// Library-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for payment processing
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Requested amount differs from the order amount
    #[error("Amounts do not match: requested {requested}, order {expected}")]
    AmountsMismatch { requested: Decimal, expected: Decimal },

    /// The bridge holds no order after the load notification
    #[error("Order not found")]
    OrderNotFound,

    /// PayPal reported the transaction as failed
    #[error("Payment failed (transaction '{transaction_id}', status '{status}')")]
    PaymentFailed {
        transaction_id: String,
        status: String,
    },

    /// Could not reach PayPal (connection refused, DNS, timeout)
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    /// PayPal answered with an error or an unreadable body
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A lifecycle listener rejected the event
    #[error("Notification error: {0}")]
    Notification(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn gateway(msg: impl Into<String>) -> Self {
        AppError::Gateway(msg.into())
    }

    pub fn connectivity(msg: impl Into<String>) -> Self {
        AppError::Connectivity(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn notification(msg: impl Into<String>) -> Self {
        AppError::Notification(msg.into())
    }

    /// Whether the caller may reasonably try the same payment again.
    ///
    /// Only transport failures qualify; everything else is either a
    /// business outcome or a caller bug.
    pub fn is_transient(&self) -> bool {
        matches!(self, AppError::Connectivity(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            AppError::Connectivity(format!(
                "PayPal unavailable: {} ({})",
                if e.is_timeout() {
                    "timeout"
                } else {
                    "connection failed"
                },
                e
            ))
        } else {
            AppError::Gateway(format!("PayPal API request failed: {}", e))
        }
    }
}
