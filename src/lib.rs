//! PayPal bridge library
//!
//! Connects a payment-processing framework to the PayPal REST API: checks the
//! requested amount against the order, submits the transaction and reports the
//! lifecycle of the attempt to the framework.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use config::{Config, PaypalConfig, PaypalMode};
pub use crate::core::{AppError, Currency, Result};
pub use modules::gateways;
pub use modules::payments;
pub use modules::gateways::{
    PaypalClient, TransactionExecutor, TransactionRequest, TransactionResult, TransactionStatus,
};
pub use modules::payments::{
    Item, ItemList, OrderExtraData, Payer, PayerInfo, PaymentBridge, PaymentEventNotifier,
    PaypalManager, PaypalMethod, TracingEventNotifier,
};
