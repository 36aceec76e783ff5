pub mod models;
pub mod services;

pub use models::{TransactionRequest, TransactionResult, TransactionStatus};
pub use services::{PaypalClient, TransactionExecutor};
