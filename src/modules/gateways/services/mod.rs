pub mod executor_trait;
pub mod paypal;

pub use executor_trait::TransactionExecutor;
pub use paypal::PaypalClient;
