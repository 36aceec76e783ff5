pub mod transaction;

pub use transaction::{TransactionRequest, TransactionResult, TransactionStatus};
