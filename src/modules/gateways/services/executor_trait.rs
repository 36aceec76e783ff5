use crate::core::Result;
use async_trait::async_trait;

use crate::modules::gateways::models::{TransactionRequest, TransactionResult};

/// Submits a transaction to the payment provider
///
/// Implementations report transport failures as `AppError::Connectivity`
/// instead of returning an empty result.
#[async_trait]
pub trait TransactionExecutor: Send + Sync {
    /// Create the transaction and return the provider's view of it
    async fn execute_payment(&self, request: TransactionRequest) -> Result<TransactionResult>;

    /// Provider name, used in log fields
    fn name(&self) -> &str;
}
