use async_trait::async_trait;
use tracing::info;

use super::bridge::PaymentBridge;
use crate::core::Result;
use crate::modules::payments::models::PaypalMethod;

/// Receives payment lifecycle events
///
/// Every hook defaults to a no-op. An error returned from a hook aborts the
/// payment at that point and reaches the caller unchanged.
#[async_trait]
pub trait PaymentEventNotifier: Send + Sync {
    /// Before the order existence check; the bridge should attach the order here
    async fn on_order_load(&self, _bridge: &dyn PaymentBridge, _method: &PaypalMethod) -> Result<()> {
        Ok(())
    }

    /// The order exists and the transaction is about to be submitted
    async fn on_order_created(
        &self,
        _bridge: &dyn PaymentBridge,
        _method: &PaypalMethod,
    ) -> Result<()> {
        Ok(())
    }

    /// PayPal answered, whatever the outcome
    async fn on_order_done(&self, _bridge: &dyn PaymentBridge, _method: &PaypalMethod) -> Result<()> {
        Ok(())
    }

    async fn on_order_fail(&self, _bridge: &dyn PaymentBridge, _method: &PaypalMethod) -> Result<()> {
        Ok(())
    }

    /// Transaction details are already recorded on `method`
    async fn on_order_success(
        &self,
        _bridge: &dyn PaymentBridge,
        _method: &PaypalMethod,
    ) -> Result<()> {
        Ok(())
    }
}

/// Notifier that only emits tracing events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventNotifier;

#[async_trait]
impl PaymentEventNotifier for TracingEventNotifier {
    async fn on_order_load(&self, bridge: &dyn PaymentBridge, method: &PaypalMethod) -> Result<()> {
        info!(
            payment = method.payment_name(),
            amount = %bridge.amount(),
            currency = %bridge.currency(),
            "Payment order load"
        );
        Ok(())
    }

    async fn on_order_created(&self, bridge: &dyn PaymentBridge, _method: &PaypalMethod) -> Result<()> {
        info!(order_id = ?bridge.order_id(), "Payment order created");
        Ok(())
    }

    async fn on_order_done(&self, bridge: &dyn PaymentBridge, _method: &PaypalMethod) -> Result<()> {
        info!(order_id = ?bridge.order_id(), "Payment order done");
        Ok(())
    }

    async fn on_order_fail(&self, bridge: &dyn PaymentBridge, _method: &PaypalMethod) -> Result<()> {
        info!(order_id = ?bridge.order_id(), "Payment order failed");
        Ok(())
    }

    async fn on_order_success(&self, bridge: &dyn PaymentBridge, method: &PaypalMethod) -> Result<()> {
        info!(
            order_id = ?bridge.order_id(),
            transaction_id = ?method.transaction_id,
            "Payment order succeeded"
        );
        Ok(())
    }
}
