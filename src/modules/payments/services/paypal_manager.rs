use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{error, info, warn};

use super::bridge::PaymentBridge;
use super::events::PaymentEventNotifier;
use crate::core::{amounts_match, to_cents, whole_cents, AppError, Result};
use crate::modules::gateways::models::{TransactionRequest, TransactionResult};
use crate::modules::gateways::services::TransactionExecutor;
use crate::modules::payments::models::PaypalMethod;

/// Processes payments through PayPal
///
/// Runs one payment attempt from amount check to outcome notification.
/// Holds no per-payment state: every call works on the `PaypalMethod` it is
/// given, so one manager can serve concurrent payments as long as the
/// bridge and executor allow it.
pub struct PaypalManager {
    notifier: Arc<dyn PaymentEventNotifier>,
    executor: Arc<dyn TransactionExecutor>,
    bridge: Arc<dyn PaymentBridge>,
}

impl PaypalManager {
    /// Create a new PaypalManager
    ///
    /// # Arguments
    /// * `notifier` - Lifecycle event listener
    /// * `executor` - Submits the transaction to PayPal
    /// * `bridge` - Order view of the payment framework
    pub fn new(
        notifier: Arc<dyn PaymentEventNotifier>,
        executor: Arc<dyn TransactionExecutor>,
        bridge: Arc<dyn PaymentBridge>,
    ) -> Self {
        Self {
            notifier,
            executor,
            bridge,
        }
    }

    /// Try to process a payment through PayPal
    ///
    /// # Arguments
    /// * `payment_method` - PayPal method; stamped with the transaction on success
    /// * `amount` - Requested amount in cents
    ///
    /// # Errors
    /// * `Validation` - the order amount cannot be expressed in cents; nothing was notified
    /// * `AmountsMismatch` - `amount` differs from the order amount; nothing was notified
    /// * `OrderNotFound` - no order after `on_order_load`
    /// * `PaymentFailed` - PayPal reported the payment as failed
    /// * any executor or notifier error, unchanged
    pub async fn process_payment(
        &self,
        payment_method: &mut PaypalMethod,
        amount: Decimal,
    ) -> Result<&Self> {
        let order_amount = to_cents(self.bridge.amount())?;

        if !amounts_match(amount, order_amount) {
            warn!(
                requested = %amount,
                expected = %order_amount,
                "Payment amount does not match order amount"
            );
            return Err(AppError::AmountsMismatch {
                requested: amount,
                expected: order_amount,
            });
        }

        self.notifier
            .on_order_load(self.bridge.as_ref(), payment_method)
            .await?;

        let Some(order_id) = self.bridge.order_id() else {
            warn!("No order attached to the payment bridge");
            return Err(AppError::OrderNotFound);
        };

        self.notifier
            .on_order_created(self.bridge.as_ref(), payment_method)
            .await?;

        let extra_data = self.bridge.extra_data();
        let request = TransactionRequest {
            // The order amount is charged, not the requested one
            amount_cents: whole_cents(order_amount)?,
            currency: self.bridge.currency(),
            description: extra_data.description,
            item_list: extra_data.item_list,
            payer: payment_method.payer.clone(),
        };

        info!(
            order_id = %order_id,
            gateway = self.executor.name(),
            amount_cents = request.amount_cents,
            currency = %request.currency,
            "Executing payment"
        );

        let result = self.executor.execute_payment(request).await.map_err(|e| {
            error!(order_id = %order_id, error = %e, "Payment execution failed");
            e
        })?;

        self.process_transaction(result, payment_method).await?;

        Ok(self)
    }

    /// Given PayPal's answer, fire the outcome events and record the transaction
    async fn process_transaction(
        &self,
        result: TransactionResult,
        payment_method: &mut PaypalMethod,
    ) -> Result<()> {
        // Paid process has ended, no matter the result
        self.notifier
            .on_order_done(self.bridge.as_ref(), payment_method)
            .await?;

        if result.is_failed() {
            warn!(transaction_id = %result.id, "PayPal reported payment as failed");

            self.notifier
                .on_order_fail(self.bridge.as_ref(), payment_method)
                .await?;

            return Err(AppError::PaymentFailed {
                transaction_id: result.id,
                status: "failed".to_string(),
            });
        }

        // Transaction details are only visible from on_order_success onwards
        payment_method.transaction_id = Some(result.id);
        payment_method.transaction_status = result.status.map(|s| s.to_string());
        payment_method.transaction = Some(result.raw);

        info!(
            transaction_id = ?payment_method.transaction_id,
            status = ?payment_method.transaction_status,
            "Payment succeeded"
        );

        self.notifier
            .on_order_success(self.bridge.as_ref(), payment_method)
            .await
    }
}
