use serde::{Deserialize, Serialize};

use super::payer::Payer;

/// PayPal payment method
///
/// Carries the payer into the payment and, once PayPal accepts the
/// transaction, its identifiers. The transaction fields stay empty unless
/// the payment succeeded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaypalMethod {
    pub payer: Payer,

    /// PayPal payment id (`PAY-...`)
    pub transaction_id: Option<String>,

    /// PayPal payment state as reported on creation
    pub transaction_status: Option<String>,

    /// Full PayPal response body
    pub transaction: Option<serde_json::Value>,
}

impl PaypalMethod {
    pub fn new(payer: Payer) -> Self {
        Self {
            payer,
            transaction_id: None,
            transaction_status: None,
            transaction: None,
        }
    }

    /// Name the payment framework knows this method by
    pub fn payment_name(&self) -> &'static str {
        "paypal"
    }

    /// Whether transaction details have been recorded
    pub fn is_stamped(&self) -> bool {
        self.transaction_id.is_some()
    }
}
