use serde::{Deserialize, Serialize};

/// PayPal payer object, serialized as the REST API expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payer {
    /// Funding instrument; always `paypal` for wallet payments
    pub payment_method: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_info: Option<PayerInfo>,
}

/// Optional details PayPal accepts about the buyer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayerInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_id: Option<String>,
}

impl Payer {
    /// A PayPal-wallet payer with no extra details
    pub fn paypal() -> Self {
        Self {
            payment_method: "paypal".to_string(),
            payer_info: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.payer_info.get_or_insert_with(PayerInfo::default).email = Some(email.into());
        self
    }
}

impl Default for Payer {
    fn default() -> Self {
        Self::paypal()
    }
}
