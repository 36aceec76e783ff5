use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use super::executor_trait::TransactionExecutor;
use crate::config::PaypalConfig;
use crate::core::{AppError, Result};
use crate::modules::gateways::models::{TransactionRequest, TransactionResult};
use crate::modules::payments::models::{ItemList, Payer};

/// PayPal REST client
///
/// Creates `sale` payments through the v1 Payments API.
/// API Documentation: https://developer.paypal.com/docs/api/payments/v1/
pub struct PaypalClient {
    client: Client,
    client_id: String,
    secret: SecretString,
    base_url: String,
    access_token: RwLock<Option<AccessToken>>,
}

#[derive(Debug, Clone)]
struct AccessToken {
    token: String,
    expires_at: DateTime<Utc>,
}

impl PaypalClient {
    /// Create a new PayPal client
    ///
    /// Logging settings in `config.log` are not applied here; the caller
    /// installs the subscriber once with `init_tracing` (or `Config::load`).
    ///
    /// # Arguments
    /// * `config` - Credentials, mode and connection timeout
    pub fn new(config: &PaypalConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .connect_timeout(config.http_connection_timeout)
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        info!(mode = %config.mode, "PayPal client configured");

        Ok(Self {
            client,
            client_id: config.client_id.clone(),
            secret: config.secret.clone(),
            base_url: config.mode.base_url().to_string(),
            access_token: RwLock::new(None),
        })
    }

    /// Point the client at another API host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Return the cached OAuth token, fetching a new one when missing or expired
    async fn access_token(&self) -> Result<String> {
        {
            let cached = self.access_token.read().await;
            if let Some(ref t) = *cached {
                if t.expires_at > Utc::now() {
                    return Ok(t.token.clone());
                }
            }
        }

        let url = format!("{}/v1/oauth2/token", self.base_url);
        debug!(url = %url, "Requesting PayPal access token");

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.client_id, Some(self.secret.expose_secret()))
            .header("Accept", "application/json")
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status_code = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::gateway(format!("Failed to read PayPal token response: {}", e)))?;

        if !status_code.is_success() {
            return Err(AppError::gateway(format!(
                "PayPal authentication failed - HTTP {} ({})",
                status_code.as_u16(),
                body
            )));
        }

        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::gateway(format!("Failed to parse PayPal token: {}", e)))?;

        // Refresh a minute early; lifetimes beyond chrono's range are not cached
        let expires_at = Duration::try_seconds(token.expires_in.saturating_sub(60))
            .and_then(|ttl| Utc::now().checked_add_signed(ttl));

        match expires_at {
            Some(expires_at) => {
                *self.access_token.write().await = Some(AccessToken {
                    token: token.access_token.clone(),
                    expires_at,
                });
            }
            None => {
                warn!(
                    expires_in = token.expires_in,
                    "PayPal token lifetime out of range, not caching"
                );
                self.forget_token().await;
            }
        }

        Ok(token.access_token)
    }

    async fn forget_token(&self) {
        *self.access_token.write().await = None;
    }
}

#[async_trait]
impl TransactionExecutor for PaypalClient {
    async fn execute_payment(&self, request: TransactionRequest) -> Result<TransactionResult> {
        let url = format!("{}/v1/payments/payment", self.base_url);

        let body = PaymentBody::from_request(&request);
        let token = self.access_token().await?;

        debug!(
            amount_cents = request.amount_cents,
            currency = %request.currency,
            items = request.item_list.items.len(),
            "Creating PayPal payment"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let err = AppError::from(e);
                error!(error = %err, "PayPal payment request failed");
                err
            })?;

        let status_code = response.status();
        let response_body = response
            .text()
            .await
            .map_err(|e| AppError::gateway(format!("Failed to read PayPal response: {}", e)))?;

        if status_code == StatusCode::UNAUTHORIZED {
            self.forget_token().await;
        }

        if !status_code.is_success() {
            error!(status = status_code.as_u16(), "PayPal rejected payment");
            return Err(AppError::gateway(format!(
                "PayPal API error - HTTP {} ({})",
                status_code.as_u16(),
                response_body
            )));
        }

        let payload: serde_json::Value = serde_json::from_str(&response_body)
            .map_err(|e| AppError::gateway(format!("Failed to parse PayPal response: {}", e)))?;

        let result = TransactionResult::from_payload(payload);
        if result.id.is_empty() {
            return Err(AppError::gateway("PayPal response is missing the payment id"));
        }

        info!(
            transaction_id = %result.id,
            state = %result.status.as_ref().map(|s| s.to_string()).unwrap_or_default(),
            "PayPal payment created"
        );

        Ok(result)
    }

    fn name(&self) -> &str {
        "paypal"
    }
}

// PayPal API request/response structures

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Serialize)]
struct PaymentBody<'a> {
    intent: &'static str,
    payer: &'a Payer,
    transactions: Vec<TransactionBody<'a>>,
}

#[derive(Debug, Serialize)]
struct TransactionBody<'a> {
    amount: AmountBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    item_list: Option<ItemListBody<'a>>,
    description: &'a str,
}

#[derive(Debug, Serialize)]
struct AmountBody {
    total: String,
    currency: String,
}

#[derive(Debug, Serialize)]
struct ItemListBody<'a> {
    items: Vec<ItemBody<'a>>,
}

#[derive(Debug, Serialize)]
struct ItemBody<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sku: Option<&'a str>,
    price: String,
    currency: String,
    quantity: String,
}

impl<'a> PaymentBody<'a> {
    fn from_request(request: &'a TransactionRequest) -> Self {
        Self {
            intent: "sale",
            payer: &request.payer,
            transactions: vec![TransactionBody {
                amount: AmountBody {
                    total: request.currency.total_from_cents(request.amount_cents),
                    currency: request.currency.to_string(),
                },
                item_list: ItemListBody::from_items(&request.item_list),
                description: &request.description,
            }],
        }
    }
}

impl<'a> ItemListBody<'a> {
    fn from_items(list: &'a ItemList) -> Option<Self> {
        if list.is_empty() {
            return None;
        }

        Some(Self {
            items: list
                .items
                .iter()
                .map(|item| ItemBody {
                    name: &item.name,
                    sku: item.sku.as_deref(),
                    price: item.currency.format_decimal(item.price),
                    currency: item.currency.to_string(),
                    quantity: item.quantity.to_string(),
                })
                .collect(),
        })
    }
}
