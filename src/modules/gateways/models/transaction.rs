use std::fmt;

use crate::core::Currency;
use crate::modules::payments::models::{ItemList, Payer};

/// Everything the executor needs to create a PayPal sale
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRequest {
    /// Amount in whole cents
    pub amount_cents: i64,
    pub currency: Currency,
    pub description: String,
    pub item_list: ItemList,
    pub payer: Payer,
}

/// PayPal payment state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionStatus {
    Created,
    Approved,
    Completed,
    Failed,
    /// Any state this crate does not interpret
    Other(String),
}

impl TransactionStatus {
    /// Parses a raw state, treating a missing or blank one as absent
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.map(str::trim).filter(|s| !s.is_empty()).map(Self::from)
    }
}

impl From<&str> for TransactionStatus {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "created" => TransactionStatus::Created,
            "approved" => TransactionStatus::Approved,
            "completed" => TransactionStatus::Completed,
            "failed" => TransactionStatus::Failed,
            _ => TransactionStatus::Other(s.to_string()),
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Created => write!(f, "created"),
            TransactionStatus::Approved => write!(f, "approved"),
            TransactionStatus::Completed => write!(f, "completed"),
            TransactionStatus::Failed => write!(f, "failed"),
            TransactionStatus::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Outcome of a transaction submission
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionResult {
    /// PayPal payment id
    pub id: String,

    /// Reported state; `None` when PayPal sent none
    pub status: Option<TransactionStatus>,

    /// Full response body
    pub raw: serde_json::Value,
}

impl TransactionResult {
    /// Builds a result from a PayPal payment resource
    pub fn from_payload(raw: serde_json::Value) -> Self {
        let id = raw["id"].as_str().unwrap_or_default().to_string();
        let status = TransactionStatus::parse(raw["state"].as_str());
        Self { id, status, raw }
    }

    /// Only an explicit `failed` state counts as failure
    pub fn is_failed(&self) -> bool {
        matches!(self.status, Some(TransactionStatus::Failed))
    }
}
