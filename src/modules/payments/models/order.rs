// Order data handed over by the payment framework through the bridge.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Currency;

/// A single purchased item as PayPal lists it on the transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Unit price in major units
    pub price: Decimal,

    pub currency: Currency,

    pub quantity: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, price: Decimal, currency: Currency, quantity: u32) -> Self {
        Self {
            name: name.into(),
            sku: None,
            price,
            currency,
            quantity,
        }
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }
}

/// Ordered list of items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemList {
    pub items: Vec<Item>,
}

impl ItemList {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Item> for ItemList {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Extra order data PayPal needs to describe the transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderExtraData {
    pub item_list: ItemList,
    pub description: String,
}
