// Test Data Factory
//
// Generates order data and PayPal payloads. Uses UUIDs to keep ids unique.

use paypal_bridge::{Currency, Item, ItemList, OrderExtraData, Payer, PaypalMethod};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use uuid::Uuid;

pub struct TestDataFactory;

impl TestDataFactory {
    /// Unique order id in format "ORDER-{uuid}"
    pub fn random_order_id() -> String {
        format!("ORDER-{}", Uuid::new_v4())
    }

    /// Two items worth 10.50 USD in total
    pub fn extra_data() -> OrderExtraData {
        OrderExtraData {
            item_list: [
                Item::new("Coffee beans", dec!(8.00), Currency::USD, 1).with_sku("BEAN-250"),
                Item::new("Filter paper", dec!(2.50), Currency::USD, 1),
            ]
            .into_iter()
            .collect::<ItemList>(),
            description: "Coffee order".to_string(),
        }
    }

    pub fn payment_method() -> PaypalMethod {
        PaypalMethod::new(Payer::paypal().with_email("buyer@example.com"))
    }

    /// PayPal payment resource as returned by POST /v1/payments/payment
    pub fn payment_payload(id: &str, state: Option<&str>) -> Value {
        let mut payload = json!({
            "id": id,
            "intent": "sale",
            "create_time": "2026-10-19T10:00:00Z",
            "links": [{
                "href": format!("https://api.sandbox.paypal.com/v1/payments/payment/{}", id),
                "rel": "self",
                "method": "GET"
            }]
        });
        if let Some(state) = state {
            payload["state"] = json!(state);
        }
        payload
    }
}
