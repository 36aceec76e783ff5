use rust_decimal::Decimal;

use crate::core::Currency;
use crate::modules::payments::models::OrderExtraData;

/// The payment framework's view of the order being paid
///
/// The bridge is expected to attach the order while handling
/// `on_order_load`; `order_id` reports whether that happened.
pub trait PaymentBridge: Send + Sync {
    /// Identifier of the loaded order, if any
    fn order_id(&self) -> Option<String>;

    /// Order amount in major units (e.g. `10.50`)
    fn amount(&self) -> Decimal;

    fn currency(&self) -> Currency;

    fn extra_data(&self) -> OrderExtraData;
}
