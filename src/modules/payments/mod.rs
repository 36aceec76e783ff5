pub mod models;
pub mod services;

pub use models::{Item, ItemList, OrderExtraData, Payer, PayerInfo, PaypalMethod};
pub use services::{PaymentBridge, PaymentEventNotifier, PaypalManager, TracingEventNotifier};
