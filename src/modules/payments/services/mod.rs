pub mod bridge;
pub mod events;
pub mod paypal_manager;

pub use bridge::PaymentBridge;
pub use events::{PaymentEventNotifier, TracingEventNotifier};
pub use paypal_manager::PaypalManager;
