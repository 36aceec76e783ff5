pub mod order;
pub mod payer;
pub mod payment_method;

pub use order::{Item, ItemList, OrderExtraData};
pub use payer::{Payer, PayerInfo};
pub use payment_method::PaypalMethod;
