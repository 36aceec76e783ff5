pub mod amount;
pub mod currency;
pub mod error;

pub use amount::{amounts_match, to_cents, whole_cents, AMOUNT_TOLERANCE};
pub use currency::Currency;
pub use error::{AppError, Result};
