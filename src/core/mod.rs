pub mod currency;
pub mod error;

pub use currency::Currency;
pub use error::{PaymobError, Result};
