pub mod converter;
pub mod provider;

pub use converter::{convert_currency, currency, format_amount, Currency, CURRENCIES};
pub use provider::{RateProvider, StaticRates};
