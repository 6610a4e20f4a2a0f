use serde::Serialize;

use crate::currency::provider::RateProvider;
use crate::error::{Result, ToolError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

pub const CURRENCIES: &[Currency] = &[
    Currency { code: "USD", name: "US Dollar", symbol: "$" },
    Currency { code: "EUR", name: "Euro", symbol: "€" },
    Currency { code: "GBP", name: "British Pound", symbol: "£" },
    Currency { code: "JPY", name: "Japanese Yen", symbol: "¥" },
    Currency { code: "CAD", name: "Canadian Dollar", symbol: "C$" },
    Currency { code: "AUD", name: "Australian Dollar", symbol: "A$" },
    Currency { code: "CHF", name: "Swiss Franc", symbol: "CHF" },
    Currency { code: "CNY", name: "Chinese Yuan", symbol: "¥" },
    Currency { code: "INR", name: "Indian Rupee", symbol: "₹" },
    Currency { code: "BRL", name: "Brazilian Real", symbol: "R$" },
];

pub fn currency(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Two decimals prefixed with the currency symbol, or the code when the
/// currency is not in the list.
pub fn format_amount(amount: f64, code: &str) -> String {
    match currency(code) {
        Some(c) => format!("{}{:.2}", c.symbol, amount),
        None => format!("{} {:.2}", code, amount),
    }
}

pub fn convert_currency<P: RateProvider + ?Sized>(
    provider: &P,
    amount: f64,
    from: &str,
    to: &str,
) -> Result<f64> {
    if !amount.is_finite() {
        return Err(ToolError::malformed(format!("amount {} is not a number", amount)));
    }

    let from = from.to_ascii_uppercase();
    let to = to.to_ascii_uppercase();
    if from == to {
        return Ok(amount);
    }

    match provider.rate(&from, &to) {
        Some(rate) => Ok(amount * rate),
        None => {
            log::warn!("no exchange rate for {} -> {}", from, to);
            Err(ToolError::malformed(format!("no rate for {} -> {}", from, to)))
        }
    }
}
