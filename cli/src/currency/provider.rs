use std::collections::HashMap;

use crate::config::CurrencyConfig;

/// Source of exchange rates. The conversion arithmetic only sees this
/// trait, so a fetched table can replace the static one.
pub trait RateProvider {
    /// Units of `to` per one unit of `from`. Codes arrive upper-cased.
    fn rate(&self, from: &str, to: &str) -> Option<f64>;
}

/// Fixed `{from: {to: rate}}` table. Codes are stored upper-cased.
#[derive(Debug, Clone)]
pub struct StaticRates {
    rates: HashMap<String, HashMap<String, f64>>,
}

impl StaticRates {
    pub fn new(rates: HashMap<String, HashMap<String, f64>>) -> Self {
        let rates = rates
            .into_iter()
            .map(|(from, row)| {
                let row = row
                    .into_iter()
                    .map(|(to, rate)| (to.to_ascii_uppercase(), rate))
                    .collect();
                (from.to_ascii_uppercase(), row)
            })
            .collect();
        Self { rates }
    }

    pub fn from_config(config: &CurrencyConfig) -> Self {
        Self::new(config.rates.clone())
    }

    /// Codes that have a row of outgoing rates, sorted.
    pub fn base_currencies(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.rates.keys().map(|k| k.as_str()).collect();
        codes.sort_unstable();
        codes
    }
}

impl Default for StaticRates {
    fn default() -> Self {
        Self::from_config(&CurrencyConfig::default())
    }
}

impl RateProvider for StaticRates {
    fn rate(&self, from: &str, to: &str) -> Option<f64> {
        self.rates.get(from).and_then(|row| row.get(to)).copied()
    }
}
