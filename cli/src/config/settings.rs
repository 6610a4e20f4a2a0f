use crate::error::{Result, ToolError};
use crate::password::CharClass;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Top-level `toolbox.toml` contents. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolboxConfig {
    #[serde(default)]
    pub password: PasswordConfig,

    #[serde(default)]
    pub qr: QrConfig,

    #[serde(default)]
    pub currency: CurrencyConfig,

    #[serde(default)]
    pub clock: ClockConfig,

    #[serde(default)]
    pub stopwatch: StopwatchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    #[serde(default = "default_password_length")]
    pub default_length: usize,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    #[serde(default = "default_classes")]
    pub classes: Vec<CharClass>,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            default_length: default_password_length(),
            min_length: default_min_length(),
            max_length: default_max_length(),
            classes: default_classes(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QrConfig {
    #[serde(default = "default_qr_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_qr_size")]
    pub default_size: u32,
    #[serde(default = "default_qr_sizes")]
    pub sizes: Vec<u32>,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            endpoint: default_qr_endpoint(),
            default_size: default_qr_size(),
            sizes: default_qr_sizes(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurrencyConfig {
    // from -> {to -> rate}
    #[serde(default = "default_rates")]
    pub rates: HashMap<String, HashMap<String, f64>>,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            rates: default_rates(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClockConfig {
    #[serde(default = "default_zones")]
    pub zones: Vec<String>,
    #[serde(default = "default_clock_tick")]
    pub tick_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            zones: default_zones(),
            tick_ms: default_clock_tick(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StopwatchConfig {
    #[serde(default = "default_stopwatch_tick")]
    pub tick_ms: u64,
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_stopwatch_tick(),
        }
    }
}

fn default_password_length() -> usize {
    12
}

fn default_min_length() -> usize {
    4
}

fn default_max_length() -> usize {
    50
}

fn default_classes() -> Vec<CharClass> {
    vec![CharClass::Uppercase, CharClass::Lowercase, CharClass::Numbers]
}

fn default_qr_endpoint() -> String {
    "https://api.qrserver.com/v1/create-qr-code/".to_string()
}

fn default_qr_size() -> u32 {
    200
}

fn default_qr_sizes() -> Vec<u32> {
    vec![150, 200, 300, 400, 500]
}

fn default_zones() -> Vec<String> {
    vec![
        "America/New_York".to_string(),
        "Europe/London".to_string(),
        "Asia/Tokyo".to_string(),
    ]
}

fn default_clock_tick() -> u64 {
    1000
}

fn default_stopwatch_tick() -> u64 {
    10
}

fn default_rates() -> HashMap<String, HashMap<String, f64>> {
    fn row(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    let mut rates = HashMap::new();
    rates.insert(
        "USD".to_string(),
        row(&[
            ("EUR", 0.85),
            ("GBP", 0.73),
            ("JPY", 110.0),
            ("CAD", 1.25),
            ("AUD", 1.35),
            ("CHF", 0.92),
            ("CNY", 6.45),
            ("INR", 74.5),
            ("BRL", 5.2),
        ]),
    );
    rates.insert(
        "EUR".to_string(),
        row(&[
            ("USD", 1.18),
            ("GBP", 0.86),
            ("JPY", 129.0),
            ("CAD", 1.47),
            ("AUD", 1.59),
            ("CHF", 1.08),
            ("CNY", 7.6),
            ("INR", 87.8),
            ("BRL", 6.1),
        ]),
    );
    rates.insert(
        "GBP".to_string(),
        row(&[
            ("USD", 1.37),
            ("EUR", 1.16),
            ("JPY", 150.0),
            ("CAD", 1.71),
            ("AUD", 1.85),
            ("CHF", 1.26),
            ("CNY", 8.8),
            ("INR", 102.0),
            ("BRL", 7.1),
        ]),
    );
    rates
}

impl ToolboxConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self> {
        let config: ToolboxConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let p = &self.password;
        if p.min_length == 0 || p.min_length > p.max_length {
            return Err(ToolError::Config(format!(
                "password length bounds {}..={} are empty",
                p.min_length, p.max_length
            )));
        }
        if !(p.min_length..=p.max_length).contains(&p.default_length) {
            return Err(ToolError::Config(format!(
                "default password length {} outside {}..={}",
                p.default_length, p.min_length, p.max_length
            )));
        }
        if !self.qr.sizes.contains(&self.qr.default_size) {
            return Err(ToolError::Config(format!(
                "default QR size {} is not one of {:?}",
                self.qr.default_size, self.qr.sizes
            )));
        }
        if self.clock.tick_ms == 0 || self.stopwatch.tick_ms == 0 {
            return Err(ToolError::Config("tick_ms must be positive".to_string()));
        }
        Ok(())
    }
}
