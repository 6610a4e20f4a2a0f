use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, ToolError};

lazy_static! {
    /// A number (optional sign, decimals, exponent), optional whitespace,
    /// then a unit key. Examples: "100 km", "10.5m", "-40 F", "1e3 g"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^(-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)\s*([a-zA-Z]+)$"
    )
    .expect("quantity pattern is valid");
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

/// Check if a string looks like a quantity expression
pub fn looks_like_quantity(s: &str) -> bool {
    let trimmed = s.trim();
    !trimmed.is_empty() && QUANTITY_PATTERN.is_match(trimmed)
}

pub fn parse_quantity(s: &str) -> Result<Quantity> {
    let trimmed = s.trim();
    let caps = QUANTITY_PATTERN
        .captures(trimmed)
        .ok_or_else(|| ToolError::malformed(format!("'{}' is not a quantity", s)))?;

    let value = caps[1]
        .parse::<f64>()
        .map_err(|e| ToolError::malformed(format!("bad number '{}': {}", &caps[1], e)))?;

    Ok(Quantity {
        value,
        unit: caps[2].to_string(),
    })
}
