use crate::error::{Result, ToolError};
use crate::units::detector::parse_quantity;
use crate::units::formatter::format_converted;
use crate::units::table::{find_unit, Category, UnitDef};

fn lookup(key: &str, category: Category) -> Result<&'static UnitDef> {
    let unit = find_unit(key)
        .ok_or_else(|| ToolError::malformed(format!("unknown unit '{}'", key)))?;
    if unit.category != category {
        return Err(ToolError::malformed(format!(
            "unit '{}' is {}, not {}",
            key, unit.category, category
        )));
    }
    Ok(unit)
}

fn to_celsius(value: f64, from: &str) -> f64 {
    match from {
        "f" => (value - 32.0) * 5.0 / 9.0,
        "k" => value - 273.15,
        _ => value,
    }
}

fn from_celsius(celsius: f64, to: &str) -> f64 {
    match to {
        "f" => celsius * 9.0 / 5.0 + 32.0,
        "k" => celsius + 273.15,
        _ => celsius,
    }
}

/// Convert `value` between two units of the same category.
pub fn convert(value: f64, from: &str, to: &str, category: Category) -> Result<f64> {
    let from = lookup(from, category)?;
    let to = lookup(to, category)?;

    if category.is_linear() {
        Ok(value * from.factor / to.factor)
    } else {
        Ok(from_celsius(to_celsius(value, from.key), to.key))
    }
}

/// Form-field entry point: raw text in, display string out. Empty or
/// non-numeric input gives `None` so the caller clears the output field.
pub fn convert_input(input: &str, from: &str, to: &str, category: Category) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            log::debug!("ignoring non-numeric input '{}'", input);
            return None;
        }
    };
    match convert(value, from, to, category) {
        Ok(result) => Some(format_converted(result, category)),
        Err(e) => {
            log::debug!("conversion rejected: {}", e);
            None
        }
    }
}

/// Convert a "number unit" string such as "10 km" into `to`, inferring the
/// category from the source unit.
pub fn convert_quantity(quantity: &str, to: &str) -> Result<(f64, Category)> {
    let parsed = parse_quantity(quantity)?;
    let unit = find_unit(&parsed.unit)
        .ok_or_else(|| ToolError::malformed(format!("unknown unit '{}'", parsed.unit)))?;
    let value = convert(parsed.value, unit.key, to, unit.category)?;
    Ok((value, unit.category))
}
