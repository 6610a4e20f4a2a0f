use crate::units::table::Category;

const LINEAR_DECIMALS: usize = 6;
const TEMPERATURE_DECIMALS: usize = 2;

/// Render a converted value the way the converter form shows it: linear
/// categories get up to six decimals with trailing zeros removed,
/// temperatures always get two.
pub fn format_converted(value: f64, category: Category) -> String {
    if category.is_linear() {
        trim_decimal(&format!("{:.*}", LINEAR_DECIMALS, value))
    } else {
        format!("{:.*}", TEMPERATURE_DECIMALS, value)
    }
}

fn trim_decimal(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_trailing_zeros() {
        assert_eq!(format_converted(1000.0, Category::Length), "1000");
        assert_eq!(format_converted(10.5, Category::Length), "10.5");
        assert_eq!(format_converted(0.0, Category::Weight), "0");
        assert_eq!(format_converted(1.0 / 3.0, Category::Length), "0.333333");
    }

    #[test]
    fn test_tiny_values_collapse_to_zero() {
        assert_eq!(format_converted(1e-9, Category::Length), "0");
        assert_eq!(format_converted(-1e-9, Category::Length), "0");
    }

    #[test]
    fn test_temperature_keeps_two_decimals() {
        assert_eq!(format_converted(32.0, Category::Temperature), "32.00");
        assert_eq!(format_converted(-40.0, Category::Temperature), "-40.00");
        assert_eq!(format_converted(273.15, Category::Temperature), "273.15");
    }
}
