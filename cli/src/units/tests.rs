use super::*;
use crate::error::ToolError;

const LENGTH_KEYS: [&str; 7] = ["km", "m", "cm", "mm", "mi", "ft", "in"];

#[test]
fn test_length_conversion() {
    assert_eq!(convert(1.0, "km", "m", Category::Length).unwrap(), 1000.0);
    assert!((convert(1.0, "mi", "km", Category::Length).unwrap() - 1.60934).abs() < 1e-9);
    assert!((convert(12.0, "in", "ft", Category::Length).unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn test_weight_conversion() {
    assert!((convert(1.0, "lb", "kg", Category::Weight).unwrap() - 0.453592).abs() < 1e-12);
    assert!((convert(16.0, "oz", "lb", Category::Weight).unwrap() - 1.0).abs() < 1e-3);
    assert_eq!(convert(2500.0, "g", "kg", Category::Weight).unwrap(), 2.5);
}

#[test]
fn test_length_round_trips() {
    for v in [0.001, 1.0, 42.5, 1234.5678, 1e6] {
        for from in LENGTH_KEYS {
            for to in LENGTH_KEYS {
                let there = convert(v, from, to, Category::Length).unwrap();
                let back = convert(there, to, from, Category::Length).unwrap();
                assert!(
                    ((back - v) / v).abs() < 1e-9,
                    "{} {} -> {} -> {} gave {}",
                    v,
                    from,
                    to,
                    from,
                    back
                );
            }
        }
    }
}

#[test]
fn test_temperature_formulas() {
    let t = |v, from, to| convert(v, from, to, Category::Temperature).unwrap();
    assert!((t(0.0, "c", "f") - 32.0).abs() < 1e-9);
    assert!((t(100.0, "c", "f") - 212.0).abs() < 1e-9);
    assert!((t(-40.0, "f", "c") + 40.0).abs() < 1e-9);
    assert!((t(0.0, "k", "c") + 273.15).abs() < 1e-9);
    assert!((t(32.0, "f", "k") - 273.15).abs() < 1e-9);
    assert_eq!(t(21.5, "c", "c"), 21.5);
}

#[test]
fn test_temperature_round_trip() {
    for v in [-273.15, -40.0, 0.0, 36.6, 100.0, 1000.0] {
        let f = convert(v, "c", "f", Category::Temperature).unwrap();
        let back = convert(f, "f", "c", Category::Temperature).unwrap();
        assert!((back - v).abs() < 0.01);
    }
}

#[test]
fn test_unknown_or_foreign_units_rejected() {
    assert!(matches!(
        convert(1.0, "parsec", "m", Category::Length),
        Err(ToolError::MalformedInput(_))
    ));
    assert!(matches!(
        convert(1.0, "kg", "m", Category::Length),
        Err(ToolError::MalformedInput(_))
    ));
}

#[test]
fn test_convert_input_fails_soft() {
    assert_eq!(convert_input("", "km", "m", Category::Length), None);
    assert_eq!(convert_input("abc", "km", "m", Category::Length), None);
    assert_eq!(convert_input("1", "km", "lb", Category::Length), None);
    assert_eq!(
        convert_input("1.5", "km", "m", Category::Length),
        Some("1500".to_string())
    );
    assert_eq!(
        convert_input("100", "c", "f", Category::Temperature),
        Some("212.00".to_string())
    );
}

#[test]
fn test_convert_quantity_infers_category() {
    let (value, category) = convert_quantity("10 km", "mi").unwrap();
    assert_eq!(category, Category::Length);
    assert!((value - 6.21373).abs() < 1e-4);

    let (value, category) = convert_quantity("212 F", "c").unwrap();
    assert_eq!(category, Category::Temperature);
    assert!((value - 100.0).abs() < 1e-9);

    assert!(convert_quantity("10 km", "kg").is_err());
}

#[test]
fn test_unit_listing() {
    assert_eq!(units_for(Category::Length).len(), 7);
    assert_eq!(units_for(Category::Weight).len(), 4);
    assert_eq!(units_for(Category::Temperature).len(), 3);
    for category in Category::ALL {
        assert!(units_for(category)
            .iter()
            .any(|u| u.key == category.base_unit()));
    }
    assert_eq!(find_unit("K").map(|u| u.category), Some(Category::Temperature));
    assert_eq!("temp".parse::<Category>().unwrap(), Category::Temperature);
}
