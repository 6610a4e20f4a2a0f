use super::*;
use crate::error::ToolError;

#[test]
fn test_hex_parsing() {
    assert_eq!(hex_to_rgb("#3B82F6"), Some(Rgb::new(59, 130, 246)));
    assert_eq!(hex_to_rgb("3b82f6"), Some(Rgb::new(59, 130, 246)));
    assert_eq!(hex_to_rgb("#000000"), Some(Rgb::new(0, 0, 0)));

    assert_eq!(hex_to_rgb("#fff"), None);
    assert_eq!(hex_to_rgb("#gg0000"), None);
    assert_eq!(hex_to_rgb("##112233"), None);
    assert_eq!(hex_to_rgb(""), None);
}

#[test]
fn test_hex_round_trip_is_case_normalised() {
    for hex in ["#3B82F6", "#ffffff", "#000000", "#A0b1C2", "#7f7f80"] {
        let rgb = hex_to_rgb(hex).unwrap();
        assert_eq!(rgb_to_hex(rgb), hex.to_lowercase());
    }
}

#[test]
fn test_known_hsl_values() {
    assert_eq!(rgb_to_hsl(Rgb::new(59, 130, 246)).rounded(), (217, 91, 60));
    assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)).rounded(), (0, 100, 50));
    assert_eq!(rgb_to_hsl(Rgb::new(0, 255, 0)).rounded(), (120, 100, 50));
    assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 255)).rounded(), (240, 100, 50));
    assert_eq!(rgb_to_hsl(Rgb::new(255, 255, 255)).rounded(), (0, 0, 100));
}

#[test]
fn test_grey_has_no_hue_or_saturation() {
    let hsl = rgb_to_hsl(Rgb::new(128, 128, 128));
    assert_eq!(hsl.h, 0.0);
    assert_eq!(hsl.s, 0.0);
    assert_eq!(hsl_to_rgb(hsl), Rgb::new(128, 128, 128));
}

#[test]
fn test_hue_stays_below_360() {
    // red max with blue slightly above green wraps close to 360
    let hsl = rgb_to_hsl(Rgb::new(255, 0, 1));
    assert!(hsl.h >= 0.0 && hsl.h < 360.0);
    assert_eq!(hsl.rounded().0, 0);
}

#[test]
fn test_rgb_hsl_round_trip() {
    for r in (0..=255u16).step_by(5) {
        for g in (0..=255u16).step_by(5) {
            for b in (0..=255u16).step_by(5) {
                let rgb = Rgb::new(r as u8, g as u8, b as u8);
                let back = hsl_to_rgb(rgb_to_hsl(rgb));
                assert_eq!(back, rgb, "round trip of {:?}", rgb);
            }
        }
    }
}

#[test]
fn test_hsl_to_rgb_from_integer_input() {
    assert_eq!(hsl_to_rgb(Hsl::new(0.0, 100.0, 50.0)), Rgb::new(255, 0, 0));
    assert_eq!(hsl_to_rgb(Hsl::new(360.0, 100.0, 50.0)), Rgb::new(255, 0, 0));
    assert_eq!(hsl_to_rgb(Hsl::new(217.0, 91.0, 60.0)), Rgb::new(60, 131, 246));
}

#[test]
fn test_state_keeps_representations_in_sync() {
    let mut state = ColorState::default();
    assert_eq!(state.hex(), "#3b82f6");

    state.update_from_rgb(255, 0, 0).unwrap();
    assert_eq!(state.hex(), "#ff0000");
    assert_eq!(state.hsl().rounded(), (0, 100, 50));

    state.update_from_hsl(120.0, 100.0, 50.0).unwrap();
    assert_eq!(state.rgb(), Rgb::new(0, 255, 0));
    assert_eq!(state.hex(), "#00ff00");

    state.update_from_hex("#0000FF").unwrap();
    assert_eq!(state.rgb(), Rgb::new(0, 0, 255));
    assert_eq!(state.hsl().rounded(), (240, 100, 50));
}

#[test]
fn test_rejected_updates_leave_state_unchanged() {
    let mut state = ColorState::default();
    let before = state.clone();

    assert!(matches!(
        state.update_from_rgb(256, 0, 0),
        Err(ToolError::OutOfRange(_))
    ));
    assert!(matches!(
        state.update_from_rgb(0, -1, 0),
        Err(ToolError::OutOfRange(_))
    ));
    assert!(matches!(
        state.update_from_hsl(361.0, 50.0, 50.0),
        Err(ToolError::OutOfRange(_))
    ));
    assert!(matches!(
        state.update_from_hsl(10.0, 50.0, 101.0),
        Err(ToolError::OutOfRange(_))
    ));
    assert!(matches!(
        state.update_from_hex("#12345"),
        Err(ToolError::MalformedInput(_))
    ));

    assert_eq!(state, before);
}

#[test]
fn test_css_rendering() {
    let state = ColorState::default();
    assert_eq!(state.rgb().to_string(), "rgb(59, 130, 246)");
    assert_eq!(state.hsl().to_string(), "hsl(217, 91%, 60%)");
}
