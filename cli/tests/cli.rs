use rand::rngs::StdRng;
use rand::SeedableRng;
use toolbox::color::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, ColorState};
use toolbox::config::ToolboxConfig;
use toolbox::currency::{convert_currency, format_amount, StaticRates};
use toolbox::date::{age_on, parse_date};
use toolbox::encoding::{decode_base64, encode_base64, qr_url};
use toolbox::pace::{compute_pace, DistanceUnit};
use toolbox::password::{generate_with, CharClass, PasswordSpec};
use toolbox::stopwatch::{format_elapsed, Action, ManualClock, Stopwatch};
use toolbox::text::{text_stats, TextCase};
use toolbox::units::{
    convert_input, convert_quantity, format_converted, looks_like_quantity, Category,
};
use toolbox::worldclock::{read_zone, ZoneSelection};
use toolbox::ToolError;

const CONFIG: &str = r#"
[password]
default_length = 16
min_length = 6
max_length = 32
classes = ["lowercase", "numbers"]

[qr]
default_size = 300

[currency.rates.USD]
EUR = 0.5

[clock]
zones = ["Tokyo", "Europe/Paris"]
"#;

#[test]
fn test_config_drives_tools() {
    let config = ToolboxConfig::load_from_str(CONFIG).unwrap();

    let spec = PasswordSpec::from_config(&config.password);
    let bounds = config.password.min_length..=config.password.max_length;
    let mut rng = StdRng::seed_from_u64(1);
    let password = generate_with(&mut rng, &spec, bounds.clone()).unwrap();
    assert_eq!(password.len(), 16);
    assert!(password
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));

    let too_long = PasswordSpec::new(40, vec![CharClass::Symbols]);
    assert!(matches!(
        generate_with(&mut rng, &too_long, bounds),
        Err(ToolError::OutOfRange(_))
    ));

    let url = qr_url("hi", config.qr.default_size, &config.qr).unwrap();
    assert_eq!(
        url,
        "https://api.qrserver.com/v1/create-qr-code/?size=300x300&data=hi"
    );

    let rates = StaticRates::from_config(&config.currency);
    assert_eq!(convert_currency(&rates, 10.0, "usd", "eur").unwrap(), 5.0);
    assert!(convert_currency(&rates, 10.0, "GBP", "EUR").is_err());

    let zones = ZoneSelection::from_ids(&config.clock.zones).unwrap();
    assert_eq!(zones.zones().len(), 2);
}

#[test]
fn test_convert_argument_forms() {
    assert!(looks_like_quantity("10 km"));
    assert!(looks_like_quantity(" 98.6F "));
    assert!(!looks_like_quantity("10"));
}

#[test]
fn test_clock_without_zone_and_rate_listing() {
    let config = ToolboxConfig::load_from_str(CONFIG).unwrap();

    let mut zones = ZoneSelection::from_ids(&config.clock.zones).unwrap();
    assert!(zones.remove("Paris"));
    assert!(!zones.remove("Europe/Paris"));
    assert!(!zones.remove("Nowhere/City"));
    assert_eq!(zones.zones().len(), 1);

    let rates = StaticRates::from_config(&config.currency);
    assert_eq!(rates.base_currencies(), vec!["USD"]);
}

#[test]
fn test_unit_conversion_flow() {
    assert_eq!(
        convert_input("5", "km", "mi", Category::Length).as_deref(),
        Some("3.106864")
    );
    assert_eq!(convert_input("abc", "km", "mi", Category::Length), None);

    let (value, category) = convert_quantity("100 c", "f").unwrap();
    assert_eq!(category, Category::Temperature);
    assert_eq!(format_converted(value, category), "212.00");
}

#[test]
fn test_color_tools_agree() {
    let rgb = hex_to_rgb("#FF8800").unwrap();
    assert_eq!(rgb_to_hex(rgb), "#ff8800");
    assert_eq!(hsl_to_rgb(rgb_to_hsl(rgb)), rgb);

    let mut state = ColorState::default();
    state.update_from_hex("00ff00").unwrap();
    assert_eq!(state.hsl().rounded(), (120, 100, 50));
    assert!(state.update_from_rgb(0, 0, 300).is_err());
    assert_eq!(state.hex(), "#00ff00");
}

#[test]
fn test_age_and_pace() {
    let age = age_on(parse_date("2000-01-01").unwrap(), parse_date("2024-06-15").unwrap()).unwrap();
    assert_eq!((age.years, age.months, age.days), (24, 5, 14));

    let report = compute_pace(10.0, DistanceUnit::Km, 0, 50, 0)
        .unwrap()
        .report();
    assert_eq!(report.pace_per_km, "5:00");
    assert_eq!(report.speed_kmh, "12.00");
}

#[test]
fn test_text_tools() {
    assert_eq!(TextCase::Snake.apply("Hello World"), "hello_world");
    let stats = text_stats("One. Two!\n\nThree?");
    assert_eq!(stats.words, 3);
    assert_eq!(stats.sentences, 3);
    assert_eq!(stats.paragraphs, 2);
    assert_eq!(text_stats("  ").words, 0);
}

#[test]
fn test_base64_and_currency_display() {
    let encoded = encode_base64("héllo");
    assert_eq!(decode_base64(&encoded).unwrap(), "héllo");
    assert!(matches!(
        decode_base64("not base64!"),
        Err(ToolError::MalformedInput(_))
    ));
    assert_eq!(format_amount(85.0, "EUR"), "€85.00");
}

#[test]
fn test_stopwatch_session() {
    let mut watch = Stopwatch::new(ManualClock::new(0));
    watch.toggle();
    watch.clock().advance(1_500);
    watch.dispatch(Action::Lap);
    watch.clock().advance(2_000);
    watch.dispatch(Action::Lap);
    watch.toggle();
    watch.clock().advance(10_000);

    assert_eq!(watch.display(), "00:03.50");
    assert_eq!(watch.state().laps(), &[1_500, 3_500]);
    assert_eq!(watch.state().splits(), vec![1_500, 2_000]);
    assert_eq!(format_elapsed(125_340), "02:05.34");
}

#[test]
fn test_world_clock_reading() {
    use chrono::TimeZone;

    let zones = ZoneSelection::from_ids(&["Asia/Kolkata"]).unwrap();
    let now = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let reading = read_zone(zones.zones()[0], now);
    assert_eq!(reading.offset, "+5.5");
    assert_eq!(reading.time, "05:30:00 AM");
}
