// WebAssembly bindings for the ToolBox widgets
use crate::color::ColorState;
use crate::config::ToolboxConfig;
use crate::currency::{self, StaticRates};
use crate::date;
use crate::encoding;
use crate::pace::{self, DistanceUnit};
use crate::password::{self, CharClass, PasswordSpec};
use crate::stopwatch::{format_elapsed, Action, Clock, Stopwatch};
use crate::text::{self, TextCase};
use crate::units::{self, Category};
use crate::worldclock::{self, ZoneSelection};
use serde::Serialize;
use std::fmt::Display;
use wasm_bindgen::prelude::*;

fn js_err(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_err(format!("Failed to serialize: {}", e)))
}

/// Browser clock. `Date.now()` can step backwards, so readings are clamped
/// to never decrease.
struct JsClock {
    origin: f64,
    last: std::cell::Cell<u64>,
}

impl JsClock {
    fn new() -> Self {
        Self {
            origin: js_sys::Date::now(),
            last: std::cell::Cell::new(0),
        }
    }
}

impl Clock for JsClock {
    fn now_ms(&self) -> u64 {
        let reading = (js_sys::Date::now() - self.origin).max(0.0) as u64;
        let now = reading.max(self.last.get());
        self.last.set(now);
        now
    }
}

#[wasm_bindgen]
pub struct ToolboxWasm {
    config: ToolboxConfig,
    rates: StaticRates,
    color: ColorState,
    stopwatch: Stopwatch<JsClock>,
}

#[wasm_bindgen]
impl ToolboxWasm {
    /// `config_content` is optional `toolbox.toml` text
    #[wasm_bindgen(constructor)]
    pub fn new(config_content: Option<String>) -> Result<ToolboxWasm, JsValue> {
        let config = match config_content {
            Some(content) => ToolboxConfig::load_from_str(&content)
                .map_err(|e| js_err(format!("Failed to load config: {}", e)))?,
            None => ToolboxConfig::default(),
        };
        let rates = StaticRates::from_config(&config.currency);

        Ok(Self {
            config,
            rates,
            color: ColorState::default(),
            stopwatch: Stopwatch::new(JsClock::new()),
        })
    }

    // --- units ---

    /// Returns undefined for empty or non-numeric input
    #[wasm_bindgen]
    pub fn convert_unit(
        &self,
        value: &str,
        from: &str,
        to: &str,
        category: &str,
    ) -> Result<Option<String>, JsValue> {
        let category: Category = category.parse().map_err(js_err)?;
        Ok(units::convert_input(value, from, to, category))
    }

    #[wasm_bindgen]
    pub fn units(&self, category: &str) -> Result<String, JsValue> {
        let category: Category = category.parse().map_err(js_err)?;
        to_json(&units::units_for(category))
    }

    // --- color ---

    #[wasm_bindgen]
    pub fn color_from_hex(&mut self, hex: &str) -> Result<String, JsValue> {
        self.color.update_from_hex(hex).map_err(js_err)?;
        self.color_state()
    }

    #[wasm_bindgen]
    pub fn color_from_rgb(&mut self, r: i32, g: i32, b: i32) -> Result<String, JsValue> {
        self.color
            .update_from_rgb(r.into(), g.into(), b.into())
            .map_err(js_err)?;
        self.color_state()
    }

    #[wasm_bindgen]
    pub fn color_from_hsl(&mut self, h: f64, s: f64, l: f64) -> Result<String, JsValue> {
        self.color.update_from_hsl(h, s, l).map_err(js_err)?;
        self.color_state()
    }

    /// `{"hex": ..., "rgb": ..., "hsl": ..., "css": {...}}`
    #[wasm_bindgen]
    pub fn color_state(&self) -> Result<String, JsValue> {
        let (h, s, l) = self.color.hsl().rounded();
        let result = serde_json::json!({
            "hex": self.color.hex(),
            "rgb": self.color.rgb(),
            "hsl": { "h": h, "s": s, "l": l },
            "css": {
                "rgb": self.color.rgb().to_string(),
                "hsl": self.color.hsl().to_string(),
            }
        });
        to_json(&result)
    }

    // --- dates ---

    /// `today` defaults to the browser's current local date
    #[wasm_bindgen]
    pub fn age(&self, birth: &str, today: Option<String>) -> Result<String, JsValue> {
        let birth = date::parse_date(birth).map_err(js_err)?;
        let breakdown = match today {
            Some(today) => {
                let today = date::parse_date(&today).map_err(js_err)?;
                date::age_on(birth, today)
            }
            None => date::age_between(birth, chrono::Local::now().naive_local()),
        }
        .map_err(js_err)?;
        to_json(&breakdown)
    }

    // --- pace ---

    #[wasm_bindgen]
    pub fn pace(
        &self,
        distance: f64,
        unit: &str,
        hours: u32,
        minutes: u32,
        seconds: u32,
    ) -> Result<String, JsValue> {
        let unit: DistanceUnit = unit.parse().map_err(js_err)?;
        let result = pace::compute_pace(
            distance,
            unit,
            hours.into(),
            minutes.into(),
            seconds.into(),
        )
        .map_err(js_err)?;
        to_json(&result.report())
    }

    // --- text ---

    #[wasm_bindgen]
    pub fn text_cases(&self, input: &str) -> Result<String, JsValue> {
        to_json(&text::convert_all(input))
    }

    #[wasm_bindgen]
    pub fn text_case(&self, input: &str, case: &str) -> Result<String, JsValue> {
        let case: TextCase = case.parse().map_err(js_err)?;
        Ok(case.apply(input))
    }

    #[wasm_bindgen]
    pub fn text_stats(&self, input: &str) -> Result<String, JsValue> {
        to_json(&text::text_stats(input))
    }

    // --- password ---

    #[wasm_bindgen]
    pub fn generate_password(
        &self,
        length: usize,
        uppercase: bool,
        lowercase: bool,
        numbers: bool,
        symbols: bool,
    ) -> Result<String, JsValue> {
        let classes = [
            (uppercase, CharClass::Uppercase),
            (lowercase, CharClass::Lowercase),
            (numbers, CharClass::Numbers),
            (symbols, CharClass::Symbols),
        ]
        .iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, class)| *class)
        .collect();

        let spec = PasswordSpec::new(length, classes);
        password::generate(&spec, &self.config.password).map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn password_strength(&self, length: usize) -> String {
        password::strength(length).to_string()
    }

    // --- encoding ---

    #[wasm_bindgen]
    pub fn base64_encode(&self, input: &str) -> String {
        encoding::encode_base64(input)
    }

    #[wasm_bindgen]
    pub fn base64_decode(&self, input: &str) -> Result<String, JsValue> {
        encoding::decode_base64(input).map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn qr_url(&self, input: &str, size: Option<u32>) -> Result<String, JsValue> {
        let size = size.unwrap_or(self.config.qr.default_size);
        encoding::qr_url(input, size, &self.config.qr).map_err(js_err)
    }

    // --- currency ---

    /// Converted amount formatted with the target symbol
    #[wasm_bindgen]
    pub fn convert_currency(&self, amount: &str, from: &str, to: &str) -> Result<String, JsValue> {
        let amount: f64 = amount
            .trim()
            .parse()
            .map_err(|_| js_err(format!("'{}' is not a number", amount)))?;
        let converted =
            currency::convert_currency(&self.rates, amount, from, to).map_err(js_err)?;
        Ok(currency::format_amount(converted, to))
    }

    #[wasm_bindgen]
    pub fn currencies(&self) -> Result<String, JsValue> {
        to_json(&currency::CURRENCIES)
    }

    /// Codes that have a configured rate table
    #[wasm_bindgen]
    pub fn rate_bases(&self) -> Result<String, JsValue> {
        to_json(&self.rates.base_currencies())
    }

    // --- world clock ---

    /// `zones_json` is a JSON array of zone ids; the configured zones are
    /// used when omitted
    #[wasm_bindgen]
    pub fn world_clock(&self, zones_json: Option<String>) -> Result<String, JsValue> {
        let ids: Vec<String> = match zones_json {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| js_err(format!("Failed to parse zones JSON: {}", e)))?,
            None => self.config.clock.zones.clone(),
        };
        let selection = ZoneSelection::from_ids(&ids).map_err(js_err)?;
        let now = chrono::Utc::now();
        let readings: Vec<_> = selection
            .zones()
            .iter()
            .map(|tz| worldclock::read_zone(*tz, now))
            .collect();
        to_json(&readings)
    }

    #[wasm_bindgen]
    pub fn available_zones(&self) -> Result<String, JsValue> {
        to_json(&worldclock::ZONES)
    }

    // --- stopwatch ---

    #[wasm_bindgen]
    pub fn stopwatch_toggle(&mut self) -> Result<String, JsValue> {
        self.stopwatch.toggle();
        self.stopwatch_state()
    }

    #[wasm_bindgen]
    pub fn stopwatch_lap(&mut self) -> Result<String, JsValue> {
        self.stopwatch.dispatch(Action::Lap);
        self.stopwatch_state()
    }

    #[wasm_bindgen]
    pub fn stopwatch_reset(&mut self) -> Result<String, JsValue> {
        self.stopwatch.dispatch(Action::Reset);
        self.stopwatch_state()
    }

    /// Cheap enough to call from every animation frame
    #[wasm_bindgen]
    pub fn stopwatch_display(&self) -> String {
        self.stopwatch.display()
    }

    #[wasm_bindgen]
    pub fn stopwatch_state(&self) -> Result<String, JsValue> {
        let state = self.stopwatch.state();
        let result = serde_json::json!({
            "display": self.stopwatch.display(),
            "running": state.is_running(),
            "laps": state.laps().iter().map(|ms| format_elapsed(*ms)).collect::<Vec<_>>(),
            "splits": state.splits().iter().map(|ms| format_elapsed(*ms)).collect::<Vec<_>>(),
            "best": state.best_lap().map(format_elapsed),
            "worst": state.worst_lap().map(format_elapsed),
        });
        to_json(&result)
    }

    #[wasm_bindgen]
    pub fn format_elapsed(&self, ms: f64) -> String {
        format_elapsed(ms.max(0.0) as u64)
    }
}
