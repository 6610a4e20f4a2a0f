use serde::Serialize;

use crate::color::convert::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, Hsl, Rgb};
use crate::error::{Result, ToolError};

/// The three synchronised representations behind the color converter.
///
/// Every update validates before touching any field, so a rejected update
/// leaves the previous color in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorState {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
}

impl Default for ColorState {
    fn default() -> Self {
        Self::from_rgb(Rgb::new(59, 130, 246))
    }
}

impl ColorState {
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb_to_hex(rgb),
            rgb,
            hsl: rgb_to_hsl(rgb),
        }
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    pub fn update_from_hex(&mut self, hex: &str) -> Result<()> {
        let rgb = hex_to_rgb(hex)
            .ok_or_else(|| ToolError::malformed(format!("'{}' is not a 6-digit hex color", hex)))?;
        *self = Self::from_rgb(rgb);
        Ok(())
    }

    pub fn update_from_rgb(&mut self, r: i64, g: i64, b: i64) -> Result<()> {
        let channel = |name: &str, v: i64| {
            u8::try_from(v)
                .map_err(|_| ToolError::out_of_range(format!("{} = {} not in 0..=255", name, v)))
        };
        let rgb = Rgb::new(channel("r", r)?, channel("g", g)?, channel("b", b)?);
        *self = Self::from_rgb(rgb);
        Ok(())
    }

    pub fn update_from_hsl(&mut self, h: f64, s: f64, l: f64) -> Result<()> {
        if !(0.0..=360.0).contains(&h) {
            return Err(ToolError::out_of_range(format!("h = {} not in 0..=360", h)));
        }
        if !(0.0..=100.0).contains(&s) {
            return Err(ToolError::out_of_range(format!("s = {} not in 0..=100", s)));
        }
        if !(0.0..=100.0).contains(&l) {
            return Err(ToolError::out_of_range(format!("l = {} not in 0..=100", l)));
        }

        let hsl = Hsl::new(h, s, l);
        let rgb = hsl_to_rgb(hsl);
        self.hsl = hsl;
        self.rgb = rgb;
        self.hex = rgb_to_hex(rgb);
        Ok(())
    }
}
