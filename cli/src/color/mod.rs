pub mod convert;
pub mod state;

#[cfg(test)]
mod tests;

pub use convert::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, Hsl, Rgb};
pub use state::ColorState;
