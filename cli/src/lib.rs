pub mod color;
pub mod config;
pub mod currency;
pub mod date;
pub mod encoding;
pub mod error;
pub mod pace;
pub mod password;
pub mod stopwatch;
pub mod text;
pub mod units;
pub mod worldclock;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::{Result, ToolError};
