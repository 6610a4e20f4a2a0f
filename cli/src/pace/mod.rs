pub mod calculator;

pub use calculator::{compute_pace, format_pace, DistanceUnit, PaceReport, PaceResult};
