pub mod reading;
pub mod zones;

pub use reading::{format_offset, read_zone, ZoneReading};
pub use zones::{display_name, parse_zone, ZoneSelection, ZONES};
