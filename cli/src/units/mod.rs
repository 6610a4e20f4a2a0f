// Unit conversion over fixed factor tables (length, weight) and
// formula branches (temperature)

pub mod converter;
pub mod detector;
pub mod formatter;
pub mod table;

#[cfg(test)]
mod tests;

pub use converter::{convert, convert_input, convert_quantity};
pub use detector::{looks_like_quantity, parse_quantity, Quantity};
pub use formatter::format_converted;
pub use table::{find_unit, units_for, Category, UnitDef};
