pub mod case;
pub mod stats;

#[cfg(test)]
mod tests;

pub use case::{convert_all, CaseConversions, TextCase};
pub use stats::{reading_time_minutes, text_stats, word_count, TextStats};
