use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElapsedParts {
    pub minutes: u64,
    pub seconds: u64,
    pub hundredths: u64,
}

impl ElapsedParts {
    pub fn from_ms(ms: u64) -> Self {
        let total_seconds = ms / 1000;
        Self {
            minutes: total_seconds / 60,
            seconds: total_seconds % 60,
            hundredths: (ms % 1000) / 10,
        }
    }

    /// Milliseconds represented, dropping the sub-10ms remainder.
    pub fn total_ms(&self) -> u64 {
        self.minutes * 60_000 + self.seconds * 1000 + self.hundredths * 10
    }
}

/// `MM:SS.CC`. Minutes keep counting past 99.
pub fn format_elapsed(ms: u64) -> String {
    let parts = ElapsedParts::from_ms(ms);
    format!(
        "{:02}:{:02}.{:02}",
        parts.minutes, parts.seconds, parts.hundredths
    )
}
