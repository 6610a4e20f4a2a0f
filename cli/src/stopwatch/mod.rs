// Stopwatch as an explicit state machine driven by a monotonic clock

pub mod clock;
pub mod format;
pub mod state;


pub use clock::{Clock, ManualClock, SystemClock};
pub use format::{format_elapsed, ElapsedParts};
pub use state::{apply, Action, Phase, Stopwatch, StopwatchState};
