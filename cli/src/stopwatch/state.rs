use serde::{Deserialize, Serialize};

use crate::stopwatch::clock::Clock;
use crate::stopwatch::format::format_elapsed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Stopped,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Start,
    Pause,
    Lap,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StopwatchState {
    phase: Phase,
    // elapsed time banked by completed runs
    accumulated_ms: u64,
    // clock reading when the current run started
    started_at: Option<u64>,
    // cumulative elapsed time at each lap
    laps: Vec<u64>,
}

/// Transition function. `now_ms` is the monotonic clock reading at the
/// moment the action happens.
///
/// `Start` while running and `Pause` or `Lap` while stopped leave the state
/// as it is.
pub fn apply(state: StopwatchState, action: Action, now_ms: u64) -> StopwatchState {
    match (state.phase, action) {
        (Phase::Stopped, Action::Start) => StopwatchState {
            phase: Phase::Running,
            started_at: Some(now_ms),
            ..state
        },
        (Phase::Running, Action::Pause) => {
            let accumulated_ms = state.elapsed_ms(now_ms);
            StopwatchState {
                phase: Phase::Stopped,
                accumulated_ms,
                started_at: None,
                ..state
            }
        }
        (Phase::Running, Action::Lap) => {
            let elapsed = state.elapsed_ms(now_ms);
            let mut laps = state.laps;
            laps.push(elapsed);
            StopwatchState { laps, ..state }
        }
        (_, Action::Reset) => StopwatchState::default(),
        (_, action) => {
            log::debug!("ignoring {:?} while {:?}", action, state.phase);
            state
        }
    }
}

impl StopwatchState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Banked time plus the running segment, computed from the start
    /// timestamp rather than accumulated per tick.
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        match self.started_at {
            Some(start) => self.accumulated_ms + now_ms.saturating_sub(start),
            None => self.accumulated_ms,
        }
    }

    pub fn laps(&self) -> &[u64] {
        &self.laps
    }

    /// Time between consecutive laps, the first measured from zero.
    pub fn splits(&self) -> Vec<u64> {
        let mut previous = 0;
        self.laps
            .iter()
            .map(|&lap| {
                let split = lap.saturating_sub(previous);
                previous = lap;
                split
            })
            .collect()
    }

    /// Smallest recorded lap value. Compares cumulative times, so this is
    /// always the first lap; see `splits` for per-lap durations.
    pub fn best_lap(&self) -> Option<u64> {
        self.laps.iter().copied().min()
    }

    /// Largest recorded lap value, compared over cumulative times.
    pub fn worst_lap(&self) -> Option<u64> {
        self.laps.iter().copied().max()
    }
}

/// A [`StopwatchState`] bound to a clock.
pub struct Stopwatch<C: Clock> {
    clock: C,
    state: StopwatchState,
}

impl<C: Clock> Stopwatch<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            state: StopwatchState::default(),
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        let now = self.clock.now_ms();
        let state = std::mem::take(&mut self.state);
        self.state = apply(state, action, now);
    }

    /// Start when stopped, pause when running.
    pub fn toggle(&mut self) {
        if self.state.is_running() {
            self.dispatch(Action::Pause);
        } else {
            self.dispatch(Action::Start);
        }
    }

    pub fn state(&self) -> &StopwatchState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.state.elapsed_ms(self.clock.now_ms())
    }

    pub fn display(&self) -> String {
        format_elapsed(self.elapsed_ms())
    }
}
