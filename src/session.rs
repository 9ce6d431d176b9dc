use std::time::{Duration, Instant};

use crate::engine::{GameStepEngine, StepOutcome};
use crate::input::GameInput;
use crate::ticker::Ticker;

/// Whether the host loop should keep running.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Control {
    Continue,
    Quit,
}

/// Host-side adapter: owns the engine and its step clock and routes input to them.
#[derive(Debug, Clone)]
pub struct Session {
    engine: GameStepEngine,
    ticker: Ticker,
    paused: bool,
    best_score: u32,
}

impl Session {
    /// Wraps a freshly started engine and starts its clock at `now`.
    #[must_use]
    pub fn new(engine: GameStepEngine, now: Instant) -> Self {
        let mut ticker = Ticker::new(engine.config().tick_interval());
        if !engine.is_game_over() {
            ticker.start(now);
        }

        Self {
            engine,
            ticker,
            paused: false,
            best_score: 0,
        }
    }

    /// Applies one external input event.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) -> Control {
        match input {
            GameInput::Quit => return Control::Quit,
            GameInput::Direction(direction) => {
                if !self.paused {
                    self.engine.set_pending_direction(direction);
                }
            }
            GameInput::Pause => self.toggle_pause(now),
            GameInput::Restart => {
                if self.engine.is_game_over() {
                    self.engine.restart();
                    self.paused = false;
                    self.ticker.stop();
                    self.ticker.start(now);
                }
            }
        }
        Control::Continue
    }

    /// Runs a step when the clock says one is due.
    pub fn update(&mut self, now: Instant) -> Option<StepOutcome> {
        if !self.ticker.poll(now) {
            return None;
        }

        let outcome = self.engine.step();
        self.best_score = self.best_score.max(self.engine.score());
        if matches!(outcome, StepOutcome::Ended(_) | StepOutcome::Idle) {
            self.ticker.stop();
        }
        Some(outcome)
    }

    fn toggle_pause(&mut self, now: Instant) {
        if self.engine.is_game_over() {
            return;
        }

        self.paused = !self.paused;
        if self.paused {
            self.ticker.stop();
        } else {
            self.ticker.start(now);
        }
        log::debug!("paused: {}", self.paused);
    }

    #[must_use]
    pub fn engine(&self) -> &GameStepEngine {
        &self.engine
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Highest score reached during this process.
    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// How long the host may block waiting for input before the next step.
    #[must_use]
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_next(now)
    }
}
