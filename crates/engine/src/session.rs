//! Session: drives a [`GameState`] on behalf of a host event loop.
//!
//! The host feeds two event streams in arrival order: player commands and elapsed time.
//! The session owns the gravity timer and the input gate, and keeps both in step with
//! the game's phase:
//!
//! - Starting a game arms the timer at the level's interval and opens the input gate
//! - Levels change only between games; the next start picks up the new interval
//! - Game over and [`Session::stop`] cancel the timer and close the gate

use tracing::{debug, info};

use crate::core::{GameSnapshot, GameState, PieceSource, UniformRandom};
use crate::timer::GravityTimer;
use crate::types::{Command, Level, LevelError, Phase};

#[derive(Debug, Clone)]
pub struct Session<S = UniformRandom> {
    state: GameState<S>,
    timer: GravityTimer,
    input_enabled: bool,
}

impl<S: PieceSource> Session<S> {
    pub fn new(state: GameState<S>) -> Self {
        Self {
            state,
            timer: GravityTimer::new(),
            input_enabled: false,
        }
    }

    pub fn state(&self) -> &GameState<S> {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn timer(&self) -> &GravityTimer {
        &self.timer
    }

    /// Whether player commands are currently accepted.
    pub fn is_input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Milliseconds until the next gravity tick, or `None` when no game is running.
    pub fn time_until_tick_ms(&self) -> Option<u32> {
        self.timer.remaining_ms()
    }

    /// Select the level for the next game. Refused while a game is in progress.
    ///
    /// The timer is never armed outside a game, so the new interval takes effect at the
    /// next [`start`](Self::start).
    pub fn select_level(&mut self, value: u8) -> Result<Level, LevelError> {
        let level = Level::new(value)?;
        let previous = self.state.level();
        self.state.set_level(level)?;

        if level != previous {
            info!(level = level.get(), "level selected");
        }
        Ok(level)
    }

    /// Start a new game (also valid after game over).
    pub fn start(&mut self) {
        self.state.start();
        self.timer.arm(self.state.tick_interval_ms());
        self.input_enabled = true;
        info!(
            level = self.state.level().get(),
            interval_ms = self.timer.interval_ms(),
            "game started"
        );
    }

    /// Tear down: cancel gravity and stop accepting input.
    pub fn stop(&mut self) {
        if self.timer.is_armed() || self.input_enabled {
            debug!("session stopped");
        }
        self.timer.cancel();
        self.input_enabled = false;
    }

    /// Apply a player command. Ignored while input is closed.
    pub fn handle_command(&mut self, command: Command) -> bool {
        if !self.input_enabled {
            return false;
        }
        let changed = self.state.apply_command(command);
        self.after_transition();
        changed
    }

    /// Advance the clock by `elapsed_ms`, running every gravity tick that came due.
    ///
    /// Returns the number of ticks applied.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let due = self.timer.advance(elapsed_ms);
        let mut applied = 0;
        for _ in 0..due {
            if !self.state.is_playing() {
                break;
            }
            self.state.tick();
            applied += 1;
            self.after_transition();
        }
        applied
    }

    fn after_transition(&mut self) {
        if let Some(event) = self.state.take_last_event() {
            debug!(piece = event.kind.as_str(), "piece locked");
            if event.lines_cleared > 0 {
                debug!(
                    lines = event.lines_cleared,
                    points = event.points,
                    score = self.state.score(),
                    "lines cleared"
                );
            }
        }

        if self.state.game_over() && (self.timer.is_armed() || self.input_enabled) {
            self.timer.cancel();
            self.input_enabled = false;
            info!(
                score = self.state.score(),
                lines = self.state.lines(),
                "game over"
            );
        }
    }
}

impl Default for Session<UniformRandom> {
    fn default() -> Self {
        Self::new(GameState::new())
    }
}
