//! Game state module - manages the complete game state
//!
//! Ties the board, pieces, piece source and scoring together. Every operation is
//! synchronous and infallible: illegal moves are ignored rather than reported, and
//! game over is an ordinary terminal phase.

use crate::board::Board;
use crate::pieces::{Piece, Position};
use crate::rng::{PieceSource, UniformRandom};
use crate::scoring::{level_tick_interval_ms, line_clear_points};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, PieceSnapshot};
use crate::types::*;

/// Result of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved to the requested position
    Moved,
    /// A downward move was blocked, so the piece locked in place
    Locked,
    /// A sideways move was blocked; nothing changed
    Blocked,
    /// No game in progress; nothing changed
    Inactive,
}

impl MoveOutcome {
    /// Whether the game state changed
    pub fn changed(self) -> bool {
        matches!(self, MoveOutcome::Moved | MoveOutcome::Locked)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformRandom> {
    board: Board,
    active: Option<Piece>,
    next: Option<Piece>,
    position: Position,
    score: u32,
    level: Level,
    /// Total lines cleared this game.
    lines: u32,
    started: bool,
    game_over: bool,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    source: S,
}

impl GameState<UniformRandom> {
    /// New game with unseeded piece selection
    pub fn new() -> Self {
        Self::with_source(UniformRandom::from_entropy())
    }

    /// New game whose piece sequence is fixed by `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(UniformRandom::seeded(seed))
    }
}

impl Default for GameState<UniformRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PieceSource> GameState<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            position: Position::default(),
            score: 0,
            level: Level::default(),
            lines: 0,
            started: false,
            game_over: false,
            last_event: None,
            source,
        }
    }

    /// Start a fresh game: empty board, two new pieces, score reset.
    ///
    /// Valid from any phase; after game over this begins a new game.
    pub fn start(&mut self) {
        self.board.clear();

        let active = self.draw();
        let next = self.draw();
        self.position = active.spawn_position();
        self.active = Some(active);
        self.next = Some(next);

        self.score = 0;
        self.lines = 0;
        self.game_over = false;
        self.started = true;
        self.last_event = None;
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::NotStarted
        } else if self.game_over {
            Phase::GameOver
        } else {
            Phase::Playing
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase() == Phase::Playing
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next_piece(&self) -> Option<Piece> {
        self.next
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Gravity interval for the current level
    pub fn tick_interval_ms(&self) -> u32 {
        level_tick_interval_ms(self.level)
    }

    /// Choose the level for the next game.
    ///
    /// Refused with [`LevelError::GameInProgress`] only while playing. Selection reopens
    /// after game over so the next [`start`](Self::start) can run at a different level;
    /// the running game's level never changes.
    pub fn set_level(&mut self, level: Level) -> Result<(), LevelError> {
        if self.is_playing() {
            return Err(LevelError::GameInProgress);
        }
        self.level = level;
        Ok(())
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// True if any filled cell of `piece` at `pos` is past a side wall, below the floor,
    /// or on an occupied cell. Cells above the top edge do not collide.
    pub fn is_colliding(&self, piece: &Piece, pos: Position) -> bool {
        piece
            .shape()
            .filled()
            .any(|(dx, dy)| !self.board.is_open(pos.x + dx, pos.y + dy))
    }

    /// Move the active piece by (dx, dy).
    ///
    /// A blocked downward move locks the piece where it is; any other blocked move
    /// leaves the state untouched.
    pub fn move_piece(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        if !self.is_playing() {
            return MoveOutcome::Inactive;
        }
        let Some(active) = self.active else {
            return MoveOutcome::Inactive;
        };

        let candidate = self.position.offset(dx, dy);
        if !self.is_colliding(&active, candidate) {
            self.position = candidate;
            MoveOutcome::Moved
        } else if dy > 0 {
            self.place_piece();
            MoveOutcome::Locked
        } else {
            MoveOutcome::Blocked
        }
    }

    /// Rotate the active piece clockwise in place. No kicks: a colliding rotation is dropped.
    pub fn rotate(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.rotated();
        if self.is_colliding(&rotated, self.position) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// Lock the active piece, clear lines and spawn the queued piece.
    ///
    /// Sets game over when the spawned piece collides at its spawn position.
    /// Does nothing unless a game is in progress.
    pub fn place_piece(&mut self) {
        if !self.is_playing() {
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        self.board.merge(&active, self.position);
        let lines_cleared = self.clear_lines();
        let points = line_clear_points(lines_cleared, self.level);

        let spawned = match self.next.take() {
            Some(piece) => piece,
            None => self.draw(),
        };
        self.next = Some(self.draw());
        self.position = spawned.spawn_position();
        self.active = Some(spawned);

        let topped_out = self.is_colliding(&spawned, self.position);
        if topped_out {
            self.game_over = true;
        }

        self.last_event = Some(LockEvent {
            kind: active.kind,
            lines_cleared,
            points,
            topped_out,
        });
    }

    /// Remove full rows and score them: `lines * 100 * level`, once per call.
    ///
    /// Returns the number of rows removed; zero leaves board and score untouched.
    pub fn clear_lines(&mut self) -> u32 {
        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared > 0 {
            self.score = self
                .score
                .saturating_add(line_clear_points(cleared, self.level));
            self.lines = self.lines.saturating_add(cleared);
        }
        cleared
    }

    /// One gravity step.
    pub fn tick(&mut self) -> MoveOutcome {
        self.move_piece(0, 1)
    }

    /// Apply a player command. Returns whether the state changed.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_piece(-1, 0).changed(),
            Command::MoveRight => self.move_piece(1, 0).changed(),
            Command::SoftDrop => self.move_piece(0, 1).changed(),
            Command::Rotate => self.rotate(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(|piece| ActiveSnapshot {
            piece: PieceSnapshot::from(piece),
            x: self.position.x,
            y: self.position.y,
        });
        out.next = self.next.map(PieceSnapshot::from);
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.started = self.started;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn draw(&mut self) -> Piece {
        Piece::new(self.source.next_kind())
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Piece, pos: Position) {
        self.active = Some(piece);
        self.position = pos;
    }
}
