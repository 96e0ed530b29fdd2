//! Scoring module - line clear points and gravity speed
//!
//! Clears are scored linearly: every line is worth `LINE_CLEAR_POINTS * level`, with no
//! bonus for clearing several rows at once.

use crate::types::{Level, BASE_TICK_MS, LINE_CLEAR_POINTS, MIN_TICK_MS, TICK_STEP_MS};

/// Points for clearing `lines` rows in one placement at `level`
pub fn line_clear_points(lines: u32, level: Level) -> u32 {
    lines
        .saturating_mul(LINE_CLEAR_POINTS)
        .saturating_mul(level.get() as u32)
}

/// Gravity interval in milliseconds: `max(1000 - (level - 1) * 100, 100)`
///
/// Takes a raw level so the formula is defined past the selector's range.
pub fn tick_interval_ms(level: u32) -> u32 {
    let steps = level as i64 - 1;
    let interval = BASE_TICK_MS as i64 - steps * TICK_STEP_MS as i64;
    interval.max(MIN_TICK_MS as i64) as u32
}

/// Gravity interval for a selectable level
pub fn level_tick_interval_ms(level: Level) -> u32 {
    tick_interval_ms(level.get() as u32)
}
