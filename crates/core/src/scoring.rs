//! Scoring module - classic line-clear scoring, leveling and pacing
//!
//! - Clearing N lines at once awards `LINE_SCORES[N] * level`, using the level in
//!   effect before the clear.
//! - Level is `total_lines / 10 + 1` and never goes down.
//! - The recommended tick interval is `max(floor, base - (level - 1) * 40)`.

use crate::types::{INTERVAL_STEP_MS, LINES_PER_LEVEL, LINE_SCORES};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points awarded for this clear
    pub points: u32,
    /// Running line total after the clear
    pub total_lines: u32,
    /// Level after the clear
    pub level: u32,
}

/// Calculate line clear bonus
/// lines: number of lines cleared at once (anything outside 1-4 scores 0)
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Level for a running line total
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Apply one clear to the running totals
pub fn calculate_score(lines_cleared: usize, total_lines: u32, level: u32) -> ScoreResult {
    let points = calculate_line_score(lines_cleared, level);
    let total_lines = total_lines.saturating_add(lines_cleared as u32);
    ScoreResult {
        points,
        total_lines,
        level: level.max(calculate_level(total_lines)),
    }
}

/// Recommended tick interval for a level, in milliseconds
pub fn tick_interval_ms(level: u32, base_ms: u32, floor_ms: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(INTERVAL_STEP_MS);
    base_ms.saturating_sub(reduction).max(floor_ms)
}
