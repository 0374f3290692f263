//! Scoring module - line-clear points, level and gravity speed
//!
//! - Points: `LINE_SCORES[lines] * level` (100/300/500/800 at level 1).
//! - Level: `score / 1000 + 1`, so it only ever goes up with the score.
//! - Speed: each level-up multiplies the fall interval by 4/5, floored at 100ms.

use crate::types::{
    FALL_INTERVAL_DENOMINATOR, FALL_INTERVAL_NUMERATOR, LINE_SCORES, MIN_FALL_INTERVAL_MS,
    SCORE_PER_LEVEL,
};

/// Calculate line clear score
/// lines: number of lines cleared in one lock (0-4)
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    LINE_SCORES
        .get(lines)
        .copied()
        .unwrap_or(0)
        .saturating_mul(level)
}

/// Level for a total score
pub fn calculate_level(score: u32) -> u32 {
    score / SCORE_PER_LEVEL + 1
}

/// Fall interval after one level-up.
///
/// Never below [`MIN_FALL_INTERVAL_MS`] and never above `current_ms`.
pub fn next_fall_interval_ms(current_ms: u32) -> u32 {
    let scaled = (current_ms as u64 * FALL_INTERVAL_NUMERATOR as u64
        / FALL_INTERVAL_DENOMINATOR as u64) as u32;
    scaled.max(MIN_FALL_INTERVAL_MS).min(current_ms)
}
