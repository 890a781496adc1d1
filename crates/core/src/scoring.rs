//! Scoring module - flat per-row scoring and level progression
//!
//! - Every cleared row is worth the same number of points, no multi-line bonus.
//! - The level is a function of score alone and never goes down.
//! - The gravity interval shrinks linearly with level down to a floor.

use crate::config::GameConfig;

/// Points for clearing `lines` rows at once.
pub fn line_clear_points(lines: usize, config: &GameConfig) -> u32 {
    (lines as u32).saturating_mul(config.points_per_line)
}

/// Level reached with `score`, never lower than `current`.
pub fn level_for_score(score: u32, current: u32, config: &GameConfig) -> u32 {
    current.max(1 + score / config.points_per_level.max(1))
}

/// Gravity interval in milliseconds at `level` (1-based).
pub fn fall_interval_ms(level: u32, config: &GameConfig) -> u32 {
    let reduction = config
        .fall_step_ms
        .saturating_mul(level.saturating_sub(1));
    config
        .base_fall_ms
        .saturating_sub(reduction)
        .max(config.min_fall_ms)
}
