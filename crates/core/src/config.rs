//! Session configuration
//!
//! Defaults reproduce the flat scoring scheme: 100 points per row, a level every 500 points,
//! and a gravity interval that starts at 500ms and loses 50ms per level down to 100ms.

use std::env;

use serde::{Deserialize, Serialize};

use crate::types::{BASE_FALL_MS, FALL_STEP_MS, MIN_FALL_MS, POINTS_PER_LEVEL, POINTS_PER_LINE};

/// Tunable parameters of a [`crate::GameSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Gravity interval at level 1
    pub base_fall_ms: u32,
    /// Gravity interval floor
    pub min_fall_ms: u32,
    /// Interval reduction per level above 1
    pub fall_step_ms: u32,
    pub points_per_line: u32,
    pub points_per_level: u32,
    /// Fixed seed for piece and color generation; entropy when `None`
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_fall_ms: BASE_FALL_MS,
            min_fall_ms: MIN_FALL_MS,
            fall_step_ms: FALL_STEP_MS,
            points_per_line: POINTS_PER_LINE,
            points_per_level: POINTS_PER_LEVEL,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by environment variables.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `BLOCKFALL_SEED`, `BLOCKFALL_BASE_FALL_MS` and `BLOCKFALL_MIN_FALL_MS`.
    ///
    /// Unset or unparsable variables leave the current value in place.
    pub fn with_env_overrides(self) -> Self {
        let seed = env::var("BLOCKFALL_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .or(self.seed);

        let base_fall_ms = env::var("BLOCKFALL_BASE_FALL_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(self.base_fall_ms);

        let min_fall_ms = env::var("BLOCKFALL_MIN_FALL_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(self.min_fall_ms);

        Self {
            seed,
            base_fall_ms,
            min_fall_ms,
            ..self
        }
    }

    /// Clamp values so the fall interval stays strictly positive and levels stay reachable.
    pub fn sanitized(self) -> Self {
        let mut out = self;
        if out.min_fall_ms == 0 {
            log::warn!("min_fall_ms must be positive, using 1");
            out.min_fall_ms = 1;
        }
        if out.base_fall_ms < out.min_fall_ms {
            log::warn!(
                "base_fall_ms {} is below min_fall_ms {}, raising it",
                out.base_fall_ms,
                out.min_fall_ms
            );
            out.base_fall_ms = out.min_fall_ms;
        }
        if out.points_per_level == 0 {
            log::warn!("points_per_level must be positive, using {}", POINTS_PER_LEVEL);
            out.points_per_level = POINTS_PER_LEVEL;
        }
        out
    }
}
