//! Data-driven game balance
//!
//! The resolver and the transition engine never read ambient globals; both
//! take a [`Tuning`] reference, so the core stays unit-testable without a
//! rendering context and hosts can ship balance data as JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Immutable gameplay configuration shared by the resolver and the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tuning {
    /// Grid cell width in pixels
    pub cell_width: i32,
    /// Grid cell height in pixels
    pub cell_height: i32,
    /// Arena width in cells
    pub arena_cols: i32,
    /// Arena height in cells
    pub arena_rows: i32,
    /// Sprite sheet row height; the gravity divisor
    pub sprite_height: i32,
    /// Horizontal walk speed (pixels per tick)
    pub move_speed: i32,
    /// Stair climb speed (pixels per tick)
    pub climb_speed: i32,
    /// Countdown before the run times out (ticks)
    pub time_limit_ticks: u32,
    /// Points for collecting an egg
    pub egg_score: u32,
    /// Points for collecting a food item
    pub food_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            arena_cols: ARENA_COLS,
            arena_rows: ARENA_ROWS,
            sprite_height: SPRITE_HEIGHT,
            move_speed: MOVE_SPEED,
            climb_speed: CLIMB_SPEED,
            time_limit_ticks: TIME_LIMIT_TICKS,
            egg_score: EGG_SCORE,
            food_score: FOOD_SCORE,
        }
    }
}

impl Tuning {
    /// Downward acceleration applied each airborne tick
    #[inline]
    pub fn gravity(&self) -> i32 {
        self.cell_height / self.sprite_height
    }

    /// Upward impulse applied on jump; doubles as the terminal fall speed
    #[inline]
    pub fn jump_impulse(&self) -> i32 {
        self.cell_height / 2
    }

    /// Arena width in pixels
    #[inline]
    pub fn arena_width(&self) -> i32 {
        self.arena_cols * self.cell_width
    }

    /// Arena height in pixels
    #[inline]
    pub fn arena_height(&self) -> i32 {
        self.arena_rows * self.cell_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_derived_values() {
        let tuning = Tuning::default();
        assert_eq!(tuning.gravity(), 2);
        assert_eq!(tuning.jump_impulse(), 16);
        assert_eq!(tuning.arena_width(), 640);
        assert_eq!(tuning.arena_height(), 480);
    }

    #[test]
    fn round_trips_through_json() {
        let tuning = Tuning {
            move_speed: 6,
            ..Tuning::default()
        };
        let json = serde_json::to_string(&tuning).expect("serialize");
        let restored: Tuning = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, tuning);
    }
}
