//! Henhouse - a single-screen grid platformer engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid geometry, collision, game state)
//! - `level`: Level decoding and validation
//! - `tuning`: Data-driven game balance
//! - `highscores`: Top-10 leaderboard
//!
//! Rendering, window creation and raw keyboard mapping are host concerns;
//! the engine exposes immutable `Game` snapshots and two pure transition
//! functions, `apply_action` and `step`.

pub mod highscores;
pub mod level;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Width of one grid cell in pixels
    pub const CELL_WIDTH: i32 = 32;
    /// Height of one grid cell in pixels
    pub const CELL_HEIGHT: i32 = 32;

    /// Arena width in cells
    pub const ARENA_COLS: i32 = 20;
    /// Arena height in cells
    pub const ARENA_ROWS: i32 = 15;

    /// Sprite sheet row height; divides `CELL_HEIGHT` to give the per-tick
    /// gravity increment
    pub const SPRITE_HEIGHT: i32 = 16;

    /// Horizontal walk speed (pixels per tick)
    pub const MOVE_SPEED: i32 = 4;
    /// Stair climb speed (pixels per tick)
    pub const CLIMB_SPEED: i32 = 4;

    /// Countdown before the run times out (ticks)
    pub const TIME_LIMIT_TICKS: u32 = 2666;

    /// Points for collecting an egg
    pub const EGG_SCORE: u32 = 100;
    /// Points for collecting a food item
    pub const FOOD_SCORE: u32 = 50;

    /// Inset of the collision probe points from the bounding box edges
    pub const PROBE_INSET: i32 = 2;
}
