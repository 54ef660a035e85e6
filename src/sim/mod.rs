//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer pixel arithmetic only
//! - Stable iteration order (cells live in `BTreeSet`s)
//! - Every transition returns a new snapshot; nothing mutates in place
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{collides, on_ground, probe_points, resolve_movement};
pub use grid::{Cell, Direction, cell_to_point, clamp_to_area, point_to_cell};
pub use state::{Action, Game, GamePhase, Man};
pub use tick::{apply_action, step};
