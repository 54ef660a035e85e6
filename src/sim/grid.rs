//! Grid geometry primitives
//!
//! The arena is a fixed grid of cells addressed by (row, col). Continuous
//! positions are integer pixels, origin at the top-left with y growing
//! downward. Many pixel positions map onto one cell; a cell's canonical
//! point is its top-left corner.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// A discrete grid coordinate
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighboring cell one step in `dir`
    #[must_use]
    pub fn step(self, dir: Direction) -> Self {
        Self {
            row: self.row + dir.row_delta(),
            col: self.col + dir.col_delta(),
        }
    }
}

/// Facing and spatial offset direction with unit row/col deltas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Row delta of a unit step in this direction
    #[inline]
    pub const fn row_delta(self) -> i32 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
            Direction::Left | Direction::Right => 0,
        }
    }

    /// Column delta of a unit step in this direction
    #[inline]
    pub const fn col_delta(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Up | Direction::Down => 0,
        }
    }
}

/// Cell containing the pixel position `p`
///
/// Total over all positions: flooring division keeps every pixel of a cell's
/// footprint inside that cell, including at negative coordinates.
#[inline]
pub fn point_to_cell(p: IVec2, tuning: &Tuning) -> Cell {
    Cell::new(
        p.y.div_euclid(tuning.cell_height),
        p.x.div_euclid(tuning.cell_width),
    )
}

/// Top-left pixel of `cell`
///
/// Not an exact inverse of [`point_to_cell`]: every point inside a cell maps
/// back to the same top-left corner.
#[inline]
pub fn cell_to_point(cell: Cell, tuning: &Tuning) -> IVec2 {
    IVec2::new(cell.col * tuning.cell_width, cell.row * tuning.cell_height)
}

/// Clamp a position into the playable area
///
/// Bounds keep the man's one-cell-wide box inside the arena horizontally and
/// his lower body cell on screen vertically; the head may poke above the top
/// row at the peak of a jump.
#[inline]
pub fn clamp_to_area(p: IVec2, tuning: &Tuning) -> IVec2 {
    p.clamp(
        IVec2::ZERO,
        IVec2::new(
            tuning.arena_width() - tuning.cell_width,
            tuning.arena_height() - tuning.cell_height,
        ),
    )
}

/// Whether `x` sits exactly on a vertical cell boundary
#[inline]
pub fn x_aligned(x: i32, tuning: &Tuning) -> bool {
    x.rem_euclid(tuning.cell_width) == 0
}

/// Whether `y` sits exactly on a horizontal cell boundary
#[inline]
pub fn y_aligned(y: i32, tuning: &Tuning) -> bool {
    y.rem_euclid(tuning.cell_height) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn point_maps_anywhere_inside_the_cell() {
        let tuning = Tuning::default();
        assert_eq!(point_to_cell(IVec2::new(0, 0), &tuning), Cell::new(0, 0));
        assert_eq!(point_to_cell(IVec2::new(31, 31), &tuning), Cell::new(0, 0));
        assert_eq!(point_to_cell(IVec2::new(32, 31), &tuning), Cell::new(0, 1));
        assert_eq!(point_to_cell(IVec2::new(31, 32), &tuning), Cell::new(1, 0));
        // Flooring, not truncating, below the origin
        assert_eq!(point_to_cell(IVec2::new(-1, -1), &tuning), Cell::new(-1, -1));
    }

    #[test]
    fn cell_point_is_top_left_corner() {
        let tuning = Tuning::default();
        assert_eq!(cell_to_point(Cell::new(2, 3), &tuning), IVec2::new(96, 64));
    }

    #[test]
    fn direction_deltas_are_unit_steps() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.step(Direction::Left), Cell::new(5, 4));
        assert_eq!(cell.step(Direction::Right), Cell::new(5, 6));
        assert_eq!(cell.step(Direction::Up), Cell::new(4, 5));
        assert_eq!(cell.step(Direction::Down), Cell::new(6, 5));
    }

    #[test]
    fn clamp_pins_to_playable_bounds() {
        let tuning = Tuning::default();
        assert_eq!(
            clamp_to_area(IVec2::new(-10, -10), &tuning),
            IVec2::new(0, 0)
        );
        assert_eq!(
            clamp_to_area(IVec2::new(10_000, 10_000), &tuning),
            IVec2::new(608, 448)
        );
        let inside = IVec2::new(100, 200);
        assert_eq!(clamp_to_area(inside, &tuning), inside);
    }

    proptest! {
        #[test]
        fn cell_round_trips_through_its_canonical_point(row in -8i32..32, col in -8i32..32) {
            let tuning = Tuning::default();
            let cell = Cell::new(row, col);
            prop_assert_eq!(point_to_cell(cell_to_point(cell, &tuning), &tuning), cell);
        }

        #[test]
        fn clamp_is_idempotent(x in -1000i32..2000, y in -1000i32..2000) {
            let tuning = Tuning::default();
            let once = clamp_to_area(IVec2::new(x, y), &tuning);
            prop_assert_eq!(clamp_to_area(once, &tuning), once);
        }
    }
}
