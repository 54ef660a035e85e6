//! Game state and core simulation types
//!
//! The whole game is one immutable snapshot. Every transition allocates a
//! new snapshot instead of mutating in place, which keeps replay and rewind
//! trivial and rules out shared-mutable-state bugs.

use std::collections::BTreeSet;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision;
use super::grid::{self, Cell, Direction};
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Every egg collected before the countdown ran out
    Winner,
    /// The countdown ran out
    Timeout,
}

/// Discrete player commands, at most one per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    WalkLeft,
    WalkRight,
    Jump,
    UpStairs,
    DownStairs,
}

/// The player entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Man {
    /// Top-left pixel of the lower body cell; the 1x2-cell bounding box
    /// extends one cell above this point
    pub pos: IVec2,
    /// Facing, also the horizontal component of a jump
    pub facing: Direction,
    /// Velocity in pixels per tick
    pub vel: IVec2,
    /// Mid jump arc; mutually exclusive with ground walking
    pub jumping: bool,
    /// On a stair cell with an up/down command active
    pub climbing: bool,
    /// Animation frame counter for the renderer
    pub sprite_state: u32,
}

impl Man {
    /// Spawn standing still at `cell`, facing right
    pub fn spawn(cell: Cell, tuning: &Tuning) -> Self {
        Self {
            pos: grid::cell_to_point(cell, tuning),
            facing: Direction::Right,
            vel: IVec2::ZERO,
            jumping: false,
            climbing: false,
            sprite_state: 0,
        }
    }

    /// Cell containing the man's anchor position (his lower body cell)
    pub fn cell(&self, tuning: &Tuning) -> Cell {
        grid::point_to_cell(self.pos, tuning)
    }
}

/// Complete game snapshot (immutable between transitions, serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// The player
    pub man: Man,
    /// Solid cells, fixed at load time
    pub floor: BTreeSet<Cell>,
    /// Climbable cells, fixed at load time
    pub stairs: BTreeSet<Cell>,
    /// Eggs remaining; shrinks as they are collected, never grows
    pub eggs: BTreeSet<Cell>,
    /// Food remaining; shrinks as it is collected, never grows
    pub food: BTreeSet<Cell>,
    /// Points scored so far
    pub score: u32,
    /// Ticks elapsed since the run started
    pub time: u32,
    /// Playing until won or timed out; terminal phases never revert
    pub phase: GamePhase,
}

impl Game {
    /// Fresh snapshot from decoded level content
    pub fn new(
        man_cell: Cell,
        floor: BTreeSet<Cell>,
        stairs: BTreeSet<Cell>,
        eggs: BTreeSet<Cell>,
        food: BTreeSet<Cell>,
        tuning: &Tuning,
    ) -> Self {
        Self {
            man: Man::spawn(man_cell, tuning),
            floor,
            stairs,
            eggs,
            food,
            score: 0,
            time: 0,
            phase: GamePhase::Playing,
        }
    }

    /// Floor cells plus stair cells horizontally adjacent to floor
    ///
    /// Ground detection uses this wider set so the man can stand at the
    /// junction cell at the top or bottom of a staircase without falling
    /// through the gap the stairway cuts into a platform.
    pub fn effective_floor(&self) -> BTreeSet<Cell> {
        let mut cells = self.floor.clone();
        cells.extend(self.stairs.iter().copied().filter(|stair| {
            self.floor.contains(&stair.step(Direction::Left))
                || self.floor.contains(&stair.step(Direction::Right))
        }));
        cells
    }

    /// Whether the man's anchor cell is exactly a stair cell
    pub fn man_on_stairs(&self, tuning: &Tuning) -> bool {
        self.stairs.contains(&self.man.cell(tuning))
    }

    /// Whether the man rests on the effective floor
    pub fn man_on_ground(&self, tuning: &Tuning) -> bool {
        collision::on_ground(self.man.pos, &self.effective_floor(), tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t() -> Tuning {
        Tuning::default()
    }

    #[test]
    fn spawn_places_man_at_cell_corner() {
        let tuning = t();
        let man = Man::spawn(Cell::new(3, 5), &tuning);
        assert_eq!(man.pos, IVec2::new(160, 96));
        assert_eq!(man.cell(&tuning), Cell::new(3, 5));
        assert!(!man.jumping);
        assert!(!man.climbing);
        assert_eq!(man.vel, IVec2::ZERO);
    }

    #[test]
    fn effective_floor_includes_staircase_junctions() {
        let tuning = t();
        // Platform with a stairway hole at (1, 2); an isolated stair column
        // below it touches no floor
        let floor = BTreeSet::from([Cell::new(1, 1), Cell::new(1, 3)]);
        let stairs = BTreeSet::from([Cell::new(1, 2), Cell::new(2, 2), Cell::new(3, 2)]);
        let game = Game::new(
            Cell::new(0, 1),
            floor,
            stairs,
            BTreeSet::new(),
            BTreeSet::new(),
            &tuning,
        );

        let effective = game.effective_floor();
        assert!(effective.contains(&Cell::new(1, 2)));
        assert!(!effective.contains(&Cell::new(2, 2)));
        assert!(!effective.contains(&Cell::new(3, 2)));
        assert!(effective.contains(&Cell::new(1, 1)));
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let tuning = t();
        let game = Game::new(
            Cell::new(2, 2),
            BTreeSet::from([Cell::new(3, 2)]),
            BTreeSet::new(),
            BTreeSet::from([Cell::new(2, 4)]),
            BTreeSet::new(),
            &tuning,
        );
        let json = serde_json::to_string(&game).expect("serialize");
        let restored: Game = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, game);
    }
}
