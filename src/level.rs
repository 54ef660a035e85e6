//! Level decoding and validation
//!
//! A level is a flat tile list. Two encodings produce the same [`Level`]:
//! a JSON tile array for external level packs, and a compact ASCII grid used
//! by the bundled level and the test suite. Decoding fails fast when the man
//! entry is missing or duplicated, so no `Game` ever starts with an
//! undefined player position.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::{Cell, Game};
use crate::tuning::Tuning;

/// What a placed level tile contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Man,
    Floor,
    Stair,
    Egg,
    Food,
}

/// One placed tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub row: i32,
    pub col: i32,
    pub kind: TileKind,
}

/// Decoded level content, not yet validated into a [`Game`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub tiles: Vec<Tile>,
}

/// Reasons level data cannot become a `Game`
#[derive(Debug, Error)]
pub enum LevelError {
    /// No man entry: the game would have no player position
    #[error("level has no man entry")]
    MissingMan,
    /// More than one man entry
    #[error("level has {0} man entries, expected exactly one")]
    DuplicateMan(usize),
    /// Unrecognized glyph in an ASCII level
    #[error("unknown tile glyph {glyph:?} at row {row}, col {col}")]
    UnknownTile { glyph: char, row: usize, col: usize },
    /// Malformed JSON level
    #[error("malformed level JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Level {
    /// Decode the JSON tile-array format
    pub fn from_json(source: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Decode the compact grid format
    ///
    /// One character per cell: `#` floor, `H` stairs, `o` egg, `*` food,
    /// `M` man, `.` or space empty.
    pub fn from_ascii(source: &str) -> Result<Self, LevelError> {
        let mut tiles = Vec::new();
        for (row, line) in source.lines().enumerate() {
            for (col, glyph) in line.chars().enumerate() {
                let kind = match glyph {
                    '#' => TileKind::Floor,
                    'H' => TileKind::Stair,
                    'o' => TileKind::Egg,
                    '*' => TileKind::Food,
                    'M' => TileKind::Man,
                    '.' | ' ' => continue,
                    _ => return Err(LevelError::UnknownTile { glyph, row, col }),
                };
                tiles.push(Tile {
                    row: row as i32,
                    col: col as i32,
                    kind,
                });
            }
        }
        Ok(Self { tiles })
    }

    /// Validate the tile list and build the starting snapshot
    pub fn into_game(self, tuning: &Tuning) -> Result<Game, LevelError> {
        let mut men = Vec::new();
        let mut floor = BTreeSet::new();
        let mut stairs = BTreeSet::new();
        let mut eggs = BTreeSet::new();
        let mut food = BTreeSet::new();

        for tile in &self.tiles {
            let cell = Cell::new(tile.row, tile.col);
            match tile.kind {
                TileKind::Man => men.push(cell),
                TileKind::Floor => {
                    let _ = floor.insert(cell);
                }
                TileKind::Stair => {
                    let _ = stairs.insert(cell);
                }
                TileKind::Egg => {
                    let _ = eggs.insert(cell);
                }
                TileKind::Food => {
                    let _ = food.insert(cell);
                }
            }
        }

        let man_cell = match men.len() {
            0 => return Err(LevelError::MissingMan),
            1 => men[0],
            n => return Err(LevelError::DuplicateMan(n)),
        };

        log::info!(
            "level loaded: {} floor, {} stair, {} eggs, {} food",
            floor.len(),
            stairs.len(),
            eggs.len(),
            food.len()
        );
        Ok(Game::new(man_cell, floor, stairs, eggs, food, tuning))
    }
}

/// Decode a JSON level source directly into a starting `Game`
pub fn load_game(source: &str, tuning: &Tuning) -> Result<Game, LevelError> {
    Level::from_json(source)?.into_game(tuning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    const SKETCH: &str = "\
M.o\n\
##H\n\
..H\n\
.*#\n";

    #[test]
    fn ascii_decodes_every_tile_kind() {
        let level = Level::from_ascii(SKETCH).expect("decode");
        assert_eq!(level.tiles.len(), 8);
        assert!(level.tiles.contains(&Tile {
            row: 0,
            col: 0,
            kind: TileKind::Man
        }));
        assert!(level.tiles.contains(&Tile {
            row: 1,
            col: 2,
            kind: TileKind::Stair
        }));
        assert!(level.tiles.contains(&Tile {
            row: 3,
            col: 1,
            kind: TileKind::Food
        }));
    }

    #[test]
    fn ascii_rejects_unknown_glyphs() {
        let err = Level::from_ascii("M.\n#?").expect_err("must reject");
        assert!(matches!(
            err,
            LevelError::UnknownTile {
                glyph: '?',
                row: 1,
                col: 1
            }
        ));
    }

    #[test]
    fn game_starts_fresh_from_a_level() {
        let tuning = Tuning::default();
        let game = Level::from_ascii(SKETCH)
            .and_then(|level| level.into_game(&tuning))
            .expect("valid level");
        assert_eq!(game.man.cell(&tuning), Cell::new(0, 0));
        assert_eq!(game.eggs.len(), 1);
        assert_eq!(game.food.len(), 1);
        assert_eq!(game.score, 0);
        assert_eq!(game.time, 0);
        assert_eq!(game.phase, GamePhase::Playing);
    }

    #[test]
    fn missing_man_fails_fast() {
        let tuning = Tuning::default();
        let err = Level::from_ascii("..o\n###")
            .and_then(|level| level.into_game(&tuning))
            .expect_err("must reject");
        assert!(matches!(err, LevelError::MissingMan));
    }

    #[test]
    fn duplicated_man_fails_fast() {
        let tuning = Tuning::default();
        let err = Level::from_ascii("M.M\n###")
            .and_then(|level| level.into_game(&tuning))
            .expect_err("must reject");
        assert!(matches!(err, LevelError::DuplicateMan(2)));
    }

    #[test]
    fn json_round_trips_and_loads() {
        let tuning = Tuning::default();
        let level = Level::from_ascii(SKETCH).expect("decode");
        let json = serde_json::to_string(&level).expect("serialize");
        assert_eq!(Level::from_json(&json).expect("reparse"), level);

        let game = load_game(&json, &tuning).expect("load");
        assert_eq!(game.man.cell(&tuning), Cell::new(0, 0));
    }

    #[test]
    fn malformed_json_is_reported() {
        let tuning = Tuning::default();
        assert!(matches!(
            load_game("{not json", &tuning),
            Err(LevelError::Json(_))
        ));
    }
}
