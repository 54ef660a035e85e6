//! Pure game-state transitions
//!
//! The host loop feeds at most one [`Action`] per tick into [`apply_action`],
//! then advances physics with [`step`]. Both take the current snapshot by
//! reference and return the next one; nothing is mutated in place.

use glam::IVec2;

use super::collision;
use super::grid::{self, Direction};
use crate::sim::state::{Action, Game, GamePhase, Man};
use crate::tuning::Tuning;

/// Interpret a player action into velocity and pose changes
///
/// Walking faces and pushes the man horizontally; jumping launches him along
/// his facing with an upward impulse of half a cell; up/down on a stair cell
/// starts a climb. `None`, or an action whose precondition is unmet, yields
/// an identical snapshot. Physics is not advanced here.
pub fn apply_action(game: &Game, tuning: &Tuning, action: Option<Action>) -> Game {
    let Some(action) = action else {
        return game.clone();
    };

    let man = &game.man;
    let on_stairs = game.man_on_stairs(tuning);

    let man = match action {
        Action::WalkLeft if !man.jumping => Man {
            facing: Direction::Left,
            vel: IVec2::new(-tuning.move_speed, 0),
            jumping: false,
            climbing: false,
            ..man.clone()
        },
        Action::WalkRight if !man.jumping => Man {
            facing: Direction::Right,
            vel: IVec2::new(tuning.move_speed, 0),
            jumping: false,
            climbing: false,
            ..man.clone()
        },
        Action::Jump if !man.jumping && !on_stairs => Man {
            vel: IVec2::new(
                man.facing.col_delta() * tuning.move_speed,
                -tuning.jump_impulse(),
            ),
            jumping: true,
            climbing: false,
            ..man.clone()
        },
        Action::UpStairs if !man.jumping && on_stairs => Man {
            facing: Direction::Up,
            vel: IVec2::new(0, -tuning.climb_speed),
            climbing: true,
            ..man.clone()
        },
        Action::DownStairs if !man.jumping && on_stairs => Man {
            facing: Direction::Down,
            vel: IVec2::new(0, tuning.climb_speed),
            climbing: true,
            ..man.clone()
        },
        _ => return game.clone(),
    };

    Game {
        man,
        ..game.clone()
    }
}

/// Advance the simulation by one tick
///
/// Applies the jump/fall arc or grounded movement, resolves collisions,
/// collects at most one egg and one food item under the footprint, advances
/// the clock, and checks the terminal conditions. Timeout is checked before
/// the win condition, so a frame that empties the egg set on the timeout
/// tick still ends the run as a loss. A no-op once the phase is terminal.
pub fn step(game: &Game, tuning: &Tuning) -> Game {
    if game.phase != GamePhase::Playing {
        return game.clone();
    }

    let effective = game.effective_floor();
    let mut man = game.man.clone();
    let mut eggs = game.eggs.clone();
    let mut food = game.food.clone();
    let mut score = game.score;

    let airborne = man.jumping
        || (!collision::on_ground(man.pos, &effective, tuning) && !game.man_on_stairs(tuning));

    if airborne {
        // Fall and jump arcs collide against the effective floor so the man
        // can land on a staircase junction
        let terminal = tuning.jump_impulse();
        man.vel.y = (man.vel.y + tuning.gravity()).clamp(-terminal, terminal);
        man.pos = collision::resolve_movement(man.pos, man.vel, &effective, tuning);
        if collision::on_ground(man.pos, &effective, tuning) {
            // Landed: kill the arc and absorb any overshoot from the fall
            man.jumping = false;
            man.vel.y = 0;
            man.pos.y -= man.pos.y.rem_euclid(tuning.cell_height);
        }
    } else {
        // Walking and climbing collide against the real floor only; junction
        // stair cells support the man but never block a climb through the
        // hole they cut into a platform
        man.pos = collision::resolve_movement(man.pos, man.vel, &game.floor, tuning);
        // A walk or climb command coasts until the next cell boundary
        if grid::x_aligned(man.pos.x, tuning) {
            man.vel.x = 0;
        }
        if grid::y_aligned(man.pos.y, tuning) {
            man.vel.y = 0;
        }
    }

    man.climbing = man.climbing && game.stairs.contains(&man.cell(tuning));

    // At most one egg and one food item per tick; first probe-order match
    // wins even when the footprint overlaps several
    let probe_cells =
        collision::probe_points(man.pos, tuning).map(|p| grid::point_to_cell(p, tuning));
    if let Some(cell) = probe_cells.iter().copied().find(|c| eggs.contains(c)) {
        let _ = eggs.remove(&cell);
        score += tuning.egg_score;
        log::debug!("egg collected at {cell:?}, {} left", eggs.len());
    }
    if let Some(cell) = probe_cells.iter().copied().find(|c| food.contains(c)) {
        let _ = food.remove(&cell);
        score += tuning.food_score;
        log::debug!("food collected at {cell:?}, {} left", food.len());
    }

    let time = game.time + 1;

    let phase = if time >= tuning.time_limit_ticks {
        log::info!("countdown expired at tick {time}, score {score}");
        GamePhase::Timeout
    } else if eggs.is_empty() {
        score += tuning.time_limit_ticks - time;
        log::info!("all eggs collected at tick {time}, score {score}");
        GamePhase::Winner
    } else {
        GamePhase::Playing
    };

    // Animation runs while moving on the ground or stairs
    man.sprite_state = if (man.vel.x != 0 || man.vel.y != 0) && !man.jumping {
        man.sprite_state + 1
    } else {
        0
    };

    Game {
        man,
        floor: game.floor.clone(),
        stairs: game.stairs.clone(),
        eggs,
        food,
        score,
        time,
        phase,
    }
}
