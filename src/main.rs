//! Headless demo host.
//!
//! Loads the bundled level and replays a scripted input tape through the
//! pure transition functions until the run ends, then reports the result
//! and records it on the local leaderboard.

use std::path::Path;

use henhouse::level::Level;
use henhouse::sim::{self, Action, GamePhase};
use henhouse::{HighScores, Tuning};

const DEMO_LEVEL: &str = include_str!("../levels/henhouse.txt");
const SCORES_FILE: &str = "highscores.json";

/// One held-key input per tick, shaped like a player run: up the left
/// stairway, across both platforms sweeping the eggs, then back down for
/// the last one on the ground floor.
fn scripted_action(time: u32) -> Option<Action> {
    match time {
        0..=39 => Some(Action::WalkRight),
        40..=95 => Some(Action::UpStairs),
        96..=151 => Some(Action::WalkRight),
        152..=183 => Some(Action::UpStairs),
        184..=263 => Some(Action::WalkLeft),
        264..=343 => Some(Action::WalkRight),
        344..=375 => Some(Action::DownStairs),
        376..=431 => Some(Action::WalkLeft),
        432..=487 => Some(Action::DownStairs),
        488..=539 => Some(Action::WalkRight),
        _ => None,
    }
}

fn main() {
    env_logger::init();

    let tuning = Tuning::default();
    let game = match Level::from_ascii(DEMO_LEVEL).and_then(|level| level.into_game(&tuning)) {
        Ok(game) => game,
        Err(err) => {
            log::error!("demo level rejected: {err}");
            std::process::exit(1);
        }
    };

    let total_eggs = game.eggs.len();
    let mut game = game;
    while game.phase == GamePhase::Playing {
        let action = scripted_action(game.time);
        game = sim::apply_action(&game, &tuning, action);
        game = sim::step(&game, &tuning);
    }

    let eggs_collected = (total_eggs - game.eggs.len()) as u32;
    println!(
        "{:?} after {} ticks: score {}, eggs {}/{}",
        game.phase, game.time, game.score, eggs_collected, total_eggs
    );

    let mut scores = HighScores::load(Path::new(SCORES_FILE));
    if let Some(rank) = scores.add_score(game.score, eggs_collected, game.time) {
        println!("new high score at rank {rank}");
        scores.save(Path::new(SCORES_FILE));
    }
}
