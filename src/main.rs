//! Frog Snap entry point
//!
//! Runs a headless demo round: a simple bot steers the frog and fires the
//! tongue, the round clock runs at full speed, and the resulting board is
//! printed at the end.

use anyhow::Result;

use frog_snap::Game;
use frog_snap::consts::SIM_DT;
use frog_snap::highscores::MAX_BOARD_ENTRIES;
use frog_snap::platform::store::FileStore;
use frog_snap::settings::{ControlMode, Settings};
use frog_snap::sim::{InsectKind, Screen, ScoreEffect, TongueState};

/// Frame ticks per simulated wall-clock second
const TICKS_PER_SECOND: u32 = 60;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Frog Snap (headless demo) starting...");

    let settings = Settings {
        control: ControlMode::Pointer,
        skip_instructions: true,
    };
    let store = FileStore::open_default()?;
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_millis() as u64;
    let mut game = Game::new(seed, settings, Box::new(store));

    // Straight into a round
    game.input_mut().start = true;
    game.frame(SIM_DT);

    while game.state().screen == Screen::Playing {
        for _ in 0..TICKS_PER_SECOND {
            steer(&mut game);
            game.frame(SIM_DT);
        }
        game.second();
    }

    println!("Final score board:");
    for (i, score) in game
        .scores()
        .top_scores(MAX_BOARD_ENTRIES)
        .iter()
        .enumerate()
    {
        println!("{:>2}. {score}", i + 1);
    }

    Ok(())
}

/// Chase the nearest insect worth points and fire whenever the tongue is home
fn steer(game: &mut Game) {
    let state = game.state();
    let frog_x = state.frog.pos.x;
    let target_x = state
        .insects
        .iter()
        .filter(|insect| is_tasty(insect.kind))
        .min_by(|a, b| {
            let da = (a.pos.x - frog_x).abs();
            let db = (b.pos.x - frog_x).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|insect| insect.pos.x);
    let tongue_home = state.frog.tongue.state == TongueState::Idle;

    let input = game.input_mut();
    input.pointer_x = target_x;
    input.launch = tongue_home;
}

fn is_tasty(kind: InsectKind) -> bool {
    match kind.score_effect() {
        ScoreEffect::Instant(delta) | ScoreEffect::Drip(delta) => delta > 0,
    }
}
