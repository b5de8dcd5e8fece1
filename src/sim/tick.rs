//! Fixed timestep simulation tick
//!
//! Two entry points driven by independent schedules: [`tick`] advances one
//! frame of gameplay, [`tick_second`] advances the wall-clock round timer.
//! The two must never be conflated; the shell calls them from separate
//! triggers.

use super::collision::tongue_touches;
use super::state::{DripEffect, GameState, Screen, ScoreEffect, TongueState};
use crate::consts::*;
use crate::settings::{ControlMode, Settings};
use rand::Rng;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer x position, honored under pointer control
    pub pointer_x: Option<f32>,
    /// Move keys currently held, honored under key control
    pub move_left: bool,
    pub move_right: bool,
    /// Launch the tongue (one-shot)
    pub launch: bool,
    /// Leave the title screen (one-shot)
    pub start: bool,
    /// Leave the instructions screen (one-shot)
    pub confirm: bool,
    /// Back out of the current screen / abandon the round (one-shot)
    pub cancel: bool,
    /// Open the score board from the title screen (one-shot)
    pub secondary: bool,
}

/// Emitted by [`tick_second`] when the countdown ends a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundEnd {
    /// Final score of the round that just finished
    pub score: i64,
}

/// Advance the game by one fixed timestep
///
/// Screens other than the active round only react to discrete inputs;
/// unexpected inputs are silently ignored.
pub fn tick(state: &mut GameState, input: &TickInput, settings: &Settings) {
    match state.screen {
        Screen::Title => {
            if input.start {
                state.screen = if settings.skip_instructions {
                    Screen::Playing
                } else {
                    Screen::Instructions
                };
            } else if input.secondary {
                state.screen = Screen::Scoreboard;
            }
            return;
        }
        Screen::Instructions => {
            if input.confirm {
                state.screen = Screen::Playing;
            }
            return;
        }
        Screen::Scoreboard => {
            if input.cancel {
                state.screen = Screen::Title;
            }
            return;
        }
        Screen::Playing => {
            if input.cancel {
                // Abandoned round: nothing is recorded, pending drips die
                state.reset_round();
                state.screen = Screen::Title;
                log::info!("Round abandoned");
                return;
            }
        }
    }

    state.time_ticks += 1;

    move_frog(state, input, settings);
    move_insects(state);
    move_tongue(state, input);
    resolve_catches(state);
    advance_drips(state);
}

/// Horizontal frog control; no acceleration, clamped to the field
fn move_frog(state: &mut GameState, input: &TickInput, settings: &Settings) {
    let frog = &mut state.frog;
    match settings.control {
        ControlMode::Pointer => {
            if let Some(x) = input.pointer_x {
                frog.pos.x = x;
            }
        }
        ControlMode::Keys => {
            if input.move_left {
                frog.pos.x -= FROG_STEP;
            }
            if input.move_right {
                frog.pos.x += FROG_STEP;
            }
        }
    }
    frog.pos.x = frog.pos.x.clamp(0.0, FIELD_WIDTH);
}

/// Advance every insect: signed horizontal speed plus a vertical jitter
/// random walk, respawning once the exit edge is crossed
fn move_insects(state: &mut GameState) {
    let GameState { insects, rng, .. } = state;
    for insect in insects.iter_mut() {
        let jitter = insect.kind.jitter();
        insect.pos.y += rng.random_range(-jitter..jitter);
        insect.pos.x += insect.kind.speed();
        if insect.off_field() {
            insect.respawn(rng);
        }
    }
}

/// Tongue state machine; x re-syncs to the body before transition logic
fn move_tongue(state: &mut GameState, input: &TickInput) {
    let body = state.frog.pos;
    let tongue = &mut state.frog.tongue;

    // The tongue tracks the frog horizontally in every state
    tongue.pos.x = body.x;

    // Launching mid-flight is ignored
    if input.launch && tongue.state == TongueState::Idle {
        tongue.state = TongueState::Outbound;
    }

    match tongue.state {
        TongueState::Idle => {}
        TongueState::Outbound => {
            tongue.pos.y -= tongue.speed;
            // Bounces back off the far boundary
            if tongue.pos.y <= 0.0 {
                tongue.state = TongueState::Inbound;
            }
        }
        TongueState::Inbound => {
            tongue.pos.y += tongue.speed;
            if tongue.pos.y >= body.y {
                tongue.pos.y = body.y;
                tongue.state = TongueState::Idle;
            }
        }
    }
}

/// Per-insect catch test against the tongue tip
///
/// An insect respawns the moment it is caught, so it can only be caught once
/// per tick; distinct variants caught in the same tick all apply.
fn resolve_catches(state: &mut GameState) {
    let GameState {
        frog,
        insects,
        rng,
        score,
        drips,
        ..
    } = state;

    for insect in insects.iter_mut() {
        if !tongue_touches(&frog.tongue, insect) {
            continue;
        }
        let kind = insect.kind;
        insect.respawn(rng);
        // Visible side effect: the tongue retracts instantly on contact
        frog.tongue.state = TongueState::Inbound;
        match kind.score_effect() {
            ScoreEffect::Instant(delta) => *score += delta,
            ScoreEffect::Drip(delta) => drips.push(DripEffect::new(delta)),
        }
        log::debug!("caught {kind:?}, score now {score}");
    }
}

/// Advance active drip effects and prune the expired
fn advance_drips(state: &mut GameState) {
    let GameState { drips, score, .. } = state;
    for drip in drips.iter_mut() {
        if let Some(delta) = drip.advance() {
            *score += delta;
        }
    }
    drips.retain(|drip| !drip.expired());
}

/// Advance the wall-clock countdown; active only during a round
///
/// On reaching zero the finished score is handed back for recording and the
/// session moves to the score board with timer and score reset.
pub fn tick_second(state: &mut GameState) -> Option<RoundEnd> {
    if state.screen != Screen::Playing {
        return None;
    }
    state.timer = state.timer.saturating_sub(1);
    if state.timer > 0 {
        return None;
    }
    let end = RoundEnd { score: state.score };
    state.reset_round();
    state.screen = Screen::Scoreboard;
    log::info!("Round over, final score {}", end.score);
    Some(end)
}
