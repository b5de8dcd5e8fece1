//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, tongue_touches};
pub use state::{
    DripEffect, Frog, GameState, Insect, InsectKind, Screen, ScoreEffect, Tongue, TongueState,
};
pub use tick::{RoundEnd, TickInput, tick, tick_second};
