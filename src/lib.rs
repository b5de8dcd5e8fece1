//! Frog Snap - a frog-and-fly tongue-catching arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, tongue, collisions, timers)
//! - `game`: Controller owning the session and the fixed-timestep loop
//! - `render`: Draw-call orchestration over an abstract renderer
//! - `platform`: Storage backends for the score history
//! - `highscores`: Past-round score board

pub mod game;
pub mod highscores;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::ScoreBoard;
pub use settings::{ControlMode, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz; entity speeds are pixels per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 1000.0;
    pub const FIELD_HEIGHT: f32 = 1000.0;

    /// Frog defaults - the body sits on the bottom edge and never leaves it
    pub const FROG_START_X: f32 = 500.0;
    pub const FROG_BODY_Y: f32 = 1000.0;
    pub const FROG_BODY_SIZE: f32 = 300.0;
    /// Horizontal step per tick while a move key is held
    pub const FROG_STEP: f32 = 10.0;

    /// Tongue defaults
    pub const TONGUE_SIZE: f32 = 40.0;
    pub const TONGUE_SPEED: f32 = 20.0;

    /// Vertical band insects (re)spawn into
    pub const SPAWN_BAND_MIN_Y: f32 = 100.0;
    pub const SPAWN_BAND_MAX_Y: f32 = 800.0;

    /// Round length in wall-clock seconds
    pub const ROUND_SECONDS: u32 = 90;

    /// Ticks between two applications of a drip score effect (0.7 s)
    pub const DRIP_INTERVAL_TICKS: u32 = 42;
    /// Total lifetime of a drip score effect (7 s, exactly ten applications)
    pub const DRIP_DURATION_TICKS: u32 = 420;
}
