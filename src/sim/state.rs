//! Game state and core entity types
//!
//! Everything the simulation mutates lives in [`GameState`]; the systems in
//! [`super::tick`] take it by exclusive reference. No ambient statics.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Top-level UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Entry screen, waiting for a start or secondary input
    Title,
    /// How-to-play text; skippable via configuration
    Instructions,
    /// Active round
    Playing,
    /// Board of past round scores
    Scoreboard,
}

/// Determines how the tongue moves each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TongueState {
    /// Parked at the frog's body
    Idle,
    /// Extending toward the top of the field
    Outbound,
    /// Retracting toward the body
    Inbound,
}

/// The frog's retractable tongue; its tip is the sole catch surface
#[derive(Debug, Clone)]
pub struct Tongue {
    /// Tip position; x always tracks the body
    pub pos: Vec2,
    /// Visual thickness and hit diameter
    pub size: f32,
    /// Pixels per tick in either direction
    pub speed: f32,
    pub state: TongueState,
}

/// The player's frog
#[derive(Debug, Clone)]
pub struct Frog {
    /// Body center; y is fixed at the bottom edge
    pub pos: Vec2,
    pub size: f32,
    pub tongue: Tongue,
}

impl Frog {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(FROG_START_X, FROG_BODY_Y),
            size: FROG_BODY_SIZE,
            tongue: Tongue {
                pos: Vec2::new(FROG_START_X, FROG_BODY_Y),
                size: TONGUE_SIZE,
                speed: TONGUE_SPEED,
                state: TongueState::Idle,
            },
        }
    }

    /// Park the tongue at the body's resting row
    pub fn reset_tongue(&mut self) {
        self.tongue.state = TongueState::Idle;
        self.tongue.pos = self.pos;
    }
}

impl Default for Frog {
    fn default() -> Self {
        Self::new()
    }
}

/// What catching an insect does to the score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreEffect {
    /// Applied in full on the tick of the catch
    Instant(i64),
    /// Applied repeatedly over a fixed window; see [`DripEffect`]
    Drip(i64),
}

/// The five insect variants and their per-variant numbers
///
/// Declaration order matches [`InsectKind::ALL`] and the insect list in
/// [`GameState`], so the discriminant doubles as a stable index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsectKind {
    Fly,
    SpiceyFly,
    Mosquito,
    Firefly,
    ToxicFly,
}

impl InsectKind {
    pub const ALL: [InsectKind; 5] = [
        InsectKind::Fly,
        InsectKind::SpiceyFly,
        InsectKind::Mosquito,
        InsectKind::Firefly,
        InsectKind::ToxicFly,
    ];

    /// Hit diameter
    pub fn size(self) -> f32 {
        match self {
            InsectKind::Fly => 30.0,
            InsectKind::SpiceyFly => 15.0,
            InsectKind::Mosquito => 10.0,
            InsectKind::Firefly => 20.0,
            InsectKind::ToxicFly => 25.0,
        }
    }

    /// Signed horizontal speed in pixels per tick; negative variants fly
    /// right-to-left
    pub fn speed(self) -> f32 {
        match self {
            InsectKind::Fly => 3.0,
            InsectKind::SpiceyFly => 10.0,
            InsectKind::Mosquito => -7.0,
            InsectKind::Firefly => 4.0,
            InsectKind::ToxicFly => -1.0,
        }
    }

    /// Half-width of the symmetric vertical jitter applied per tick
    pub fn jitter(self) -> f32 {
        match self {
            InsectKind::Fly => 5.0,
            InsectKind::SpiceyFly => 10.0,
            InsectKind::Mosquito => 7.0,
            InsectKind::Firefly => 2.0,
            InsectKind::ToxicFly => 1.0,
        }
    }

    /// Display color as rgb; the sim stores plain bytes so it stays free of
    /// render types
    pub fn color(self) -> [u8; 3] {
        match self {
            InsectKind::Fly => [0, 0, 0],
            InsectKind::SpiceyFly => [255, 0, 0],
            InsectKind::Mosquito => [143, 98, 53],
            InsectKind::Firefly => [255, 200, 0],
            InsectKind::ToxicFly => [50, 250, 200],
        }
    }

    pub fn score_effect(self) -> ScoreEffect {
        match self {
            InsectKind::Fly => ScoreEffect::Instant(1),
            InsectKind::SpiceyFly => ScoreEffect::Instant(4),
            InsectKind::Mosquito => ScoreEffect::Drip(1),
            InsectKind::Firefly => ScoreEffect::Instant(-1),
            InsectKind::ToxicFly => ScoreEffect::Drip(-1),
        }
    }

    /// x coordinate the variant (re)enters the field at
    pub fn entry_x(self) -> f32 {
        if self.speed() > 0.0 { 0.0 } else { FIELD_WIDTH }
    }
}

/// A live insect; exactly one instance per variant exists at all times
#[derive(Debug, Clone)]
pub struct Insect {
    pub kind: InsectKind,
    pub pos: Vec2,
}

impl Insect {
    /// Spawn at the variant's entry edge with a random row
    pub fn spawn(kind: InsectKind, rng: &mut Pcg32) -> Self {
        let y = rng.random_range(SPAWN_BAND_MIN_Y..SPAWN_BAND_MAX_Y);
        Self {
            kind,
            pos: Vec2::new(kind.entry_x(), y),
        }
    }

    /// Re-enter the field after a catch or an off-field exit
    pub fn respawn(&mut self, rng: &mut Pcg32) {
        *self = Insect::spawn(self.kind, rng);
    }

    /// True once the insect has crossed its exit edge
    pub fn off_field(&self) -> bool {
        if self.kind.speed() > 0.0 {
            self.pos.x > FIELD_WIDTH
        } else {
            self.pos.x < 0.0
        }
    }
}

/// A time-bounded repeating score adjustment from a caught insect
///
/// Advanced once per simulation tick. Applies `delta` every
/// `DRIP_INTERVAL_TICKS` and expires after `DRIP_DURATION_TICKS`, giving
/// exactly ten applications per catch. Concurrent drips are independent.
#[derive(Debug, Clone)]
pub struct DripEffect {
    /// Score change per application
    pub delta: i64,
    /// Ticks until the next application
    pub until_next: u32,
    /// Ticks left before the effect expires
    pub remaining: u32,
}

impl DripEffect {
    pub fn new(delta: i64) -> Self {
        Self {
            delta,
            until_next: DRIP_INTERVAL_TICKS,
            remaining: DRIP_DURATION_TICKS,
        }
    }

    /// Advance one tick; returns the delta to apply this tick, if any
    pub fn advance(&mut self) -> Option<i64> {
        self.remaining = self.remaining.saturating_sub(1);
        self.until_next -= 1;
        if self.until_next == 0 {
            self.until_next = DRIP_INTERVAL_TICKS;
            Some(self.delta)
        } else {
            None
        }
    }

    pub fn expired(&self) -> bool {
        self.remaining == 0
    }
}

/// Complete state for one play session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only source of randomness in the simulation
    pub rng: Pcg32,
    /// Current top-level screen
    pub screen: Screen,
    /// Seconds left in the round; written only by the wall-clock tick
    pub timer: u32,
    /// Round score; transiently negative is allowed
    pub score: i64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub frog: Frog,
    /// One live insect per variant, in `InsectKind::ALL` order
    pub insects: Vec<Insect>,
    /// Active drip score effects
    pub drips: Vec<DripEffect>,
}

impl GameState {
    /// Create a fresh session on the title screen
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let insects = InsectKind::ALL
            .iter()
            .map(|&kind| Insect::spawn(kind, &mut rng))
            .collect();
        Self {
            seed,
            rng,
            screen: Screen::Title,
            timer: ROUND_SECONDS,
            score: 0,
            time_ticks: 0,
            frog: Frog::new(),
            insects,
            drips: Vec::new(),
        }
    }

    /// The live insect of a variant
    pub fn insect(&self, kind: InsectKind) -> &Insect {
        &self.insects[kind as usize]
    }

    /// Reset per-round values; used on round end and on abandon
    pub fn reset_round(&mut self) {
        self.score = 0;
        self.timer = ROUND_SECONDS;
        self.drips.clear();
        self.frog.reset_tongue();
    }
}
