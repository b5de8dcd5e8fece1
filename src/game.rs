//! Game controller
//!
//! Owns the full session: simulation state, input, settings, the score
//! board, and the store. The shell feeds it wall-clock frame time and
//! 1-second scheduler ticks; everything inside runs on the fixed timestep.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::highscores::ScoreBoard;
use crate::platform::store::ScoreStore;
use crate::render::{Renderer, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameState, TickInput, tick, tick_second};

/// Single owner of all mutable game state
pub struct Game {
    state: GameState,
    input: TickInput,
    settings: Settings,
    scores: ScoreBoard,
    store: Box<dyn ScoreStore>,
    accumulator: f32,
}

impl Game {
    pub fn new(seed: u64, settings: Settings, store: Box<dyn ScoreStore>) -> Self {
        let scores = ScoreBoard::load(&*store);
        log::info!("Session started with seed {seed}");
        Self {
            state: GameState::new(seed),
            input: TickInput::default(),
            settings,
            scores,
            store,
            accumulator: 0.0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Shell-facing input; one-shot presses are cleared once consumed
    pub fn input_mut(&mut self) -> &mut TickInput {
        &mut self.input
    }

    /// Run simulation ticks for `elapsed` seconds of real time
    pub fn frame(&mut self, elapsed: f32) {
        let elapsed = elapsed.min(0.1);
        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, &self.settings);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.launch = false;
            self.input.start = false;
            self.input.confirm = false;
            self.input.cancel = false;
            self.input.secondary = false;
        }
    }

    /// Wall-clock countdown tick; persists the score when a round ends
    pub fn second(&mut self) {
        if let Some(end) = tick_second(&mut self.state) {
            self.scores.record_score(end.score);
            self.scores.save(&mut *self.store);
        }
    }

    /// Issue the current frame's draw calls
    pub fn render(&self, renderer: &mut dyn Renderer) {
        draw_frame(&self.state, &self.scores, renderer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::SCORES_KEY;
    use crate::platform::store::MemoryStore;
    use crate::sim::Screen;

    fn game() -> Game {
        Game::new(7, Settings::default(), Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_frame_runs_fixed_steps() {
        let mut g = game();
        g.state.screen = Screen::Playing;
        for _ in 0..3 {
            g.frame(SIM_DT);
        }
        assert_eq!(g.state.time_ticks, 3);
    }

    #[test]
    fn test_frame_caps_substeps() {
        let mut g = game();
        g.state.screen = Screen::Playing;
        // A huge frame must not run away
        g.frame(10.0);
        assert!(g.state.time_ticks <= MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_one_shot_inputs_clear_after_tick() {
        let mut g = game();
        g.input_mut().start = true;
        g.frame(SIM_DT);
        assert_eq!(g.state.screen, Screen::Instructions);
        assert!(!g.input.start);

        // Held inputs survive
        g.state.screen = Screen::Playing;
        g.input_mut().move_right = true;
        g.frame(SIM_DT);
        assert!(g.input.move_right);
    }

    #[test]
    fn test_round_end_is_persisted() {
        let mut g = game();
        g.state.screen = Screen::Playing;
        g.state.score = 12;
        g.state.timer = 1;

        g.second();

        assert_eq!(g.state.screen, Screen::Scoreboard);
        assert_eq!(g.scores.top_scores(10), vec![12]);
        assert_eq!(g.store.get(SCORES_KEY), Some(vec![12]));
    }

    #[test]
    fn test_next_session_sees_stored_scores() {
        let mut store = MemoryStore::new();
        store.set(SCORES_KEY, &[8, 3]);
        let g = Game::new(1, Settings::default(), Box::new(store));
        assert_eq!(g.scores().top_scores(10), vec![8, 3]);
    }
}
