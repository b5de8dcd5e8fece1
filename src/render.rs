//! Draw-call orchestration
//!
//! The simulation never draws. [`draw_frame`] walks the current screen and
//! issues calls on an abstract [`Renderer`] in a fixed order: background,
//! insects, frog and tongue, overlay text.

use glam::Vec2;

use crate::consts::*;
use crate::highscores::{MAX_BOARD_ENTRIES, ScoreBoard};
use crate::sim::{GameState, Screen};

/// An rgb color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TITLE_BACKGROUND: Color = Color::rgb(0, 250, 200);
    pub const MENU_BACKGROUND: Color = Color::rgb(0, 255, 200);
    pub const SKY: Color = Color::rgb(135, 206, 235);
    pub const FROG_BODY: Color = Color::rgb(0, 255, 0);
    pub const TONGUE: Color = Color::rgb(255, 0, 0);
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

/// Primitive drawing surface supplied by the shell
pub trait Renderer {
    /// Paint the full-frame background
    fn clear(&mut self, background: Color);
    fn circle(&mut self, center: Vec2, diameter: f32, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
    fn text(&mut self, s: &str, pos: Vec2, size: f32, color: Color);
}

/// Issue one frame's draw calls for the current screen
pub fn draw_frame(state: &GameState, board: &ScoreBoard, r: &mut dyn Renderer) {
    match state.screen {
        Screen::Title => draw_title(r),
        Screen::Instructions => draw_instructions(r),
        Screen::Playing => draw_playing(state, r),
        Screen::Scoreboard => draw_scoreboard(board, r),
    }
}

fn draw_title(r: &mut dyn Renderer) {
    let cx = FIELD_WIDTH / 2.0;
    let cy = FIELD_HEIGHT / 2.0;
    r.clear(Color::TITLE_BACKGROUND);
    r.text("Frog Snap", Vec2::new(cx, cy - 100.0), 50.0, Color::BLACK);
    r.text("Press ENTER to start", Vec2::new(cx, cy), 30.0, Color::BLACK);
    r.text(
        "Press SHIFT to see the scores",
        Vec2::new(cx, cy + 100.0),
        30.0,
        Color::BLACK,
    );
}

fn draw_instructions(r: &mut dyn Renderer) {
    let cx = FIELD_WIDTH / 2.0;
    let cy = FIELD_HEIGHT / 2.0;
    r.clear(Color::MENU_BACKGROUND);
    r.text("Instructions", Vec2::new(cx, cy - 200.0), 50.0, Color::BLACK);
    r.text(
        "Move the frog left and right",
        Vec2::new(cx, cy - 100.0),
        30.0,
        Color::BLACK,
    );
    r.text(
        "Launch your tongue to catch insects",
        Vec2::new(cx, cy - 50.0),
        30.0,
        Color::BLACK,
    );
    r.text(
        "Some insects are worth more than others",
        Vec2::new(cx, cy),
        30.0,
        Color::BLACK,
    );
    r.text("Press ENTER to play", Vec2::new(cx, cy + 50.0), 30.0, Color::BLACK);
}

fn draw_playing(state: &GameState, r: &mut dyn Renderer) {
    r.clear(Color::SKY);

    for insect in &state.insects {
        r.circle(insect.pos, insect.kind.size(), insect.kind.color().into());
    }

    let frog = &state.frog;
    let tongue = &frog.tongue;
    r.circle(tongue.pos, tongue.size, Color::TONGUE);
    r.line(tongue.pos, frog.pos, tongue.size, Color::TONGUE);
    r.circle(frog.pos, frog.size, Color::FROG_BODY);

    r.text(
        &format!("POINTS: {}", state.score),
        Vec2::new(30.0, 70.0),
        40.0,
        Color::BLACK,
    );
    r.text(
        &format!("TIME LEFT: {}", state.timer),
        Vec2::new(700.0, 70.0),
        40.0,
        Color::BLACK,
    );
}

fn draw_scoreboard(board: &ScoreBoard, r: &mut dyn Renderer) {
    let cx = FIELD_WIDTH / 2.0;
    let cy = FIELD_HEIGHT / 2.0;
    r.clear(Color::MENU_BACKGROUND);
    r.text("Scores", Vec2::new(cx, cy - 200.0), 50.0, Color::BLACK);
    for (i, score) in board.top_scores(MAX_BOARD_ENTRIES).iter().enumerate() {
        r.text(
            &format!("{}. {}", i + 1, score),
            Vec2::new(cx, cy - 100.0 + i as f32 * 40.0),
            30.0,
            Color::BLACK,
        );
    }
    r.text(
        "Press ESCAPE to go back",
        Vec2::new(cx, cy + 200.0),
        20.0,
        Color::BLACK,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<String>,
    }

    impl Renderer for RecordingRenderer {
        fn clear(&mut self, _background: Color) {
            self.calls.push("clear".into());
        }
        fn circle(&mut self, _center: Vec2, _diameter: f32, _color: Color) {
            self.calls.push("circle".into());
        }
        fn line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _color: Color) {
            self.calls.push("line".into());
        }
        fn text(&mut self, s: &str, _pos: Vec2, _size: f32, _color: Color) {
            self.calls.push(format!("text:{s}"));
        }
    }

    #[test]
    fn test_playing_draw_order() {
        let mut state = GameState::new(1);
        state.screen = Screen::Playing;
        let board = ScoreBoard::new();
        let mut r = RecordingRenderer::default();

        draw_frame(&state, &board, &mut r);

        // Background, five insects, tongue tip + tongue line + body, overlay
        let expected = [
            "clear", "circle", "circle", "circle", "circle", "circle", "circle", "line", "circle",
            "text:POINTS: 0", "text:TIME LEFT: 90",
        ];
        assert_eq!(r.calls, expected);
    }

    #[test]
    fn test_scoreboard_shows_at_most_ten() {
        let mut state = GameState::new(1);
        state.screen = Screen::Scoreboard;
        let mut board = ScoreBoard::new();
        for score in 0..15 {
            board.record_score(score);
        }
        let mut r = RecordingRenderer::default();

        draw_frame(&state, &board, &mut r);

        let rows = r
            .calls
            .iter()
            .filter(|c| c.starts_with("text:") && c.contains(". "))
            .count();
        assert_eq!(rows, 10);
        // Sorted descending: the first row is the best score
        assert!(r.calls.contains(&"text:1. 14".to_string()));
    }

    #[test]
    fn test_title_draws_prompts() {
        let state = GameState::new(1);
        let board = ScoreBoard::new();
        let mut r = RecordingRenderer::default();

        draw_frame(&state, &board, &mut r);

        assert_eq!(r.calls[0], "clear");
        assert!(r.calls.iter().any(|c| c == "text:Press ENTER to start"));
    }
}
