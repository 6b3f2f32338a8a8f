//! Text overlay collaborator
//!
//! Scores, prompts, the mode label and the title live outside the scene.
//! The engine pushes `HudUpdate`s; hosts forward them to a `Hud`.

use crate::renderer::{Color, colors};
use crate::sim::{Game, HudUpdate, PlayerMode, Side};

/// Receiver of text overlay updates
pub trait Hud {
    fn set_score(&mut self, left: u32, right: u32);
    fn set_message(&mut self, text: &str);
    fn set_mode(&mut self, mode: PlayerMode);
    fn set_title(&mut self, title: &str);
    fn set_score_colors(&mut self, left: Color, right: Color);

    /// Route one engine update to the matching setter
    fn apply(&mut self, update: &HudUpdate) {
        match update {
            HudUpdate::Score { left, right } => self.set_score(*left, *right),
            HudUpdate::Message(text) => self.set_message(text),
            HudUpdate::Mode(mode) => self.set_mode(*mode),
            HudUpdate::Title(title) => self.set_title(title),
        }
    }
}

/// Two-digit score text ("07", "10")
pub fn format_score(score: u32) -> String {
    format!("{:02}", score)
}

/// Score digit tint: the scorer's digits flash during the serve delay
pub fn score_tint(game: &Game) -> (Color, Color) {
    let round = &game.round;
    let out = round.ball.is_off_field();
    let left = if round.paddle(Side::Right).timer > 0 && out {
        colors::RED
    } else {
        colors::WHITE
    };
    let right = if round.paddle(Side::Left).timer > 0 && out {
        colors::BLUE
    } else {
        colors::WHITE
    };
    (left, right)
}

/// In-memory HUD holding the displayed text
#[derive(Debug, Clone, Default)]
pub struct HudText {
    pub score_left: String,
    pub score_right: String,
    pub message: String,
    pub mode: String,
    pub title: String,
    pub score_colors: (Color, Color),
}

impl HudText {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Hud for HudText {
    fn set_score(&mut self, left: u32, right: u32) {
        self.score_left = format_score(left);
        self.score_right = format_score(right);
    }

    fn set_message(&mut self, text: &str) {
        self.message = text.to_string();
    }

    fn set_mode(&mut self, mode: PlayerMode) {
        self.mode = mode.label().to_string();
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_score_colors(&mut self, left: Color, right: Color) {
        self.score_colors = (left, right);
    }
}
