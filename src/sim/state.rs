//! Game state and core simulation types
//!
//! Everything a round needs lives in `RoundState`; it is reinitialized in
//! place at the start of every match.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::impact::ImpactTracker;
use crate::consts::*;

/// Top-level phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Mode selection, waiting for confirm
    Menu,
    /// Active gameplay
    Play,
    /// Match decided, waiting for confirm to return to the menu
    GameOver,
}

/// Number of human players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerMode {
    #[default]
    OnePlayer,
    TwoPlayer,
}

impl PlayerMode {
    /// Label shown by the HUD
    pub fn label(&self) -> &'static str {
        match self {
            PlayerMode::OnePlayer => "1 Player",
            PlayerMode::TwoPlayer => "2 Players",
        }
    }
}

/// Which end of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal serve direction toward this side
    pub fn dx(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Who drives a paddle for the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleControl {
    #[default]
    Human,
    Ai,
}

/// A player's bat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Centre x (fixed per side)
    pub x: f32,
    /// Centre y
    pub y: f32,
    pub score: u32,
    /// Counts down every tick; doubles as hit flash and grace window after conceding
    pub timer: i32,
    pub control: PaddleControl,
}

impl Paddle {
    pub fn new(side: Side, control: PaddleControl) -> Self {
        let x = match side {
            Side::Left => LEFT_PADDLE_X,
            Side::Right => RIGHT_PADDLE_X,
        };
        Self {
            x,
            y: FIELD_HEIGHT / 2.0,
            score: 0,
            timer: 0,
            control,
        }
    }

    pub fn is_ai(&self) -> bool {
        self.control == PaddleControl::Ai
    }

    /// Front face x coordinate facing the field
    pub fn face_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.x + PADDLE_HALF_WIDTH,
            Side::Right => self.x - PADDLE_HALF_WIDTH,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Unit travel direction
    pub dir: Vec2,
    /// Sub-steps per tick; also displacement per tick
    pub speed: u32,
    /// X position before the latest sub-step (for swept tests)
    pub prev_x: f32,
}

impl Ball {
    /// A ball sitting on the centre spot heading toward `loser`
    pub fn served_toward(loser: Side) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            dir: Vec2::ZERO,
            speed: SERVE_SPEED,
            prev_x: 0.0,
        };
        ball.reset_toward(loser);
        ball
    }

    pub fn reset_toward(&mut self, loser: Side) {
        self.pos = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);
        self.dir = Vec2::new(loser.dx(), 0.0);
        self.speed = SERVE_SPEED;
        self.prev_x = self.pos.x;
    }

    /// Centre outside the field horizontally (drives the flash colours)
    pub fn is_off_field(&self) -> bool {
        self.pos.x < 0.0 || self.pos.x > FIELD_WIDTH
    }

    /// Side the ball has fully left through, if any
    pub fn exit_side(&self) -> Option<Side> {
        if self.pos.x + BALL_RADIUS < 0.0 {
            Some(Side::Left)
        } else if self.pos.x - BALL_RADIUS > FIELD_WIDTH {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Entities of one match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    /// Indexed by `Side::index()`
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    pub impacts: ImpactTracker,
    pub mode: PlayerMode,
    /// Bias added to the ball y the AI tracks, re-rolled on every paddle hit
    pub ai_offset: i32,
}

impl RoundState {
    pub fn new(mode: PlayerMode, attract: bool) -> Self {
        let mut round = Self {
            paddles: [
                Paddle::new(Side::Left, PaddleControl::Human),
                Paddle::new(Side::Right, PaddleControl::Human),
            ],
            ball: Ball::served_toward(Side::Left),
            impacts: ImpactTracker::new(),
            mode,
            ai_offset: 0,
        };
        round.reset(mode, attract);
        round
    }

    /// Reinitialize in place for a fresh match
    pub fn reset(&mut self, mode: PlayerMode, attract: bool) {
        let left = if attract {
            PaddleControl::Ai
        } else {
            PaddleControl::Human
        };
        let right = match mode {
            PlayerMode::OnePlayer => PaddleControl::Ai,
            PlayerMode::TwoPlayer => PaddleControl::Human,
        };
        self.paddles = [Paddle::new(Side::Left, left), Paddle::new(Side::Right, right)];
        self.ball.reset_toward(Side::Left);
        self.impacts.clear();
        self.mode = mode;
        self.ai_offset = 0;
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.paddles[0].score, self.paddles[1].score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_start_layout() {
        let round = RoundState::new(PlayerMode::OnePlayer, false);
        assert_eq!(round.ball.pos, Vec2::new(400.0, 240.0));
        assert_eq!(round.ball.dir, Vec2::new(-1.0, 0.0));
        assert_eq!(round.ball.speed, 5);
        assert_eq!(round.scores(), (0, 0));
        assert_eq!(round.paddles[0].x, 40.0);
        assert_eq!(round.paddles[1].x, 760.0);
        assert!(!round.paddles[0].is_ai());
        assert!(round.paddles[1].is_ai());
    }

    #[test]
    fn test_two_player_has_no_ai() {
        let round = RoundState::new(PlayerMode::TwoPlayer, false);
        assert!(round.paddles.iter().all(|p| !p.is_ai()));
    }

    #[test]
    fn test_attract_drives_left_paddle() {
        let round = RoundState::new(PlayerMode::OnePlayer, true);
        assert!(round.paddles[0].is_ai());
        assert!(round.paddles[1].is_ai());
    }

    #[test]
    fn test_reset_clears_previous_match() {
        let mut round = RoundState::new(PlayerMode::OnePlayer, false);
        round.paddles[0].score = 7;
        round.paddles[1].timer = 15;
        round.ball.speed = 14;
        round.ai_offset = -4;
        round.impacts.add(10.0, 10.0);

        round.reset(PlayerMode::TwoPlayer, false);
        assert_eq!(round.scores(), (0, 0));
        assert_eq!(round.paddles[1].timer, 0);
        assert_eq!(round.ball.speed, SERVE_SPEED);
        assert_eq!(round.ai_offset, 0);
        assert!(round.impacts.is_empty());
        assert_eq!(round.mode, PlayerMode::TwoPlayer);
    }

    #[test]
    fn test_exit_side_needs_full_radius() {
        let mut ball = Ball::served_toward(Side::Left);
        ball.pos.x = -6.9;
        assert_eq!(ball.exit_side(), None);
        assert!(ball.is_off_field());
        ball.pos.x = -7.1;
        assert_eq!(ball.exit_side(), Some(Side::Left));
        ball.pos.x = 807.5;
        assert_eq!(ball.exit_side(), Some(Side::Right));
    }
}
