//! Per-tick scene description

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vertex::{Color, colors};
use crate::consts::*;
use crate::sim::{Game, Side};

/// Centre-line dash size and spacing
const DASH_SIZE: Vec2 = Vec2::new(4.0, 10.0);
const DASH_PITCH: usize = 20;

/// One drawing primitive, in field units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled axis-aligned rectangle
    Rect { center: Vec2, size: Vec2, color: Color },
    /// Filled circle
    Disc { center: Vec2, radius: f32, color: Color },
    /// Circle outline
    RingOutline { center: Vec2, radius: f32, color: Color },
}

/// Everything to draw for one tick, back to front
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub clear: Color,
    pub commands: Vec<DrawCommand>,
}

/// Ripple radius for an impact of the given age
pub fn ripple_radius(age: u32) -> f32 {
    2.0 + age as f32 * 1.5
}

/// Ripple alpha for an impact of the given age
pub fn ripple_alpha(age: u32) -> f32 {
    (1.0 - age as f32 * 0.1).max(0.0)
}

/// Paddle colour: flashes while its timer runs and the ball is out
pub fn paddle_color(game: &Game, side: Side) -> Color {
    let round = &game.round;
    if round.paddle(side).timer > 0 && round.ball.is_off_field() {
        match side {
            Side::Left => colors::RED,
            Side::Right => colors::BLUE,
        }
    } else {
        colors::WHITE
    }
}

/// Build the scene for the current state
pub fn compose(game: &Game) -> Scene {
    let round = &game.round;
    let mut commands = Vec::with_capacity(FIELD_HEIGHT as usize / DASH_PITCH + round.impacts.len() + 3);

    for y in (0..FIELD_HEIGHT as usize).step_by(DASH_PITCH) {
        commands.push(DrawCommand::Rect {
            center: Vec2::new(FIELD_WIDTH / 2.0, y as f32 + DASH_SIZE.y / 2.0),
            size: DASH_SIZE,
            color: colors::WHITE,
        });
    }

    for impact in round.impacts.iter() {
        let mut color = colors::WHITE;
        color[3] = ripple_alpha(impact.age);
        commands.push(DrawCommand::RingOutline {
            center: impact.pos,
            radius: ripple_radius(impact.age),
            color,
        });
    }

    for side in Side::BOTH {
        let paddle = round.paddle(side);
        commands.push(DrawCommand::Rect {
            center: Vec2::new(paddle.x, paddle.y),
            size: Vec2::new(PADDLE_HALF_WIDTH * 2.0, PADDLE_HALF_HEIGHT * 2.0),
            color: paddle_color(game, side),
        });
    }

    commands.push(DrawCommand::Disc {
        center: round.ball.pos,
        radius: BALL_RADIUS,
        color: colors::WHITE,
    });

    Scene {
        clear: colors::FIELD_GREEN,
        commands,
    }
}
