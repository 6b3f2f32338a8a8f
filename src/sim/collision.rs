//! Collision detection and response
//!
//! The ball moves one unit per sub-step, so paddle tests are swept against
//! the paddle's front plane: a hit needs the leading edge to cross the plane
//! during this sub-step, not merely overlap it.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::consts::*;
use crate::normalised;

/// Horizontal boundary the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
}

impl Wall {
    /// Ball centre y when resting against this wall
    pub fn rest_y(self) -> f32 {
        match self {
            Wall::Top => BALL_RADIUS,
            Wall::Bottom => FIELD_HEIGHT - BALL_RADIUS,
        }
    }

    /// Vertical direction component pointing back into the field
    pub fn inward_dy(self, dy: f32) -> f32 {
        match self {
            Wall::Top => dy.abs(),
            Wall::Bottom => -dy.abs(),
        }
    }
}

/// Vertical offset of the ball from the paddle centre if the ball crossed
/// the paddle's front plane this sub-step and is within its height
pub fn swept_paddle_hit(ball: &Ball, paddle: &Paddle, side: Side) -> Option<f32> {
    let face = paddle.face_x(side);
    let crossed = match side {
        Side::Left => ball.pos.x - BALL_RADIUS <= face && ball.prev_x - BALL_RADIUS > face,
        Side::Right => ball.pos.x + BALL_RADIUS >= face && ball.prev_x + BALL_RADIUS < face,
    };
    if !crossed {
        return None;
    }
    let diff_y = ball.pos.y - paddle.y;
    (diff_y > -PADDLE_HALF_HEIGHT && diff_y < PADDLE_HALF_HEIGHT).then_some(diff_y)
}

/// New unit direction after a paddle hit `diff_y` away from its centre
pub fn deflect(dir: Vec2, diff_y: f32) -> Vec2 {
    let dy = (dir.y + diff_y / SPIN_DIVISOR).clamp(-1.0, 1.0);
    normalised(Vec2::new(-dir.x, dy))
}

/// Ball centre x flush against the paddle face
pub fn contact_x(paddle: &Paddle, side: Side) -> f32 {
    match side {
        Side::Left => paddle.x + PADDLE_HALF_WIDTH + BALL_RADIUS,
        Side::Right => paddle.x - PADDLE_HALF_WIDTH - BALL_RADIUS,
    }
}

/// Wall the ball is touching at height `y`, top checked first
pub fn wall_contact(y: f32) -> Option<Wall> {
    if y - BALL_RADIUS <= 0.0 {
        Some(Wall::Top)
    } else if y + BALL_RADIUS >= FIELD_HEIGHT {
        Some(Wall::Bottom)
    } else {
        None
    }
}
