//! Paddle control resolution
//!
//! Humans move at a fixed speed while a key is held. The AI chases a target
//! that drifts toward the field centre when the ball is far away, offset by
//! a random aim bias so it stays beatable.

use super::input::{Control, InputState};
use super::state::{Ball, PaddleControl, RoundState, Side};
use crate::consts::*;

/// Per-tick delta for a human paddle; up wins when both are held
pub fn human_delta(up: bool, down: bool) -> f32 {
    if up {
        -PLAYER_SPEED
    } else if down {
        PLAYER_SPEED
    } else {
        0.0
    }
}

/// Per-tick delta for an AI paddle at (`paddle_x`, `paddle_y`)
pub fn ai_delta(ball: &Ball, paddle_x: f32, paddle_y: f32, aim_offset: i32) -> f32 {
    let xdist = (ball.pos.x - paddle_x).abs();
    let centre = FIELD_HEIGHT / 2.0;
    let tracked = ball.pos.y + aim_offset as f32;
    let w = (xdist / (FIELD_WIDTH / 2.0)).clamp(0.0, 1.0);
    let target = w * centre + (1.0 - w) * tracked;
    (target - paddle_y).clamp(-MAX_AI_SPEED, MAX_AI_SPEED)
}

/// Keep a paddle centre inside the playfield
pub fn clamp_paddle_y(y: f32) -> f32 {
    y.clamp(PADDLE_MIN_Y, PADDLE_MAX_Y)
}

/// Resolve the delta for one side this tick
pub fn paddle_delta(round: &RoundState, side: Side, input: &InputState) -> f32 {
    let paddle = round.paddle(side);
    match paddle.control {
        PaddleControl::Human => {
            let (up, down) = match side {
                Side::Left => (Control::P1Up, Control::P1Down),
                Side::Right => (Control::P2Up, Control::P2Down),
            };
            human_delta(input.held(up), input.held(down))
        }
        PaddleControl::Ai => ai_delta(&round.ball, paddle.x, paddle.y, round.ai_offset),
    }
}

/// Move both paddles for this tick
pub fn move_paddles(round: &mut RoundState, input: &InputState) {
    let deltas = Side::BOTH.map(|side| paddle_delta(round, side, input));
    for (paddle, delta) in round.paddles.iter_mut().zip(deltas) {
        paddle.y = clamp_paddle_y(paddle.y + delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PlayerMode;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32) -> Ball {
        let mut ball = Ball::served_toward(Side::Right);
        ball.pos = Vec2::new(x, y);
        ball
    }

    #[test]
    fn test_human_delta() {
        assert_eq!(human_delta(false, false), 0.0);
        assert_eq!(human_delta(true, false), -6.0);
        assert_eq!(human_delta(false, true), 6.0);
        assert_eq!(human_delta(true, true), -6.0);
    }

    #[test]
    fn test_ai_far_ball_pulls_to_centre() {
        // Ball on the far side: weight saturates at 1, target is the centre line
        let ball = ball_at(0.0, 50.0);
        let delta = ai_delta(&ball, RIGHT_PADDLE_X, 238.0, 10);
        assert_eq!(delta, 2.0);
    }

    #[test]
    fn test_ai_near_ball_tracks_with_offset() {
        let ball = ball_at(RIGHT_PADDLE_X, 300.0);
        let delta = ai_delta(&ball, RIGHT_PADDLE_X, 299.0, 3);
        // w = 0, target = 303
        assert_eq!(delta, 4.0);
    }

    #[test]
    fn test_ai_speed_capped() {
        let ball = ball_at(RIGHT_PADDLE_X, 470.0);
        assert_eq!(ai_delta(&ball, RIGHT_PADDLE_X, 80.0, 0), MAX_AI_SPEED);
        let ball = ball_at(RIGHT_PADDLE_X, 0.0);
        assert_eq!(ai_delta(&ball, RIGHT_PADDLE_X, 400.0, 0), -MAX_AI_SPEED);
    }

    #[test]
    fn test_ai_blend_halfway() {
        // xdist 200 -> w = 0.5, target = 0.5*240 + 0.5*100 = 170
        let ball = ball_at(RIGHT_PADDLE_X - 200.0, 100.0);
        assert_eq!(ai_delta(&ball, RIGHT_PADDLE_X, 172.0, 0), -2.0);
    }

    #[test]
    fn test_move_paddles_clamps() {
        let mut round = RoundState::new(PlayerMode::TwoPlayer, false);
        round.paddles[0].y = 82.0;
        round.paddles[1].y = 398.0;
        let mut input = InputState::new();
        input.handle_key("a", true);
        input.handle_key("m", true);
        move_paddles(&mut round, &input);
        assert_eq!(round.paddles[0].y, PADDLE_MIN_Y);
        assert_eq!(round.paddles[1].y, PADDLE_MAX_Y);
    }

    #[test]
    fn test_p1_keys_do_not_drive_ai() {
        let mut round = RoundState::new(PlayerMode::OnePlayer, false);
        round.ball.pos = Vec2::new(400.0, 240.0);
        let mut input = InputState::new();
        input.handle_key("ArrowDown", true);
        input.handle_key("m", true);
        move_paddles(&mut round, &input);
        assert_eq!(round.paddles[0].y, 246.0);
        // AI paddle already on target
        assert!((round.paddles[1].y - 240.0).abs() < 1e-3);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Paddles stay inside [80, 400] whatever the inputs
            #[test]
            fn prop_paddles_stay_in_bounds(
                start in -1000.0f32..1000.0,
                ball_x in -50.0f32..850.0,
                ball_y in -50.0f32..530.0,
                offset in -10i32..=10,
                ups in proptest::collection::vec(any::<(bool, bool)>(), 1..50),
            ) {
                let mut round = RoundState::new(PlayerMode::OnePlayer, false);
                round.paddles[0].y = clamp_paddle_y(start);
                round.ball.pos = Vec2::new(ball_x, ball_y);
                round.ai_offset = offset;
                for (up, down) in ups {
                    let mut input = InputState::new();
                    if up { input.handle_key("a", true); }
                    if down { input.handle_key("z", true); }
                    move_paddles(&mut round, &input);
                    for paddle in &round.paddles {
                        prop_assert!(paddle.y >= PADDLE_MIN_Y && paddle.y <= PADDLE_MAX_Y);
                    }
                }
            }

            #[test]
            fn prop_ai_delta_bounded(
                bx in -100.0f32..900.0,
                by in -100.0f32..600.0,
                py in 80.0f32..400.0,
                offset in -10i32..=10,
            ) {
                let ball = ball_at(bx, by);
                let d = ai_delta(&ball, RIGHT_PADDLE_X, py, offset);
                prop_assert!(d.abs() <= MAX_AI_SPEED);
            }
        }
    }
}
