//! Ball integration
//!
//! A tick runs `speed` sub-steps of one unit each, so `speed` is both the
//! step count and the displacement per tick. Paddle hits raise it by one
//! for the rest of the rally.

use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::{contact_x, deflect, swept_paddle_hit, wall_contact};
use super::events::{Cue, GameEvent};
use super::state::{RoundState, Side};
use crate::consts::*;

/// Collisions resolved during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub paddle_hits: u32,
    pub wall_bounces: u32,
}

/// Advance the ball through one tick and age the impact ripples
pub fn integrate(round: &mut RoundState, rng: &mut Pcg32, events: &mut Vec<GameEvent>) -> Contacts {
    let mut contacts = Contacts::default();
    // Hits mid-tick only speed up later ticks
    let steps = round.ball.speed;
    for _ in 0..steps {
        sub_step(round, rng, events, &mut contacts);
    }
    round.impacts.tick();
    contacts
}

fn sub_step(
    round: &mut RoundState,
    rng: &mut Pcg32,
    events: &mut Vec<GameEvent>,
    contacts: &mut Contacts,
) {
    let ball = &mut round.ball;
    ball.prev_x = ball.pos.x;
    ball.pos += ball.dir;

    for side in Side::BOTH {
        if let Some(diff_y) = swept_paddle_hit(&round.ball, round.paddle(side), side) {
            paddle_hit(round, side, diff_y, rng, events);
            contacts.paddle_hits += 1;
        }
    }

    if let Some(wall) = wall_contact(round.ball.pos.y) {
        let ball = &mut round.ball;
        ball.dir.y = wall.inward_dy(ball.dir.y);
        ball.pos.y = wall.rest_y();
        round.impacts.add(ball.pos.x, ball.pos.y);
        events.push(GameEvent::cue(Cue::Bounce, 5));
        events.push(GameEvent::cue(Cue::BounceSynth, 1));
        contacts.wall_bounces += 1;
    }
}

fn paddle_hit(
    round: &mut RoundState,
    side: Side,
    diff_y: f32,
    rng: &mut Pcg32,
    events: &mut Vec<GameEvent>,
) {
    let face_x = contact_x(round.paddle(side), side);
    let ball = &mut round.ball;
    ball.dir = deflect(ball.dir, diff_y);
    ball.pos.x = face_x;
    ball.speed += 1;
    let speed = ball.speed;
    let ripple_x = ball.pos.x - ball.dir.x * IMPACT_BACK_OFFSET;
    let ripple_y = ball.pos.y;

    round.ai_offset = rng.random_range(AI_OFFSET_MIN..=AI_OFFSET_MAX);
    round.paddle_mut(side).timer = FLASH_TICKS;
    round.impacts.add(ripple_x, ripple_y);

    log::trace!("{:?} paddle hit, diff_y {:.1}, speed now {}", side, diff_y, speed);
    events.push(GameEvent::cue(Cue::Hit, 5));
    events.push(GameEvent::cue(Cue::for_hit_speed(speed), 1));
}
