//! Scoring and the serve delay
//!
//! Scoring happens in two phases. When the ball leaves the field the scorer
//! is credited and the loser's timer is set to the grace window; the ball
//! keeps flying off-field. Once the loser's timer counts down to exactly
//! zero the ball is served again toward the loser.

use super::events::{Cue, GameEvent, HudUpdate};
use super::state::{RoundState, Side};
use crate::consts::{GRACE_TICKS, SCORE_TARGET};

/// What the score check did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOutcome {
    /// Ball in play (or off-field with nothing to do yet)
    Idle,
    /// `scorer` was credited a point
    Scored { scorer: Side },
    /// Ball re-served toward `loser`
    Served { loser: Side },
}

/// Count both paddle timers down by one tick
pub fn tick_timers(round: &mut RoundState) {
    for paddle in &mut round.paddles {
        paddle.timer = paddle.timer.saturating_sub(1);
    }
}

/// Check for an exit and advance the score/serve protocol
pub fn evaluate(round: &mut RoundState, events: &mut Vec<GameEvent>) -> ScoreOutcome {
    let Some(exit) = round.ball.exit_side() else {
        return ScoreOutcome::Idle;
    };
    let loser = exit;
    let scorer = exit.opposite();

    let timer = round.paddle(loser).timer;
    if timer < 0 {
        round.paddle_mut(scorer).score += 1;
        round.paddle_mut(loser).timer = GRACE_TICKS;
        let (left, right) = round.scores();
        log::debug!("{:?} scores, {}-{}", scorer, left, right);
        events.push(GameEvent::Hud(HudUpdate::Score { left, right }));
        events.push(GameEvent::cue(Cue::ScoreGoal, 1));
        ScoreOutcome::Scored { scorer }
    } else if timer == 0 {
        round.ball.reset_toward(loser);
        log::debug!("Serving toward {:?}", loser);
        ScoreOutcome::Served { loser }
    } else {
        ScoreOutcome::Idle
    }
}

/// Side that reached the target, if any
pub fn winner(round: &RoundState) -> Option<Side> {
    Side::BOTH
        .into_iter()
        .find(|side| round.paddle(*side).score >= SCORE_TARGET)
}
