//! Outbound events produced by the simulation
//!
//! The engine never calls its collaborators directly. Every tick pushes
//! events into an outbox that the host drains and dispatches afterwards.

use serde::{Deserialize, Serialize};

use super::state::PlayerMode;
use crate::consts::{HIT_FAST_MAX, HIT_MEDIUM_MAX, HIT_SLOW_MAX};

/// Named sound cues understood by the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    Hit,
    HitSlow,
    HitMedium,
    HitFast,
    HitVeryfast,
    Bounce,
    BounceSynth,
    ScoreGoal,
    Up,
    Down,
}

impl Cue {
    /// Sample-bank name of the cue
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Hit => "hit",
            Cue::HitSlow => "hit_slow",
            Cue::HitMedium => "hit_medium",
            Cue::HitFast => "hit_fast",
            Cue::HitVeryfast => "hit_veryfast",
            Cue::Bounce => "bounce",
            Cue::BounceSynth => "bounce_synth",
            Cue::ScoreGoal => "score_goal",
            Cue::Up => "up",
            Cue::Down => "down",
        }
    }

    /// Speed-tiered accent for a paddle hit, chosen from the post-hit speed
    pub fn for_hit_speed(speed: u32) -> Self {
        if speed <= HIT_SLOW_MAX {
            Cue::HitSlow
        } else if speed <= HIT_MEDIUM_MAX {
            Cue::HitMedium
        } else if speed <= HIT_FAST_MAX {
            Cue::HitFast
        } else {
            Cue::HitVeryfast
        }
    }
}

/// Text overlay updates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HudUpdate {
    Score { left: u32, right: u32 },
    /// Status prompt; empty clears it
    Message(String),
    Mode(PlayerMode),
    Title(String),
}

/// Everything the simulation asks of the outside world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Fire-and-forget sound, played `repeat` times
    Cue { cue: Cue, repeat: u32 },
    Hud(HudUpdate),
    /// Resume the audio context (first user gesture)
    AudioUnlock,
    /// Start background music; sent once per process
    MusicStart,
}

impl GameEvent {
    pub fn cue(cue: Cue, repeat: u32) -> Self {
        GameEvent::Cue { cue, repeat }
    }

    pub fn message(text: &str) -> Self {
        GameEvent::Hud(HudUpdate::Message(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_speed_tiers() {
        assert_eq!(Cue::for_hit_speed(6), Cue::HitSlow);
        assert_eq!(Cue::for_hit_speed(10), Cue::HitSlow);
        assert_eq!(Cue::for_hit_speed(11), Cue::HitMedium);
        assert_eq!(Cue::for_hit_speed(12), Cue::HitMedium);
        assert_eq!(Cue::for_hit_speed(13), Cue::HitFast);
        assert_eq!(Cue::for_hit_speed(16), Cue::HitFast);
        assert_eq!(Cue::for_hit_speed(17), Cue::HitVeryfast);
    }

    #[test]
    fn test_cue_names_match_serde() {
        let json = serde_json::to_string(&Cue::HitVeryfast).unwrap();
        assert_eq!(json, "\"hit_veryfast\"");
        assert_eq!(Cue::BounceSynth.as_str(), "bounce_synth");
    }
}
