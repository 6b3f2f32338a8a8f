//! Audio collaborator
//!
//! The engine only names cues. Sample choice, mixing and asset loading are
//! the sink's business, and a broken sink must never affect the game.

use std::collections::VecDeque;

use crate::settings::Settings;
use crate::sim::Cue;

/// Fire-and-forget sound output
pub trait AudioSink {
    /// Play `cue` `repeat` times
    fn play(&mut self, cue: Cue, repeat: u32);
    /// Resume output after the first user gesture
    fn unlock(&mut self);
    /// Start looping background music
    fn start_music(&mut self);
}

/// Drops every cue
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: Cue, _repeat: u32) {}
    fn unlock(&mut self) {}
    fn start_music(&mut self) {}
}

/// Recent cues kept by `LogAudio`
pub const PLAYED_HISTORY: usize = 64;

/// Logs cues instead of playing them (headless runs)
#[derive(Debug)]
pub struct LogAudio {
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    music_enabled: bool,
    muted: bool,
    unlocked: bool,
    /// Most recent audible cues with their repeat counts, oldest first
    pub played: VecDeque<(Cue, u32)>,
    /// Audible cues over the sink's lifetime
    pub played_total: u64,
}

impl Default for LogAudio {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl LogAudio {
    pub fn new(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            music_enabled: settings.music,
            muted: settings.muted,
            unlocked: false,
            played: VecDeque::with_capacity(PLAYED_HISTORY),
            played_total: 0,
        }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: Cue, repeat: u32) {
        // Browsers stay silent until a user gesture unlocks the context
        if !self.unlocked {
            return;
        }
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        log::debug!("cue {} x{} @ {:.2}", cue.as_str(), repeat, vol);
        if self.played.len() == PLAYED_HISTORY {
            self.played.pop_front();
        }
        self.played.push_back((cue, repeat));
        self.played_total += 1;
    }

    fn unlock(&mut self) {
        self.unlocked = true;
    }

    fn start_music(&mut self) {
        if !self.music_enabled || self.muted {
            return;
        }
        log::info!("music on @ {:.2}", self.master_volume * self.music_volume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_until_unlocked() {
        let mut audio = LogAudio::default();
        audio.play(Cue::Hit, 5);
        assert!(audio.played.is_empty());
        audio.unlock();
        audio.play(Cue::Hit, 5);
        assert_eq!(audio.played, vec![(Cue::Hit, 5)]);
        assert_eq!(audio.played_total, 1);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut audio = LogAudio::default();
        audio.unlock();
        for _ in 0..PLAYED_HISTORY {
            audio.play(Cue::Bounce, 5);
        }
        audio.play(Cue::ScoreGoal, 1);
        assert_eq!(audio.played.len(), PLAYED_HISTORY);
        assert_eq!(audio.played.back(), Some(&(Cue::ScoreGoal, 1)));
        assert_eq!(audio.played_total, PLAYED_HISTORY as u64 + 1);
    }

    #[test]
    fn test_muted_drops_cues() {
        let mut audio = LogAudio::default();
        audio.unlock();
        audio.set_muted(true);
        audio.play(Cue::Bounce, 5);
        assert!(audio.played.is_empty());
    }

    #[test]
    fn test_zero_volume_drops_cues() {
        let settings = Settings {
            sfx_volume: 0.0,
            ..Settings::default()
        };
        let mut audio = LogAudio::new(&settings);
        audio.unlock();
        audio.play(Cue::ScoreGoal, 1);
        assert!(audio.played.is_empty());
    }
}
