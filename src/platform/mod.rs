//! Platform abstraction layer
//!
//! `Host` owns the game context and its collaborators and runs one frame
//! per call from the platform's fixed-rate callback: tick the simulation,
//! forward the emitted events, then draw. Collaborators only ever see the
//! state read-only.

use crate::audio::AudioSink;
use crate::hud::{Hud, score_tint};
use crate::renderer::{Renderer, compose};
use crate::settings::Settings;
use crate::sim::{Game, GameEvent, InputState, tick};

/// Game plus the collaborators it drives
pub struct Host<R: Renderer, H: Hud, A: AudioSink> {
    pub game: Game,
    pub input: InputState,
    pub renderer: R,
    pub hud: H,
    pub audio: A,
    outbox: Vec<GameEvent>,
}

impl<R: Renderer, H: Hud, A: AudioSink> Host<R, H, A> {
    /// Create the game in the menu and push the startup HUD state
    pub fn new(settings: &Settings, renderer: R, hud: H, audio: A) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let mut game = Game::new(seed);
        game.set_attract(settings.attract_mode);
        log::info!("Game created with seed {}", seed);

        let mut host = Self {
            game,
            input: InputState::new(),
            renderer,
            hud,
            audio,
            outbox: Vec::new(),
        };
        host.game.boot(&mut host.outbox);
        host.flush();
        host
    }

    /// Forward a key press/release; false if the key is not one of ours
    pub fn key(&mut self, name: &str, pressed: bool) -> bool {
        self.input.handle_key(name, pressed)
    }

    /// One simulation step and one render pass; returns this frame's events
    pub fn frame(&mut self) -> &[GameEvent] {
        self.outbox.clear();
        tick(&mut self.game, &mut self.input, &mut self.outbox);
        self.flush();

        let scene = compose(&self.game);
        self.renderer.draw(&scene);
        let (left, right) = score_tint(&self.game);
        self.hud.set_score_colors(left, right);

        &self.outbox
    }

    fn flush(&mut self) {
        dispatch(&self.outbox, &mut self.hud, &mut self.audio);
    }
}

/// Deliver engine events to the HUD and audio collaborators
pub fn dispatch(events: &[GameEvent], hud: &mut impl Hud, audio: &mut impl AudioSink) {
    for event in events {
        match event {
            GameEvent::Cue { cue, repeat } => audio.play(*cue, *repeat),
            GameEvent::Hud(update) => hud.apply(update),
            GameEvent::AudioUnlock => audio.unlock(),
            GameEvent::MusicStart => audio.start_music(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::LogAudio;
    use crate::hud::HudText;
    use crate::renderer::{NullRenderer, VertexBatch, colors};
    use crate::sim::{Cue, GamePhase, MENU_PROMPT, TITLE};
    use glam::Vec2;

    fn host() -> Host<VertexBatch, HudText, LogAudio> {
        let settings = Settings {
            seed: Some(1234),
            ..Settings::default()
        };
        Host::new(&settings, VertexBatch::new(), HudText::new(), LogAudio::new(&settings))
    }

    #[test]
    fn test_boot_fills_hud() {
        let host = host();
        assert_eq!(host.game.seed, 1234);
        assert_eq!(host.hud.title, TITLE);
        assert_eq!(host.hud.message, MENU_PROMPT);
        assert_eq!(host.hud.mode, "1 Player");
        assert_eq!(host.hud.score_left, "00");
    }

    #[test]
    fn test_frame_draws_every_phase() {
        let mut host = host();
        host.frame();
        assert_eq!(host.game.phase, GamePhase::Menu);
        assert!(!host.renderer.vertices().is_empty());
        assert_eq!(host.hud.score_colors, (colors::WHITE, colors::WHITE));
    }

    #[test]
    fn test_start_clears_prompt_and_unlocks_audio() {
        let mut host = host();
        assert!(host.key(" ", true));
        let events = host.frame().to_vec();
        assert_eq!(host.game.phase, GamePhase::Play);
        assert!(events.contains(&GameEvent::AudioUnlock));
        assert_eq!(host.hud.message, "");
        assert!(host.audio.is_unlocked());
    }

    #[test]
    fn test_headless_attract_match_finishes() {
        let settings = Settings {
            seed: Some(99),
            attract_mode: true,
            ..Settings::default()
        };
        let mut host = Host::new(&settings, NullRenderer, HudText::new(), LogAudio::new(&settings));
        host.key(" ", true);
        host.key(" ", false);
        while host.game.phase != GamePhase::GameOver && host.game.time_ticks < 200_000 {
            host.frame();
        }
        assert_eq!(host.game.phase, GamePhase::GameOver);
        let (left, right) = host.game.round.scores();
        assert_eq!(left.max(right), 10);
        assert_eq!(host.hud.score_left, format!("{:02}", left));
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut host = host();
        assert!(!host.key("F5", true));
    }

    #[test]
    fn test_goal_reaches_hud_and_audio() {
        let mut host = host();
        host.key(" ", true);
        host.frame();
        host.frame();

        host.game.round.ball.pos = Vec2::new(-20.0, 240.0);
        host.game.round.ball.dir = Vec2::new(-1.0, 0.0);
        host.frame();
        assert_eq!(host.hud.score_right, "01");
        assert!(host.audio.played.contains(&(Cue::ScoreGoal, 1)));

        // Right scored: its digits flash blue while the ball is out
        host.frame();
        assert_eq!(host.hud.score_colors, (colors::WHITE, colors::BLUE));
    }
}
