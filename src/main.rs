//! Classic Pong entry point
//!
//! The browser build drives the game through `classic_pong::web`. Natively
//! this runs a headless attract-mode match and logs how it went.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use classic_pong::Settings;
    use classic_pong::audio::LogAudio;
    use classic_pong::hud::HudText;
    use classic_pong::platform::Host;
    use classic_pong::renderer::NullRenderer;
    use classic_pong::sim::{GameEvent, GamePhase};

    /// Give up on a match after this many ticks (~30 minutes at 60 Hz)
    const MAX_TICKS: u64 = 60 * 60 * 30;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("pong.json"));
    let mut settings = Settings::load_or_default(&path);
    settings.attract_mode = true;

    let mut host = Host::new(
        &settings,
        NullRenderer,
        HudText::new(),
        LogAudio::new(&settings),
    );

    host.key(" ", true);
    host.key(" ", false);

    let mut cues = 0u64;
    while host.game.phase != GamePhase::GameOver && host.game.time_ticks < MAX_TICKS {
        cues += host
            .frame()
            .iter()
            .filter(|e| matches!(e, GameEvent::Cue { .. }))
            .count() as u64;
    }

    let (left, right) = host.game.round.scores();
    if host.game.phase == GamePhase::GameOver {
        log::info!(
            "Match over after {} ticks: {} - {} ({} cues)",
            host.game.time_ticks,
            host.hud.score_left,
            host.hud.score_right,
            cues
        );
    } else {
        log::warn!(
            "Stopped after {} ticks at {}-{} without a winner",
            host.game.time_ticks,
            left,
            right
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
