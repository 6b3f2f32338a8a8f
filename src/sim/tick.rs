//! Fixed-rate simulation tick
//!
//! Top-level state machine: Menu -> Play -> GameOver -> Menu. One call to
//! `tick` is one simulation step; the host renders once per call.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::control::move_paddles;
use super::events::{Cue, GameEvent, HudUpdate};
use super::input::{Control, InputState};
use super::physics::integrate;
use super::score::{evaluate, tick_timers, winner};
use super::state::{GamePhase, PlayerMode, RoundState};

/// Window title pushed once at startup
pub const TITLE: &str = "Pong!";
/// Prompt shown in the menu
pub const MENU_PROMPT: &str = "UP/DOWN to select 1P/2P — SPACE to start";
/// Prompt shown once a match is decided
pub const GAME_OVER_PROMPT: &str = "Game Over — SPACE to return to menu";

/// Complete game context, owned by the host and passed into every tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Mode picked in the menu, applied at round start
    pub mode: PlayerMode,
    pub round: RoundState,
    /// AI also drives the left paddle (demo play)
    pub attract: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Menu selection edge memory
    up_was_held: bool,
    down_was_held: bool,
    music_started: bool,
    rng: Pcg32,
}

impl Game {
    /// Create a game sitting in the menu with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Menu,
            mode: PlayerMode::OnePlayer,
            round: RoundState::new(PlayerMode::OnePlayer, false),
            attract: false,
            time_ticks: 0,
            up_was_held: false,
            down_was_held: false,
            music_started: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Takes effect at the next round start
    pub fn set_attract(&mut self, attract: bool) {
        self.attract = attract;
    }

    /// Startup HUD state: mode, blank scores, title and menu prompt
    pub fn boot(&self, events: &mut Vec<GameEvent>) {
        events.push(GameEvent::Hud(HudUpdate::Mode(self.mode)));
        events.push(GameEvent::Hud(HudUpdate::Score { left: 0, right: 0 }));
        events.push(GameEvent::Hud(HudUpdate::Title(TITLE.to_string())));
        events.push(GameEvent::message(MENU_PROMPT));
    }

    pub fn music_started(&self) -> bool {
        self.music_started
    }

    fn start_round(&mut self, events: &mut Vec<GameEvent>) {
        events.push(GameEvent::AudioUnlock);
        if !self.music_started {
            events.push(GameEvent::MusicStart);
            self.music_started = true;
        }
        self.phase = GamePhase::Play;
        self.round.reset(self.mode, self.attract);
        events.push(GameEvent::Hud(HudUpdate::Score { left: 0, right: 0 }));
        events.push(GameEvent::message(""));
        log::info!("Round started ({})", self.mode.label());
    }
}

/// Advance the game by one fixed step
pub fn tick(game: &mut Game, input: &mut InputState, events: &mut Vec<GameEvent>) {
    game.time_ticks += 1;
    match game.phase {
        GamePhase::Menu => tick_menu(game, input, events),
        GamePhase::Play => tick_play(game, input, events),
        GamePhase::GameOver => tick_game_over(game, input, events),
    }
}

fn tick_menu(game: &mut Game, input: &mut InputState, events: &mut Vec<GameEvent>) {
    let up = input.held(Control::P1Up);
    let down = input.held(Control::P1Down);
    if up && !game.up_was_held {
        game.mode = PlayerMode::OnePlayer;
        events.push(GameEvent::Hud(HudUpdate::Mode(game.mode)));
        events.push(GameEvent::cue(Cue::Up, 1));
    }
    if down && !game.down_was_held {
        game.mode = PlayerMode::TwoPlayer;
        events.push(GameEvent::Hud(HudUpdate::Mode(game.mode)));
        events.push(GameEvent::cue(Cue::Down, 1));
    }
    game.up_was_held = up;
    game.down_was_held = down;

    if input.take_confirm() {
        game.start_round(events);
    }
}

fn tick_play(game: &mut Game, input: &InputState, events: &mut Vec<GameEvent>) {
    let round = &mut game.round;
    move_paddles(round, input);
    tick_timers(round);
    integrate(round, &mut game.rng, events);
    evaluate(round, events);

    if let Some(side) = winner(round) {
        let (left, right) = round.scores();
        log::info!("{:?} wins {}-{}", side, left, right);
        game.phase = GamePhase::GameOver;
        events.push(GameEvent::message(GAME_OVER_PROMPT));
    }
}

fn tick_game_over(game: &mut Game, input: &mut InputState, events: &mut Vec<GameEvent>) {
    if input.take_confirm() {
        game.phase = GamePhase::Menu;
        game.mode = PlayerMode::OnePlayer;
        events.push(GameEvent::Hud(HudUpdate::Mode(game.mode)));
        events.push(GameEvent::message(MENU_PROMPT));
        log::info!("Back to menu");
    }
}
