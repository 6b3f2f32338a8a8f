//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, no wall-clock time
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies; effects leave as events

pub mod collision;
pub mod control;
pub mod events;
pub mod impact;
pub mod input;
pub mod physics;
pub mod score;
pub mod state;
pub mod tick;

pub use control::{ai_delta, clamp_paddle_y, human_delta};
pub use events::{Cue, GameEvent, HudUpdate};
pub use impact::{ImpactEvent, ImpactTracker};
pub use input::{Control, InputState, Key};
pub use physics::{Contacts, integrate};
pub use state::{Ball, GamePhase, Paddle, PaddleControl, PlayerMode, RoundState, Side};
pub use tick::{GAME_OVER_PROMPT, Game, MENU_PROMPT, TITLE, tick};
