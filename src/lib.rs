//! Classic Pong - two paddles, one ball, first to ten
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, physics, scoring, impacts)
//! - `renderer`: Scene description and vertex tessellation
//! - `hud`: Score/message overlay collaborator
//! - `audio`: Named sound cue sink
//! - `platform`: Host loop wiring the simulation to its collaborators
//! - `settings`: Player preferences (audio levels, seed, attract mode)

pub mod audio;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    /// Paddle centre x positions (left, right)
    pub const LEFT_PADDLE_X: f32 = 40.0;
    pub const RIGHT_PADDLE_X: f32 = FIELD_WIDTH - 40.0;

    /// Paddle extents
    pub const PADDLE_HALF_WIDTH: f32 = 9.0;
    pub const PADDLE_HALF_HEIGHT: f32 = 64.0;
    /// Vertical clamp for paddle centres
    pub const PADDLE_MIN_Y: f32 = 80.0;
    pub const PADDLE_MAX_Y: f32 = 400.0;

    /// Ball radius
    pub const BALL_RADIUS: f32 = 7.0;
    /// Sub-steps per tick when a ball is served
    pub const SERVE_SPEED: u32 = 5;
    /// Divisor turning paddle-relative hit offset into added dy
    pub const SPIN_DIVISOR: f32 = 128.0;

    /// Human paddle speed (units/tick)
    pub const PLAYER_SPEED: f32 = 6.0;
    /// AI paddle speed cap (units/tick)
    pub const MAX_AI_SPEED: f32 = 6.0;
    /// AI aim offset range (inclusive)
    pub const AI_OFFSET_MIN: i32 = -10;
    pub const AI_OFFSET_MAX: i32 = 10;

    /// First side to this many points wins
    pub const SCORE_TARGET: u32 = 10;

    /// Ticks a paddle stays highlighted after a hit
    pub const FLASH_TICKS: i32 = 10;
    /// Ticks between conceding and the next serve
    pub const GRACE_TICKS: i32 = 20;

    /// Impact ripples
    pub const IMPACT_LIFETIME: u32 = 10;
    pub const MAX_IMPACTS: usize = 64;
    /// Paddle ripples are drawn this far behind the ball along its travel
    pub const IMPACT_BACK_OFFSET: f32 = 10.0;

    /// Upper speed bounds of the hit cue tiers
    pub const HIT_SLOW_MAX: u32 = 10;
    pub const HIT_MEDIUM_MAX: u32 = 12;
    pub const HIT_FAST_MAX: u32 = 16;
}

/// Scale a direction to unit length; degenerate vectors collapse to zero
#[inline]
pub fn normalised(v: Vec2) -> Vec2 {
    let len = v.length();
    if len <= 0.0 {
        return Vec2::ZERO;
    }
    v / len
}
