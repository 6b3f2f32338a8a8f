//! Browser binding
//!
//! JavaScript owns the canvas, DOM overlay and Web Audio. Each animation
//! frame it calls `frame()`, applies the returned JSON events to the HUD and
//! audio, and uploads `vertices()` to its GPU buffer.

use wasm_bindgen::prelude::*;

use crate::audio::NullAudio;
use crate::hud::{HudText, score_tint};
use crate::platform::Host;
use crate::renderer::VertexBatch;
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct WebPong {
    host: Host<VertexBatch, HudText, NullAudio>,
}

#[wasm_bindgen]
impl WebPong {
    /// Create a game; `settings_json` may be empty
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: &str) -> WebPong {
        let settings = if settings_json.trim().is_empty() {
            Settings::default()
        } else {
            Settings::from_json(settings_json).unwrap_or_else(|e| {
                log::warn!("Ignoring settings: {}", e);
                Settings::default()
            })
        };
        Self {
            host: Host::new(&settings, VertexBatch::new(), HudText::new(), NullAudio),
        }
    }

    /// Returns false for keys the game does not use
    pub fn key_down(&mut self, key: &str) -> bool {
        self.host.key(key, true)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.host.key(key, false)
    }

    /// Run one frame; returns the emitted events as a JSON array
    pub fn frame(&mut self) -> String {
        let events = self.host.frame();
        serde_json::to_string(events).unwrap_or_else(|e| {
            log::error!("Event encoding failed: {}", e);
            "[]".to_string()
        })
    }

    /// Interleaved `x, y, r, g, b, a` triangle list of the last frame
    pub fn vertices(&self) -> Vec<f32> {
        self.host.renderer.as_floats().to_vec()
    }

    /// Field clear colour as `r, g, b, a`
    pub fn clear_color(&self) -> Vec<f32> {
        self.host.renderer.clear.to_vec()
    }

    /// Score digit tints as `r, g, b` for left then right
    pub fn score_colors(&self) -> Vec<f32> {
        let (left, right) = score_tint(&self.host.game);
        left[..3].iter().chain(&right[..3]).copied().collect()
    }
}
