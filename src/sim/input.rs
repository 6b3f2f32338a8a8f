//! Keyboard snapshot consulted once per tick
//!
//! Paddle controls are level-triggered (`held`). The confirm action is a
//! latch set on press and cleared by whoever reads it (`take_confirm`).

use serde::{Deserialize, Serialize};

/// Physical keys the host reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    A,
    Z,
    K,
    M,
    Space,
}

impl Key {
    const COUNT: usize = 7;

    /// Decode a DOM-style key name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "a" | "A" => Some(Key::A),
            "z" | "Z" => Some(Key::Z),
            "k" | "K" => Some(Key::K),
            "m" | "M" => Some(Key::M),
            " " | "Space" | "Spacebar" => Some(Key::Space),
            _ => None,
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Logical paddle controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    P1Up,
    P1Down,
    P2Up,
    P2Down,
}

impl Control {
    /// Keys bound to this control
    pub fn keys(self) -> &'static [Key] {
        match self {
            Control::P1Up => &[Key::ArrowUp, Key::A],
            Control::P1Down => &[Key::ArrowDown, Key::Z],
            Control::P2Up => &[Key::K],
            Control::P2Down => &[Key::M],
        }
    }
}

/// Held keys plus the confirm latch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputState {
    held: [bool; Key::COUNT],
    confirm: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a press/release by key name; returns false for keys we don't use
    pub fn handle_key(&mut self, name: &str, pressed: bool) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                if pressed {
                    self.press(key);
                } else {
                    self.release(key);
                }
                true
            }
            None => false,
        }
    }

    pub fn press(&mut self, key: Key) {
        self.held[key.slot()] = true;
        if key == Key::Space {
            self.confirm = true;
        }
    }

    pub fn release(&mut self, key: Key) {
        self.held[key.slot()] = false;
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.held[key.slot()]
    }

    /// True while any key bound to `control` is down
    pub fn held(&self, control: Control) -> bool {
        control.keys().iter().any(|k| self.is_key_down(*k))
    }

    /// Read and clear the confirm latch
    pub fn take_confirm(&mut self) -> bool {
        std::mem::take(&mut self.confirm)
    }

    /// Peek at the latch without consuming it
    pub fn confirm_pending(&self) -> bool {
        self.confirm
    }
}
