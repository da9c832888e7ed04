//! Input events delivered by the host.
//!
//! Key names follow the host's vocabulary (`"space"`, `"r"`, `"up"`,
//! `"left"`, `"right"`). Anything else is not an error, it simply maps to no
//! action.

use std::fmt;

/// Keyboard actions understood by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Flip the rest flag
    PauseToggle,
    /// Restore the spawn position and velocity
    Reset,
    ImpulseUp,
    ImpulseLeft,
    ImpulseRight,
}

impl Key {
    pub const ALL: [Key; 5] = [
        Key::PauseToggle,
        Key::Reset,
        Key::ImpulseUp,
        Key::ImpulseLeft,
        Key::ImpulseRight,
    ];

    /// Map a host key name to an action.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "space" => Some(Key::PauseToggle),
            "r" => Some(Key::Reset),
            "up" => Some(Key::ImpulseUp),
            "left" => Some(Key::ImpulseLeft),
            "right" => Some(Key::ImpulseRight),
            _ => None,
        }
    }

    /// The host key name bound to this action.
    pub fn name(&self) -> &'static str {
        match self {
            Key::PauseToggle => "space",
            Key::Reset => "r",
            Key::ImpulseUp => "up",
            Key::ImpulseLeft => "left",
            Key::ImpulseRight => "right",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw input event from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerPress { x: f64, y: f64 },
    KeyPress(Key),
}

impl InputEvent {
    /// Build a key event from a host key name, if the name is bound.
    pub fn key(name: &str) -> Option<Self> {
        Key::from_name(name).map(InputEvent::KeyPress)
    }
}
