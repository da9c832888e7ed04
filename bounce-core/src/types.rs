//! Core types for the bouncing-ball simulation.
//!
//! All quantities are in canvas units:
//! - Position: pixels, origin at the top-left corner, y grows downward
//! - Velocity: pixels per step
//! - Acceleration: pixels per step²
//!
//! The tempo of a "step" is owned by the host; nothing here knows about
//! wall-clock time.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

// =============================================================================
// Vec2 - 2D Vector
// =============================================================================

/// A 2D vector used for positions and velocities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared magnitude (avoids sqrt for comparisons)
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Magnitude (length) of the vector
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Default for Vec2 {
    fn default() -> Self {
        Self::ZERO
    }
}

// =============================================================================
// Body
// =============================================================================

/// The single simulated circular body.
///
/// `radius` never changes after construction. When `at_rest` is set the
/// physics step leaves the body untouched until an input event wakes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f64,
    pub at_rest: bool,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f64) -> Self {
        Self {
            pos,
            vel,
            radius,
            at_rest: false,
        }
    }

    /// Speed in pixels per step
    pub fn speed(&self) -> f64 {
        self.vel.magnitude()
    }

    /// Put the body to sleep with zero velocity.
    pub fn settle(&mut self) {
        self.vel = Vec2::ZERO;
        self.at_rest = true;
    }
}

// =============================================================================
// World Bounds
// =============================================================================

/// The canvas rectangle `[0, width] × [0, height]`.
///
/// The floor sits `floor_inset` pixels above the bottom edge, where the
/// host draws its ground line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f64,
    pub height: f64,
    #[serde(default = "WorldBounds::default_floor_inset")]
    pub floor_inset: f64,
}

impl WorldBounds {
    /// The classic 400×400 canvas with a 5px ground line
    pub fn classic_canvas() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
            floor_inset: Self::default_floor_inset(),
        }
    }

    fn default_floor_inset() -> f64 {
        5.0
    }

    /// Y coordinate of the floor line
    pub fn floor_y(&self) -> f64 {
        self.height - self.floor_inset
    }

    /// Horizontal center of the canvas
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    /// Check whether a circle of `radius` at `pos` lies inside the collision envelope
    pub fn contains(&self, pos: Vec2, radius: f64) -> bool {
        pos.x - radius >= 0.0
            && pos.x + radius <= self.width
            && pos.y - radius >= 0.0
            && pos.y + radius <= self.floor_y()
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::classic_canvas()
    }
}

// =============================================================================
// Physics Parameters
// =============================================================================

/// Immutable physics constants for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsParams {
    /// Added to the vertical velocity every step (pixels per step²)
    pub gravity: f64,
    /// Fraction of speed kept after a bounce, in (0, 1)
    pub bounce_factor: f64,
    /// Multiplicative decay of horizontal velocity per step, in (0, 1]
    pub friction: f64,
    /// Speeds below this snap to zero on floor contact
    pub min_velocity: f64,
}

impl PhysicsParams {
    /// Values tuned for the classic 400×400 canvas
    pub fn classic() -> Self {
        Self {
            gravity: 0.5,
            bounce_factor: 0.8,
            friction: 0.99,
            min_velocity: 0.5,
        }
    }
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self::classic()
    }
}

// =============================================================================
// Controls
// =============================================================================

/// Tuning constants used by the input handlers.
///
/// These were picked by trial for the classic canvas and carry no physical
/// meaning, so they stay configurable instead of being derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Controls {
    /// Pointer launch speed is `(x - width / 2) / launch_divisor`
    pub launch_divisor: f64,
    /// Subtracted from the vertical velocity by the "up" key
    pub impulse_up: f64,
    /// Added to or subtracted from the horizontal velocity by the arrow keys
    pub impulse_horizontal: f64,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            launch_divisor: 30.0,
            impulse_up: 10.0,
            impulse_horizontal: 5.0,
        }
    }
}

// =============================================================================
// Physical Constants
// =============================================================================

pub mod constants {
    /// Maximum opacity accepted by the host (percent)
    pub const MAX_OPACITY: f64 = 100.0;

    /// Small value for floating-point comparisons
    pub const EPSILON: f64 = 1e-10;
}

// =============================================================================
// Tests
// =============================================================================
