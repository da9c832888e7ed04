//! Per-step velocity changes acting on the body.
//!
//! The canvas model has two of them:
//!
//! - **Gravity**: a constant added to the vertical velocity every step
//! - **Friction**: a multiplicative decay of the horizontal velocity
//!
//! ```text
//! step n          step n+1
//!   vx  ──────►   vx * friction
//!   vy  ──────►   vy + gravity      (y grows downward)
//! ```
//!
//! Gravity is applied before friction, and both before the position update.

use crate::integrator::ForceModel;
use crate::types::{PhysicsParams, Vec2};

/// Force model for the bouncing-ball canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasForces {
    /// Added to the vertical velocity every step
    pub gravity: f64,

    /// Horizontal velocity multiplier per step
    pub friction: f64,

    /// Enable/disable individual terms (useful for testing)
    pub enable_gravity: bool,
    pub enable_friction: bool,
}

impl CanvasForces {
    pub fn new(params: &PhysicsParams) -> Self {
        Self {
            gravity: params.gravity,
            friction: params.friction,
            enable_gravity: true,
            enable_friction: true,
        }
    }

    /// Create a force model with only gravity (for testing).
    pub fn gravity_only(params: &PhysicsParams) -> Self {
        Self {
            enable_friction: false,
            ..Self::new(params)
        }
    }
}

impl Default for CanvasForces {
    fn default() -> Self {
        Self::new(&PhysicsParams::default())
    }
}

impl ForceModel for CanvasForces {
    fn apply(&self, vel: Vec2) -> Vec2 {
        let mut next = vel;

        if self.enable_gravity {
            next.y += self.gravity;
        }

        if self.enable_friction {
            next.x *= self.friction;
        }

        next
    }
}

// =============================================================================
// Tests
// =============================================================================
