//! Discrete-step integration of the body's motion.
//!
//! The canvas simulation advances in whole steps, so there is no `dt`:
//! one call is one tick at whatever tempo the host chooses.
//!
//! ## Algorithm
//!
//! Semi-implicit (symplectic) Euler with unit step:
//!
//! ```text
//! 1. v_new = forces(v)
//! 2. x_new = x + v_new
//! ```
//!
//! Updating velocity first means a body released from rest moves on the
//! very first tick.

use crate::types::{Body, Vec2};

/// Trait for the per-step velocity change acting on the body.
pub trait ForceModel {
    /// Return the velocity after one step's worth of forces.
    fn apply(&self, vel: Vec2) -> Vec2;
}

/// Semi-implicit Euler integrator for the canvas body.
pub struct SemiImplicitEuler;

impl SemiImplicitEuler {
    /// Advance the body by one tick, ignoring boundaries.
    ///
    /// Bodies at rest are returned unchanged.
    pub fn step<F: ForceModel>(body: &Body, forces: &F) -> Body {
        if body.at_rest {
            return *body;
        }

        let vel = forces.apply(body.vel);

        Body {
            pos: body.pos + vel,
            vel,
            ..*body
        }
    }

    /// Advance the body by several ticks, ignoring boundaries.
    pub fn step_n<F: ForceModel>(body: &Body, forces: &F, ticks: usize) -> Body {
        let mut current = *body;
        for _ in 0..ticks {
            current = Self::step(&current, forces);
        }
        current
    }
}

// =============================================================================
// Tests
// =============================================================================
