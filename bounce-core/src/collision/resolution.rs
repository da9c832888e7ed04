//! Contact resolution for the canvas boundaries.
//!
//! Every contact is resolved the same way:
//!
//! 1. Clamp the body flush against the boundary
//! 2. Reflect the velocity component along the boundary normal and scale it
//!    by the bounce factor: `v' = -v * bounce_factor`
//!
//! The floor additionally runs rest detection. When the reflected vertical
//! speed drops below `min_velocity` it snaps to zero; if the horizontal
//! speed is also below the threshold the body settles. Walls and the
//! ceiling never put the body to sleep.
//!
//! ```text
//!   ● ↓ vy            ● ↑ -vy * bounce
//! ═════════  ──►  ═════════
//!   floor              floor
//! ```

use super::detection::{Boundary, BoundaryDetector, Contact};
use crate::types::{Body, PhysicsParams};

/// What happened to the body during one boundary pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub body: Body,
    /// Boundaries that were in contact, in the order they were resolved
    pub contacts: Vec<Boundary>,
    /// True when floor contact put the body to sleep this pass
    pub came_to_rest: bool,
}

/// Collision resolver for the canvas envelope.
#[derive(Debug, Clone, Copy)]
pub struct ContactResolver {
    pub bounce_factor: f64,
    pub min_velocity: f64,
}

impl ContactResolver {
    pub fn new(params: &PhysicsParams) -> Self {
        Self {
            bounce_factor: params.bounce_factor,
            min_velocity: params.min_velocity,
        }
    }

    /// Resolve a single contact and return the new body state.
    pub fn resolve(&self, body: &Body, contact: &Contact) -> Body {
        let mut next = *body;

        if contact.boundary.is_horizontal() {
            next.pos.y = contact.resting_coordinate;
            next.vel.y = -next.vel.y * self.bounce_factor;
        } else {
            next.pos.x = contact.resting_coordinate;
            next.vel.x = -next.vel.x * self.bounce_factor;
        }

        if contact.boundary == Boundary::Floor {
            self.apply_rest_threshold(&mut next);
        }

        next
    }

    fn apply_rest_threshold(&self, body: &mut Body) {
        if body.vel.y.abs() < self.min_velocity {
            body.vel.y = 0.0;
            if body.vel.x.abs() < self.min_velocity {
                body.settle();
            }
        }
    }

    /// Check and resolve every boundary in order.
    ///
    /// Each boundary is tested against the state left by the previous one,
    /// so a body in a corner gets both axes corrected in the same pass.
    pub fn resolve_all(&self, body: &Body, detector: &BoundaryDetector) -> Resolution {
        let mut current = *body;
        let mut contacts = Vec::new();
        let mut came_to_rest = false;

        for boundary in Boundary::ORDER {
            if let Some(contact) = detector.detect(&current, boundary) {
                let was_resting = current.at_rest;
                current = self.resolve(&current, &contact);
                came_to_rest |= !was_resting && current.at_rest;
                contacts.push(boundary);
            }
        }

        Resolution {
            body: current,
            contacts,
            came_to_rest,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
