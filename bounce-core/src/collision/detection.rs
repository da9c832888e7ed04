//! Boundary contact detection.
//!
//! Detects overlap between the body and the four edges of the collision
//! envelope. Contact is inclusive: touching a boundary exactly counts.

use crate::types::{Body, WorldBounds};

/// One edge of the collision envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    Floor,
    Ceiling,
    LeftWall,
    RightWall,
}

impl Boundary {
    /// Order in which boundaries are checked and resolved each step.
    pub const ORDER: [Boundary; 4] = [
        Boundary::Floor,
        Boundary::Ceiling,
        Boundary::LeftWall,
        Boundary::RightWall,
    ];

    /// True for the boundaries that reflect vertical velocity
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Boundary::Floor | Boundary::Ceiling)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Boundary::Floor => "floor",
            Boundary::Ceiling => "ceiling",
            Boundary::LeftWall => "left_wall",
            Boundary::RightWall => "right_wall",
        }
    }
}

/// Detailed contact information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub boundary: Boundary,
    /// How far the body overlaps the boundary (zero when just touching)
    pub penetration: f64,
    /// Center coordinate along the boundary normal that puts the body flush
    /// against it
    pub resting_coordinate: f64,
}

/// Contact detector for the canvas envelope.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryDetector {
    pub bounds: WorldBounds,
}

impl BoundaryDetector {
    pub fn new(bounds: WorldBounds) -> Self {
        Self { bounds }
    }

    /// Check a single boundary against the body's current position.
    pub fn detect(&self, body: &Body, boundary: Boundary) -> Option<Contact> {
        let r = body.radius;
        let (penetration, resting_coordinate) = match boundary {
            Boundary::Floor => {
                let floor_y = self.bounds.floor_y();
                (body.pos.y + r - floor_y, floor_y - r)
            }
            Boundary::Ceiling => (r - body.pos.y, r),
            Boundary::LeftWall => (r - body.pos.x, r),
            Boundary::RightWall => (body.pos.x + r - self.bounds.width, self.bounds.width - r),
        };

        if penetration >= 0.0 {
            Some(Contact {
                boundary,
                penetration,
                resting_coordinate,
            })
        } else {
            None
        }
    }

    /// Every boundary the body currently touches, in resolution order.
    ///
    /// This is a snapshot of one position; resolving one contact moves the
    /// body, so the step re-detects each boundary after the previous one is
    /// resolved instead of using this list.
    pub fn detect_all(&self, body: &Body) -> Vec<Contact> {
        Boundary::ORDER
            .iter()
            .filter_map(|&boundary| self.detect(body, boundary))
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
