//! Collision detection and resolution against the canvas boundaries.
//!
//! This module handles:
//! - **Detection**: which of the floor, ceiling and walls the body overlaps
//! - **Resolution**: clamping, reflecting with damping, and rest detection
//!
//! ## Discrete Overlap Test
//!
//! The body is moved first and then tested for overlap. A body that ends a
//! step past a boundary is clamped back flush against it:
//!
//! ```text
//!      ●  before        ●  clamped to floor_y - r
//!  ════════════     ═══●════════
//!      ●  after
//! ```
//!
//! Boundaries are checked in a fixed order (floor, ceiling, left, right),
//! each against the state left by the previous check.

pub mod detection;
pub mod resolution;

pub use detection::*;
pub use resolution::*;
