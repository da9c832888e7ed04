//! Drop shadow derived from the body's position.
//!
//! The shadow sits on a fixed line near the bottom of the canvas and only
//! follows the body horizontally. Its width and opacity depend on how far
//! down the canvas the body is:
//!
//! ```text
//! width   = radius * (base_scale + (1 - y / height))
//! opacity = base_opacity + round(opacity_range * y / height)
//! ```
//!
//! The shadow holds no state of its own; it is rebuilt from scratch after
//! every change to the body.

use serde::{Deserialize, Serialize};

use crate::types::{constants, Body, Vec2, WorldBounds};

/// Styling for the derived shadow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowStyle {
    pub enabled: bool,
    /// Distance from the bottom edge to the shadow's center line
    pub bottom_offset: f64,
    pub height: f64,
    pub base_scale: f64,
    pub base_opacity: f64,
    pub opacity_range: f64,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            bottom_offset: 8.0,
            height: 8.0,
            base_scale: 1.5,
            base_opacity: 20.0,
            opacity_range: 30.0,
        }
    }
}

/// Oval shadow attributes read by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub center: Vec2,
    pub width: f64,
    pub height: f64,
    /// Percent, always within `[0, 100]`
    pub opacity: u8,
}

impl Shadow {
    /// Derive the shadow for `body`, or `None` when shadows are disabled.
    pub fn derive(body: &Body, bounds: &WorldBounds, style: &ShadowStyle) -> Option<Self> {
        if !style.enabled {
            return None;
        }

        let height_factor = body.pos.y / bounds.height;
        let opacity = (style.base_opacity + (style.opacity_range * height_factor).round())
            .clamp(0.0, constants::MAX_OPACITY);

        Some(Self {
            center: Vec2::new(body.pos.x, bounds.height - style.bottom_offset),
            width: body.radius * (style.base_scale + (1.0 - height_factor)),
            height: style.height,
            opacity: opacity as u8,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
