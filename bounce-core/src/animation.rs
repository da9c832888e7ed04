//! Frame-driven shape animations.
//!
//! Small state machines that change one visual property per tick: a
//! shuttling circle, a pulsating square, a spinning star, a colour-cycling
//! circle and an orbiting dot. Like the simulator, they only update numbers;
//! the host reads them back and redraws.
//!
//! All of them implement [`Animate`], and [`AnimationScene`] advances the
//! whole set from a single per-tick call.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// One tick of a frame-based animation.
pub trait Animate {
    fn advance(&mut self);

    fn advance_n(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.advance();
        }
    }
}

/// Moves horizontally and turns around at the edges.
///
/// The direction flips once `x` reaches `max` (or `min`); the position is not
/// clamped, so it may overshoot by less than one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shuttle {
    pub x: f64,
    pub speed: f64,
    pub min: f64,
    pub max: f64,
    /// +1 moving right, -1 moving left
    pub direction: f64,
}

impl Shuttle {
    pub fn new(x: f64, speed: f64, min: f64, max: f64) -> Self {
        Self {
            x,
            speed,
            min,
            max,
            direction: 1.0,
        }
    }
}

impl Default for Shuttle {
    fn default() -> Self {
        Self::new(50.0, 3.0, 25.0, 375.0)
    }
}

impl Animate for Shuttle {
    fn advance(&mut self) {
        self.x += self.speed * self.direction;
        if self.x >= self.max {
            self.direction = -1.0;
        } else if self.x <= self.min {
            self.direction = 1.0;
        }
    }
}

/// Grows and shrinks between two sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pulse {
    pub size: f64,
    pub min: f64,
    pub max: f64,
    pub rate: f64,
    pub growing: bool,
}

impl Default for Pulse {
    fn default() -> Self {
        Self {
            size: 50.0,
            min: 30.0,
            max: 80.0,
            rate: 1.0,
            growing: true,
        }
    }
}

impl Animate for Pulse {
    fn advance(&mut self) {
        if self.growing {
            self.size += self.rate;
            if self.size >= self.max {
                self.growing = false;
            }
        } else {
            self.size -= self.rate;
            if self.size <= self.min {
                self.growing = true;
            }
        }
    }
}

/// Constant rotation, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spinner {
    /// Always within `[0, 360)`
    pub angle: f64,
    pub degrees_per_tick: f64,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            angle: 0.0,
            degrees_per_tick: 3.0,
        }
    }
}

impl Animate for Spinner {
    fn advance(&mut self) {
        self.angle = (self.angle + self.degrees_per_tick).rem_euclid(360.0);
    }
}

/// Steps through a colour palette at a fixed interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorCycle {
    pub palette: Vec<String>,
    pub ticks_per_color: u32,
    index: usize,
    counter: u32,
}

impl ColorCycle {
    /// An empty palette is replaced by a single neutral colour.
    pub fn new(palette: Vec<String>, ticks_per_color: u32) -> Self {
        let palette = if palette.is_empty() {
            vec!["gray".to_string()]
        } else {
            palette
        };
        Self {
            palette,
            ticks_per_color: ticks_per_color.max(1),
            index: 0,
            counter: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.palette[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for ColorCycle {
    fn default() -> Self {
        let palette = ["red", "orange", "yellow", "green", "blue", "purple"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        Self::new(palette, 15)
    }
}

impl Animate for ColorCycle {
    fn advance(&mut self) {
        self.counter += 1;
        if self.counter >= self.ticks_per_color {
            self.counter = 0;
            self.index = (self.index + 1) % self.palette.len();
        }
    }
}

/// Circular motion around a fixed center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    pub center: Vec2,
    pub radius: f64,
    /// Radians
    pub angle: f64,
    pub radians_per_tick: f64,
}

impl Orbit {
    pub fn position(&self) -> Vec2 {
        Vec2::new(
            self.center.x + self.radius * self.angle.cos(),
            self.center.y + self.radius * self.angle.sin(),
        )
    }
}

impl Default for Orbit {
    fn default() -> Self {
        Self {
            center: Vec2::new(300.0, 300.0),
            radius: 40.0,
            angle: 0.0,
            radians_per_tick: 0.05,
        }
    }
}

impl Animate for Orbit {
    fn advance(&mut self) {
        self.angle += self.radians_per_tick;
    }
}

/// The full set of demo animations, advanced together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationScene {
    pub shuttle: Shuttle,
    pub pulse: Pulse,
    pub spinner: Spinner,
    pub colors: ColorCycle,
    pub orbit: Orbit,
    ticks: u64,
}

impl AnimationScene {
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Animate for AnimationScene {
    fn advance(&mut self) {
        self.ticks += 1;
        self.shuttle.advance();
        self.pulse.advance();
        self.spinner.advance();
        self.colors.advance();
        self.orbit.advance();
    }
}

// =============================================================================
// Tests
// =============================================================================
