//! # Bounce Core
//!
//! A per-tick bouncing-ball simulator for 2D canvas hosts.
//!
//! ## Architecture
//!
//! - `types`: Core data structures (Vec2, body, bounds, physics constants)
//! - `forces`: Gravity and horizontal friction
//! - `integrator`: One-tick semi-implicit Euler
//! - `collision`: Boundary detection and bounce/rest resolution
//! - `shadow`: Drop shadow derived from the body position
//! - `input`: Pointer and keyboard events
//! - `config`: YAML run configuration loader
//! - `simulation`: Main orchestrator driven by the host
//! - `animation`: Frame-driven shape animations

pub mod animation;
pub mod collision;
pub mod config;
pub mod forces;
pub mod input;
pub mod integrator;
pub mod shadow;
pub mod simulation;
pub mod types;

pub use config::{ConfigError, ConfigLoader, SimulationConfig};
pub use input::{InputEvent, Key};
pub use simulation::Simulator;
pub use types::{Body, Vec2, WorldBounds};
