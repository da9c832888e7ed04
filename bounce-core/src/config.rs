//! Run configuration loader.
//!
//! Loads canvas, ball, physics, control and shadow settings from YAML files,
//! so a run can be retuned without recompiling.
//!
//! ## Directory Structure
//!
//! ```text
//! config/
//! ├── standard.yaml
//! ├── moon.yaml
//! └── superball.yaml
//! ```
//!
//! ## YAML format
//!
//! Every section is optional and falls back to the classic 400×400 canvas
//! values:
//!
//! ```yaml
//! canvas:
//!   width: 400.0
//!   height: 400.0
//!   floor_inset: 5.0
//! ball:
//!   spawn: { x: 200.0, y: 30.0 }
//!   velocity: { x: 3.0, y: 0.0 }
//!   radius: 20.0
//! physics:
//!   gravity: 0.5
//!   bounce_factor: 0.8
//!   friction: 0.99
//!   min_velocity: 0.5
//! controls:
//!   launch_divisor: 30.0
//!   impulse_up: 10.0
//!   impulse_horizontal: 5.0
//! shadow:
//!   enabled: true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::shadow::ShadowStyle;
use crate::types::{Body, Controls, PhysicsParams, Vec2, WorldBounds};

/// Error type for configuration loading and validation.
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_yaml::Error),
    NotFound(String),
    Invalid { field: &'static str, reason: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "YAML parse error: {}", e),
            ConfigError::NotFound(name) => write!(f, "Configuration not found: {}", name),
            ConfigError::Invalid { field, reason } => {
                write!(f, "Invalid configuration: {} {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::ParseError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

/// Initial state of the ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub spawn: Vec2,
    pub velocity: Vec2,
    pub radius: f64,
}

impl BallConfig {
    /// A fresh body at the spawn point.
    pub fn spawn_body(&self) -> Body {
        Body::new(self.spawn, self.velocity, self.radius)
    }
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            spawn: Vec2::new(200.0, 30.0),
            velocity: Vec2::new(3.0, 0.0),
            radius: 20.0,
        }
    }
}

/// Complete configuration for one run. Immutable once the simulator starts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub canvas: WorldBounds,
    pub ball: BallConfig,
    pub physics: PhysicsParams,
    pub controls: Controls,
    pub shadow: ShadowStyle,
}

impl SimulationConfig {
    /// Parse a configuration from YAML text and validate it.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML configuration file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        info!("loaded simulation config from {}", path.display());
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reject configurations the collision math cannot handle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let canvas = &self.canvas;
        let ball = &self.ball;
        let physics = &self.physics;

        let numbers = [
            ("canvas.width", canvas.width),
            ("canvas.height", canvas.height),
            ("canvas.floor_inset", canvas.floor_inset),
            ("ball.spawn.x", ball.spawn.x),
            ("ball.spawn.y", ball.spawn.y),
            ("ball.velocity.x", ball.velocity.x),
            ("ball.velocity.y", ball.velocity.y),
            ("ball.radius", ball.radius),
            ("physics.gravity", physics.gravity),
            ("physics.bounce_factor", physics.bounce_factor),
            ("physics.friction", physics.friction),
            ("physics.min_velocity", physics.min_velocity),
            ("controls.launch_divisor", self.controls.launch_divisor),
            ("controls.impulse_up", self.controls.impulse_up),
            ("controls.impulse_horizontal", self.controls.impulse_horizontal),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(invalid(field, "must be a finite number"));
            }
        }

        if canvas.width <= 0.0 {
            return Err(invalid("canvas.width", "must be positive"));
        }
        if canvas.height <= 0.0 {
            return Err(invalid("canvas.height", "must be positive"));
        }
        if canvas.floor_inset < 0.0 || canvas.floor_inset >= canvas.height {
            return Err(invalid("canvas.floor_inset", "must lie in [0, height)"));
        }
        if ball.radius <= 0.0 {
            return Err(invalid("ball.radius", "must be positive"));
        }
        if 2.0 * ball.radius >= canvas.width {
            return Err(invalid("ball.radius", "ball must fit between the walls"));
        }
        if 2.0 * ball.radius >= canvas.floor_y() {
            return Err(invalid("ball.radius", "ball must fit between ceiling and floor"));
        }
        if physics.gravity <= 0.0 {
            return Err(invalid("physics.gravity", "must be positive"));
        }
        if physics.bounce_factor <= 0.0 || physics.bounce_factor >= 1.0 {
            return Err(invalid("physics.bounce_factor", "must lie in (0, 1)"));
        }
        if physics.friction <= 0.0 || physics.friction > 1.0 {
            return Err(invalid("physics.friction", "must lie in (0, 1]"));
        }
        if physics.min_velocity < 0.0 {
            return Err(invalid("physics.min_velocity", "must not be negative"));
        }
        if self.controls.launch_divisor == 0.0 {
            return Err(invalid("controls.launch_divisor", "must not be zero"));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

/// Loader for named configurations in a base directory.
pub struct ConfigLoader {
    base_path: PathBuf,
}

impl ConfigLoader {
    /// Create a new loader; `base_path` holds `<name>.yaml` files.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Load a configuration by name (without .yaml extension).
    ///
    /// # Example
    /// ```ignore
    /// let loader = ConfigLoader::new("config");
    /// let moon = loader.load("moon")?;
    /// ```
    pub fn load(&self, name: &str) -> Result<SimulationConfig, ConfigError> {
        let path = self.base_path.join(format!("{}.yaml", name));
        if !path.exists() {
            return Err(ConfigError::NotFound(name.to_string()));
        }
        SimulationConfig::from_yaml_file(&path)
    }

    /// List all available configuration names, sorted.
    pub fn list(&self) -> Result<Vec<String>, ConfigError> {
        if !self.base_path.exists() {
            return Ok(vec![]);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if let Some(stem) = name.strip_suffix(".yaml") {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

// =============================================================================
// Tests
// =============================================================================
