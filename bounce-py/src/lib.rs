//! Python bindings for the bounce-core simulator.
//!
//! The Python side owns the canvas and the event loop; it forwards ticks and
//! input events and redraws from the state it reads back:
//!
//! ```python
//! from bounce_physics import Simulator
//!
//! sim = Simulator()                      # classic 400x400 canvas
//!
//! def onStep():
//!     sim.step()
//!     pos = sim.ball_position()
//!     ball.centerX, ball.centerY = pos.x, pos.y
//!
//! def onMousePress(x, y):
//!     sim.on_mouse_press(x, y)
//!
//! def onKeyPress(key):
//!     sim.on_key_press(key)
//! ```

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use bounce_core::animation::{Animate, AnimationScene as CoreAnimationScene};
use bounce_core::config::{ConfigError, ConfigLoader, SimulationConfig};
use bounce_core::shadow::Shadow as CoreShadow;
use bounce_core::simulation::Simulator as CoreSimulator;
use bounce_core::types::Vec2 as CoreVec2;

fn to_py_err(err: ConfigError) -> PyErr {
    match err {
        ConfigError::IoError(_) | ConfigError::NotFound(_) => PyIOError::new_err(err.to_string()),
        ConfigError::ParseError(_) | ConfigError::Invalid { .. } => {
            PyValueError::new_err(err.to_string())
        }
    }
}

/// 2D vector for positions and velocities.
#[pyclass]
#[derive(Clone, Copy)]
pub struct Vec2 {
    #[pyo3(get, set)]
    pub x: f64,
    #[pyo3(get, set)]
    pub y: f64,
}

#[pymethods]
impl Vec2 {
    #[new]
    fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn __repr__(&self) -> String {
        format!("Vec2({:.4}, {:.4})", self.x, self.y)
    }

    fn magnitude(&self) -> f64 {
        CoreVec2::from(*self).magnitude()
    }

    fn to_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl From<CoreVec2> for Vec2 {
    fn from(v: CoreVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vec2> for CoreVec2 {
    fn from(v: Vec2) -> Self {
        CoreVec2::new(v.x, v.y)
    }
}

/// Shadow oval attributes, read-only.
#[pyclass(frozen)]
#[derive(Clone, Copy)]
pub struct Shadow {
    #[pyo3(get)]
    pub center_x: f64,
    #[pyo3(get)]
    pub center_y: f64,
    #[pyo3(get)]
    pub width: f64,
    #[pyo3(get)]
    pub height: f64,
    #[pyo3(get)]
    pub opacity: u8,
}

#[pymethods]
impl Shadow {
    fn __repr__(&self) -> String {
        format!(
            "Shadow(center=({:.2}, {:.2}), width={:.2}, opacity={})",
            self.center_x, self.center_y, self.width, self.opacity
        )
    }
}

impl From<&CoreShadow> for Shadow {
    fn from(s: &CoreShadow) -> Self {
        Self {
            center_x: s.center.x,
            center_y: s.center.y,
            width: s.width,
            height: s.height,
            opacity: s.opacity,
        }
    }
}

/// Main simulation class.
///
/// Handles physics stepping, input events and shadow derivation.
#[pyclass]
pub struct Simulator {
    inner: CoreSimulator,
}

#[pymethods]
impl Simulator {
    /// Create a simulator from a YAML file, or the classic defaults when no
    /// path is given.
    #[new]
    #[pyo3(signature = (config_path=None))]
    fn new(config_path: Option<&str>) -> PyResult<Self> {
        let config = match config_path {
            Some(path) => SimulationConfig::from_yaml_file(path).map_err(to_py_err)?,
            None => SimulationConfig::default(),
        };
        let inner = CoreSimulator::new(config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Create a simulator from a named configuration in `directory`.
    #[staticmethod]
    fn from_named(directory: &str, name: &str) -> PyResult<Self> {
        let config = ConfigLoader::new(directory).load(name).map_err(to_py_err)?;
        let inner = CoreSimulator::new(config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Names of the configurations available in `directory`.
    #[staticmethod]
    fn available_configs(directory: &str) -> PyResult<Vec<String>> {
        ConfigLoader::new(directory).list().map_err(to_py_err)
    }

    /// Number of steps taken so far.
    #[getter]
    fn ticks(&self) -> u64 {
        self.inner.ticks()
    }

    #[getter]
    fn at_rest(&self) -> bool {
        self.inner.body().at_rest
    }

    #[getter]
    fn radius(&self) -> f64 {
        self.inner.body().radius
    }

    /// Canvas size as (width, height).
    #[getter]
    fn canvas_size(&self) -> (f64, f64) {
        let canvas = self.inner.config().canvas;
        (canvas.width, canvas.height)
    }

    /// Y coordinate of the ground line.
    #[getter]
    fn floor_y(&self) -> f64 {
        self.inner.config().canvas.floor_y()
    }

    /// Get ball position as Vec2.
    fn ball_position(&self) -> Vec2 {
        self.inner.body().pos.into()
    }

    /// Get ball velocity as Vec2 (pixels per step).
    fn ball_velocity(&self) -> Vec2 {
        self.inner.body().vel.into()
    }

    /// Current shadow, or None when shadows are disabled.
    fn shadow(&self) -> Option<Shadow> {
        self.inner.shadow().map(Shadow::from)
    }

    /// Boundaries hit during the last step: "floor", "ceiling", "left_wall", "right_wall".
    fn last_contacts(&self) -> Vec<&'static str> {
        self.inner.last_contacts().iter().map(|b| b.name()).collect()
    }

    /// Advance the simulation by one step.
    fn step(&mut self) {
        self.inner.step();
    }

    /// Run multiple steps at once (more efficient).
    fn step_n(&mut self, steps: usize) {
        self.inner.step_n(steps);
    }

    /// Move the ball to the click and launch it.
    fn on_mouse_press(&mut self, x: f64, y: f64) {
        self.inner.on_pointer_press(x, y);
    }

    /// Handle a key by name. Returns False for keys with no binding.
    fn on_key_press(&mut self, key: &str) -> bool {
        self.inner.on_key_press(key)
    }

    /// Overwrite ball position and velocity.
    fn set_ball_motion(&mut self, x: f64, y: f64, vx: f64, vy: f64) {
        self.inner.set_motion(CoreVec2::new(x, y), CoreVec2::new(vx, vy));
    }

    /// Get current state as dict for easy inspection.
    fn state_dict(&self) -> PyResult<PyObject> {
        Python::with_gil(|py| {
            let body = self.inner.body();
            let dict = pyo3::types::PyDict::new_bound(py);
            dict.set_item("ticks", self.inner.ticks())?;
            dict.set_item("ball_x", body.pos.x)?;
            dict.set_item("ball_y", body.pos.y)?;
            dict.set_item("ball_vx", body.vel.x)?;
            dict.set_item("ball_vy", body.vel.y)?;
            dict.set_item("ball_speed", body.speed())?;
            dict.set_item("at_rest", body.at_rest)?;
            if let Some(shadow) = self.inner.shadow() {
                dict.set_item("shadow_x", shadow.center.x)?;
                dict.set_item("shadow_width", shadow.width)?;
                dict.set_item("shadow_opacity", shadow.opacity)?;
            }
            Ok(dict.into_any().unbind())
        })
    }
}

/// The shape animation demo: shuttle, pulse, spinner, colour cycle, orbit.
#[pyclass]
#[derive(Default)]
pub struct AnimationScene {
    inner: CoreAnimationScene,
}

#[pymethods]
impl AnimationScene {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    fn step(&mut self) {
        self.inner.advance();
    }

    fn step_n(&mut self, steps: usize) {
        self.inner.advance_n(steps);
    }

    #[getter]
    fn ticks(&self) -> u64 {
        self.inner.ticks()
    }

    #[getter]
    fn shuttle_x(&self) -> f64 {
        self.inner.shuttle.x
    }

    #[getter]
    fn pulse_size(&self) -> f64 {
        self.inner.pulse.size
    }

    #[getter]
    fn spin_angle(&self) -> f64 {
        self.inner.spinner.angle
    }

    #[getter]
    fn color(&self) -> String {
        self.inner.colors.current().to_string()
    }

    fn orbit_position(&self) -> Vec2 {
        self.inner.orbit.position().into()
    }
}

/// Python module definition.
#[pymodule]
fn bounce_physics(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();
    m.add_class::<Vec2>()?;
    m.add_class::<Shadow>()?;
    m.add_class::<Simulator>()?;
    m.add_class::<AnimationScene>()?;
    Ok(())
}
