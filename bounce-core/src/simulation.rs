//! The bouncing-body simulator.
//!
//! Owns the body, its derived shadow and the immutable run configuration.
//! The host drives it: `step()` once per tick, the input handlers whenever
//! an event arrives, and after each call it reads `body()` and `shadow()`
//! to redraw. Nothing here draws or knows about wall-clock time.
//!
//! ```text
//!  host loop ──step()──────────►┐
//!  pointer  ──on_pointer_press─►├─► Simulator ──► body(), shadow()
//!  keyboard ──on_key_press─────►┘
//! ```

use log::{debug, trace};

use crate::collision::{Boundary, BoundaryDetector, ContactResolver};
use crate::config::{ConfigError, SimulationConfig};
use crate::forces::CanvasForces;
use crate::input::{InputEvent, Key};
use crate::integrator::SemiImplicitEuler;
use crate::shadow::Shadow;
use crate::types::{Body, Vec2};

/// Single-body simulator driven by host ticks and input events.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
    body: Body,
    shadow: Option<Shadow>,
    forces: CanvasForces,
    detector: BoundaryDetector,
    resolver: ContactResolver,
    ticks: u64,
    last_contacts: Vec<Boundary>,
}

impl Simulator {
    /// Create a simulator with the body at its spawn point.
    ///
    /// Fails when the configuration is unusable (non-positive radius or
    /// canvas size, a ball that does not fit, out-of-range physics).
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let body = config.ball.spawn_body();
        let mut sim = Self {
            config,
            body,
            shadow: None,
            forces: CanvasForces::new(&config.physics),
            detector: BoundaryDetector::new(config.canvas),
            resolver: ContactResolver::new(&config.physics),
            ticks: 0,
            last_contacts: Vec::new(),
        };
        sim.refresh_shadow();
        Ok(sim)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Current shadow, `None` when shadows are disabled.
    pub fn shadow(&self) -> Option<&Shadow> {
        self.shadow.as_ref()
    }

    /// Number of `step()` calls so far, including ones skipped at rest.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Boundaries touched during the most recent step.
    pub fn last_contacts(&self) -> &[Boundary] {
        &self.last_contacts
    }

    /// Advance the simulation by one tick.
    pub fn step(&mut self) {
        self.ticks += 1;
        self.last_contacts.clear();

        if self.body.at_rest {
            return;
        }

        let moved = SemiImplicitEuler::step(&self.body, &self.forces);
        let resolution = self.resolver.resolve_all(&moved, &self.detector);

        if resolution.came_to_rest {
            debug!(
                "body came to rest at ({:.2}, {:.2}) after {} ticks",
                resolution.body.pos.x, resolution.body.pos.y, self.ticks
            );
        }

        self.body = resolution.body;
        self.last_contacts = resolution.contacts;
        self.refresh_shadow();
    }

    /// Advance by several ticks.
    pub fn step_n(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.step();
        }
    }

    /// Teleport the body to the pointer and launch it sideways.
    ///
    /// The launch speed grows with the distance from the canvas center:
    /// `vx = (x - width / 2) / launch_divisor`.
    pub fn on_pointer_press(&mut self, x: f64, y: f64) {
        let launch = (x - self.config.canvas.center_x()) / self.config.controls.launch_divisor;

        self.body.pos = Vec2::new(x, y);
        self.body.vel = Vec2::new(launch, 0.0);
        self.body.at_rest = false;
        self.refresh_shadow();
    }

    /// Handle a key by its host name. Returns `false` for unbound keys,
    /// which leave the state untouched.
    pub fn on_key_press(&mut self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.press(key);
                true
            }
            None => {
                trace!("ignoring unbound key {:?}", name);
                false
            }
        }
    }

    /// Apply a keyboard action.
    pub fn press(&mut self, key: Key) {
        let controls = self.config.controls;

        match key {
            Key::PauseToggle => {
                self.body.at_rest = !self.body.at_rest;
            }
            Key::Reset => {
                debug!("resetting body to spawn");
                self.body = self.config.ball.spawn_body();
            }
            Key::ImpulseUp => {
                self.body.vel.y -= controls.impulse_up;
                self.body.at_rest = false;
            }
            Key::ImpulseLeft => {
                self.body.vel.x -= controls.impulse_horizontal;
                self.body.at_rest = false;
            }
            Key::ImpulseRight => {
                self.body.vel.x += controls.impulse_horizontal;
                self.body.at_rest = false;
            }
        }

        self.refresh_shadow();
    }

    /// Dispatch a raw input event.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerPress { x, y } => self.on_pointer_press(x, y),
            InputEvent::KeyPress(key) => self.press(key),
        }
    }

    /// Overwrite position and velocity, waking the body.
    pub fn set_motion(&mut self, pos: Vec2, vel: Vec2) {
        self.body.pos = pos;
        self.body.vel = vel;
        self.body.at_rest = false;
        self.refresh_shadow();
    }

    fn refresh_shadow(&mut self) {
        self.shadow = Shadow::derive(&self.body, &self.config.canvas, &self.config.shadow);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn classic() -> Simulator {
        Simulator::new(SimulationConfig::default()).unwrap()
    }

    #[test]
    fn test_starts_at_spawn() {
        let sim = classic();

        assert_eq!(sim.body().pos, Vec2::new(200.0, 30.0));
        assert_eq!(sim.body().vel, Vec2::new(3.0, 0.0));
        assert_eq!(sim.body().radius, 20.0);
        assert!(!sim.body().at_rest);
        assert_eq!(sim.ticks(), 0);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = SimulationConfig::default();
        config.ball.radius = 0.0;

        assert!(matches!(
            Simulator::new(config),
            Err(ConfigError::Invalid { field: "ball.radius", .. })
        ));
    }

    #[test]
    fn test_first_step() {
        let mut sim = classic();
        sim.step();

        let body = sim.body();
        assert_relative_eq!(body.vel.x, 2.97, epsilon = 1e-12);
        assert_relative_eq!(body.vel.y, 0.5);
        assert_relative_eq!(body.pos.x, 202.97, epsilon = 1e-12);
        assert_relative_eq!(body.pos.y, 30.5);
        assert!(sim.last_contacts().is_empty());
        assert_eq!(sim.ticks(), 1);
    }

    #[test]
    fn test_shadow_tracks_body() {
        let mut sim = classic();
        sim.step_n(7);

        let shadow = *sim.shadow().unwrap();
        let expected =
            Shadow::derive(sim.body(), &sim.config().canvas, &sim.config().shadow).unwrap();
        assert_eq!(shadow, expected);
        assert_eq!(shadow.center.x, sim.body().pos.x);
    }

    #[test]
    fn test_shadow_refreshed_by_handlers() {
        let mut sim = classic();
        sim.on_pointer_press(50.0, 200.0);

        assert_eq!(sim.shadow().unwrap().center.x, 50.0);
        assert_eq!(sim.shadow().unwrap().opacity, 35);
    }

    #[test]
    fn test_disabled_shadow() {
        let mut config = SimulationConfig::default();
        config.shadow.enabled = false;
        let mut sim = Simulator::new(config).unwrap();
        sim.step();

        assert!(sim.shadow().is_none());
    }

    #[test]
    fn test_pause_toggle_freezes_and_resumes() {
        let mut sim = classic();
        sim.step();
        let before = *sim.body();

        sim.press(Key::PauseToggle);
        sim.step_n(10);
        assert_eq!(sim.body().pos, before.pos);
        assert_eq!(sim.body().vel, before.vel);

        sim.press(Key::PauseToggle);
        sim.step();
        assert_ne!(sim.body().pos, before.pos);
    }

    #[test]
    fn test_impulses_wake_and_push() {
        let mut sim = classic();
        sim.press(Key::PauseToggle);

        sim.press(Key::ImpulseUp);
        assert!(!sim.body().at_rest);
        assert_eq!(sim.body().vel, Vec2::new(3.0, -10.0));

        sim.press(Key::ImpulseLeft);
        assert_eq!(sim.body().vel, Vec2::new(-2.0, -10.0));

        sim.press(Key::ImpulseRight);
        sim.press(Key::ImpulseRight);
        assert_eq!(sim.body().vel, Vec2::new(8.0, -10.0));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut sim = classic();
        sim.step_n(3);
        let before = *sim.body();

        assert!(!sim.on_key_press("q"));
        assert!(!sim.on_key_press("escape"));
        assert_eq!(*sim.body(), before);
    }

    #[test]
    fn test_handle_dispatches_events() {
        let mut sim = classic();

        sim.handle(InputEvent::PointerPress { x: 300.0, y: 100.0 });
        assert_eq!(sim.body().pos, Vec2::new(300.0, 100.0));

        sim.handle(InputEvent::KeyPress(Key::Reset));
        assert_eq!(sim.body().pos, Vec2::new(200.0, 30.0));
    }

    #[test]
    fn test_ceiling_bounce_after_big_impulse() {
        let mut sim = classic();
        sim.set_motion(Vec2::new(200.0, 25.0), Vec2::new(0.0, -12.0));
        sim.step();

        // vy = -12 + 0.5 = -11.5, reflected to 9.2
        assert_eq!(sim.last_contacts(), &[Boundary::Ceiling]);
        assert_eq!(sim.body().pos.y, 20.0);
        assert_relative_eq!(sim.body().vel.y, 9.2, epsilon = 1e-12);
    }
}
