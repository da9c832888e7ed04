use approx::assert_relative_eq;

use bounce_core::collision::Boundary;
use bounce_core::{InputEvent, Key, SimulationConfig, Simulator, Vec2};

/// Simulator on the classic 400×400 canvas
pub fn classic() -> Simulator {
    Simulator::new(SimulationConfig::default()).expect("default config is valid")
}

/// Step until the body settles, giving up after `limit` ticks
pub fn run_until_rest(sim: &mut Simulator, limit: usize) -> Option<usize> {
    for tick in 1..=limit {
        sim.step();
        if sim.body().at_rest {
            return Some(tick);
        }
    }
    None
}

fn assert_contained(sim: &Simulator) {
    let body = sim.body();
    let canvas = sim.config().canvas;
    let r = body.radius;

    assert!(
        body.pos.x >= r && body.pos.x <= canvas.width - r,
        "x escaped the walls: {}",
        body.pos.x
    );
    assert!(
        body.pos.y >= r && body.pos.y <= canvas.floor_y() - r,
        "y escaped floor/ceiling: {}",
        body.pos.y
    );
}

// ==================================================================================
// Rest
// ==================================================================================

#[test]
fn body_eventually_rests_on_the_floor() {
    let mut sim = classic();

    let ticks = run_until_rest(&mut sim, 5_000).expect("ball should come to rest");

    assert!(ticks > 37, "cannot rest before the first floor contact");
    assert_eq!(sim.body().vel, Vec2::ZERO);
    assert_eq!(sim.body().pos.y, sim.config().canvas.floor_y() - sim.body().radius);
}

#[test]
fn rest_is_idempotent() {
    let mut sim = classic();
    run_until_rest(&mut sim, 5_000).expect("ball should come to rest");
    let rested = *sim.body();
    let shadow = *sim.shadow().unwrap();

    for _ in 0..500 {
        sim.step();
        assert_eq!(*sim.body(), rested);
    }
    assert_eq!(*sim.shadow().unwrap(), shadow);
}

#[test]
fn rest_trigger_from_just_above_floor() {
    let mut sim = classic();
    let floor_y = sim.config().canvas.floor_y();

    sim.set_motion(Vec2::new(200.0, floor_y - 20.0 - 0.1), Vec2::new(0.2, 0.0));
    sim.step();

    // vy: 0 + 0.5 -> reflected to -0.4, below the 0.5 threshold
    let body = sim.body();
    assert!(body.at_rest);
    assert_eq!(body.vel.x, 0.0);
    assert_eq!(body.vel.y, 0.0);
    assert_eq!(body.pos.y, floor_y - 20.0);
    assert_eq!(sim.last_contacts(), &[Boundary::Floor]);
}

#[test]
fn faster_landing_keeps_bouncing() {
    let mut sim = classic();
    let floor_y = sim.config().canvas.floor_y();

    sim.set_motion(Vec2::new(200.0, floor_y - 20.0 - 0.1), Vec2::new(0.2, 0.3));
    sim.step();

    // (0.3 + 0.5) * 0.8 = 0.64 is above the threshold
    assert!(!sim.body().at_rest);
    assert_relative_eq!(sim.body().vel.y, -0.64, epsilon = 1e-12);
}

#[test]
fn sliding_body_does_not_rest_until_slow() {
    let mut sim = classic();
    let floor_y = sim.config().canvas.floor_y();

    sim.set_motion(Vec2::new(100.0, floor_y - 20.0), Vec2::new(1.0, 0.0));
    sim.step();

    assert!(!sim.body().at_rest);
    assert_eq!(sim.body().vel.y, 0.0);
    assert_relative_eq!(sim.body().vel.x, 0.99, epsilon = 1e-12);
}

// ==================================================================================
// Falling and bouncing
// ==================================================================================

#[test]
fn vertical_velocity_grows_by_gravity_while_falling() {
    let mut sim = classic();
    let gravity = sim.config().physics.gravity;

    for _ in 0..30 {
        let before = sim.body().vel.y;
        sim.step();
        assert!(sim.last_contacts().is_empty());
        assert_eq!(sim.body().vel.y, before + gravity);
    }
}

#[test]
fn floor_bounce_damps_speed() {
    let mut sim = classic();
    let bounce = sim.config().physics.bounce_factor;
    let gravity = sim.config().physics.gravity;

    sim.set_motion(Vec2::new(200.0, 370.0), Vec2::new(1.0, 6.0));
    let before_reflection = sim.body().vel.y + gravity;
    sim.step();

    assert_eq!(sim.last_contacts(), &[Boundary::Floor]);
    assert!(sim.body().vel.y < 0.0);
    assert_relative_eq!(sim.body().vel.y.abs(), before_reflection * bounce, epsilon = 1e-12);
}

#[test]
fn ceiling_bounce_damps_speed() {
    let mut sim = classic();
    let bounce = sim.config().physics.bounce_factor;

    sim.set_motion(Vec2::new(200.0, 30.0), Vec2::new(0.0, -15.0));
    let before_reflection = sim.body().vel.y + sim.config().physics.gravity;
    sim.step();

    assert_eq!(sim.last_contacts(), &[Boundary::Ceiling]);
    assert!(sim.body().vel.y > 0.0);
    assert_relative_eq!(sim.body().vel.y, before_reflection.abs() * bounce, epsilon = 1e-12);
}

#[test]
fn corner_contact_corrects_both_axes() {
    let mut sim = classic();

    sim.set_motion(Vec2::new(375.0, 370.0), Vec2::new(10.0, 10.0));
    sim.step();

    assert_eq!(sim.last_contacts(), &[Boundary::Floor, Boundary::RightWall]);
    assert_eq!(sim.body().pos, Vec2::new(380.0, 375.0));
    assert!(sim.body().vel.x < 0.0);
    assert!(sim.body().vel.y < 0.0);
}

#[test]
fn body_stays_contained_under_random_looking_input() {
    let mut sim = classic();
    let keys = ["up", "left", "right", "up", "space", "space", "right", "r"];
    let presses = [
        (-50.0, 10.0),
        (450.0, 390.0),
        (0.0, 0.0),
        (400.0, 400.0),
        (123.0, 77.0),
    ];

    for tick in 0..3_000 {
        if tick % 37 == 0 {
            sim.on_key_press(keys[(tick / 37) % keys.len()]);
        }
        if tick % 151 == 0 {
            let (x, y) = presses[(tick / 151) % presses.len()];
            sim.on_pointer_press(x, y);
        }
        sim.step();
        assert_contained(&sim);
    }
}

// ==================================================================================
// Input handlers
// ==================================================================================

#[test]
fn reset_restores_spawn_state() {
    let mut sim = classic();

    sim.step_n(250);
    sim.on_pointer_press(20.0, 100.0);
    sim.on_key_press("up");
    sim.step_n(13);

    assert!(sim.on_key_press("r"));

    let body = sim.body();
    assert_eq!(body.pos, Vec2::new(200.0, 30.0));
    assert_eq!(body.vel, Vec2::new(3.0, 0.0));
    assert_eq!(body.radius, 20.0);
    assert!(!body.at_rest);
}

#[test]
fn reset_wakes_a_resting_body() {
    let mut sim = classic();
    run_until_rest(&mut sim, 5_000).expect("ball should come to rest");

    sim.handle(InputEvent::KeyPress(Key::Reset));

    assert!(!sim.body().at_rest);
    sim.step();
    assert_eq!(sim.body().pos.y, 30.5);
}

#[test]
fn pointer_press_teleports_and_launches() {
    let mut sim = classic();
    run_until_rest(&mut sim, 5_000).expect("ball should come to rest");

    sim.on_pointer_press(100.0, 50.0);

    let body = sim.body();
    assert_eq!(body.pos, Vec2::new(100.0, 50.0));
    assert_relative_eq!(body.vel.x, -10.0 / 3.0, epsilon = 1e-12);
    assert_eq!(body.vel.y, 0.0);
    assert!(!body.at_rest);
}

#[test]
fn pointer_press_right_of_center_launches_right() {
    let mut sim = classic();
    sim.on_pointer_press(350.0, 200.0);

    assert_eq!(sim.body().vel, Vec2::new(5.0, 0.0));
}

#[test]
fn pause_toggle_wakes_resting_body() {
    let mut sim = classic();
    run_until_rest(&mut sim, 5_000).expect("ball should come to rest");

    assert!(sim.on_key_press("space"));
    assert!(!sim.body().at_rest);

    // With zero velocity it falls onto the floor and settles again
    sim.step();
    assert!(sim.body().at_rest);
}

#[test]
fn unbound_keys_change_nothing() {
    let mut sim = classic();
    sim.step_n(5);
    let before = *sim.body();

    for name in ["a", "enter", "R", "down", "tab"] {
        assert!(!sim.on_key_press(name));
    }

    assert_eq!(*sim.body(), before);
}

// ==================================================================================
// Configurations
// ==================================================================================

#[test]
fn custom_canvas_uses_its_own_center_for_launch() {
    let config = SimulationConfig::from_yaml_str(
        "canvas:\n  width: 800.0\n  height: 400.0\nball:\n  spawn: { x: 400.0, y: 50.0 }\n  velocity: { x: 0.0, y: 0.0 }\n  radius: 10.0\n",
    )
    .unwrap();
    let mut sim = Simulator::new(config).unwrap();

    sim.on_pointer_press(460.0, 100.0);

    assert_eq!(sim.body().vel.x, 2.0);
    assert_eq!(sim.body().radius, 10.0);
}
