use std::f64::consts::TAU;

use glam::DVec2;
use orbit_core::collisions::CollisionResolver;
use orbit_core::diagnostics::{center_of_mass, kinetic_energy, total_momentum};
use orbit_core::scenarios::{self, FIGURE_EIGHT_GRAVITY, FIGURE_EIGHT_PERIOD};
use orbit_core::{Body, EngineConfig, GravityEngine};

fn relative_drift(before: f64, after: f64) -> f64 {
    (after - before).abs() / before.abs()
}

#[test]
fn test_recentering_keeps_momentum_and_centroid_at_zero() {
    let mut engine = GravityEngine::unconstrained(&scenarios::figure_eight());

    for _ in 0..3000 {
        engine.update(0.1).unwrap();
    }

    assert!(engine.total_momentum().length() < 1e-9);
    assert!(engine.center_of_mass().length() < 1e-9);
}

#[test]
fn test_recentering_removes_initial_drift() {
    // Net momentum (10, 5) and centroid off the origin to start with
    let mut engine = GravityEngine::unconstrained(&scenarios::three_body());

    for _ in 0..500 {
        engine.update(0.1).unwrap();
        assert!(engine.total_momentum().length() < 1e-9);
        assert!(engine.center_of_mass().length() < 1e-9);
    }
}

#[test]
fn test_binary_conserves_energy_over_one_period() {
    // Equal masses on a circle of separation a around their barycentre
    let (g, m, a): (f64, f64, f64) = (100.0, 500.0, 100.0);
    let speed = (g * m / (2.0 * a)).sqrt();
    let bodies = vec![
        Body::new(1, DVec2::new(-a / 2.0, 0.0), DVec2::new(0.0, -speed), m),
        Body::new(2, DVec2::new(a / 2.0, 0.0), DVec2::new(0.0, speed), m),
    ];
    let config = EngineConfig::unconstrained().with_gravity(g).with_softening(0.01);
    let mut engine = GravityEngine::new(config, &bodies);

    let period = TAU * (a.powi(3) / (g * 2.0 * m)).sqrt();
    let steps = 20_000;
    let dt = period / steps as f64;

    let start = engine.total_energy();
    for _ in 0..steps {
        engine.update(dt).unwrap();
    }

    assert!(relative_drift(start, engine.total_energy()) < 0.05);
    // Back where it started after one revolution
    assert!(engine.bodies()[0].position.distance(bodies[0].position) < 1.0);
}

#[test]
fn test_planet_around_static_sun_conserves_energy() {
    let sun = Body::anchor(1, DVec2::ZERO, 10_000.0).with_radius(40.0);
    let planet = Body::new(2, DVec2::new(100.0, 0.0), DVec2::new(0.0, 100.0), 1.0)
        .with_radius(5.0);
    let mut engine = GravityEngine::anchored(&[sun, planet]);

    let period = TAU * (100.0f64.powi(3) / (100.0 * 10_000.0)).sqrt();
    let steps = 10_000;
    let dt = period / steps as f64;

    let start = engine.total_energy();
    for _ in 0..steps {
        engine.update(dt).unwrap();
    }

    assert!(relative_drift(start, engine.total_energy()) < 0.05);
}

#[test]
fn test_figure_eight_is_periodic() {
    let initial = scenarios::figure_eight();
    let config = EngineConfig::unconstrained()
        .with_gravity(FIGURE_EIGHT_GRAVITY)
        .with_softening(1e-4);
    let mut engine = GravityEngine::new(config, &initial);

    let steps = 6_000;
    let dt = FIGURE_EIGHT_PERIOD / steps as f64;
    for _ in 0..steps {
        engine.update(dt).unwrap();
    }

    for (now, then) in engine.bodies().iter().zip(&initial) {
        let miss = now.position.distance(then.position);
        assert!(miss < 1.0, "body {} missed its start by {}", now.id, miss);
    }
}

#[test]
fn test_head_on_collision_separates_and_loses_energy() {
    let mut bodies = vec![
        Body::new(1, DVec2::new(-9.0, 0.0), DVec2::new(3.0, 0.5), 4.0).with_radius(10.0),
        Body::new(2, DVec2::new(9.0, 0.0), DVec2::new(-3.0, 0.0), 4.0).with_radius(10.0),
    ];
    let momentum_before = total_momentum(&bodies);
    let kinetic_before = kinetic_energy(&bodies);

    let resolver = CollisionResolver::default();
    assert_eq!(resolver.resolve(&mut bodies), 1);

    let gap = bodies[0].position.distance(bodies[1].position);
    assert!(gap >= bodies[0].radius + bodies[1].radius + resolver.buffer - 1e-9);
    assert!((total_momentum(&bodies) - momentum_before).length() < 1e-9);
    assert!(kinetic_energy(&bodies) < kinetic_before);
}

#[test]
fn test_collisions_in_the_engine_conserve_momentum() {
    let bodies = vec![
        Body::new(1, DVec2::new(-60.0, 0.0), DVec2::new(20.0, 0.0), 2.0).with_radius(10.0),
        Body::new(2, DVec2::new(60.0, 0.0), DVec2::new(-20.0, 0.0), 6.0).with_radius(10.0),
    ];
    let config = EngineConfig::anchored().with_gravity(0.0);
    let mut engine = GravityEngine::new(config, &bodies);
    let momentum_before = engine.total_momentum();

    for _ in 0..1000 {
        engine.update(0.01).unwrap();
    }

    // Collided and bounced apart
    assert!(engine.bodies()[0].velocity.x < 0.0);
    assert!((engine.total_momentum() - momentum_before).length() < 1e-9);
    assert!(engine.energy().kinetic < kinetic_energy(&bodies));
}

#[test]
fn test_static_anchor_never_moves() {
    let anchor = Body::anchor(1, DVec2::new(10.0, -5.0), 1000.0).with_radius(20.0);
    let bullet = Body::new(2, DVec2::new(150.0, -5.0), DVec2::new(-40.0, 0.0), 5.0)
        .with_radius(5.0);
    let mut engine = GravityEngine::anchored(&[anchor, bullet]);
    let mut closest = f64::INFINITY;

    for _ in 0..3000 {
        engine.update(0.01).unwrap();
        let anchor = &engine.bodies()[0];
        assert_eq!(anchor.position, DVec2::new(10.0, -5.0));
        assert_eq!(anchor.velocity, DVec2::ZERO);
        closest = closest.min(anchor.position.distance(engine.bodies()[1].position));
    }

    // The bullet did reach contact range
    assert!(closest < 20.0 + 5.0 + 2.0 + 1.0);
}

#[test]
fn test_add_body_leaves_existing_bodies_untouched() {
    let mut engine = scenarios::Scenario::SolarSystem.engine().unwrap();
    for _ in 0..10 {
        engine.step_frame(1.0).unwrap();
    }
    let before = engine.bodies().to_vec();

    let earth = engine.body(4).unwrap().clone();
    let id = engine.add_body(scenarios::probe(&earth, 0.0, 25.0, 0.01));

    assert_eq!(engine.bodies().len(), before.len() + 1);
    assert!(before.iter().all(|b| b.id != id));
    for (now, then) in engine.bodies().iter().zip(&before) {
        assert_eq!(now.position, then.position);
        assert_eq!(now.velocity, then.velocity);
        assert_eq!(now.acceleration, then.acceleration);
    }

    let launched = engine.body(id).unwrap().position;
    engine.update(0.008).unwrap();
    assert_ne!(engine.body(id).unwrap().position, launched);
}

#[test]
fn test_doubling_gravity_doubles_accelerations() {
    let bodies = scenarios::three_body();
    let mut engine = GravityEngine::unconstrained(&bodies);
    let single: Vec<DVec2> = engine.bodies().iter().map(|b| b.acceleration).collect();

    engine.set_gravity(2.0 * engine.gravity());
    engine.load_bodies(&bodies);

    for (doubled, base) in engine.bodies().iter().map(|b| b.acceleration).zip(single) {
        assert!((doubled.length() - 2.0 * base.length()).abs() < 1e-12 * base.length().max(1.0));
        assert!((doubled - 2.0 * base).length() < 1e-12);
    }
}

#[test]
fn test_gravity_change_applies_on_next_step() {
    let bodies = scenarios::three_body();
    let mut weak = GravityEngine::unconstrained(&bodies);
    let mut strong = GravityEngine::unconstrained(&bodies);
    strong.set_gravity(200.0);

    weak.update(0.1).unwrap();
    strong.update(0.1).unwrap();

    let weak_pull = weak.bodies()[0].acceleration - weak.bodies()[1].acceleration;
    let strong_pull = strong.bodies()[0].acceleration - strong.bodies()[1].acceleration;
    assert!(strong_pull.length() > 1.5 * weak_pull.length());
}

#[test]
fn test_presets_survive_reloads() {
    let preset = scenarios::hierarchical();
    let mut engine = GravityEngine::anchored(&preset);

    for _ in 0..2 {
        for _ in 0..100 {
            engine.update(0.05).unwrap();
        }
        engine.load_bodies(&preset);
        assert_eq!(engine.bodies()[1].position, preset[1].position);
        assert!(engine.bodies()[1].trail.is_empty());
    }
    assert!(preset.iter().all(|b| b.trail.is_empty()));
    assert_eq!(center_of_mass(&preset), center_of_mass(engine.bodies()));
}
