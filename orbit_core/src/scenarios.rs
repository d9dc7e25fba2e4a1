//! Preset body lists and a builder for nested circular orbits
//!
//! Scenario data is handed to the engine by value; the engine copies it, so a
//! preset can be reloaded as often as needed.

use std::collections::HashMap;
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::analytics::circular_velocity;
use crate::body::Body;
use crate::config::EngineConfig;
use crate::constants;
use crate::engine::GravityEngine;
use crate::error::SimError;

const COLORS: [&str; 5] = ["#FF4136", "#2ECC40", "#0074D9", "#FFDC00", "#B10DC9"];

/// G for which the figure-eight initial conditions are periodic (G·m = 100)
pub const FIGURE_EIGHT_GRAVITY: f64 = 10.0;

/// Period of the figure-eight orbit at [`FIGURE_EIGHT_GRAVITY`]
pub const FIGURE_EIGHT_PERIOD: f64 = 632.591_398;

const SUN_MASS: f64 = 10_000.0;
const EARTH_MASS: f64 = 10.0;

/// Places bodies on circular orbits around previously placed ones.
///
/// A satellite's velocity is its parent's velocity plus its own circular
/// velocity relative to the parent, so moons follow their planets. Each
/// satellite's `parent_key` is the parent's label, which defaults to its key.
pub struct SystemBuilder {
    gravity: f64,
    bodies: Vec<Body>,
    keys: HashMap<String, usize>,
}

impl SystemBuilder {
    pub fn new(gravity: f64) -> Self {
        Self {
            gravity,
            bodies: Vec::new(),
            keys: HashMap::new(),
        }
    }

    fn insert(&mut self, key: &str, mut body: Body) {
        body.id = self.bodies.len() as u64 + 1;
        if body.label.is_none() {
            body.label = Some(key.to_string());
        }
        self.keys.insert(key.to_string(), self.bodies.len());
        self.bodies.push(body);
    }

    /// Add a body exactly where it is
    pub fn anchor(&mut self, key: &str, body: Body) -> &mut Self {
        self.insert(key, body);
        self
    }

    /// Add `body` on a circular orbit of `radius` around `parent`, at polar `angle`
    pub fn orbiting(
        &mut self,
        key: &str,
        parent: &str,
        body: Body,
        radius: f64,
        angle: f64,
    ) -> Result<&mut Self, SimError> {
        let index = *self
            .keys
            .get(parent)
            .ok_or_else(|| SimError::UnknownParent(parent.to_string()))?;
        let host = &self.bodies[index];

        let radial = DVec2::new(angle.cos(), angle.sin());
        let tangent = DVec2::new(-angle.sin(), angle.cos());
        let speed = circular_velocity(self.gravity, host.mass, radius);

        let mut body = body;
        body.position = host.position + radial * radius;
        body.velocity = host.velocity + tangent * speed;
        body.parent_key = host.label.clone();
        body.orbit_radius = Some(radius);

        self.insert(key, body);
        Ok(self)
    }

    pub fn build(&self) -> Vec<Body> {
        self.bodies.clone()
    }
}

/// The canonical three-body figure-eight choreography, scaled ×100 in length
pub fn figure_eight() -> Vec<Body> {
    let v = DVec2::new(0.466_203_685, 0.432_365_73);
    let x = DVec2::new(97.000_436, -24.308_753);

    vec![
        Body::new(1, x, v, 10.0).with_radius(15.0).with_hex_color(COLORS[0]),
        Body::new(2, -x, v, 10.0).with_radius(15.0).with_hex_color(COLORS[1]),
        Body::new(3, DVec2::ZERO, -2.0 * v, 10.0)
            .with_radius(15.0)
            .with_hex_color(COLORS[2]),
    ]
}

/// Three unequal masses with no special symmetry
pub fn three_body() -> Vec<Body> {
    vec![
        Body::new(1, DVec2::new(100.0, 0.0), DVec2::new(0.0, 1.0), 20.0)
            .with_radius(20.0)
            .with_hex_color(COLORS[0]),
        Body::new(2, DVec2::new(-100.0, 0.0), DVec2::new(0.0, -1.0), 15.0)
            .with_radius(18.0)
            .with_hex_color(COLORS[1]),
        Body::new(3, DVec2::new(0.0, 150.0), DVec2::new(1.0, 0.0), 10.0)
            .with_radius(15.0)
            .with_hex_color(COLORS[2]),
    ]
}

/// A slowly drifting massive body carrying two light satellites
pub fn hierarchical() -> Vec<Body> {
    vec![
        Body::new(1, DVec2::ZERO, DVec2::new(0.5, 0.0), 1000.0)
            .with_radius(30.0)
            .with_hex_color("#FFD700"),
        Body::new(2, DVec2::new(200.0, 0.0), DVec2::new(0.0, 22.0), 20.0)
            .with_radius(8.0)
            .with_hex_color("#00BFFF"),
        Body::new(3, DVec2::new(-200.0, 0.0), DVec2::new(0.0, -22.0), 20.0)
            .with_radius(8.0)
            .with_hex_color("#FF6B6B"),
    ]
}

/// A static Sun with six planets and the Moon riding on Earth
pub fn solar_system() -> Result<Vec<Body>, SimError> {
    let g = constants::G;
    let planet = |mass: f64, radius: f64, color: &str| {
        Body::new(0, DVec2::ZERO, DVec2::ZERO, mass)
            .with_radius(radius)
            .with_hex_color(color)
    };

    let mut system = SystemBuilder::new(g);
    system.anchor(
        "sun",
        Body::anchor(0, DVec2::ZERO, SUN_MASS)
            .with_radius(40.0)
            .with_hex_color("#FFD700")
            .with_label("Sun"),
    );
    system
        .orbiting("mercury", "sun", planet(0.5, 4.0, "#A5A5A5"), 60.0, 0.0)?
        .orbiting("venus", "sun", planet(8.0, 7.0, "#E3BB76"), 110.0, 0.0)?
        .orbiting("earth", "sun", planet(EARTH_MASS, 8.0, "#4B9CD3"), 150.0, 0.0)?
        .orbiting("moon", "earth", planet(0.1, 2.0, "#DDDDDD"), 8.0, 0.0)?
        .orbiting("mars", "sun", planet(1.0, 5.0, "#E27B58"), 230.0, 0.0)?
        .orbiting("jupiter", "sun", planet(3170.0, 20.0, "#C88B3A"), 400.0, 0.0)?;

    Ok(system.build())
}

/// Initialize with random particles in a disk around a central mass
pub fn disk(count: usize, seed: u64) -> Vec<Body> {
    let mut rng = StdRng::seed_from_u64(seed);
    let central_mass = 5_000.0;
    let mut bodies = vec![Body::new(1, DVec2::ZERO, DVec2::ZERO, central_mass)
        .with_radius(25.0)
        .with_hex_color("#FFD700")];

    for i in 0..count {
        let distance = 80.0 + rng.gen::<f64>() * 220.0;
        let angle: f64 = rng.gen::<f64>() * TAU;
        let position = DVec2::new(angle.cos() * distance, angle.sin() * distance);

        // Orbital velocity with some randomness
        let orbital_speed = circular_velocity(constants::G, central_mass, distance);
        let speed_variation = 0.9 + rng.gen::<f64>() * 0.2;
        let velocity = DVec2::new(-angle.sin(), angle.cos()) * orbital_speed * speed_variation;

        let mass = 0.5 + rng.gen::<f64>() * 2.0;
        bodies.push(Body::new(i as u64 + 2, position, velocity, mass).with_radius(2.0));
    }
    bodies
}

/// A probe launched from the surface of `from` along `heading` (radians).
///
/// The probe starts just outside collision range and inherits its launcher's
/// velocity. Its id is replaced when injected with `GravityEngine::add_body`.
pub fn probe(from: &Body, heading: f64, speed: f64, mass: f64) -> Body {
    let radius = 2.0;
    let direction = DVec2::new(heading.cos(), heading.sin());
    let clearance = from.radius + radius + 2.0 * constants::COLLISION_BUFFER;

    Body::new(0, from.position + direction * clearance, from.velocity + direction * speed, mass)
        .with_radius(radius)
        .with_color([1.0, 1.0, 1.0, 1.0])
        .with_label("Probe")
}

/// Named presets selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    FigureEight,
    ThreeBody,
    Hierarchical,
    SolarSystem,
    Disk { count: usize, seed: u64 },
}

impl Scenario {
    pub const NAMES: [&'static str; 5] = ["figure8", "random", "hierarchical", "solar", "disk"];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::FigureEight => "figure8",
            Scenario::ThreeBody => "random",
            Scenario::Hierarchical => "hierarchical",
            Scenario::SolarSystem => "solar",
            Scenario::Disk { .. } => "disk",
        }
    }

    /// Engine settings the preset was tuned for
    pub fn config(&self) -> EngineConfig {
        match self {
            Scenario::FigureEight => {
                EngineConfig::unconstrained().with_gravity(FIGURE_EIGHT_GRAVITY)
            }
            Scenario::ThreeBody | Scenario::Disk { .. } => EngineConfig::unconstrained(),
            Scenario::Hierarchical | Scenario::SolarSystem => EngineConfig::anchored(),
        }
    }

    pub fn bodies(&self) -> Result<Vec<Body>, SimError> {
        Ok(match *self {
            Scenario::FigureEight => figure_eight(),
            Scenario::ThreeBody => three_body(),
            Scenario::Hierarchical => hierarchical(),
            Scenario::SolarSystem => solar_system()?,
            Scenario::Disk { count, seed } => disk(count, seed),
        })
    }

    pub fn engine(&self) -> Result<GravityEngine, SimError> {
        Ok(GravityEngine::new(self.config(), &self.bodies()?))
    }
}

impl FromStr for Scenario {
    type Err = SimError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "figure8" | "figure-eight" => Ok(Scenario::FigureEight),
            "random" | "three-body" => Ok(Scenario::ThreeBody),
            "hierarchical" => Ok(Scenario::Hierarchical),
            "solar" | "solar-system" => Ok(Scenario::SolarSystem),
            "disk" => Ok(Scenario::Disk { count: 200, seed: 7 }),
            _ => Err(SimError::UnknownScenario(name.to_string())),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
