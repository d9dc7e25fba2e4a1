//! Core of the orbit simulator
//!
//! This crate holds the 2D n-body engine shared by the headless driver and any
//! front-end that wants to draw bodies: softened gravity, velocity-Verlet
//! integration, collision response, frame recentering and energy diagnostics.

pub mod analytics;
pub mod body;
pub mod collisions;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod forces;
pub mod frame;
pub mod integrator;
pub mod scenarios;
pub mod trail;

pub use body::{Body, BodyId};
pub use config::{EngineConfig, EnginePolicy};
pub use diagnostics::EnergyReport;
pub use engine::GravityEngine;
pub use error::SimError;
pub use scenarios::Scenario;
pub use trail::Trail;

/// Physical and numerical constants used by the engine
pub mod constants {
    /// Gravitational constant (scaled for visualization)
    pub const G: f64 = 100.0;

    /// Softening length; bounds the force when two bodies nearly coincide
    pub const SOFTENING: f64 = 5.0;

    /// Trails are sampled once every this many micro-steps
    pub const TRAIL_SAMPLE_INTERVAL: u64 = 3;

    /// Trail capacity for the recentered, collision-free policy
    pub const UNCONSTRAINED_TRAIL_CAPACITY: usize = 50;

    /// Trail capacity for the anchored, colliding policy
    pub const ANCHORED_TRAIL_CAPACITY: usize = 80;

    /// Extra gap kept between two colliding surfaces
    pub const COLLISION_BUFFER: f64 = 2.0;

    /// Coefficient of restitution (0 = inelastic, 1 = elastic)
    pub const RESTITUTION: f64 = 0.6;

    /// Micro-steps taken per rendered frame
    pub const MICRO_STEPS_PER_FRAME: usize = 5;

    /// Micro-step size at a time scale of 1
    pub const BASE_MICRO_STEP: f64 = 0.008;
}
