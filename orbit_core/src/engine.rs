//! The engine façade: owns the bodies and advances them one micro-step at a time

use glam::DVec2;
use log::{debug, warn};

use crate::body::{Body, BodyId};
use crate::collisions::CollisionResolver;
use crate::config::{EngineConfig, EnginePolicy};
use crate::constants;
use crate::diagnostics::{self, EnergyReport};
use crate::error::SimError;
use crate::forces::SoftenedGravity;
use crate::frame;
use crate::integrator;

/// The physics simulation state.
///
/// Bodies handed to the engine are always deep-copied, so later trail growth
/// and position updates never reach the caller's preset data.
#[derive(Debug, Clone)]
pub struct GravityEngine {
    bodies: Vec<Body>,
    config: EngineConfig,
    step_count: u64,
    next_id: BodyId,
}

impl GravityEngine {
    pub fn new(config: EngineConfig, initial_bodies: &[Body]) -> Self {
        let mut engine = Self {
            bodies: Vec::new(),
            config,
            step_count: 0,
            next_id: 1,
        };
        engine.load_bodies(initial_bodies);
        engine
    }

    /// Recentered engine without collisions
    pub fn unconstrained(initial_bodies: &[Body]) -> Self {
        Self::new(EngineConfig::unconstrained(), initial_bodies)
    }

    /// Engine with static anchors and collisions, no recentering
    pub fn anchored(initial_bodies: &[Body]) -> Self {
        Self::new(EngineConfig::anchored(), initial_bodies)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn policy(&self) -> EnginePolicy {
        self.config.policy
    }

    pub fn gravity(&self) -> f64 {
        self.config.gravity
    }

    pub fn softening(&self) -> f64 {
        self.config.softening
    }

    /// Number of micro-steps taken since the last full replacement
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Replace G; takes effect on the next force evaluation
    pub fn set_gravity(&mut self, gravity: f64) {
        debug!("gravity changed from {} to {}", self.config.gravity, gravity);
        self.config.gravity = gravity;
    }

    /// Replace every body with a deep copy of `bodies` and derive their accelerations
    #[doc(alias = "set_bodies")]
    pub fn load_bodies(&mut self, bodies: &[Body]) {
        self.bodies = bodies.to_vec();
        let capacity = self.config.policy.trail_capacity;
        for body in &mut self.bodies {
            body.trail.set_capacity(capacity);
        }
        self.next_id = self.bodies.iter().map(|b| b.id.saturating_add(1)).max().unwrap_or(1);
        self.step_count = 0;
        self.force_law().apply(&mut self.bodies);
        debug!("loaded {} bodies", self.bodies.len());
    }

    /// Append one body under a fresh id and return that id.
    ///
    /// Existing bodies are left exactly as they are; the newcomer only starts
    /// to pull on them at the next `update`. Ids wrap past `u64::MAX` and skip
    /// any id still in use.
    pub fn add_body(&mut self, mut body: Body) -> BodyId {
        let mut id = self.next_id;
        while self.body(id).is_some() {
            id = id.wrapping_add(1);
        }
        self.next_id = id.wrapping_add(1);
        body.id = id;
        body.trail.set_capacity(self.config.policy.trail_capacity);
        debug!("injected body {} at {:?}", id, body.position);
        self.bodies.push(body);
        id
    }

    /// Remove a body by id, keeping the order of the rest
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        let index = self.bodies.iter().position(|b| b.id == id)?;
        debug!("removed body {}", id);
        Some(self.bodies.remove(index))
    }

    /// Advance one micro-step of size `dt`
    pub fn update(&mut self, dt: f64) -> Result<(), SimError> {
        let half_dt = 0.5 * dt;
        let policy = self.config.policy;

        integrator::kick(&mut self.bodies, half_dt);
        integrator::drift(&mut self.bodies, dt);

        self.step_count += 1;
        let interval = self.config.trail_sample_interval.max(1);
        if self.step_count % interval == 0 {
            integrator::sample_trails(&mut self.bodies);
        }

        self.force_law().apply(&mut self.bodies);

        if policy.resolve_collisions {
            self.collision_resolver().resolve(&mut self.bodies);
        }

        integrator::kick(&mut self.bodies, half_dt);

        if policy.recenter_frame {
            frame::recenter(&mut self.bodies);
        }

        if self.config.check_finite {
            self.check_finite()?;
        }
        Ok(())
    }

    /// Run one rendered frame worth of micro-steps at the given time scale
    pub fn step_frame(&mut self, time_scale: f64) -> Result<(), SimError> {
        let dt = constants::BASE_MICRO_STEP * time_scale;
        for _ in 0..constants::MICRO_STEPS_PER_FRAME {
            self.update(dt)?;
        }
        Ok(())
    }

    /// Kinetic plus potential energy; the policy decides the potential softening
    pub fn total_energy(&self) -> f64 {
        self.energy().total
    }

    pub fn energy(&self) -> EnergyReport {
        diagnostics::energy(
            &self.bodies,
            &self.force_law(),
            self.config.policy.soften_potential,
        )
    }

    pub fn total_momentum(&self) -> DVec2 {
        diagnostics::total_momentum(&self.bodies)
    }

    pub fn center_of_mass(&self) -> DVec2 {
        diagnostics::center_of_mass(&self.bodies)
    }

    pub fn force_law(&self) -> SoftenedGravity {
        SoftenedGravity::new(self.config.gravity, self.config.softening)
    }

    fn collision_resolver(&self) -> CollisionResolver {
        CollisionResolver::new(self.config.restitution, self.config.collision_buffer)
    }

    fn check_finite(&self) -> Result<(), SimError> {
        match self.bodies.iter().find(|b| !b.is_finite()) {
            Some(body) => {
                warn!("body {} went non-finite at step {}", body.id, self.step_count);
                Err(SimError::NonFiniteState {
                    id: body.id,
                    step: self.step_count,
                })
            }
            None => Ok(()),
        }
    }
}
