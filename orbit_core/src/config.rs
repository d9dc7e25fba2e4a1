//! Engine configuration
//!
//! The two engine variants differ only in a handful of switches, collected in
//! [`EnginePolicy`]. Everything else tunable lives in [`EngineConfig`].

use crate::constants;

/// Which variant-specific behaviors the engine runs each step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnginePolicy {
    /// Pin the barycentre to the origin and remove net momentum after every step
    pub recenter_frame: bool,
    /// Separate overlapping bodies and apply restitution impulses
    pub resolve_collisions: bool,
    /// Number of positions kept per body trail
    pub trail_capacity: usize,
    /// Use √(r² + ε²) instead of r in the potential energy sum
    pub soften_potential: bool,
}

impl EnginePolicy {
    /// Symmetric systems with no privileged body, e.g. the figure-eight
    pub const UNCONSTRAINED: Self = Self {
        recenter_frame: true,
        resolve_collisions: false,
        trail_capacity: constants::UNCONSTRAINED_TRAIL_CAPACITY,
        soften_potential: false,
    };

    /// Systems dominated by a massive, possibly static, anchor body
    pub const ANCHORED: Self = Self {
        recenter_frame: false,
        resolve_collisions: true,
        trail_capacity: constants::ANCHORED_TRAIL_CAPACITY,
        soften_potential: true,
    };
}

impl Default for EnginePolicy {
    fn default() -> Self {
        Self::UNCONSTRAINED
    }
}

/// Global constants and numerical knobs of an engine instance
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub gravity: f64,
    /// Fixed for the lifetime of an engine
    pub softening: f64,
    pub policy: EnginePolicy,
    pub restitution: f64,
    pub collision_buffer: f64,
    pub trail_sample_interval: u64,
    /// Fail the step when any body ends it with a NaN or infinite coordinate
    pub check_finite: bool,
}

impl EngineConfig {
    pub fn new(policy: EnginePolicy) -> Self {
        Self {
            gravity: constants::G,
            softening: constants::SOFTENING,
            policy,
            restitution: constants::RESTITUTION,
            collision_buffer: constants::COLLISION_BUFFER,
            trail_sample_interval: constants::TRAIL_SAMPLE_INTERVAL,
            check_finite: true,
        }
    }

    pub fn unconstrained() -> Self {
        Self::new(EnginePolicy::UNCONSTRAINED)
    }

    pub fn anchored() -> Self {
        Self::new(EnginePolicy::ANCHORED)
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_softening(mut self, softening: f64) -> Self {
        self.softening = softening;
        self
    }

    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.policy.trail_capacity = capacity;
        self
    }

    pub fn with_finite_check(mut self, check_finite: bool) -> Self {
        self.check_finite = check_finite;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::unconstrained()
    }
}
