//! Velocity-Verlet (kick-drift-kick leapfrog) building blocks
//!
//! One step of size `dt` is
//!
//! 1. Kick:  v(t + dt/2) = v(t) + a(t) · dt/2
//! 2. Drift: x(t + dt)   = x(t) + v(t + dt/2) · dt
//! 3. Recompute a(t + dt) from the new positions
//! 4. Kick:  v(t + dt)   = v(t + dt/2) + a(t + dt) · dt/2
//!
//! The engine interleaves trail sampling, force evaluation and collision
//! response between these stages, so they are exposed separately.
//! Static bodies are skipped by both.

use crate::body::Body;

/// Update velocities by `a · dt`
pub fn kick(bodies: &mut [Body], dt: f64) {
    for body in bodies.iter_mut().filter(|b| !b.is_static) {
        body.velocity += body.acceleration * dt;
    }
}

/// Update positions by `v · dt`
pub fn drift(bodies: &mut [Body], dt: f64) {
    for body in bodies.iter_mut().filter(|b| !b.is_static) {
        body.position += body.velocity * dt;
    }
}

/// Append every body's current position to its trail
pub fn sample_trails(bodies: &mut [Body]) {
    for body in bodies.iter_mut() {
        let position = body.position;
        body.trail.push(position);
    }
}
