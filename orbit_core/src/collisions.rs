//! Overlap correction and restitution impulses between pairs of bodies
//!
//! Two bodies collide when their centres are closer than the sum of their radii
//! plus a small buffer. A collision first pushes the bodies apart along the line
//! of centres, then, if they are still approaching, exchanges an impulse with
//! coefficient of restitution `e`. Static bodies behave as infinite masses.

use log::trace;

use crate::body::Body;

/// Pairwise collision response
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResolver {
    pub restitution: f64,
    pub buffer: f64,
}

impl CollisionResolver {
    pub fn new(restitution: f64, buffer: f64) -> Self {
        Self { restitution, buffer }
    }

    /// Resolve every overlapping pair once; returns the number of contacts
    pub fn resolve(&self, bodies: &mut [Body]) -> usize {
        let mut contacts = 0;
        for i in 0..bodies.len() {
            let (head, tail) = bodies.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                if self.resolve_pair(a, b) {
                    trace!("collision between body {} and body {}", a.id, b.id);
                    contacts += 1;
                }
            }
        }
        contacts
    }

    /// Resolve a single pair. Returns false when the bodies do not overlap.
    ///
    /// Exactly coincident centres have no usable normal and are skipped.
    pub fn resolve_pair(&self, a: &mut Body, b: &mut Body) -> bool {
        let delta = b.position - a.position;
        let distance = delta.length();
        let min_distance = a.radius + b.radius + self.buffer;

        if !(distance > 0.0 && distance < min_distance) {
            return false;
        }

        let overlap = min_distance - distance;
        let normal = delta / distance;

        match (a.is_static, b.is_static) {
            (true, true) => {}
            (true, false) => b.position += normal * overlap,
            (false, true) => a.position -= normal * overlap,
            (false, false) => {
                // Lighter body moves more
                let total_mass = a.mass + b.mass;
                a.position -= normal * (overlap * b.mass / total_mass);
                b.position += normal * (overlap * a.mass / total_mass);
            }
        }

        let approach = (b.velocity - a.velocity).dot(normal);
        if approach < 0.0 {
            let bounce = (1.0 + self.restitution) * approach;
            match (a.is_static, b.is_static) {
                (true, true) => {}
                // The static side has infinite mass, so the dynamic body takes it all
                (false, true) => a.velocity += normal * bounce,
                (true, false) => b.velocity -= normal * bounce,
                (false, false) => {
                    let impulse = -bounce / (1.0 / a.mass + 1.0 / b.mass);
                    a.velocity -= normal * (impulse / a.mass);
                    b.velocity += normal * (impulse / b.mass);
                }
            }
        }

        true
    }
}

impl Default for CollisionResolver {
    fn default() -> Self {
        Self::new(crate::constants::RESTITUTION, crate::constants::COLLISION_BUFFER)
    }
}
