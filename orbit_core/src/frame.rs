//! Zero-momentum frame correction
//!
//! Integration error slowly walks the barycentre away from the origin and
//! leaves a small net momentum. Subtracting both after every step keeps a
//! system with no anchor body centred on screen.

use glam::DVec2;

use crate::body::Body;

/// Shift all non-static bodies so the barycentre sits at the origin with
/// zero mean velocity.
///
/// Static bodies count towards the sums but are never moved.
/// Returns false, touching nothing, when the total mass is zero.
pub fn recenter(bodies: &mut [Body]) -> bool {
    let mut total_mass = 0.0;
    let mut weighted_position = DVec2::ZERO;
    let mut momentum = DVec2::ZERO;

    for body in bodies.iter() {
        total_mass += body.mass;
        weighted_position += body.position * body.mass;
        momentum += body.velocity * body.mass;
    }

    if total_mass == 0.0 {
        return false;
    }

    let center = weighted_position / total_mass;
    let drift_velocity = momentum / total_mass;

    for body in bodies.iter_mut().filter(|b| !b.is_static) {
        body.position -= center;
        body.velocity -= drift_velocity;
    }
    true
}
