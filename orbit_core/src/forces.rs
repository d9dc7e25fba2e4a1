//! Softened Newtonian gravity
//!
//! The acceleration on body `i` from body `j` is
//!
//! ```text
//! a_i += G · m_j · d / (|d|² + ε²)^1.5,   d = x_j − x_i
//! ```
//!
//! ε keeps the force bounded as two bodies approach each other.

use glam::DVec2;

use crate::body::Body;

/// Pairwise gravity with a Plummer-style softening length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftenedGravity {
    pub g: f64,
    pub softening: f64,
}

impl SoftenedGravity {
    pub fn new(g: f64, softening: f64) -> Self {
        Self { g, softening }
    }

    /// Acceleration felt at `target` due to a mass `source_mass` at `source`
    pub fn pair_acceleration(&self, target: DVec2, source: DVec2, source_mass: f64) -> DVec2 {
        let d = source - target;
        let softened_sq = d.length_squared() + self.softening * self.softening;
        let denominator = softened_sq * softened_sq.sqrt();
        if denominator == 0.0 {
            return DVec2::ZERO;
        }
        d * (self.g * source_mass / denominator)
    }

    /// Total acceleration on `bodies[index]` from every other body
    pub fn acceleration_on(&self, index: usize, bodies: &[Body]) -> DVec2 {
        let target = bodies[index].position;
        bodies
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != index)
            .map(|(_, source)| self.pair_acceleration(target, source.position, source.mass))
            .sum()
    }

    /// Overwrite every body's acceleration from the current positions.
    ///
    /// Static bodies still act as sources; their own acceleration is zeroed
    /// because it is never integrated.
    pub fn apply(&self, bodies: &mut [Body]) {
        let snapshot: &[Body] = bodies;
        let accelerations: Vec<DVec2> = (0..snapshot.len())
            .map(|i| {
                if snapshot[i].is_static {
                    DVec2::ZERO
                } else {
                    self.acceleration_on(i, snapshot)
                }
            })
            .collect();

        for (body, acceleration) in bodies.iter_mut().zip(accelerations) {
            body.acceleration = acceleration;
        }
    }

    /// Potential energy of one pair; `softened` selects √(r² + ε²) over r.
    ///
    /// Returns zero for coincident bodies when unsoftened.
    pub fn pair_potential(&self, a: &Body, b: &Body, softened: bool) -> f64 {
        let r_sq = a.position.distance_squared(b.position);
        let distance = if softened {
            (r_sq + self.softening * self.softening).sqrt()
        } else {
            r_sq.sqrt()
        };
        if distance > 0.0 {
            -self.g * a.mass * b.mass / distance
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> Vec<Body> {
        vec![
            Body::new(1, DVec2::ZERO, DVec2::ZERO, 10.0),
            Body::new(2, DVec2::new(3.0, 4.0), DVec2::ZERO, 20.0),
        ]
    }

    #[test]
    fn test_pair_acceleration_points_at_source() {
        let law = SoftenedGravity::new(100.0, 0.0);
        let a = law.pair_acceleration(DVec2::ZERO, DVec2::new(3.0, 4.0), 20.0);

        // |a| = G m / r² = 100 * 20 / 25
        assert!((a.length() - 80.0).abs() < 1e-9);
        assert!(a.normalize().dot(DVec2::new(0.6, 0.8)) > 0.999_999);
    }

    #[test]
    fn test_softening_bounds_the_force() {
        let law = SoftenedGravity::new(100.0, 5.0);
        let close = law.pair_acceleration(DVec2::ZERO, DVec2::new(1e-6, 0.0), 10.0);
        assert!(close.is_finite());
        assert!(close.length() < 1e-3);

        let coincident = law.pair_acceleration(DVec2::ZERO, DVec2::ZERO, 10.0);
        assert_eq!(coincident, DVec2::ZERO);
    }

    #[test]
    fn test_apply_is_newtons_third_law() {
        let mut bodies = pair();
        SoftenedGravity::new(100.0, 5.0).apply(&mut bodies);

        let f1 = bodies[0].acceleration * bodies[0].mass;
        let f2 = bodies[1].acceleration * bodies[1].mass;
        assert!((f1 + f2).length() < 1e-9);
    }

    #[test]
    fn test_apply_overwrites_previous_acceleration() {
        let mut bodies = pair();
        bodies[0].acceleration = DVec2::new(1e6, 1e6);
        let law = SoftenedGravity::new(100.0, 5.0);

        law.apply(&mut bodies);
        let first = bodies[0].acceleration;
        law.apply(&mut bodies);

        assert_eq!(bodies[0].acceleration, first);
        assert!(first.length() < 1e3);
    }

    #[test]
    fn test_static_target_gets_zero_acceleration() {
        let mut bodies = pair();
        bodies[0].is_static = true;
        SoftenedGravity::new(100.0, 5.0).apply(&mut bodies);

        assert_eq!(bodies[0].acceleration, DVec2::ZERO);
        assert!(bodies[1].acceleration.length() > 0.0);
    }

    #[test]
    fn test_pair_potential_softened_and_raw() {
        let bodies = pair();
        let law = SoftenedGravity::new(100.0, 5.0);

        let raw = law.pair_potential(&bodies[0], &bodies[1], false);
        let soft = law.pair_potential(&bodies[0], &bodies[1], true);

        assert!((raw - (-100.0 * 200.0 / 5.0)).abs() < 1e-9);
        assert!((soft - (-100.0 * 200.0 / 50f64.sqrt())).abs() < 1e-9);
    }
}
