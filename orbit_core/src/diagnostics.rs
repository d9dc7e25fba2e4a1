//! Aggregate quantities of a body collection: energy, momentum, barycentre

use glam::DVec2;

use crate::body::Body;
use crate::forces::SoftenedGravity;

/// Kinetic, potential and total mechanical energy at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReport {
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
}

pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(Body::kinetic_energy).sum()
}

/// −Σ_{i<j} G m_i m_j / r_ij, once per unique pair
pub fn potential_energy(bodies: &[Body], law: &SoftenedGravity, softened: bool) -> f64 {
    let mut potential = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for b in bodies.iter().skip(i + 1) {
            potential += law.pair_potential(a, b, softened);
        }
    }
    potential
}

pub fn energy(bodies: &[Body], law: &SoftenedGravity, softened: bool) -> EnergyReport {
    let kinetic = kinetic_energy(bodies);
    let potential = potential_energy(bodies, law, softened);
    EnergyReport {
        kinetic,
        potential,
        total: kinetic + potential,
    }
}

pub fn total_mass(bodies: &[Body]) -> f64 {
    bodies.iter().map(|b| b.mass).sum()
}

pub fn total_momentum(bodies: &[Body]) -> DVec2 {
    bodies.iter().map(Body::momentum).sum()
}

/// Get the center of mass of all bodies
pub fn center_of_mass(bodies: &[Body]) -> DVec2 {
    let mut total_mass = 0.0;
    let mut com = DVec2::ZERO;

    for body in bodies {
        com += body.position * body.mass;
        total_mass += body.mass;
    }

    if total_mass > 0.0 {
        com / total_mass
    } else {
        DVec2::ZERO
    }
}
