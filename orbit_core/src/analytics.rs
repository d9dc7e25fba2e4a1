//! Orbital summaries derived from a snapshot of bodies
//!
//! Nothing here feeds back into the integration; these are read-only views for
//! telemetry and reports.

use std::f64::consts::TAU;

use crate::body::{Body, BodyId};

/// v = √(G·M / r)
pub fn circular_velocity(gravity: f64, parent_mass: f64, radius: f64) -> f64 {
    (gravity * parent_mass / radius).sqrt()
}

/// v = √(2·G·M / r)
pub fn escape_velocity(gravity: f64, parent_mass: f64, radius: f64) -> f64 {
    (2.0 * gravity * parent_mass / radius).sqrt()
}

/// Kepler's third law, T = 2π·√(a³ / (G·M))
pub fn orbital_period(gravity: f64, parent_mass: f64, semi_major_axis: f64) -> f64 {
    TAU * (semi_major_axis.powi(3) / (gravity * parent_mass)).sqrt()
}

/// Current orbit of one body around its parent
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalInsight {
    pub id: BodyId,
    pub label: String,
    pub parent: String,
    /// Distance to the parent
    pub distance: f64,
    /// Speed relative to the parent
    pub speed: f64,
    /// Period of a circular orbit at the current distance
    pub period: f64,
}

/// One insight per body whose `parent_key` names a body label in `bodies`
pub fn orbital_insights(bodies: &[Body], gravity: f64) -> Vec<OrbitalInsight> {
    bodies
        .iter()
        .filter_map(|body| {
            let parent_key = body.parent_key.as_deref()?;
            let parent = bodies
                .iter()
                .find(|p| p.label.as_deref() == Some(parent_key))?;

            let distance = body.position.distance(parent.position);
            Some(OrbitalInsight {
                id: body.id,
                label: body.label.clone().unwrap_or_else(|| body.id.to_string()),
                parent: parent_key.to_string(),
                distance,
                speed: (body.velocity - parent.velocity).length(),
                period: orbital_period(gravity, parent.mass, distance),
            })
        })
        .collect()
}

/// Mean relative orbital speed, `None` without any insight
pub fn mean_orbital_speed(insights: &[OrbitalInsight]) -> Option<f64> {
    if insights.is_empty() {
        return None;
    }
    Some(insights.iter().map(|i| i.speed).sum::<f64>() / insights.len() as f64)
}

/// Ratio of two periods and the closest small-integer ratio to it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resonance {
    pub ratio: f64,
    pub numerator: u32,
    pub denominator: u32,
}

/// Compare `outer` and `inner` periods, searching denominators up to 9
pub fn resonance(outer_period: f64, inner_period: f64) -> Resonance {
    let ratio = outer_period / inner_period;
    let mut best = (ratio.round().max(1.0) as u32, 1u32);
    let mut best_error = f64::INFINITY;

    for denominator in 1..=9u32 {
        let numerator = (ratio * denominator as f64).round().max(1.0) as u32;
        let error = (ratio - numerator as f64 / denominator as f64).abs();
        if error + 1e-12 < best_error {
            best = (numerator, denominator);
            best_error = error;
        }
    }

    Resonance {
        ratio,
        numerator: best.0,
        denominator: best.1,
    }
}
