//! Simulated point masses

use glam::DVec2;

use crate::trail::Trail;

/// Identifier of a body. Unique within an engine, not necessarily contiguous.
pub type BodyId = u64;

/// A body in the simulation with mass, position, and velocity
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub mass: f64,
    pub position: DVec2,
    pub velocity: DVec2,
    pub acceleration: DVec2,
    pub radius: f64,
    pub color: [f32; 4],
    pub icon: Option<String>,
    pub label: Option<String>,
    pub note: Option<String>,
    /// Static bodies pull on others and take part in collisions but never move
    pub is_static: bool,
    pub trail: Trail,
    /// Label of the body this one was placed around; only read by analytics
    pub parent_key: Option<String>,
    pub orbit_radius: Option<f64>,
}

impl Body {
    pub fn new(id: BodyId, position: DVec2, velocity: DVec2, mass: f64) -> Self {
        // Radius proportional to cube root of mass (for volume scaling)
        let radius = mass.cbrt() * 3.0;

        // Color based on mass (blue for light, red for heavy)
        let t = (mass / 1000.0).clamp(0.0, 1.0) as f32;
        let color = [
            0.2 + 0.8 * t,         // R
            0.4 + 0.3 * (1.0 - t), // G
            1.0 - 0.6 * t,         // B
            1.0,                   // A
        ];

        Self {
            id,
            mass,
            position,
            velocity,
            acceleration: DVec2::ZERO,
            radius,
            color,
            icon: None,
            label: None,
            note: None,
            is_static: false,
            trail: Trail::default(),
            parent_key: None,
            orbit_radius: None,
        }
    }

    /// Create an immovable anchor (like a star pinned to the origin)
    pub fn anchor(id: BodyId, position: DVec2, mass: f64) -> Self {
        Self::new(id, position, DVec2::ZERO, mass).with_static(true)
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Parse a `#RRGGBB` color; anything else leaves the color unchanged
    pub fn with_hex_color(mut self, hex: &str) -> Self {
        if let Some(color) = parse_hex_color(hex) {
            self.color = color;
        }
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        if is_static {
            self.velocity = DVec2::ZERO;
        }
        self
    }

    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Whether position and velocity are free of NaN and infinities
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

fn parse_hex_color(hex: &str) -> Option<[f32; 4]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(digits.get(range)?, 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?, 1.0])
}
