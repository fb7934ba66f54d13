//! Static arrangement of the system: planets on widening orbits around the sun.

use std::f32::consts::{PI, TAU};

use cosmic_engine::Color;
use glam::Vec3;

use crate::content::PortfolioContent;

// ── Orbits ───────────────────────────────────────────────────────────

/// Orbit radius of the first planet.
pub const ORBIT_BASE: f32 = 22.0;
/// Extra orbit radius per planet index.
pub const ORBIT_STEP: f32 = 14.0;
/// Angular offset of planet 0 so it does not sit on the +X axis.
pub const ANGLE_OFFSET: f32 = PI / 6.0;

pub const PLANET_BASE_RADIUS: f32 = 2.0;
pub const PLANET_RADIUS_STEP: f32 = 0.5;

pub const PALETTE: [&str; 5] = ["#67e8f9", "#a78bfa", "#34d399", "#f472b6", "#f59e0b"];

// ── Decorative rings ─────────────────────────────────────────────────

pub const RING_THICKNESS: f32 = 0.1;
pub const RING_COLOR: &str = "#22d3ee";
pub const RING_OPACITY: f32 = 0.15;

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 4.5;
pub const SUN_COLOR: &str = "#f59e0b";
pub const SUN_EMISSIVE: f32 = 1.5;
pub const GLOW_SCALE: f32 = 1.3;
pub const GLOW_COLOR: &str = "#fde047";
pub const GLOW_OPACITY: f32 = 0.35;
pub const SUN_LABEL_POS: Vec3 = Vec3::new(0.0, 8.0, 0.0);

/// One planet. Immutable after layout.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    /// Section id this planet opens.
    pub id: String,
    pub display_name: String,
    pub position: Vec3,
    pub radius: f32,
    pub color: Color,
}

impl CelestialBody {
    /// Radius of the decorative orbit ring through this planet (XZ distance).
    pub fn orbit_radius(&self) -> f32 {
        self.position.x.hypot(self.position.z)
    }
}

/// Position of planet `index` of `count`.
pub fn planet_position(index: usize, count: usize) -> Vec3 {
    let i = index as f32;
    let radius = ORBIT_BASE + ORBIT_STEP * i;
    let angle = (i / count.max(1) as f32) * TAU + ANGLE_OFFSET;
    let sign = if index % 2 == 0 { 1.0 } else { -1.0 };
    Vec3::new(angle.cos() * radius, sign * (2.0 + i), angle.sin() * radius)
}

pub fn planet_radius(index: usize) -> f32 {
    PLANET_BASE_RADIUS + PLANET_RADIUS_STEP * index as f32
}

pub fn planet_color(index: usize) -> Color {
    hex(PALETTE[index % PALETTE.len()])
}

/// Parse one of the compile-time palette entries.
pub fn hex(code: &str) -> Color {
    Color::from_hex(code).unwrap_or(Color::WHITE)
}

/// One body per section, in content order.
pub fn layout_bodies(content: &PortfolioContent) -> Vec<CelestialBody> {
    let count = content.sections.len();
    content
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| CelestialBody {
            id: section.id.clone(),
            display_name: section.name.clone(),
            position: planet_position(i, count),
            radius: planet_radius(i),
            color: planet_color(i),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn five_planet_layout() {
        let p0 = planet_position(0, 5);
        let a0 = PI / 6.0;
        assert!(approx(p0, Vec3::new(a0.cos() * 22.0, 2.0, a0.sin() * 22.0)));

        let p4 = planet_position(4, 5);
        let a4 = 0.8 * TAU + PI / 6.0;
        assert!(approx(p4, Vec3::new(a4.cos() * 78.0, 6.0, a4.sin() * 78.0)));

        assert_eq!(planet_position(1, 5).y, -3.0);
        assert_eq!(planet_position(3, 5).y, -5.0);
    }

    #[test]
    fn three_planet_layout() {
        for i in 0..3 {
            let p = planet_position(i, 3);
            let angle = i as f32 / 3.0 * TAU + PI / 6.0;
            let radius = 22.0 + 14.0 * i as f32;
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            let want = Vec3::new(angle.cos() * radius, sign * (2.0 + i as f32), angle.sin() * radius);
            assert!(approx(p, want), "planet {i}: {p:?} vs {want:?}");
        }
        assert!(planet_position(1, 3).y < 0.0);
        assert!(planet_position(2, 3).y > 0.0);
    }

    #[test]
    fn orbit_radii_widen_by_step() {
        for i in 0..5 {
            let p = planet_position(i, 5);
            let r = p.x.hypot(p.z);
            assert!((r - (22.0 + 14.0 * i as f32)).abs() < 1e-3);
        }
    }

    #[test]
    fn size_and_palette() {
        assert_eq!(planet_radius(0), 2.0);
        assert_eq!(planet_radius(4), 4.0);
        assert_eq!(planet_color(0), Color::from_hex("#67e8f9").unwrap());
        assert_eq!(planet_color(5), planet_color(0), "palette wraps");
    }

    #[test]
    fn layout_follows_content_order() {
        let content = PortfolioContent::bundled().unwrap();
        let bodies = layout_bodies(&content);
        assert_eq!(bodies.len(), 5);
        assert_eq!(bodies[2].id, "experience");
        assert_eq!(bodies[3].display_name, "Education & Certifications");
        assert!((bodies[4].orbit_radius() - 78.0).abs() < 1e-3);
    }

    #[test]
    fn layout_is_deterministic() {
        let content = PortfolioContent::bundled().unwrap();
        assert_eq!(layout_bodies(&content), layout_bodies(&content));
    }

    #[test]
    fn empty_content_lays_out_nothing() {
        assert!(layout_bodies(&PortfolioContent::default()).is_empty());
    }
}
