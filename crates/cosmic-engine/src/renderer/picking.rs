//! Pointer picking: screen → NDC → world ray → nearest sphere hit.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::api::types::{EntityId, Viewport};
use crate::core::scene::Scene;

/// Canvas-relative CSS pixels to normalized device coordinates (Y up).
pub fn screen_to_ndc(x: f32, y: f32, viewport: Viewport) -> Vec2 {
    let nx = x / viewport.width;
    let ny = y / viewport.height;
    Vec2::new(nx * 2.0 - 1.0, 1.0 - ny * 2.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length, or zero when the unprojection degenerated.
    pub dir: Vec3,
}

impl Ray {
    /// Unproject an NDC point through the near and far planes.
    pub fn from_ndc(ndc: Vec2, inv_view_proj: Mat4) -> Self {
        let near = inv_view_proj * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let far = inv_view_proj * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let near = near.truncate() / near.w;
        let far = far.truncate() / far.w;
        Self {
            origin: near,
            dir: (far - near).normalize_or_zero(),
        }
    }

    pub fn from_screen(x: f32, y: f32, viewport: Viewport, inv_view_proj: Mat4) -> Self {
        Self::from_ndc(screen_to_ndc(x, y, viewport), inv_view_proj)
    }
}

/// Distance along the ray to the first hit in front of the origin.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t = -b - sq;
    if t > 0.0 {
        return Some(t);
    }
    // Origin inside the sphere: take the exit point.
    let t = -b + sq;
    (t > 0.0).then_some(t)
}

/// Nearest active, pickable entity the ray hits.
pub fn pick(scene: &Scene, ray: &Ray) -> Option<(EntityId, f32)> {
    if ray.dir == Vec3::ZERO {
        return None;
    }
    let mut best: Option<(EntityId, f32)> = None;
    for entity in scene.pickable() {
        let Some(radius) = entity.pick_radius() else {
            continue;
        };
        if let Some(t) = ray_sphere(ray, entity.pos, radius) {
            if best.is_none_or(|(_, b)| t < b) {
                best = Some((entity.id, t));
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;
    use crate::components::mesh::{Color, MeshComponent};

    fn sphere(id: u32, pos: Vec3, radius: f32) -> Entity {
        Entity::new(EntityId(id))
            .with_pos(pos)
            .with_mesh(MeshComponent::sphere(radius, Color::WHITE))
            .pickable()
    }

    fn down_neg_z() -> Ray {
        Ray { origin: Vec3::ZERO, dir: Vec3::NEG_Z }
    }

    #[test]
    fn ndc_corners() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(screen_to_ndc(0.0, 0.0, vp), Vec2::new(-1.0, 1.0));
        assert_eq!(screen_to_ndc(400.0, 300.0, vp), Vec2::ZERO);
        assert_eq!(screen_to_ndc(800.0, 600.0, vp), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn sphere_hit_and_miss() {
        let ray = down_neg_z();
        let t = ray_sphere(&ray, Vec3::new(0.0, 0.0, -10.0), 2.0).unwrap();
        assert!((t - 8.0).abs() < 1e-5);
        assert!(ray_sphere(&ray, Vec3::new(5.0, 0.0, -10.0), 2.0).is_none());
        assert!(ray_sphere(&ray, Vec3::new(0.0, 0.0, 10.0), 2.0).is_none(), "behind origin");
    }

    #[test]
    fn nearest_sphere_wins() {
        let mut scene = Scene::new();
        scene.spawn(sphere(1, Vec3::new(0.0, 0.0, -30.0), 5.0));
        scene.spawn(sphere(2, Vec3::new(0.0, 0.0, -10.0), 1.0));
        scene.spawn(sphere(3, Vec3::new(0.0, 0.0, -20.0), 3.0));
        let (id, t) = pick(&scene, &down_neg_z()).unwrap();
        assert_eq!(id, EntityId(2));
        assert!((t - 9.0).abs() < 1e-5);
    }

    #[test]
    fn skips_inactive_and_unpickable() {
        let mut scene = Scene::new();
        let mut hidden = sphere(1, Vec3::new(0.0, 0.0, -5.0), 1.0);
        hidden.active = false;
        scene.spawn(hidden);
        let mut decor = sphere(2, Vec3::new(0.0, 0.0, -6.0), 1.0);
        decor.pickable = false;
        scene.spawn(decor);
        scene.spawn(sphere(3, Vec3::new(0.0, 0.0, -50.0), 1.0));
        assert_eq!(pick(&scene, &down_neg_z()).map(|h| h.0), Some(EntityId(3)));
    }

    #[test]
    fn scale_grows_pick_radius() {
        let mut scene = Scene::new();
        scene.spawn(sphere(1, Vec3::new(1.5, 0.0, -10.0), 1.0).with_scale(2.0));
        assert!(pick(&scene, &down_neg_z()).is_some());
    }

    #[test]
    fn center_of_screen_ray_hits_look_target() {
        let eye = Vec3::new(0.0, 5.0, 20.0);
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(55f32.to_radians(), 16.0 / 9.0, 0.1, 1000.0);
        let vp = Viewport::new(1600.0, 900.0);
        let ray = Ray::from_screen(800.0, 450.0, vp, (proj * view).inverse());
        let expected = (Vec3::ZERO - eye).normalize();
        assert!((ray.dir - expected).length() < 1e-3);

        let mut scene = Scene::new();
        scene.spawn(sphere(7, Vec3::ZERO, 1.0));
        assert_eq!(pick(&scene, &ray).map(|h| h.0), Some(EntityId(7)));
    }
}
