use cosmic_engine::{BackdropPoint, Rng};
use glam::Vec3;

pub const STAR_COUNT: usize = 8000;
/// Inner radius of the star shell.
pub const STAR_RADIUS: f32 = 300.0;
/// Shell thickness beyond `STAR_RADIUS`.
pub const STAR_DEPTH: f32 = 60.0;
/// Size multiplier handed to the host's point shader.
pub const STAR_FACTOR: f32 = 8.0;
pub const STAR_SEED: u64 = 0x5eed_c057;

/// Scatter stars uniformly over directions on a thick spherical shell.
/// Same seed, same sky.
pub fn generate(count: usize, seed: u64) -> Vec<BackdropPoint> {
    let mut rng = Rng::new(seed);
    let mut stars = Vec::with_capacity(count);
    for _ in 0..count {
        let dir = rng.unit_vector();
        let r = STAR_RADIUS + STAR_DEPTH * rng.next_f32();
        let p = dir * r;
        stars.push(BackdropPoint {
            x: p.x,
            y: p.y,
            z: p.z,
            size: STAR_FACTOR * (0.5 + 0.5 * rng.next_f32()),
        });
    }
    stars
}
