//! Avatar motion model: Euler integration with exponential damping.
//!
//! Pure math over `glam` types; the only engine coupling is `drive`, which
//! writes the integrated pose back into the avatar's scene entity.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::components::entity::Entity;
use crate::input::controls::ControlVector;

/// Tuning constants for one avatar skin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionProfile {
    /// Velocity gained per second while thrusting (units/s²).
    pub acceleration: f32,
    /// Exponential damping rate (1/s).
    pub damping: f32,
    /// Yaw rate while turning (rad/s).
    pub turn_rate: f32,
    pub max_speed: f32,
    /// Cosmetic roll amplitude (rad).
    pub bob_amplitude: f32,
    /// Cosmetic roll angular frequency (rad/s).
    pub bob_frequency: f32,
    pub spawn: Vec3,
}

impl MotionProfile {
    /// Human-scale astronaut.
    pub fn astronaut() -> Self {
        Self {
            acceleration: 25.0,
            damping: 6.0,
            turn_rate: 2.2,
            max_speed: 15.0,
            bob_amplitude: 0.05,
            bob_frequency: 2.0,
            spawn: Vec3::new(0.0, 2.0, 20.0),
        }
    }

    /// Ten-times-scale ship skin.
    pub fn ship() -> Self {
        Self {
            acceleration: 250.0,
            max_speed: 150.0,
            ..Self::astronaut()
        }
    }
}

impl Default for MotionProfile {
    fn default() -> Self {
        Self::astronaut()
    }
}

/// Position, velocity and heading of the avatar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Yaw around +Y (rad). Zero faces -Z.
    pub heading: f32,
    /// Cosmetic roll, recomputed from elapsed time every tick.
    pub roll: f32,
}

impl KinematicState {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            heading: 0.0,
            roll: 0.0,
        }
    }

    /// Unit vector the avatar faces. Roll does not tilt it.
    pub fn forward(&self) -> Vec3 {
        Quat::from_rotation_y(self.heading) * Vec3::NEG_Z
    }

    /// Render orientation: yaw, then cosmetic roll about the body's Z axis.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.heading) * Quat::from_rotation_z(self.roll)
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Pose published to the host each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AvatarPose {
    pub position: Vec3,
    pub heading: f32,
    pub roll: f32,
    pub speed: f32,
}

impl From<&KinematicState> for AvatarPose {
    fn from(state: &KinematicState) -> Self {
        Self {
            position: state.position,
            heading: state.heading,
            roll: state.roll,
            speed: state.speed(),
        }
    }
}

pub struct AvatarMotion {
    profile: MotionProfile,
    state: KinematicState,
}

impl AvatarMotion {
    pub fn new(profile: MotionProfile) -> Self {
        let state = KinematicState::at(profile.spawn);
        Self { profile, state }
    }

    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    pub fn profile(&self) -> &MotionProfile {
        &self.profile
    }

    /// Swap tuning constants without teleporting the avatar.
    pub fn set_profile(&mut self, profile: MotionProfile) {
        self.profile = profile;
    }

    /// Advance one tick.
    pub fn step(&mut self, dt: f32, controls: ControlVector, elapsed: f32) {
        let p = &self.profile;
        let s = &mut self.state;

        if controls.left {
            s.heading += p.turn_rate * dt;
        }
        if controls.right {
            s.heading -= p.turn_rate * dt;
        }

        let forward = s.forward();
        let up = Vec3::Y;

        let mut desired = Vec3::ZERO;
        if controls.forward {
            desired += forward;
        }
        if controls.back {
            desired -= forward;
        }
        if controls.up {
            desired += up;
        }
        if controls.down {
            desired -= up;
        }
        if desired.length_squared() > 0.0 {
            s.velocity += desired.normalize() * (p.acceleration * dt);
        }

        if s.velocity.length() > p.max_speed {
            s.velocity = s.velocity.normalize() * p.max_speed;
        }

        s.velocity *= (-p.damping * dt).exp();
        s.position += s.velocity * dt;

        s.roll = (elapsed * p.bob_frequency).sin() * p.bob_amplitude;
    }

    /// Step and write the pose into the avatar entity.
    /// No-op (returns `false`) while the entity is not mounted yet.
    pub fn drive(
        &mut self,
        entity: Option<&mut Entity>,
        dt: f32,
        controls: ControlVector,
        elapsed: f32,
    ) -> bool {
        let Some(entity) = entity else {
            return false;
        };
        self.step(dt, controls, elapsed);
        entity.pos = self.state.position;
        entity.rotation = self.state.rotation();
        true
    }
}

impl Default for AvatarMotion {
    fn default() -> Self {
        Self::new(MotionProfile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::input::controls::ControlField;

    const DT: f32 = 1.0 / 60.0;

    fn held(fields: &[ControlField]) -> ControlVector {
        fields.iter().fold(ControlVector::NONE, |v, f| v.with(*f))
    }

    #[test]
    fn coasting_decays_velocity_every_tick() {
        let mut m = AvatarMotion::default();
        for _ in 0..30 {
            m.step(DT, held(&[ControlField::Forward]), 0.0);
        }
        let mut last_speed = m.state().speed();
        let mut last_pos = m.state().position;
        let mut last_delta = f32::MAX;
        for i in 0..600 {
            m.step(DT, ControlVector::NONE, i as f32 * DT);
            let speed = m.state().speed();
            assert!(speed < last_speed, "speed must strictly decrease");
            last_speed = speed;
            last_delta = (m.state().position - last_pos).length();
            last_pos = m.state().position;
        }
        assert!(last_delta < 1e-6, "avatar should come to rest, moved {last_delta}");
    }

    #[test]
    fn forward_thrust_never_exceeds_max_speed() {
        let mut m = AvatarMotion::default();
        let max = m.profile().max_speed;
        for _ in 0..2000 {
            m.step(DT, held(&[ControlField::Forward]), 0.0);
            assert!(m.state().speed() <= max + 1e-4);
        }
        let v = m.state().velocity;
        // Heading 0 faces -Z.
        assert!(v.z < 0.0);
        assert!(v.x.abs() < 1e-4 && v.y.abs() < 1e-4);
        // Terminal speed is where thrust balances damping, below the clamp.
        assert!(m.state().speed() > 0.0);
    }

    #[test]
    fn ship_profile_clamps_at_its_own_max() {
        let mut m = AvatarMotion::new(MotionProfile {
            damping: 0.0,
            ..MotionProfile::ship()
        });
        for _ in 0..600 {
            m.step(DT, held(&[ControlField::Forward]), 0.0);
        }
        assert!((m.state().speed() - 150.0).abs() < 1e-2);
    }

    #[test]
    fn opposing_controls_cancel() {
        let mut m = AvatarMotion::default();
        let start = m.state().position;
        for _ in 0..60 {
            m.step(
                DT,
                held(&[ControlField::Forward, ControlField::Back, ControlField::Up, ControlField::Down]),
                0.0,
            );
        }
        assert_eq!(m.state().position, start);
    }

    #[test]
    fn diagonal_thrust_is_normalized() {
        let mut m = AvatarMotion::default();
        m.step(DT, held(&[ControlField::Forward, ControlField::Up]), 0.0);
        let profile = m.profile().clone();
        let expected = profile.acceleration * DT * (-profile.damping * DT).exp();
        assert!((m.state().speed() - expected).abs() < 1e-5);
        assert!(m.state().velocity.y > 0.0 && m.state().velocity.z < 0.0);
    }

    #[test]
    fn turning_rotates_heading_only() {
        let mut m = AvatarMotion::default();
        m.step(1.0, held(&[ControlField::Left]), 0.0);
        assert!((m.state().heading - 2.2).abs() < 1e-6);
        assert_eq!(m.state().velocity, Vec3::ZERO);
        m.step(1.0, held(&[ControlField::Left, ControlField::Right]), 0.0);
        assert!((m.state().heading - 2.2).abs() < 1e-6);
    }

    #[test]
    fn forward_follows_heading() {
        let mut s = KinematicState::at(Vec3::ZERO);
        s.heading = std::f32::consts::FRAC_PI_2;
        let f = s.forward();
        assert!((f.x + 1.0).abs() < 1e-6, "turning left faces -X, got {f:?}");
        s.roll = 0.3;
        assert!((s.forward() - f).length() < 1e-6);
    }

    #[test]
    fn roll_is_bounded_and_cosmetic() {
        let mut m = AvatarMotion::default();
        for i in 0..500 {
            m.step(DT, ControlVector::NONE, i as f32 * 0.37);
            assert!(m.state().roll.abs() <= m.profile().bob_amplitude + 1e-6);
        }
        assert_eq!(m.state().position, MotionProfile::astronaut().spawn);
    }

    #[test]
    fn drive_is_noop_until_mounted() {
        let mut m = AvatarMotion::default();
        assert!(!m.drive(None, DT, held(&[ControlField::Forward]), 0.0));
        assert_eq!(m.state().velocity, Vec3::ZERO);

        let mut avatar = Entity::new(EntityId(1));
        assert!(m.drive(Some(&mut avatar), DT, held(&[ControlField::Forward]), 0.0));
        assert_eq!(avatar.pos, m.state().position);
    }

    #[test]
    fn zero_dt_changes_nothing() {
        let mut m = AvatarMotion::default();
        m.step(0.0, held(&[ControlField::Forward, ControlField::Left]), 0.0);
        assert_eq!(m.state().position, MotionProfile::astronaut().spawn);
        assert_eq!(m.state().heading, 0.0);
    }
}
