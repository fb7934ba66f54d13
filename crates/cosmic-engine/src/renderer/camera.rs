use std::f32::consts::PI;

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::api::types::Viewport;
use crate::input::queue::PointerButton;

/// Tuning for the third-person camera rig.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Orbit distance before any wheel input.
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Polar angle bounds (rad from +Y). Keeps the camera off the poles.
    pub min_polar: f32,
    pub max_polar: f32,
    /// Radians of orbit per CSS pixel of drag.
    pub drag_sensitivity: f32,
    /// Distance change per wheel tick.
    pub wheel_step: f32,
    /// Fraction of the remaining gap closed each tick.
    pub follow_lerp: f32,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
    pub initial_position: Vec3,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            distance: 10.0,
            min_distance: 4.0,
            max_distance: 40.0,
            min_polar: 0.1,
            max_polar: PI - 0.1,
            drag_sensitivity: 0.005,
            wheel_step: 1.0,
            follow_lerp: 0.12,
            fov_y_deg: 55.0,
            near: 0.1,
            far: 1000.0,
            initial_position: Vec3::new(0.0, 6.0, 26.0),
        }
    }
}

/// Polar never touches its configured bounds; they are exclusive.
const POLAR_MARGIN: f32 = 1e-4;

impl RigConfig {
    /// Polar angle pulled strictly inside `(min_polar, max_polar)`.
    pub fn clamp_polar(&self, polar: f32) -> f32 {
        let lo = self.min_polar + POLAR_MARGIN;
        let hi = (self.max_polar - POLAR_MARGIN).max(lo);
        polar.clamp(lo, hi)
    }

    /// Distance pulled into `[min_distance, max_distance]`.
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.min_distance, self.max_distance.max(self.min_distance))
    }
}

/// Spherical orbit parameters plus the in-progress drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraOrbitState {
    /// Rotation around +Y (rad). Zero places the camera on +Z.
    pub azimuth: f32,
    /// Angle from +Y (rad).
    pub polar: f32,
    pub distance: f32,
    pub is_orbiting: bool,
    pub last_pointer_x: f32,
    pub last_pointer_y: f32,
}

impl CameraOrbitState {
    /// Offset from the pivot, three.js `Spherical` convention.
    pub fn offset(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        Vec3::new(
            self.distance * sin_p * sin_a,
            self.distance * cos_p,
            self.distance * sin_p * cos_a,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// Follow behind and above the avatar.
    Chase,
    /// Secondary-button drag in progress.
    Orbit,
}

/// What the camera produced this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    pub view_proj: Mat4,
    pub orbiting: bool,
}

impl CameraView {
    pub fn inverse_view_proj(&self) -> Mat4 {
        self.view_proj.inverse()
    }
}

impl Default for CameraView {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 6.0, 26.0),
            target: Vec3::ZERO,
            view_proj: Mat4::IDENTITY,
            orbiting: false,
        }
    }
}

/// Orbit/chase camera around the avatar.
pub struct CameraRig {
    config: RigConfig,
    orbit: CameraOrbitState,
    position: Vec3,
    look_at: Vec3,
    aspect: f32,
}

impl CameraRig {
    pub fn new(config: RigConfig) -> Self {
        let orbit = CameraOrbitState {
            azimuth: 0.0,
            polar: PI / 3.0,
            distance: config.clamp_distance(config.distance),
            is_orbiting: false,
            last_pointer_x: 0.0,
            last_pointer_y: 0.0,
        };
        Self {
            position: config.initial_position,
            look_at: Vec3::ZERO,
            aspect: Viewport::default().aspect(),
            config,
            orbit,
        }
    }

    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    /// Replace tuning. Current distance and polar are re-clamped into the new bounds.
    pub fn set_config(&mut self, config: RigConfig) {
        self.orbit.distance = config.clamp_distance(self.orbit.distance);
        self.orbit.polar = config.clamp_polar(self.orbit.polar);
        self.config = config;
    }

    pub fn orbit(&self) -> &CameraOrbitState {
        &self.orbit
    }

    pub fn mode(&self) -> CameraMode {
        if self.orbit.is_orbiting {
            CameraMode::Orbit
        } else {
            CameraMode::Chase
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    // ── Pointer gestures ──────────────────────────────────────────────

    /// Secondary button starts an orbit drag. Returns `true` if it did.
    pub fn pointer_down(&mut self, button: PointerButton, x: f32, y: f32) -> bool {
        if button != PointerButton::Secondary {
            return false;
        }
        self.orbit.is_orbiting = true;
        self.orbit.last_pointer_x = x;
        self.orbit.last_pointer_y = y;
        true
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.orbit.is_orbiting {
            return;
        }
        let dx = x - self.orbit.last_pointer_x;
        let dy = y - self.orbit.last_pointer_y;
        self.orbit.last_pointer_x = x;
        self.orbit.last_pointer_y = y;

        let s = self.config.drag_sensitivity;
        self.orbit.azimuth -= dx * s;
        self.orbit.polar = self.config.clamp_polar(self.orbit.polar - dy * s);
    }

    pub fn pointer_up(&mut self, button: PointerButton) {
        if button == PointerButton::Secondary {
            self.orbit.is_orbiting = false;
        }
    }

    /// Positive `delta_y` (scroll down) pulls the camera out.
    pub fn wheel(&mut self, delta_y: f32) {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return;
        }
        let step = self.config.wheel_step * delta_y.signum();
        self.orbit.distance = self.config.clamp_distance(self.orbit.distance + step);
    }

    // ── Per-frame update ──────────────────────────────────────────────

    /// Where the camera wants to be this tick.
    pub fn desired_position(&self, avatar: Vec3, forward: Vec3) -> Vec3 {
        match self.mode() {
            CameraMode::Orbit => avatar + self.orbit.offset(),
            CameraMode::Chase => {
                let d = self.orbit.distance;
                let back = d.max(4.0);
                let up = (d * 0.35).max(2.0);
                avatar - forward * back + Vec3::Y * up
            }
        }
    }

    /// Move toward the desired position and aim at the avatar.
    pub fn update(&mut self, avatar: Vec3, forward: Vec3) -> CameraView {
        let desired = self.desired_position(avatar, forward);
        if self.mode() == CameraMode::Chase {
            self.sync_angles(desired - avatar);
        }
        self.position = self.position.lerp(desired, self.config.follow_lerp);
        self.look_at = avatar;
        self.view()
    }

    /// Keep azimuth/polar in step with the chase offset so the next orbit
    /// gesture starts where the camera already is. Distance stays untouched.
    fn sync_angles(&mut self, offset: Vec3) {
        let len = offset.length();
        if len <= f32::EPSILON {
            return;
        }
        self.orbit.azimuth = offset.x.atan2(offset.z);
        self.orbit.polar = self.config.clamp_polar((offset.y / len).clamp(-1.0, 1.0).acos());
    }

    // ── Matrices ──────────────────────────────────────────────────────

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn view_matrix(&self) -> Mat4 {
        let mut target = self.look_at;
        if (target - self.position).length_squared() < 1e-8 {
            target = self.position + Vec3::NEG_Z;
        }
        Mat4::look_at_rh(self.position, target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.config.fov_y_deg.to_radians(),
            self.aspect,
            self.config.near,
            self.config.far,
        )
    }

    pub fn view(&self) -> CameraView {
        CameraView {
            position: self.position,
            target: self.look_at,
            view_proj: self.projection_matrix() * self.view_matrix(),
            orbiting: self.orbit.is_orbiting,
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(RigConfig::default())
    }
}
