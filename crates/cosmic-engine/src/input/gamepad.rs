//! Polled gamepad control source.
//!
//! Browsers expose gamepads only through `navigator.getGamepads()`, so the host
//! samples every connected pad on a timer and forwards a `GamepadSnapshot`.
//! Buttons 0 to 5 map straight onto the six control fields; the sticks are read
//! through a deflection threshold with per-axis hysteresis.

use serde::{Deserialize, Serialize};

use crate::input::controls::{ControlField, ControlVector};

/// Standard-mapping axes the source reads: left x/y, right x/y.
pub const AXIS_COUNT: usize = 4;
/// Buttons 0..6 map onto `ControlField::ALL` in order.
pub const MAPPED_BUTTONS: usize = 6;

/// One sample of a physical pad.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GamepadSnapshot {
    /// Bit `i` set = button `i` pressed (first 32 buttons).
    pub buttons: u32,
    pub axes: [f32; AXIS_COUNT],
    /// How many of `axes` the pad actually reported.
    pub axis_count: u8,
}

impl GamepadSnapshot {
    /// Build from the host's flat arrays. Extra buttons/axes are ignored.
    pub fn from_slices(buttons: &[bool], axes: &[f32]) -> Self {
        let mut mask = 0u32;
        for (i, pressed) in buttons.iter().take(32).enumerate() {
            if *pressed {
                mask |= 1 << i;
            }
        }
        let mut out = [0.0; AXIS_COUNT];
        let count = axes.len().min(AXIS_COUNT);
        for (slot, value) in out.iter_mut().zip(axes.iter()) {
            *slot = if value.is_finite() { value.clamp(-1.0, 1.0) } else { 0.0 };
        }
        Self {
            buttons: mask,
            axes: out,
            axis_count: count as u8,
        }
    }

    pub fn pressed(&self, button: usize) -> bool {
        button < 32 && self.buttons & (1 << button) != 0
    }

    pub fn axis(&self, axis: usize) -> Option<f32> {
        (axis < self.axis_count as usize).then(|| self.axes[axis])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamepadConfig {
    /// Stick deflection beyond which an axis counts as held.
    pub deflection_threshold: f32,
    /// Minimum change from the last accepted sample before an axis updates.
    pub hysteresis: f32,
    pub poll_interval_ms: u32,
    /// Slower polling on touch-primary devices to spare the battery.
    pub touch_poll_interval_ms: u32,
}

impl Default for GamepadConfig {
    fn default() -> Self {
        Self {
            deflection_threshold: 0.5,
            hysteresis: 0.1,
            poll_interval_ms: 100,
            touch_poll_interval_ms: 200,
        }
    }
}

#[derive(Debug, Clone)]
struct PadState {
    index: u32,
    buttons: ControlVector,
    /// Last accepted value per axis.
    axes: [f32; AXIS_COUNT],
}

impl PadState {
    fn new(index: u32) -> Self {
        Self {
            index,
            buttons: ControlVector::NONE,
            axes: [0.0; AXIS_COUNT],
        }
    }

    fn stick_controls(&self, threshold: f32) -> ControlVector {
        let mut v = ControlVector::NONE;
        let [lx, ly, rx, ry] = self.axes;
        // Left stick: turn + thrust. Screen-up is negative on the standard mapping.
        if lx < -threshold {
            v.left = true;
        }
        if lx > threshold {
            v.right = true;
        }
        if ly < -threshold {
            v.forward = true;
        }
        if ly > threshold {
            v.back = true;
        }
        // Right stick: turn + altitude, layered onto the same fields.
        if rx < -threshold {
            v.left = true;
        }
        if rx > threshold {
            v.right = true;
        }
        if ry < -threshold {
            v.up = true;
        }
        if ry > threshold {
            v.down = true;
        }
        v
    }
}

/// All connected pads, keyed by the browser's gamepad index.
pub struct GamepadSource {
    config: GamepadConfig,
    pads: Vec<PadState>,
}

impl GamepadSource {
    pub fn new(config: GamepadConfig) -> Self {
        Self {
            config,
            pads: Vec::new(),
        }
    }

    pub fn config(&self) -> &GamepadConfig {
        &self.config
    }

    /// Apply one poll sample. Returns `true` when this pad was not known yet.
    pub fn poll(&mut self, index: u32, snapshot: &GamepadSnapshot) -> bool {
        let newly_connected = !self.pads.iter().any(|p| p.index == index);
        if newly_connected {
            self.pads.push(PadState::new(index));
            log::info!("gamepad {} connected ({} total)", index, self.pads.len());
        }
        let hysteresis = self.config.hysteresis;
        let Some(pad) = self.pads.iter_mut().find(|p| p.index == index) else {
            return false;
        };

        for field in ControlField::ALL.iter().take(MAPPED_BUTTONS) {
            pad.buttons.set(*field, snapshot.pressed(field.index()));
        }
        for (axis, accepted) in pad.axes.iter_mut().enumerate() {
            let sample = snapshot.axis(axis).unwrap_or(0.0);
            if (sample - *accepted).abs() >= hysteresis {
                *accepted = sample;
            }
        }
        newly_connected
    }

    /// Forget a pad. Returns `true` if it was connected.
    pub fn disconnect(&mut self, index: u32) -> bool {
        let before = self.pads.len();
        self.pads.retain(|p| p.index != index);
        let removed = self.pads.len() != before;
        if removed {
            log::info!("gamepad {} disconnected ({} left)", index, self.pads.len());
        }
        removed
    }

    pub fn controls(&self) -> ControlVector {
        let threshold = self.config.deflection_threshold;
        self.pads
            .iter()
            .fold(ControlVector::NONE, |acc, pad| {
                acc | pad.buttons | pad.stick_controls(threshold)
            })
    }

    pub fn poll_interval_ms(&self, touch_primary: bool) -> u32 {
        if touch_primary {
            self.config.touch_poll_interval_ms
        } else {
            self.config.poll_interval_ms
        }
    }

    pub fn clear(&mut self) {
        self.pads.clear();
    }
}

impl Default for GamepadSource {
    fn default() -> Self {
        Self::new(GamepadConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sticks(axes: [f32; 4]) -> GamepadSnapshot {
        GamepadSnapshot::from_slices(&[], &axes)
    }

    #[test]
    fn buttons_map_to_fields_in_order() {
        let mut pads = GamepadSource::default();
        let snap = GamepadSnapshot::from_slices(&[true, false, false, true, false, true], &[]);
        assert!(pads.poll(0, &snap));
        let c = pads.controls();
        assert!(c.forward && c.right && c.down);
        assert!(!c.back && !c.left && !c.up);

        pads.poll(0, &GamepadSnapshot::default());
        assert_eq!(pads.controls(), ControlVector::NONE);
    }

    #[test]
    fn stick_needs_threshold() {
        let mut pads = GamepadSource::default();
        pads.poll(0, &sticks([0.4, 0.0, 0.0, 0.0]));
        assert!(!pads.controls().right);
        pads.poll(0, &sticks([0.8, -0.9, 0.0, 0.7]));
        let c = pads.controls();
        assert!(c.right && c.forward && c.down);
    }

    #[test]
    fn small_axis_changes_are_ignored() {
        let mut pads = GamepadSource::default();
        pads.poll(0, &sticks([0.45, 0.0, 0.0, 0.0]));
        // 0.45 -> 0.52 is under the 0.1 hysteresis: accepted value stays 0.45.
        pads.poll(0, &sticks([0.52, 0.0, 0.0, 0.0]));
        assert!(!pads.controls().right);
        pads.poll(0, &sticks([0.6, 0.0, 0.0, 0.0]));
        assert!(pads.controls().right);
    }

    #[test]
    fn right_stick_drives_altitude() {
        let mut pads = GamepadSource::default();
        pads.poll(0, &sticks([0.0, 0.0, -0.9, -0.9]));
        let c = pads.controls();
        assert!(c.left && c.up);
    }

    #[test]
    fn pads_are_or_merged_and_disconnect_clears() {
        let mut pads = GamepadSource::default();
        assert!(pads.poll(0, &GamepadSnapshot::from_slices(&[true], &[])));
        assert!(pads.poll(3, &GamepadSnapshot::from_slices(&[false, false, false, false, true], &[])));
        assert!(!pads.poll(3, &GamepadSnapshot::from_slices(&[false, false, false, false, true], &[])));
        let c = pads.controls();
        assert!(c.forward && c.up);

        assert!(pads.disconnect(0));
        assert!(!pads.disconnect(0));
        let c = pads.controls();
        assert!(!c.forward && c.up);
    }

    #[test]
    fn non_finite_axes_read_as_centered() {
        let snap = GamepadSnapshot::from_slices(&[], &[f32::NAN, 2.0]);
        assert_eq!(snap.axis(0), Some(0.0));
        assert_eq!(snap.axis(1), Some(1.0));
        assert_eq!(snap.axis(2), None);
    }

    #[test]
    fn poll_interval_depends_on_device() {
        let pads = GamepadSource::default();
        assert_eq!(pads.poll_interval_ms(false), 100);
        assert_eq!(pads.poll_interval_ms(true), 200);
    }
}
