//! Merges keyboard, gamepad and on-screen controls into one `ControlVector`.
//!
//! Every source keeps its own booleans; the merged vector is the field-wise OR
//! and is recomputed whenever a source changes, so readers never see a
//! half-applied event.

use serde::{Deserialize, Serialize};

use crate::input::controls::ControlVector;
use crate::input::gamepad::{GamepadConfig, GamepadSource};
use crate::input::keyboard::{default_bindings, KeyBinding, KeyTracking, KeyboardSource};
use crate::input::queue::InputEvent;
use crate::input::touch::{DeviceProfile, VirtualPad, MOBILE_BREAKPOINT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub key_bindings: Vec<KeyBinding>,
    pub key_tracking: KeyTracking,
    pub gamepad: GamepadConfig,
    pub mobile_breakpoint: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            key_bindings: default_bindings(),
            key_tracking: KeyTracking::default(),
            gamepad: GamepadConfig::default(),
            mobile_breakpoint: MOBILE_BREAKPOINT,
        }
    }
}

pub struct InputAggregator {
    keyboard: KeyboardSource,
    gamepad: GamepadSource,
    virtual_pad: VirtualPad,
    profile: DeviceProfile,
    breakpoint: f32,
    merged: ControlVector,
}

impl InputAggregator {
    pub fn new(config: &InputConfig) -> Self {
        let mut aggregator = Self {
            keyboard: KeyboardSource::new(config.key_bindings.clone(), config.key_tracking),
            gamepad: GamepadSource::new(config.gamepad.clone()),
            virtual_pad: VirtualPad::new(),
            profile: DeviceProfile::default(),
            breakpoint: config.mobile_breakpoint,
            merged: ControlVector::NONE,
        };
        aggregator.apply_profile(DeviceProfile::default());
        aggregator
    }

    /// Swap bindings and tuning. Held controls are released; the device
    /// profile is kept and re-evaluated against the new breakpoint.
    pub fn apply_config(&mut self, config: &InputConfig) {
        self.keyboard = KeyboardSource::new(config.key_bindings.clone(), config.key_tracking);
        self.gamepad = GamepadSource::new(config.gamepad.clone());
        self.breakpoint = config.mobile_breakpoint;
        self.apply_profile(self.profile);
        self.recompute();
    }

    /// Feed one device event. Returns `true` if a control source consumed it.
    /// Events that are not control input (pointer, wheel, custom) pass through.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        let consumed = match *event {
            InputEvent::KeyDown { key } => self.keyboard.key_down(key),
            InputEvent::KeyUp { key } => self.keyboard.key_up(key),
            InputEvent::GamepadPoll { index, ref snapshot } => {
                self.gamepad.poll(index, snapshot);
                true
            }
            InputEvent::GamepadDisconnected { index } => {
                self.gamepad.disconnect(index);
                true
            }
            InputEvent::VirtualButton { field, pressed } => {
                if pressed {
                    self.virtual_pad.press(field);
                } else {
                    self.virtual_pad.release(field);
                }
                true
            }
            InputEvent::DeviceProfile(profile) => {
                self.apply_profile(profile);
                true
            }
            _ => false,
        };
        if consumed {
            self.recompute();
        }
        consumed
    }

    fn apply_profile(&mut self, profile: DeviceProfile) {
        self.profile = profile;
        let touch = profile.is_touch_primary(self.breakpoint);
        if self.virtual_pad.set_enabled(touch) {
            log::info!("on-screen controls {}", if touch { "shown" } else { "hidden" });
        }
    }

    fn recompute(&mut self) {
        self.merged = self.keyboard.controls() | self.gamepad.controls() | self.virtual_pad.controls();
    }

    /// The merged control vector.
    pub fn controls(&self) -> ControlVector {
        self.merged
    }

    pub fn profile(&self) -> DeviceProfile {
        self.profile
    }

    /// Whether on-screen controls should be shown.
    pub fn is_touch_primary(&self) -> bool {
        self.virtual_pad.is_enabled()
    }

    pub fn gamepad_poll_interval_ms(&self) -> u32 {
        self.gamepad.poll_interval_ms(self.is_touch_primary())
    }

    pub fn key_tracking(&self) -> KeyTracking {
        self.keyboard.tracking()
    }

    /// Drop every held control (teardown, focus loss).
    pub fn reset(&mut self) {
        self.keyboard.clear();
        self.gamepad.clear();
        self.virtual_pad.clear();
        self.recompute();
    }
}

impl Default for InputAggregator {
    fn default() -> Self {
        Self::new(&InputConfig::default())
    }
}
