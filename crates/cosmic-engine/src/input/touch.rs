use serde::{Deserialize, Serialize};

use crate::input::controls::{ControlField, ControlVector};

/// Viewport width (CSS px) below which a device counts as touch-primary.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// What the host knows about the device: viewport width, the
/// `(pointer: coarse)` media query, and `navigator.maxTouchPoints`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub viewport_width: f32,
    pub coarse_pointer: bool,
    pub touch_points: u32,
}

impl DeviceProfile {
    pub fn desktop(viewport_width: f32) -> Self {
        Self {
            viewport_width,
            coarse_pointer: false,
            touch_points: 0,
        }
    }

    pub fn is_touch_primary(&self, breakpoint: f32) -> bool {
        self.viewport_width < breakpoint || self.coarse_pointer || self.touch_points > 0
    }
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self::desktop(1280.0)
    }
}

/// On-screen d-pad and altitude buttons.
pub struct VirtualPad {
    enabled: bool,
    state: ControlVector,
}

impl VirtualPad {
    pub fn new() -> Self {
        Self {
            enabled: false,
            state: ControlVector::NONE,
        }
    }

    /// Enable or disable the pad. Disabling drops any held buttons.
    /// Returns `true` if visibility changed.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if self.enabled == enabled {
            return false;
        }
        self.enabled = enabled;
        if !enabled {
            self.state = ControlVector::NONE;
        }
        true
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Ignored while the pad is hidden.
    pub fn press(&mut self, field: ControlField) {
        if self.enabled {
            self.state.set(field, true);
        }
    }

    pub fn release(&mut self, field: ControlField) {
        self.state.set(field, false);
    }

    pub fn controls(&self) -> ControlVector {
        self.state
    }

    pub fn clear(&mut self) {
        self.state = ControlVector::NONE;
    }
}

impl Default for VirtualPad {
    fn default() -> Self {
        Self::new()
    }
}
