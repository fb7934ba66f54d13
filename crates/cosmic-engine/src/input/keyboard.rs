use serde::{Deserialize, Serialize};

use crate::input::controls::{ControlField, ControlVector};

/// Physical keys the engine can bind, named after DOM `KeyboardEvent.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    Enter,
    Escape,
}

impl KeyCode {
    /// Parse a DOM `code` string. Keys the engine never binds return `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        let key = match code {
            "KeyW" => KeyCode::KeyW,
            "KeyA" => KeyCode::KeyA,
            "KeyS" => KeyCode::KeyS,
            "KeyD" => KeyCode::KeyD,
            "KeyQ" => KeyCode::KeyQ,
            "KeyE" => KeyCode::KeyE,
            "ArrowUp" => KeyCode::ArrowUp,
            "ArrowDown" => KeyCode::ArrowDown,
            "ArrowLeft" => KeyCode::ArrowLeft,
            "ArrowRight" => KeyCode::ArrowRight,
            "Space" => KeyCode::Space,
            "ShiftLeft" => KeyCode::ShiftLeft,
            "ShiftRight" => KeyCode::ShiftRight,
            "ControlLeft" => KeyCode::ControlLeft,
            "ControlRight" => KeyCode::ControlRight,
            "Enter" => KeyCode::Enter,
            "Escape" => KeyCode::Escape,
            _ => return None,
        };
        Some(key)
    }
}

/// One key → field binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub field: ControlField,
}

/// How releases are resolved when several keys drive the same field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyTracking {
    /// A field stays active while any bound key is still held.
    #[default]
    PerKey,
    /// One flag per field: any release clears it, even if another bound key
    /// is still down. Matches the legacy web build.
    SingleFlag,
}

/// WASD + arrows steer, Space ascends, either Shift descends.
pub fn default_bindings() -> Vec<KeyBinding> {
    use ControlField::*;
    use KeyCode::*;
    [
        (KeyW, Forward),
        (ArrowUp, Forward),
        (KeyS, Back),
        (ArrowDown, Back),
        (KeyA, Left),
        (ArrowLeft, Left),
        (KeyD, Right),
        (ArrowRight, Right),
        (Space, Up),
        (ShiftLeft, Down),
        (ShiftRight, Down),
    ]
    .into_iter()
    .map(|(key, field)| KeyBinding { key, field })
    .collect()
}

/// Keyboard control source.
pub struct KeyboardSource {
    bindings: Vec<KeyBinding>,
    tracking: KeyTracking,
    /// Bound keys currently held (PerKey mode).
    held: Vec<KeyCode>,
    /// Last written value per field (SingleFlag mode).
    flags: ControlVector,
}

impl KeyboardSource {
    pub fn new(bindings: Vec<KeyBinding>, tracking: KeyTracking) -> Self {
        Self {
            bindings,
            tracking,
            held: Vec::with_capacity(8),
            flags: ControlVector::NONE,
        }
    }

    fn is_bound(&self, key: KeyCode) -> bool {
        self.bindings.iter().any(|b| b.key == key)
    }

    /// Returns `true` if the key is bound (and therefore consumed).
    /// Auto-repeat keydowns are harmless.
    pub fn key_down(&mut self, key: KeyCode) -> bool {
        if !self.is_bound(key) {
            return false;
        }
        if !self.held.contains(&key) {
            self.held.push(key);
        }
        for b in self.bindings.iter().filter(|b| b.key == key) {
            self.flags.set(b.field, true);
        }
        true
    }

    pub fn key_up(&mut self, key: KeyCode) -> bool {
        if !self.is_bound(key) {
            return false;
        }
        self.held.retain(|k| *k != key);
        for b in self.bindings.iter().filter(|b| b.key == key) {
            self.flags.set(b.field, false);
        }
        true
    }

    pub fn controls(&self) -> ControlVector {
        match self.tracking {
            KeyTracking::SingleFlag => self.flags,
            KeyTracking::PerKey => {
                let mut v = ControlVector::NONE;
                for b in &self.bindings {
                    if self.held.contains(&b.key) {
                        v.set(b.field, true);
                    }
                }
                v
            }
        }
    }

    pub fn tracking(&self) -> KeyTracking {
        self.tracking
    }

    /// Release everything (focus loss, teardown).
    pub fn clear(&mut self) {
        self.held.clear();
        self.flags = ControlVector::NONE;
    }
}

impl Default for KeyboardSource {
    fn default() -> Self {
        Self::new(default_bindings(), KeyTracking::default())
    }
}
