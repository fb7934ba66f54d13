use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// One of the six movement signals an avatar understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlField {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
}

impl ControlField {
    pub const ALL: [ControlField; 6] = [
        ControlField::Forward,
        ControlField::Back,
        ControlField::Left,
        ControlField::Right,
        ControlField::Up,
        ControlField::Down,
    ];

    /// Position of this field in `ALL` (also the gamepad button it maps to).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of `index`. Unknown indices (from the host) map to `None`.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// Merged boolean control state. Opposing fields may be held together;
/// they cancel in the motion model, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlVector {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl ControlVector {
    pub const NONE: Self = Self {
        forward: false,
        back: false,
        left: false,
        right: false,
        up: false,
        down: false,
    };

    pub fn get(&self, field: ControlField) -> bool {
        match field {
            ControlField::Forward => self.forward,
            ControlField::Back => self.back,
            ControlField::Left => self.left,
            ControlField::Right => self.right,
            ControlField::Up => self.up,
            ControlField::Down => self.down,
        }
    }

    pub fn set(&mut self, field: ControlField, value: bool) {
        let slot = match field {
            ControlField::Forward => &mut self.forward,
            ControlField::Back => &mut self.back,
            ControlField::Left => &mut self.left,
            ControlField::Right => &mut self.right,
            ControlField::Up => &mut self.up,
            ControlField::Down => &mut self.down,
        };
        *slot = value;
    }

    pub fn with(mut self, field: ControlField) -> Self {
        self.set(field, true);
        self
    }

    /// Field-wise logical OR.
    pub fn merge(self, other: Self) -> Self {
        Self {
            forward: self.forward || other.forward,
            back: self.back || other.back,
            left: self.left || other.left,
            right: self.right || other.right,
            up: self.up || other.up,
            down: self.down || other.down,
        }
    }
}

impl BitOr for ControlVector {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.merge(rhs)
    }
}
