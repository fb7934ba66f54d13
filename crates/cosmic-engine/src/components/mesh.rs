/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0.6, 0.6, 0.8)
    }
}

/// Primitive the host knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshShape {
    Sphere { radius: f32 },
    /// Flat ring in the XZ plane, centered on the entity.
    Ring { radius: f32, thickness: f32 },
    /// The player's avatar model (capsule body + helmet).
    Avatar { height: f32 },
}

impl MeshShape {
    /// Wire discriminant written into the instance buffer.
    pub fn kind(&self) -> f32 {
        match self {
            MeshShape::Sphere { .. } => 0.0,
            MeshShape::Ring { .. } => 1.0,
            MeshShape::Avatar { .. } => 2.0,
        }
    }

    /// Characteristic size: sphere/ring radius, avatar height.
    pub fn extent(&self) -> f32 {
        match *self {
            MeshShape::Sphere { radius } => radius,
            MeshShape::Ring { radius, .. } => radius,
            MeshShape::Avatar { height } => height,
        }
    }
}

/// Visual component: shape plus a simple emissive material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub shape: MeshShape,
    pub color: Color,
    /// Glow multiplier (0 = lit only by scene lights).
    pub emissive: f32,
    /// 1.0 = opaque.
    pub opacity: f32,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self {
            shape: MeshShape::Sphere { radius: 1.0 },
            color: Color::default(),
            emissive: 0.0,
            opacity: 1.0,
        }
    }
}

impl MeshComponent {
    pub fn new(shape: MeshShape, color: Color) -> Self {
        Self {
            shape,
            color,
            ..Default::default()
        }
    }

    pub fn sphere(radius: f32, color: Color) -> Self {
        Self::new(MeshShape::Sphere { radius }, color)
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}
