use bytemuck::{Pod, Zeroable};

use crate::components::entity::Entity;

/// Per-body render data read by the host renderer.
/// Must match the host protocol: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Mesh extent (sphere/ring radius, avatar height).
    pub radius: f32,
    /// Uniform scale on top of `radius` (hover grows planets).
    pub scale: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub emissive: f32,
    pub opacity: f32,
    /// `MeshShape::kind()` discriminant.
    pub kind: f32,
    /// Yaw for avatar meshes, ring thickness for rings, zero otherwise.
    pub extra: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    /// Build from an entity. `None` for entities without a mesh.
    pub fn from_entity(entity: &Entity) -> Option<Self> {
        use crate::components::mesh::MeshShape;

        let mesh = entity.mesh?;
        let extra = match mesh.shape {
            MeshShape::Ring { thickness, .. } => thickness,
            MeshShape::Avatar { .. } => {
                let (yaw, _, _) = entity.rotation.to_euler(glam::EulerRot::YXZ);
                yaw
            }
            MeshShape::Sphere { .. } => 0.0,
        };
        Some(Self {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            radius: mesh.shape.extent(),
            scale: entity.scale,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            emissive: mesh.emissive,
            opacity: mesh.opacity,
            kind: mesh.shape.kind(),
            extra,
        })
    }
}

/// Static background point (one star). Written once at init.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BackdropPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub size: f32,
}

impl BackdropPoint {
    pub const FLOATS: usize = 4;
}

/// Body instances for the current frame, in scene order.
pub struct InstanceBuffer {
    pub instances: Vec<BodyInstance>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(64),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: BodyInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}
