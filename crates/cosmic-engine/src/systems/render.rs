use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::renderer::instance::{BodyInstance, InstanceBuffer};

/// Build the body buffer from a set of entities, in scene order.
/// Inactive and meshless entities are skipped. Returns the buffer index of
/// `hovered` if it was written.
pub fn build_instance_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut InstanceBuffer,
    hovered: Option<EntityId>,
) -> Option<usize> {
    buffer.clear();
    let mut hovered_index = None;

    for entity in entities {
        if !entity.active {
            continue;
        }
        let Some(instance) = BodyInstance::from_entity(entity) else {
            continue;
        };
        if hovered == Some(entity.id) {
            hovered_index = Some(buffer.instances.len());
        }
        buffer.push(instance);
    }

    hovered_index
}
