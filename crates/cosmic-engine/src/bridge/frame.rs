//! Packs one frame of engine state into the flat `f32` buffer the host reads.

use crate::api::types::{GameEvent, Viewport};
use crate::bridge::protocol::*;
use crate::motion::AvatarPose;
use crate::renderer::camera::CameraView;
use crate::renderer::instance::BodyInstance;

/// Everything the writer needs for one frame.
pub struct FrameInput<'a> {
    pub frame: u64,
    pub elapsed: f32,
    pub viewport: Viewport,
    pub camera: &'a CameraView,
    pub avatar: &'a AvatarPose,
    pub bodies: &'a [BodyInstance],
    pub events: &'a [GameEvent],
    pub hovered_index: Option<usize>,
    pub touch_controls: bool,
}

pub struct FrameWriter {
    layout: ProtocolLayout,
    data: Vec<f32>,
    overflow_logged: bool,
}

impl FrameWriter {
    pub fn new(layout: ProtocolLayout) -> Self {
        let data = vec![0.0; layout.buffer_total_floats];
        Self {
            layout,
            data,
            overflow_logged: false,
        }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    /// Overwrite the whole buffer. Bodies and events past capacity are dropped.
    pub fn write(&mut self, input: &FrameInput<'_>) {
        let l = &self.layout;
        let body_count = input.bodies.len().min(l.max_bodies);
        let event_count = input.events.len().min(l.max_events);
        if (body_count < input.bodies.len() || event_count < input.events.len()) && !self.overflow_logged {
            log::warn!(
                "frame overflow: {} bodies (max {}), {} events (max {})",
                input.bodies.len(),
                l.max_bodies,
                input.events.len(),
                l.max_events
            );
            self.overflow_logged = true;
        }

        let h = &mut self.data[..HEADER_FLOATS];
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        h[HEADER_FRAME_COUNTER] = input.frame as f32;
        h[HEADER_MAX_BODIES] = l.max_bodies as f32;
        h[HEADER_BODY_COUNT] = body_count as f32;
        h[HEADER_MAX_EVENTS] = l.max_events as f32;
        h[HEADER_EVENT_COUNT] = event_count as f32;
        h[HEADER_CAMERA_OFFSET] = l.camera_offset as f32;
        h[HEADER_AVATAR_OFFSET] = l.avatar_offset as f32;
        h[HEADER_BODIES_OFFSET] = l.body_data_offset as f32;
        h[HEADER_EVENTS_OFFSET] = l.event_data_offset as f32;
        h[HEADER_VIEWPORT_WIDTH] = input.viewport.width;
        h[HEADER_VIEWPORT_HEIGHT] = input.viewport.height;
        h[HEADER_HOVERED_INDEX] = match input.hovered_index {
            Some(i) if i < body_count => i as f32,
            _ => -1.0,
        };
        h[HEADER_TOUCH_CONTROLS] = if input.touch_controls { 1.0 } else { 0.0 };
        h[HEADER_ELAPSED] = input.elapsed;
        h[HEADER_CAMERA_MODE] = if input.camera.orbiting { 1.0 } else { 0.0 };

        let cam = &mut self.data[l.camera_offset..l.camera_offset + CAMERA_FLOATS];
        cam[0..3].copy_from_slice(&input.camera.position.to_array());
        cam[3..6].copy_from_slice(&input.camera.target.to_array());
        cam[6] = 0.0;
        cam[7] = 0.0;
        cam[8..24].copy_from_slice(&input.camera.view_proj.to_cols_array());

        let a = input.avatar;
        let av = &mut self.data[l.avatar_offset..l.avatar_offset + AVATAR_FLOATS];
        av.copy_from_slice(&[
            a.position.x,
            a.position.y,
            a.position.z,
            a.heading,
            a.roll,
            a.speed,
            0.0,
            0.0,
        ]);

        let bodies: &[f32] = bytemuck::cast_slice(&input.bodies[..body_count]);
        let start = l.body_data_offset;
        self.data[start..start + bodies.len()].copy_from_slice(bodies);
        self.data[start + bodies.len()..l.event_data_offset].fill(0.0);

        let events: &[f32] = bytemuck::cast_slice(&input.events[..event_count]);
        let start = l.event_data_offset;
        self.data[start..start + events.len()].copy_from_slice(events);
        self.data[start + events.len()..l.buffer_total_floats].fill(0.0);
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Raw pointer for the host's view over wasm memory.
    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
