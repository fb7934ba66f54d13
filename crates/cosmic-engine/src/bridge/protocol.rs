/// Frame buffer layout shared with the host renderer.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Camera: 24 floats]  position xyz, target xyz, pad×2, view_proj 4×4 (column-major)
/// [Avatar: 8 floats]   position xyz, yaw, roll, speed, pad×2
/// [Bodies: max_bodies × 12 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities and section offsets are written into the header every frame.
/// The host reads them from the header instead of hardcoding offsets.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_BODIES: usize = 2;
pub const HEADER_BODY_COUNT: usize = 3;
pub const HEADER_MAX_EVENTS: usize = 4;
pub const HEADER_EVENT_COUNT: usize = 5;
pub const HEADER_CAMERA_OFFSET: usize = 6;
pub const HEADER_AVATAR_OFFSET: usize = 7;
pub const HEADER_BODIES_OFFSET: usize = 8;
pub const HEADER_EVENTS_OFFSET: usize = 9;
pub const HEADER_VIEWPORT_WIDTH: usize = 10;
pub const HEADER_VIEWPORT_HEIGHT: usize = 11;
/// Scene index of the hovered body, or -1.
pub const HEADER_HOVERED_INDEX: usize = 12;
/// 1.0 while on-screen controls should be shown.
pub const HEADER_TOUCH_CONTROLS: usize = 13;
/// Simulated seconds since init.
pub const HEADER_ELAPSED: usize = 14;
pub const HEADER_CAMERA_MODE: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera section (wire format, never changes).
pub const CAMERA_FLOATS: usize = 24;

/// Floats in the avatar section (wire format, never changes).
pub const AVATAR_FLOATS: usize = 8;

/// Floats per body instance (wire format, never changes).
pub const BODY_FLOATS: usize = 12;

/// Floats per game event: kind, a, b, c (wire format, never changes).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum bodies written per frame.
    pub max_bodies: usize,
    /// Maximum game events per frame.
    pub max_events: usize,

    /// Size of body data section in floats.
    pub body_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where the camera section begins.
    pub camera_offset: usize,
    /// Offset (in floats) where the avatar section begins.
    pub avatar_offset: usize,
    /// Offset (in floats) where body data begins.
    pub body_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_bodies: usize, max_events: usize) -> Self {
        let body_data_floats = max_bodies * BODY_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let camera_offset = HEADER_FLOATS;
        let avatar_offset = camera_offset + CAMERA_FLOATS;
        let body_data_offset = avatar_offset + AVATAR_FLOATS;
        let event_data_offset = body_data_offset + body_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_bodies,
            max_events,
            body_data_floats,
            event_data_floats,
            camera_offset,
            avatar_offset,
            body_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_bodies, config.max_events)
    }
}
