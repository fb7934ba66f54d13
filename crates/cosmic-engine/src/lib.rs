pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod motion;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, GameEvent, Viewport};
pub use components::entity::Entity;
pub use components::mesh::{Color, MeshComponent, MeshShape};
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use renderer::camera::{CameraMode, CameraOrbitState, CameraRig, CameraView, RigConfig};
pub use renderer::instance::{BackdropPoint, BodyInstance, InstanceBuffer};
pub use renderer::picking::{pick, ray_sphere, screen_to_ndc, Ray};
pub use input::aggregator::{InputAggregator, InputConfig};
pub use input::controls::{ControlField, ControlVector};
pub use input::gamepad::{GamepadConfig, GamepadSnapshot};
pub use input::keyboard::{KeyBinding, KeyCode, KeyTracking};
pub use input::queue::{InputEvent, InputQueue, PointerButton};
pub use input::touch::DeviceProfile;
pub use motion::{AvatarMotion, AvatarPose, KinematicState, MotionProfile};
pub use bridge::frame::{FrameInput, FrameWriter};
pub use bridge::protocol::ProtocolLayout;
pub use systems::render::build_instance_buffer;
