use crate::api::types::{EntityId, GameEvent, Viewport};
use crate::core::scene::Scene;
use crate::core::time::FrameClock;
use crate::input::aggregator::{InputAggregator, InputConfig};
use crate::input::queue::InputQueue;
use crate::motion::AvatarPose;
use crate::renderer::camera::CameraView;
use crate::renderer::instance::BackdropPoint;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Maximum number of bodies written to the frame buffer (default: 64).
    pub max_bodies: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Longest frame delta the simulation accepts, in seconds (default: 0.1).
    pub max_frame_dt: f32,
    /// Keyboard bindings, gamepad tuning and touch breakpoint.
    pub input: InputConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_bodies: 64,
            max_events: 32,
            max_frame_dt: 0.1,
            input: InputConfig::default(),
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The per-frame tick. `ctx.controls` already reflects every device event
    /// in `input`; the queue is for pointer, wheel and host-specific events.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Apply a runtime configuration override (JSON). Returns `false` if the
    /// payload was rejected and the previous configuration stays in effect.
    fn load_config(&mut self, _ctx: &mut EngineContext, _json: &str) -> bool {
        false
    }

    /// JSON describing any DOM overlay the host should show.
    fn overlay_json(&self) -> Option<String> {
        None
    }

    /// Release game-side state before the runner is dropped.
    fn shutdown(&mut self, _ctx: &mut EngineContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub events: Vec<GameEvent>,
    /// Merged device controls. Updated by the runner as events arrive.
    pub controls: InputAggregator,
    pub clock: FrameClock,
    pub viewport: Viewport,
    /// Camera output for this frame, written by the game.
    pub camera: CameraView,
    /// Avatar pose for this frame, written by the game.
    pub avatar: AvatarPose,
    /// Entity under the pointer, if any.
    pub hovered: Option<EntityId>,
    /// Static background points, written once at init.
    pub backdrop: Vec<BackdropPoint>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::with_capacity(config.max_bodies),
            events: Vec::with_capacity(config.max_events),
            controls: InputAggregator::new(&config.input),
            clock: FrameClock::new(config.max_frame_dt),
            viewport: Viewport::default(),
            camera: CameraView::default(),
            avatar: AvatarPose::default(),
            hovered: None,
            backdrop: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
