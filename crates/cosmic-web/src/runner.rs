use cosmic_engine::{
    build_instance_buffer, EngineContext, FrameInput, FrameWriter, Game, GameConfig, InputEvent,
    InputQueue, InstanceBuffer, ProtocolLayout, Viewport,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner via `export_game!`
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    instances: InstanceBuffer,
    frame: FrameWriter,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            game,
            ctx: EngineContext::with_config(&config),
            input: InputQueue::new(),
            instances: InstanceBuffer::new(),
            frame: FrameWriter::new(layout),
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.frame = FrameWriter::new(ProtocolLayout::from_config(&self.config));
        let viewport = self.ctx.viewport;
        self.ctx = EngineContext::with_config(&self.config);
        self.ctx.viewport = viewport;
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.write_frame(None);
    }

    /// Push an input event. Control sources see it immediately so a key
    /// pressed between frames is already held on the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        let was_touch = self.ctx.controls.is_touch_primary();
        self.ctx.controls.handle(&event);
        if was_touch != self.ctx.controls.is_touch_primary() {
            log::debug!("touch controls: {}", self.ctx.controls.is_touch_primary());
        }
        self.input.push(event);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.ctx.viewport = Viewport::new(width, height);
    }

    /// Run one frame: update game, build body buffer, pack the frame.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();
        self.ctx.clock.advance(dt);
        self.game.update(&mut self.ctx, &self.input);

        // Drain input after update
        self.input.drain();

        let hovered = build_instance_buffer(self.ctx.scene.iter(), &mut self.instances, self.ctx.hovered);
        self.write_frame(hovered);
    }

    fn write_frame(&mut self, hovered_index: Option<usize>) {
        self.frame.write(&FrameInput {
            frame: self.ctx.clock.frame(),
            elapsed: self.ctx.clock.elapsed(),
            viewport: self.ctx.viewport,
            camera: &self.ctx.camera,
            avatar: &self.ctx.avatar,
            bodies: &self.instances.instances,
            events: &self.ctx.events,
            hovered_index,
            touch_controls: self.ctx.controls.is_touch_primary(),
        });
    }

    /// Stop ticking and release every held control. The host still owns its
    /// DOM listeners and gamepad timer and must remove them itself.
    pub fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }
        self.game.shutdown(&mut self.ctx);
        self.ctx.controls.reset();
        self.input.clear();
        self.initialized = false;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Forward a runtime configuration override to the game.
    pub fn load_config(&mut self, json: &str) -> bool {
        self.game.load_config(&mut self.ctx, json)
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    // ---- Pointer accessors for the host's view over wasm memory ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.frame.len() as u32
    }

    pub fn frame(&self) -> &[f32] {
        self.frame.as_slice()
    }

    pub fn backdrop_ptr(&self) -> *const f32 {
        self.ctx.backdrop.as_ptr() as *const f32
    }

    /// Number of backdrop points (4 floats each).
    pub fn backdrop_len(&self) -> u32 {
        self.ctx.backdrop.len() as u32
    }

    pub fn overlay_json(&self) -> String {
        self.game.overlay_json().unwrap_or_else(|| "null".to_string())
    }

    pub fn gamepad_poll_ms(&self) -> u32 {
        self.ctx.controls.gamepad_poll_interval_ms()
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.frame.layout().buffer_total_floats as u32
    }
}
