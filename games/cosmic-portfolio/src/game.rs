/// Cosmic Portfolio: a résumé laid out as planets around a sun.
///
/// Fly the astronaut with keyboard, gamepad or on-screen buttons. Click a
/// planet to open its section panel, click the sun for the profile card.
/// Right-drag orbits the camera, the wheel zooms.

use cosmic_engine::*;

use crate::config::PortfolioConfig;
use crate::content::PortfolioContent;
use crate::layout::{self, CelestialBody};
use crate::overlay::{OverlayController, OverlayLayer, SelectionTarget};
use crate::panel::{OverlaySnapshot, PanelView, ProfileView};
use crate::starfield;

// ── Custom event kinds from the host UI ──────────────────────────────

/// Panel close button.
pub const CUSTOM_CLOSE_PANEL: u32 = 1;
/// Profile modal close button.
pub const CUSTOM_CLOSE_PROFILE: u32 = 2;
/// Backdrop click. a = 0 panel, 1 profile.
pub const CUSTOM_BACKDROP: u32 = 3;
pub const CUSTOM_OPEN_PROFILE: u32 = 4;
/// Open a section from DOM navigation. a = section index.
pub const CUSTOM_SELECT_SECTION: u32 = 5;

// ── Game event kinds to the host ─────────────────────────────────────

/// a = section index (-1 when closed), b = 1 open / 0 closed.
pub const EVENT_PANEL: f32 = 1.0;
/// a = 1 open / 0 closed.
pub const EVENT_PROFILE: f32 = 2.0;
/// a = hovered planet index, or -1.
pub const EVENT_HOVER: f32 = 3.0;
/// a = 1 show / 0 hide on-screen controls.
pub const EVENT_TOUCH_CONTROLS: f32 = 4.0;
/// One per activation. a = planet index (-1 for the sun), b = 1 for the sun.
pub const EVENT_SELECT: f32 = 5.0;

// ── Interaction ──────────────────────────────────────────────────────

/// CSS-pixel travel before a primary press stops counting as a click.
const DRAG_THRESHOLD: f32 = 5.0;
const HOVER_SCALE: f32 = 1.15;
const PLANET_EMISSIVE: f32 = 0.2;
/// Planet whose panel is open.
const SELECTED_EMISSIVE: f32 = 0.35;
const HOVER_EMISSIVE: f32 = 0.5;

// ── Avatar look ──────────────────────────────────────────────────────

const AVATAR_HEIGHT: f32 = 3.0;
const AVATAR_COLOR: &str = "#9ca3af";
const AVATAR_EMISSIVE: f32 = 0.2;

/// Sun, glow and avatar; every section adds a ring and a planet.
const FIXED_BODIES: usize = 3;
const BODIES_PER_SECTION: usize = 2;

struct Planet {
    entity: EntityId,
    body: CelestialBody,
}

/// Primary-button press being tracked for click-vs-drag.
#[derive(Debug, Clone, Copy)]
struct Press {
    x: f32,
    y: f32,
    moved: bool,
}

pub struct CosmicPortfolio {
    content: PortfolioContent,
    config: PortfolioConfig,
    motion: AvatarMotion,
    rig: CameraRig,
    overlay: OverlayController,

    // Entity IDs
    sun_id: Option<EntityId>,
    avatar_id: Option<EntityId>,
    planets: Vec<Planet>,

    // Pointer state
    press: Option<Press>,
    pointer: Option<(f32, f32)>,
    hovered: Option<usize>,
    touch_controls: bool,
}

impl CosmicPortfolio {
    pub fn new() -> Self {
        let content = PortfolioContent::bundled().unwrap_or_else(|err| {
            log::error!("bundled portfolio content is invalid: {}", err);
            PortfolioContent::default()
        });
        Self::with_content(content)
    }

    pub fn with_content(content: PortfolioContent) -> Self {
        let config = PortfolioConfig::default();
        Self {
            motion: AvatarMotion::new(config.motion.clone()),
            rig: CameraRig::new(config.rig.clone()),
            overlay: OverlayController::new(),
            content,
            config,
            sun_id: None,
            avatar_id: None,
            planets: Vec::new(),
            press: None,
            pointer: None,
            hovered: None,
            touch_controls: false,
        }
    }

    pub fn overlay(&self) -> &OverlayController {
        &self.overlay
    }

    pub fn motion(&self) -> &AvatarMotion {
        &self.motion
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn bodies(&self) -> impl Iterator<Item = &CelestialBody> {
        self.planets.iter().map(|p| &p.body)
    }

    // ── Selection ──────────────────────────────────────────────────

    /// What the ray under a screen point hits first.
    fn hit_test(&self, ctx: &EngineContext, x: f32, y: f32) -> Option<SelectionTarget> {
        let ray = Ray::from_screen(x, y, ctx.viewport, ctx.camera.inverse_view_proj());
        let (id, _) = pick(&ctx.scene, &ray)?;
        if Some(id) == self.sun_id {
            return Some(SelectionTarget::Sun);
        }
        self.planets
            .iter()
            .find(|p| p.entity == id)
            .map(|p| SelectionTarget::Section(p.body.id.clone()))
    }

    fn planet_index(&self, section_id: &str) -> Option<usize> {
        self.planets.iter().position(|p| p.body.id == section_id)
    }

    fn activate(&mut self, ctx: &mut EngineContext, target: SelectionTarget) {
        let (index, is_sun) = match &target {
            SelectionTarget::Sun => (-1.0, 1.0),
            SelectionTarget::Section(id) => match self.planet_index(id) {
                Some(i) => (i as f32, 0.0),
                None => return,
            },
        };
        ctx.emit_event(GameEvent::new(EVENT_SELECT, index, is_sun, 0.0));
        if let Some(layer) = self.overlay.select(target) {
            self.emit_layer(ctx, layer);
        }
    }

    /// Report the current state of a layer that just changed.
    fn emit_layer(&self, ctx: &mut EngineContext, layer: OverlayLayer) {
        match layer {
            OverlayLayer::Panel => {
                let index = self
                    .overlay
                    .panel_id()
                    .and_then(|id| self.planet_index(id))
                    .map_or(-1.0, |i| i as f32);
                let open = if self.overlay.panel_id().is_some() { 1.0 } else { 0.0 };
                ctx.emit_event(GameEvent::new(EVENT_PANEL, index, open, 0.0));
            }
            OverlayLayer::Profile => {
                let open = if self.overlay.is_profile_open() { 1.0 } else { 0.0 };
                ctx.emit_event(GameEvent::new(EVENT_PROFILE, open, 0.0, 0.0));
            }
        }
    }

    fn close_layer(&mut self, ctx: &mut EngineContext, layer: OverlayLayer) {
        if self.overlay.close_layer(layer) {
            self.emit_layer(ctx, layer);
        }
    }

    // ── Input ──────────────────────────────────────────────────────

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { button, x, y } => {
                    self.pointer = Some((x, y));
                    self.rig.pointer_down(button, x, y);
                    if button == PointerButton::Primary {
                        self.press = Some(Press { x, y, moved: false });
                    }
                }
                InputEvent::PointerMove { x, y } => {
                    self.pointer = Some((x, y));
                    self.rig.pointer_move(x, y);
                    if let Some(press) = self.press.as_mut() {
                        if (x - press.x).hypot(y - press.y) > DRAG_THRESHOLD {
                            press.moved = true;
                        }
                    }
                }
                InputEvent::PointerUp { button, x, y } => {
                    self.rig.pointer_up(button);
                    if button == PointerButton::Primary {
                        if let Some(press) = self.press.take() {
                            let moved = press.moved || (x - press.x).hypot(y - press.y) > DRAG_THRESHOLD;
                            if !moved {
                                if let Some(target) = self.hit_test(ctx, x, y) {
                                    self.activate(ctx, target);
                                }
                            }
                        }
                    }
                }
                InputEvent::PointerLeave => {
                    self.pointer = None;
                    self.press = None;
                }
                InputEvent::Wheel { delta_y } => self.rig.wheel(delta_y),
                InputEvent::KeyDown { key: KeyCode::Escape } => {
                    if let Some(layer) = self.overlay.dismiss_top() {
                        self.emit_layer(ctx, layer);
                    }
                }
                InputEvent::Custom { kind, a, .. } => match kind {
                    CUSTOM_CLOSE_PANEL => self.close_layer(ctx, OverlayLayer::Panel),
                    CUSTOM_CLOSE_PROFILE => self.close_layer(ctx, OverlayLayer::Profile),
                    CUSTOM_BACKDROP => {
                        let layer = if a >= 1.0 { OverlayLayer::Profile } else { OverlayLayer::Panel };
                        self.close_layer(ctx, layer);
                    }
                    CUSTOM_OPEN_PROFILE => self.activate(ctx, SelectionTarget::Sun),
                    CUSTOM_SELECT_SECTION => {
                        let target = (a >= 0.0)
                            .then(|| self.planets.get(a as usize))
                            .flatten()
                            .map(|p| SelectionTarget::Section(p.body.id.clone()));
                        if let Some(target) = target {
                            self.activate(ctx, target);
                        }
                    }
                    _ => {}
                },
                _ => {}
            }
        }
    }

    // ── Hover ──────────────────────────────────────────────────────

    /// Planet under the pointer. Only a visual affordance.
    fn update_hover(&mut self, ctx: &mut EngineContext) {
        let hovered = match self.pointer {
            Some((x, y)) if !ctx.camera.orbiting => match self.hit_test(ctx, x, y) {
                Some(SelectionTarget::Section(id)) => self.planet_index(&id),
                _ => None,
            },
            _ => None,
        };
        if hovered != self.hovered {
            self.hovered = hovered;
            ctx.emit_event(GameEvent::new(EVENT_HOVER, hovered.map_or(-1.0, |i| i as f32), 0.0, 0.0));
        }
        ctx.hovered = hovered.map(|i| self.planets[i].entity);
        self.apply_affordance(ctx);
    }

    /// Hover enlarges and brightens; the open section stays lit.
    fn apply_affordance(&self, ctx: &mut EngineContext) {
        let selected = self.overlay.panel_id().and_then(|id| self.planet_index(id));
        for (i, planet) in self.planets.iter().enumerate() {
            let Some(entity) = ctx.scene.get_mut(planet.entity) else {
                continue;
            };
            let hovered = self.hovered == Some(i);
            entity.scale = if hovered { HOVER_SCALE } else { 1.0 };
            if let Some(mesh) = entity.mesh.as_mut() {
                mesh.emissive = if hovered {
                    HOVER_EMISSIVE
                } else if selected == Some(i) {
                    SELECTED_EMISSIVE
                } else {
                    PLANET_EMISSIVE
                };
            }
        }
    }

    // ── Spawning ───────────────────────────────────────────────────

    fn spawn_sun(&mut self, ctx: &mut EngineContext) {
        let sun_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(sun_id)
                .with_tag("sun")
                .with_mesh(
                    MeshComponent::sphere(layout::SUN_RADIUS, layout::hex(layout::SUN_COLOR))
                        .with_emissive(layout::SUN_EMISSIVE),
                )
                .pickable(),
        );
        self.sun_id = Some(sun_id);

        let glow_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(glow_id)
                .with_tag("sun-glow")
                .with_scale(layout::GLOW_SCALE)
                .with_mesh(
                    MeshComponent::sphere(layout::SUN_RADIUS, layout::hex(layout::GLOW_COLOR))
                        .with_emissive(1.0)
                        .with_opacity(layout::GLOW_OPACITY),
                ),
        );
    }

    fn spawn_planets(&mut self, ctx: &mut EngineContext) {
        let bodies = layout::layout_bodies(&self.content);

        // Rings first so planets draw over them.
        for body in &bodies {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(format!("ring:{}", body.id))
                    .with_mesh(
                        MeshComponent::new(
                            MeshShape::Ring {
                                radius: body.orbit_radius(),
                                thickness: layout::RING_THICKNESS,
                            },
                            layout::hex(layout::RING_COLOR),
                        )
                        .with_opacity(layout::RING_OPACITY),
                    ),
            );
        }

        for body in bodies {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(format!("planet:{}", body.id))
                    .with_pos(body.position)
                    .with_mesh(MeshComponent::sphere(body.radius, body.color).with_emissive(PLANET_EMISSIVE))
                    .pickable(),
            );
            self.planets.push(Planet { entity: id, body });
        }
    }

    fn spawn_avatar(&mut self, ctx: &mut EngineContext) {
        let state = self.motion.state();
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag("avatar")
                .with_pos(state.position)
                .with_rotation(state.rotation())
                .with_mesh(
                    MeshComponent::new(MeshShape::Avatar { height: AVATAR_HEIGHT }, layout::hex(AVATAR_COLOR))
                        .with_emissive(AVATAR_EMISSIVE),
                ),
        );
        self.avatar_id = Some(id);
    }

    fn snapshot(&self) -> OverlaySnapshot {
        OverlaySnapshot {
            panel: self
                .overlay
                .panel_id()
                .and_then(|id| self.content.section(id))
                .map(PanelView::render),
            profile: self
                .overlay
                .is_profile_open()
                .then(|| ProfileView::render(&self.content.profile)),
            hovered: self.hovered.map(|i| self.planets[i].body.display_name.clone()),
            sun_label: self.content.sun_label.clone(),
            sun_label_anchor: layout::SUN_LABEL_POS.to_array(),
            touch_controls: self.touch_controls,
        }
    }
}

impl Default for CosmicPortfolio {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for CosmicPortfolio {
    /// Frame capacity grows with the content so every spawned body is drawn.
    fn config(&self) -> GameConfig {
        let defaults = GameConfig::default();
        let bodies = FIXED_BODIES + BODIES_PER_SECTION * self.content.len();
        GameConfig {
            max_bodies: defaults.max_bodies.max(bodies),
            input: self.config.input.clone(),
            ..defaults
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.planets.clear();
        self.spawn_sun(ctx);
        self.spawn_planets(ctx);
        self.spawn_avatar(ctx);
        ctx.backdrop = starfield::generate(starfield::STAR_COUNT, starfield::STAR_SEED);

        self.rig.set_viewport(ctx.viewport);
        ctx.camera = self.rig.view();
        ctx.avatar = AvatarPose::from(self.motion.state());
        self.touch_controls = ctx.controls.is_touch_primary();

        log::info!(
            "portfolio: {} sections, {} entities, {} stars",
            self.content.len(),
            ctx.scene.len(),
            ctx.backdrop.len()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let dt = ctx.clock.dt();
        self.rig.set_viewport(ctx.viewport);

        // ── Pointer, keys, host UI ───────────────────────────────────
        self.handle_input(ctx, input);

        // ── Avatar ───────────────────────────────────────────────────
        let controls = ctx.controls.controls();
        let elapsed = ctx.clock.elapsed();
        let avatar = self.avatar_id.and_then(|id| ctx.scene.get_mut(id));
        self.motion.drive(avatar, dt, controls, elapsed);
        let state = *self.motion.state();
        ctx.avatar = AvatarPose::from(&state);

        // ── Camera ───────────────────────────────────────────────────
        ctx.camera = self.rig.update(state.position, state.forward());

        // ── Hover (uses this frame's camera) ─────────────────────────
        self.update_hover(ctx);

        // ── On-screen controls visibility ────────────────────────────
        let touch = ctx.controls.is_touch_primary();
        if touch != self.touch_controls {
            self.touch_controls = touch;
            ctx.emit_event(GameEvent::new(EVENT_TOUCH_CONTROLS, if touch { 1.0 } else { 0.0 }, 0.0, 0.0));
        }
    }

    fn load_config(&mut self, ctx: &mut EngineContext, json: &str) -> bool {
        match PortfolioConfig::from_json(json) {
            Ok(config) => {
                self.motion.set_profile(config.motion.clone());
                self.rig.set_config(config.rig.clone());
                ctx.controls.apply_config(&config.input);
                self.config = config;
                log::info!("portfolio: config applied");
                true
            }
            Err(err) => {
                log::warn!("portfolio: rejected config: {}", err);
                false
            }
        }
    }

    fn overlay_json(&self) -> Option<String> {
        match self.snapshot().to_json() {
            Ok(json) => Some(json),
            Err(err) => {
                log::error!("portfolio: overlay serialization failed: {}", err);
                None
            }
        }
    }

    fn shutdown(&mut self, _ctx: &mut EngineContext) {
        self.overlay = OverlayController::new();
        self.press = None;
        self.pointer = None;
        self.hovered = None;
        log::info!("portfolio: shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Section;
    use cosmic_engine::bridge::protocol::{HEADER_BODY_COUNT, HEADER_MAX_BODIES};
    use cosmic_web::GameRunner;
    use glam::{Vec3, Vec4};

    fn setup() -> (CosmicPortfolio, EngineContext) {
        let mut game = CosmicPortfolio::new();
        let mut ctx = EngineContext::new();
        ctx.viewport = Viewport::new(800.0, 600.0);
        game.init(&mut ctx);
        (game, ctx)
    }

    /// Where a world point lands on screen under the current camera.
    fn screen_of(ctx: &EngineContext, world: Vec3) -> (f32, f32) {
        let clip = ctx.camera.view_proj * Vec4::new(world.x, world.y, world.z, 1.0);
        assert!(clip.w > 0.0, "point behind camera");
        let ndc = clip.truncate() / clip.w;
        (
            (ndc.x + 1.0) * 0.5 * ctx.viewport.width,
            (1.0 - ndc.y) * 0.5 * ctx.viewport.height,
        )
    }

    fn click(x: f32, y: f32) -> InputQueue {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { button: PointerButton::Primary, x, y });
        q.push(InputEvent::PointerUp { button: PointerButton::Primary, x, y });
        q
    }

    fn custom(kind: u32, a: f32) -> InputQueue {
        let mut q = InputQueue::new();
        q.push(InputEvent::Custom { kind, a, b: 0.0, c: 0.0 });
        q
    }

    fn tick(game: &mut CosmicPortfolio, ctx: &mut EngineContext, input: &InputQueue) {
        ctx.clear_frame_data();
        ctx.clock.advance(1.0 / 60.0);
        game.update(ctx, input);
    }

    fn events_of(ctx: &EngineContext, kind: f32) -> Vec<GameEvent> {
        ctx.events.iter().copied().filter(|e| e.kind == kind).collect()
    }

    #[test]
    fn init_spawns_the_system() {
        let (game, ctx) = setup();
        // sun + glow + 5 rings + 5 planets + avatar
        assert_eq!(ctx.scene.len(), 13);
        assert_eq!(game.bodies().count(), 5);
        assert!(ctx.scene.find_by_tag("sun").is_some());
        assert!(ctx.scene.find_by_tag("planet:skills").is_some());
        assert!(ctx.scene.find_by_tag("ring:contact").is_some());
        assert_eq!(ctx.backdrop.len(), starfield::STAR_COUNT);
        assert_eq!(ctx.avatar.position, MotionProfile::default().spawn);
    }

    #[test]
    fn clicking_the_sun_opens_profile() {
        let (mut game, mut ctx) = setup();
        let (x, y) = screen_of(&ctx, Vec3::ZERO);
        tick(&mut game, &mut ctx, &click(x, y));

        assert!(game.overlay().is_profile_open());
        assert_eq!(game.overlay().panel_id(), None);
        assert_eq!(events_of(&ctx, EVENT_SELECT), [GameEvent::new(EVENT_SELECT, -1.0, 1.0, 0.0)]);
        assert_eq!(events_of(&ctx, EVENT_PROFILE), [GameEvent::new(EVENT_PROFILE, 1.0, 0.0, 0.0)]);
    }

    #[test]
    fn clicking_a_planet_opens_its_panel() {
        let (mut game, mut ctx) = setup();
        let target = game.planets[3].body.position;
        let (x, y) = screen_of(&ctx, target);
        assert!((0.0..800.0).contains(&x) && (0.0..600.0).contains(&y));
        tick(&mut game, &mut ctx, &click(x, y));

        assert_eq!(game.overlay().panel_id(), Some("education"));
        assert_eq!(events_of(&ctx, EVENT_PANEL), [GameEvent::new(EVENT_PANEL, 3.0, 1.0, 0.0)]);

        let json = game.overlay_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["panel"]["id"], "education");
        assert!(value["profile"].is_null());
    }

    #[test]
    fn drag_does_not_select() {
        let (mut game, mut ctx) = setup();
        let (x, y) = screen_of(&ctx, Vec3::ZERO);
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { button: PointerButton::Primary, x: x - 40.0, y });
        q.push(InputEvent::PointerMove { x, y });
        q.push(InputEvent::PointerUp { button: PointerButton::Primary, x, y });
        tick(&mut game, &mut ctx, &q);

        assert_eq!(game.overlay().top_layer(), None);
        assert!(events_of(&ctx, EVENT_SELECT).is_empty());
    }

    #[test]
    fn clicking_empty_space_does_nothing() {
        let (mut game, mut ctx) = setup();
        tick(&mut game, &mut ctx, &click(2.0, 2.0));
        assert_eq!(game.overlay().top_layer(), None);
        assert!(ctx.events.iter().all(|e| e.kind != EVENT_SELECT));
    }

    #[test]
    fn escape_closes_profile_then_panel() {
        let (mut game, mut ctx) = setup();
        tick(&mut game, &mut ctx, &custom(CUSTOM_SELECT_SECTION, 1.0));
        tick(&mut game, &mut ctx, &custom(CUSTOM_OPEN_PROFILE, 0.0));
        assert_eq!(game.overlay().panel_id(), Some("skills"));
        assert!(game.overlay().is_profile_open());

        let mut esc = InputQueue::new();
        esc.push(InputEvent::KeyDown { key: KeyCode::Escape });

        tick(&mut game, &mut ctx, &esc);
        assert!(!game.overlay().is_profile_open());
        assert_eq!(game.overlay().panel_id(), Some("skills"));
        assert_eq!(events_of(&ctx, EVENT_PROFILE), [GameEvent::new(EVENT_PROFILE, 0.0, 0.0, 0.0)]);

        tick(&mut game, &mut ctx, &esc);
        assert_eq!(game.overlay().panel_id(), None);
        assert_eq!(events_of(&ctx, EVENT_PANEL), [GameEvent::new(EVENT_PANEL, -1.0, 0.0, 0.0)]);

        tick(&mut game, &mut ctx, &esc);
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn backdrop_and_close_buttons() {
        let (mut game, mut ctx) = setup();
        tick(&mut game, &mut ctx, &custom(CUSTOM_SELECT_SECTION, 0.0));
        tick(&mut game, &mut ctx, &custom(CUSTOM_OPEN_PROFILE, 0.0));

        // Panel backdrop leaves the modal alone.
        tick(&mut game, &mut ctx, &custom(CUSTOM_BACKDROP, 0.0));
        assert_eq!(game.overlay().panel_id(), None);
        assert!(game.overlay().is_profile_open());

        tick(&mut game, &mut ctx, &custom(CUSTOM_CLOSE_PROFILE, 0.0));
        assert_eq!(game.overlay().top_layer(), None);

        // Closing what is already closed emits nothing.
        tick(&mut game, &mut ctx, &custom(CUSTOM_CLOSE_PANEL, 0.0));
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn unknown_section_index_is_ignored() {
        let (mut game, mut ctx) = setup();
        tick(&mut game, &mut ctx, &custom(CUSTOM_SELECT_SECTION, 9.0));
        tick(&mut game, &mut ctx, &custom(CUSTOM_SELECT_SECTION, -1.0));
        assert_eq!(game.overlay().top_layer(), None);
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn hover_highlights_planet() {
        let (mut game, mut ctx) = setup();
        let planet = game.planets[3].entity;
        game.pointer = Some(screen_of(&ctx, game.planets[3].body.position));
        game.update_hover(&mut ctx);

        assert_eq!(game.hovered(), Some(3));
        assert_eq!(ctx.hovered, Some(planet));
        let entity = ctx.scene.get(planet).unwrap();
        assert_eq!(entity.scale, HOVER_SCALE);
        assert_eq!(entity.mesh.unwrap().emissive, HOVER_EMISSIVE);
        assert_eq!(events_of(&ctx, EVENT_HOVER), [GameEvent::new(EVENT_HOVER, 3.0, 0.0, 0.0)]);

        let snapshot: serde_json::Value = serde_json::from_str(&game.overlay_json().unwrap()).unwrap();
        assert_eq!(snapshot["hovered"], "Education");

        game.pointer = Some((2.0, 2.0));
        game.update_hover(&mut ctx);
        assert_eq!(game.hovered(), None);
        assert_eq!(ctx.hovered, None);
        let entity = ctx.scene.get(planet).unwrap();
        assert_eq!(entity.scale, 1.0);
        assert_eq!(entity.mesh.unwrap().emissive, PLANET_EMISSIVE);
    }

    #[test]
    fn sun_is_not_a_hover_target() {
        let (mut game, mut ctx) = setup();
        game.pointer = Some(screen_of(&ctx, Vec3::ZERO));
        game.update_hover(&mut ctx);
        assert_eq!(game.hovered(), None);
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn held_key_moves_avatar_and_camera_follows() {
        let (mut game, mut ctx) = setup();
        ctx.controls.handle(&InputEvent::KeyDown { key: KeyCode::KeyW });
        let start = ctx.avatar.position;
        for _ in 0..30 {
            tick(&mut game, &mut ctx, &InputQueue::new());
        }
        assert!(ctx.avatar.position.z < start.z);
        assert!(ctx.avatar.speed > 0.0);
        assert_eq!(ctx.camera.target, ctx.avatar.position);

        let avatar = ctx.scene.find_by_tag("avatar").unwrap();
        assert_eq!(avatar.pos, ctx.avatar.position);
    }

    #[test]
    fn touch_profile_toggles_controls_event() {
        let (mut game, mut ctx) = setup();
        ctx.controls.handle(&InputEvent::DeviceProfile(DeviceProfile::desktop(500.0)));
        tick(&mut game, &mut ctx, &InputQueue::new());
        assert_eq!(
            events_of(&ctx, EVENT_TOUCH_CONTROLS),
            [GameEvent::new(EVENT_TOUCH_CONTROLS, 1.0, 0.0, 0.0)]
        );

        tick(&mut game, &mut ctx, &InputQueue::new());
        assert!(events_of(&ctx, EVENT_TOUCH_CONTROLS).is_empty());
    }

    #[test]
    fn load_config_applies_or_rejects() {
        let (mut game, mut ctx) = setup();
        assert!(game.load_config(&mut ctx, r#"{ "motion": { "acceleration": 250.0, "max_speed": 150.0 } }"#));
        assert_eq!(*game.motion().profile(), MotionProfile::ship());

        let before = game.rig().config().clone();
        assert!(!game.load_config(&mut ctx, r#"{ "rig": { "wheel_step": "far" } }"#));
        assert_eq!(*game.rig().config(), before);
        assert_eq!(*game.motion().profile(), MotionProfile::ship());
    }

    #[test]
    fn shutdown_clears_overlays() {
        let (mut game, mut ctx) = setup();
        tick(&mut game, &mut ctx, &custom(CUSTOM_SELECT_SECTION, 2.0));
        game.shutdown(&mut ctx);
        assert_eq!(game.overlay().top_layer(), None);
        assert_eq!(game.hovered(), None);
    }

    fn wide_content(sections: usize) -> PortfolioContent {
        PortfolioContent {
            sections: (0..sections)
                .map(|i| Section {
                    id: format!("s{i}"),
                    name: format!("Section {i}"),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn every_body_reaches_the_frame_for_long_content() {
        let mut runner = GameRunner::new(CosmicPortfolio::with_content(wide_content(35)));
        runner.init();
        runner.tick(1.0 / 60.0);

        let scene_len = runner.context().scene.len();
        assert_eq!(scene_len, 3 + 2 * 35);
        let frame = runner.frame();
        assert!(frame[HEADER_MAX_BODIES] as usize >= scene_len);
        assert_eq!(frame[HEADER_BODY_COUNT] as usize, scene_len);
    }

    #[test]
    fn short_content_keeps_default_capacity() {
        let game = CosmicPortfolio::with_content(wide_content(2));
        assert_eq!(game.config().max_bodies, GameConfig::default().max_bodies);
    }

    #[test]
    fn pointer_leave_clears_hover() {
        let (mut game, mut ctx) = setup();
        let planet = game.planets[3].entity;
        game.pointer = Some(screen_of(&ctx, game.planets[3].body.position));
        game.update_hover(&mut ctx);
        assert_eq!(game.hovered(), Some(3));

        let mut q = InputQueue::new();
        q.push(InputEvent::PointerLeave);
        tick(&mut game, &mut ctx, &q);

        assert_eq!(game.hovered(), None);
        assert_eq!(ctx.hovered, None);
        assert_eq!(events_of(&ctx, EVENT_HOVER), [GameEvent::new(EVENT_HOVER, -1.0, 0.0, 0.0)]);
        assert_eq!(ctx.scene.get(planet).unwrap().scale, 1.0);
        let snapshot: serde_json::Value = serde_json::from_str(&game.overlay_json().unwrap()).unwrap();
        assert!(snapshot["hovered"].is_null());
    }

    #[test]
    fn open_section_stays_lit() {
        let (mut game, mut ctx) = setup();
        let skills = game.planets[1].entity;
        let home = game.planets[0].entity;
        let emissive = |ctx: &EngineContext, id| ctx.scene.get(id).unwrap().mesh.unwrap().emissive;

        tick(&mut game, &mut ctx, &custom(CUSTOM_SELECT_SECTION, 1.0));
        assert_eq!(emissive(&ctx, skills), SELECTED_EMISSIVE);
        assert_eq!(emissive(&ctx, home), PLANET_EMISSIVE);

        tick(&mut game, &mut ctx, &custom(CUSTOM_CLOSE_PANEL, 0.0));
        assert_eq!(emissive(&ctx, skills), PLANET_EMISSIVE);
    }
}
