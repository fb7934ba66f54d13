pub mod runner;

pub use cosmic_engine as engine;
pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper (no-op before `game_init` and after `game_shutdown`)
/// - All wasm-bindgen exports (lifecycle, device input, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// cosmic_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `cosmic_engine::Game`
///   and has a `new()` constructor
/// - `$game_name`: A string literal used in lifecycle log messages
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;
        use $crate::engine::{
            ControlField, DeviceProfile, GamepadSnapshot, InputEvent, KeyCode, PointerButton,
        };

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        /// Drop the runner. The host removes its own DOM listeners and
        /// gamepad poll timer.
        #[wasm_bindgen]
        pub fn game_shutdown() {
            with_runner(|r| r.shutdown());
            RUNNER.with(|cell| {
                cell.borrow_mut().take();
            });
            log::info!("{}: shut down", $game_name);
        }

        // ---- Device input ----

        #[wasm_bindgen]
        pub fn game_key_down(code: &str) {
            if let Some(key) = KeyCode::from_code(code) {
                with_runner(|r| r.push_input(InputEvent::KeyDown { key }));
            }
        }

        #[wasm_bindgen]
        pub fn game_key_up(code: &str) {
            if let Some(key) = KeyCode::from_code(code) {
                with_runner(|r| r.push_input(InputEvent::KeyUp { key }));
            }
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(button: u32, x: f32, y: f32) {
            let button = PointerButton::from_dom(button);
            with_runner(|r| r.push_input(InputEvent::PointerDown { button, x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(button: u32, x: f32, y: f32) {
            let button = PointerButton::from_dom(button);
            with_runner(|r| r.push_input(InputEvent::PointerUp { button, x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        /// `pointerleave` / `pointercancel`, and after a touch `pointerup`.
        #[wasm_bindgen]
        pub fn game_pointer_leave() {
            with_runner(|r| r.push_input(InputEvent::PointerLeave));
        }

        #[wasm_bindgen]
        pub fn game_wheel(delta_y: f32) {
            with_runner(|r| r.push_input(InputEvent::Wheel { delta_y }));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        #[wasm_bindgen]
        pub fn game_device_profile(viewport_width: f32, coarse_pointer: bool, touch_points: u32) {
            let profile = DeviceProfile { viewport_width, coarse_pointer, touch_points };
            with_runner(|r| r.push_input(InputEvent::DeviceProfile(profile)));
        }

        /// `buttons`: one byte per button (non-zero = pressed). `axes`: raw values.
        #[wasm_bindgen]
        pub fn game_gamepad_poll(index: u32, buttons: &[u8], axes: &[f32]) {
            let pressed: Vec<bool> = buttons.iter().map(|b| *b != 0).collect();
            let snapshot = GamepadSnapshot::from_slices(&pressed, axes);
            with_runner(|r| r.push_input(InputEvent::GamepadPoll { index, snapshot }));
        }

        #[wasm_bindgen]
        pub fn game_gamepad_disconnected(index: u32) {
            with_runner(|r| r.push_input(InputEvent::GamepadDisconnected { index }));
        }

        /// `field`: 0 forward, 1 back, 2 left, 3 right, 4 up, 5 down.
        #[wasm_bindgen]
        pub fn game_virtual_button(field: u32, pressed: bool) {
            if let Some(field) = ControlField::from_index(field) {
                with_runner(|r| r.push_input(InputEvent::VirtualButton { field, pressed }));
            }
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn game_load_config(json: &str) -> bool {
            with_runner(|r| r.load_config(json)).unwrap_or(false)
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_frame_ptr() -> *const f32 {
            with_runner(|r| r.frame_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_frame_len() -> u32 {
            with_runner(|r| r.frame_len()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_backdrop_ptr() -> *const f32 {
            with_runner(|r| r.backdrop_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_backdrop_len() -> u32 {
            with_runner(|r| r.backdrop_len()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_gamepad_poll_ms() -> u32 {
            with_runner(|r| r.gamepad_poll_ms()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_overlay_json() -> String {
            with_runner(|r| r.overlay_json()).unwrap_or_else(|| "null".to_string())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats()).unwrap_or(0)
        }
    };
}
