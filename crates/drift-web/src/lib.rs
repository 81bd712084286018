pub mod runner;

pub use runner::FieldRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use drift_engine::{InputEvent, SimConfig, Theme};

thread_local! {
    static RUNNER: RefCell<Option<FieldRunner>> = RefCell::new(None);
}

/// Run `f` against the live runner. Before `field_init` there is no runner —
/// the background is simply absent from the page — so every export degrades
/// to a no-op and every accessor returns its zero value.
fn with_runner<R>(f: impl FnOnce(&mut FieldRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Side-effect variant: silently does nothing before `field_init`.
fn touch_runner(f: impl FnOnce(&mut FieldRunner)) {
    let _ = with_runner(f);
}

/// Boot the simulation against a canvas of the given on-screen dimensions.
/// The page only calls this when the canvas exists; a zero-sized canvas is
/// accepted and degrades silently.
#[wasm_bindgen]
pub fn field_init(width: f32, height: f32, seed: u32, dark: bool) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = FieldRunner::new(
        SimConfig::default(),
        width,
        height,
        seed as u64,
        Theme::from_flag(dark),
    );
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("drift background: initialized ({}x{})", width, height);
}

/// Apply a JSON configuration override, respawning the populations.
/// Bad JSON is logged and ignored.
#[wasm_bindgen]
pub fn field_load_config(json: &str) {
    touch_runner(|r| r.load_config(json));
}

/// Advance one frame. The page calls this once per requestAnimationFrame;
/// `dt` is the elapsed seconds since the previous frame (used only by the
/// overlay effects — the field itself moves one fixed step per call).
#[wasm_bindgen]
pub fn field_tick(dt: f32) {
    touch_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn field_pointer_move(x: f32, y: f32) {
    touch_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn field_pointer_down(x: f32, y: f32) {
    touch_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

/// Sparkle burst inside a hovered rectangle (surface-relative origin + size).
#[cfg(feature = "effects")]
#[wasm_bindgen]
pub fn field_sparkle_burst(x: f32, y: f32, w: f32, h: f32) {
    touch_runner(|r| r.sparkle_burst(x, y, w, h));
}

/// Adopt the container's new on-screen dimensions.
#[wasm_bindgen]
pub fn field_resize(width: f32, height: f32) {
    touch_runner(|r| r.resize(width, height));
}

/// Switch theme; the live population is recolored in place.
#[wasm_bindgen]
pub fn field_set_theme(dark: bool) {
    touch_runner(|r| r.set_theme(Theme::from_flag(dark)));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_discs_ptr() -> *const f32 {
    with_runner(|r| r.discs_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_disc_count() -> u32 {
    with_runner(|r| r.disc_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_links_ptr() -> *const f32 {
    with_runner(|r| r.links_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_link_count() -> u32 {
    with_runner(|r| r.link_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_overlay_ptr() -> *const f32 {
    with_runner(|r| r.overlay_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_overlay_count() -> u32 {
    with_runner(|r| r.overlay_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_frame_counter() -> u32 {
    with_runner(|r| r.frame_counter()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_surface_width() -> f32 {
    with_runner(|r| r.surface_width()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_surface_height() -> f32 {
    with_runner(|r| r.surface_height()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_theme_is_dark() -> bool {
    with_runner(|r| r.theme_is_dark()).unwrap_or(true)
}

// ---- Capacity accessors ----

#[wasm_bindgen]
pub fn get_max_discs() -> u32 {
    with_runner(|r| r.max_discs()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_max_links() -> u32 {
    with_runner(|r| r.max_links()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_max_overlay() -> u32 {
    with_runner(|r| r.max_overlay()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats()).unwrap_or(0)
}
