use drift_engine::{
    build_discs, build_links, Field, FrameBuffer, InputEvent, InputQueue, ProtocolLayout, Rng,
    SimConfig, Theme,
};
use glam::Vec2;

#[cfg(feature = "effects")]
use drift_engine::EffectsState;

/// Owns the engine state and wires the page's frame loop to it.
///
/// Lives in a `thread_local!` in lib.rs and is driven entirely through free
/// `#[wasm_bindgen]` functions: JS calls `field_tick(dt)` once per
/// `requestAnimationFrame` and reads the rebuilt frame buffer straight out of
/// wasm memory. The runner itself never schedules anything.
pub struct FieldRunner {
    field: Field,
    #[cfg(feature = "effects")]
    effects: EffectsState,
    input: InputQueue,
    frame: FrameBuffer,
    layout: ProtocolLayout,
    config: SimConfig,
    seed: u64,
    frame_counter: u32,
}

impl FieldRunner {
    pub fn new(config: SimConfig, width: f32, height: f32, seed: u64, theme: Theme) -> Self {
        let layout = ProtocolLayout::from_config(&config);
        let mut rng = Rng::new(seed);
        let field = Field::new(config.field.clone(), theme, width, height, &mut rng);
        Self {
            field,
            #[cfg(feature = "effects")]
            effects: EffectsState::new(config.effects.clone(), seed),
            input: InputQueue::new(),
            frame: FrameBuffer::new(),
            layout,
            config,
            seed,
            frame_counter: 0,
        }
    }

    /// Replace the configuration and respawn the populations, keeping the
    /// current surface dimensions and theme. Invalid JSON is logged and
    /// ignored, leaving the running state untouched.
    pub fn load_config(&mut self, json: &str) {
        let config = match SimConfig::from_json(json) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("drift config rejected: {}", err);
                return;
            }
        };
        let bounds = self.field.bounds();
        let theme = self.field.theme();
        let mut rng = Rng::new(self.seed);
        self.layout = ProtocolLayout::from_config(&config);
        self.field = Field::new(config.field.clone(), theme, bounds.x, bounds.y, &mut rng);
        #[cfg(feature = "effects")]
        {
            self.effects = EffectsState::new(config.effects.clone(), self.seed);
        }
        self.config = config;
    }

    /// Push a pointer event into the queue; it is applied at the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: drain pointer events in arrival order, advance the
    /// field and effects, and rebuild every buffer section.
    pub fn tick(&mut self, dt: f32) {
        #[cfg(not(feature = "effects"))]
        let _ = dt;

        for event in self.input.drain() {
            match event {
                InputEvent::PointerMove { x, y } => {
                    let at = Vec2::new(x, y);
                    self.field.pointer_moved(at);
                    #[cfg(feature = "effects")]
                    self.effects.pointer_moved(at);
                }
                #[cfg(feature = "effects")]
                InputEvent::PointerDown { x, y } => {
                    self.effects.spawn_confetti(Vec2::new(x, y));
                }
                #[cfg(not(feature = "effects"))]
                InputEvent::PointerDown { .. } => {}
            }
        }

        self.field.tick();
        #[cfg(feature = "effects")]
        self.effects.tick(dt, self.field.bounds().y);

        build_discs(&self.field, &mut self.frame);
        build_links(&self.field, &mut self.frame);
        #[cfg(feature = "effects")]
        self.effects.rebuild_overlay(&mut self.frame);

        self.frame_counter = self.frame_counter.wrapping_add(1);
    }

    /// Spawn a sparkle burst inside a hovered rectangle (surface-relative).
    #[cfg(feature = "effects")]
    pub fn sparkle_burst(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.effects
            .spawn_sparkles(Vec2::new(x, y), Vec2::new(w, h));
    }

    /// Adopt new surface dimensions; takes effect on the next frame.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field.resize(width, height);
    }

    /// Recolor the live population in place for the new theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.field.set_theme(theme);
    }

    // ---- Pointer accessors for direct Float32Array reads ----

    pub fn discs_ptr(&self) -> *const f32 {
        self.frame.discs_ptr()
    }

    pub fn disc_count(&self) -> u32 {
        self.frame.disc_count()
    }

    pub fn links_ptr(&self) -> *const f32 {
        self.frame.links_ptr()
    }

    pub fn link_count(&self) -> u32 {
        self.frame.link_count()
    }

    pub fn overlay_ptr(&self) -> *const f32 {
        self.frame.overlay_ptr()
    }

    pub fn overlay_count(&self) -> u32 {
        self.frame.overlay_count()
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    pub fn surface_width(&self) -> f32 {
        self.field.bounds().x
    }

    pub fn surface_height(&self) -> f32 {
        self.field.bounds().y
    }

    pub fn theme_is_dark(&self) -> bool {
        self.field.theme().is_dark()
    }

    // ---- Capacity accessors (read by the page to size its views) ----

    pub fn max_discs(&self) -> u32 {
        self.layout.max_discs as u32
    }

    pub fn max_links(&self) -> u32 {
        self.layout.max_links as u32
    }

    pub fn max_overlay(&self) -> u32 {
        self.layout.max_overlay as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
