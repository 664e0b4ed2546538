//! Browser bridge
//!
//! Exposes the engine to a JS host that owns pointer capture and drawing.
//! The host forwards press/release and calls `frame` from its animation loop.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::settings::Settings;
use crate::sim::{Engine, Viewport, elapsed_from_millis};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // Already initialized if the module is instantiated twice
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Bouncing Heads starting...");
}

#[wasm_bindgen]
pub struct BounceToy {
    engine: Engine,
}

#[wasm_bindgen]
impl BounceToy {
    /// Create a toy, optionally configured from a settings JSON string
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Result<BounceToy, JsError> {
        let settings = match settings_json {
            Some(json) => Settings::from_json(&json)?,
            None => Settings::default(),
        };
        Ok(Self {
            engine: Engine::new(settings),
        })
    }

    /// Pointer/touch pressed at viewport coordinates
    pub fn begin_hold(&mut self, x: f32, y: f32) -> bool {
        self.engine.begin_hold(Vec2::new(x, y))
    }

    /// Pointer/touch released
    pub fn end_hold(&mut self) -> bool {
        self.engine.end_hold()
    }

    pub fn is_holding(&self) -> bool {
        self.engine.is_holding()
    }

    pub fn sprite_count(&self) -> usize {
        self.engine.sprite_count()
    }

    /// Advance one display frame and return the sprite frames as JSON
    pub fn frame(&mut self, elapsed_ms: f64, width: f32, height: f32) -> Result<String, JsError> {
        let elapsed = elapsed_from_millis(elapsed_ms);
        self.engine.advance(elapsed, &Viewport::new(width, height));
        Ok(serde_json::to_string(&self.engine.frames())?)
    }
}
