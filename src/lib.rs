//! Bouncing Heads - press-and-hold sprite toy
//!
//! Core modules:
//! - `sim`: Sprite lifecycle, growth timer and frame-driven bounce engine
//! - `settings`: Data-driven tuning, loadable from JSON
//! - `web`: wasm-bindgen bridge for a browser input/render layer

pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use settings::{Settings, SettingsError, SpriteTuning};
pub use sim::{Engine, GrowthTimer, Sprite, SpriteFrame, SpritePhase, Viewport};

/// Default tuning constants
pub mod consts {
    /// Diameter of a freshly spawned sprite (pixels)
    pub const INITIAL_SIZE: f32 = 100.0;
    /// Largest diameter a held sprite can grow to (pixels)
    pub const MAX_SIZE: f32 = 400.0;
    /// Target size increase per growth firing (pixels)
    pub const GROWTH_STEP: f32 = 5.0;
    /// Growth ticker cadence (~one frame)
    pub const GROWTH_INTERVAL_MS: u64 = 16;

    /// Fraction of the remaining size gap closed each frame
    pub const GROWTH_SMOOTHING: f32 = 0.3;
    /// Gap below which size snaps to its target
    pub const SNAP_THRESHOLD: f32 = 0.1;

    /// Launch speed bound per axis (pixels/frame)
    pub const MAX_SPEED: f32 = 5.0;
    /// Spin while moving (degrees/frame)
    pub const SPIN_DEG_PER_FRAME: f32 = 2.0;
}
