//! Sprite simulation
//!
//! Everything here is frame-driven and free of platform dependencies:
//! - Fixed one-frame step for motion (no wall-clock delta)
//! - Seeded RNG for launch velocities
//! - Stable iteration order (spawn order)

pub mod collision;
pub mod engine;
pub mod sprite;
pub mod timer;

pub use collision::{AxisBounce, Viewport, WallHit, circle_viewport_collision, reflect_axis};
pub use engine::Engine;
pub use sprite::{Sprite, SpriteFrame, SpritePhase};
pub use timer::{GrowthTimer, MAX_FIRINGS_PER_POLL, elapsed_from_millis};
