//! Wall collision against the viewport rectangle
//!
//! Each axis reflects independently: a sprite touching or past a wall has that
//! velocity component negated once and its position clamped back inside.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Current drawable area, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.extent() * 0.5
    }
}

/// Result of reflecting one axis against its pair of walls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounce {
    pub pos: f32,
    pub vel: f32,
    /// Whether the velocity was reflected
    pub hit: bool,
}

/// Reflect a single axis against walls at `radius` and `extent - radius`
///
/// When the sprite is wider than the extent the bounds would invert, so the
/// position is pinned to the middle of the axis instead.
pub fn reflect_axis(pos: f32, vel: f32, radius: f32, extent: f32) -> AxisBounce {
    let lo = radius;
    let hi = extent - radius;

    if hi < lo {
        return AxisBounce {
            pos: extent * 0.5,
            vel: -vel,
            hit: true,
        };
    }

    if pos <= lo || pos >= hi {
        AxisBounce {
            pos: pos.clamp(lo, hi),
            vel: -vel,
            hit: true,
        }
    } else {
        AxisBounce {
            pos,
            vel,
            hit: false,
        }
    }
}

/// Which axes reflected during a wall check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    pub x: bool,
    pub y: bool,
}

impl WallHit {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Reflect a circle of `radius` off all four viewport walls
///
/// Returns the corrected position and velocity plus the axes that bounced.
pub fn circle_viewport_collision(
    pos: Vec2,
    vel: Vec2,
    radius: f32,
    viewport: &Viewport,
) -> (Vec2, Vec2, WallHit) {
    let bx = reflect_axis(pos.x, vel.x, radius, viewport.width);
    let by = reflect_axis(pos.y, vel.y, radius, viewport.height);

    (
        Vec2::new(bx.pos, by.pos),
        Vec2::new(bx.vel, by.vel),
        WallHit { x: bx.hit, y: by.hit },
    )
}
