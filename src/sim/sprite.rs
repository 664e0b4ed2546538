//! A single bouncing head
//!
//! Sprites start out `Growing` under the pointer, then switch once to `Moving`
//! on release and bounce around the viewport forever.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Viewport, WallHit, circle_viewport_collision};
use crate::settings::SpriteTuning;

/// Lifecycle phase of a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpritePhase {
    /// Held under the pointer, easing toward its target size
    Growing,
    /// Released and bouncing
    Moving,
}

/// One spawned sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprite {
    pub id: u32,
    pos: Vec2,
    vel: Vec2,
    /// Rendered and collision diameter
    size: f32,
    /// Diameter `size` eases toward while growing
    target_size: f32,
    /// Accumulated spin (degrees)
    rotation: f32,
    phase: SpritePhase,
}

impl Sprite {
    pub fn new(id: u32, pos: Vec2, initial_size: f32) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            size: initial_size,
            target_size: initial_size,
            rotation: 0.0,
            phase: SpritePhase::Growing,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn target_size(&self) -> f32 {
        self.target_size
    }

    /// Spin in degrees
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn phase(&self) -> SpritePhase {
        self.phase
    }

    /// Collision radius (half the current diameter)
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size * 0.5
    }

    /// True once size has reached its target
    pub fn is_settled(&self) -> bool {
        self.size == self.target_size
    }

    /// Raise (or lower) the growth goal, capped at `max_size`
    ///
    /// Ignored once the sprite is moving.
    pub fn set_target_size(&mut self, target: f32, tuning: &SpriteTuning) {
        if self.phase != SpritePhase::Growing {
            return;
        }
        self.target_size = target.min(tuning.max_size);
    }

    /// Release the sprite with a random velocity
    ///
    /// Each axis is drawn uniformly from `[-max_speed, max_speed)`. Returns
    /// false (and keeps the current velocity) if the sprite was already moving.
    pub fn begin_motion<R: Rng + ?Sized>(&mut self, rng: &mut R, tuning: &SpriteTuning) -> bool {
        if self.phase == SpritePhase::Moving {
            return false;
        }
        let span = tuning.max_speed * 2.0;
        self.vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * span,
            (rng.random::<f32>() - 0.5) * span,
        );
        self.phase = SpritePhase::Moving;
        true
    }

    /// Advance one frame
    ///
    /// Motion uses a fixed one-frame step, so speed is tied to the display
    /// refresh rate.
    pub fn tick(&mut self, viewport: &Viewport, tuning: &SpriteTuning) -> WallHit {
        match self.phase {
            SpritePhase::Growing => {
                self.ease_size(tuning);
                WallHit::default()
            }
            SpritePhase::Moving => {
                self.pos += self.vel;
                self.rotation += tuning.spin_deg_per_frame;

                let (pos, vel, hit) =
                    circle_viewport_collision(self.pos, self.vel, self.radius(), viewport);
                self.pos = pos;
                self.vel = vel;
                if hit.any() {
                    log::trace!(
                        "sprite {} bounced (x: {}, y: {}) at {:?}",
                        self.id,
                        hit.x,
                        hit.y,
                        self.pos
                    );
                }
                hit
            }
        }
    }

    /// Exponential approach toward the target, snapping when close
    fn ease_size(&mut self, tuning: &SpriteTuning) {
        if self.size == self.target_size {
            return;
        }
        self.size += (self.target_size - self.size) * tuning.growth_smoothing;
        if (self.size - self.target_size).abs() < tuning.snap_threshold {
            self.size = self.target_size;
        }
    }

    /// Snapshot for the render layer
    pub fn frame(&self) -> SpriteFrame {
        let half = self.radius();
        SpriteFrame {
            id: self.id,
            x: self.pos.x,
            y: self.pos.y,
            size: self.size,
            rotation: self.rotation,
            left: self.pos.x - half,
            top: self.pos.y - half,
            moving: self.phase == SpritePhase::Moving,
        }
    }
}

/// Per-frame render data for one sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteFrame {
    pub id: u32,
    /// Center
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Degrees
    pub rotation: f32,
    /// Top-left corner, keeps the image centered on its position
    pub left: f32,
    pub top: f32,
    pub moving: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn tuning() -> SpriteTuning {
        SpriteTuning::default()
    }

    fn moving_sprite(pos: Vec2, vel: Vec2, size: f32) -> Sprite {
        let mut sprite = Sprite::new(1, pos, size);
        sprite.phase = SpritePhase::Moving;
        sprite.vel = vel;
        sprite
    }

    #[test]
    fn test_new_sprite_is_growing_and_still() {
        let sprite = Sprite::new(7, Vec2::new(50.0, 60.0), 100.0);
        assert_eq!(sprite.phase(), SpritePhase::Growing);
        assert_eq!(sprite.velocity(), Vec2::ZERO);
        assert_eq!(sprite.size(), 100.0);
        assert_eq!(sprite.target_size(), 100.0);
        assert_eq!(sprite.rotation(), 0.0);
        assert!(sprite.is_settled());
    }

    #[test]
    fn test_growing_sprite_never_moves() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut sprite = Sprite::new(1, Vec2::new(400.0, 300.0), 100.0);
        sprite.set_target_size(300.0, &tuning());
        for _ in 0..100 {
            sprite.tick(&viewport, &tuning());
            assert_eq!(sprite.velocity(), Vec2::ZERO);
            assert_eq!(sprite.position(), Vec2::new(400.0, 300.0));
            assert_eq!(sprite.rotation(), 0.0);
        }
    }

    #[test]
    fn test_growing_sprite_ignores_walls() {
        // Overlapping the top-left corner while still held
        let viewport = Viewport::new(800.0, 600.0);
        let mut sprite = Sprite::new(1, Vec2::new(10.0, 10.0), 100.0);
        sprite.set_target_size(200.0, &tuning());
        for _ in 0..50 {
            let hit = sprite.tick(&viewport, &tuning());
            assert!(!hit.any());
            assert_eq!(sprite.position(), Vec2::new(10.0, 10.0));
            assert_eq!(sprite.velocity(), Vec2::ZERO);
        }
        assert_eq!(sprite.size(), 200.0);
    }

    #[test]
    fn test_set_target_size_clamps_to_max() {
        let mut sprite = Sprite::new(1, Vec2::ZERO, 100.0);
        sprite.set_target_size(1000.0, &tuning());
        assert_eq!(sprite.target_size(), 400.0);
    }

    #[test]
    fn test_set_target_size_ignored_while_moving() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut sprite = Sprite::new(1, Vec2::ZERO, 100.0);
        sprite.begin_motion(&mut rng, &tuning());
        sprite.set_target_size(200.0, &tuning());
        sprite.set_target_size(200.0, &tuning());
        assert_eq!(sprite.target_size(), 100.0);
    }

    #[test]
    fn test_begin_motion_assigns_velocity_once() {
        let mut rng = Pcg32::seed_from_u64(12345);
        let mut sprite = Sprite::new(1, Vec2::new(400.0, 300.0), 100.0);

        assert!(sprite.begin_motion(&mut rng, &tuning()));
        assert_eq!(sprite.phase(), SpritePhase::Moving);
        let first = sprite.velocity();
        assert_ne!(first, Vec2::ZERO);

        assert!(!sprite.begin_motion(&mut rng, &tuning()));
        assert_eq!(sprite.velocity(), first);
        assert_eq!(sprite.phase(), SpritePhase::Moving);
    }

    #[test]
    fn test_growth_converges_exactly() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut sprite = Sprite::new(1, Vec2::new(400.0, 300.0), 100.0);
        sprite.set_target_size(400.0, &tuning());

        let mut ticks = 0;
        while !sprite.is_settled() {
            sprite.tick(&viewport, &tuning());
            assert!(sprite.size() <= sprite.target_size());
            ticks += 1;
            assert!(ticks <= 30, "growth did not settle");
        }
        assert_eq!(sprite.size(), 400.0);
    }

    #[test]
    fn test_growth_first_step() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut sprite = Sprite::new(1, Vec2::ZERO, 100.0);
        sprite.set_target_size(110.0, &tuning());
        sprite.tick(&viewport, &tuning());
        assert!((sprite.size() - 103.0).abs() < 1e-4);
    }

    #[test]
    fn test_moving_sprite_integrates_and_spins() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut sprite = moving_sprite(Vec2::new(400.0, 300.0), Vec2::new(3.0, -2.0), 100.0);
        sprite.tick(&viewport, &tuning());
        assert_eq!(sprite.position(), Vec2::new(403.0, 298.0));
        assert_eq!(sprite.rotation(), 2.0);
        sprite.tick(&viewport, &tuning());
        assert_eq!(sprite.position(), Vec2::new(406.0, 296.0));
        assert_eq!(sprite.rotation(), 4.0);
    }

    #[test]
    fn test_moving_sprite_stops_growing() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut sprite = Sprite::new(1, Vec2::new(400.0, 300.0), 100.0);
        sprite.set_target_size(200.0, &tuning());
        let mut rng = Pcg32::seed_from_u64(3);
        sprite.begin_motion(&mut rng, &tuning());
        sprite.tick(&viewport, &tuning());
        assert_eq!(sprite.size(), 100.0);
    }

    #[test]
    fn test_wall_reflection_flips_and_clamps() {
        // r = 50; after integrating -v from 51 the sprite sits at r - 1
        let viewport = Viewport::new(800.0, 600.0);
        let mut sprite = moving_sprite(Vec2::new(51.0, 300.0), Vec2::new(-2.0, 0.0), 100.0);
        let hit = sprite.tick(&viewport, &tuning());
        assert!(hit.x);
        assert!(!hit.y);
        assert_eq!(sprite.position().x, 50.0);
        assert_eq!(sprite.velocity().x, 2.0);
    }

    #[test]
    fn test_viewport_smaller_than_sprite_reflects_once() {
        let viewport = Viewport::new(80.0, 600.0);
        let mut sprite = moving_sprite(Vec2::new(40.0, 300.0), Vec2::new(1.5, 0.0), 100.0);
        sprite.tick(&viewport, &tuning());
        assert_eq!(sprite.velocity().x, -1.5);
        assert_eq!(sprite.position().x, 40.0);
        sprite.tick(&viewport, &tuning());
        assert_eq!(sprite.velocity().x, 1.5);
        assert_eq!(sprite.position().x, 40.0);
    }

    #[test]
    fn test_frame_offsets_center_image() {
        let sprite = Sprite::new(9, Vec2::new(200.0, 150.0), 100.0);
        let frame = sprite.frame();
        assert_eq!(frame.id, 9);
        assert_eq!((frame.left, frame.top), (150.0, 100.0));
        assert!(!frame.moving);
    }

    proptest! {
        #[test]
        fn prop_launch_velocity_in_range(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut sprite = Sprite::new(1, Vec2::ZERO, 100.0);
            sprite.begin_motion(&mut rng, &tuning());
            let vel = sprite.velocity();
            prop_assert!(vel.x >= -5.0 && vel.x < 5.0);
            prop_assert!(vel.y >= -5.0 && vel.y < 5.0);
        }

        #[test]
        fn prop_growth_never_overshoots(target in 100.0f32..400.0) {
            let viewport = Viewport::new(800.0, 600.0);
            let mut sprite = Sprite::new(1, Vec2::ZERO, 100.0);
            sprite.set_target_size(target, &tuning());
            for _ in 0..40 {
                sprite.tick(&viewport, &tuning());
                prop_assert!(sprite.size() <= sprite.target_size());
            }
            prop_assert_eq!(sprite.size(), sprite.target_size());
        }

        #[test]
        fn prop_moving_sprite_stays_inside(
            x in 50.0f32..750.0,
            y in 50.0f32..550.0,
            vx in -5.0f32..5.0,
            vy in -5.0f32..5.0,
        ) {
            let viewport = Viewport::new(800.0, 600.0);
            let mut sprite = moving_sprite(Vec2::new(x, y), Vec2::new(vx, vy), 100.0);
            for _ in 0..500 {
                sprite.tick(&viewport, &tuning());
                let p = sprite.position();
                prop_assert!((50.0..=750.0).contains(&p.x));
                prop_assert!((50.0..=550.0).contains(&p.y));
                prop_assert_eq!(sprite.velocity().abs(), Vec2::new(vx, vy).abs());
            }
        }
    }
}
