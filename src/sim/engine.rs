//! Press-and-hold engine
//!
//! Owns every sprite plus the single active hold. A hold bundles the held
//! sprite's id with its growth timer, so releasing the hold drops the timer
//! in the same step and no late firing can reach a moving sprite.

use std::time::Duration;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Viewport;
use super::sprite::{Sprite, SpriteFrame};
use super::timer::GrowthTimer;
use crate::settings::Settings;

/// The active press: which sprite is held and its growth ticker
#[derive(Debug, Clone)]
struct Hold {
    sprite_id: u32,
    timer: GrowthTimer,
}

/// Sprite collection, hold state and launch RNG
#[derive(Debug, Clone)]
pub struct Engine {
    settings: Settings,
    /// Spawn order, oldest first
    sprites: Vec<Sprite>,
    held: Option<Hold>,
    seed: u64,
    rng: Pcg32,
    next_id: u32,
    frame_count: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Engine {
    /// Create an engine, seeding the RNG from settings or the clock
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(clock_seed);
        Self::with_seed(settings, seed)
    }

    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        log::info!(
            "Engine ready (seed {}, cap {:?})",
            seed,
            settings.max_sprites
        );
        Self {
            settings,
            sprites: Vec::new(),
            held: None,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            frame_count: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    /// Frames ticked since creation
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    pub fn held_sprite(&self) -> Option<&Sprite> {
        self.held_index().map(|i| &self.sprites[i])
    }

    fn held_index(&self) -> Option<usize> {
        let id = self.held.as_ref()?.sprite_id;
        // Held sprite is always the newest
        self.sprites.iter().rposition(|s| s.id == id)
    }

    fn next_sprite_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Start a hold: spawn a growing sprite at `pos`
    ///
    /// Returns false without spawning if a hold is already active.
    pub fn begin_hold(&mut self, pos: Vec2) -> bool {
        if self.held.is_some() {
            log::debug!("Hold already active, ignoring press at {:?}", pos);
            return false;
        }

        let id = self.next_sprite_id();
        self.sprites
            .push(Sprite::new(id, pos, self.settings.sprite.initial_size));
        self.evict_overflow();

        self.held = Some(Hold {
            sprite_id: id,
            timer: GrowthTimer::new(self.settings.growth_interval()),
        });
        log::info!("Hold started: sprite {} at {:?}", id, pos);
        true
    }

    /// End the hold: stop growth and launch the held sprite
    ///
    /// Returns false if no hold was active.
    pub fn end_hold(&mut self) -> bool {
        let Some(idx) = self.held_index() else {
            self.held = None;
            return false;
        };
        // Timer goes away with the hold before the sprite starts moving
        self.held = None;

        let sprite = &mut self.sprites[idx];
        if sprite.begin_motion(&mut self.rng, &self.settings.sprite) {
            log::info!(
                "Hold ended: sprite {} launched at size {:.1} with velocity {:?}",
                sprite.id,
                sprite.size(),
                sprite.velocity()
            );
        }
        true
    }

    /// Apply one growth-ticker firing to the held sprite
    ///
    /// Raises the target to `size + growth_step` (capped at the max size).
    /// Returns false when idle or once the sprite has reached full size.
    pub fn grow_held(&mut self) -> bool {
        let Some(idx) = self.held_index() else {
            return false;
        };
        let tuning = &self.settings.sprite;
        let sprite = &mut self.sprites[idx];
        if sprite.size() >= tuning.max_size {
            return false;
        }
        let target = sprite.size() + self.settings.growth_step;
        sprite.set_target_size(target, tuning);
        true
    }

    /// Tick every sprite once
    pub fn frame_tick(&mut self, viewport: &Viewport) {
        let tuning = &self.settings.sprite;
        for sprite in &mut self.sprites {
            sprite.tick(viewport, tuning);
        }
        self.frame_count += 1;
    }

    /// Run one display frame: due growth firings, then a frame tick
    pub fn advance(&mut self, elapsed: Duration, viewport: &Viewport) {
        let firings = match self.held.as_mut() {
            Some(hold) => hold.timer.poll(elapsed),
            None => 0,
        };
        for _ in 0..firings {
            self.grow_held();
        }
        self.frame_tick(viewport);
    }

    /// Render snapshot of every sprite, oldest first
    pub fn frames(&self) -> Vec<SpriteFrame> {
        self.sprites.iter().map(Sprite::frame).collect()
    }

    /// Drop the oldest sprites beyond the configured cap
    fn evict_overflow(&mut self) {
        let Some(max) = self.settings.max_sprites else {
            return;
        };
        let max = max.max(1);
        if self.sprites.len() > max {
            let excess = self.sprites.len() - max;
            self.sprites.drain(..excess);
            log::debug!("Evicted {} oldest sprite(s)", excess);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}
