//! Bouncing Heads entry point
//!
//! The browser build is driven from JS through `web::BounceToy`. Natively this
//! runs a short scripted session (press, hold, release, bounce) and prints the
//! final frame snapshot as JSON.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::time::Duration;

    use bouncing_heads::{Engine, Settings, Viewport};
    use glam::Vec2;

    const FRAME: Duration = Duration::from_millis(16);
    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    /// (press position, frames held, frames after release)
    const SCRIPT: &[((f32, f32), u32, u32)] = &[
        ((320.0, 240.0), 30, 60),
        ((960.0, 480.0), 90, 120),
        ((640.0, 360.0), 10, 240),
    ];

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        env_logger::init();
        log::info!("Bouncing Heads (native) starting...");

        let settings = match std::env::args().nth(1) {
            Some(path) => Settings::load_or_default(path),
            None => Settings::default(),
        };
        let mut engine = Engine::new(settings);

        for &((x, y), held, free) in SCRIPT {
            engine.begin_hold(Vec2::new(x, y));
            for _ in 0..held {
                engine.advance(FRAME, &VIEWPORT);
            }
            engine.end_hold();
            for _ in 0..free {
                engine.advance(FRAME, &VIEWPORT);
            }
            log::info!(
                "{} sprite(s) after {} frames",
                engine.sprite_count(),
                engine.frame_count()
            );
        }

        println!("{}", serde_json::to_string_pretty(&engine.frames())?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    demo::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_start, this is just to satisfy the compiler
}
