//! Asteroids native entry point
//!
//! Stands in for the host engine: runs a headless frame loop with a scripted
//! pilot, rasterizing into an in-memory frame buffer.

use std::env;

use asteroids::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, SIM_DT};
use asteroids::platform::{InputSource, Key};
use asteroids::renderer::FrameBuffer;
use asteroids::sim::GamePhase;
use asteroids::{Game, Tuning};

const DEFAULT_SEED: u64 = 0x5EED;
const DEFAULT_FRAMES: u64 = 60 * 60;

/// Spins, fires constantly and thrusts in short bursts
struct Pilot {
    frame: u64,
    quit_at: u64,
}

impl InputSource for Pilot {
    fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::Right | Key::Fire => true,
            Key::Up => self.frame % 90 < 10,
            Key::Down => self.frame % 90 >= 45,
            Key::Quit => self.frame >= self.quit_at,
            Key::Left | Key::Confirm => false,
        }
    }
}

fn load_tuning() -> Tuning {
    let path = env::args().nth(1).or_else(|| env::var("ASTEROIDS_TUNING").ok());
    let Some(path) = path else {
        return Tuning::default();
    };
    match Tuning::load(&path) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {path}");
            tuning
        }
        Err(err) => {
            log::warn!("{err} - using defaults");
            Tuning::default()
        }
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn main() {
    env_logger::init();
    log::info!("Asteroids (headless) starting...");

    let seed = env_u64("ASTEROIDS_SEED", DEFAULT_SEED);
    let frames = env_u64("ASTEROIDS_FRAMES", DEFAULT_FRAMES);
    log::info!("Seed {seed:#x}, running up to {frames} frames");

    let mut game = Game::new(seed, load_tuning());

    let mut surface = FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut pilot = Pilot {
        frame: 0,
        quit_at: frames,
    };

    while !game.quit_requested() {
        game.update(SIM_DT, &pilot);
        game.render_to(&mut surface);

        if pilot.frame % 600 == 0 {
            let lit = surface.pixels().iter().filter(|p| p.0 != 0).count();
            log::debug!("Frame {}: {} lit pixels", pilot.frame, lit);
        }

        if game.state().phase != GamePhase::Playing {
            break;
        }
        pilot.frame += 1;
    }

    match serde_json::to_string(&game.state().snapshot()) {
        Ok(json) => log::info!("Final state: {json}"),
        Err(err) => log::error!("Failed to serialize snapshot: {err}"),
    }
    println!(
        "{:?} after {} frames - score {}, lives {}",
        game.state().phase,
        game.state().frame,
        game.state().score,
        game.state().lives
    );

    game.finalize();
}
