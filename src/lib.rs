//! Asteroids - a classic wraparound arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, scoring, game phase)
//! - `renderer`: Presentation adapter (draw commands, software rasterizer)
//! - `platform`: Host engine seams (key polling, pixel surface)
//! - `tuning`: Data-driven game balance
//! - `game`: Lifecycle contract the host drives once per frame

pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Host surface dimensions
    pub const SCREEN_WIDTH: usize = 1024;
    pub const SCREEN_HEIGHT: usize = 768;

    /// Fixed simulation timestep used by the native driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
}

/// Unit vector pointing along `angle` (radians, 0 = +x, y grows downward)
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Wrap a position onto the toroidal play field `[0, width] x [0, height]`.
///
/// Each axis is handled independently: leaving past the far edge lands
/// exactly on `0`, leaving below `0` lands exactly on the far edge.
#[inline]
pub fn wrap_position(mut pos: Vec2, width: f32, height: f32) -> Vec2 {
    if pos.x < 0.0 {
        pos.x = width;
    } else if pos.x > width {
        pos.x = 0.0;
    }
    if pos.y < 0.0 {
        pos.y = height;
    } else if pos.y > height {
        pos.y = 0.0;
    }
    pos
}

/// Two circles overlap iff the distance between centers is strictly less
/// than the sum of their radii
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}
