//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`]; the renderer
//! only ever borrows it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::spawner::EdgeSpawn;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives exhausted, waiting for restart input
    GameOver,
    /// Field cleared, waiting for restart input
    Won,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in radians (0 = +x)
    pub angle: f32,
    /// Collision radius and visual size
    pub size: f32,
    pub alive: bool,
}

impl Ship {
    /// Fresh ship at rest at the screen center
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.center(),
            vel: Vec2::ZERO,
            angle: 0.0,
            size: tuning.ship_size,
            alive: true,
        }
    }

    /// Put the ship back at the center with zero velocity.
    ///
    /// Heading is kept, matching the arcade cabinet behavior.
    pub fn respawn(&mut self, tuning: &Tuning) {
        self.pos = tuning.center();
        self.vel = Vec2::ZERO;
        self.alive = true;
    }
}

/// A projectile fired by the ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds remaining
    pub life: f32,
    pub active: bool,
}

/// A drifting rock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Collision radius, always > 0
    pub size: f32,
    pub active: bool,
}

impl Asteroid {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel,
            size,
            active: true,
        }
    }
}

/// Serializable summary of a frame, for logs and tooling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub frame: u64,
    pub phase: GamePhase,
    pub lives: u8,
    pub score: u32,
    pub bullets: usize,
    pub asteroids: usize,
    pub ship_alive: bool,
}

/// Complete game state (deterministic for a given random source)
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    /// Balance table this run was started with
    pub tuning: Tuning,
    /// Player ship
    pub ship: Ship,
    /// Live projectiles (order irrelevant)
    pub bullets: Vec<Bullet>,
    /// Live asteroids (order irrelevant)
    pub asteroids: Vec<Asteroid>,
    /// Player lives
    pub lives: u8,
    /// Score
    pub score: u32,
    /// Seconds until the ship may fire again
    pub shoot_cooldown: f32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation frames since the last reset
    pub frame: u64,
    pub(crate) rng: R,
}

impl GameState<Pcg32> {
    /// Create a new game with default tuning and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game with custom tuning and the given seed
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed), tuning)
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game drawing randomness from `rng`
    pub fn with_rng(rng: R, tuning: Tuning) -> Self {
        let mut state = Self {
            ship: Ship::new(&tuning),
            bullets: Vec::new(),
            asteroids: Vec::new(),
            lives: tuning.initial_lives,
            score: 0,
            shoot_cooldown: 0.0,
            phase: GamePhase::Playing,
            frame: 0,
            tuning,
            rng,
        };
        state.populate_field();
        state
    }

    /// Reset everything except the random stream: new ship, no bullets,
    /// a fresh asteroid field, full lives, zero score.
    pub fn reset(&mut self) {
        self.ship = Ship::new(&self.tuning);
        self.bullets.clear();
        self.asteroids.clear();
        self.lives = self.tuning.initial_lives;
        self.score = 0;
        self.shoot_cooldown = 0.0;
        self.phase = GamePhase::Playing;
        self.frame = 0;
        self.populate_field();
    }

    fn populate_field(&mut self) {
        for _ in 0..self.tuning.initial_asteroids {
            self.spawn_asteroid();
        }
    }

    /// Spawn one edge-biased asteroid
    pub fn spawn_asteroid(&mut self) {
        let asteroid = EdgeSpawn::sample(&mut self.rng, &self.tuning);
        self.asteroids.push(asteroid);
    }
}

impl<R> GameState<R> {
    /// True if any asteroid still participates in the simulation
    pub fn has_active_asteroids(&self) -> bool {
        self.asteroids.iter().any(|a| a.active)
    }

    /// Drop every inactive bullet and asteroid
    pub fn purge_inactive(&mut self) {
        self.bullets.retain(|b| b.active);
        self.asteroids.retain(|a| a.active);
    }

    /// Summary of the current frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frame: self.frame,
            phase: self.phase,
            lives: self.lives,
            score: self.score,
            bullets: self.bullets.len(),
            asteroids: self.asteroids.len(),
            ship_alive: self.ship.alive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_initial_state() {
        let state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert!(state.bullets.is_empty());
        assert_eq!(state.asteroids.len(), 12);
        assert!(state.asteroids.iter().all(|a| a.active && a.size > 0.0));
        assert_eq!(state.ship.pos, Vec2::new(512.0, 384.0));
        assert_eq!(state.ship.vel, Vec2::ZERO);
        assert!(state.ship.alive);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut state = GameState::new(1);
        state.lives = 0;
        state.score = 990;
        state.phase = GamePhase::GameOver;
        state.ship.pos = Vec2::new(3.0, 4.0);
        state.ship.alive = false;
        state.asteroids.clear();
        state.bullets.push(Bullet {
            pos: Vec2::ZERO,
            vel: Vec2::ONE,
            life: 1.0,
            active: true,
        });

        state.reset();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert!(state.bullets.is_empty());
        assert_eq!(state.asteroids.len(), 12);
        assert!(state.ship.alive);
        assert_eq!(state.ship.pos, state.tuning.center());
    }

    #[test]
    fn test_purge_inactive() {
        let mut state = GameState::new(5);
        state.asteroids[0].active = false;
        state.asteroids[3].active = false;
        state.purge_inactive();
        assert_eq!(state.asteroids.len(), 10);
        assert!(state.asteroids.iter().all(|a| a.active));
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = GameState::new(42);
        let b = GameState::new(42);
        for (x, y) in a.asteroids.iter().zip(&b.asteroids) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.vel, y.vel);
            assert_eq!(x.size, y.size);
        }
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(9);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Playing\""));
        assert!(json.contains("\"asteroids\":12"));
    }
}
