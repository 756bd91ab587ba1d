//! Collision detection and scoring
//!
//! Everything is a circle. Each pass resolves at most one hit per scanning
//! entity per frame: a bullet destroys one asteroid, the ship loses one
//! life, no matter how many overlaps exist.

use glam::Vec2;

use super::rng::RandomSource;
use super::spawner::SplitScatter;
use super::state::{Asteroid, GamePhase, GameState};
use crate::circles_overlap;

/// Outcome of a bullet/asteroid pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulletHits {
    /// Asteroids destroyed this pass
    pub destroyed: u32,
    /// Fragments appended to the field
    pub fragments: u32,
    /// Points awarded
    pub points: u32,
}

/// Outcome of a ship/asteroid pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipHit {
    /// No overlap (or ship already dead)
    Clear,
    /// Lost a life and respawned at the center
    Respawned,
    /// Lost the last life
    Destroyed,
}

/// Circle test between two entities given center and radius
#[inline]
pub fn collide(a: (Vec2, f32), b: (Vec2, f32)) -> bool {
    circles_overlap(a.0, a.1, b.0, b.1)
}

/// Resolve bullet hits against active asteroids.
///
/// Fragments are appended after every bullet has been resolved, so they
/// cannot be hit by another bullet until the next frame.
pub fn resolve_bullet_hits<R: RandomSource>(state: &mut GameState<R>) -> BulletHits {
    let mut hits = BulletHits::default();
    let mut fragments: Vec<Asteroid> = Vec::new();
    let bullet_radius = state.tuning.bullet_radius;

    for bullet in state.bullets.iter_mut().filter(|b| b.active) {
        let target = state
            .asteroids
            .iter_mut()
            .filter(|a| a.active)
            .find(|a| collide((bullet.pos, bullet_radius), (a.pos, a.size)));

        let Some(asteroid) = target else {
            continue;
        };

        bullet.active = false;
        asteroid.active = false;

        let points = state.tuning.points_for_size(asteroid.size);
        hits.points += points;
        hits.destroyed += 1;

        match SplitScatter::fragments(&mut state.rng, &state.tuning, asteroid) {
            Some(children) => {
                log::debug!(
                    "Asteroid size {:.1} split at ({:.0}, {:.0}), +{} points",
                    asteroid.size,
                    asteroid.pos.x,
                    asteroid.pos.y,
                    points
                );
                hits.fragments += children.len() as u32;
                fragments.extend(children);
            }
            None => {
                log::debug!("Asteroid size {:.1} destroyed, +{} points", asteroid.size, points);
            }
        }
    }

    state.score = state.score.saturating_add(hits.points);
    state.asteroids.extend(fragments);
    hits
}

/// Resolve the ship against active asteroids. The asteroid always survives.
pub fn resolve_ship_hit<R>(state: &mut GameState<R>) -> ShipHit {
    if !state.ship.alive {
        return ShipHit::Clear;
    }

    let ship = (state.ship.pos, state.ship.size);
    let hit = state
        .asteroids
        .iter()
        .filter(|a| a.active)
        .any(|a| collide(ship, (a.pos, a.size)));

    if !hit {
        return ShipHit::Clear;
    }

    state.lives = state.lives.saturating_sub(1);
    state.ship.alive = false;

    if state.lives == 0 {
        log::info!("Ship destroyed, no lives left - final score {}", state.score);
        state.phase = GamePhase::GameOver;
        ShipHit::Destroyed
    } else {
        log::debug!("Ship destroyed, {} lives left", state.lives);
        state.ship.respawn(&state.tuning);
        state.phase = GamePhase::Playing;
        ShipHit::Respawned
    }
}
