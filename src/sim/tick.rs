//! Per-frame simulation step
//!
//! Advances the game by an elapsed `dt` in a fixed order: ship control,
//! motion and wraparound, collisions, win check, purge.

use super::collision::{resolve_bullet_hits, resolve_ship_hit};
use super::rng::RandomSource;
use super::state::{Bullet, GamePhase, GameState};
use crate::{heading, wrap_position};

/// Input state for a single frame (level-triggered, "is pressed now")
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Rotate counter-clockwise
    pub left: bool,
    /// Rotate clockwise
    pub right: bool,
    /// Thrust along heading
    pub thrust: bool,
    /// Damp velocity
    pub brake: bool,
    /// Shoot (subject to cooldown)
    pub fire: bool,
    /// Restart from game over / victory
    pub restart: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick<R: RandomSource>(state: &mut GameState<R>, input: &TickInput, dt: f32) {
    // Stale victory with asteroids still alive
    if state.phase == GamePhase::Won && state.has_active_asteroids() {
        log::warn!("Victory flagged with active asteroids, resuming play");
        state.phase = GamePhase::Playing;
    }

    match state.phase {
        GamePhase::GameOver | GamePhase::Won => {
            if input.restart {
                log::info!("Restarting (previous score {})", state.score);
                state.reset();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.frame += 1;

    if state.ship.alive {
        control_ship(state, input, dt);

        let (w, h) = (state.tuning.screen_width, state.tuning.screen_height);
        state.ship.pos = wrap_position(state.ship.pos + state.ship.vel * dt, w, h);
    }

    advance_bullets(state, dt);
    advance_asteroids(state, dt);

    let hits = resolve_bullet_hits(state);
    if hits.destroyed > 0 {
        log::trace!(
            "Frame {}: {} destroyed, {} fragments, score {}",
            state.frame,
            hits.destroyed,
            hits.fragments,
            state.score
        );
    }
    resolve_ship_hit(state);

    if state.phase == GamePhase::Playing && !state.has_active_asteroids() {
        log::info!("Field cleared on frame {} - score {}", state.frame, state.score);
        state.phase = GamePhase::Won;
    }

    state.purge_inactive();
}

/// Rotation, thrust, brake, cooldown and firing
fn control_ship<R>(state: &mut GameState<R>, input: &TickInput, dt: f32) {
    let tuning = &state.tuning;
    let ship = &mut state.ship;

    if input.left {
        ship.angle -= tuning.turn_rate * dt;
    }
    if input.right {
        ship.angle += tuning.turn_rate * dt;
    }

    if input.thrust {
        ship.vel += heading(ship.angle) * (tuning.thrust * dt);
        ship.vel = ship.vel.clamp_length_max(tuning.max_speed);
    }

    // Direct per-frame scale, intentionally not a force
    if input.brake {
        ship.vel *= tuning.brake_factor;
    }

    state.shoot_cooldown -= dt;
    if input.fire && state.shoot_cooldown <= 0.0 {
        state.bullets.push(Bullet {
            pos: ship.pos,
            vel: heading(ship.angle) * tuning.bullet_speed,
            life: tuning.bullet_lifetime,
            active: true,
        });
        state.shoot_cooldown = tuning.shoot_cooldown;
    }
}

fn advance_bullets<R>(state: &mut GameState<R>, dt: f32) {
    let (w, h) = (state.tuning.screen_width, state.tuning.screen_height);
    for bullet in state.bullets.iter_mut().filter(|b| b.active) {
        bullet.pos += bullet.vel * dt;
        bullet.life -= dt;
        if bullet.life <= 0.0 {
            bullet.active = false;
        }
        bullet.pos = wrap_position(bullet.pos, w, h);
    }
}

fn advance_asteroids<R>(state: &mut GameState<R>, dt: f32) {
    let (w, h) = (state.tuning.screen_width, state.tuning.screen_height);
    for asteroid in state.asteroids.iter_mut().filter(|a| a.active) {
        asteroid.pos = wrap_position(asteroid.pos + asteroid.vel * dt, w, h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::state::Asteroid;
    use glam::Vec2;

    /// A game with a single stationary asteroid parked far from the ship
    fn quiet_state() -> GameState {
        let mut state = GameState::new(12345);
        state.asteroids = vec![Asteroid::new(Vec2::new(50.0, 50.0), Vec2::ZERO, 10.0)];
        state
    }

    #[test]
    fn test_rotation() {
        let mut state = quiet_state();
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.1);
        assert!((state.ship.angle - 2.0).abs() < 1e-5);

        let input = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.05);
        assert!((state.ship.angle - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_thrust_respects_max_speed() {
        let mut state = quiet_state();
        let input = TickInput {
            thrust: true,
            ..Default::default()
        };
        for _ in 0..2000 {
            tick(&mut state, &input, SIM_DT);
            assert!(state.ship.vel.length() <= state.tuning.max_speed + 1e-3);
        }
        assert!(state.ship.vel.length() > state.tuning.max_speed - 1.0);
    }

    #[test]
    fn test_brake_is_multiplicative() {
        let mut state = quiet_state();
        state.ship.vel = Vec2::new(100.0, 0.0);
        let input = TickInput {
            brake: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert!((state.ship.vel.x - 99.5).abs() < 1e-4);
        // Not scaled by dt
        tick(&mut state, &input, 0.0);
        assert!((state.ship.vel.x - 99.5 * 0.995).abs() < 1e-4);
    }

    #[test]
    fn test_fire_cooldown() {
        let mut state = quiet_state();
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.bullets.len(), 1);
        assert!((state.shoot_cooldown - 0.2).abs() < 1e-6);

        // Still cooling down
        tick(&mut state, &input, 0.1);
        assert_eq!(state.bullets.len(), 1);

        // Cooldown elapsed
        tick(&mut state, &input, 0.15);
        assert_eq!(state.bullets.len(), 2);
    }

    #[test]
    fn test_bullet_heading_and_speed() {
        let mut state = quiet_state();
        state.ship.angle = std::f32::consts::FRAC_PI_2;
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        let bullet = &state.bullets[0];
        assert!(bullet.vel.x.abs() < 1e-3);
        assert!((bullet.vel.y - 500.0).abs() < 1e-3);
        assert!((bullet.life - (3.0 - SIM_DT)).abs() < 1e-5);
    }

    #[test]
    fn test_bullet_expires_and_is_purged() {
        let mut state = quiet_state();
        state.bullets.push(Bullet {
            pos: Vec2::new(900.0, 700.0),
            vel: Vec2::ZERO,
            life: 0.01,
            active: true,
        });
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_zero_dt_is_motion_noop() {
        let mut state = GameState::new(77);
        state.ship.vel = Vec2::new(30.0, 40.0);
        let ship_pos = state.ship.pos;
        let positions: Vec<Vec2> = state.asteroids.iter().map(|a| a.pos).collect();
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.ship.pos, ship_pos);
        for (a, before) in state.asteroids.iter().zip(positions) {
            assert_eq!(a.pos, before);
        }
    }

    #[test]
    fn test_ship_wraps() {
        let mut state = quiet_state();
        state.ship.pos = Vec2::new(1020.0, 100.0);
        state.ship.vel = Vec2::new(600.0, 0.0);
        tick(&mut state, &TickInput::default(), 0.1);
        assert_eq!(state.ship.pos.x, 0.0);
    }

    #[test]
    fn test_win_on_exact_frame() {
        let mut state = GameState::new(12345);
        // One small asteroid drifting into a stationary bullet
        state.asteroids = vec![Asteroid::new(Vec2::new(100.0, 100.0), Vec2::new(60.0, 0.0), 10.0)];
        state.bullets.push(Bullet {
            pos: Vec2::new(125.0, 100.0),
            vel: Vec2::ZERO,
            life: 10.0,
            active: true,
        });

        let idle = TickInput::default();
        // Closes 1 px per frame; overlap once the gap drops below 12 px
        let mut frames = 0;
        while state.phase == GamePhase::Playing {
            let had_asteroids = state.has_active_asteroids();
            tick(&mut state, &idle, 1.0 / 60.0);
            frames += 1;
            assert!(had_asteroids);
            if state.phase == GamePhase::Playing {
                assert!(state.has_active_asteroids());
            }
            assert!(frames < 100);
        }
        assert_eq!(state.phase, GamePhase::Won);
        assert!(state.asteroids.is_empty());
        assert_eq!(state.score, 20);
    }

    #[test]
    fn test_life_loss_keeps_playing() {
        let mut state = quiet_state();
        let center = state.tuning.center();
        state.asteroids.push(Asteroid::new(center, Vec2::ZERO, 20.0));
        state.lives = 2;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.lives, 1);
        assert!(state.ship.alive);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_game_over_freezes_until_restart() {
        let mut state = quiet_state();
        let center = state.tuning.center();
        state.asteroids.push(Asteroid::new(center, Vec2::new(5.0, 0.0), 20.0));
        state.lives = 1;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);

        let frozen: Vec<Vec2> = state.asteroids.iter().map(|a| a.pos).collect();
        let input = TickInput {
            thrust: true,
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.bullets.is_empty());
        let after: Vec<Vec2> = state.asteroids.iter().map(|a| a.pos).collect();
        assert_eq!(frozen, after);

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert!(state.bullets.is_empty());
        assert_eq!(state.asteroids.len(), 12);
        assert!(state.asteroids.iter().all(|a| a.active));
    }

    #[test]
    fn test_restart_from_won() {
        let mut state = GameState::new(3);
        state.asteroids.clear();
        state.score = 500;
        state.phase = GamePhase::Won;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Won);

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.asteroids.len(), 12);
    }

    #[test]
    fn test_stale_victory_reverts_to_playing() {
        let mut state = GameState::new(3);
        state.phase = GamePhase::Won;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_no_inactive_left_after_tick() {
        let mut state = GameState::new(8);
        let input = TickInput {
            fire: true,
            right: true,
            ..Default::default()
        };
        for _ in 0..600 {
            tick(&mut state, &input, SIM_DT);
            assert!(state.bullets.iter().all(|b| b.active));
            assert!(state.asteroids.iter().all(|a| a.active));
        }
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                thrust: true,
                ..Default::default()
            },
            TickInput {
                fire: true,
                left: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..200 {
            for input in &inputs {
                tick(&mut state1, input, SIM_DT);
                tick(&mut state2, input, SIM_DT);
            }
        }

        assert_eq!(state1.snapshot(), state2.snapshot());
        assert_eq!(state1.ship.pos, state2.ship.pos);
    }
}
