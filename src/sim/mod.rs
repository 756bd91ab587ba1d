//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Randomness only through a seedable `RandomSource`
//! - Entities mutated in place, inactive ones purged at the end of each step
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{BulletHits, ShipHit, collide, resolve_bullet_hits, resolve_ship_hit};
pub use rng::{RandomSource, ScriptedRng};
pub use spawner::{Edge, EdgeSpawn, SplitScatter};
pub use state::{Asteroid, Bullet, GamePhase, GameState, Ship, Snapshot};
pub use tick::{TickInput, tick};
