//! Asteroid spawning strategies
//!
//! Two distinct distributions are used and kept apart on purpose:
//! [`EdgeSpawn`] for the opening field, [`SplitScatter`] for fragments.

use glam::Vec2;

use super::rng::RandomSource;
use super::state::Asteroid;
use crate::tuning::Tuning;

/// Screen edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Unit vector pointing into the play field from this edge
    pub fn inward(self) -> Vec2 {
        match self {
            Edge::Top => Vec2::Y,
            Edge::Right => Vec2::NEG_X,
            Edge::Bottom => Vec2::NEG_Y,
            Edge::Left => Vec2::X,
        }
    }
}

/// Edge-biased spawn: random point on a random edge, drifting inward
pub struct EdgeSpawn;

impl EdgeSpawn {
    pub fn sample<R: RandomSource>(rng: &mut R, tuning: &Tuning) -> Asteroid {
        let size = rng.uniform(tuning.spawn_size_min, tuning.spawn_size_max);
        let edge = Edge::ALL[rng.index(Edge::ALL.len())];
        Self::sample_on(rng, tuning, edge, size)
    }

    /// Spawn on a known edge with a known size
    pub fn sample_on<R: RandomSource>(
        rng: &mut R,
        tuning: &Tuning,
        edge: Edge,
        size: f32,
    ) -> Asteroid {
        let w = tuning.screen_width;
        let h = tuning.screen_height;

        let pos = match edge {
            Edge::Top => Vec2::new(rng.uniform(0.0, w), 0.0),
            Edge::Right => Vec2::new(w, rng.uniform(0.0, h)),
            Edge::Bottom => Vec2::new(rng.uniform(0.0, w), h),
            Edge::Left => Vec2::new(0.0, rng.uniform(0.0, h)),
        };

        // Tangential first, then inward
        let tangent = rng.uniform(-tuning.spawn_tangent_range, tuning.spawn_tangent_range);
        let inward = rng.uniform(tuning.spawn_inward_min, tuning.spawn_inward_max);

        let dir = edge.inward();
        let along = Vec2::new(dir.y.abs(), dir.x.abs());
        let vel = (dir * inward + along * tangent) / tuning.velocity_divisor;

        Asteroid::new(pos, vel, size)
    }
}

/// Symmetric uniform velocity for split fragments (not edge-biased)
pub struct SplitScatter;

impl SplitScatter {
    pub fn velocity<R: RandomSource>(rng: &mut R, tuning: &Tuning) -> Vec2 {
        let range = tuning.scatter_range;
        let x = rng.uniform(-range, range);
        let y = rng.uniform(-range, range);
        Vec2::new(x, y) / tuning.velocity_divisor
    }

    /// The two fragments a destroyed parent breaks into, or none if the
    /// parent is at or below the split threshold
    pub fn fragments<R: RandomSource>(
        rng: &mut R,
        tuning: &Tuning,
        parent: &Asteroid,
    ) -> Option<[Asteroid; 2]> {
        if parent.size <= tuning.split_threshold {
            return None;
        }
        let size = parent.size * tuning.split_ratio;
        let first = Asteroid::new(parent.pos, Self::velocity(rng, tuning), size);
        let second = Asteroid::new(parent.pos, Self::velocity(rng, tuning), size);
        Some([first, second])
    }
}
