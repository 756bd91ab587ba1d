//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. The defaults reproduce the
//! classic arcade feel; a JSON document can override any subset of fields.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Error raised while loading or validating a tuning table
#[derive(Debug)]
pub enum TuningError {
    /// The file could not be read
    Io(std::io::Error),
    /// The document is not valid JSON for [`Tuning`]
    Parse(serde_json::Error),
    /// A field holds a value the simulation cannot run with
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read tuning file: {err}"),
            Self::Parse(err) => write!(f, "failed to parse tuning: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid tuning `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Both ends and the distance between them are finite
fn finite_span(low: f32, high: f32) -> bool {
    low.is_finite() && high.is_finite() && (high - low).is_finite()
}

/// Gameplay balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play field ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Run setup ===
    pub initial_lives: u8,
    pub initial_asteroids: usize,

    // === Ship ===
    /// Collision radius and visual size
    pub ship_size: f32,
    /// Radians per second
    pub turn_rate: f32,
    /// Pixels per second squared
    pub thrust: f32,
    pub max_speed: f32,
    /// Per-frame multiplicative brake (not scaled by dt)
    pub brake_factor: f32,

    // === Bullets ===
    pub bullet_speed: f32,
    /// Seconds
    pub bullet_lifetime: f32,
    /// Seconds between shots
    pub shoot_cooldown: f32,
    /// Collision radius (the drawn square is larger)
    pub bullet_radius: f32,

    // === Asteroids ===
    /// Asteroids strictly larger than this split on destruction
    pub split_threshold: f32,
    /// Child size = parent size * ratio
    pub split_ratio: f32,
    pub spawn_size_min: f32,
    pub spawn_size_max: f32,
    /// Inward speed range for edge spawns, before the divisor
    pub spawn_inward_min: f32,
    pub spawn_inward_max: f32,
    /// Tangential half-range for edge spawns, before the divisor
    pub spawn_tangent_range: f32,
    /// Per-axis half-range for split children, before the divisor
    pub scatter_range: f32,
    pub velocity_divisor: f32,

    // === Scoring ===
    pub large_size: f32,
    pub medium_size: f32,
    pub large_points: u32,
    pub medium_points: u32,
    pub small_points: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH as f32,
            screen_height: SCREEN_HEIGHT as f32,

            initial_lives: 3,
            initial_asteroids: 12,

            ship_size: 10.0,
            turn_rate: 20.0,
            thrust: 200.0,
            max_speed: 500.0,
            brake_factor: 0.995,

            bullet_speed: 500.0,
            bullet_lifetime: 3.0,
            shoot_cooldown: 0.2,
            bullet_radius: 2.0,

            split_threshold: 15.0,
            split_ratio: 0.6,
            spawn_size_min: 15.0,
            spawn_size_max: 30.0,
            spawn_inward_min: 50.0,
            spawn_inward_max: 150.0,
            spawn_tangent_range: 100.0,
            scatter_range: 100.0,
            velocity_divisor: 3.0,

            large_size: 40.0,
            medium_size: 25.0,
            large_points: 100,
            medium_points: 50,
            small_points: 20,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read and parse a JSON tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |field, reason| Err(TuningError::Invalid { field, reason });

        if self.screen_width <= 0.0 {
            return invalid("screen_width", "must be positive");
        }
        if self.screen_height <= 0.0 {
            return invalid("screen_height", "must be positive");
        }
        if self.initial_lives == 0 {
            return invalid("initial_lives", "must be at least 1");
        }
        if !(self.split_ratio > 0.0 && self.split_ratio < 1.0) {
            return invalid("split_ratio", "must be in (0, 1)");
        }
        if self.spawn_size_min <= 0.0 {
            return invalid("spawn_size_min", "must be positive");
        }
        if self.spawn_size_max <= self.spawn_size_min {
            return invalid("spawn_size_max", "must exceed spawn_size_min");
        }
        if self.spawn_size_max > self.screen_width.min(self.screen_height) {
            return invalid("spawn_size_max", "must fit on the play field");
        }
        if !(self.max_speed.is_finite() && self.max_speed > 0.0) {
            return invalid("max_speed", "must be positive");
        }
        if !(self.bullet_lifetime.is_finite() && self.bullet_lifetime > 0.0) {
            return invalid("bullet_lifetime", "must be positive");
        }
        if !(self.shoot_cooldown.is_finite() && self.shoot_cooldown >= 0.0) {
            return invalid("shoot_cooldown", "must be non-negative");
        }
        if !(self.spawn_inward_min.is_finite() && self.spawn_inward_min >= 0.0) {
            return invalid("spawn_inward_min", "must be non-negative");
        }
        if self.spawn_inward_max <= self.spawn_inward_min {
            return invalid("spawn_inward_max", "must exceed spawn_inward_min");
        }
        if !finite_span(self.spawn_inward_min, self.spawn_inward_max) {
            return invalid("spawn_inward_max", "range is too wide");
        }
        if !(self.spawn_tangent_range >= 0.0 && finite_span(-self.spawn_tangent_range, self.spawn_tangent_range)) {
            return invalid("spawn_tangent_range", "must be non-negative with a finite span");
        }
        if !(self.scatter_range >= 0.0 && finite_span(-self.scatter_range, self.scatter_range)) {
            return invalid("scatter_range", "must be non-negative with a finite span");
        }
        if !(self.velocity_divisor.is_finite() && self.velocity_divisor > 0.0) {
            return invalid("velocity_divisor", "must be positive");
        }
        Ok(())
    }

    /// Points awarded for destroying an asteroid of the given size
    pub fn points_for_size(&self, size: f32) -> u32 {
        if size > self.large_size {
            self.large_points
        } else if size > self.medium_size {
            self.medium_points
        } else {
            self.small_points
        }
    }

    /// Screen center (ship spawn point)
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "initial_lives": 5, "max_speed": 250.0 }"#).unwrap();
        assert_eq!(tuning.initial_lives, 5);
        assert_eq!(tuning.max_speed, 250.0);
        assert_eq!(tuning.initial_asteroids, 12);
        assert_eq!(tuning.split_ratio, 0.6);
    }

    #[test]
    fn test_invalid_split_ratio_rejected() {
        let err = Tuning::from_json(r#"{ "split_ratio": 1.5 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "split_ratio", .. }));
        assert!(err.to_string().contains("split_ratio"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Tuning::load("/definitely/not/here/tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
    }

    fn rejected_field(json: &str) -> &'static str {
        match Tuning::from_json(json) {
            Err(TuningError::Invalid { field, .. }) => field,
            other => panic!("expected Invalid for {json}, got {other:?}"),
        }
    }

    #[test]
    fn test_oversized_spawn_rejected() {
        assert_eq!(
            rejected_field(r#"{ "spawn_size_min": 50000, "spawn_size_max": 50001 }"#),
            "spawn_size_max"
        );
    }

    #[test]
    fn test_non_positive_motion_values_rejected() {
        assert_eq!(rejected_field(r#"{ "max_speed": -1.0 }"#), "max_speed");
        assert_eq!(rejected_field(r#"{ "bullet_lifetime": 0.0 }"#), "bullet_lifetime");
        assert_eq!(rejected_field(r#"{ "shoot_cooldown": -0.5 }"#), "shoot_cooldown");
        assert_eq!(rejected_field(r#"{ "velocity_divisor": -3.0 }"#), "velocity_divisor");
        assert_eq!(rejected_field(r#"{ "spawn_inward_min": -10.0 }"#), "spawn_inward_min");
    }

    #[test]
    fn test_unbounded_velocity_ranges_rejected() {
        assert_eq!(rejected_field(r#"{ "spawn_tangent_range": 3.0e38 }"#), "spawn_tangent_range");
        assert_eq!(rejected_field(r#"{ "spawn_tangent_range": -1.0 }"#), "spawn_tangent_range");
        assert_eq!(rejected_field(r#"{ "scatter_range": 3.0e38 }"#), "scatter_range");
        assert_eq!(rejected_field(r#"{ "scatter_range": -5.0 }"#), "scatter_range");
    }

    #[test]
    fn test_zero_cooldown_allowed() {
        assert!(Tuning::from_json(r#"{ "shoot_cooldown": 0.0 }"#).is_ok());
    }

    #[test]
    fn test_points_for_size_tiers() {
        let tuning = Tuning::default();
        assert_eq!(tuning.points_for_size(45.0), 100);
        assert_eq!(tuning.points_for_size(40.0), 50);
        assert_eq!(tuning.points_for_size(30.0), 50);
        assert_eq!(tuning.points_for_size(25.0), 20);
        assert_eq!(tuning.points_for_size(10.0), 20);
    }
}
