//! World bounds and tuning
//!
//! Every constant the simulation reads lives here. A `Config` is built once,
//! validated, and handed to [`crate::sim::World::new`]; the simulation never
//! mutates it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Configuration loading/validation failure
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Inclusive integer range, serialized as `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "(T, T)",
    into = "(T, T)",
    bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>")
)]
pub struct Span<T: Copy> {
    pub min: T,
    pub max: T,
}

impl<T: Copy> Span<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: Copy> From<(T, T)> for Span<T> {
    fn from((min, max): (T, T)) -> Self {
        Self { min, max }
    }
}

impl<T: Copy> From<Span<T>> for (T, T) {
    fn from(span: Span<T>) -> Self {
        (span.min, span.max)
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Playfield ===
    pub screen_width: i32,
    pub screen_height: i32,
    /// Width of the strip along the left edge the player may not enter
    pub danger_zone_width: i32,

    // === Player ===
    pub player_radius: i32,
    /// Pixels per frame, per axis
    pub player_speed: i32,
    /// Frames between shots
    pub player_cooldown_max: u32,
    pub player_start: (i32, i32),

    // === Turrets ===
    pub turret_width: i32,
    pub turret_height: i32,
    /// Frames between shots, drawn once per turret
    pub turret_fire_cadence: Span<u32>,
    /// Patrol velocities drawn when turrets are mobile (must not contain 0)
    pub turret_patrol_speeds: Vec<i32>,
    /// First level at which turrets patrol
    pub mobile_turret_level: u32,

    // === Projectiles ===
    pub projectile_radius: i32,
    /// Speed magnitude, drawn once per projectile
    pub projectile_speed: Span<i32>,

    // === Scoring ===
    pub near_miss_bonus: u64,
    pub bonus_threshold: u32,

    // === Progression ===
    pub eliminations_per_level: u32,
    pub initial_turret_count: usize,
    pub initial_level: u32,

    /// Frames per second the driver paces at (not used by the core)
    pub frame_rate: u32,
    /// Seed for the world RNG
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            danger_zone_width: DANGER_ZONE_WIDTH,

            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            player_cooldown_max: PLAYER_MAX_COOLDOWN,
            player_start: (PLAYER_START_X, SCREEN_HEIGHT / 2),

            turret_width: TURRET_WIDTH,
            turret_height: TURRET_HEIGHT,
            turret_fire_cadence: TURRET_FIRE_CADENCE.into(),
            turret_patrol_speeds: TURRET_PATROL_SPEEDS.to_vec(),
            mobile_turret_level: MOBILE_TURRET_LEVEL,

            projectile_radius: PROJECTILE_RADIUS,
            projectile_speed: PROJECTILE_SPEED.into(),

            near_miss_bonus: NEAR_MISS_BONUS,
            bonus_threshold: BONUS_THRESHOLD,

            eliminations_per_level: ELIMINATIONS_PER_LEVEL,
            initial_turret_count: INITIAL_TURRET_COUNT,
            initial_level: INITIAL_LEVEL,

            frame_rate: FRAME_RATE,
            seed: 0,
        }
    }
}

impl Config {
    /// Default config with a specific RNG seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Lowest y a turret's top edge may sit at while patrolling
    #[inline]
    pub fn turret_max_y(&self) -> i32 {
        self.screen_height - self.turret_height
    }

    /// Leftmost x the player may step left from
    #[inline]
    pub fn player_min_x(&self) -> i32 {
        self.player_radius + self.danger_zone_width
    }

    /// Check that every range the simulation draws from is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(msg: impl Into<String>) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid(msg.into()))
        }

        if self.screen_width <= 0 || self.screen_height <= 0 {
            return invalid("screen dimensions must be positive");
        }
        if self.player_radius <= 0 || self.projectile_radius <= 0 {
            return invalid("player and projectile radii must be positive");
        }
        if self.player_speed <= 0 {
            return invalid("player_speed must be positive");
        }
        if self.turret_width <= 0 || self.turret_height <= 0 {
            return invalid("turret dimensions must be positive");
        }
        if self.turret_height > self.screen_height || self.turret_width > self.screen_width {
            return invalid("turret does not fit on screen");
        }
        if self.danger_zone_width < 0 || self.player_min_x() >= self.screen_width - self.player_radius {
            return invalid("danger zone leaves no room for the player");
        }
        let cadence = self.turret_fire_cadence;
        if cadence.min == 0 || cadence.min > cadence.max {
            return invalid(format!(
                "turret_fire_cadence [{}, {}] must be a non-empty range starting above 0",
                cadence.min, cadence.max
            ));
        }
        let speed = self.projectile_speed;
        if speed.min <= 0 || speed.min > speed.max {
            return invalid(format!(
                "projectile_speed [{}, {}] must be a non-empty positive range",
                speed.min, speed.max
            ));
        }
        if self.turret_patrol_speeds.is_empty() || self.turret_patrol_speeds.contains(&0) {
            return invalid("turret_patrol_speeds must be non-empty and nonzero");
        }
        if self.bonus_threshold == 0 {
            return invalid("bonus_threshold must be positive");
        }
        if self.eliminations_per_level == 0 {
            return invalid("eliminations_per_level must be positive");
        }
        if self.initial_level == 0 {
            return invalid("initial_level starts at 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.screen_width, 800);
        assert_eq!(config.screen_height, 600);
        assert_eq!(config.player_start, (50, 300));
        assert_eq!(config.turret_fire_cadence, Span::new(30, 90));
        assert_eq!(config.projectile_speed, Span::new(3, 7));
        assert_eq!(config.turret_max_y(), 540);
        assert_eq!(config.player_min_x(), 120);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json_str(r#"{ "seed": 42, "turret_fire_cadence": [10, 20] }"#)
            .expect("valid config");
        assert_eq!(config.seed, 42);
        assert_eq!(config.turret_fire_cadence, Span::new(10, 20));
        assert_eq!(config.screen_width, SCREEN_WIDTH);
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = Config::from_json_str(r#"{ "projectile_speed": [7, 3] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_zero_patrol_speed() {
        let config = Config {
            turret_patrol_speeds: vec![-1, 0, 1],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/turret-dodge/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = Config::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_roundtrip_json() {
        let config = Config::with_seed(7);
        let json = serde_json::to_string(&config).expect("serialize");
        assert_eq!(Config::from_json_str(&json).expect("parse"), config);
    }
}
