//! Turret Dodge - a dodge-and-return-fire arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, scoring, difficulty)
//! - `config`: World bounds and tuning, loadable from JSON
//! - `autopilot`: Demo AI producing inputs from the world
//!
//! Rendering, input polling, audio and frame pacing belong to the embedding
//! application. It feeds a [`sim::StepInput`] into [`sim::step`] once per
//! frame and draws the returned [`sim::RenderSnapshot`].

pub mod autopilot;
pub mod config;
pub mod sim;

pub use config::{Config, ConfigError};

use glam::IVec2;

/// Default game constants
pub mod consts {
    /// Playfield dimensions
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;

    /// Player defaults
    pub const PLAYER_RADIUS: i32 = 20;
    pub const PLAYER_SPEED: i32 = 5;
    /// Frames between player shots
    pub const PLAYER_MAX_COOLDOWN: u32 = 15;
    pub const PLAYER_START_X: i32 = 50;

    /// Reserved strip along the left edge the player cannot move into
    pub const DANGER_ZONE_WIDTH: i32 = 100;

    /// Turret ("gun") defaults
    pub const TURRET_WIDTH: i32 = 30;
    pub const TURRET_HEIGHT: i32 = 60;
    /// Frames between turret shots, inclusive range
    pub const TURRET_FIRE_CADENCE: (u32, u32) = (30, 90);
    /// Patrol velocities once turrets become mobile
    pub const TURRET_PATROL_SPEEDS: [i32; 4] = [-2, -1, 1, 2];
    /// Level at which turrets start patrolling
    pub const MOBILE_TURRET_LEVEL: u32 = 3;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: i32 = 5;
    /// Speed magnitude, inclusive range
    pub const PROJECTILE_SPEED: (i32, i32) = (3, 7);

    /// Scoring
    pub const NEAR_MISS_BONUS: u64 = 5;
    pub const BONUS_THRESHOLD: u32 = 500;

    /// Progression
    pub const ELIMINATIONS_PER_LEVEL: u32 = 5;
    pub const INITIAL_TURRET_COUNT: usize = 3;
    pub const INITIAL_LEVEL: u32 = 1;

    /// Frame pacing for the driver (the core itself is frame-count based)
    pub const FRAME_RATE: u32 = 60;
}

/// Axis-aligned integer rectangle (top-left origin, like screen space)
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `2 * radius` centered on `center`
    #[inline]
    pub fn around(center: IVec2, radius: i32) -> Self {
        Self::new(center.x - radius, center.y - radius, radius * 2, radius * 2)
    }

    /// Strict overlap test: touching edges do not count, empty rects never overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}
