//! Turrets ("guns")
//!
//! A turret sits on the right edge of the field and fires at the player on a
//! fixed cadence. Destroying one does not remove it: it respawns in place at a
//! new height, keeping its cadence and shot counter, so the population only
//! ever grows.

use glam::IVec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::projectile::{Owner, Projectile};
use crate::Rect;
use crate::config::Config;

/// An enemy emplacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turret {
    /// Top-left corner
    pub pos: IVec2,
    pub width: i32,
    pub height: i32,
    /// Vertical patrol velocity (0 while turrets are stationary)
    pub vel_y: i32,
    /// Frames between shots, fixed at construction
    pub fire_cadence: u32,
    /// Frames since the last shot
    pub counter: u32,
}

impl Turret {
    /// Build a turret for `level`. Draws position, patrol velocity, then cadence.
    pub fn new<R: Rng>(level: u32, config: &Config, rng: &mut R) -> Self {
        let mut turret = Self {
            pos: IVec2::ZERO,
            width: config.turret_width,
            height: config.turret_height,
            vel_y: 0,
            fire_cadence: 0,
            counter: 0,
        };
        turret.respawn(level, config, rng);
        let cadence = config.turret_fire_cadence;
        turret.fire_cadence = rng.random_range(cadence.min..=cadence.max);
        turret
    }

    /// Move back to the right edge at a random height. Cadence and counter are kept.
    pub fn respawn<R: Rng>(&mut self, level: u32, config: &Config, rng: &mut R) {
        self.pos.x = config.screen_width - self.width;
        self.pos.y = rng.random_range(0..=config.turret_max_y());
        self.vel_y = if level < config.mobile_turret_level {
            0
        } else {
            random_patrol_speed(config, rng)
        };
    }

    /// Advance one frame, returning a projectile when the cadence comes due.
    ///
    /// Patrolling turrets reflect by flipping velocity once they are past a
    /// bound; the position is not clamped, so a turret may sit one step outside
    /// the range for a frame before coming back.
    pub fn update<R: Rng>(
        &mut self,
        level: u32,
        config: &Config,
        rng: &mut R,
    ) -> Option<Projectile> {
        self.counter += 1;

        if level >= config.mobile_turret_level {
            self.pos.y += self.vel_y;
            if self.pos.y < 0 || self.pos.y > config.turret_max_y() {
                self.vel_y = -self.vel_y;
            }
        }

        if self.counter >= self.fire_cadence {
            self.counter = 0;
            return Some(Projectile::fire(self.muzzle(), Owner::Turret, config, rng));
        }
        None
    }

    /// Where projectiles leave the turret: its player-facing edge, vertically centered
    #[inline]
    pub fn muzzle(&self) -> IVec2 {
        IVec2::new(self.pos.x, self.pos.y + self.height / 2)
    }

    #[inline]
    pub fn hitbox(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// Uniform pick from the configured nonzero patrol speeds.
///
/// `Config::validate` rejects an empty list; an unvalidated empty list falls
/// back to a speed of 1.
pub fn random_patrol_speed<R: Rng>(config: &Config, rng: &mut R) -> i32 {
    debug_assert!(
        !config.turret_patrol_speeds.is_empty(),
        "turret_patrol_speeds is empty"
    );
    config
        .turret_patrol_speeds
        .choose(rng)
        .copied()
        .unwrap_or(1)
}
