//! Projectiles ("bullets")
//!
//! Both sides fire the same kind of projectile: a small square hitbox moving
//! purely horizontally at a speed fixed when it is fired.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::config::Config;

/// Who fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Turret,
}

impl Owner {
    /// Horizontal travel direction: turrets shoot left at the player, the player shoots right
    #[inline]
    pub fn direction(self) -> i32 {
        match self {
            Owner::Player => 1,
            Owner::Turret => -1,
        }
    }
}

/// A moving projectile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: IVec2,
    pub radius: i32,
    /// Signed horizontal velocity in pixels/frame, never changes after firing
    pub vel_x: i32,
    pub owner: Owner,
}

impl Projectile {
    /// Fire a projectile with a speed drawn from the configured range
    pub fn fire<R: Rng>(pos: IVec2, owner: Owner, config: &Config, rng: &mut R) -> Self {
        let span = config.projectile_speed;
        let speed = rng.random_range(span.min..=span.max);
        Self::with_speed(pos, owner, speed, config.projectile_radius)
    }

    /// Projectile with an explicit speed magnitude
    pub fn with_speed(pos: IVec2, owner: Owner, speed: i32, radius: i32) -> Self {
        Self {
            pos,
            radius,
            vel_x: speed.abs() * owner.direction(),
            owner,
        }
    }

    /// Advance one frame
    #[inline]
    pub fn update(&mut self) {
        self.pos.x += self.vel_x;
    }

    #[inline]
    pub fn hitbox(&self) -> Rect {
        Rect::around(self.pos, self.radius)
    }

    /// Strictly inside the horizontal playfield
    #[inline]
    pub fn in_bounds(&self, screen_width: i32) -> bool {
        0 < self.pos.x && self.pos.x < screen_width
    }
}
