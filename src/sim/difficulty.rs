//! Difficulty progression
//!
//! The turret population must keep up with eliminations: every
//! `eliminations_per_level` kills raise the target by one. Each frame at most
//! one turret is added, and each addition is a level up. Reaching the mobile
//! level switches every turret to patrolling, once.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::turret::{Turret, random_patrol_speed};
use crate::config::Config;

/// Result of a frame in which the population grew
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    pub population: usize,
    /// True on the frame turrets started patrolling
    pub patrol_activated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyController {
    eliminations: u32,
    level: u32,
}

impl DifficultyController {
    pub fn new(initial_level: u32) -> Self {
        Self {
            eliminations: 0,
            level: initial_level,
        }
    }

    /// Controller with existing progress
    pub fn from_parts(eliminations: u32, level: u32) -> Self {
        Self { eliminations, level }
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn eliminations(&self) -> u32 {
        self.eliminations
    }

    #[inline]
    pub fn record_elimination(&mut self) {
        self.eliminations += 1;
    }

    /// Minimum turret count for the current elimination tally
    pub fn target_population(&self, config: &Config) -> usize {
        (self.eliminations / config.eliminations_per_level) as usize + config.initial_turret_count
    }

    /// Grow the population by one turret if it is below target
    pub fn update<R: Rng>(
        &mut self,
        turrets: &mut Vec<Turret>,
        config: &Config,
        rng: &mut R,
    ) -> Option<LevelUp> {
        if self.target_population(config) <= turrets.len() {
            return None;
        }

        self.level += 1;
        turrets.push(Turret::new(self.level, config, rng));

        let patrol_activated = self.level == config.mobile_turret_level;
        if patrol_activated {
            for turret in turrets.iter_mut() {
                turret.vel_y = random_patrol_speed(config, rng);
            }
            log::info!("Level {}: turrets are now patrolling", self.level);
        }

        log::info!(
            "Level up -> {} ({} turrets, {} eliminated)",
            self.level,
            turrets.len(),
            self.eliminations
        );

        Some(LevelUp {
            level: self.level,
            population: turrets.len(),
            patrol_activated,
        })
    }
}
