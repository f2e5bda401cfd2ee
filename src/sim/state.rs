//! World state and core simulation types
//!
//! Everything one run needs lives in [`World`]; [`super::step`] is the only
//! thing that advances it.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyController;
use super::projectile::{Owner, Projectile};
use super::score::ScoreLedger;
use super::turret::Turret;
use crate::Rect;
use crate::config::{Config, ConfigError};

/// Why a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// A turret projectile reached the player
    Hit,
    /// The embedding application asked to stop
    Quit,
}

/// Something that happened during the last step (for audio/effects)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerFired { pos: IVec2 },
    TurretFired { turret: usize, pos: IVec2 },
    NearMiss { pos: IVec2 },
    PlayerHit { pos: IVec2 },
    /// `bonus` is the pending amount banked by the kill
    TurretDestroyed { turret: usize, bonus: u64 },
    BonusCommitted { points: u64 },
    LevelUp { level: u32 },
    PatrolActivated,
}

/// The player's avatar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Center
    pub pos: IVec2,
    pub radius: i32,
    /// Frames until the next shot is allowed
    pub cooldown: u32,
}

impl Player {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: IVec2::new(config.player_start.0, config.player_start.1),
            radius: config.player_radius,
            cooldown: 0,
        }
    }

    #[inline]
    pub fn hitbox(&self) -> Rect {
        Rect::around(self.pos, self.radius)
    }

    /// Where player projectiles leave the avatar
    #[inline]
    pub fn muzzle(&self) -> IVec2 {
        IVec2::new(self.pos.x + self.radius, self.pos.y)
    }

    /// Guard-then-move on each axis: a step is taken only while the current
    /// coordinate is strictly inside its bound.
    pub fn apply_movement(&mut self, up: bool, down: bool, left: bool, right: bool, config: &Config) {
        let speed = config.player_speed;
        if up && self.pos.y > self.radius {
            self.pos.y -= speed;
        }
        if down && self.pos.y < config.screen_height - self.radius {
            self.pos.y += speed;
        }
        if left && self.pos.x > config.player_min_x() {
            self.pos.x -= speed;
        }
        if right && self.pos.x < config.screen_width - self.radius {
            self.pos.x += speed;
        }
    }
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct World {
    pub config: Config,
    pub player: Player,
    /// Stable order; turrets are respawned in place, never removed
    pub turrets: Vec<Turret>,
    pub player_projectiles: Vec<Projectile>,
    pub turret_projectiles: Vec<Projectile>,
    pub ledger: ScoreLedger,
    pub difficulty: DifficultyController,
    pub running: bool,
    pub end_reason: Option<EndReason>,
    /// Frames simulated so far
    pub frame: u64,
    /// Events from the most recent step
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl World {
    /// Start a run. The config is trusted; use [`World::try_new`] for untrusted input.
    pub fn new(config: Config) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid config");

        let mut rng = Pcg32::seed_from_u64(config.seed);
        let level = config.initial_level;
        let turrets = (0..config.initial_turret_count)
            .map(|_| Turret::new(level, &config, &mut rng))
            .collect();

        log::info!(
            "New run: seed={}, {} turrets, level {}",
            config.seed,
            config.initial_turret_count,
            level
        );

        Self {
            player: Player::new(&config),
            turrets,
            player_projectiles: Vec::new(),
            turret_projectiles: Vec::new(),
            ledger: ScoreLedger::new(config.bonus_threshold),
            difficulty: DifficultyController::new(level),
            running: true,
            end_reason: None,
            frame: 0,
            events: Vec::new(),
            rng,
            config,
        }
    }

    /// Validate the config, then start a run
    pub fn try_new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.difficulty.level()
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.ledger.total()
    }

    #[inline]
    pub fn eliminations(&self) -> u32 {
        self.difficulty.eliminations()
    }

    /// Put a projectile in the collection matching its owner
    pub fn spawn_projectile(&mut self, projectile: Projectile) {
        match projectile.owner {
            Owner::Player => self.player_projectiles.push(projectile),
            Owner::Turret => self.turret_projectiles.push(projectile),
        }
    }

    /// Stop the run. The first reason recorded wins.
    pub(crate) fn end(&mut self, reason: EndReason) {
        if self.end_reason.is_none() {
            self.end_reason = Some(reason);
            log::info!(
                "Run ended ({:?}) at frame {}: score {}, level {}, {} eliminated",
                reason,
                self.frame,
                self.score(),
                self.level(),
                self.eliminations()
            );
        }
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world() {
        let world = World::new(Config::with_seed(1));
        assert!(world.running);
        assert_eq!(world.level(), 1);
        assert_eq!(world.turrets.len(), 3);
        assert_eq!(world.player.pos, IVec2::new(50, 300));
        assert_eq!(world.score(), 0);
        assert!(world.player_projectiles.is_empty());
        assert!(world.turret_projectiles.is_empty());
    }

    #[test]
    fn test_try_new_rejects_invalid() {
        let config = Config {
            turret_patrol_speeds: Vec::new(),
            ..Config::default()
        };
        assert!(World::try_new(config).is_err());
    }

    #[test]
    fn test_movement_guards() {
        let config = Config::default();
        let mut player = Player::new(&config);

        // Start is inside the danger zone: left is refused, right is allowed
        player.apply_movement(false, false, true, false, &config);
        assert_eq!(player.pos.x, 50);
        player.apply_movement(false, false, false, true, &config);
        assert_eq!(player.pos.x, 55);

        // Guard-then-move allows a step past the radius line
        player.pos.y = 22;
        player.apply_movement(true, false, false, false, &config);
        assert_eq!(player.pos.y, 17);
        player.apply_movement(true, false, false, false, &config);
        assert_eq!(player.pos.y, 17);

        player.pos.x = 125;
        player.apply_movement(false, false, true, false, &config);
        assert_eq!(player.pos.x, 120);
        player.apply_movement(false, false, true, false, &config);
        assert_eq!(player.pos.x, 120);
    }

    #[test]
    fn test_spawn_routes_by_owner() {
        let mut world = World::new(Config::with_seed(2));
        world.spawn_projectile(Projectile::with_speed(IVec2::new(10, 10), Owner::Player, 3, 5));
        world.spawn_projectile(Projectile::with_speed(IVec2::new(10, 10), Owner::Turret, 3, 5));
        assert_eq!(world.player_projectiles.len(), 1);
        assert_eq!(world.turret_projectiles.len(), 1);
    }
}
