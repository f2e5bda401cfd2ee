//! Collision detection and resolution
//!
//! All hit tests are axis-aligned box overlaps: the player and projectiles use
//! squares of side `2 * radius`, turrets their full rectangle. The resolve pass
//! runs in a fixed order because kills mutate turrets and the score ledger
//! mid-scan:
//! 1. Turret projectiles vs player (lethal), else near-miss bonus
//! 2. Player projectiles vs turrets, at most one turret per projectile

use super::projectile::Projectile;
use super::state::{GameEvent, Player, World};
use super::turret::Turret;
use crate::Rect;

/// Outcome of one resolve pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// At least one turret projectile overlapped the player
    pub player_hit: bool,
    /// Turret projectiles that scored a near miss this frame
    pub near_misses: u32,
    pub kills: u32,
    /// Indices into `World::player_projectiles` to drop once the scan is done
    pub spent: Vec<usize>,
}

/// Turret projectile overlaps the player's box
#[inline]
pub fn is_lethal(player_box: &Rect, projectile: &Projectile) -> bool {
    player_box.overlaps(&projectile.hitbox())
}

/// Projectile is level with the player (within two radii) and has not passed yet
#[inline]
pub fn is_near_miss(player: &Player, projectile: &Projectile) -> bool {
    (projectile.pos.y - player.pos.y).abs() < player.radius * 2 && projectile.pos.x < player.pos.x
}

/// First turret (in population order) the projectile overlaps
pub fn first_turret_hit(projectile: &Projectile, turrets: &[Turret]) -> Option<usize> {
    let hitbox = projectile.hitbox();
    turrets.iter().position(|t| hitbox.overlaps(&t.hitbox()))
}

/// Run the collision pass over the world.
///
/// Awards near-miss points, respawns destroyed turrets, records eliminations
/// and banks the pending bonus. Does not end the run or remove projectiles;
/// the caller applies `player_hit` and `spent`.
pub fn resolve(world: &mut World) -> CollisionReport {
    let mut report = CollisionReport::default();
    let player_box = world.player.hitbox();

    for projectile in &world.turret_projectiles {
        if is_lethal(&player_box, projectile) {
            report.player_hit = true;
            world.events.push(GameEvent::PlayerHit { pos: projectile.pos });
        } else if is_near_miss(&world.player, projectile) {
            report.near_misses += 1;
            world.ledger.award(world.config.near_miss_bonus);
            world.events.push(GameEvent::NearMiss { pos: projectile.pos });
        }
    }

    let level = world.level();
    for (index, projectile) in world.player_projectiles.iter().enumerate() {
        let Some(hit) = first_turret_hit(projectile, &world.turrets) else {
            continue;
        };

        report.spent.push(index);
        report.kills += 1;
        world.turrets[hit].respawn(level, &world.config, &mut world.rng);
        world.difficulty.record_elimination();
        let bonus = world.ledger.commit_on_kill();
        world.events.push(GameEvent::TurretDestroyed { turret: hit, bonus });
        log::debug!(
            "Turret {} destroyed (bonus {}), respawned at y={}",
            hit,
            bonus,
            world.turrets[hit].pos.y
        );
    }

    report
}
