//! Per-frame simulation step
//!
//! Advances the world by exactly one frame. Order is fixed:
//! fire → move → cooldown → turrets → cull → move projectiles → collisions →
//! drop spent projectiles → score ledger → difficulty → snapshot.

use super::collision;
use super::projectile::{Owner, Projectile};
use super::snapshot::RenderSnapshot;
use super::state::{EndReason, GameEvent, World};

/// Input intents for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepInput {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// Fire (ignored while the cooldown is running)
    pub fire: bool,
    /// Stop the run without advancing
    pub quit: bool,
}

/// Advance the world by one frame and describe the result.
///
/// A finished world is left untouched; its last snapshot is returned again.
pub fn step(world: &mut World, input: &StepInput) -> RenderSnapshot {
    if !world.running {
        log::warn!("step() called on a finished run (frame {})", world.frame);
        return RenderSnapshot::capture(world);
    }

    world.events.clear();

    if input.quit {
        world.end(EndReason::Quit);
        return RenderSnapshot::capture(world);
    }

    world.frame += 1;

    // Player fire, then movement and cooldown
    if input.fire && world.player.cooldown == 0 {
        let pos = world.player.muzzle();
        let shot = Projectile::fire(pos, Owner::Player, &world.config, &mut world.rng);
        world.spawn_projectile(shot);
        world.player.cooldown = world.config.player_cooldown_max;
        world.events.push(GameEvent::PlayerFired { pos });
    }

    world.player.apply_movement(
        input.move_up,
        input.move_down,
        input.move_left,
        input.move_right,
        &world.config,
    );

    if world.player.cooldown > 0 {
        world.player.cooldown -= 1;
    }

    // Turrets
    let level = world.level();
    for (index, turret) in world.turrets.iter_mut().enumerate() {
        if let Some(shot) = turret.update(level, &world.config, &mut world.rng) {
            world.events.push(GameEvent::TurretFired {
                turret: index,
                pos: shot.pos,
            });
            world.turret_projectiles.push(shot);
        }
    }

    // Cull before moving, so a projectile is checked once past the edge
    let width = world.config.screen_width;
    world.turret_projectiles.retain(|p| p.in_bounds(width));
    world.player_projectiles.retain(|p| p.in_bounds(width));
    for projectile in world
        .turret_projectiles
        .iter_mut()
        .chain(world.player_projectiles.iter_mut())
    {
        projectile.update();
    }

    // Collisions; the rest of the frame still runs after a hit
    let report = collision::resolve(world);
    if report.kills > 0 || report.near_misses > 0 {
        log::debug!(
            "Frame {}: {} kills, {} near misses",
            world.frame,
            report.kills,
            report.near_misses
        );
    }
    if report.player_hit {
        world.end(EndReason::Hit);
    }
    if !report.spent.is_empty() {
        let mut index = 0;
        world.player_projectiles.retain(|_| {
            let keep = !report.spent.contains(&index);
            index += 1;
            keep
        });
    }

    let committed = world.ledger.advance();
    if committed > 0 {
        world.events.push(GameEvent::BonusCommitted { points: committed });
    }

    if let Some(up) = world
        .difficulty
        .update(&mut world.turrets, &world.config, &mut world.rng)
    {
        log::debug!("Frame {}: population now {}", world.frame, up.population);
        world.events.push(GameEvent::LevelUp { level: up.level });
        if up.patrol_activated {
            world.events.push(GameEvent::PatrolActivated);
        }
    }

    RenderSnapshot::capture(world)
}
