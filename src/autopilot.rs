//! Idle/demo mode - a simple AI that plays the game
//!
//! Used by the headless driver and handy for soak tests. It only reads the
//! world and produces a [`StepInput`]; it never touches simulation state.

use crate::sim::{StepInput, World};

/// Extra vertical clearance the AI keeps from incoming projectiles
const DODGE_MARGIN: i32 = 10;
/// How far ahead (in frames) an incoming projectile counts as a threat
const THREAT_HORIZON: i32 = 40;

/// Pick this frame's input for `world`
pub fn choose_input(world: &World) -> StepInput {
    let player = &world.player;
    let clearance = player.radius + world.config.projectile_radius + DODGE_MARGIN;

    // Most urgent threat: the incoming projectile in our lane that arrives first
    let threat = world
        .turret_projectiles
        .iter()
        .filter(|p| p.pos.x >= player.pos.x - player.radius)
        .filter(|p| (p.pos.y - player.pos.y).abs() < clearance)
        .filter_map(|p| {
            let frames = (p.pos.x - player.pos.x) / p.vel_x.abs().max(1);
            (frames <= THREAT_HORIZON).then_some((frames, p.pos.y))
        })
        .min_by_key(|&(frames, _)| frames);

    let mut input = StepInput {
        fire: true,
        ..Default::default()
    };

    if let Some((_, threat_y)) = threat {
        // Step away from it, toward the roomier side when it is dead center
        let room_above = player.pos.y - player.radius;
        let room_below = world.config.screen_height - player.radius - player.pos.y;
        let go_up = if threat_y == player.pos.y {
            room_above > room_below
        } else {
            threat_y > player.pos.y
        };
        if go_up && room_above > 0 {
            input.move_up = true;
        } else if room_below > 0 {
            input.move_down = true;
        } else {
            input.move_up = true;
        }
        return input;
    }

    // No threat: line up with the nearest turret muzzle
    if let Some(target) = world
        .turrets
        .iter()
        .map(|t| t.muzzle().y)
        .min_by_key(|y| (y - player.pos.y).abs())
    {
        let speed = world.config.player_speed;
        if target < player.pos.y - speed {
            input.move_up = true;
        } else if target > player.pos.y + speed {
            input.move_down = true;
        }
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::{Owner, Projectile};
    use glam::IVec2;

    #[test]
    fn test_always_fires() {
        let world = World::new(Config::with_seed(1));
        assert!(choose_input(&world).fire);
    }

    #[test]
    fn test_dodges_incoming() {
        let mut world = World::new(Config::with_seed(2));
        world
            .turret_projectiles
            .push(Projectile::with_speed(IVec2::new(150, 310), Owner::Turret, 5, 5));
        let input = choose_input(&world);
        assert!(input.move_up);
        assert!(!input.move_down);
    }

    #[test]
    fn test_ignores_passed_projectiles() {
        let mut world = World::new(Config::with_seed(3));
        for t in &mut world.turrets {
            t.pos.y = 270;
        }
        world
            .turret_projectiles
            .push(Projectile::with_speed(IVec2::new(10, 300), Owner::Turret, 5, 5));
        let input = choose_input(&world);
        assert!(!input.move_up && !input.move_down);
    }
}
