//! Invariants that must hold for every frame of any run

use proptest::prelude::*;
use turret_dodge::Config;
use turret_dodge::sim::{DifficultyController, GameEvent, StepInput, World, step};

fn decode_input(bits: u8) -> StepInput {
    StepInput {
        move_up: bits & 0b00001 != 0,
        move_down: bits & 0b00010 != 0,
        move_left: bits & 0b00100 != 0,
        move_right: bits & 0b01000 != 0,
        // Fire on most frames so kills actually happen
        fire: bits & 0b110000 != 0,
        quit: false,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn frame_invariants_hold(
        seed in any::<u64>(),
        start_mobile in any::<bool>(),
        inputs in prop::collection::vec(any::<u8>(), 1..400),
    ) {
        let config = Config::with_seed(seed);
        let max_patrol = config.turret_patrol_speeds.iter().map(|s| s.abs()).max().unwrap_or(0);
        let max_y = config.turret_max_y();
        let threshold = config.bonus_threshold;
        let per_level = config.eliminations_per_level;

        let mut world = World::new(config);
        if start_mobile {
            // Five kills banked at level 2: the first step reaches level 3
            world.difficulty = DifficultyController::from_parts(5, 2);
        }

        let mut last_score = 0;
        let mut last_population = world.turrets.len();
        let mut last_pending = world.ledger.pending();

        for bits in inputs {
            let snap = step(&mut world, &decode_input(bits));
            let killed = world
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::TurretDestroyed { .. }));

            prop_assert!(snap.pending_bonus <= threshold);
            prop_assert!(snap.score >= last_score);
            prop_assert!(snap.turrets.len() >= last_population);
            prop_assert!(
                snap.turrets.len() >= (snap.eliminations / per_level) as usize + 3
            );

            // The accumulator only drops on a kill, and a kill leaves it at 1 after the frame
            if snap.pending_bonus < last_pending {
                prop_assert!(killed);
            }
            if killed {
                prop_assert!(snap.pending_bonus <= 1);
            }

            for t in &world.turrets {
                prop_assert!(t.pos.y >= -max_patrol && t.pos.y <= max_y + max_patrol);
            }
            for p in world.turret_projectiles.iter().chain(&world.player_projectiles) {
                prop_assert!((3..=7).contains(&p.vel_x.abs()));
            }

            last_score = snap.score;
            last_population = snap.turrets.len();
            last_pending = snap.pending_bonus;
            if !snap.running {
                break;
            }
        }
    }

    #[test]
    fn turret_cadence_stays_in_range(seed in any::<u64>()) {
        let world = World::new(Config::with_seed(seed));
        for t in &world.turrets {
            prop_assert!((30..=90).contains(&t.fire_cadence));
            prop_assert!((0..=540).contains(&t.pos.y));
        }
    }
}
