//! Turret Dodge headless driver
//!
//! Runs one game with the demo AI at the controls and prints the final
//! snapshot as JSON. Usage: `turret-dodge [config.json]`

use turret_dodge::Config;
use turret_dodge::autopilot;
use turret_dodge::sim::{RenderSnapshot, World, step};

/// Stop the demo after two minutes of game time at 60 fps
const MAX_FRAMES: u64 = 60 * 120;

fn main() {
    env_logger::init();
    log::info!("Turret Dodge (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match Config::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    let snapshot = run(config);

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to serialize snapshot: {}", e);
            std::process::exit(1);
        }
    }
}

/// Drive a world until the run ends or the frame cap is reached
fn run(config: Config) -> RenderSnapshot {
    let frame_rate = u64::from(config.frame_rate.max(1));
    let mut world = World::new(config);
    let mut snapshot = RenderSnapshot::capture(&world);

    while snapshot.running && snapshot.frame < MAX_FRAMES {
        let input = autopilot::choose_input(&world);
        snapshot = step(&mut world, &input);

        if snapshot.frame % frame_rate == 0 {
            let [score, level, guns] = snapshot.hud_lines();
            log::info!("t={}s  {}  {}  {}", snapshot.frame / frame_rate, score, level, guns);
        }
    }

    if snapshot.running {
        log::info!("Frame cap reached, stopping demo");
    }
    snapshot
}
