//! Render snapshot
//!
//! Read-only description of a frame for the renderer: shapes with color tags
//! plus HUD counters. Nothing here feeds back into the simulation.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::projectile::Owner;
use super::state::{EndReason, World};
use crate::Rect;

/// Palette used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorTag {
    White,
    Red,
    Green,
    Blue,
    Yellow,
}

impl ColorTag {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            ColorTag::White => [255, 255, 255],
            ColorTag::Red => [255, 0, 0],
            ColorTag::Green => [0, 255, 0],
            ColorTag::Blue => [0, 0, 255],
            ColorTag::Yellow => [255, 255, 0],
        }
    }
}

/// Filled circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleShape {
    pub center: IVec2,
    pub radius: i32,
    pub color: ColorTag,
}

/// Filled rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectShape {
    pub rect: Rect,
    pub color: ColorTag,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub frame: u64,
    pub width: i32,
    pub height: i32,
    pub danger_zone: RectShape,
    pub player: CircleShape,
    /// Population order
    pub turrets: Vec<RectShape>,
    /// Turret projectiles first, then player projectiles
    pub projectiles: Vec<CircleShape>,
    pub score: u64,
    pub level: u32,
    pub eliminations: u32,
    pub pending_bonus: u32,
    pub running: bool,
    pub end_reason: Option<EndReason>,
}

impl RenderSnapshot {
    pub fn capture(world: &World) -> Self {
        let config = &world.config;
        let projectiles = world
            .turret_projectiles
            .iter()
            .chain(&world.player_projectiles)
            .map(|p| CircleShape {
                center: p.pos,
                radius: p.radius,
                color: match p.owner {
                    Owner::Turret => ColorTag::Red,
                    Owner::Player => ColorTag::Green,
                },
            })
            .collect();

        Self {
            frame: world.frame,
            width: config.screen_width,
            height: config.screen_height,
            danger_zone: RectShape {
                rect: Rect::new(0, 0, config.danger_zone_width, config.screen_height),
                color: ColorTag::Yellow,
            },
            player: CircleShape {
                center: world.player.pos,
                radius: world.player.radius,
                color: ColorTag::Blue,
            },
            turrets: world
                .turrets
                .iter()
                .map(|t| RectShape {
                    rect: t.hitbox(),
                    color: ColorTag::Red,
                })
                .collect(),
            projectiles,
            score: world.score(),
            level: world.level(),
            eliminations: world.eliminations(),
            pending_bonus: world.ledger.pending(),
            running: world.running,
            end_reason: world.end_reason,
        }
    }

    /// HUD text, top to bottom
    pub fn hud_lines(&self) -> [String; 3] {
        [
            format!("Score: {}", self.score),
            format!("Level: {}", self.level),
            format!("Guns Eliminated: {}", self.eliminations),
        ]
    }
}
