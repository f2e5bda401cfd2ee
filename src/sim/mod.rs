//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `step` per frame, integer positions
//! - Seeded RNG only (owned by the `World`)
//! - Stable iteration order (population order for turrets, spawn order for projectiles)
//! - No rendering, input or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod projectile;
pub mod score;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod turret;

pub use collision::{CollisionReport, resolve};
pub use difficulty::{DifficultyController, LevelUp};
pub use projectile::{Owner, Projectile};
pub use score::ScoreLedger;
pub use snapshot::{CircleShape, ColorTag, RectShape, RenderSnapshot};
pub use state::{EndReason, GameEvent, Player, World};
pub use tick::{StepInput, step};
pub use turret::Turret;
