//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod rect;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{CollisionMode, leading_edge_overlap, overlaps};
pub use rect::{Color, Rect};
pub use state::{
    BACKGROUND_COLOR, Direction, Enemy, EntityKind, GamePhase, GameSession, Projectile, Ship,
    UNDER_ATTACK_COLOR,
};
pub use tick::{TickInput, tick};
