//! Collision detection for axis-aligned rectangles
//!
//! Two tests are available. `overlaps` is the standard symmetric AABB check
//! and is what the game uses by default. `leading_edge_overlap` reproduces the
//! older corner-probe formula: it only checks whether `a`'s top-left or
//! top-right corner falls inside `b`, so it misses hits where `b` is narrower
//! than `a` or where `a`'s top edge sits above `b`.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{Enemy, Projectile, Ship};

/// Which overlap formula the simulation uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionMode {
    #[default]
    Symmetric,
    /// Corner-probe test, see `leading_edge_overlap`
    Legacy,
}

impl CollisionMode {
    #[inline]
    pub fn test(self, a: &Rect, b: &Rect) -> bool {
        match self {
            CollisionMode::Symmetric => overlaps(a, b),
            CollisionMode::Legacy => leading_edge_overlap(a, b),
        }
    }
}

/// Standard AABB intersection. Touching edges do not count.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Corner-probe test: `a`'s left or right edge strictly inside `b`'s horizontal
/// span, and `a`'s top edge inside `b`'s vertical span (far edge excluded).
pub fn leading_edge_overlap(a: &Rect, b: &Rect) -> bool {
    let top_inside = a.top() < b.bottom() && a.top() >= b.top();
    let left_inside = a.left() < b.right() && a.left() >= b.left();
    let right_inside = a.right() < b.right() && a.right() > b.left();
    top_inside && (left_inside || right_inside)
}

/// Number of enemies touching the ship this tick
pub fn ship_contacts(enemies: &[Enemy], ship: &Ship, mode: CollisionMode) -> usize {
    enemies
        .iter()
        .filter(|e| mode.test(&e.rect, &ship.rect))
        .count()
}

/// Index of the first enemy struck by the projectile, in iteration order
pub fn projectile_hit(
    projectile: &Projectile,
    enemies: &[Enemy],
    mode: CollisionMode,
) -> Option<usize> {
    enemies
        .iter()
        .position(|e| mode.test(&projectile.rect, &e.rect))
}
