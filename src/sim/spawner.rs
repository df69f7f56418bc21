//! Enemy spawning and recycling
//!
//! Enemies enter above the visible field in one of five lanes and are
//! recycled once they fall past the bottom bound. The population is topped
//! back up to the target every tick.

use rand::Rng;

use super::state::Enemy;
use crate::consts::*;

/// Lane index -> x coordinate
#[inline]
pub fn lane_x(lane: u32) -> f32 {
    lane as f32 * LANE_WIDTH
}

/// Create one enemy at a random lane and a whole-unit height in (-SPAWN_DEPTH, 0]
pub fn spawn_enemy(rng: &mut impl Rng) -> Enemy {
    // floor(r * 180 / 40) over r in [0, 1) covers lanes 0..=4
    let lane = rng.random_range(0..LANE_COUNT);
    let depth = rng.random_range(0..SPAWN_DEPTH);
    Enemy::new(lane_x(lane), -(depth as f32))
}

/// Retire enemies below the bottom bound, then refill to `target`.
/// Returns the number of enemies spawned.
pub fn refresh(enemies: &mut Vec<Enemy>, target: usize, rng: &mut impl Rng) -> usize {
    enemies.retain(|e| e.rect.top() <= ENEMY_DESPAWN_Y);

    let missing = target.saturating_sub(enemies.len());
    enemies.extend((0..missing).map(|_| spawn_enemy(rng)));
    if missing > 0 {
        log::trace!("Spawned {} enemies", missing);
    }
    missing
}
