//! Constant-velocity motion
//!
//! No bounds checks here; the spawner and the tick retire anything that
//! leaves the field.

use glam::Vec2;

use super::state::{Enemy, Projectile};

/// Move every enemy down by the shared speed
pub fn advance_enemies(enemies: &mut [Enemy], speed: f32) {
    let delta = Vec2::new(0.0, speed);
    for enemy in enemies {
        enemy.rect.translate(delta);
    }
}

/// Move the projectile up by `step`, if one is in flight
pub fn advance_projectile(projectile: Option<&mut Projectile>, step: f32) {
    if let Some(p) = projectile {
        p.rect.translate(Vec2::new(0.0, -step));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemies_share_speed() {
        let mut enemies = vec![Enemy::new(0.0, -10.0), Enemy::new(40.0, 200.0)];
        advance_enemies(&mut enemies, 3.0);
        assert_eq!(enemies[0].rect.top(), -7.0);
        assert_eq!(enemies[1].rect.top(), 203.0);
        assert_eq!(enemies[1].rect.left(), 40.0);
    }

    #[test]
    fn test_projectile_moves_up() {
        let mut p = Projectile::new(Vec2::new(100.0, 464.0));
        advance_projectile(Some(&mut p), 2.0);
        assert_eq!(p.rect.pos, Vec2::new(100.0, 462.0));
    }

    #[test]
    fn test_no_projectile_is_noop() {
        advance_projectile(None, 2.0);
    }
}
