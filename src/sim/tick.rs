//! Fixed-order simulation tick
//!
//! One call advances the game by exactly one frame. The order matters:
//! contacts are judged against last frame's positions, and a projectile
//! that left the field last frame is retired before it can hit anything.

use super::motion;
use super::spawner;
use super::state::{Direction, GameSession};
use crate::consts::PROJECTILE_STEP;

/// Input gathered since the previous tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Ship moves, in arrival order
    pub moves: Vec<Direction>,
    /// Boost key went down (`Some(true)`) or up (`Some(false)`)
    pub boost: Option<bool>,
    /// Fire was pressed
    pub fire: bool,
}

/// Advance the session by one tick. Does nothing while paused; the caller is
/// expected not to schedule ticks then.
pub fn tick(session: &mut GameSession, input: &TickInput) {
    if session.is_paused() {
        return;
    }
    session.time_ticks += 1;

    for &dir in &input.moves {
        session.move_ship(dir);
    }
    if let Some(held) = input.boost {
        session.set_boost(held);
    }

    // Contacts, survival score, milestones, game over
    session.apply_ship_contacts();
    session.award_survival();
    session.check_game_over();

    let target = session.tuning.enemies_on_screen;
    spawner::refresh(&mut session.enemies, target, &mut session.rng);

    session.retire_projectile();

    let speed = session.enemy_speed();
    motion::advance_enemies(&mut session.enemies, speed);

    motion::advance_projectile(session.projectile.as_mut(), PROJECTILE_STEP);
    session.resolve_projectile_hit();

    if input.fire {
        session.fire();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Enemy, GamePhase, Projectile, Ship};
    use glam::Vec2;

    #[test]
    fn test_tick_populates_field() {
        let mut s = GameSession::new(12345);
        tick(&mut s, &TickInput::default());
        assert_eq!(s.enemies.len(), 8);
        assert_eq!(s.score, 1);
        assert_eq!(s.time_ticks, 1);
        // Fresh enemies have already moved once
        assert!(s.enemies.iter().all(|e| e.rect.top() <= 3.0));
    }

    #[test]
    fn test_population_holds_across_ticks() {
        let mut s = GameSession::new(7);
        for _ in 0..400 {
            tick(&mut s, &TickInput::default());
            assert_eq!(s.enemies.len(), 8);
            assert!(s.health > 0);
        }
    }

    #[test]
    fn test_paused_tick_is_noop() {
        let mut s = GameSession::new(1);
        s.phase = GamePhase::Paused;
        tick(&mut s, &TickInput { fire: true, ..Default::default() });
        assert_eq!(s.time_ticks, 0);
        assert_eq!(s.score, 0);
        assert!(s.enemies.is_empty());
        assert!(!s.is_shooting());
    }

    #[test]
    fn test_enemy_reaching_ship_deals_damage() {
        let mut s = GameSession::new(1);
        s.enemies.push(Enemy::new(80.0, 440.0));
        // First tick: the enemy's bottom edge only touches the ship's top edge.
        // Touching is not overlap under either collision mode, so the hit
        // lands once the enemy has moved into the ship.
        tick(&mut s, &TickInput::default());
        assert_eq!(s.health, 100);
        assert!(!s.under_attack);
        // It has since moved into the ship
        tick(&mut s, &TickInput::default());
        assert_eq!(s.health, 90);
        assert!(s.under_attack);
    }

    #[test]
    fn test_contact_counts_each_tick() {
        let mut s = GameSession::new(1);
        s.enemies.push(Enemy::new(80.0, 450.0));
        tick(&mut s, &TickInput::default());
        tick(&mut s, &TickInput::default());
        assert_eq!(s.health, 80);
    }

    #[test]
    fn test_depleted_health_resets_same_tick() {
        let mut s = GameSession::new(1);
        s.health = 10;
        s.score = 500;
        s.base_speed = 6.0;
        s.enemies.push(Enemy::new(80.0, 450.0));
        s.projectile = Some(Projectile::new(Vec2::new(0.0, 300.0)));
        s.ship.step(Direction::Left);
        tick(&mut s, &TickInput::default());
        assert_eq!(s.health, 100);
        assert_eq!(s.resets, 1);
        assert_eq!(s.base_speed, 3.0);
        assert!(!s.is_shooting());
        assert_eq!(s.ship, Ship::default());
        // The spawner refilled the cleared field with fresh enemies
        assert_eq!(s.enemies.len(), 8);
        assert!(s.enemies.iter().all(|e| e.rect.top() <= 3.0));
        assert_eq!(s.score, 0);
    }

    #[test]
    fn test_score_milestone_via_tick() {
        let mut s = GameSession::new(1);
        s.score = 999;
        tick(&mut s, &TickInput::default());
        assert_eq!(s.score, 1000);
        assert_eq!(s.base_speed, 4.0);
        let y = s.enemies[0].rect.top();
        tick(&mut s, &TickInput::default());
        assert_eq!(s.base_speed, 4.0);
        assert_eq!(s.enemies[0].rect.top(), y + 4.0);
    }

    #[test]
    fn test_fire_spawns_after_motion() {
        let mut s = GameSession::new(1);
        tick(&mut s, &TickInput { fire: true, ..Default::default() });
        let p = s.projectile.as_ref().unwrap();
        assert_eq!(p.rect.pos, Vec2::new(100.0, 464.0));

        tick(&mut s, &TickInput::default());
        assert_eq!(s.projectile.as_ref().unwrap().rect.top(), 462.0);
    }

    #[test]
    fn test_projectile_leaves_top_and_is_retired() {
        let mut s = GameSession::new(1);
        s.tuning.enemies_on_screen = 0;
        s.projectile = Some(Projectile::new(Vec2::new(0.0, 1.0)));
        tick(&mut s, &TickInput::default());
        // Moved to -1 this tick, retired at the start of the next
        assert_eq!(s.projectile.as_ref().unwrap().rect.top(), -1.0);
        tick(&mut s, &TickInput::default());
        assert!(!s.is_shooting());
    }

    #[test]
    fn test_projectile_kills_enemy_in_tick() {
        let mut s = GameSession::new(1);
        // Fill the field first so the spawner does not add anything new
        tick(&mut s, &TickInput::default());
        s.enemies[0] = Enemy::new(160.0, 200.0);
        s.projectile = Some(Projectile::new(Vec2::new(170.0, 226.0)));
        let score = s.score;
        tick(&mut s, &TickInput::default());
        // enemy 203..223, projectile 224..228 -> miss
        assert!(s.is_shooting());
        tick(&mut s, &TickInput::default());
        // enemy 206..226, projectile 222..226 -> hit
        assert!(!s.is_shooting());
        assert_eq!(s.score, score + 3);
        assert_eq!(s.enemies.len(), 7);
    }

    #[test]
    fn test_moves_apply_in_order() {
        let mut s = GameSession::new(1);
        s.ship.rect.pos.x = 0.0;
        let input = TickInput {
            moves: vec![Direction::Left, Direction::Right],
            ..Default::default()
        };
        tick(&mut s, &input);
        assert_eq!(s.ship.rect.pos.x, 20.0);
    }

    #[test]
    fn test_boost_edges() {
        let mut s = GameSession::new(1);
        tick(&mut s, &TickInput { boost: Some(true), ..Default::default() });
        assert_eq!(s.enemy_speed(), 10.0);
        tick(&mut s, &TickInput::default());
        assert!(s.boost);
        tick(&mut s, &TickInput { boost: Some(false), ..Default::default() });
        assert_eq!(s.enemy_speed(), 3.0);
    }

    #[test]
    fn test_determinism() {
        let mut s1 = GameSession::new(99999);
        let mut s2 = GameSession::new(99999);
        let inputs = [
            TickInput { moves: vec![Direction::Left], ..Default::default() },
            TickInput { fire: true, ..Default::default() },
            TickInput { boost: Some(true), ..Default::default() },
            TickInput::default(),
        ];
        for _ in 0..50 {
            for input in &inputs {
                tick(&mut s1, input);
                tick(&mut s2, input);
            }
        }
        assert_eq!(s1.score, s2.score);
        assert_eq!(s1.health, s2.health);
        assert_eq!(s1.enemies, s2.enemies);
        assert_eq!(s1.projectile, s2.projectile);
    }
}
