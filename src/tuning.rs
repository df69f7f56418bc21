//! Data-driven game balance
//!
//! Every field has a default taken from `consts`, so a partial JSON object
//! (or none at all) yields a playable configuration.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::CollisionMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Enemy speed at the start of a run (units per tick)
    pub default_enemy_speed: f32,
    /// Enemy speed while the boost key is held
    pub fast_enemy_speed: f32,
    /// Population the spawner refills to every tick
    pub enemies_on_screen: usize,
    /// Health lost per overlapping enemy per tick
    pub contact_damage: i32,
    pub starting_health: i32,
    /// Exact scores at which the base enemy speed goes up by one
    pub speed_milestones: Vec<u64>,
    pub collision: CollisionMode,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            default_enemy_speed: DEFAULT_ENEMY_SPEED,
            fast_enemy_speed: FAST_ENEMY_SPEED,
            enemies_on_screen: ENEMIES_ON_SCREEN,
            contact_damage: CONTACT_DAMAGE,
            starting_health: STARTING_HEALTH,
            speed_milestones: SPEED_MILESTONES.to_vec(),
            collision: CollisionMode::default(),
        }
    }
}

impl Tuning {
    /// True if `score` is exactly one of the speed milestones
    pub fn is_milestone(&self, score: u64) -> bool {
        self.speed_milestones.contains(&score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.default_enemy_speed, 3.0);
        assert_eq!(t.fast_enemy_speed, 10.0);
        assert_eq!(t.enemies_on_screen, 8);
        assert_eq!(t.contact_damage, 10);
        assert_eq!(t.starting_health, 100);
        assert_eq!(t.collision, CollisionMode::Symmetric);
    }

    #[test]
    fn test_milestones_use_exact_equality() {
        let t = Tuning::default();
        assert!(t.is_milestone(1000));
        assert!(t.is_milestone(5000));
        assert!(!t.is_milestone(999));
        assert!(!t.is_milestone(1001));
        assert!(!t.is_milestone(6000));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let t: Tuning = serde_json::from_str(r#"{ "enemies_on_screen": 4 }"#).unwrap();
        assert_eq!(t.enemies_on_screen, 4);
        assert_eq!(t.default_enemy_speed, 3.0);
        assert_eq!(t.speed_milestones, vec![1000, 2000, 3000, 4000, 5000]);
    }
}
