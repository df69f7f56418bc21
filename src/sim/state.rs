//! Game session and entity types
//!
//! All mutable state of a running game lives in `GameSession`. There is no
//! global instance: frontends construct one and own it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{self, CollisionMode};
use super::rect::{Color, Rect};
use crate::consts::*;
use crate::tuning::Tuning;

/// Play-field background
pub const BACKGROUND_COLOR: Color = Color::rgb(150, 100, 40);
/// Background while an enemy is touching the ship
pub const UNDER_ATTACK_COLOR: Color = Color::rgb(150, 0, 40);

/// The closed set of entity kinds. Size and color are properties of the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Ship,
    Enemy,
    Projectile,
}

impl EntityKind {
    pub fn size(self) -> Vec2 {
        match self {
            EntityKind::Ship => Vec2::new(SHIP_WIDTH, SHIP_HEIGHT),
            EntityKind::Enemy => Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            EntityKind::Projectile => Vec2::splat(PROJECTILE_SIZE),
        }
    }

    pub fn color(self) -> Color {
        match self {
            EntityKind::Ship => Color::rgb(0, 200, 200),
            EntityKind::Enemy => Color::rgb(100, 0, 220),
            EntityKind::Projectile => Color::rgb(198, 200, 0),
        }
    }

    /// Build a rectangle of this kind at `pos`
    pub fn rect_at(self, pos: Vec2) -> Rect {
        Rect::new(pos, self.size(), self.color())
    }
}

/// Horizontal move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// The player's ship. Only x changes; y stays on the bottom row.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub rect: Rect,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            rect: EntityKind::Ship.rect_at(Vec2::new(SHIP_START_X, SHIP_Y)),
        }
    }
}

impl Ship {
    /// Rightmost x the ship may occupy
    pub fn max_x() -> f32 {
        FIELD_WIDTH - SHIP_WIDTH
    }

    /// Step one lane-width in `dir`, clamped to the play-field
    pub fn step(&mut self, dir: Direction) {
        let delta = match dir {
            Direction::Left => -SHIP_STEP,
            Direction::Right => SHIP_STEP,
        };
        self.rect.pos.x = (self.rect.pos.x + delta).clamp(0.0, Self::max_x());
    }

    /// Where a projectile fired now would appear
    pub fn nose(&self) -> Vec2 {
        self.rect.pos + Vec2::new(PROJECTILE_OFFSET_X, PROJECTILE_OFFSET_Y)
    }
}

/// A descending enemy
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
}

impl Enemy {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: EntityKind::Enemy.rect_at(Vec2::new(x, y)),
        }
    }
}

/// The single player projectile
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub rect: Rect,
}

impl Projectile {
    pub fn new(pos: Vec2) -> Self {
        Self {
            rect: EntityKind::Projectile.rect_at(pos),
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    /// Tick scheduling is suspended
    Paused,
}

/// Complete mutable state of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub health: i32,
    pub score: u64,
    /// Enemy speed without boost; ratcheted at milestones
    pub base_speed: f32,
    /// Boost key currently held
    pub boost: bool,
    /// An enemy overlapped the ship during the last contact check
    pub under_attack: bool,
    pub phase: GamePhase,
    pub ship: Ship,
    /// Live enemies; order only matters for iteration
    pub enemies: Vec<Enemy>,
    /// At most one projectile in flight
    pub projectile: Option<Projectile>,
    /// Simulation tick counter (survives resets)
    pub time_ticks: u64,
    /// Number of game-over resets so far
    pub resets: u32,
}

impl GameSession {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            health: tuning.starting_health,
            score: 0,
            base_speed: tuning.default_enemy_speed,
            boost: false,
            under_attack: false,
            phase: GamePhase::Playing,
            ship: Ship::default(),
            enemies: Vec::with_capacity(tuning.enemies_on_screen),
            projectile: None,
            time_ticks: 0,
            resets: 0,
            tuning,
        }
    }

    /// Speed applied to every enemy this tick
    pub fn enemy_speed(&self) -> f32 {
        if self.boost {
            self.tuning.fast_enemy_speed
        } else {
            self.base_speed
        }
    }

    /// Player has a projectile in flight
    #[inline]
    pub fn is_shooting(&self) -> bool {
        self.projectile.is_some()
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    #[inline]
    pub fn collision_mode(&self) -> CollisionMode {
        self.tuning.collision
    }

    pub fn background_color(&self) -> Color {
        if self.under_attack {
            UNDER_ATTACK_COLOR
        } else {
            BACKGROUND_COLOR
        }
    }

    /// Flip between Playing and Paused
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
        };
        log::debug!("Phase -> {:?}", self.phase);
    }

    /// Move the ship one step; ignored while paused
    pub fn move_ship(&mut self, dir: Direction) {
        if self.is_paused() {
            return;
        }
        self.ship.step(dir);
    }

    /// Fire from the ship's nose. Returns false if a projectile is already
    /// in flight or the game is paused.
    pub fn fire(&mut self) -> bool {
        if self.is_paused() || self.is_shooting() {
            return false;
        }
        self.projectile = Some(Projectile::new(self.ship.nose()));
        true
    }

    pub fn set_boost(&mut self, held: bool) {
        self.boost = held;
    }

    /// Damage the ship once per overlapping enemy. Returns the contact count.
    pub fn apply_ship_contacts(&mut self) -> usize {
        let contacts = collision::ship_contacts(&self.enemies, &self.ship, self.collision_mode());
        self.under_attack = contacts > 0;
        if contacts > 0 {
            self.health -= self.tuning.contact_damage * contacts as i32;
            log::trace!("{} enemies touching ship, health {}", contacts, self.health);
        }
        contacts
    }

    /// Per-tick survival point, plus the milestone speed bump
    pub fn award_survival(&mut self) {
        self.score += SURVIVAL_SCORE;
        if self.tuning.is_milestone(self.score) {
            self.base_speed += 1.0;
            log::info!("Score {} reached, enemy speed now {}", self.score, self.base_speed);
        }
    }

    /// Reset in place if health is depleted. Returns true on reset.
    pub fn check_game_over(&mut self) -> bool {
        if self.health > 0 {
            return false;
        }
        log::info!(
            "Game over at score {} (seed {}, tick {})",
            self.score,
            self.seed,
            self.time_ticks
        );
        self.reset();
        true
    }

    /// Restore the start-of-game state. The RNG, tick counter and boost hold
    /// carry over.
    pub fn reset(&mut self) {
        self.health = self.tuning.starting_health;
        self.score = 0;
        self.base_speed = self.tuning.default_enemy_speed;
        self.enemies.clear();
        self.projectile = None;
        self.ship = Ship::default();
        self.resets += 1;
    }

    /// Drop the projectile once it has left the top of the field
    pub fn retire_projectile(&mut self) {
        if self.projectile.as_ref().is_some_and(|p| p.rect.top() < 0.0) {
            self.projectile = None;
        }
    }

    /// Remove the enemy struck by the projectile, if any. Returns true on hit.
    pub fn resolve_projectile_hit(&mut self) -> bool {
        let Some(projectile) = &self.projectile else {
            return false;
        };
        let mode = self.collision_mode();
        let Some(index) = collision::projectile_hit(projectile, &self.enemies, mode) else {
            return false;
        };
        let enemy = self.enemies.remove(index);
        self.projectile = None;
        self.score += KILL_SCORE;
        log::debug!("Enemy destroyed at {:?}, score {}", enemy.rect.pos, self.score);
        true
    }

    /// Every live entity with its kind, in draw order (enemies, ship, projectile)
    pub fn entities(&self) -> impl Iterator<Item = (EntityKind, &Rect)> {
        self.enemies
            .iter()
            .map(|e| (EntityKind::Enemy, &e.rect))
            .chain(std::iter::once((EntityKind::Ship, &self.ship.rect)))
            .chain(self.projectile.iter().map(|p| (EntityKind::Projectile, &p.rect)))
    }
}
