//! Weighted random spawning
//!
//! One uniform draw per decision, mapped through fixed cut-offs:
//! enemies at 30/30/10/30 across Angular1/Angular2/HiveWhale/LuckyFish,
//! explosions split evenly between smoke and fire. Drones never roll here -
//! they only hatch from destroyed hive whales.

use glam::Vec2;
use rand::Rng;

use super::enemy::{Enemy, EnemyKind};
use super::entity::{Explosion, ExplosionKind};

/// Roll a fresh enemy at the right edge of the arena
pub fn random_enemy<R: Rng + ?Sized>(rng: &mut R) -> Enemy {
    let roll: f32 = rng.random();
    let kind = if roll < 0.3 {
        EnemyKind::Angular1
    } else if roll < 0.6 {
        EnemyKind::Angular2
    } else if roll < 0.7 {
        EnemyKind::HiveWhale
    } else {
        EnemyKind::LuckyFish
    };
    Enemy::spawn(kind, rng)
}

/// Roll an explosion flavor, centered on `at`
pub fn random_explosion<R: Rng + ?Sized>(rng: &mut R, at: Vec2) -> Explosion {
    let kind = if rng.random::<f32>() < 0.5 {
        ExplosionKind::Smoke
    } else {
        ExplosionKind::Fire
    };
    Explosion::new(kind, at)
}
