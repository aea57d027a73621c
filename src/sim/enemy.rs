//! Enemies and their per-variant parameter table
//!
//! All variants share one concrete [`Enemy`] type and one movement rule; what
//! differs between them is pure data (size, lives, score, speed range) plus a
//! [`Category`] tag that drives special collision responses. No dispatch, no
//! trait objects - just a static lookup keyed by [`EnemyKind`].

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Classification driving special collision responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Ordinary enemy: ramming it costs a point
    None,
    /// Grants the player a power-up on contact instead of a penalty
    Lucky,
    /// Releases drones when destroyed
    Hive,
    /// Hatched from a destroyed hive, spawns mid-arena
    Drone,
}

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Angular1,
    Angular2,
    LuckyFish,
    HiveWhale,
    Drone,
}

/// Fixed per-variant constants
#[derive(Debug, Clone, Copy)]
pub struct EnemyParams {
    pub width: f32,
    pub height: f32,
    pub lives: i32,
    pub score: i64,
    pub category: Category,
    /// Leftward drift range in px/tick (negative = leftward)
    pub speed_range: (f32, f32),
    /// Number of animation rows in the variant's sprite sheet
    pub sprite_rows: u32,
}

impl EnemyKind {
    pub const fn params(self) -> &'static EnemyParams {
        match self {
            EnemyKind::Angular1 => &EnemyParams {
                width: 228.0,
                height: 169.0,
                lives: 5,
                score: 5,
                category: Category::None,
                speed_range: (-2.0, -0.5),
                sprite_rows: 3,
            },
            EnemyKind::Angular2 => &EnemyParams {
                width: 213.0,
                height: 165.0,
                lives: 6,
                score: 6,
                category: Category::None,
                speed_range: (-2.0, -0.5),
                sprite_rows: 2,
            },
            EnemyKind::LuckyFish => &EnemyParams {
                width: 99.0,
                height: 95.0,
                lives: 5,
                score: 15,
                category: Category::Lucky,
                speed_range: (-2.0, -0.5),
                sprite_rows: 2,
            },
            EnemyKind::HiveWhale => &EnemyParams {
                width: 400.0,
                height: 227.0,
                lives: 20,
                score: 15,
                category: Category::Hive,
                speed_range: (-1.4, -0.2),
                sprite_rows: 1,
            },
            EnemyKind::Drone => &EnemyParams {
                width: 115.0,
                height: 95.0,
                lives: 3,
                score: 3,
                category: Category::Drone,
                speed_range: (-4.7, -0.5),
                sprite_rows: 2,
            },
        }
    }
}

/// A hostile fish drifting leftward through the arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    /// Own drift speed; world scroll is added on top each tick
    pub speed_x: f32,
    pub lives: i32,
    pub frame_x: u32,
    /// Animation row, fixed at spawn
    pub frame_y: u32,
    pub deleted: bool,
}

impl Enemy {
    /// Spawn just past the right edge at a random height within the band
    /// that keeps the sprite clear of the seabed
    pub fn spawn<R: Rng + ?Sized>(kind: EnemyKind, rng: &mut R) -> Self {
        let params = kind.params();
        let y = rng.random_range(0.0..(ARENA_HEIGHT * SPAWN_BAND - params.height));
        Self::at(kind, Vec2::new(ARENA_WIDTH, y), rng)
    }

    /// Hatch a drone near `origin` (a destroyed hive whale's top-left)
    pub fn hatch_drone<R: Rng + ?Sized>(rng: &mut R, origin: Vec2) -> Self {
        let params = EnemyKind::Drone.params();
        let pos = Vec2::new(
            origin.x + rng.random_range(0.0..params.width),
            origin.y + rng.random_range(0.0..params.height * 0.5),
        );
        Self::at(EnemyKind::Drone, pos, rng)
    }

    fn at<R: Rng + ?Sized>(kind: EnemyKind, pos: Vec2, rng: &mut R) -> Self {
        let params = kind.params();
        let (min, max) = params.speed_range;
        Self {
            kind,
            pos,
            speed_x: rng.random_range(min..max),
            lives: params.lives,
            frame_x: 0,
            frame_y: rng.random_range(0..params.sprite_rows),
            deleted: false,
        }
    }

    pub fn width(&self) -> f32 {
        self.kind.params().width
    }

    pub fn height(&self) -> f32 {
        self.kind.params().height
    }

    /// Points awarded for destroying this enemy
    pub fn score(&self) -> i64 {
        self.kind.params().score
    }

    pub fn category(&self) -> Category {
        self.kind.params().category
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width() * 0.5, self.height() * 0.5)
    }

    pub fn hitbox(&self) -> Rect {
        Rect::from_pos(self.pos, self.width(), self.height())
    }

    /// Advance one tick: drift left with the scroll, cycle the swim
    /// animation, and flag once fully off the left edge
    pub fn tick(&mut self) {
        self.pos.x += self.speed_x - WORLD_SCROLL_SPEED;

        if self.frame_x < SWIM_MAX_FRAME {
            self.frame_x += 1;
        } else {
            self.frame_x = 0;
        }

        if self.pos.x + self.width() < 0.0 {
            self.deleted = true;
        }
    }
}
