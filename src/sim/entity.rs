//! Short-lived entities: projectiles, debris particles and explosions
//!
//! Each entity advances itself once per tick and flags itself for deletion;
//! nothing here removes an entity from a collection - the engine compacts the
//! lists at the end of the tick. A deletion flag, once set, stays set.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// A player torpedo travelling rightward at a fixed speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Remove on next compaction (monotonic)
    pub deleted: bool,
}

impl Projectile {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            deleted: false,
        }
    }

    /// Advance one tick; fizzle out past 80% of the arena width
    pub fn tick(&mut self) {
        self.pos.x += PROJECTILE_SPEED;
        if self.pos.x > ARENA_WIDTH * PROJECTILE_RANGE {
            self.deleted = true;
        }
    }

    pub fn hitbox(&self) -> Rect {
        Rect::from_pos(self.pos, PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
    }
}

/// A spinning cog knocked loose from a damaged enemy
///
/// Purely cosmetic: debris never collides with anything, it just tumbles
/// under gravity, bounces off the seabed at most twice and drifts left with
/// the world scroll until it leaves the arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Current rotation for the renderer
    pub angle: f32,
    pub angular_vel: f32,
    /// Rendered size; also the off-screen margin on the left edge
    pub size: f32,
    /// Random cell in the 3x3 cog sprite sheet
    pub frame_x: u32,
    pub frame_y: u32,
    /// Bounce height above the bottom edge, randomized per particle
    pub ground_offset: f32,
    pub bounced: u32,
    pub deleted: bool,
}

impl Particle {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::new(rng.random_range(-3.0..3.0), rng.random_range(-15.0..0.0)),
            angle: 0.0,
            angular_vel: rng.random_range(-0.1..0.1),
            size: PARTICLE_SPRITE_SIZE * rng.random_range(0.5..1.0),
            frame_x: rng.random_range(0..3),
            frame_y: rng.random_range(0..3),
            ground_offset: rng.random_range(60.0..140.0),
            bounced: 0,
            deleted: false,
        }
    }

    /// Advance one tick: spin, fall, drift left, bounce off the seabed
    pub fn tick(&mut self) {
        self.angle += self.angular_vel;
        self.vel.y += PARTICLE_GRAVITY;
        self.pos.x += self.vel.x - WORLD_SCROLL_SPEED;
        self.pos.y += self.vel.y;

        if self.pos.y > ARENA_HEIGHT - self.ground_offset && self.bounced < PARTICLE_MAX_BOUNCES {
            self.bounced += 1;
            self.vel.y *= -0.5;
        }

        if self.pos.y > ARENA_HEIGHT || self.pos.x < -self.size {
            self.deleted = true;
        }
    }
}

/// Explosion flavors; picked at random when an enemy dies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionKind {
    Smoke,
    Fire,
}

/// A one-shot 9-frame explosion animation
///
/// Frames advance at a fixed 30 fps regardless of the tick rate, so the
/// animation accumulates delta time and steps whenever a full frame interval
/// has elapsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub kind: ExplosionKind,
    pub pos: Vec2,
    pub frame_x: u32,
    timer_ms: f32,
    pub deleted: bool,
}

impl Explosion {
    /// Frame interval in milliseconds (~33.3 ms at 30 fps)
    pub const FRAME_INTERVAL_MS: f32 = 1000.0 / EXPLOSION_FPS;

    /// Create an explosion centered on `at` (the frame is 200x200)
    pub fn new(kind: ExplosionKind, at: Vec2) -> Self {
        Self {
            kind,
            pos: at - Vec2::splat(EXPLOSION_SIZE * 0.5),
            frame_x: 0,
            timer_ms: 0.0,
            deleted: false,
        }
    }

    /// Advance one tick; done once the last frame (index 8) has played
    pub fn tick(&mut self, dt_ms: f32) {
        self.pos.x -= WORLD_SCROLL_SPEED;

        if self.timer_ms > Self::FRAME_INTERVAL_MS {
            self.frame_x += 1;
            self.timer_ms = 0.0;
        } else {
            self.timer_ms += dt_ms;
        }

        if self.frame_x > EXPLOSION_MAX_FRAME {
            self.deleted = true;
        }
    }
}
