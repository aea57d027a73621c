//! Session state and core simulation types
//!
//! Everything a renderer needs to draw a frame, and everything [`tick`] needs
//! to advance one, lives on [`SessionState`]. The state is serializable and
//! carries its own seeded RNG, so a session replayed from the same seed and
//! input sequence is bit-identical.
//!
//! [`tick`]: super::tick::tick

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::entity::{Explosion, Particle};
use super::player::Player;
use super::spawn;
use crate::consts::*;

/// One parallax backdrop layer: a pure scroll offset over a tiling image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    /// Horizontal offset of the image's left edge; wraps at -WIDTH
    pub offset_x: f32,
    /// Fraction of the world scroll speed this layer moves at
    pub speed_modifier: f32,
}

impl Layer {
    /// Source image width shared by all backdrop layers
    pub const WIDTH: f32 = 1768.0;

    pub fn new(speed_modifier: f32) -> Self {
        Self {
            offset_x: 0.0,
            speed_modifier,
        }
    }

    fn advance(&mut self) {
        self.offset_x -= WORLD_SCROLL_SPEED * self.speed_modifier;
        if self.offset_x < -Self::WIDTH {
            self.offset_x = 0.0;
        }
    }
}

/// Scroll state for the four parallax layers
///
/// The renderer draws layers 0-2 behind the entities and layer 3 (the
/// foreground) on top; the simulation only advances the offsets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backdrop {
    pub layers: [Layer; 4],
}

impl Default for Backdrop {
    fn default() -> Self {
        Self {
            layers: [
                Layer::new(0.2),
                Layer::new(0.4),
                Layer::new(1.0),
                Layer::new(1.5),
            ],
        }
    }
}

impl Backdrop {
    pub fn advance(&mut self) {
        for layer in &mut self.layers {
            layer.advance();
        }
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state, advanced only by spawning decisions
    pub rng: Pcg32,
    /// May go negative: ramming enemies costs points
    pub score: i64,
    /// Fractional while powered up; capped only by the periodic regen rule
    pub ammo: f32,
    pub ammo_timer_ms: f32,
    /// Frozen once `game_over` latches
    pub game_time_ms: f32,
    /// One-way latch; the tick keeps running afterwards but score changes
    /// and enemy spawns are suppressed
    pub game_over: bool,
    pub enemy_timer_ms: f32,
    /// Hitbox overlay flag for the renderer
    pub debug: bool,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    pub explosions: Vec<Explosion>,
    pub backdrop: Backdrop,
}

impl SessionState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        log::info!("New session, seed {seed}");
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            ammo: START_AMMO,
            ammo_timer_ms: 0.0,
            game_time_ms: 0.0,
            game_over: false,
            enemy_timer_ms: 0.0,
            debug: false,
            player: Player::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            explosions: Vec::new(),
            backdrop: Backdrop::default(),
        }
    }

    /// Whether the session beat the winning score; only used to pick the
    /// end-of-session message, never to end the session early
    pub fn victory(&self) -> bool {
        self.score > WINNING_SCORE
    }

    /// Scatter `count` debris particles from `center`
    pub fn spawn_debris(&mut self, center: Vec2, count: i64) {
        for _ in 0..count.max(0) {
            let particle = Particle::new(&mut self.rng, center);
            self.particles.push(particle);
        }
    }

    /// Add a randomly flavored explosion centered on `at`
    pub fn spawn_explosion(&mut self, at: Vec2) {
        let explosion = spawn::random_explosion(&mut self.rng, at);
        self.explosions.push(explosion);
    }
}
