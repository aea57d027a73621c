//! Reef Raider - a side-scrolling underwater arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session state)
//! - `settings`: Host/demo preferences
//!
//! Rendering and raw input devices live outside this crate: a renderer reads
//! entity positions, sizes and animation frames straight from the simulation
//! state, and an input source feeds discrete commands into
//! [`sim::CommandQueue`]. The simulation itself never touches a wall clock or
//! a drawing surface.

pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Arena dimensions (logical pixels)
    pub const ARENA_WIDTH: f32 = 700.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// World scroll speed, applied to everything that drifts with the water
    pub const WORLD_SCROLL_SPEED: f32 = 1.0;

    /// Player defaults
    pub const PLAYER_START: Vec2 = Vec2::new(20.0, 100.0);
    pub const PLAYER_WIDTH: f32 = 120.0;
    pub const PLAYER_HEIGHT: f32 = 190.0;
    pub const PLAYER_MAX_SPEED: f32 = 2.0;
    /// Muzzle offsets relative to the player's top-left corner
    pub const MUZZLE_TOP: Vec2 = Vec2::new(80.0, 30.0);
    pub const MUZZLE_BOTTOM: Vec2 = Vec2::new(80.0, 175.0);
    /// Swim cycle length shared by the player and every enemy sprite sheet
    pub const SWIM_MAX_FRAME: u32 = 37;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 36.0;
    pub const PROJECTILE_HEIGHT: f32 = 10.0;
    pub const PROJECTILE_SPEED: f32 = 5.0;
    /// Projectiles fizzle out past this fraction of the arena width
    pub const PROJECTILE_RANGE: f32 = 0.8;

    /// Ammo economy
    pub const START_AMMO: f32 = 20.0;
    pub const MAX_AMMO: f32 = 50.0;
    pub const AMMO_INTERVAL_MS: f32 = 350.0;
    /// Extra trickle granted every tick while powered up
    pub const POWER_UP_AMMO_BONUS: f32 = 0.1;
    pub const POWER_UP_LIMIT_MS: f32 = 10_000.0;

    /// Session pacing
    pub const TIME_LIMIT_MS: f32 = 30_000.0;
    pub const ENEMY_INTERVAL_MS: f32 = 2_000.0;
    pub const WINNING_SCORE: i64 = 80;

    /// Debris particle defaults
    pub const PARTICLE_SPRITE_SIZE: f32 = 50.0;
    pub const PARTICLE_GRAVITY: f32 = 0.5;
    pub const PARTICLE_MAX_BOUNCES: u32 = 2;

    /// Explosion sprite defaults (square frames, single row)
    pub const EXPLOSION_SIZE: f32 = 200.0;
    pub const EXPLOSION_FPS: f32 = 30.0;
    pub const EXPLOSION_MAX_FRAME: u32 = 8;

    /// Enemies spawn inside the top 95% of the arena so they clear the seabed
    pub const SPAWN_BAND: f32 = 0.95;
    /// Drones released when a hive whale breaks apart
    pub const HIVE_DRONE_COUNT: usize = 5;
}
