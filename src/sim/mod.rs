//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Mutation happens only inside [`tick`]
//! - Seeded RNG only, carried in the session state
//! - No rendering or platform dependencies

pub mod collision;
pub mod enemy;
pub mod entity;
pub mod input;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, overlaps};
pub use enemy::{Category, Enemy, EnemyKind, EnemyParams};
pub use entity::{Explosion, ExplosionKind, Particle, Projectile};
pub use input::{Command, CommandQueue, Key, TickInput};
pub use player::Player;
pub use state::{Backdrop, Layer, SessionState};
pub use tick::tick;
