//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - Two cadences: per-frame updates and fixed-rate timer updates
//! - No rendering or platform dependencies; draw emission reads, never writes

pub mod alien;
pub mod asteroids;
pub mod collision;
pub mod entity;
pub mod pool;
pub mod state;
pub mod tick;

pub use alien::Alien;
pub use asteroids::AsteroidField;
pub use collision::{overlaps, overlaps_text, TextRegion};
pub use entity::{screen_wrap, Asteroid, HealthIcon, Projectile, Ship, Sprite, Tier};
pub use pool::ProjectilePool;
pub use state::{Game, Hud, Label, Mode, PauseOption, Screen, Session};
pub use tick::{fixed, frame, FrameInput, Signal};
