//! Too Many Asteroids - an arcade asteroid-survival game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, spawning, game state)
//! - `render`: Read-only draw-request emission over sim state
//! - `assets`: Asset-provisioning seam (textures, fonts, text metrics)
//! - `settings`: Window and simulation-rate preferences

pub mod assets;
pub mod render;
pub mod settings;
pub mod sim;

pub use assets::{AssetError, AssetServer, CatalogAssets};
pub use settings::Settings;
pub use sim::{fixed, frame, FrameInput, Game, Signal};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (timers run at 60 Hz)
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    /// Maximum fixed steps per frame to prevent spiral of death
    pub const MAX_FIXED_STEPS: u32 = 8;

    /// Play area dimensions
    pub const GAME_WIDTH: f32 = 1600.0;
    pub const GAME_HEIGHT: f32 = 900.0;

    /// Ship defaults
    pub const SHIP_HEALTH: i32 = 5;
    pub const SHIP_MAX_SPEED: f32 = 6.5;
    pub const SHIP_ACCELERATION: f32 = 0.1;
    pub const SHIP_TURN_SPEED: f32 = 5.25;
    pub const SHIP_HURT_KNOCKBACK: f32 = 4.0;
    pub const SHIP_INVINCIBILITY_SECS: f32 = 2.0;
    pub const SHIP_FLASH_INTERVAL: f32 = 0.05;
    pub const SHIP_SCALE: f32 = 0.5;

    /// Asteroid defaults
    pub const ASTEROID_SPEED: f32 = 5.0;
    pub const ASTEROID_MIN_SCALE: f32 = 1.7;
    pub const ASTEROID_MAX_SCALE: f32 = 2.1;
    pub const ASTEROID_MAX_SPIN: f32 = 0.05;
    pub const ASTEROID_COUNT: usize = 3;
    pub const ASTEROID_SPAWN_MARGIN: f32 = 250.0;
    pub const ASTEROID_SPLIT_CHUNKS: usize = 2;
    pub const ASTEROID_SPLIT_RESCALE: f32 = 0.35;
    /// Cap on placement redraws per axis (the exclusion zone is rejection-sampled)
    pub const ASTEROID_SPAWN_RETRIES: u32 = 32;

    /// Projectile defaults
    pub const PROJECTILE_POOL_SIZE: usize = 3;
    pub const PROJECTILE_SPEED: f32 = 12.0;
    pub const PROJECTILE_LIFESPAN: f32 = 0.8;
    pub const ALIEN_PROJECTILE_LIFESPAN: f32 = 0.65;
    /// Shrink margin for projectile hits (requires deeper penetration)
    pub const PROJECTILE_HIT_MARGIN: f32 = 0.2;

    /// Alien defaults
    pub const ALIEN_SPEED: f32 = 4.5;
    pub const ALIEN_SPAWN_Y_MARGIN: f32 = 100.0;
    pub const ALIEN_DEATH_SCORE: u32 = 200;
    pub const ALIEN_SPAWN_TIMER_MIN: f32 = 3.0;
    pub const ALIEN_SPAWN_TIMER_MAX: f32 = 11.0;
    pub const ALIEN_REFIRE_DELAY: f32 = 0.75;
    pub const ALIEN_PLAYER_DISTANCE_CHECK: f32 = 400.0;

    /// Session defaults
    pub const MAX_SCORE: u32 = 2000;
    pub const MAX_TIME: f32 = 30.0;
}

/// Unit direction vector for an angle given in degrees
#[inline]
pub fn direction_from_degrees(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Angle in degrees from `from` toward `to`
#[inline]
pub fn degrees_between(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x).to_degrees()
}
