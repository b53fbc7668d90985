//! Entity records and the movement updater
//!
//! Every on-screen thing shares the same [`Sprite`] record: a position, a
//! uniform scale, a rotation, a visibility flag, and a z-order, plus the
//! texture handle whose source dimensions drive collision and wrap tests.
//! Movement is direct position increment (`pos += direction * speed`); only
//! projectile lifetimes are dt-scaled.

use glam::Vec2;

use crate::assets::TextureHandle;
use crate::consts::*;
use crate::direction_from_degrees;

/// Renderable sprite record
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub texture: TextureHandle,
    pub pos: Vec2,
    pub scale: f32,
    pub rotation: f32,
    pub visible: bool,
    pub z_order: i32,
}

impl Sprite {
    pub fn new(texture: TextureHandle) -> Self {
        Self {
            texture,
            pos: Vec2::ZERO,
            scale: 1.0,
            rotation: 0.0,
            visible: true,
            z_order: 0,
        }
    }

    /// Source width/height scaled to screen size
    pub fn scaled_size(&self) -> Vec2 {
        Vec2::new(self.texture.width, self.texture.height) * self.scale
    }
}

/// Wrap a sprite that has fully exited `bounds` to the opposite edge
///
/// The small offset keeps the wrapped position from re-triggering the test
/// on the very next frame.
pub fn screen_wrap(sprite: &mut Sprite, bounds: Vec2) {
    let size = sprite.scaled_size();

    if sprite.pos.x > bounds.x + size.x {
        sprite.pos.x = -size.x + 0.1;
    }
    if sprite.pos.x < -size.x {
        sprite.pos.x = bounds.x + size.x + 0.1;
    }

    if sprite.pos.y > bounds.y + size.y {
        sprite.pos.y = -size.y + 0.1;
    }
    if sprite.pos.y < -size.y {
        sprite.pos.y = bounds.y + size.y + 0.1;
    }
}

/// The player ship
///
/// Keeps a second collision position distinct from the rendered sprite;
/// both are updated together each move but may diverge transiently on reset.
#[derive(Debug, Clone)]
pub struct Ship {
    pub sprite: Sprite,
    pub collision: Sprite,
    pub direction: Vec2,
    pub health: i32,
    pub current_health: i32,
    pub current_speed: f32,
    pub current_angle: f32,
    pub invincibility_timer: f32,
    pub flash_timer: f32,
}

impl Ship {
    pub fn new(texture: TextureHandle) -> Self {
        let mut sprite = Sprite::new(texture);
        sprite.scale = SHIP_SCALE;
        let collision = sprite;
        Self {
            sprite,
            collision,
            direction: Vec2::ZERO,
            health: SHIP_HEALTH,
            current_health: SHIP_HEALTH,
            current_speed: 0.0,
            current_angle: 0.0,
            invincibility_timer: 0.0,
            flash_timer: 0.0,
        }
    }

    pub fn accelerate(&mut self) {
        if self.current_speed < SHIP_MAX_SPEED {
            self.current_speed += SHIP_ACCELERATION;
        }
        self.reset_move_dir();
    }

    pub fn decelerate(&mut self) {
        if self.current_speed > -SHIP_MAX_SPEED {
            self.current_speed -= SHIP_ACCELERATION;
        }
        self.reset_move_dir();
    }

    /// Speed decay while no thrust input is held; snaps to zero near zero
    pub fn coast(&mut self) {
        if self.current_speed > SHIP_ACCELERATION || self.current_speed < -SHIP_ACCELERATION {
            self.current_speed -= SHIP_ACCELERATION * self.current_speed.signum();
        } else {
            self.current_speed = 0.0;
        }
    }

    /// `direction` is -1, 0, or 1 (left / none / right)
    pub fn turn(&mut self, direction: i32) {
        self.current_angle += SHIP_TURN_SPEED * direction as f32;
    }

    fn reset_move_dir(&mut self) {
        self.direction = direction_from_degrees(self.current_angle);
    }

    /// Advance the collision position and mirror it to the rendered sprite
    pub fn advance(&mut self) {
        self.collision.pos += self.direction * self.current_speed;

        self.sprite.rotation = (self.current_angle + 90.0).to_radians();
        self.sprite.pos = self.collision.pos;
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility_timer > 0.0
    }

    /// Apply damage and knockback from a hazard at `hazard_pos`
    pub fn hurt(&mut self, hazard_pos: Vec2) {
        self.current_health -= 1;
        self.current_angle = crate::degrees_between(self.sprite.pos, hazard_pos);
        self.current_speed = -SHIP_HURT_KNOCKBACK;
        self.invincibility_timer = SHIP_INVINCIBILITY_SECS;
    }

    /// Fixed-rate invincibility countdown with visibility flashing
    pub fn tick_invincibility(&mut self, dt: f32) {
        if self.invincibility_timer <= 0.0 {
            return;
        }

        self.invincibility_timer = (self.invincibility_timer - dt).max(0.0);
        self.flash_timer -= dt;
        if self.flash_timer <= 0.0 {
            self.sprite.visible = !self.sprite.visible;
            self.flash_timer = SHIP_FLASH_INTERVAL;
        }

        if self.invincibility_timer == 0.0 {
            self.sprite.visible = true;
            self.flash_timer = 0.0;
        }
    }
}

/// Asteroid size class, controlling score value and split behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Large,
    Medium,
    Small,
}

impl Tier {
    pub fn score(self) -> u32 {
        match self {
            Tier::Large => 20,
            Tier::Medium => 50,
            Tier::Small => 100,
        }
    }

    /// One step down the size ladder; `None` past Small
    pub fn split(self) -> Option<Tier> {
        match self {
            Tier::Large => Some(Tier::Medium),
            Tier::Medium => Some(Tier::Small),
            Tier::Small => None,
        }
    }
}

/// A drifting, spinning rock
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub sprite: Sprite,
    pub direction: Vec2,
    pub spin: f32,
    pub tier: Tier,
    pub destroyed: bool,
}

impl Asteroid {
    pub fn new(texture: TextureHandle) -> Self {
        let mut sprite = Sprite::new(texture);
        sprite.z_order = -10;
        Self {
            sprite,
            direction: Vec2::ZERO,
            spin: 0.0,
            tier: Tier::Large,
            destroyed: false,
        }
    }

    pub fn score(&self) -> u32 {
        self.tier.score()
    }

    pub fn advance(&mut self) {
        self.sprite.pos += self.direction * ASTEROID_SPEED;
        self.sprite.rotation += self.spin;
    }
}

/// A pooled projectile slot
///
/// Alien shots are the same record with a shorter lifespan; free iff
/// `is_shot` is false (the sprite is hidden while free).
#[derive(Debug, Clone)]
pub struct Projectile {
    pub sprite: Sprite,
    pub direction: Vec2,
    pub lifespan: f32,
    pub is_shot: bool,
    pub lifetime: f32,
}

impl Projectile {
    pub fn new(texture: TextureHandle, lifespan: f32) -> Self {
        let mut sprite = Sprite::new(texture);
        sprite.visible = false;
        Self {
            sprite,
            direction: Vec2::ZERO,
            lifespan,
            is_shot: false,
            lifetime: 0.0,
        }
    }

    /// Advance position; expire once accumulated lifetime reaches lifespan
    pub fn advance(&mut self, dt: f32) {
        self.sprite.pos += self.direction * PROJECTILE_SPEED;

        self.lifetime += dt;
        if self.lifetime >= self.lifespan {
            self.collide();
        }
    }

    /// Immediate deactivation (hit something, or lifespan ran out)
    pub fn collide(&mut self) {
        self.is_shot = false;
        self.sprite.visible = false;
        self.lifetime = 0.0;
    }
}

/// HUD health marker; position is fixed at setup
#[derive(Debug, Clone, Copy)]
pub struct HealthIcon {
    pub sprite: Sprite,
}

impl HealthIcon {
    /// Icons stack right-to-left from the scoreboard corner
    pub fn new(texture: TextureHandle, index: usize) -> Self {
        let mut sprite = Sprite::new(texture);
        sprite.scale = SHIP_SCALE;
        sprite.pos = Vec2::new(
            1465.0 - texture.width * 1.25 * index as f32 * sprite.scale,
            150.0,
        );
        Self { sprite }
    }
}
