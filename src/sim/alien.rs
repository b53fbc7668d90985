//! Alien AI controller
//!
//! One enemy, cycling Dormant -> Countdown -> Active. While active it
//! marches horizontally, gets exactly one chance per activation to cut
//! toward the player along a quantized diagonal, and fires an aimed shot
//! whenever its refire timer elapses with no alien projectile live.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::entity::Sprite;
use crate::assets::{AssetError, AssetServer};
use crate::consts::*;
use crate::direction_from_degrees;

#[derive(Debug, Clone)]
pub struct Alien {
    pub sprite: Sprite,
    pub direction: Vec2,
    pub is_active: bool,
    pub is_timer_active: bool,
    pub escape_attempted: bool,
    pub spawn_timer: f32,
    pub projectile_timer: f32,
}

impl Alien {
    pub fn load(assets: &mut dyn AssetServer) -> Result<Self, AssetError> {
        let texture = assets.load_texture("images/simple-space/enemy_E.png")?;
        let mut sprite = Sprite::new(texture);
        sprite.z_order = -10;
        Ok(Self {
            sprite,
            direction: Vec2::ZERO,
            is_active: false,
            is_timer_active: false,
            escape_attempted: false,
            spawn_timer: 0.0,
            projectile_timer: 0.0,
        })
    }

    /// Park just off a random side, heading inward; clears the one-shot
    /// redirect flag and deactivates until the countdown elapses again
    pub fn respawn(&mut self, bounds: Vec2, rng: &mut Pcg32) {
        self.is_active = false;
        self.escape_attempted = false;

        let size = self.sprite.scaled_size();
        let from_right = rng.random_range(0..2) == 1;
        self.sprite.pos.x = if from_right { bounds.x + size.x } else { -size.x };
        self.sprite.pos.y =
            rng.random_range(ALIEN_SPAWN_Y_MARGIN..bounds.y - ALIEN_SPAWN_Y_MARGIN - size.y);

        self.direction = Vec2::new(if from_right { -1.0 } else { 1.0 }, 0.0);
    }

    /// Arm the activation countdown
    pub fn reset_timer(&mut self, rng: &mut Pcg32) {
        self.spawn_timer = rng.random_range(ALIEN_SPAWN_TIMER_MIN..ALIEN_SPAWN_TIMER_MAX);
        self.is_timer_active = true;
    }

    pub fn advance(&mut self) {
        self.sprite.pos += self.direction * ALIEN_SPEED;
    }

    /// One-shot redirect toward the player, snapped to a diagonal
    ///
    /// Fires once per activation when the player comes within range; the
    /// snapped heading is one of 45, 135, -45, -135 degrees.
    pub fn maybe_redirect(&mut self, player_pos: Vec2) {
        if self.escape_attempted {
            return;
        }
        if self.sprite.pos.distance(player_pos) > ALIEN_PLAYER_DISTANCE_CHECK {
            return;
        }

        let raw = (self.sprite.pos.y - player_pos.y)
            .atan2(player_pos.x - self.sprite.pos.x)
            .to_degrees()
            .round();

        let snapped = if (-180.0..=-90.0).contains(&raw) {
            -135.0
        } else if (-90.0..=0.0).contains(&raw) {
            -45.0
        } else if (0.0..=90.0).contains(&raw) {
            45.0
        } else {
            135.0
        };

        self.direction = direction_from_degrees(snapped);
        self.escape_attempted = true;
    }

    /// True once the alien has left the screen by twice its own size
    pub fn out_of_bounds(&self, bounds: Vec2) -> bool {
        let size = self.sprite.scaled_size();
        self.sprite.pos.x >= bounds.x + size.x * 2.0
            || self.sprite.pos.x <= -size.x * 2.0
            || self.sprite.pos.y >= bounds.y + size.y * 2.0
            || self.sprite.pos.y <= -size.y * 2.0
    }

    /// Fixed-rate activation countdown
    pub fn tick_spawn_timer(&mut self, dt: f32) {
        if !self.is_timer_active {
            return;
        }
        if self.spawn_timer > 0.0 {
            self.spawn_timer = (self.spawn_timer - dt).max(0.0);
        } else {
            self.is_active = true;
        }
    }

    /// Fixed-rate refire countdown; true when a shot should go out
    pub fn tick_refire(&mut self, dt: f32) -> bool {
        if self.projectile_timer > 0.0 {
            self.projectile_timer = (self.projectile_timer - dt).max(0.0);
            false
        } else {
            true
        }
    }

    /// Rearm the refire delay after a shot
    pub fn rearm_refire(&mut self) {
        self.projectile_timer = ALIEN_REFIRE_DELAY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::CatalogAssets;
    use proptest::prelude::*;
    use rand::SeedableRng;

    const BOUNDS: Vec2 = Vec2::new(1600.0, 900.0);

    fn alien() -> Alien {
        Alien::load(&mut CatalogAssets::new()).unwrap()
    }

    #[test]
    fn test_countdown_then_activate() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut alien = alien();
        alien.respawn(BOUNDS, &mut rng);
        alien.reset_timer(&mut rng);

        assert!(!alien.is_active);
        assert!(alien.is_timer_active);
        assert!(alien.spawn_timer >= ALIEN_SPAWN_TIMER_MIN);

        let dt = 1.0 / 60.0;
        let mut steps = 0;
        while !alien.is_active && steps < 60 * 12 {
            alien.tick_spawn_timer(dt);
            steps += 1;
        }
        assert!(alien.is_active);
        assert_eq!(alien.spawn_timer, 0.0);
    }

    #[test]
    fn test_spawn_sides_head_inward() {
        let mut alien = alien();
        for seed in 0..20u64 {
            let mut rng = Pcg32::seed_from_u64(seed);
            alien.respawn(BOUNDS, &mut rng);
            if alien.sprite.pos.x < 0.0 {
                assert_eq!(alien.direction, Vec2::X);
            } else {
                assert_eq!(alien.direction, Vec2::NEG_X);
            }
            assert!(alien.sprite.pos.y >= ALIEN_SPAWN_Y_MARGIN);
        }
    }

    #[test]
    fn test_redirect_is_one_shot() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut alien = alien();
        alien.respawn(BOUNDS, &mut rng);
        alien.sprite.pos = Vec2::new(500.0, 400.0);
        alien.direction = Vec2::X;

        alien.maybe_redirect(Vec2::new(700.0, 500.0));
        assert!(alien.escape_attempted);
        let first = alien.direction;

        // Player moved; a second attempt must not re-aim
        alien.maybe_redirect(Vec2::new(200.0, 100.0));
        assert_eq!(alien.direction, first);
    }

    #[test]
    fn test_redirect_out_of_range_is_ignored() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut alien = alien();
        alien.respawn(BOUNDS, &mut rng);
        alien.sprite.pos = Vec2::new(100.0, 100.0);

        alien.maybe_redirect(Vec2::new(1500.0, 800.0));
        assert!(!alien.escape_attempted);
    }

    #[test]
    fn test_respawn_clears_escape_flag() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut alien = alien();
        alien.respawn(BOUNDS, &mut rng);
        alien.sprite.pos = Vec2::new(500.0, 400.0);
        alien.maybe_redirect(Vec2::new(600.0, 450.0));
        assert!(alien.escape_attempted);

        alien.respawn(BOUNDS, &mut rng);
        assert!(!alien.escape_attempted);
        assert!(!alien.is_active);
    }

    #[test]
    fn test_out_of_bounds_needs_double_size() {
        let mut alien = alien();
        let size = alien.sprite.scaled_size();

        alien.sprite.pos = Vec2::new(-size.x - 1.0, 400.0);
        assert!(!alien.out_of_bounds(BOUNDS));

        alien.sprite.pos.x = -size.x * 2.0;
        assert!(alien.out_of_bounds(BOUNDS));
    }

    #[test]
    fn test_refire_cycle() {
        let mut alien = alien();
        alien.rearm_refire();
        let dt = 1.0 / 60.0;
        let mut steps = 0;
        while !alien.tick_refire(dt) {
            steps += 1;
            assert!(steps < 120, "refire timer never elapsed");
        }
        // 0.75s at 60 Hz
        assert!((44..=47).contains(&steps));
    }

    proptest! {
        #[test]
        fn redirect_always_lands_on_a_diagonal(
            ax in 0.0f32..1600.0, ay in 0.0f32..900.0,
            px in 0.0f32..1600.0, py in 0.0f32..900.0,
        ) {
            let mut alien = alien();
            alien.sprite.pos = Vec2::new(ax, ay);
            alien.maybe_redirect(Vec2::new(px, py));

            if alien.escape_attempted {
                let diagonals = [45.0f32, 135.0, -45.0, -135.0];
                let hit = diagonals.iter().any(|deg| {
                    (alien.direction - crate::direction_from_degrees(*deg)).length() < 1e-4
                });
                prop_assert!(hit, "direction {:?} is not a diagonal", alien.direction);
            }
        }
    }
}
