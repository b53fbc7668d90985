//! Asteroid spawn and split director
//!
//! Initial placement rejection-samples each axis until it clears the
//! exclusion zone around the ship (bounded, with the last draw kept as a
//! fallback). A hit on a non-Small asteroid spawns two children one tier
//! down at the parent's position; a cleared field is reseeded wholesale.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::entity::{Asteroid, Tier};
use crate::assets::{AssetError, AssetServer, TextureHandle};
use crate::consts::*;

/// The four meteor sprite variants, sampled per asteroid
const METEOR_PATHS: [&str; 4] = [
    "images/simple-space/meteor_detailedLarge.png",
    "images/simple-space/meteor_large.png",
    "images/simple-space/meteor_squareDetailedLarge.png",
    "images/simple-space/meteor_squareLarge.png",
];

#[derive(Debug, Clone)]
pub struct AsteroidField {
    pub asteroids: Vec<Asteroid>,
    variants: [TextureHandle; 4],
}

impl AsteroidField {
    /// Preload the texture variants; the field starts empty
    pub fn load(assets: &mut dyn AssetServer) -> Result<Self, AssetError> {
        let mut variants = [TextureHandle {
            id: 0,
            width: 0.0,
            height: 0.0,
        }; 4];
        for (slot, path) in variants.iter_mut().zip(METEOR_PATHS) {
            *slot = assets.load_texture(path)?;
        }
        Ok(Self {
            asteroids: Vec::new(),
            variants,
        })
    }

    /// Discard the whole population and spawn a fresh batch of Large rocks
    pub fn reseed(&mut self, ship_pos: Vec2, bounds: Vec2, rng: &mut Pcg32) {
        self.asteroids.clear();
        for _ in 0..ASTEROID_COUNT {
            let asteroid = self.spawn(ship_pos, bounds, rng);
            self.asteroids.push(asteroid);
        }
    }

    /// Split the asteroid at `index`; the parent is always destroyed
    pub fn split(&mut self, index: usize, ship_pos: Vec2, bounds: Vec2, rng: &mut Pcg32) {
        let parent_pos = self.asteroids[index].sprite.pos;
        let parent_scale = self.asteroids[index].sprite.scale;

        if let Some(child_tier) = self.asteroids[index].tier.split() {
            for _ in 0..ASTEROID_SPLIT_CHUNKS {
                let mut child = self.spawn(ship_pos, bounds, rng);
                child.sprite.pos = parent_pos;
                child.sprite.scale = parent_scale
                    * ASTEROID_SPLIT_RESCALE
                    * rng.random_range(ASTEROID_MIN_SCALE..ASTEROID_MAX_SCALE);
                child.tier = child_tier;
                self.asteroids.push(child);
            }
        }

        self.asteroids[index].destroyed = true;
    }

    pub fn all_destroyed(&self) -> bool {
        self.asteroids.iter().all(|a| a.destroyed)
    }

    /// Fresh asteroid with randomized texture, placement, spin, and heading
    fn spawn(&self, ship_pos: Vec2, bounds: Vec2, rng: &mut Pcg32) -> Asteroid {
        let texture = self.variants[rng.random_range(0..self.variants.len())];
        let mut asteroid = Asteroid::new(texture);

        asteroid.sprite.pos.x =
            sample_axis(rng, ship_pos.x, bounds.x, texture.width / 2.0);
        asteroid.sprite.pos.y =
            sample_axis(rng, ship_pos.y, bounds.y, texture.height / 2.0);

        asteroid.sprite.rotation = rng.random_range(0.0..1.0);
        asteroid.spin = rng.random_range(-ASTEROID_MAX_SPIN..ASTEROID_MAX_SPIN);

        // Heading components are not normalized; speed is a separate constant
        asteroid.direction = Vec2::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        asteroid.sprite.scale = rng.random_range(ASTEROID_MIN_SCALE..ASTEROID_MAX_SCALE);

        asteroid.advance();
        asteroid
    }
}

/// Redraw a coordinate until it falls outside the ship's exclusion band
///
/// Starts on the ship itself, forcing at least one draw; gives up after
/// a bounded number of redraws and keeps the last candidate.
fn sample_axis(rng: &mut Pcg32, ship: f32, extent: f32, half_size: f32) -> f32 {
    let mut value = ship;
    for _ in 0..ASTEROID_SPAWN_RETRIES {
        let in_zone =
            value >= ship - ASTEROID_SPAWN_MARGIN && value <= ship + ASTEROID_SPAWN_MARGIN;
        if !in_zone {
            break;
        }
        value = rng.random_range(0.0..extent) + half_size;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::CatalogAssets;
    use rand::SeedableRng;

    fn field() -> AsteroidField {
        AsteroidField::load(&mut CatalogAssets::new()).unwrap()
    }

    const BOUNDS: Vec2 = Vec2::new(1600.0, 900.0);
    const SHIP: Vec2 = Vec2::new(800.0, 450.0);

    #[test]
    fn test_reseed_spawns_three_large() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut field = field();
        field.reseed(SHIP, BOUNDS, &mut rng);

        assert_eq!(field.asteroids.len(), ASTEROID_COUNT);
        assert!(field
            .asteroids
            .iter()
            .all(|a| a.tier == Tier::Large && !a.destroyed));
    }

    #[test]
    fn test_spawn_respects_exclusion_zone() {
        // One asteroid travel step is far smaller than the margin, so the
        // post-spawn advance cannot carry a rock into the zone.
        for seed in 0..50u64 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut field = field();
            field.reseed(SHIP, BOUNDS, &mut rng);
            for a in &field.asteroids {
                let delta = a.sprite.pos - SHIP;
                let clear = delta.x.abs() > ASTEROID_SPAWN_MARGIN - ASTEROID_SPEED
                    || delta.y.abs() > ASTEROID_SPAWN_MARGIN - ASTEROID_SPEED;
                assert!(clear, "seed {seed}: spawned at {delta:?} inside the zone");
            }
        }
    }

    #[test]
    fn test_split_large_yields_two_medium_children() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = field();
        field.reseed(SHIP, BOUNDS, &mut rng);

        let parent_pos = field.asteroids[0].sprite.pos;
        field.split(0, SHIP, BOUNDS, &mut rng);

        assert!(field.asteroids[0].destroyed);
        let children: Vec<_> = field.asteroids[ASTEROID_COUNT..].iter().collect();
        assert_eq!(children.len(), ASTEROID_SPLIT_CHUNKS);
        for child in children {
            assert_eq!(child.tier, Tier::Medium);
            assert_eq!(child.sprite.pos, parent_pos);
            assert!(!child.destroyed);
        }
    }

    #[test]
    fn test_split_chain_terminates_at_small() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut field = field();
        field.reseed(SHIP, BOUNDS, &mut rng);

        field.split(0, SHIP, BOUNDS, &mut rng); // Large -> 2 Medium
        field.split(ASTEROID_COUNT, SHIP, BOUNDS, &mut rng); // Medium -> 2 Small

        let small_index = field
            .asteroids
            .iter()
            .position(|a| a.tier == Tier::Small)
            .unwrap();
        let count_before = field.asteroids.len();
        field.split(small_index, SHIP, BOUNDS, &mut rng);

        // Small produces no children, only a destroyed flag
        assert_eq!(field.asteroids.len(), count_before);
        assert!(field.asteroids[small_index].destroyed);
    }

    #[test]
    fn test_child_scale_shrinks() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut field = field();
        field.reseed(SHIP, BOUNDS, &mut rng);

        let parent_scale = field.asteroids[0].sprite.scale;
        field.split(0, SHIP, BOUNDS, &mut rng);
        for child in &field.asteroids[ASTEROID_COUNT..] {
            assert!(child.sprite.scale < parent_scale);
        }
    }
}
