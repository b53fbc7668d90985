//! Fixed-capacity projectile pool
//!
//! Slots are recycled through the `is_shot` flag; no allocation after
//! construction. Firing with no free slot is a silent no-op by design.

use glam::Vec2;

use super::entity::{screen_wrap, Projectile, Sprite};
use crate::assets::TextureHandle;
use crate::direction_from_degrees;

#[derive(Debug, Clone)]
pub struct ProjectilePool {
    slots: Vec<Projectile>,
}

impl ProjectilePool {
    pub fn new(texture: TextureHandle, lifespan: f32, capacity: usize) -> Self {
        Self {
            slots: (0..capacity)
                .map(|_| Projectile::new(texture, lifespan))
                .collect(),
        }
    }

    /// Activate the first free slot at `origin`, aimed along `angle_deg`
    ///
    /// Returns false when every slot is live (the request is dropped).
    pub fn fire(&mut self, origin: Vec2, angle_deg: f32) -> bool {
        match self.slots.iter_mut().find(|slot| !slot.is_shot) {
            Some(slot) => {
                slot.sprite.visible = true;
                slot.sprite.pos = origin;
                slot.direction = direction_from_degrees(angle_deg);
                slot.lifetime = 0.0;
                slot.is_shot = true;
                true
            }
            None => false,
        }
    }

    /// Move every live slot, wrap it, and expire it past its lifespan
    pub fn tick(&mut self, bounds: Vec2, dt: f32) {
        for slot in self.slots.iter_mut().filter(|slot| slot.is_shot) {
            slot.advance(dt);
            screen_wrap(&mut slot.sprite, bounds);
        }
    }

    /// Deactivate every slot (full restart)
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            if slot.is_shot {
                slot.collide();
            }
        }
    }

    pub fn iter_shot_mut(&mut self) -> impl Iterator<Item = &mut Projectile> {
        self.slots.iter_mut().filter(|slot| slot.is_shot)
    }

    pub fn any_shot(&self) -> bool {
        self.slots.iter().any(|slot| slot.is_shot)
    }

    pub fn shot_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_shot).count()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn sprites(&self) -> impl Iterator<Item = &Sprite> {
        self.slots.iter().map(|slot| &slot.sprite)
    }
}
