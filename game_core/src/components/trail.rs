use crate::params::Params;
use crate::registry::{Registry, Rgb, Sprite};
use glam::Vec2;
use hecs::Entity;

/// Fading echo left behind a ball. Shrinks by a fixed amount every tick while
/// drifting diagonally, and darkens with its remaining size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trail {
    initial_size: f32,
    age: u32,
    base_color: Rgb,
}

impl Trail {
    pub fn new(initial_size: f32, base_color: Rgb) -> Self {
        Self {
            initial_size,
            age: 0,
            base_color,
        }
    }

    pub fn spawn(registry: &mut Registry, pos: Vec2, size: f32, color: Rgb) -> Entity {
        let sprite = Sprite::new(pos, Vec2::splat(size), color);
        registry.register_with(sprite, Trail::new(size, color))
    }

    /// Current edge length; goes negative once fully decayed
    pub fn size(&self) -> f32 {
        self.initial_size - Params::TRAIL_DECAY * self.age as f32
    }

    pub fn is_spent(&self) -> bool {
        self.size() <= 0.0
    }

    pub fn tick(&mut self, sprite: &mut Sprite) {
        self.age += 1;
        let size = self.size();
        sprite.size = Vec2::splat(size.max(0.0));
        sprite.pos += Vec2::splat(Params::TRAIL_DRIFT);
        let remaining = if self.initial_size > 0.0 {
            size / self.initial_size
        } else {
            0.0
        };
        sprite.color = self.base_color.scaled(remaining);
    }
}
