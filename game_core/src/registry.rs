//! Drawable registry
//!
//! Every visible object (paddles, balls, power-ups, trail segments and
//! particles) owns a [`Sprite`] in a `hecs::World`. A renderer only ever needs
//! to query `&Sprite`; the simulation keeps the authoritative state in its own
//! collections and pushes it into the sprite at the end of each tick.

use glam::Vec2;
use hecs::{Component, Entity, World};

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Scale each channel by `factor`, clamped to [0, 1]
    pub fn scaled(self, factor: f32) -> Rgb {
        let f = factor.clamp(0.0, 1.0);
        Rgb(
            (self.0 as f32 * f) as u8,
            (self.1 as f32 * f) as u8,
            (self.2 as f32 * f) as u8,
        )
    }
}

/// Drawable component: top-left position, size and colour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Rgb,
}

impl Sprite {
    pub fn new(pos: Vec2, size: Vec2, color: Rgb) -> Self {
        Self { pos, size, color }
    }
}

#[derive(Default)]
pub struct Registry {
    world: World,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, sprite: Sprite) -> Entity {
        self.world.spawn((sprite,))
    }

    /// Register a sprite together with the component that animates it
    pub fn register_with<C: Component>(&mut self, sprite: Sprite, component: C) -> Entity {
        self.world.spawn((sprite, component))
    }

    /// Remove an entity; stale handles are ignored
    pub fn unregister(&mut self, entity: Entity) {
        let _ = self.world.despawn(entity);
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    pub fn get<C: Component + Copy>(&self, entity: Entity) -> Option<C> {
        self.world.get::<&C>(entity).ok().map(|c| *c)
    }

    pub fn sprite(&self, entity: Entity) -> Option<Sprite> {
        self.get::<Sprite>(entity)
    }

    pub fn update_sprite(&mut self, entity: Entity, sprite: Sprite) {
        if let Ok(mut current) = self.world.get::<&mut Sprite>(entity) {
            *current = sprite;
        }
    }

    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.world.is_empty()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Number of live entities carrying component `C`
    pub fn count<C: Component>(&self) -> usize {
        self.world.query::<&C>().iter().count()
    }
}
