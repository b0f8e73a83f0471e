use super::sign;
use crate::params::Params;
use crate::registry::{Registry, Rgb, Sprite};
use crate::resources::GameRng;
use glam::Vec2;
use hecs::Entity;
use rand::Rng;
use std::collections::VecDeque;

/// A single burst fragment. Moves sub-linearly with its velocity and shrinks
/// in proportion to its remaining lifespan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub vel: Vec2,
    total_lifespan: u32,
    lifespan: i32,
    initial_size: f32,
}

impl Particle {
    pub fn new(vel: Vec2, size: f32, lifespan: u32) -> Self {
        Self {
            vel,
            total_lifespan: lifespan.max(1),
            lifespan: lifespan as i32,
            initial_size: size,
        }
    }

    /// Random velocity roughly bounded by a disk of radius `spread`²
    pub fn scatter(spread: f32, rng: &mut GameRng) -> Vec2 {
        let r2 = spread * spread;
        let vx = rng.unit() * 2.0 * r2 - r2;
        let vy = (r2 - vx.abs()) * sign(rng.unit() - 0.5);
        Vec2::new(vx, vy)
    }

    /// Register a particle centered on `origin`
    pub fn spawn(
        registry: &mut Registry,
        origin: Vec2,
        spread: f32,
        size: f32,
        lifespan: u32,
        color: Rgb,
        rng: &mut GameRng,
    ) -> Entity {
        let particle = Particle::new(Particle::scatter(spread, rng), size, lifespan);
        let sprite = Sprite::new(origin - Vec2::splat(size / 2.0), Vec2::splat(size), color);
        registry.register_with(sprite, particle)
    }

    pub fn size(&self) -> f32 {
        self.initial_size * self.lifespan.max(0) as f32 / self.total_lifespan as f32
    }

    pub fn tick(&mut self, sprite: &mut Sprite) {
        self.lifespan -= 1;
        let step = Vec2::new(
            sign(self.vel.x) * self.vel.x.abs().sqrt(),
            sign(self.vel.y) * self.vel.y.abs().sqrt(),
        );
        sprite.pos += step;
        sprite.size = Vec2::splat(self.size());
    }
}

/// Emits batches of particles for a number of ticks and tracks them until
/// every one has decayed.
#[derive(Debug, Clone)]
pub struct ParticleGenerator {
    origin: Vec2,
    duration: i32,
    batch: u32,
    velocity: f32,
    lifespan: u32,
    color: Rgb,
    particles: VecDeque<Entity>,
    emitted: usize,
}

impl ParticleGenerator {
    pub fn new(
        origin: Vec2,
        duration: i32,
        velocity: f32,
        batch: u32,
        lifespan: u32,
        color: Rgb,
    ) -> Self {
        Self {
            origin,
            duration,
            batch,
            velocity,
            lifespan,
            color,
            particles: VecDeque::new(),
            emitted: 0,
        }
    }

    /// Finished only once emission has ended and every particle is gone
    pub fn is_finished(&self) -> bool {
        self.duration < 0 && self.particles.is_empty()
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn live_particles(&self) -> usize {
        self.particles.len()
    }

    /// Total particles emitted over the generator's life
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn tick(&mut self, registry: &mut Registry, rng: &mut GameRng) {
        if self.duration > 0 {
            self.emit(registry, rng);
        }
        self.drain(registry);
        self.duration -= 1;
    }

    fn emit(&mut self, registry: &mut Registry, rng: &mut GameRng) {
        let spread = (self.velocity / 4.0).sqrt().floor();
        for _ in 0..self.batch {
            let size = rng
                .0
                .gen_range(Params::PARTICLE_MIN_SIZE..Params::PARTICLE_MAX_SIZE)
                as f32;
            let entity = Particle::spawn(
                registry,
                self.origin,
                spread,
                size,
                self.lifespan,
                self.color,
                rng,
            );
            self.particles.push_back(entity);
            self.emitted += 1;
        }
    }

    // Particles of one batch share a lifespan, so they decay in queue order.
    fn drain(&mut self, registry: &mut Registry) {
        while let Some(&oldest) = self.particles.front() {
            let spent = registry
                .get::<Particle>(oldest)
                .map_or(true, |p| p.size() <= 0.0);
            if !spent {
                break;
            }
            self.particles.pop_front();
            registry.unregister(oldest);
        }
    }

    /// Unregister every particle still alive
    pub fn retire(self, registry: &mut Registry) {
        for entity in self.particles {
            registry.unregister(entity);
        }
    }
}
