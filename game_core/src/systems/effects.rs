use crate::components::{Particle, ParticleGenerator, Trail};
use crate::registry::{Registry, Sprite};
use crate::resources::GameRng;

/// Age every trail segment by one tick
pub fn tick_trails(registry: &mut Registry) {
    for (_entity, (trail, sprite)) in registry
        .world_mut()
        .query_mut::<(&mut Trail, &mut Sprite)>()
    {
        trail.tick(sprite);
    }
}

/// Move and shrink every particle by one tick
pub fn tick_particles(registry: &mut Registry) {
    for (_entity, (particle, sprite)) in registry
        .world_mut()
        .query_mut::<(&mut Particle, &mut Sprite)>()
    {
        particle.tick(sprite);
    }
}

pub fn tick_generators(
    generators: &mut [ParticleGenerator],
    registry: &mut Registry,
    rng: &mut GameRng,
) {
    for generator in generators.iter_mut() {
        generator.tick(registry, rng);
    }
}

/// Drop finished generators, keeping the rest in order. Returns how many
/// were retired.
pub fn retire_finished_generators(
    generators: &mut Vec<ParticleGenerator>,
    registry: &mut Registry,
) -> usize {
    let mut carried_over = Vec::with_capacity(generators.len());
    let mut retired = 0;
    for generator in generators.drain(..) {
        if generator.is_finished() {
            generator.retire(registry);
            retired += 1;
        } else {
            carried_over.push(generator);
        }
    }
    *generators = carried_over;
    retired
}
