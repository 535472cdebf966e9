use crate::{Params, Particle, Rgb};
use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;

/// Spawn `count` particles flying out of `center`
pub fn emit_burst(
    world: &mut World,
    rng: &mut crate::GameRng,
    center: Vec2,
    color: Rgb,
    count: usize,
) {
    let spread = Params::PARTICLE_SPEED;
    for _ in 0..count {
        let vel = Vec2::new(
            rng.0.gen_range(-spread..spread),
            rng.0.gen_range(-spread..spread),
        );
        let life = Params::PARTICLE_LIFE_MIN + rng.0.gen_range(0..Params::PARTICLE_LIFE_SPREAD);
        let size = Params::PARTICLE_SIZE_MIN + rng.0.gen_range(0.0..Params::PARTICLE_SIZE_SPREAD);
        world.spawn((Particle::new(center, vel, life, color, size),));
    }
}

/// Move, damp and age every particle; despawn the expired ones
pub fn update_particles(world: &mut World, damping: f32) {
    let mut to_remove: Vec<Entity> = Vec::new();

    for (entity, particle) in world.query_mut::<&mut Particle>() {
        if !particle.tick(damping) {
            to_remove.push(entity);
        }
    }

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}

pub fn particle_count(world: &World) -> usize {
    world.query::<&Particle>().iter().count()
}
