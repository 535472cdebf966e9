pub mod arena;
pub mod components;
pub mod config;
pub mod fsm;
pub mod params;
pub mod path;
pub mod resources;
pub mod snapshot;
pub mod state;
pub mod storage;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use fsm::*;
pub use params::*;
pub use path::*;
pub use resources::*;
pub use snapshot::*;
pub use state::*;
pub use storage::*;
pub use systems::*;

use hecs::World;

/// Run one deterministic tick of the game
pub fn step(game: &mut GameState, input: &InputSnapshot, time: Time) {
    // Clear events at start of tick
    game.events.clear();

    if input.restart {
        game.restart(time.now);
    }
    if input.toggle_pause {
        game.toggle_pause();
    }

    if !game.fsm.is_running() {
        // Entities stay frozen; after death only the burst keeps animating
        if game.fsm.is_over() {
            update_particles(&mut game.world, game.config.particle_damping);
        }
        return;
    }

    // 1. Turn input into a movement intent
    let movement = ingest_input(input, game.difficulty.player_speed);

    // 2. Move and clamp the player
    let recorded = move_player(
        &mut game.world,
        game.player,
        movement,
        &game.arena,
        &game.config,
    );

    // 3. Record the displacement for the next clone
    if let Some(delta) = recorded {
        game.recorder.record(delta);
    }

    // 4. Cosmetic trail
    let player_box = game.player_rect();
    game.trail.push(player_box.pos);

    // 5. Spawn a clone once the interval has passed and there is something to replay
    if game
        .spawn_timer
        .is_due(time.now, game.config.clone_interval_ms)
        && !game.recorder.is_empty()
    {
        game.try_spawn(time.now);
    }

    // 6. Replay one step for every clone
    advance_clones(&mut game.world, game.difficulty.clone_speed, &game.arena);

    // 7. Touching any clone ends the run
    if check_collisions(&game.world, &player_box).is_some() {
        game.die();
    }

    // 8. Particles
    update_particles(&mut game.world, game.config.particle_damping);
}

/// Helper to create the player entity
pub fn create_player(world: &mut World, pos: glam::Vec2, config: &Config) -> hecs::Entity {
    world.spawn((Player, Rect::square(pos, config.player_size)))
}
