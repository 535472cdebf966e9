use crate::{Arena, Config, Movement, Rect};
use glam::Vec2;
use hecs::{Entity, World};

/// Apply a movement intent to the player and clamp it to the arena.
///
/// Returns the displacement to record for this tick, or `None` when the
/// player did not move. Key steps record the intended delta even when the
/// wall swallowed it. Drag ticks always record something: the real
/// displacement, or a zero marker when `drag_records_motion` is off.
pub fn move_player(
    world: &mut World,
    player: Entity,
    movement: Movement,
    arena: &Arena,
    config: &Config,
) -> Option<Vec2> {
    let Ok(mut rect) = world.get::<&mut Rect>(player) else {
        return None;
    };

    match movement {
        Movement::Step(delta) => {
            rect.pos += delta;
            arena.clamp_rect(&mut rect);
            (delta != Vec2::ZERO).then_some(delta)
        }
        Movement::DragTo(point) => {
            let before = rect.pos;
            rect.pos = arena.clamp(point - rect.size * 0.5, rect.size);
            if config.drag_records_motion {
                Some(rect.pos - before)
            } else {
                Some(Vec2::ZERO)
            }
        }
    }
}
