//! Clone engine: spawns shadow clones from recorded paths and replays them.

use crate::{Arena, RecordedPath, Rect, ShadowClone};
use glam::Vec2;
use hecs::{Entity, World};

/// Commit a recorded path to a new clone starting at `path.start`.
///
/// An empty path would never move, so no clone is created and `None` is
/// returned. Existing clones are never touched.
pub fn spawn_clone(world: &mut World, path: RecordedPath, size: Vec2) -> Option<Entity> {
    if path.steps.is_empty() {
        return None;
    }
    let rect = Rect::new(path.start, size);
    Some(world.spawn((ShadowClone::new(path.steps), rect)))
}

/// Replay one recorded step for every clone that still has one.
///
/// Each step is scaled by `multiplier` and truncated toward zero before it is
/// applied, so replay lands on the same whole-pixel positions on every
/// platform. Finished clones hold their last position.
pub fn advance_clones(world: &mut World, multiplier: f32, arena: &Arena) {
    for (_entity, (clone, rect)) in world
        .query_mut::<(&mut ShadowClone, &mut Rect)>()
        .into_iter()
        .filter(|(_, (clone, _))| !clone.is_finished())
    {
        let step = clone.path[clone.cursor];
        rect.pos += replay_delta(step, multiplier);
        arena.clamp_rect(rect);
        clone.cursor += 1;
    }
}

/// Scaled whole-pixel displacement for one replayed step
pub fn replay_delta(step: Vec2, multiplier: f32) -> Vec2 {
    Vec2::new(
        (step.x * multiplier).trunc(),
        (step.y * multiplier).trunc(),
    )
}

pub fn clone_count(world: &World) -> usize {
    world.query::<&ShadowClone>().iter().count()
}
