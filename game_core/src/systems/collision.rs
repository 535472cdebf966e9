use crate::{Rect, ShadowClone};
use hecs::{Entity, World};

/// Find a clone overlapping the player box.
///
/// Which clone is reported when several overlap is unspecified; callers only
/// care that one does.
pub fn check_collisions(world: &World, player_box: &Rect) -> Option<Entity> {
    world
        .query::<(&ShadowClone, &Rect)>()
        .iter()
        .find(|(_e, (_clone, rect))| player_box.intersects(rect))
        .map(|(e, _)| e)
}
