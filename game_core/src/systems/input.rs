use glam::Vec2;

/// Input sampled once per tick by the host
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Pointer position in arena coordinates while a drag is active
    pub drag: Option<Vec2>,
    /// Edge-triggered: pause key went down this tick
    pub toggle_pause: bool,
    /// Edge-triggered: restart key went down this tick
    pub restart: bool,
}

impl InputSnapshot {
    pub fn idle() -> Self {
        Self::default()
    }
}

/// How the player intends to move this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Movement {
    /// Discrete step from keys or d-pad, already scaled by speed
    Step(Vec2),
    /// Drag the player so its center sits under this point
    DragTo(Vec2),
}

/// Turn an input snapshot into a movement intent. Dragging overrides the
/// directional inputs; opposing directions cancel additively.
pub fn ingest_input(input: &InputSnapshot, speed: i32) -> Movement {
    if let Some(point) = input.drag {
        return Movement::DragTo(point);
    }

    let speed = speed as f32;
    let mut delta = Vec2::ZERO;
    if input.up {
        delta.y -= speed;
    }
    if input.down {
        delta.y += speed;
    }
    if input.left {
        delta.x -= speed;
    }
    if input.right {
        delta.x += speed;
    }
    Movement::Step(delta)
}
