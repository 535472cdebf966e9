use glam::Vec2;

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn square(pos: Vec2, side: f32) -> Self {
        Self::new(pos, Vec2::splat(side))
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Open-interval overlap test: rectangles that only share an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }
}

/// The fixed logical play field every entity is clamped into
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &crate::Config) -> Self {
        Self::new(config.arena_width, config.arena_height)
    }

    /// Clamp a top-left position so a box of `size` stays inside the arena
    pub fn clamp(&self, pos: Vec2, size: Vec2) -> Vec2 {
        let mut out = pos;
        if out.x < 0.0 {
            out.x = 0.0;
        }
        if out.y < 0.0 {
            out.y = 0.0;
        }
        if out.x + size.x > self.width {
            out.x = self.width - size.x;
        }
        if out.y + size.y > self.height {
            out.y = self.height - size.y;
        }
        out
    }

    pub fn clamp_rect(&self, rect: &mut Rect) {
        rect.pos = self.clamp(rect.pos, rect.size);
    }

    pub fn contains(&self, rect: &Rect) -> bool {
        rect.pos.x >= 0.0
            && rect.pos.y >= 0.0
            && rect.pos.x + rect.size.x <= self.width
            && rect.pos.y + rect.size.y <= self.height
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(crate::Params::ARENA_WIDTH, crate::Params::ARENA_HEIGHT)
    }
}
