use glam::Vec2;

/// Marks the player entity; the entity also carries its `Rect`.
/// Its speed lives in `Difficulty`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Player;

/// A shadow clone replaying a recorded path; the entity also carries its `Rect`
#[derive(Debug, Clone)]
pub struct ShadowClone {
    pub path: Vec<Vec2>,
    pub cursor: usize, // next step to replay, never exceeds path.len()
}

impl ShadowClone {
    pub fn new(path: Vec<Vec2>) -> Self {
        Self { path, cursor: 0 }
    }

    /// True once every recorded step has been replayed
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.path.len()
    }
}

/// Plain RGB color for cosmetic effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const MINT: Rgb = Rgb(0x76, 0xff, 0xb9);
    pub const RED: Rgb = Rgb(0xff, 0x00, 0x00);
}

/// Cosmetic particle, no gameplay coupling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: i32, // ticks remaining
    pub color: Rgb,
    pub size: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, life: i32, color: Rgb, size: f32) -> Self {
        Self {
            pos,
            vel,
            life,
            color,
            size,
        }
    }

    /// Advance one tick. Returns false when expired.
    pub fn tick(&mut self, damping: f32) -> bool {
        self.pos += self.vel;
        self.vel *= damping;
        self.life -= 1;
        self.life > 0
    }
}
