//! Letterbox mapping between the fixed logical arena and the visible canvas

use glam::Vec2;

/// Where the logical surface lands on the visible canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    pub scale: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Letterbox {
    /// Largest whole-pixel fit of a `logical_w` x `logical_h` surface,
    /// centered in the canvas
    pub fn fit(canvas_w: f64, canvas_h: f64, logical_w: f64, logical_h: f64) -> Self {
        let scale = (canvas_w / logical_w).min(canvas_h / logical_h);
        let width = (logical_w * scale).floor();
        let height = (logical_h * scale).floor();
        Self {
            scale,
            x: ((canvas_w - width) / 2.0).floor(),
            y: ((canvas_h - height) / 2.0).floor(),
            width,
            height,
        }
    }

    /// Map a canvas pixel back into logical arena coordinates
    pub fn to_logical(&self, px: f64, py: f64) -> Vec2 {
        if self.scale <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(
            ((px - self.x) / self.scale) as f32,
            ((py - self.y) / self.scale) as f32,
        )
    }
}
