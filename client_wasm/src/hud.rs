//! HUD text and colors shared by the canvas and the DOM mirror

use game_core::{RenderSnapshot, Rgb};

pub const PAUSED_TEXT: &str = "Paused";
pub const GAME_OVER_TEXT: &str = "Game Over - Press Enter to Restart";

pub const BACKGROUND: &str = "#000";
pub const PLAYER_COLOR: &str = "#76ffb9";
pub const CLONE_COLOR: &str = "#8a2be2";
pub const TRAIL_COLOR: &str = "rgba(118,255,185,0.35)";
pub const TEXT_COLOR: &str = "#fff";
pub const PAUSED_COLOR: &str = "yellow";
pub const GAME_OVER_COLOR: &str = "red";
pub const FONT: &str = "20px Arial";

pub fn css_color(color: Rgb) -> String {
    format!("rgb({},{},{})", color.0, color.1, color.2)
}

/// Lines drawn in the top-left corner of the arena
pub fn canvas_lines(snap: &RenderSnapshot) -> [String; 3] {
    [
        format!("Score: {}", snap.score),
        format!("Best: {}", snap.best),
        format!("Level: {}", snap.level),
    ]
}

/// Text for the optional `#score`, `#best` and `#level` elements
pub fn dom_lines(snap: &RenderSnapshot) -> [(&'static str, String); 3] {
    [
        ("score", format!("Score: {}", snap.score)),
        ("best", format!("Best: {}", snap.best)),
        ("level", format!("Lvl: {}", snap.level)),
    ]
}

/// Centered banner for the current state, if any
pub fn banner(snap: &RenderSnapshot) -> Option<(&'static str, &'static str)> {
    if snap.over {
        Some((GAME_OVER_TEXT, GAME_OVER_COLOR))
    } else if snap.paused {
        Some((PAUSED_TEXT, PAUSED_COLOR))
    } else {
        None
    }
}
