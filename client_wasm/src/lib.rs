//! Browser client for Echo Shadows
//!
//! Canvas2D presentation over the deterministic `game_core` simulation. JS
//! owns the event listeners and the `requestAnimationFrame` loop and forwards
//! everything here; the pure modules (HUD text, input, letterbox math) also
//! build natively so they can be unit tested.

pub mod hud;
pub mod input;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod assets;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod storage;

#[cfg(target_arch = "wasm32")]
pub use app::*;
