//! Keyboard, d-pad and pointer state, sampled once per frame

use game_core::InputSnapshot;
use glam::Vec2;

/// Direction of an on-screen d-pad button or movement key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "up" => Some(Dir::Up),
            "down" => Some(Dir::Down),
            "left" => Some(Dir::Left),
            "right" => Some(Dir::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Held {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl Held {
    fn set(&mut self, dir: Dir, pressed: bool) {
        match dir {
            Dir::Up => self.up = pressed,
            Dir::Down => self.down = pressed,
            Dir::Left => self.left = pressed,
            Dir::Right => self.right = pressed,
        }
    }
}

/// Movement key for a `KeyboardEvent.key` value
pub fn key_dir(key: &str) -> Option<Dir> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Dir::Up),
        "ArrowDown" | "s" | "S" => Some(Dir::Down),
        "ArrowLeft" | "a" | "A" => Some(Dir::Left),
        "ArrowRight" | "d" | "D" => Some(Dir::Right),
        _ => None,
    }
}

/// Accumulated input between frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: Held,
    dpad: Held,
    pointer: Option<Vec2>,
    pause_pressed: bool,
    restart_pressed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event. Returns true if the key is bound.
    pub fn key_down(&mut self, key: &str) -> bool {
        match key {
            "p" | "P" => self.pause_pressed = true,
            "Enter" => self.restart_pressed = true,
            _ => match key_dir(key) {
                Some(dir) => self.keys.set(dir, true),
                None => return false,
            },
        }
        true
    }

    /// Handle key up event. Returns true if the key is bound.
    pub fn key_up(&mut self, key: &str) -> bool {
        match key_dir(key) {
            Some(dir) => {
                self.keys.set(dir, false);
                true
            }
            None => matches!(key, "p" | "P" | "Enter"),
        }
    }

    pub fn set_dpad(&mut self, dir: Dir, pressed: bool) {
        self.dpad.set(dir, pressed);
    }

    /// Start a drag at `point`, in arena coordinates
    pub fn pointer_down(&mut self, point: Vec2) {
        self.pointer = Some(point);
    }

    /// Follow the pointer, but only while a drag is in progress
    pub fn pointer_move(&mut self, point: Vec2) {
        if self.is_dragging() {
            self.pointer = Some(point);
        }
    }

    pub fn pointer_up(&mut self) {
        self.pointer = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.is_some()
    }

    /// Build this frame's snapshot and consume the one-shot presses
    pub fn sample(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            up: self.keys.up || self.dpad.up,
            down: self.keys.down || self.dpad.down,
            left: self.keys.left || self.dpad.left,
            right: self.keys.right || self.dpad.right,
            drag: self.pointer,
            toggle_pause: self.pause_pressed,
            restart: self.restart_pressed,
        };
        self.pause_pressed = false;
        self.restart_pressed = false;
        snapshot
    }
}
