//! Records the player's per-tick displacement between clone spawns.

use glam::Vec2;

/// A path committed for replay, with the position it starts from
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPath {
    pub steps: Vec<Vec2>,
    pub start: Vec2,
}

/// Accumulates displacement vectors since the last spawn
#[derive(Debug, Clone, Default)]
pub struct PathRecorder {
    steps: Vec<Vec2>,
    start: Vec2,
}

impl PathRecorder {
    pub fn new(start: Vec2) -> Self {
        Self {
            steps: Vec::new(),
            start,
        }
    }

    pub fn record(&mut self, delta: Vec2) {
        self.steps.push(delta);
    }

    /// Empty the buffer and replay future clones from `start`
    pub fn clear(&mut self, start: Vec2) {
        self.steps.clear();
        self.start = start;
    }

    /// Hand the current path over by value and start a fresh one at `next_start`
    pub fn take(&mut self, next_start: Vec2) -> RecordedPath {
        let taken = RecordedPath {
            steps: std::mem::take(&mut self.steps),
            start: self.start,
        };
        self.start = next_start;
        taken
    }

    pub fn steps(&self) -> &[Vec2] {
        &self.steps
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
