use glam::Vec2;
use std::collections::VecDeque;

/// Monotonic clock sample for the current tick, in milliseconds
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub now: f64,
}

impl Time {
    pub fn new(now: f64) -> Self {
        Self { now }
    }
}

/// Score, level and best score for the current run
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub score: u32, // clones spawned this run
    pub level: u32,
    pub best: u32, // survives restarts
}

impl Score {
    pub fn new(best: u32) -> Self {
        Self {
            best,
            ..Self::default()
        }
    }

    pub fn increment(&mut self) {
        self.score += 1;
    }

    /// Record the current score as best if it beats it. Returns true on a new record.
    pub fn commit_best(&mut self) -> bool {
        if self.score > self.best {
            self.best = self.score;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.level = 0;
    }
}

/// Difficulty knobs raised on every level-up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub player_speed: i32,
    pub clone_speed: f32, // replay multiplier
}

impl Difficulty {
    pub fn new(config: &crate::Config) -> Self {
        Self {
            player_speed: config.start_speed,
            clone_speed: config.clone_speed_initial,
        }
    }

    pub fn level_up(&mut self, config: &crate::Config) {
        self.player_speed += config.speed_step;
        self.clone_speed += config.clone_speed_step;
    }
}

/// Tracks when the last clone spawned
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnTimer {
    pub last_spawn: f64,
}

impl SpawnTimer {
    pub fn new(now: f64) -> Self {
        Self { last_spawn: now }
    }

    pub fn reset(&mut self, now: f64) {
        self.last_spawn = now;
    }

    pub fn is_due(&self, now: f64, interval: f64) -> bool {
        now - self.last_spawn >= interval
    }
}

/// Bounded history of recent player positions (cosmetic)
#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: VecDeque<Vec2>,
    max: usize,
}

impl Trail {
    pub fn new(max: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(max + 1),
            max,
        }
    }

    pub fn push(&mut self, point: Vec2) {
        self.points.push_back(point);
        while self.points.len() > self.max {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub clone_spawned: bool,
    pub leveled_up: bool,
    pub player_died: bool,
    pub new_best: bool,
    pub restarted: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
