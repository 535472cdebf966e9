use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub player_size: f32,
    pub start_speed: i32,
    pub speed_step: i32,
    pub clone_interval_ms: f64,
    pub clone_speed_initial: f32,
    pub clone_speed_step: f32,
    pub level_every: u32,
    pub trail_max: usize,
    pub particle_damping: f32,
    /// Record the player's real displacement while dragging. When false a
    /// zero vector is recorded for each dragged tick instead.
    pub drag_records_motion: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            player_size: Params::PLAYER_SIZE,
            start_speed: Params::START_SPEED,
            speed_step: Params::SPEED_STEP,
            clone_interval_ms: Params::CLONE_INTERVAL_MS,
            clone_speed_initial: Params::CLONE_SPEED_INITIAL,
            clone_speed_step: Params::CLONE_SPEED_STEP,
            level_every: Params::LEVEL_EVERY,
            trail_max: Params::TRAIL_MAX,
            particle_damping: Params::PARTICLE_DAMPING,
            drag_records_motion: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-left corner that centers the player in the arena
    pub fn player_spawn(&self) -> glam::Vec2 {
        glam::Vec2::new(
            self.arena_width / 2.0 - self.player_size / 2.0,
            self.arena_height / 2.0 - self.player_size / 2.0,
        )
    }

    /// True when `score` is a positive multiple of the level-up threshold
    pub fn is_level_up(&self, score: u32) -> bool {
        self.level_every > 0 && score > 0 && score % self.level_every == 0
    }
}
