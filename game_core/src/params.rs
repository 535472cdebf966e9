/// Game tuning parameters for Echo Shadows
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (logical pixels)
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;

    // Player
    pub const PLAYER_SIZE: f32 = 28.0;
    pub const START_SPEED: i32 = 5;
    pub const SPEED_STEP: i32 = 1;

    // Clones
    pub const CLONE_INTERVAL_MS: f64 = 5000.0;
    pub const CLONE_SPEED_INITIAL: f32 = 1.0;
    pub const CLONE_SPEED_STEP: f32 = 0.25;

    // Progression
    pub const LEVEL_EVERY: u32 = 5; // level up every N clones spawned

    // Cosmetics
    pub const TRAIL_MAX: usize = 15;
    pub const PARTICLE_DAMPING: f32 = 0.94;
    pub const PARTICLE_SPEED: f32 = 4.0; // velocity components in [-4, 4)
    pub const PARTICLE_LIFE_MIN: i32 = 20;
    pub const PARTICLE_LIFE_SPREAD: i32 = 20;
    pub const PARTICLE_SIZE_MIN: f32 = 2.0;
    pub const PARTICLE_SIZE_SPREAD: f32 = 4.0;
    pub const LEVEL_UP_BURST: usize = 40;
    pub const DEATH_BURST: usize = 60;

    // Simulation
    pub const FIXED_DT_MS: f64 = 1000.0 / 60.0;
}
