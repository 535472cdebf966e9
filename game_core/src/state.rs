use crate::*;
use hecs::{Entity, World};
use tracing::{debug, info, warn};

/// Everything one run of the game owns. The host keeps exactly one of these
/// and hands it to [`step`] once per frame.
pub struct GameState {
    pub world: World,
    pub player: Entity,
    pub config: Config,
    pub arena: Arena,
    pub recorder: PathRecorder,
    pub trail: Trail,
    pub score: Score,
    pub difficulty: Difficulty,
    pub spawn_timer: SpawnTimer,
    pub fsm: RunFsm,
    pub events: Events,
    pub rng: GameRng,
    pub store: Box<dyn ScoreStore>,
}

impl GameState {
    /// Start a run at `now` (ms). The best score is read from `store` once.
    pub fn new(config: Config, store: Box<dyn ScoreStore>, now: f64, seed: u64) -> Self {
        let mut world = World::new();
        let spawn = config.player_spawn();
        let player = create_player(&mut world, spawn, &config);
        let best = store.load();
        debug!(best, seed, "game state created");

        Self {
            world,
            player,
            arena: Arena::from_config(&config),
            recorder: PathRecorder::new(spawn),
            trail: Trail::new(config.trail_max),
            score: Score::new(best),
            difficulty: Difficulty::new(&config),
            spawn_timer: SpawnTimer::new(now),
            fsm: RunFsm::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            store,
            config,
        }
    }

    pub fn player_rect(&self) -> Rect {
        self.world
            .get::<&Rect>(self.player)
            .map(|r| *r)
            .unwrap_or_else(|_| Rect::square(self.config.player_spawn(), self.config.player_size))
    }

    pub fn state(&self) -> RunState {
        self.fsm.state()
    }

    pub fn clone_count(&self) -> usize {
        clone_count(&self.world)
    }

    pub fn particle_count(&self) -> usize {
        particle_count(&self.world)
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(self)
    }

    /// Flip between `Running` and `Paused`. Ignored after death.
    pub fn toggle_pause(&mut self) -> bool {
        let result = self.fsm.transition(RunAction::TogglePause);
        if result.success {
            debug!(state = ?result.to_state, "pause toggled");
        }
        result.success
    }

    /// Start a fresh run after death. Ignored in any other state.
    pub fn restart(&mut self, now: f64) -> bool {
        if !self.fsm.transition(RunAction::Restart).success {
            return false;
        }

        self.world.clear();
        let spawn = self.config.player_spawn();
        self.player = create_player(&mut self.world, spawn, &self.config);
        self.recorder.clear(spawn);
        self.trail.clear();
        self.score.reset();
        self.difficulty = Difficulty::new(&self.config);
        self.spawn_timer.reset(now);
        self.events.restarted = true;
        info!(best = self.score.best, "run restarted");
        true
    }

    /// Commit the recorded path to a new clone.
    ///
    /// The spawn timer restarts either way. An empty path creates nothing and
    /// leaves the recorder alone. Returns true when a clone was created.
    pub fn try_spawn(&mut self, now: f64) -> bool {
        self.spawn_timer.reset(now);

        if self.recorder.is_empty() {
            return false;
        }

        let player_box = self.player_rect();
        let path = self.recorder.take(player_box.pos);
        let steps = path.steps.len();
        if spawn_clone(&mut self.world, path, player_box.size).is_none() {
            return false;
        }

        self.score.increment();
        self.events.clone_spawned = true;
        debug!(score = self.score.score, steps, "clone spawned");

        if self.config.is_level_up(self.score.score) {
            self.score.level += 1;
            self.difficulty.level_up(&self.config);
            emit_burst(
                &mut self.world,
                &mut self.rng,
                player_box.center(),
                Rgb::MINT,
                Params::LEVEL_UP_BURST,
            );
            self.events.leveled_up = true;
            info!(
                level = self.score.level,
                player_speed = self.difficulty.player_speed,
                clone_speed = self.difficulty.clone_speed,
                "level up"
            );
        }
        true
    }

    /// End the run: burst at the player and persist a new best score.
    pub fn die(&mut self) -> bool {
        if !self.fsm.transition(RunAction::Collide).success {
            return false;
        }

        let center = self.player_rect().center();
        emit_burst(
            &mut self.world,
            &mut self.rng,
            center,
            Rgb::RED,
            Params::DEATH_BURST,
        );
        self.events.player_died = true;

        if self.score.commit_best() {
            self.events.new_best = true;
            if let Err(err) = self.store.save(self.score.best) {
                warn!(%err, best = self.score.best, "could not persist best score");
            }
        }
        info!(
            score = self.score.score,
            level = self.score.level,
            best = self.score.best,
            "game over"
        );
        true
    }
}
