use game_core::*;
use glam::Vec2;

const TICK_MS: f64 = Params::FIXED_DT_MS;

fn new_game(store: MemoryStore) -> GameState {
    GameState::new(Config::new(), Box::new(store), 0.0, 42)
}

fn right() -> InputSnapshot {
    InputSnapshot {
        right: true,
        ..InputSnapshot::idle()
    }
}

/// Drive the game with the same input for `ticks` ticks starting at `*now`
fn run(game: &mut GameState, input: InputSnapshot, ticks: usize, now: &mut f64) {
    for _ in 0..ticks {
        *now += TICK_MS;
        step(game, &input, Time::new(*now));
    }
}

/// Place a clone directly, bypassing the recorder
fn place_clone(game: &mut GameState, pos: Vec2, steps: Vec<Vec2>) {
    let size = game.player_rect().size;
    spawn_clone(&mut game.world, RecordedPath { steps, start: pos }, size).unwrap();
}

#[test]
fn test_one_step_path_becomes_one_clone() {
    let mut game = new_game(MemoryStore::new());
    let start = game.player_rect().pos;
    let mut now = 0.0;

    // One tick of movement to the right
    run(&mut game, right(), 1, &mut now);
    assert_eq!(game.recorder.len(), 1);
    let moved_to = game.player_rect().pos;
    assert_eq!(moved_to, start + Vec2::new(5.0, 0.0));

    // Idle until just before the interval
    while now + TICK_MS < Params::CLONE_INTERVAL_MS {
        run(&mut game, InputSnapshot::idle(), 1, &mut now);
    }
    assert_eq!(game.clone_count(), 0);

    // The tick that crosses the interval spawns and replays one step
    run(&mut game, InputSnapshot::idle(), 1, &mut now);
    assert_eq!(game.clone_count(), 1);
    assert_eq!(game.score.score, 1);

    let snap = game.snapshot();
    assert_eq!(snap.clones.len(), 1);
    assert_eq!(
        snap.clones[0].pos,
        start + Vec2::new(5.0, 0.0),
        "Clone replayed its single step from the recorded start"
    );
    assert!(game.recorder.is_empty());
    assert_eq!(game.recorder.start(), moved_to);

    // The player never moved again, so the replayed step lands on it
    assert_eq!(game.state(), RunState::GameOver);
}

#[test]
fn test_clone_lands_on_player_ends_run() {
    let mut game = new_game(MemoryStore::new());
    let mut now = 0.0;

    // Clone box overlaps the player by exactly one pixel on both axes
    let player = game.player_rect().pos;
    place_clone(&mut game, player + Vec2::splat(27.0), vec![Vec2::ZERO; 3]);
    game.score.score = 3;

    run(&mut game, InputSnapshot::idle(), 1, &mut now);

    assert_eq!(game.state(), RunState::GameOver);
    assert!(game.events.player_died);
    assert!(game.events.new_best);
    assert_eq!(game.score.best, 3);
    assert!(game.snapshot().over);
}

#[test]
fn test_touching_clone_does_not_kill() {
    let mut game = new_game(MemoryStore::new());
    let mut now = 0.0;
    let player = game.player_rect().pos;
    place_clone(&mut game, player + Vec2::new(28.0, 0.0), vec![Vec2::ZERO]);

    run(&mut game, InputSnapshot::idle(), 5, &mut now);
    assert_eq!(game.state(), RunState::Running);
}

#[test]
fn test_clone_chases_recorded_route() {
    let mut game = new_game(MemoryStore::new());
    let mut now = 0.0;

    // Walk right for 20 ticks, then rest until the first clone spawns
    run(&mut game, right(), 20, &mut now);
    let rest_ticks = (Params::CLONE_INTERVAL_MS / TICK_MS) as usize;
    run(&mut game, InputSnapshot::idle(), rest_ticks, &mut now);
    assert_eq!(game.clone_count(), 1);

    // The clone walks the same 100 px the player did and then stops right on
    // the player's resting spot
    run(&mut game, InputSnapshot::idle(), 30, &mut now);
    assert_eq!(game.state(), RunState::GameOver, "The clone caught up");
}

#[test]
fn test_no_movement_no_clone() {
    let mut game = new_game(MemoryStore::new());
    let mut now = 0.0;
    run(&mut game, InputSnapshot::idle(), 400, &mut now);
    assert_eq!(game.clone_count(), 0);
    assert_eq!(game.score.score, 0);
    assert_eq!(game.recorder.len(), 0);
}

#[test]
fn test_positions_stay_in_bounds() {
    let mut game = new_game(MemoryStore::new());
    let arena = game.arena;
    let mut now = 0.0;
    let pattern = [
        InputSnapshot { up: true, left: true, ..InputSnapshot::idle() },
        InputSnapshot { down: true, right: true, ..InputSnapshot::idle() },
        InputSnapshot { right: true, up: true, ..InputSnapshot::idle() },
        InputSnapshot { down: true, left: true, ..InputSnapshot::idle() },
    ];

    // Long straight runs push the player and its clones into the walls
    for i in 0..1200 {
        let input = pattern[(i / 150) % pattern.len()];
        now += TICK_MS;
        step(&mut game, &input, Time::new(now));

        let snap = game.snapshot();
        assert!(arena.contains(&snap.player), "Player out of bounds at tick {i}");
        for clone in &snap.clones {
            assert!(arena.contains(clone), "Clone out of bounds at tick {i}");
        }
        if snap.over {
            break;
        }
    }
}

#[test]
fn test_score_and_level_progression() {
    let mut game = new_game(MemoryStore::new());
    let mut levels = Vec::new();
    for i in 1..=10u32 {
        game.recorder.record(Vec2::new(1.0, 0.0));
        assert!(game.try_spawn(i as f64 * 5000.0));
        assert_eq!(game.score.score, i, "Score +1 per accepted spawn");
        levels.push(game.score.level);
    }
    assert_eq!(levels, vec![0, 0, 0, 0, 1, 1, 1, 1, 1, 2]);
    assert_eq!(game.difficulty.player_speed, 7);
    assert_eq!(game.difficulty.clone_speed, 1.5);
}

#[test]
fn test_high_score_never_decreases() {
    let store = MemoryStore::with_best(5);
    let mut game = new_game(store.clone());
    let mut now = 0.0;
    let player = game.player_rect().pos;

    game.score.score = 2;
    place_clone(&mut game, player, vec![Vec2::ZERO]);
    run(&mut game, InputSnapshot::idle(), 1, &mut now);
    assert_eq!(game.state(), RunState::GameOver);
    assert_eq!(game.score.best, 5);
    assert_eq!(store.stored(), Some(5));
    assert_eq!(store.save_count(), 0, "Lower score never writes");

    let restart = InputSnapshot {
        restart: true,
        ..InputSnapshot::idle()
    };
    run(&mut game, restart, 1, &mut now);
    game.score.score = 9;
    let player = game.player_rect().pos;
    place_clone(&mut game, player, vec![Vec2::ZERO]);
    run(&mut game, InputSnapshot::idle(), 1, &mut now);
    assert_eq!(game.score.best, 9);
    assert_eq!(store.stored(), Some(9));
}

#[test]
fn test_restart_resets_run() {
    let mut game = new_game(MemoryStore::new());
    let mut now = 0.0;

    for i in 1..=6 {
        game.recorder.record(Vec2::new(1.0, 0.0));
        game.try_spawn(i as f64 * 5000.0);
    }
    game.recorder.record(Vec2::new(0.0, 5.0));
    let player = game.player_rect().pos;
    place_clone(&mut game, player, vec![Vec2::ZERO]);
    run(&mut game, InputSnapshot::idle(), 1, &mut now);
    assert_eq!(game.state(), RunState::GameOver);
    assert!(game.particle_count() > 0);
    assert!(!game.trail.is_empty());

    let restart = InputSnapshot {
        restart: true,
        ..InputSnapshot::idle()
    };
    run(&mut game, restart, 1, &mut now);

    assert_eq!(game.state(), RunState::Running);
    assert_eq!(game.particle_count(), 0, "Old bursts are gone");
    assert_eq!(game.trail.len(), 1, "Trail restarts with the restart tick");
    assert_eq!(game.score.score, 0);
    assert_eq!(game.score.level, 0);
    assert_eq!(game.score.best, 6);
    assert_eq!(game.clone_count(), 0);
    assert!(game.recorder.is_empty());
    assert_eq!(game.difficulty, Difficulty::new(&game.config));
    assert_eq!(game.player_rect().pos, game.config.player_spawn());
    assert_eq!(game.spawn_timer.last_spawn, now);
}

#[test]
fn test_pause_freezes_everything() {
    let mut game = new_game(MemoryStore::new());
    let mut now = 0.0;
    run(&mut game, right(), 3, &mut now);

    let pause = InputSnapshot {
        toggle_pause: true,
        ..InputSnapshot::idle()
    };
    run(&mut game, pause, 1, &mut now);
    assert_eq!(game.state(), RunState::Paused);

    // Two seconds, well inside the spawn interval
    let before = game.snapshot();
    let recorded = game.recorder.len();
    run(&mut game, right(), 120, &mut now);
    assert_eq!(game.snapshot(), before, "Nothing moves while paused");
    assert_eq!(game.recorder.len(), recorded, "Nothing is recorded while paused");

    run(&mut game, pause, 1, &mut now);
    assert_eq!(game.state(), RunState::Running);
    assert_eq!(game.clone_count(), 0);
}

#[test]
fn test_spawn_clock_runs_while_paused() {
    let mut game = new_game(MemoryStore::new());
    let mut now = 0.0;
    run(&mut game, right(), 3, &mut now);

    let pause = InputSnapshot {
        toggle_pause: true,
        ..InputSnapshot::idle()
    };
    run(&mut game, pause, 1, &mut now);

    // Sit out a full interval while paused; no clone appears yet
    run(&mut game, InputSnapshot::idle(), 300, &mut now);
    assert!(now - game.spawn_timer.last_spawn >= Params::CLONE_INTERVAL_MS);
    assert_eq!(game.clone_count(), 0);
    assert_eq!(game.state(), RunState::Paused);

    // The unpause tick spawns straight away from the pre-pause path
    run(&mut game, pause, 1, &mut now);
    assert!(game.events.clone_spawned);
    assert_eq!(game.score.score, 1);
    assert_eq!(game.clone_count(), 1);
    assert_eq!(game.spawn_timer.last_spawn, now);
}

#[test]
fn test_death_burst_animates_after_game_over() {
    let mut game = new_game(MemoryStore::new());
    let mut now = 0.0;
    let player = game.player_rect().pos;
    place_clone(&mut game, player, vec![Vec2::ZERO]);
    run(&mut game, InputSnapshot::idle(), 1, &mut now);
    assert_eq!(game.state(), RunState::GameOver);

    let frozen_player = game.player_rect();
    run(&mut game, right(), 60, &mut now);
    assert_eq!(game.particle_count(), 0, "Burst decays away");
    assert_eq!(game.player_rect(), frozen_player, "Player stays put after death");
}

#[test]
fn test_drag_marker_mode_keeps_clone_still() {
    let config = Config {
        drag_records_motion: false,
        ..Config::new()
    };
    let mut game = GameState::new(config, Box::new(MemoryStore::new()), 0.0, 1);
    let start = game.player_rect().pos;
    let mut now = 0.0;

    let drag = InputSnapshot {
        drag: Some(Vec2::new(200.0, 200.0)),
        ..InputSnapshot::idle()
    };
    run(&mut game, drag, 10, &mut now);
    assert_eq!(game.recorder.len(), 10, "One marker per dragged tick");
    assert!(game.recorder.steps().iter().all(|s| *s == Vec2::ZERO));

    run(&mut game, InputSnapshot::idle(), 300, &mut now);
    assert_eq!(game.clone_count(), 1);
    assert_eq!(game.snapshot().clones[0].pos, start, "Clone never left the start");
}

#[test]
fn test_drag_motion_is_replayed() {
    let mut game = new_game(MemoryStore::new());
    let mut now = 0.0;

    let drag = InputSnapshot {
        drag: Some(Vec2::new(214.0, 214.0)),
        ..InputSnapshot::idle()
    };
    run(&mut game, drag, 1, &mut now);
    assert_eq!(game.player_rect().pos, Vec2::new(200.0, 200.0));
    assert_eq!(game.recorder.steps(), &[Vec2::new(-426.0, -146.0)]);

    // Step aside so the first replayed step lands clear of the player
    run(&mut game, right(), 10, &mut now);
    while game.clone_count() == 0 {
        run(&mut game, InputSnapshot::idle(), 1, &mut now);
    }

    assert_eq!(game.state(), RunState::Running);
    assert_eq!(
        game.snapshot().clones[0].pos,
        Vec2::new(200.0, 200.0),
        "Clone retraced the dragged jump on its first step"
    );
}

#[test]
fn test_same_inputs_same_run() {
    let script: Vec<InputSnapshot> = (0..900)
        .map(|i| InputSnapshot {
            up: i % 90 < 30,
            down: i % 90 >= 60,
            left: i % 200 < 80,
            right: i % 200 >= 120,
            ..InputSnapshot::idle()
        })
        .collect();

    let play = || {
        let mut game = new_game(MemoryStore::new());
        let mut trace = Vec::new();
        for (i, input) in script.iter().enumerate() {
            step(&mut game, input, Time::new((i + 1) as f64 * TICK_MS));
            trace.push(game.snapshot());
        }
        trace
    };

    assert_eq!(play(), play());
}
