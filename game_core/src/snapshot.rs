use crate::{GameState, Particle, Rect, ShadowClone};
use glam::Vec2;

/// Read-only view of one tick, everything a renderer needs
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub player: Rect,
    pub clones: Vec<Rect>,
    pub particles: Vec<Particle>,
    pub trail: Vec<Vec2>,
    pub score: u32,
    pub level: u32,
    pub best: u32,
    pub paused: bool,
    pub over: bool,
}

impl RenderSnapshot {
    pub fn capture(game: &GameState) -> Self {
        let clones = game
            .world
            .query::<(&ShadowClone, &Rect)>()
            .iter()
            .map(|(_e, (_clone, rect))| *rect)
            .collect();
        let particles = game
            .world
            .query::<&Particle>()
            .iter()
            .map(|(_e, p)| *p)
            .collect();

        Self {
            player: game.player_rect(),
            clones,
            particles,
            trail: game.trail.points().collect(),
            score: game.score.score,
            level: game.score.level,
            best: game.score.best,
            paused: game.fsm.is_paused(),
            over: game.fsm.is_over(),
        }
    }
}
