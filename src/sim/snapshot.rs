//! Read-only per-tick view of the game for the display collaborator

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{BRICK_COLUMNS, BRICK_ROWS};

/// A value before and after one tick, so displays can erase then redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change<T> {
    pub old: T,
    pub new: T,
}

impl<T: PartialEq> Change<T> {
    pub fn changed(&self) -> bool {
        self.old != self.new
    }
}

/// The parts of the state a display diffs against, captured before a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Baseline {
    paddle: Rect,
    ball: IVec2,
    score: u32,
    lives: u8,
}

impl Baseline {
    pub fn capture(state: &GameState) -> Self {
        Self {
            paddle: state.paddle.rect(),
            ball: state.ball.pos,
            score: state.score,
            lives: state.lives,
        }
    }
}

/// Consistent view of the state after a fully resolved tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub paddle: Change<Rect>,
    /// Ball center
    pub ball: Change<IVec2>,
    /// Alive flags indexed `[column][row]`
    pub bricks: [[bool; BRICK_ROWS]; BRICK_COLUMNS],
    pub score: Change<u32>,
    pub lives: Change<u8>,
    pub phase: GamePhase,
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    pub fn new(before: Baseline, state: &GameState, events: Vec<GameEvent>) -> Self {
        Self {
            tick: state.time_ticks,
            paddle: Change {
                old: before.paddle,
                new: state.paddle.rect(),
            },
            ball: Change {
                old: before.ball,
                new: state.ball.pos,
            },
            bricks: state.bricks.alive_flags(),
            score: Change {
                old: before.score,
                new: state.score,
            },
            lives: Change {
                old: before.lives,
                new: state.lives,
            },
            phase: state.phase,
            events,
        }
    }

    /// Snapshot of the current state with nothing changed (initial frame)
    pub fn still(state: &GameState) -> Self {
        Self::new(Baseline::capture(state), state, Vec::new())
    }
}
