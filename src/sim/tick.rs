//! Fixed-step simulation tick
//!
//! Core game loop that advances the simulation deterministically. One call
//! processes one input sample to completion before a snapshot is built.

use super::collision::{BoundaryHit, Reflections, ball_boundary_collision};
use super::snapshot::{Baseline, Snapshot};
use super::state::{GameEvent, GamePhase, GameState};

/// Input sampled for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Raw analog sample; clamped to `[0, input_max]` by the paddle
    pub position: i32,
    /// Launch/restart edge (true for exactly one tick per press)
    pub launch: bool,
}

/// Advance the game state by one tick and return the resulting snapshot
pub fn tick(state: &mut GameState, input: &TickInput) -> Snapshot {
    let before = Baseline::capture(state);
    let mut events = Vec::new();

    state.time_ticks += 1;

    // Paddle follows the input device in every phase
    state.paddle.track(input.position, state.settings.input_max);

    match state.phase {
        GamePhase::WaitingToLaunch => {
            state.ball.hold();
            if input.launch {
                state.phase = GamePhase::Playing;
                events.push(GameEvent::Launched);
                log::info!("Ball launched ({} lives left)", state.lives);
            }
        }

        GamePhase::Playing => step_ball(state, &mut events),

        GamePhase::Won | GamePhase::Lost => {
            if input.launch {
                log::info!("New game (previous score {})", state.score);
                state.reset();
                events.push(GameEvent::Reset);
            }
        }
    }

    Snapshot::new(before, state, events)
}

/// Resolve collisions at the ball's current position, then move it.
///
/// Order: screen boundaries, paddle, then bricks in scan order.
fn step_ball(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let pos = state.ball.pos;
    let mut refl = Reflections::default();

    match ball_boundary_collision(pos, &mut state.ball.vel, &mut refl) {
        BoundaryHit::Lost => {
            lose_ball(state, events);
            return;
        }
        BoundaryHit::Bounced { wall, ceiling } => {
            if wall {
                events.push(GameEvent::WallBounce);
            }
            if ceiling {
                events.push(GameEvent::CeilingBounce);
            }
            log::debug!("Boundary bounce at {pos}, vel now {}", state.ball.vel);
        }
        BoundaryHit::None => {}
    }

    if state.paddle.rect().contains(pos) && refl.steer_y(&mut state.ball.vel, -1) {
        events.push(GameEvent::PaddleHit);
    }

    // Every alive brick under the ball dies and scores; dy flips once
    for (column, row) in state.bricks.hits(pos) {
        if !state.bricks.destroy(column, row) {
            continue;
        }
        state.score += 1;
        refl.flip_y(&mut state.ball.vel);
        events.push(GameEvent::BrickDestroyed { column, row });
        log::debug!("Brick ({column}, {row}) destroyed, score {}", state.score);

        if state.is_cleared() {
            state.phase = GamePhase::Won;
            events.push(GameEvent::Won { score: state.score });
            log::info!("All bricks cleared, final score {}", state.score);
            return;
        }
    }

    state.ball.advance();
}

/// Ball dropped past the bottom edge
fn lose_ball(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.lives = state.lives.saturating_sub(1);
    events.push(GameEvent::BallLost {
        lives_left: state.lives,
    });

    if state.lives == 0 {
        state.phase = GamePhase::Lost;
        events.push(GameEvent::Lost { score: state.score });
        log::info!("Out of lives, final score {}", state.score);
    } else {
        state.phase = GamePhase::WaitingToLaunch;
        state.ball.hold();
        log::info!("Ball lost, {} lives left", state.lives);
    }
}
