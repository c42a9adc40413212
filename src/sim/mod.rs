//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per input sample, processed to completion
//! - Integer geometry only
//! - Stable brick scan order (columns outer, rows inner)
//! - No rendering or platform dependencies

pub mod collision;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{BoundaryHit, Rect, Reflections, ball_boundary_collision};
pub use snapshot::{Baseline, Change, Snapshot};
pub use state::{Ball, Brick, BrickGrid, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
