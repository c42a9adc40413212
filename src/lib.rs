//! Brick Breaker - single-screen arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle, ball, bricks, phases)
//! - `io`: Input device and display collaborator seams
//! - `game`: Session object that owns the state and drives ticks
//! - `settings`: Data-driven tunables loaded from JSON

pub mod game;
pub mod io;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use io::{Display, InputDevice, LaunchEdge};
pub use settings::Settings;

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    use glam::IVec2;

    /// Screen dimensions (128x160 TFT)
    pub const SCREEN_WIDTH: i32 = 128;
    pub const SCREEN_HEIGHT: i32 = 160;

    /// Ball bounces off the ceiling above this row (HUD lives above it)
    pub const TOP_MARGIN: i32 = 16;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_HEIGHT: i32 = 5;
    pub const PADDLE_Y: i32 = 155;

    /// Ball defaults
    pub const BALL_RADIUS: i32 = 2;
    /// Where the ball waits before launch
    pub const SERVE_POSITION: IVec2 = IVec2::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT - 8);
    /// Fastest horizontal step per tick
    pub const MAX_BALL_DX: i32 = PADDLE_WIDTH / 2;
    /// Fastest vertical step per tick; any faster and the ball can skip the paddle rows
    pub const MAX_BALL_DY: i32 = PADDLE_HEIGHT + 1;

    /// Brick grid layout
    pub const BRICK_COLUMNS: usize = 6;
    pub const BRICK_ROWS: usize = 6;
    pub const BRICK_COUNT: usize = BRICK_COLUMNS * BRICK_ROWS;
    pub const BRICK_WIDTH: i32 = 20;
    pub const BRICK_HEIGHT: i32 = 5;
    pub const BRICK_PITCH_X: i32 = 21;
    pub const BRICK_PITCH_Y: i32 = 6;
    pub const BRICK_ORIGIN: IVec2 = IVec2::new(1, 15);
}

/// Integer linear interpolation of `value` from `[0, in_max]` onto `[0, out_max]`.
///
/// `value` is clamped into the input range first, so the result always lies
/// in `[0, out_max]`. A non-positive `in_max` maps everything to 0.
#[inline]
pub fn map_range(value: i32, in_max: i32, out_max: i32) -> i32 {
    if in_max <= 0 {
        return 0;
    }
    let value = value.clamp(0, in_max) as i64;
    (value * out_max as i64 / in_max as i64) as i32
}

/// Inverse of [`map_range`]: the raw sample in `[0, in_max]` that `value`
/// (clamped to `[0, out_max]`) corresponds to.
#[inline]
pub fn unmap_range(value: i32, in_max: i32, out_max: i32) -> i32 {
    if out_max <= 0 {
        return 0;
    }
    let value = value.clamp(0, out_max) as i64;
    (value * in_max.max(0) as i64 / out_max as i64) as i32
}

/// Top-left corner of the brick at grid coordinate `(column, row)`
#[inline]
pub fn brick_origin(column: usize, row: usize) -> IVec2 {
    consts::BRICK_ORIGIN
        + IVec2::new(
            consts::BRICK_PITCH_X * column as i32,
            consts::BRICK_PITCH_Y * row as i32,
        )
}
