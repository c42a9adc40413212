//! Collision detection and response for axis-aligned screen geometry
//!
//! The ball is tested as a single point (its center) against rectangles.
//! Reflections only ever flip a velocity component's sign, so speed on each
//! axis is conserved across bounces.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// An axis-aligned rectangle in integer screen units (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    /// Point-in-rectangle test, inclusive on all four edges
    #[inline]
    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.pos.x
            && point.x <= self.pos.x + self.size.x
            && point.y >= self.pos.y
            && point.y <= self.pos.y + self.size.y
    }
}

/// Result of checking the ball against the screen edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryHit {
    /// Ball is inside the playfield
    None,
    /// Ball crossed a side wall or the ceiling (velocity already fixed up)
    Bounced { wall: bool, ceiling: bool },
    /// Ball dropped below the bottom edge
    Lost,
}

/// Tracks which axes have been reflected during the current tick.
///
/// A second reflection on the same axis within one tick is ignored, so
/// overlapping collisions (ceiling + brick, wall corner) never cancel out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reflections {
    x: bool,
    y: bool,
}

impl Reflections {
    /// Point horizontal velocity toward `sign` (+1 right, -1 left)
    pub fn steer_x(&mut self, vel: &mut IVec2, sign: i32) -> bool {
        if self.x || vel.x == 0 || vel.x.signum() == sign {
            return false;
        }
        vel.x = -vel.x;
        self.x = true;
        true
    }

    /// Point vertical velocity toward `sign` (+1 down, -1 up)
    pub fn steer_y(&mut self, vel: &mut IVec2, sign: i32) -> bool {
        if self.y || vel.y == 0 || vel.y.signum() == sign {
            return false;
        }
        vel.y = -vel.y;
        self.y = true;
        true
    }

    /// Negate vertical velocity unless it was already reflected this tick
    pub fn flip_y(&mut self, vel: &mut IVec2) -> bool {
        if self.y {
            return false;
        }
        vel.y = -vel.y;
        self.y = true;
        true
    }
}

/// Check the ball against the side walls, the ceiling and the bottom edge.
///
/// Side walls and ceiling only reflect when the velocity points outward, so a
/// ball sitting on a boundary while already heading back in is left alone.
pub fn ball_boundary_collision(pos: IVec2, vel: &mut IVec2, refl: &mut Reflections) -> BoundaryHit {
    if pos.y > SCREEN_HEIGHT {
        return BoundaryHit::Lost;
    }

    let wall = if pos.x < 0 {
        refl.steer_x(vel, 1)
    } else if pos.x > SCREEN_WIDTH - 1 {
        refl.steer_x(vel, -1)
    } else {
        false
    };

    let ceiling = pos.y < TOP_MARGIN && refl.steer_y(vel, 1);

    if wall || ceiling {
        BoundaryHit::Bounced { wall, ceiling }
    } else {
        BoundaryHit::None
    }
}
