//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in one owned `GameState`.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::settings::Settings;
use crate::{brick_origin, map_range};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball held at the serve position, waiting for the launch edge
    WaitingToLaunch,
    /// Active gameplay
    Playing,
    /// Every brick destroyed
    Won,
    /// No lives remaining
    Lost,
}

impl GamePhase {
    /// Won and Lost freeze the simulation until the next launch edge
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Something notable that happened during a tick, in resolution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched,
    WallBounce,
    CeilingBounce,
    PaddleHit,
    BrickDestroyed { column: usize, row: usize },
    BallLost { lives_left: u8 },
    Won { score: u32 },
    Lost { score: u32 },
    Reset,
}

/// The ball: a point-sized collider drawn as a circle of `BALL_RADIUS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: IVec2,
    /// Per-tick displacement; sign encodes direction
    pub vel: IVec2,
}

impl Ball {
    pub fn new(vel: IVec2) -> Self {
        Self {
            pos: SERVE_POSITION,
            vel,
        }
    }

    /// Park the ball at the serve position
    pub fn hold(&mut self) {
        self.pos = SERVE_POSITION;
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge, always within `[0, SCREEN_WIDTH - PADDLE_WIDTH]`
    pub x: i32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: (SCREEN_WIDTH - PADDLE_WIDTH) / 2,
        }
    }
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, PADDLE_Y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    /// Move the paddle to the position a raw input sample maps to
    pub fn track(&mut self, sample: i32, input_max: i32) {
        self.x = map_range(sample, input_max, SCREEN_WIDTH - PADDLE_WIDTH);
    }
}

/// A single brick; identity is its grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: IVec2,
    pub alive: bool,
}

impl Brick {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BRICK_WIDTH, BRICK_HEIGHT)
    }
}

/// Fixed grid of bricks, indexed `[column][row]`.
///
/// Geometry never changes after construction; only `alive` flags do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickGrid {
    bricks: [[Brick; BRICK_ROWS]; BRICK_COLUMNS],
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl BrickGrid {
    pub fn new() -> Self {
        Self {
            bricks: std::array::from_fn(|column| {
                std::array::from_fn(|row| Brick {
                    pos: brick_origin(column, row),
                    alive: true,
                })
            }),
        }
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Brick> {
        self.bricks.get(column).and_then(|c| c.get(row))
    }

    /// Mark a brick dead. Returns false if it was already dead or out of range.
    pub fn destroy(&mut self, column: usize, row: usize) -> bool {
        match self.bricks.get_mut(column).and_then(|c| c.get_mut(row)) {
            Some(brick) if brick.alive => {
                brick.alive = false;
                true
            }
            _ => false,
        }
    }

    /// Iterate in scan order: columns outer, rows inner
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Brick)> {
        self.bricks.iter().enumerate().flat_map(|(column, bricks)| {
            bricks
                .iter()
                .enumerate()
                .map(move |(row, brick)| (column, row, brick))
        })
    }

    pub fn alive_count(&self) -> usize {
        self.iter().filter(|(_, _, b)| b.alive).count()
    }

    /// Alive flags for rendering, indexed `[column][row]`
    pub fn alive_flags(&self) -> [[bool; BRICK_ROWS]; BRICK_COLUMNS] {
        self.bricks.map(|column| column.map(|b| b.alive))
    }

    /// Alive bricks whose rectangle contains `point`, in scan order
    pub fn hits(&self, point: IVec2) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|(_, _, b)| b.alive && b.rect().contains(point))
            .map(|(column, row, _)| (column, row))
            .collect()
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Tunables this session was started with
    pub settings: Settings,
    /// Player lives
    pub lives: u8,
    /// Bricks destroyed this game
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
}

impl GameState {
    /// Create a fresh game waiting for the first launch
    pub fn new(settings: Settings) -> Self {
        let settings = settings.sanitized();
        Self {
            lives: settings.starting_lives,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::WaitingToLaunch,
            paddle: Paddle::default(),
            ball: Ball::new(settings.serve_velocity),
            bricks: BrickGrid::new(),
            settings,
        }
    }

    /// Restart the whole game: bricks, score, lives, ball and phase.
    ///
    /// The paddle keeps following the input device, and the tick counter
    /// keeps counting.
    pub fn reset(&mut self) {
        self.lives = self.settings.starting_lives;
        self.score = 0;
        self.phase = GamePhase::WaitingToLaunch;
        self.ball = Ball::new(self.settings.serve_velocity);
        self.bricks = BrickGrid::new();
    }

    /// True once every brick has been destroyed
    pub fn is_cleared(&self) -> bool {
        self.score as usize >= BRICK_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let state = GameState::new(Settings::default());
        assert_eq!(state.phase, GamePhase::WaitingToLaunch);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.ball.pos, SERVE_POSITION);
        assert_eq!(state.ball.vel, IVec2::new(2, 5));
        assert_eq!(state.bricks.alive_count(), BRICK_COUNT);
    }

    #[test]
    fn test_grid_scan_order_is_column_major() {
        let grid = BrickGrid::new();
        let order: Vec<_> = grid.iter().take(7).map(|(c, r, _)| (c, r)).collect();
        assert_eq!(
            order,
            vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (1, 0)]
        );
    }

    #[test]
    fn test_destroy_only_once() {
        let mut grid = BrickGrid::new();
        assert!(grid.destroy(2, 3));
        assert!(!grid.destroy(2, 3));
        assert!(!grid.destroy(9, 0));
        assert_eq!(grid.alive_count(), BRICK_COUNT - 1);
        assert!(!grid.alive_flags()[2][3]);
    }

    #[test]
    fn test_hits_skip_dead_bricks() {
        let mut grid = BrickGrid::new();
        let center = brick_origin(2, 3) + IVec2::new(10, 2);
        assert_eq!(grid.hits(center), vec![(2, 3)]);
        grid.destroy(2, 3);
        assert!(grid.hits(center).is_empty());
    }

    #[test]
    fn test_bricks_do_not_overlap() {
        let grid = BrickGrid::new();
        for (_, _, brick) in grid.iter() {
            for dx in 0..=BRICK_WIDTH {
                for dy in 0..=BRICK_HEIGHT {
                    assert_eq!(grid.hits(brick.pos + IVec2::new(dx, dy)).len(), 1);
                }
            }
        }
    }

    #[test]
    fn test_paddle_track_clamps() {
        let mut paddle = Paddle::default();
        paddle.track(-10, 1023);
        assert_eq!(paddle.x, 0);
        paddle.track(2048, 1023);
        assert_eq!(paddle.x, SCREEN_WIDTH - PADDLE_WIDTH);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = GameState::new(Settings::default());
        state.bricks.destroy(0, 0);
        state.score = 1;
        state.lives = 1;
        state.phase = GamePhase::Lost;
        state.ball.pos = IVec2::new(5, 5);
        state.ball.vel = IVec2::new(-2, -5);

        state.reset();
        assert_eq!(state.phase, GamePhase::WaitingToLaunch);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.ball, Ball::new(IVec2::new(2, 5)));
        assert_eq!(state.bricks.alive_count(), BRICK_COUNT);
    }
}
