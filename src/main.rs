//! Brick Breaker headless entry point
//!
//! Runs the simulation core against an autopilot input device and a display
//! that logs what a screen would redraw. Pass a settings JSON path as the
//! first argument to override the defaults.

use std::path::PathBuf;
use std::time::Duration;

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use brick_breaker::consts::*;
use brick_breaker::sim::{GameEvent, GamePhase, GameState, Snapshot};
use brick_breaker::{Display, Game, InputDevice, LaunchEdge, Settings, unmap_range};

/// Autopilot that steers the paddle under the ball, with seeded jitter so
/// each run is reproducible but not perfect
struct AutopilotInput {
    rng: Pcg32,
    input_max: i32,
    target_x: i32,
    edge: LaunchEdge,
    button: bool,
}

impl AutopilotInput {
    fn new(seed: u64, input_max: i32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            input_max,
            target_x: SERVE_POSITION.x,
            edge: LaunchEdge::new(),
            button: false,
        }
    }

    /// Look at the state between ticks and decide what to do next
    fn observe(&mut self, state: &GameState) {
        let miss = self.rng.random_range(-12..=12);
        self.target_x = state.ball.pos.x + miss;
        // Press while waiting or finished, release otherwise
        self.button = state.phase != GamePhase::Playing && !self.button;
    }
}

impl InputDevice for AutopilotInput {
    fn read_position(&mut self) -> i32 {
        // Invert the paddle mapping so the paddle center lands on target_x
        let left = self.target_x - PADDLE_WIDTH / 2;
        unmap_range(left, self.input_max, SCREEN_WIDTH - PADDLE_WIDTH)
    }

    fn read_launch_edge(&mut self) -> bool {
        self.edge.update(self.button)
    }
}

/// Logs the changes a real display would erase and redraw
#[derive(Default)]
struct LogDisplay {
    frames: u64,
}

impl Display for LogDisplay {
    fn present(&mut self, snapshot: &Snapshot) {
        self.frames += 1;

        if snapshot.score.changed() || snapshot.lives.changed() {
            log::info!(
                "Points: {}  Lives: {}",
                snapshot.score.new,
                snapshot.lives.new
            );
        }

        for event in &snapshot.events {
            match event {
                GameEvent::Won { score } => log::info!("You Win! Final Score: {score}"),
                GameEvent::Lost { score } => {
                    log::info!("No more lives. Try again. Final Score: {score}")
                }
                other => log::trace!("tick {}: {other:?}", snapshot.tick),
            }
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Brick Breaker (headless) starting...");

    let settings = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .map(|path| Settings::load(&path))
        .unwrap_or_default();

    let mut input = AutopilotInput::new(settings.demo_seed, settings.input_max);
    let mut display = LogDisplay::default();
    let mut game = Game::new(settings.clone());
    display.present(&game.initial_snapshot());

    let pause = Duration::from_millis(settings.tick_ms);
    let mut phase = game.state().phase;
    while game.state().time_ticks < settings.demo_max_ticks {
        input.observe(game.state());
        phase = game.frame(&mut input, &mut display);
        if phase.is_terminal() {
            break;
        }
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
    }

    let state = game.state();
    println!(
        "{:?} after {} ticks: score {}, lives {}",
        phase, state.time_ticks, state.score, state.lives
    );
}
