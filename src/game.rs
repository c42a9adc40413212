//! Game session
//!
//! Owns the `GameState` exclusively and drives it one tick at a time from an
//! input device, handing finished snapshots to a display.

use crate::io::{Display, InputDevice};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, Snapshot, TickInput, tick};

/// A running game holding all state
pub struct Game {
    state: GameState,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: GameState::new(settings),
        }
    }

    /// Read-only view for callers between ticks
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Snapshot of the current state with nothing changed, for the first draw
    pub fn initial_snapshot(&self) -> Snapshot {
        Snapshot::still(&self.state)
    }

    /// Sample the input device and run one tick
    pub fn step(&mut self, input: &mut impl InputDevice) -> Snapshot {
        let sample = TickInput {
            position: input.read_position(),
            launch: input.read_launch_edge(),
        };
        tick(&mut self.state, &sample)
    }

    /// Run one tick and present the result
    pub fn frame(
        &mut self,
        input: &mut impl InputDevice,
        display: &mut impl Display,
    ) -> GamePhase {
        let snapshot = self.step(input);
        display.present(&snapshot);
        snapshot.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::io::LaunchEdge;
    use crate::sim::GameEvent;

    /// Replays a fixed script of (position, button level) samples
    struct ScriptedInput {
        script: Vec<(i32, bool)>,
        cursor: usize,
        edge: LaunchEdge,
        pressed: bool,
    }

    impl ScriptedInput {
        fn new(script: Vec<(i32, bool)>) -> Self {
            Self {
                script,
                cursor: 0,
                edge: LaunchEdge::new(),
                pressed: false,
            }
        }
    }

    impl InputDevice for ScriptedInput {
        fn read_position(&mut self) -> i32 {
            let (position, pressed) = self.script.get(self.cursor).copied().unwrap_or((0, false));
            self.cursor += 1;
            self.pressed = pressed;
            position
        }

        fn read_launch_edge(&mut self) -> bool {
            self.edge.update(self.pressed)
        }
    }

    #[derive(Default)]
    struct RecordingDisplay {
        frames: Vec<Snapshot>,
    }

    impl Display for RecordingDisplay {
        fn present(&mut self, snapshot: &Snapshot) {
            self.frames.push(snapshot.clone());
        }
    }

    #[test]
    fn test_held_button_launches_once() {
        let mut game = Game::new(Settings::default());
        let mut input = ScriptedInput::new(vec![(512, true); 4]);
        let mut display = RecordingDisplay::default();

        for _ in 0..4 {
            game.frame(&mut input, &mut display);
        }

        let launches = display
            .frames
            .iter()
            .flat_map(|f| &f.events)
            .filter(|e| **e == GameEvent::Launched)
            .count();
        assert_eq!(launches, 1);
        assert_eq!(game.state().phase, GamePhase::Playing);
    }

    #[test]
    fn test_centered_paddle_returns_serve() {
        // Paddle centered under the serve position catches the first drop
        let mut game = Game::new(Settings::default());
        let mut script = vec![(512, false), (512, true)];
        script.extend(std::iter::repeat_n((512, false), 4));
        let mut input = ScriptedInput::new(script);
        let mut display = RecordingDisplay::default();

        for _ in 0..6 {
            game.frame(&mut input, &mut display);
        }

        assert!(
            display
                .frames
                .iter()
                .any(|f| f.events.contains(&GameEvent::PaddleHit))
        );
        assert!(game.state().ball.vel.y < 0);
        assert_eq!(game.state().lives, 3);
    }

    #[test]
    fn test_missed_serve_costs_a_life() {
        let mut game = Game::new(Settings::default());
        let mut script = vec![(0, true)];
        script.extend(std::iter::repeat_n((0, false), 10));
        let mut input = ScriptedInput::new(script);
        let mut display = RecordingDisplay::default();

        for _ in 0..11 {
            game.frame(&mut input, &mut display);
        }

        assert_eq!(game.state().lives, 2);
        assert_eq!(game.state().phase, GamePhase::WaitingToLaunch);
        assert_eq!(game.state().ball.pos, SERVE_POSITION);
        let lost = display.frames.iter().find(|f| f.lives.changed()).unwrap();
        assert_eq!(lost.lives.old, 3);
        assert_eq!(lost.lives.new, 2);
    }

    #[test]
    fn test_step_matches_bare_tick() {
        let mut game = Game::new(Settings::default());
        let mut shadow = game.state().clone();
        let script = vec![(300, false), (300, true), (700, false), (700, false)];
        let mut input = ScriptedInput::new(script.clone());
        let mut edge = LaunchEdge::new();

        for (position, pressed) in script {
            let expected = tick(
                &mut shadow,
                &TickInput {
                    position,
                    launch: edge.update(pressed),
                },
            );
            assert_eq!(game.step(&mut input), expected);
        }
        assert_eq!(game.state().phase, shadow.phase);
    }

    #[test]
    fn test_initial_snapshot_shows_full_grid() {
        let game = Game::new(Settings::default());
        let snap = game.initial_snapshot();
        assert_eq!(snap.phase, GamePhase::WaitingToLaunch);
        assert!(snap.bricks.iter().flatten().all(|&alive| alive));
        assert!(!snap.paddle.changed());
        assert!(snap.events.is_empty());
    }
}
