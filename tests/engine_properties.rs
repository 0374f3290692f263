//! Property tests: engine invariants hold across random command sequences.

use proptest::prelude::*;

use tetris_engine::core::{GameState, Shape};
use tetris_engine::types::{GameAction, BOARD_WIDTH, MIN_FALL_INTERVAL_MS};

fn action() -> impl Strategy<Value = GameAction> {
    prop_oneof![
        4 => Just(GameAction::MoveLeft),
        4 => Just(GameAction::MoveRight),
        6 => Just(GameAction::SoftDrop),
        3 => Just(GameAction::Rotate),
        1 => Just(GameAction::Pause),
        1 => Just(GameAction::Reset),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invariants_hold(seed in any::<u64>(), actions in prop::collection::vec(action(), 0..600)) {
        let mut state = GameState::new(seed);

        for action in actions {
            let before = state.snapshot();
            let before_active = state.active();
            let before_board = state.board().clone();

            state.apply_action(action);
            let event = state.take_last_event();

            if let Some(active) = state.active() {
                for (x, _) in active.minos() {
                    prop_assert!((0..BOARD_WIDTH as i8).contains(&x));
                }
            }

            prop_assert_eq!(state.level(), state.score() / 1000 + 1);
            prop_assert!(state.fall_interval_ms() >= MIN_FALL_INTERVAL_MS);

            if action == GameAction::Reset {
                continue;
            }

            prop_assert!(state.score() >= before.score);
            prop_assert!(state.level() >= before.level);
            prop_assert!(state.fall_interval_ms() <= before.fall_interval_ms);

            // Locked cells survive unless a line was cleared.
            if event.map_or(true, |e| e.lines_cleared == 0) {
                for (old, new) in before_board.cells().iter().zip(state.board().cells()) {
                    if old.is_some() {
                        prop_assert_eq!(old, new);
                    }
                }
            }

            // A rotation either turns the piece in place or changes nothing.
            if action == GameAction::Rotate {
                if let Some(prev) = before_active {
                    let now = state.active().unwrap();
                    let turned: Shape = prev.shape.rotated();
                    prop_assert!(
                        now == prev || (now.shape == turned && now.position() == prev.position())
                    );
                    if now == prev {
                        prop_assert_eq!(state.snapshot(), before);
                    }
                }
            }
        }
    }
}
