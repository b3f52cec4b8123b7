//! Property tests over arbitrary boards and move sequences.

use proptest::prelude::*;

use kalah_engine::ai::{choose_move, play_out, simulate, MovePolicy, RandomPolicy};
use kalah_engine::core::{Board, GameRng, Side, SideMap, TOTAL_STONES};
use kalah_engine::game::Game;
use kalah_engine::rules::sow;

fn arbitrary_board() -> impl Strategy<Value = Board> {
    prop::array::uniform14(0u8..=8).prop_map(Board::from_slots)
}

fn arbitrary_side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Player), Just(Side::Cpu)]
}

proptest! {
    /// Any legal sequence from the opening keeps 48 stones on the board and
    /// never shrinks a store.
    #[test]
    fn conservation_and_store_monotonicity(choices in prop::collection::vec(0usize..6, 0..120)) {
        let mut game = Game::new();

        for choice in choices {
            let Some(side) = game.current_side() else { break };
            let legal = game.legal_moves(side);
            if legal.is_empty() {
                game.finalize();
                break;
            }

            let before = game.snapshot();
            game.play_move(legal[choice % legal.len()], side).unwrap();
            let after = game.snapshot();

            prop_assert_eq!(after.total(), TOTAL_STONES);
            for side in Side::BOTH {
                prop_assert!(after.store(side) >= before.store(side));
            }
        }
    }

    /// Sowing never feeds the opponent's store, however many laps it takes.
    #[test]
    fn sowing_skips_opponent_store(board in arbitrary_board(), side in arbitrary_side(), offset in 0usize..6, extra in 0u8..30) {
        let pit = *side.pits().start() + offset;
        let mut slots = *board.slots();
        slots[pit] = slots[pit].saturating_add(extra).max(1);
        let mut board = Board::from_slots(slots);
        let before = board;

        let result = sow(&mut board, pit, side);

        let opponent_store = side.opponent().store();
        prop_assert!(!result.path.contains(&opponent_store));
        prop_assert_eq!(board.store(side.opponent()), before.store(side.opponent()));
        prop_assert_eq!(board.total(), before.total());
    }

    /// A rejected move leaves the game exactly as it was.
    #[test]
    fn rejection_leaves_board_unchanged(board in arbitrary_board(), to_move in arbitrary_side(), mover in arbitrary_side(), pit in 0usize..20) {
        let mut game = Game::from_board(board, to_move);
        let phase = game.phase();

        if game.apply_move(pit, mover).is_err() {
            prop_assert_eq!(game.snapshot(), board);
            prop_assert_eq!(game.phase(), phase);
            prop_assert_eq!(game.moves_played(), 0);
        }
    }

    /// Simulation matches the real pipeline and never touches its input.
    #[test]
    fn simulation_is_pure(board in arbitrary_board(), side in arbitrary_side()) {
        let original = board;

        for pit in board.non_empty_pits(side) {
            let sim = simulate(board, pit, side);
            prop_assert_eq!(board, original);

            let mut live = board;
            let outcome = sow(&mut live, pit, side);
            prop_assert_eq!(sim.board, live);
            prop_assert_eq!(sim.outcome, outcome);
        }

        let _ = choose_move(&board, side);
        prop_assert_eq!(board, original);
    }

    /// The heuristic only ever names a non-empty pit of its own side.
    #[test]
    fn heuristic_picks_legal_pit(board in arbitrary_board(), side in arbitrary_side()) {
        match choose_move(&board, side) {
            Some(pit) => {
                prop_assert!(side.owns_pit(pit));
                prop_assert!(board[pit] > 0);
            }
            None => prop_assert!(board.is_side_empty(side)),
        }
    }

    /// Seeded random self-play always reaches a result with every stone in
    /// a store.
    #[test]
    fn random_playouts_terminate(seed in any::<u64>()) {
        let mut game = Game::new();
        let policies = SideMap::new(|_| &RandomPolicy as &dyn MovePolicy);

        let summary = play_out(&mut game, policies, &mut GameRng::new(seed), 0).unwrap();

        prop_assert!(summary.finished());
        let stores = u32::from(summary.board.store(Side::Player))
            + u32::from(summary.board.store(Side::Cpu));
        prop_assert_eq!(stores, TOTAL_STONES);
    }
}
