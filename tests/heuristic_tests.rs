//! CPU heuristic integration tests.

use kalah_engine::ai::{choose_cpu_move, simulate};
use kalah_engine::core::{Board, Side};
use kalah_engine::game::{Game, Phase};

/// Given both an extra-turn pit and a capture pit, the extra turn wins
/// regardless of scan order.
#[test]
fn test_extra_turn_beats_capture() {
    // Pit 7 (1 stone) captures via empty pit 8; pit 12 (1 stone) lands in
    // the store.
    let board = Board::from_slots([4, 4, 4, 9, 4, 4, 0, 1, 0, 5, 5, 5, 1, 0]);

    assert!(simulate(board, 7, Side::Cpu).outcome.captured > 0);
    assert!(simulate(board, 12, Side::Cpu).outcome.extra_turn);
    assert_eq!(choose_cpu_move(&board), Some(12));
}

#[test]
fn test_no_move_signal() {
    let board = Board::from_slots([8, 8, 8, 8, 8, 8, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(choose_cpu_move(&board), None);
}

#[test]
fn test_opening_move() {
    assert_eq!(choose_cpu_move(&Board::new()), Some(9));
}

/// Repeated evaluation never changes the answer or the board.
#[test]
fn test_evaluation_is_repeatable() {
    let board = Board::from_slots([3, 0, 7, 1, 2, 5, 9, 0, 6, 1, 0, 3, 2, 9]);
    let first = choose_cpu_move(&board);

    for _ in 0..10 {
        assert_eq!(choose_cpu_move(&board), first);
    }
    assert_eq!(board, Board::from_slots([3, 0, 7, 1, 2, 5, 9, 0, 6, 1, 0, 3, 2, 9]));
}

/// Choosing a CPU move through the game does not touch the live board.
#[test]
fn test_game_choice_leaves_live_board() {
    let mut game = Game::new();
    game.play(0).unwrap();
    assert_eq!(game.phase(), Phase::AwaitingCpu);

    let before = game.snapshot();
    let pit = game.choose_cpu_move();

    assert!(pit.is_some());
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.phase(), Phase::AwaitingCpu);
}

/// The heuristic keeps taking extra turns while they are on offer.
#[test]
fn test_chained_extra_turns() {
    // Pit 11 (2 stones) reaches the store, leaving pit 12 with one stone
    // that reaches it next.
    let mut game = Game::from_board(
        Board::from_slots([4, 4, 4, 4, 4, 4, 0, 3, 3, 3, 2, 2, 0, 0]),
        Side::Cpu,
    );

    let first = game.play_cpu_turn().unwrap().unwrap();
    assert_eq!(first.pit, 11);
    assert!(first.extra_turn);
    assert_eq!(game.phase(), Phase::AwaitingCpu);

    let second = game.play_cpu_turn().unwrap().unwrap();
    assert_eq!(second.pit, 12);
    assert!(second.extra_turn);
    assert_eq!(game.board().store(Side::Cpu), 2);
}
