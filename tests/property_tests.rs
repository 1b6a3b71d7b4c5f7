//! Property tests over seeded deals and random legal play.

use gaps::board::Board;
use gaps::cards::{Card, Deck, Rank};
use gaps::core::{GameRng, Position, COLS};
use gaps::rules::reset_round;
use proptest::prelude::*;
use rustc_hash::FxHashSet;

fn dealt(seed: u64) -> (Board, Vec<Card>) {
    let mut rng = GameRng::new(seed);
    let mut deck = Deck::full(&mut rng);
    let mut board = Board::new();
    board.layout(&mut deck).unwrap();
    let aces = board.remove_aces().unwrap();
    (board, aces)
}

/// Make up to `steps` legal moves, choosing among playable cards by `picks`.
fn wander(board: &mut Board, picks: &[usize]) {
    for &pick in picks {
        let playable = board.find_playable_cards();
        if playable.is_empty() {
            break;
        }
        let located = playable[pick % playable.len()];
        let Some(to) = board.find_destination(located.card) else {
            continue;
        };
        board.move_card(located.card, located.position, to).unwrap();
    }
}

fn rule_allows(board: &Board, card: Card, pos: Position) -> bool {
    if !board.is_empty_at(pos) {
        return false;
    }
    if card.rank() == Rank::Two && pos.col == 0 {
        return true;
    }
    match pos.left().and_then(|left| board.get_card_at(left)) {
        Some(left) => left.suit() == card.suit() && left.rank().value() + 1 == card.rank().value(),
        None => false,
    }
}

proptest! {
    #[test]
    fn prop_deal_has_48_distinct_cards(seed in any::<u64>()) {
        let (board, aces) = dealt(seed);
        let cards = board.all_cards();
        prop_assert_eq!(cards.len(), 48);
        let distinct: FxHashSet<Card> = cards.iter().copied().collect();
        prop_assert_eq!(distinct.len(), 48);
        prop_assert!(aces.iter().all(Card::is_ace));
    }

    #[test]
    fn prop_legal_move_matches_rule(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 0..30),
    ) {
        let (mut board, _) = dealt(seed);
        wander(&mut board, &picks);

        for card in board.all_cards() {
            for pos in Position::all() {
                prop_assert_eq!(board.is_legal_move(card, pos), rule_allows(&board, card, pos));
            }
        }
    }

    #[test]
    fn prop_playable_is_idempotent(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 0..30),
    ) {
        let (mut board, _) = dealt(seed);
        wander(&mut board, &picks);
        prop_assert_eq!(board.find_playable_cards(), board.find_playable_cards());
    }

    #[test]
    fn prop_run_continuing_move_never_lowers_count(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 0..60),
    ) {
        let (mut board, _) = dealt(seed);
        for pick in picks {
            let playable = board.find_playable_cards();
            if playable.is_empty() {
                break;
            }
            let located = playable[pick % playable.len()];
            let Some(to) = board.find_destination(located.card) else {
                continue;
            };
            let before = board.count_correctly_placed();
            board.move_card(located.card, located.position, to).unwrap();
            // Only a Two leaving column 0 can break a run.
            if !(located.card.is_two() && located.position.col == 0) {
                prop_assert!(board.count_correctly_placed() >= before);
            }
        }
    }

    #[test]
    fn prop_complete_iff_every_row_solved(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 0..40),
    ) {
        let (mut board, _) = dealt(seed);
        wander(&mut board, &picks);

        let solved = (0..4).all(|row| {
            let Some(first) = board.get_card_at(Position::new(row, 0)) else {
                return false;
            };
            first.is_two()
                && board.is_empty_at(Position::new(row, COLS - 1))
                && (1..COLS - 1).all(|col| {
                    board
                        .get_card_at(Position::new(row, col))
                        .is_some_and(|c| c.suit() == first.suit() && c.rank().value() as usize == col + 2)
                })
        });
        prop_assert_eq!(board.is_game_complete(), solved);
    }

    #[test]
    fn prop_reset_keeps_runs(seed in any::<u64>(), shuffle_seed in any::<u64>()) {
        let (mut board, aces) = dealt(seed);
        let kept = board.correctly_placed();

        reset_round(&mut board, aces, &mut GameRng::new(shuffle_seed)).unwrap();

        for located in kept {
            prop_assert_eq!(board.get_card_at(located.position), Some(located.card));
        }
        prop_assert_eq!(board.all_cards().len(), 48);
    }
}

/// Moving a Two out of a row's left edge drops the count by the run it
/// leaves behind, less the one card it re-seeds elsewhere.
#[test]
fn test_two_leaving_column_zero_drops_suffix() {
    let mut board: Board = "\
        2H 3H 4H 5H 6H JC\n\
        _\n\
        9S\n\
        8D"
    .parse()
    .unwrap();
    let before = board.count_correctly_placed();
    assert_eq!(before, 5);

    board
        .move_card("2H".parse().unwrap(), Position::new(0, 0), Position::new(1, 0))
        .unwrap();

    // 3H..6H orphaned, 2H counted again in row 1.
    assert_eq!(board.count_correctly_placed(), before - 4);
}
