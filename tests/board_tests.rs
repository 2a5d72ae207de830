//! Board reveal rules through the public API.

use memory_match::{standard_deck, Board, Card, CardStatus, InvalidSelection, Position, Rank, RevealGate, Suit};

fn pos(i: u16) -> Position {
    Position::new(i)
}

#[test]
fn test_cannot_reveal_same_card_twice() {
    let mut board = Board::deal(&standard_deck());
    board.reveal(pos(7), RevealGate::open()).unwrap();

    assert_eq!(
        board.reveal(pos(7), RevealGate::open()),
        Err(InvalidSelection::AlreadyRevealed(pos(7)))
    );
    assert_eq!(board.count(CardStatus::Revealed), 1);
}

#[test]
fn test_locked_gate_checked_first() {
    let mut board = Board::deal(&standard_deck());
    let gate = RevealGate {
        locked: true,
        pending_first: None,
    };

    // Even an out-of-range click reports the lock.
    assert_eq!(board.reveal(pos(500), gate), Err(InvalidSelection::Locked));
    assert_eq!(board.count(CardStatus::Hidden), 52);
}

#[test]
fn test_mismatch_round_trip_restores_board() {
    let mut board = Board::deal(&standard_deck());
    let before = board.clone();

    board.reveal(pos(0), RevealGate::open()).unwrap();
    board.reveal(pos(1), RevealGate::open()).unwrap();
    board.unreveal([pos(0), pos(1)]);

    assert_eq!(board, before);
}

#[test]
fn test_matched_cards_stay_matched() {
    let mut board = Board::deal(&standard_deck());
    // Ace of hearts and Ace of diamonds.
    board.reveal(pos(0), RevealGate::open()).unwrap();
    board.reveal(pos(13), RevealGate::open()).unwrap();
    board.mark_matched([pos(0), pos(13)]);

    assert_eq!(board.status(pos(0)), Some(CardStatus::Matched));
    assert_eq!(board.count(CardStatus::Matched), 2);
    assert!(!board.hidden_positions().contains(&pos(13)));
    assert_eq!(
        board.reveal(pos(13), RevealGate::open()),
        Err(InvalidSelection::AlreadyRevealed(pos(13)))
    );
}

#[test]
fn test_snapshot_hides_face_down_identity() {
    let mut board = Board::deal(&standard_deck());
    board.reveal(pos(51), RevealGate::open()).unwrap();
    let snapshot = board.snapshot();

    assert_eq!(snapshot.len(), 52);
    assert_eq!(snapshot.visible_card(pos(51)), Some(Card::new(Rank::King, Suit::Club)));
    assert_eq!(snapshot.visible_card(pos(50)), None);
    assert_eq!(snapshot.iter().filter(|(_, status, _)| *status == CardStatus::Hidden).count(), 51);
}
