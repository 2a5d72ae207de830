//! End-to-end turn scenarios on `MatchGame`.

use memory_match::{
    standard_deck, Card, CardStatus, ComputerMemory, GameBuilder, GameConfig, GameError, GameEvent, GameOutcome,
    GameRng, InvalidSelection, MatchGame, PlayerConfig, PlayerId, Position, Rank, StepKind, TimingConfig,
    TurnPhase,
};

const HUMAN: PlayerId = PlayerId::new(0);
const COMPUTER: PlayerId = PlayerId::new(1);

fn pos(i: u16) -> Position {
    Position::new(i)
}

fn config() -> GameConfig {
    GameConfig::default().with_seed(5).with_timing(TimingConfig::instant())
}

/// Standard order with the four of clubs moved to position 40, so 3 and
/// 40 are both fours and 3 and 4 differ.
fn fours_at_3_and_40() -> Vec<Card> {
    let mut deck = standard_deck();
    deck.swap(40, 42);
    assert_eq!(deck[3].rank, Rank::Four);
    assert_eq!(deck[40].rank, Rank::Four);
    deck
}

/// Drive a game to the end with the human flipping random face-down cards.
fn play_out(game: &mut MatchGame, seed: u64) -> Vec<GameEvent> {
    let mut picker = GameRng::new(seed);
    let mut events = Vec::new();

    while !game.is_over() {
        if game.pending_step().is_some() {
            game.advance().unwrap();
        } else {
            let hidden = game.board().hidden_positions();
            for p in picker.sample(&hidden, 2) {
                game.activate_card(p).unwrap();
                assert!(game.board().count(CardStatus::Revealed) <= 2);
            }
        }
        events.extend(game.drain_events());
    }
    events
}

#[test]
fn test_human_match_scores_and_keeps_turn() {
    let mut game = GameBuilder::new(config()).layout(fours_at_3_and_40()).build().unwrap();

    assert_eq!(game.activate_card(pos(3)).unwrap(), None);
    assert_eq!(game.phase(), TurnPhase::AwaitingSecondPick { first: pos(3) });

    let step = game.activate_card(pos(40)).unwrap().unwrap();
    assert_eq!(step.kind, StepKind::ResolveMatch);
    assert_eq!(game.player(HUMAN).score, 1);
    assert_eq!(game.board().status(pos(3)), Some(CardStatus::Matched));
    assert_eq!(game.board().status(pos(40)), Some(CardStatus::Matched));

    game.advance().unwrap();
    assert_eq!(game.current_player(), HUMAN);
    assert_eq!(game.phase(), TurnPhase::AwaitingFirstPick);

    let events = game.drain_events();
    assert!(events.contains(&GameEvent::PairMatched {
        player: HUMAN,
        first: pos(3),
        second: pos(40),
        rank: Rank::Four,
    }));
    assert!(events.contains(&GameEvent::CardsRemoved {
        first: pos(3),
        second: pos(40),
    }));
}

#[test]
fn test_human_mismatch_hides_and_passes_turn() {
    let mut game = GameBuilder::new(config()).layout(fours_at_3_and_40()).build().unwrap();

    game.activate_card(pos(3)).unwrap();
    let step = game.activate_card(pos(4)).unwrap().unwrap();
    assert_eq!(step.kind, StepKind::ResolveMismatch);
    assert_eq!(step.delay, TimingConfig::instant().mismatch_resolve());

    // Both stay face up until the step runs.
    assert_eq!(game.board().count(CardStatus::Revealed), 2);
    assert_eq!(game.player(HUMAN).score, 0);
    assert_eq!(game.current_player(), COMPUTER);

    // Clicks during the pause are refused.
    assert!(matches!(
        game.activate_card(pos(10)),
        Err(GameError::InvalidSelection(InvalidSelection::Locked))
    ));

    let step = game.advance().unwrap().unwrap();
    assert_eq!(step.kind, StepKind::ComputerTurn);
    assert_eq!(game.board().status(pos(3)), Some(CardStatus::Hidden));
    assert_eq!(game.board().status(pos(4)), Some(CardStatus::Hidden));
}

#[test]
fn test_repeat_click_on_first_pick_is_rejected() {
    let mut game = GameBuilder::new(config()).build().unwrap();

    game.activate_card(pos(8)).unwrap();
    assert!(matches!(
        game.activate_card(pos(8)),
        Err(GameError::InvalidSelection(InvalidSelection::SlotTaken(p))) if p == pos(8)
    ));
    assert_eq!(game.phase(), TurnPhase::AwaitingSecondPick { first: pos(8) });
}

#[test]
fn test_computer_plays_remembered_pair() {
    // Sevens at 5 and 19.
    let mut layout = standard_deck();
    layout.swap(5, 6);
    assert_eq!(layout[5].rank, Rank::Seven);
    assert_eq!(layout[19].rank, Rank::Seven);

    let mut memory = ComputerMemory::new();
    memory.observe(Rank::Seven, pos(5));
    memory.observe(Rank::Seven, pos(19));

    let config = config().with_players(vec![PlayerConfig::computer("Computer"), PlayerConfig::human("Player")]);
    let mut game = GameBuilder::new(config)
        .layout(layout)
        .computer_memory(memory)
        .build()
        .unwrap();

    assert_eq!(game.pending_step().map(|s| s.kind), Some(StepKind::ComputerTurn));
    // Human seat is 1 here; the computer holds the board.
    assert!(matches!(
        game.activate_card(pos(0)),
        Err(GameError::InvalidSelection(InvalidSelection::Locked))
    ));

    let step = game.advance().unwrap().unwrap();
    assert_eq!(step.kind, StepKind::ResolveMatch);
    assert_eq!(game.player(PlayerId::new(0)).score, 1);
    assert!(game.memory().is_empty());

    let last = game.history().last().unwrap();
    assert_eq!((last.first, last.second, last.matched), (pos(5), pos(19), true));

    // A match keeps the turn, so the computer goes again.
    let step = game.advance().unwrap().unwrap();
    assert_eq!(step.kind, StepKind::ComputerTurn);
}

#[test]
fn test_human_match_deletes_computer_entry() {
    // Standard order: sevens at 6, 19, 32 and 45.
    let layout = standard_deck();
    let mut memory = ComputerMemory::new();
    memory.observe(Rank::Seven, pos(6));
    memory.observe(Rank::Nine, pos(8));

    let mut game = GameBuilder::new(config())
        .layout(layout)
        .computer_memory(memory)
        .build()
        .unwrap();

    game.activate_card(pos(19)).unwrap();
    let step = game.activate_card(pos(32)).unwrap().unwrap();
    assert_eq!(step.kind, StepKind::ResolveMatch);

    // The remembered seven at 6 goes with the entry.
    assert!(game.memory().remembered(Rank::Seven).is_empty());
    assert!(!game.memory().knows(pos(6)));
    assert_eq!(game.memory().remembered(Rank::Nine), &[pos(8)]);
}

#[test]
fn test_full_game_ends_once() {
    for seed in [1, 2, 3] {
        let mut game = GameBuilder::new(config().with_seed(seed)).build().unwrap();
        let events = play_out(&mut game, seed + 100);

        let game_overs = events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);

        assert!(game.board().is_complete());
        let human = game.player(HUMAN).score;
        let computer = game.player(COMPUTER).score;
        assert_eq!(human + computer, 26);

        let expected = match human.cmp(&computer) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(HUMAN),
            std::cmp::Ordering::Less => GameOutcome::Winner(COMPUTER),
            std::cmp::Ordering::Equal => GameOutcome::Tie,
        };
        assert_eq!(game.outcome(), Some(expected));
        assert!(matches!(game.activate_card(pos(0)), Err(GameError::GameOver)));
    }
}

#[test]
fn test_even_split_is_a_tie() {
    let layout: Vec<Card> = [
        "2_heart", "2_spade", "3_heart", "3_spade", "4_heart", "4_spade", "5_heart", "5_spade", "6_heart",
        "6_spade", "7_heart", "7_spade",
    ]
    .iter()
    .map(|token| token.parse().unwrap())
    .collect();

    // The computer knows three pairs and misremembers 10 as a six.
    let mut memory = ComputerMemory::new();
    for (rank, a, b) in [(Rank::Three, 2, 3), (Rank::Four, 4, 5), (Rank::Five, 6, 7), (Rank::Six, 8, 10)] {
        memory.observe(rank, pos(a));
        memory.observe(rank, pos(b));
    }

    let mut game = GameBuilder::new(config())
        .layout(layout)
        .computer_memory(memory)
        .build()
        .unwrap();

    game.activate_card(pos(0)).unwrap();
    game.activate_card(pos(1)).unwrap();
    game.advance().unwrap();
    game.activate_card(pos(2)).unwrap();
    game.activate_card(pos(4)).unwrap();

    while game.pending_step().is_some() {
        game.advance().unwrap();
    }
    assert_eq!(game.player(COMPUTER).score, 3);
    assert_eq!(game.current_player(), HUMAN);

    for (a, b) in [(8, 9), (10, 11)] {
        game.activate_card(pos(a)).unwrap();
        game.activate_card(pos(b)).unwrap();
        game.advance().unwrap();
    }

    assert!(game.is_over());
    assert_eq!(game.player(HUMAN).score, 3);
    assert_eq!(game.outcome(), Some(GameOutcome::Tie));
    assert_eq!(game.winner_name(), None);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn every_game_completes_with_all_pairs_scored(deal in any::<u64>(), human in any::<u64>()) {
            let mut game = GameBuilder::new(config().with_seed(deal)).build().unwrap();
            let events = play_out(&mut game, human);

            prop_assert!(game.board().is_complete());
            prop_assert_eq!(game.player(HUMAN).score + game.player(COMPUTER).score, 26);
            prop_assert_eq!(
                events.iter().filter(|e| matches!(e, GameEvent::GameOver { .. })).count(),
                1
            );

            let record = game.record();
            prop_assert_eq!(record.pairs_taken(HUMAN) as u32, game.player(HUMAN).score);
            prop_assert!(game.memory().is_empty(), "matched cards are forgotten");
        }
    }
}
