//! Match engine integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use pairs::kind::{DIAMONDS, HEARTS, STAR};
use pairs::{
    Card, ConfigError, ErrorKind, GameError, GameOptions, GameState, MatchEngine, MoveRejection,
    RevealOutcome, ScoreCalculator, StandardScoreCalculator,
};

fn engine(rows: usize, columns: usize) -> MatchEngine {
    let options = GameOptions::default()
        .with_rows(rows)
        .with_columns(columns)
        .with_kinds([&HEARTS, &DIAMONDS]);
    let mut engine = MatchEngine::new(options, 7).unwrap();
    engine.start_game().unwrap();
    engine
}

/// Position ids of each pair, ordered by pair value.
fn pairs(engine: &MatchEngine) -> Vec<(String, String)> {
    let mut cards: Vec<&Card> = engine.board().cards().collect();
    cards.sort_by_key(|c| c.value());
    cards
        .chunks(2)
        .map(|pair| (pair[0].id().to_owned(), pair[1].id().to_owned()))
        .collect()
}

fn card<'a>(engine: &'a MatchEngine, position: &str) -> &'a Card {
    engine.board().try_get_card(position).unwrap()
}

#[test]
fn start_game_deals_fresh_board() {
    let engine = engine(2, 2);

    assert_eq!(engine.state(), GameState::PLAYING);
    assert!(engine.revealed_cards().is_empty());
    assert!(engine.can_reveal_more_cards());

    let stats = engine.game_stats();
    assert_eq!(stats.total_cards, 4);
    assert_eq!(stats.matched_cards, 0);
    assert_eq!(stats.remaining_pairs, 2);
    assert_eq!(stats.score, 0);
    assert_eq!(stats.attempts, 0);
    assert_eq!(stats.matches, 0);

    let ids: Vec<&str> = engine.board().cards().map(Card::id).collect();
    assert_eq!(ids, ["0_0", "0_1", "1_0", "1_1"]);

    let mut values: Vec<u32> = engine.board().cards().map(Card::value).collect();
    values.sort_unstable();
    assert_eq!(values, [1, 1, 2, 2]);
    for c in engine.board().cards() {
        let expected = if c.value() == 1 { &HEARTS } else { &DIAMONDS };
        assert_eq!(c.kind(), expected);
    }
}

#[test]
fn new_rejects_unplayable_options() {
    let options = GameOptions::default().with_rows(3).with_columns(3);
    let err = MatchEngine::new(options, 1).unwrap_err();
    assert_eq!(err, GameError::Configuration(ConfigError::OddCellCount(9)));
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(!err.is_recoverable());
}

#[test]
fn new_rejects_overflowing_grid() {
    let options = GameOptions::default()
        .with_rows(usize::MAX)
        .with_columns(2);
    let err = MatchEngine::new(options, 1).unwrap_err();
    assert_eq!(
        err,
        GameError::Configuration(ConfigError::GridTooLarge {
            rows: usize::MAX,
            columns: 2,
        })
    );
}

#[test]
fn reveal_before_start_is_rejected() {
    let options = GameOptions::default().with_rows(2).with_columns(2);
    let mut engine = MatchEngine::new(options, 1).unwrap();

    let errors = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&errors);
    engine.on_error(move |err| sink.borrow_mut().push(err.kind()));

    let err = engine.reveal_card("0_0").unwrap_err();
    assert_eq!(
        err,
        GameError::GameStateViolation {
            expected: GameState::PLAYING,
            actual: GameState::READY,
        }
    );
    assert!(err.is_recoverable());
    assert_eq!(*errors.borrow(), [ErrorKind::GameStateViolation]);
}

#[test]
fn reveal_while_paused_leaves_card_untouched() {
    let mut engine = engine(2, 2);
    engine.pause().unwrap();

    let err = engine.reveal_card("0_0").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::GameStateViolation);
    assert!(!card(&engine, "0_0").is_revealed());

    engine.resume().unwrap();
    assert_eq!(engine.reveal_card("0_0").unwrap(), RevealOutcome::Revealed);
}

#[test]
fn reveal_unknown_position_is_rejected() {
    let mut engine = engine(2, 2);
    let err = engine.reveal_card("9_9").unwrap_err();
    assert_eq!(
        err,
        GameError::CardNotFound {
            position: "9_9".into()
        }
    );
    assert!(engine.revealed_cards().is_empty());
}

#[test]
fn revealing_same_card_twice_is_rejected() {
    let mut engine = engine(2, 2);
    engine.reveal_card("0_0").unwrap();

    let err = engine.reveal_card("0_0").unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidMove {
            position: "0_0".into(),
            reason: MoveRejection::AlreadyRevealed,
        }
    );
    assert_eq!(engine.revealed_cards(), ["0_0"]);
}

#[test]
fn mismatch_stays_revealed_until_cleared() {
    let mut engine = engine(2, 2);
    let pairs = pairs(&engine);
    let (a, b) = (&pairs[0].0, &pairs[1].0);

    assert_eq!(engine.reveal_card(a).unwrap(), RevealOutcome::Revealed);
    assert_eq!(engine.reveal_card(b).unwrap(), RevealOutcome::Mismatched);

    assert!(card(&engine, a).is_revealed());
    assert!(!card(&engine, a).is_matched());
    assert!(card(&engine, b).is_revealed());
    assert_eq!(engine.player().attempts(), 1);
    assert_eq!(engine.player().score(), 0);
    assert_eq!(engine.revealed_cards().len(), 2);
    assert!(!engine.can_reveal_more_cards());

    let third = &pairs[0].1;
    let err = engine.reveal_card(third).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidMove {
            position: third.clone(),
            reason: MoveRejection::RevealLimitReached,
        }
    );
    assert!(!card(&engine, third).is_revealed());

    let cleared = engine.clear_revealed_cards();
    assert_eq!(cleared, [a.clone(), b.clone()]);
    assert!(engine.can_reveal_more_cards());
    assert!(card(&engine, a).is_revealed());

    engine.hide_card(a).unwrap();
    engine.hide_card(b).unwrap();
    assert!(!card(&engine, a).is_revealed());
    assert!(!card(&engine, b).is_revealed());
}

#[test]
fn clear_and_hide_flips_mismatch_back() {
    let mut engine = engine(2, 2);
    let pairs = pairs(&engine);
    let (a, b) = (&pairs[0].0, &pairs[1].1);

    engine.reveal_card(a).unwrap();
    engine.reveal_card(b).unwrap();
    engine.clear_and_hide();

    assert!(engine.revealed_cards().is_empty());
    assert!(!card(&engine, a).is_revealed());
    assert!(!card(&engine, b).is_revealed());

    assert_eq!(engine.reveal_card(a).unwrap(), RevealOutcome::Revealed);
}

#[test]
fn matching_pair_scores_and_clears_buffer() {
    let mut engine = engine(2, 4);
    let pairs = pairs(&engine);
    let (a, b) = &pairs[0];

    let scores = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&scores);
    engine.on_score_changed(move |score| sink.borrow_mut().push(score));

    engine.reveal_card(a).unwrap();
    let outcome = engine.reveal_card(b).unwrap();

    let expected = StandardScoreCalculator.score(card(&engine, a), 1);
    assert_eq!(outcome, RevealOutcome::Matched { points: expected });
    assert_eq!(engine.player().score(), expected);
    assert_eq!(engine.player().attempts(), 1);
    assert_eq!(engine.player().matches(), 1);
    assert!(card(&engine, a).is_matched());
    assert!(card(&engine, b).is_matched());
    assert!(engine.revealed_cards().is_empty());
    assert_eq!(engine.matched_cards().len(), 2);
    assert_eq!(engine.game_stats().matched_cards, 2);
    assert_eq!(*scores.borrow(), [expected]);
    assert_eq!(engine.state(), GameState::PLAYING);

    let err = engine.reveal_card(a).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidMove {
            position: a.clone(),
            reason: MoveRejection::AlreadyMatched,
        }
    );
}

#[test]
fn score_uses_attempt_count_after_increment() {
    let mut engine = engine(2, 4);
    let pairs = pairs(&engine);

    // Three misses, then a hit on the fourth attempt.
    for _ in 0..3 {
        engine.reveal_card(&pairs[0].0).unwrap();
        engine.reveal_card(&pairs[1].0).unwrap();
        engine.clear_and_hide();
    }
    engine.reveal_card(&pairs[2].0).unwrap();
    let outcome = engine.reveal_card(&pairs[2].1).unwrap();

    assert_eq!(engine.player().attempts(), 4);
    assert_eq!(outcome, RevealOutcome::Matched { points: 5 });
    assert!((engine.game_stats().accuracy - 25.0).abs() < f64::EPSILON);
}

#[test]
fn victory_only_after_last_pair() {
    let mut engine = engine(2, 2);
    let pairs = pairs(&engine);

    let states = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&states);
    engine.on_state_changed(move |state| sink.borrow_mut().push(state));

    engine.reveal_card(&pairs[0].0).unwrap();
    engine.reveal_card(&pairs[0].1).unwrap();
    assert_eq!(engine.state(), GameState::PLAYING);
    assert!(states.borrow().is_empty());

    engine.reveal_card(&pairs[1].0).unwrap();
    engine.reveal_card(&pairs[1].1).unwrap();
    let state = engine.state();
    assert!(state.is_over());
    assert!(state.is_victory());
    assert_eq!(*states.borrow(), [GameState::GAME_OVER | GameState::VICTORY]);

    let stats = engine.game_stats();
    assert_eq!(stats.remaining_pairs, 0);
    assert_eq!(stats.matches, 2);
    assert!(engine.board().cards().all(Card::is_locked));
}

#[test]
fn events_fire_in_order() {
    let mut engine = engine(2, 2);
    let pairs = pairs(&engine);

    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    engine.on_score_changed(move |score| sink.borrow_mut().push(format!("score {score}")));
    let sink = Rc::clone(&log);
    engine.on_match_attempt(move |_, _, matched| sink.borrow_mut().push(format!("attempt {matched}")));
    let sink = Rc::clone(&log);
    engine.on_state_changed(move |state| sink.borrow_mut().push(format!("state {state}")));

    engine.reveal_card(&pairs[0].0).unwrap();
    engine.reveal_card(&pairs[1].0).unwrap();
    engine.clear_and_hide();
    engine.reveal_card(&pairs[0].0).unwrap();
    engine.reveal_card(&pairs[0].1).unwrap();
    engine.reveal_card(&pairs[1].0).unwrap();
    engine.reveal_card(&pairs[1].1).unwrap();

    assert_eq!(
        *log.borrow(),
        [
            "attempt false",
            "score 10",
            "attempt true",
            "score 20",
            "attempt true",
            "state GameOver | Victory",
        ]
    );
}

#[test]
fn match_listener_sees_matched_cards() {
    let mut engine = engine(2, 2);
    let pairs = pairs(&engine);

    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    engine.on_match_attempt(move |a, b, matched| {
        *sink.borrow_mut() = Some((a.is_matched(), b.is_matched(), matched, a == b));
    });

    engine.reveal_card(&pairs[0].0).unwrap();
    engine.reveal_card(&pairs[0].1).unwrap();
    assert_eq!(*seen.borrow(), Some((true, true, true, true)));
}

#[test]
fn unsubscribed_listener_stays_silent() {
    let mut engine = engine(2, 2);
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let id = engine.on_error(move |_| *sink.borrow_mut() += 1);

    engine.reveal_card("x").unwrap_err();
    assert!(engine.unsubscribe(id));
    assert!(!engine.unsubscribe(id));
    engine.reveal_card("x").unwrap_err();

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn start_game_resets_progress() {
    let mut engine = engine(2, 4);
    let pairs = pairs(&engine);
    engine.reveal_card(&pairs[0].0).unwrap();
    engine.reveal_card(&pairs[0].1).unwrap();
    engine.reveal_card(&pairs[1].0).unwrap();
    engine.update(2.0);

    engine.start_game().unwrap();

    assert_eq!(engine.state(), GameState::PLAYING);
    assert!(engine.revealed_cards().is_empty());
    assert!(engine.matched_cards().is_empty());
    assert!(engine.most_valuable_matched_card().is_none());
    assert!(engine.board().cards().all(|c| c.flags().bits() == 0));
    let stats = engine.game_stats();
    assert_eq!(stats.score, 0);
    assert_eq!(stats.attempts, 0);
    assert_eq!(stats.matches, 0);
    assert!(stats.elapsed.abs() < f32::EPSILON);
}

#[test]
fn most_valuable_matched_card_has_highest_value() {
    let mut engine = engine(2, 4);
    let pairs = pairs(&engine);

    assert!(engine.most_valuable_matched_card().is_none());
    for index in [2, 0] {
        engine.reveal_card(&pairs[index].0).unwrap();
        engine.reveal_card(&pairs[index].1).unwrap();
    }

    assert_eq!(engine.most_valuable_matched_card().unwrap().value(), 3);
}

#[test]
fn play_time_only_advances_while_playing() {
    let mut engine = engine(2, 2);
    engine.update(1.0);
    engine.pause().unwrap();
    engine.update(5.0);
    assert!(engine.pause().is_err());
    engine.resume().unwrap();
    engine.update(0.5);

    assert!((engine.game_stats().elapsed - 1.5).abs() < f32::EPSILON);
}

#[test]
fn end_game_finishes_without_victory() {
    let mut engine = engine(2, 2);
    engine.end_game().unwrap();

    let state = engine.state();
    assert!(state.is_over());
    assert!(!state.is_victory());
    assert_eq!(
        engine.reveal_card("0_0").unwrap_err().kind(),
        ErrorKind::GameStateViolation
    );
    assert!(engine.end_game().is_err());
}

struct FlatScore;

impl ScoreCalculator for FlatScore {
    fn score(&self, _card: &Card, _attempts: u32) -> u32 {
        100
    }
}

#[test]
fn custom_calculator_is_used() {
    let options = GameOptions::default()
        .with_rows(2)
        .with_columns(2)
        .with_kinds([&STAR]);
    let mut engine = MatchEngine::with_calculator(options, 3, Box::new(FlatScore)).unwrap();
    engine.start_game().unwrap();
    let pairs = pairs(&engine);

    engine.reveal_card(&pairs[1].0).unwrap();
    let outcome = engine.reveal_card(&pairs[1].1).unwrap();

    assert_eq!(outcome, RevealOutcome::Matched { points: 100 });
    assert_eq!(engine.player().score(), 100);
}

#[test]
fn same_seed_deals_same_layout() {
    let layout = |seed| {
        let mut engine = MatchEngine::new(GameOptions::default(), seed).unwrap();
        engine.start_game().unwrap();
        engine
            .board()
            .cards()
            .map(|c| (c.kind().id(), c.value()))
            .collect::<Vec<_>>()
    };

    assert_eq!(layout(11), layout(11));
}

#[test]
fn hiding_a_buffered_card_drops_it_from_the_buffer() {
    let mut engine = engine(2, 2);
    let pairs = pairs(&engine);
    let (a, partner) = &pairs[0];

    engine.reveal_card(a).unwrap();
    engine.hide_card(a).unwrap();
    assert!(engine.revealed_cards().is_empty());
    assert!(!card(&engine, a).is_revealed());

    // Revealing it again starts a fresh pair rather than pairing with itself.
    assert_eq!(engine.reveal_card(a).unwrap(), RevealOutcome::Revealed);
    assert_eq!(engine.revealed_cards(), [a.as_str()]);
    assert_eq!(engine.player().attempts(), 0);
    assert_eq!(engine.player().score(), 0);

    engine.reveal_card(partner).unwrap();
    engine.reveal_card(&pairs[1].0).unwrap();
    engine.reveal_card(&pairs[1].1).unwrap();
    assert!(engine.state().is_victory());
    assert_eq!(engine.game_stats().remaining_pairs, 0);
}

#[test]
fn clear_and_hide_with_one_card_then_reveal_again() {
    let mut engine = engine(2, 2);
    let pairs = pairs(&engine);
    let a = &pairs[0].0;

    engine.reveal_card(a).unwrap();
    engine.clear_and_hide();
    assert!(engine.revealed_cards().is_empty());

    assert_eq!(engine.reveal_card(a).unwrap(), RevealOutcome::Revealed);
    assert_eq!(engine.revealed_cards(), [a.as_str()]);
    assert!(engine.matched_cards().is_empty());
}

#[test]
fn buffer_never_holds_duplicate_positions() {
    let mut engine = engine(2, 2);
    let pairs = pairs(&engine);
    let a = &pairs[0].0;

    engine.reveal_card(a).unwrap();
    engine.clear_revealed_cards();
    // The card is still face up, so it cannot enter the buffer twice.
    let err = engine.reveal_card(a).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidMove {
            position: a.clone(),
            reason: MoveRejection::AlreadyRevealed,
        }
    );
    assert!(engine.revealed_cards().is_empty());

    engine.reveal_card(&pairs[1].0).unwrap();
    assert_eq!(
        engine.reveal_card(&pairs[1].0).unwrap_err().kind(),
        ErrorKind::InvalidMove
    );
    assert_eq!(engine.revealed_cards().len(), 1);
    assert_eq!(engine.player().attempts(), 0);
}

#[test]
fn hide_card_requires_playing_state() {
    let mut engine = engine(2, 2);
    engine.reveal_card("0_0").unwrap();
    engine.pause().unwrap();

    assert_eq!(
        engine.hide_card("0_0").unwrap_err(),
        GameError::GameStateViolation {
            expected: GameState::PLAYING,
            actual: GameState::PAUSED,
        }
    );
    assert!(card(&engine, "0_0").is_revealed());

    engine.resume().unwrap();
    engine.hide_card("0_0").unwrap();
    assert!(!card(&engine, "0_0").is_revealed());
}
