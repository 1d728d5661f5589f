use holdem_engine::config::TableConfig;
use holdem_engine::engine::Engine;
use holdem_engine::errors::{GameError, Rejection};
use holdem_engine::player::PlayerState;
use holdem_engine::rules::{parse_amount, split_pot, validate_all_in, validate_bet_or_raise};

fn seat(stack: u32) -> PlayerState {
    PlayerState::new("p", stack)
}

#[test]
fn bet_zero_is_invalid() {
    let err = validate_bet_or_raise(&seat(100), &seat(100), 0).unwrap_err();
    assert_eq!(err, Rejection::ZeroBet);
}

#[test]
fn zero_raise_facing_a_bet_is_invalid() {
    let mut eng = Engine::new();
    eng.start_game(&TableConfig::new("Ann", "Bob", 100).with_seed(3))
        .unwrap();
    eng.bet_or_raise(10).unwrap();
    let err = eng.bet_or_raise(0).unwrap_err();
    assert_eq!(err, GameError::Rejected(Rejection::ZeroBet));
    let gs = eng.state().unwrap();
    assert_eq!(gs.players()[1].current_bet(), 0);
    assert_eq!(gs.players()[1].stack(), 100);
    assert_eq!(gs.active_index(), Some(1));
    eng.check_or_call().unwrap();
    assert_eq!(eng.state().unwrap().total_pot(), 20);
}

#[test]
fn bet_over_stack_is_rejected() {
    let err = validate_bet_or_raise(&seat(50), &seat(100), 60).unwrap_err();
    assert!(matches!(err, Rejection::InsufficientChips { wanted: 60, stack: 50 }));
}

#[test]
fn bet_of_whole_stack_must_be_all_in() {
    let err = validate_bet_or_raise(&seat(50), &seat(100), 50).unwrap_err();
    assert_eq!(err, Rejection::UseAllIn { amount: 50 });
}

#[test]
fn bet_beyond_opponent_is_rejected() {
    let err = validate_bet_or_raise(&seat(100), &seat(30), 40).unwrap_err();
    assert!(matches!(err, Rejection::ExceedsOpponent { wanted: 40, limit: 30 }));
    assert_eq!(validate_bet_or_raise(&seat(100), &seat(30), 30), Ok(30));
}

#[test]
fn all_in_cannot_exceed_opponent_total() {
    let err = validate_all_in(&seat(150), &seat(100)).unwrap_err();
    assert!(matches!(err, Rejection::AllInExceedsOpponent { total: 150, limit: 100 }));
    assert_eq!(validate_all_in(&seat(80), &seat(100)), Ok(80));
    assert_eq!(validate_all_in(&seat(100), &seat(100)), Ok(100));
}

#[test]
fn amount_text_parsing() {
    assert_eq!(parse_amount("40"), Ok(40));
    assert_eq!(parse_amount("   "), Err(Rejection::ZeroBet));
    assert!(matches!(parse_amount("-5"), Err(Rejection::InvalidAmount(_))));
    assert!(matches!(parse_amount("4.5"), Err(Rejection::InvalidAmount(_))));
}

#[test]
fn odd_chip_goes_to_starter() {
    assert_eq!(split_pot(0, 0), [0, 0]);
    assert_eq!(split_pot(7, 0), [4, 3]);
    assert_eq!(split_pot(7, 1), [3, 4]);
    let [a, b] = split_pot(101, 0);
    assert_eq!(a + b, 101);
}
