use holdem_engine::config::TableConfig;
use holdem_engine::engine::Engine;
use holdem_engine::errors::{GameError, Rejection};
use holdem_engine::events::{EventLog, GameEvent};
use holdem_engine::game::Street;
use holdem_engine::player::PlayerAction;

fn started(seed: u64) -> (Engine, EventLog) {
    let log = EventLog::new();
    let mut eng = Engine::new();
    eng.subscribe(log.clone());
    eng.start_game(&TableConfig::new("Ann", "Bob", 100).with_seed(seed))
        .unwrap();
    (eng, log)
}

#[test]
fn start_announces_the_round() {
    let (_eng, log) = started(1);
    assert_eq!(
        log.events(),
        vec![GameEvent::RoundStarted {
            round: 1,
            starter: 0,
            starter_name: "Ann".into()
        }]
    );
}

#[test]
fn check_check_deals_the_flop() {
    let (mut eng, log) = started(1);
    log.drain();
    eng.check_or_call().unwrap();
    assert_eq!(eng.state().unwrap().active_index(), Some(1));
    assert!(eng.state().unwrap().board().is_empty());
    eng.check_or_call().unwrap();

    let gs = eng.state().unwrap();
    assert_eq!(gs.board().len(), 3);
    assert_eq!(gs.street(), Street::Flop);
    assert_eq!(gs.active_index(), Some(0), "starter acts first on every street");

    let events = log.drain();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].message(), "Ann checked");
    assert_eq!(events[1].message(), "Bob checked");
    match &events[2] {
        GameEvent::CardsDealt { street, cards } => {
            assert_eq!(*street, Street::Flop);
            assert_eq!(cards.as_slice(), gs.board());
        }
        other => panic!("expected flop, got {:?}", other),
    }
}

#[test]
fn bet_raise_call_closes_the_street() {
    let (mut eng, log) = started(3);
    log.drain();
    eng.bet_or_raise(10).unwrap();
    eng.bet_or_raise(20).unwrap();
    {
        let gs = eng.state().unwrap();
        assert_eq!(gs.players()[1].current_bet(), 30);
        assert_eq!(gs.active_index(), Some(0));
    }
    eng.check_or_call().unwrap();

    let gs = eng.state().unwrap();
    assert_eq!(gs.pot(), 60);
    assert_eq!(gs.players()[0].stack(), 70);
    assert_eq!(gs.players()[1].stack(), 70);
    assert_eq!(gs.street(), Street::Flop);

    let events = log.drain();
    assert_eq!(
        events[0],
        GameEvent::Bet {
            player: 0,
            name: "Ann".into(),
            amount: 10
        }
    );
    assert_eq!(
        events[1],
        GameEvent::Raised {
            player: 1,
            name: "Bob".into(),
            opponent: "Ann".into(),
            raise: 20,
            amount: 30
        }
    );
    assert_eq!(events[1].message(), "Bob called Ann and raised them 20");
    assert_eq!(
        events[2],
        GameEvent::Called {
            player: 0,
            name: "Ann".into(),
            opponent: "Bob".into(),
            amount: 20
        }
    );
}

#[test]
fn checked_down_round_goes_to_showdown_and_rotates_starter() {
    let (mut eng, log) = started(4);
    for _ in 0..8 {
        eng.check_or_call().unwrap();
    }
    let events = log.events();
    let showdown = events
        .iter()
        .find(|e| matches!(e, GameEvent::Showdown { .. }))
        .expect("showdown after the river");
    if let GameEvent::Showdown { pot, payouts, .. } = showdown {
        assert_eq!(*pot, 0);
        assert_eq!(payouts.iter().sum::<u32>(), 0);
    }
    assert!(events.contains(&GameEvent::RoundEnded { round: 1 }));
    assert_eq!(
        events.last(),
        Some(&GameEvent::RoundStarted {
            round: 2,
            starter: 1,
            starter_name: "Bob".into()
        })
    );
    let gs = eng.state().unwrap();
    assert_eq!(gs.round(), 2);
    assert_eq!(gs.active_index(), Some(1));
    assert!(gs.players()[1].is_round_starter());
    assert!(gs.board().is_empty());
    assert_eq!(gs.deck().remaining(), 48);
}

#[test]
fn bet_over_stack_is_rejected_without_changes() {
    let (mut eng, log) = started(6);
    log.drain();
    let err = eng.bet_or_raise(150).unwrap_err();
    assert!(matches!(
        err,
        GameError::Rejected(Rejection::InsufficientChips { wanted: 150, stack: 100 })
    ));
    assert!(!err.is_fatal());

    let gs = eng.state().unwrap();
    assert_eq!(gs.players()[0].stack(), 100);
    assert_eq!(gs.players()[0].current_bet(), 0);
    assert_eq!(gs.active_index(), Some(0));

    let events = log.drain();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].message(),
        "You don't have enough money!\nTry a smaller bet!"
    );
}

#[test]
fn betting_the_whole_stack_asks_for_all_in() {
    let (mut eng, _log) = started(6);
    let err = eng.bet_or_raise(100).unwrap_err();
    assert_eq!(err.rejection(), Some(&Rejection::UseAllIn { amount: 100 }));
    let err = eng.bet_or_raise_text("").unwrap_err();
    assert_eq!(err.rejection(), Some(&Rejection::ZeroBet));
    let err = eng.bet_or_raise_text("lots").unwrap_err();
    assert!(matches!(err.rejection(), Some(Rejection::InvalidAmount(_))));
    eng.bet_or_raise_text(" 12 ").unwrap();
    assert_eq!(eng.state().unwrap().players()[0].current_bet(), 12);
}

#[test]
fn out_of_turn_action_is_rejected() {
    let (mut eng, log) = started(7);
    log.drain();
    let err = eng.act(1, PlayerAction::CheckOrCall).unwrap_err();
    assert_eq!(
        err,
        GameError::Rejected(Rejection::NotPlayersTurn {
            expected: 0,
            actual: 1
        })
    );
    assert!(matches!(
        log.drain().as_slice(),
        [GameEvent::ActionRejected { player: 1, .. }]
    ));
    eng.act(0, PlayerAction::BetOrRaise(5)).unwrap();
    eng.act(1, PlayerAction::CheckOrCall).unwrap();
    assert_eq!(eng.state().unwrap().pot(), 10);
}

#[test]
fn blinds_are_posted_and_called() {
    let log = EventLog::new();
    let mut eng = Engine::new();
    eng.subscribe(log.clone());
    eng.start_game(
        &TableConfig::new("Ann", "Bob", 100)
            .with_blinds(5, 10)
            .with_seed(11),
    )
    .unwrap();
    let events = log.drain();
    assert_eq!(events.len(), 3);
    assert_eq!(events[1].message(), "Ann posts 5");
    assert_eq!(events[2].message(), "Bob posts 10");

    let gs = eng.state().unwrap();
    assert_eq!(gs.total_pot(), 15);
    assert_eq!(gs.active_index(), Some(0));
    eng.check_or_call().unwrap();
    let gs = eng.state().unwrap();
    assert_eq!(gs.pot(), 20);
    assert_eq!(gs.street(), Street::Flop);
    gs.check_conservation().unwrap();
}

#[test]
fn listener_closures_receive_events() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let count = Rc::new(RefCell::new(0));
    let seen = Rc::clone(&count);
    let mut eng = Engine::new();
    eng.subscribe(move |_: &GameEvent| *seen.borrow_mut() += 1);
    eng.start_game(&TableConfig::default().with_seed(1)).unwrap();
    eng.check_or_call().unwrap();
    assert_eq!(*count.borrow(), 2);
}
