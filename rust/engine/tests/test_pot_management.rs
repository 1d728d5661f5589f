use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use holdem_engine::config::TableConfig;
use holdem_engine::engine::Engine;
use holdem_engine::events::{EventLog, GameEvent};
use holdem_engine::player::PlayerAction;
use holdem_engine::rules::split_pot;

fn random_action(rng: &mut ChaCha8Rng) -> PlayerAction {
    match rng.random_range(0..20) {
        0 => PlayerAction::Fold,
        1 => PlayerAction::AllIn,
        2..=7 => PlayerAction::BetOrRaise(rng.random_range(0..=60)),
        _ => PlayerAction::CheckOrCall,
    }
}

#[test]
fn chips_are_conserved_across_random_play() {
    for seed in 0..40u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut eng = Engine::new();
        let mut cfg = TableConfig::new("Ann", "Bob", 100).with_seed(seed);
        if seed % 2 == 1 {
            cfg = cfg.with_blinds(1, 2);
        }
        eng.start_game(&cfg).unwrap();
        for _ in 0..400 {
            if eng.is_game_over() {
                break;
            }
            let seat = eng.state().unwrap().active_index().unwrap();
            match eng.act(seat, random_action(&mut rng)) {
                Ok(()) => {}
                Err(e) => assert!(!e.is_fatal(), "seed {}: fatal error {}", seed, e),
            }
            let gs = eng.state().unwrap();
            assert_eq!(gs.chips_in_play(), 200, "seed {}", seed);
            gs.check_conservation().unwrap();
        }
    }
}

#[test]
fn fold_pays_swept_pot_to_opponent() {
    let log = EventLog::new();
    let mut eng = Engine::new();
    eng.subscribe(log.clone());
    eng.start_game(&TableConfig::new("Ann", "Bob", 100).with_seed(21))
        .unwrap();
    eng.bet_or_raise(10).unwrap();
    eng.bet_or_raise(10).unwrap();
    eng.fold().unwrap();

    let gs = eng.state().unwrap();
    assert_eq!(gs.players()[0].stack(), 90);
    assert_eq!(gs.players()[1].stack(), 110);
    assert_eq!(gs.pot(), 0);
    let folded = log
        .events()
        .into_iter()
        .find(|e| matches!(e, GameEvent::Folded { .. }))
        .unwrap();
    assert_eq!(folded.message(), "Ann folded!\nBob wins the pot of 30.");
}

#[test]
fn fold_after_streets_pays_everything_committed() {
    let mut eng = Engine::new();
    eng.start_game(&TableConfig::new("Ann", "Bob", 100).with_seed(22))
        .unwrap();
    eng.bet_or_raise(5).unwrap();
    eng.check_or_call().unwrap();
    // flop
    eng.bet_or_raise(10).unwrap();
    eng.fold().unwrap();
    let gs = eng.state().unwrap();
    assert_eq!(gs.players()[0].stack(), 105);
    assert_eq!(gs.players()[1].stack(), 95);
}

#[test]
fn split_pot_shares_add_up() {
    for pot in 0..50 {
        for starter in 0..2 {
            let shares = split_pot(pot, starter);
            assert_eq!(shares[0] + shares[1], pot);
            assert!(shares[starter] >= shares[1 - starter]);
            assert!(shares[starter] - shares[1 - starter] <= 1);
        }
    }
}

#[test]
fn showdown_pays_the_whole_pot() {
    let log = EventLog::new();
    let mut eng = Engine::new();
    eng.subscribe(log.clone());
    eng.start_game(&TableConfig::new("Ann", "Bob", 100).with_seed(30))
        .unwrap();
    eng.bet_or_raise(20).unwrap();
    eng.check_or_call().unwrap();
    for _ in 0..6 {
        eng.check_or_call().unwrap();
    }
    let events = log.events();
    let (winner, pot, payouts) = events
        .iter()
        .find_map(|e| match e {
            GameEvent::Showdown {
                winner,
                pot,
                payouts,
                ..
            } => Some((*winner, *pot, *payouts)),
            _ => None,
        })
        .expect("showdown");
    assert_eq!(pot, 40);
    assert_eq!(payouts[0] + payouts[1], 40);
    let gs = eng.state().unwrap();
    match winner {
        Some(w) => {
            assert_eq!(gs.players()[w].stack(), 120);
            assert_eq!(gs.players()[1 - w].stack(), 80);
        }
        None => assert_eq!(payouts, [20, 20]),
    }
}

#[test]
fn tied_showdown_splits_the_pot_and_credits_both() {
    let log = EventLog::new();
    let mut eng = Engine::new();
    eng.subscribe(log.clone());
    eng.start_game(&TableConfig::new("Ann", "Bob", 100).with_seed(33))
        .unwrap();
    eng.bet_or_raise(5).unwrap();
    eng.check_or_call().unwrap();
    for _ in 0..6 {
        eng.check_or_call().unwrap();
    }
    let showdown = log
        .events()
        .into_iter()
        .find(|e| matches!(e, GameEvent::Showdown { .. }))
        .expect("showdown");
    match &showdown {
        GameEvent::Showdown {
            winner,
            pot,
            payouts,
            ..
        } => {
            assert_eq!(*winner, None);
            assert_eq!(*pot, 10);
            assert_eq!(*payouts, [5, 5]);
        }
        _ => unreachable!(),
    }
    assert!(showdown
        .message()
        .ends_with("The pot of 10 is split between the players."));

    let gs = eng.state().unwrap();
    for p in gs.players() {
        assert_eq!(p.stack(), 100);
        assert_eq!(p.wins(), 1);
    }
    assert_eq!(gs.round(), 2);
}
