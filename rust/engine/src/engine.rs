use std::cmp::Ordering;

use crate::cards::Card;
use crate::config::TableConfig;
use crate::deck::Deck;
use crate::errors::{GameError, Rejection};
use crate::events::{EventBus, EventListener, GameEvent};
use crate::game::{GameState, Phase, Street};
use crate::hand::evaluate_with_board;
use crate::player::{PlayerAction, PlayerState};
use crate::rules::{
    call_amount, parse_amount, split_pot, validate_all_in, validate_bet_or_raise, Blinds,
};
use crate::table::CardContainer;

/// Heads-up hold'em state machine.
///
/// Every command runs to a consistent stopping point before it returns,
/// including a street advance, a run-out to the river and the showdown that
/// follows. Listeners are told about each change as it happens.
///
/// # Examples
///
/// ```
/// use holdem_engine::config::TableConfig;
/// use holdem_engine::engine::Engine;
/// use holdem_engine::events::EventLog;
///
/// let log = EventLog::new();
/// let mut engine = Engine::new();
/// engine.subscribe(log.clone());
/// engine.start_game(&TableConfig::new("Ann", "Bob", 100).with_seed(7)).unwrap();
///
/// // Ann starts: check, Bob checks behind and the flop comes.
/// engine.check_or_call().unwrap();
/// engine.check_or_call().unwrap();
/// assert_eq!(engine.state().unwrap().board().len(), 3);
///
/// // Betting more than you have is refused and changes nothing.
/// assert!(engine.bet_or_raise(500).is_err());
/// assert_eq!(engine.state().unwrap().chips_in_play(), 200);
/// ```
#[derive(Debug, Default)]
pub struct Engine {
    game: Option<GameState>,
    blinds: Option<Blinds>,
    bus: EventBus,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener. Subscribe before [`Engine::start_game`] to see the
    /// first deal.
    pub fn subscribe(&mut self, listener: impl EventListener + 'static) {
        self.bus.subscribe(Box::new(listener));
    }

    /// Seats both players with equal stacks and deals the first round.
    /// Player 0 starts and acts first.
    pub fn start_game(&mut self, config: &TableConfig) -> Result<(), GameError> {
        config.validate()?;
        let deck = match config.seed {
            Some(seed) => Deck::new_with_seed(seed),
            None => Deck::new_standard(),
        };
        let [n0, n1] = config.player_names.clone();
        let mut players = [
            PlayerState::new(n0, config.starting_stack),
            PlayerState::new(n1, config.starting_stack),
        ];
        players[0].set_round_starter(true);
        self.blinds = config.blinds;
        self.game = Some(GameState::new(players, deck));
        tracing::info!(
            stack = config.starting_stack,
            seed = ?config.seed,
            blinds = ?config.blinds,
            "game started"
        );
        let mut round = self.round()?;
        round.start_round()?;
        round.game.check_conservation()
    }

    pub fn state(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.as_ref().is_some_and(GameState::is_game_over)
    }

    pub fn winner(&self) -> Option<&PlayerState> {
        let game = self.game.as_ref()?;
        match game.phase() {
            Phase::GameOver { winner } => game.player(winner),
            Phase::Betting => None,
        }
    }

    pub fn active_player(&self) -> Option<&PlayerState> {
        let game = self.game.as_ref()?;
        game.player(game.active_index()?)
    }

    pub fn check_or_call(&mut self) -> Result<(), GameError> {
        self.dispatch(None, PlayerAction::CheckOrCall)
    }

    /// Raises `amount` above the opponent's current bet.
    pub fn bet_or_raise(&mut self, amount: u32) -> Result<(), GameError> {
        self.dispatch(None, PlayerAction::BetOrRaise(amount))
    }

    /// Same as [`Engine::bet_or_raise`] with the amount as typed by a user.
    pub fn bet_or_raise_text(&mut self, amount: &str) -> Result<(), GameError> {
        let game = self.game.as_ref().ok_or(GameError::NotStarted)?;
        match parse_amount(amount) {
            Ok(v) => self.bet_or_raise(v),
            Err(r) => {
                let seat = game.active_index().unwrap_or_default();
                Err(self.reject(seat, r))
            }
        }
    }

    pub fn fold(&mut self) -> Result<(), GameError> {
        self.dispatch(None, PlayerAction::Fold)
    }

    pub fn all_in(&mut self) -> Result<(), GameError> {
        self.dispatch(None, PlayerAction::AllIn)
    }

    /// Applies `action` for `seat`, refusing it when it is not that seat's turn.
    pub fn act(&mut self, seat: usize, action: PlayerAction) -> Result<(), GameError> {
        self.dispatch(Some(seat), action)
    }

    fn round(&mut self) -> Result<Round<'_>, GameError> {
        let game = self.game.as_mut().ok_or(GameError::NotStarted)?;
        Ok(Round {
            game,
            bus: &mut self.bus,
            blinds: self.blinds,
        })
    }

    fn dispatch(&mut self, seat: Option<usize>, action: PlayerAction) -> Result<(), GameError> {
        let mut round = self.round()?;
        let actor = seat
            .or_else(|| round.game.active_index())
            .unwrap_or_default();
        match round.apply(seat, &action) {
            Err(GameError::Rejected(r)) => Err(self.reject(actor, r)),
            Err(e) => {
                tracing::error!(error = %e, action = ?action, "engine invariant broken");
                Err(e)
            }
            Ok(()) => {
                let game = round.game;
                tracing::debug!(
                    action = ?action,
                    pot = game.total_pot(),
                    street = ?game.street(),
                    "action applied"
                );
                game.check_conservation()
            }
        }
    }

    fn reject(&mut self, seat: usize, rejection: Rejection) -> GameError {
        tracing::warn!(seat, reason = ?rejection, "action rejected");
        self.bus.emit(GameEvent::ActionRejected {
            player: seat,
            message: rejection.to_string(),
        });
        GameError::Rejected(rejection)
    }
}

/// Mutable view over the game plus the event channel for one command.
struct Round<'a> {
    game: &'a mut GameState,
    bus: &'a mut EventBus,
    blinds: Option<Blinds>,
}

impl Round<'_> {
    fn apply(&mut self, seat: Option<usize>, action: &PlayerAction) -> Result<(), GameError> {
        if self.game.is_game_over() {
            return Err(Rejection::GameOver.into());
        }
        let active = self
            .game
            .active_index()
            .ok_or_else(|| GameError::Invariant("no player is active".into()))?;
        if let Some(s) = seat {
            if s != active {
                return Err(Rejection::NotPlayersTurn {
                    expected: active,
                    actual: s,
                }
                .into());
            }
        }
        match *action {
            PlayerAction::CheckOrCall => self.check_or_call(active),
            PlayerAction::BetOrRaise(amount) => self.bet_or_raise(active, amount),
            PlayerAction::Fold => self.fold(active),
            PlayerAction::AllIn => self.all_in(active),
        }
    }

    fn name(&self, seat: usize) -> String {
        self.game.players[seat].name().to_string()
    }

    fn check_or_call(&mut self, a: usize) -> Result<(), GameError> {
        let o = 1 - a;
        let (mine, theirs) = (
            self.game.players[a].current_bet(),
            self.game.players[o].current_bet(),
        );
        match mine.cmp(&theirs) {
            Ordering::Equal => {
                self.bus.emit(GameEvent::Checked {
                    player: a,
                    name: self.name(a),
                });
                // the starter's check leaves the street open for the reply
                if self.game.players[a].is_round_starter() {
                    self.game.set_turn(o);
                    Ok(())
                } else {
                    self.advance_street()
                }
            }
            Ordering::Less => {
                let amount = call_amount(&self.game.players[a], &self.game.players[o]);
                self.game.players[a].commit(amount)?;
                self.bus.emit(GameEvent::Called {
                    player: a,
                    name: self.name(a),
                    opponent: self.name(o),
                    amount,
                });
                if self.game.players[a].stack() == 0 || self.game.players[o].stack() == 0 {
                    self.run_out()
                } else {
                    self.advance_street()
                }
            }
            Ordering::Greater => Err(GameError::Invariant(format!(
                "active player bet {} exceeds the opponent's {}",
                mine, theirs
            ))),
        }
    }

    fn bet_or_raise(&mut self, a: usize, amount: u32) -> Result<(), GameError> {
        let o = 1 - a;
        let increment = validate_bet_or_raise(&self.game.players[a], &self.game.players[o], amount)?;
        let level = self.game.players[a].current_bet() == self.game.players[o].current_bet();
        self.game.players[a].commit(increment)?;
        let event = if level {
            GameEvent::Bet {
                player: a,
                name: self.name(a),
                amount: increment,
            }
        } else {
            GameEvent::Raised {
                player: a,
                name: self.name(a),
                opponent: self.name(o),
                raise: amount,
                amount: increment,
            }
        };
        self.bus.emit(event);
        self.game.set_turn(o);
        Ok(())
    }

    fn fold(&mut self, a: usize) -> Result<(), GameError> {
        let o = 1 - a;
        self.game.sweep_bets();
        let pot = std::mem::take(&mut self.game.pot);
        self.game.players[o].won(pot);
        self.game.clear_turn();
        self.game.reveal_hands();
        tracing::info!(folder = a, winner = o, pot, "player folded");
        self.bus.emit(GameEvent::Folded {
            player: a,
            name: self.name(a),
            winner: o,
            winner_name: self.name(o),
            pot,
        });
        self.end_round()
    }

    fn all_in(&mut self, a: usize) -> Result<(), GameError> {
        let o = 1 - a;
        let amount = validate_all_in(&self.game.players[a], &self.game.players[o])?;
        self.game.players[a].commit(amount)?;
        self.bus.emit(GameEvent::AllIn {
            player: a,
            name: self.name(a),
            amount,
        });
        let covered =
            self.game.players[a].current_bet() <= self.game.players[o].current_bet();
        if covered || self.game.players[o].stack() == 0 {
            self.run_out()
        } else {
            self.game.set_turn(o);
            Ok(())
        }
    }

    fn deal_next_street(&mut self) -> Result<(), GameError> {
        let (count, street) = match self.game.table.community_cards.len() {
            0 => (3, Street::Flop),
            3 => (1, Street::Turn),
            4 => (1, Street::River),
            n => {
                return Err(GameError::Invariant(format!(
                    "cannot deal past a board of {} cards",
                    n
                )))
            }
        };
        let cards = self.game.deck.draw_n(count)?;
        for &c in &cards {
            self.game.table.community_cards.add_card(c);
        }
        self.bus.emit(GameEvent::CardsDealt { street, cards });
        Ok(())
    }

    /// Closes the current street: bets go to the pot, the next card(s) come
    /// out and the starter acts first. After the river this is the showdown.
    fn advance_street(&mut self) -> Result<(), GameError> {
        self.game.sweep_bets();
        if self.game.table.community_cards.len() >= 5 {
            return self.resolve_showdown();
        }
        self.deal_next_street()?;
        let starter = self.game.starter_index();
        self.game.set_turn(starter);
        Ok(())
    }

    /// Nobody can act any more: deal the rest of the board and compare hands.
    fn run_out(&mut self) -> Result<(), GameError> {
        self.game.return_uncalled()?;
        self.game.sweep_bets();
        self.game.clear_turn();
        while self.game.table.community_cards.len() < 5 {
            self.deal_next_street()?;
        }
        self.resolve_showdown()
    }

    fn resolve_showdown(&mut self) -> Result<(), GameError> {
        self.game.return_uncalled()?;
        self.game.sweep_bets();
        self.game.clear_turn();
        self.game.reveal_hands();

        let board: Vec<Card> = self.game.board().to_vec();
        let h0 = evaluate_with_board(self.game.players[0].hole_cards.cards(), &board)?;
        let h1 = evaluate_with_board(self.game.players[1].hole_cards.cards(), &board)?;
        let pot = std::mem::take(&mut self.game.pot);
        let (winner, payouts) = match h0.cmp(&h1) {
            Ordering::Greater => (Some(0), [pot, 0]),
            Ordering::Less => (Some(1), [0, pot]),
            Ordering::Equal => (None, split_pot(pot, self.game.starter_index())),
        };
        match winner {
            Some(w) => self.game.players[w].won(pot),
            None => {
                for (p, share) in self.game.players.iter_mut().zip(payouts) {
                    p.won(share);
                }
            }
        }
        tracing::info!(
            hand0 = %h0,
            hand1 = %h1,
            winner = ?winner,
            pot,
            "showdown"
        );
        self.bus.emit(GameEvent::Showdown {
            names: [self.name(0), self.name(1)],
            hands: [h0.describe(), h1.describe()],
            winner,
            pot,
            payouts,
        });
        self.end_round()
    }

    fn end_round(&mut self) -> Result<(), GameError> {
        self.bus.emit(GameEvent::RoundEnded {
            round: self.game.round(),
        });
        if let Some(loser) = self.game.players.iter().position(|p| p.stack() == 0) {
            let winner = 1 - loser;
            self.game.phase = Phase::GameOver { winner };
            self.game.clear_turn();
            tracing::info!(winner, rounds = self.game.round(), "game over");
            self.bus.emit(GameEvent::GameEnded {
                winner,
                winner_name: self.name(winner),
            });
            return Ok(());
        }
        self.game.rotate_starter();
        self.start_round()
    }

    /// Fresh shuffled deck, cleared board, two hole cards each.
    fn start_round(&mut self) -> Result<(), GameError> {
        if self.game.pot != 0 {
            return Err(GameError::Invariant(format!(
                "pot of {} left over from the previous round",
                self.game.pot
            )));
        }
        self.game.round += 1;
        self.game.deck.shuffle();
        self.game.table.community_cards.clear();
        for p in self.game.players.iter_mut() {
            p.hole_cards.clear();
        }
        let starter = self.game.starter_index();
        for _ in 0..2 {
            for seat in [starter, 1 - starter] {
                let card = self.game.deck.draw()?;
                self.game.players[seat].hole_cards.add_card(card);
            }
        }
        self.game.table.community_cards.set_face_down(false);
        self.game.set_turn(starter);
        tracing::info!(round = self.game.round(), starter, "round started");
        self.bus.emit(GameEvent::RoundStarted {
            round: self.game.round(),
            starter,
            starter_name: self.name(starter),
        });
        if let Some(blinds) = self.blinds {
            self.post_blind(starter, blinds.small)?;
            self.post_blind(1 - starter, blinds.big)?;
            if self.game.players.iter().any(|p| p.stack() == 0) {
                return self.run_out();
            }
        }
        Ok(())
    }

    fn post_blind(&mut self, seat: usize, blind: u32) -> Result<(), GameError> {
        let amount = blind.min(self.game.players[seat].stack());
        self.game.players[seat].commit(amount)?;
        self.bus.emit(GameEvent::BlindPosted {
            player: seat,
            name: self.name(seat),
            amount,
        });
        Ok(())
    }
}
