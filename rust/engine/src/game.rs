use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::player::PlayerState;
use crate::table::{CardContainer, TableState};

/// Betting phase of a round, named after how much of the board is visible.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Hole cards dealt, no board
    Preflop,
    /// 3 community cards
    Flop,
    /// 4th community card
    Turn,
    /// 5th community card
    River,
    /// Hands compared
    Showdown,
}

impl Street {
    pub fn name(self) -> &'static str {
        match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
            Street::Showdown => "Showdown",
        }
    }

    pub fn from_board_len(n: usize) -> Option<Street> {
        match n {
            0 => Some(Street::Preflop),
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Phase {
    /// A round is open and the active player must act
    Betting,
    /// A stack hit zero; no more rounds
    GameOver { winner: usize },
}

/// Both seats, the pot, the deck and the board.
///
/// `pot` holds chips swept in from finished streets; chips bet on the current
/// street stay in each player's `current_bet` until the street closes, so
/// `stack0 + bet0 + stack1 + bet1 + pot` always equals the chips brought to
/// the table.
#[derive(Debug)]
pub struct GameState {
    pub(crate) players: [PlayerState; 2],
    pub(crate) pot: u32,
    pub(crate) deck: Deck,
    pub(crate) table: TableState,
    pub(crate) starter_index: usize,
    pub(crate) round: u32,
    pub(crate) phase: Phase,
    total_chips: u32,
}

impl GameState {
    pub fn new(players: [PlayerState; 2], deck: Deck) -> Self {
        let total_chips = players.iter().map(PlayerState::total_chips).sum();
        Self {
            players,
            pot: 0,
            deck,
            table: TableState::new(),
            starter_index: 0,
            round: 0,
            phase: Phase::Betting,
            total_chips,
        }
    }

    pub fn players(&self) -> &[PlayerState; 2] {
        &self.players
    }
    pub fn player(&self, seat: usize) -> Option<&PlayerState> {
        self.players.get(seat)
    }
    /// Chips swept from finished streets.
    pub fn pot(&self) -> u32 {
        self.pot
    }
    /// Pot plus both players' bets on the current street.
    pub fn total_pot(&self) -> u32 {
        self.pot + self.players[0].current_bet() + self.players[1].current_bet()
    }
    pub fn table(&self) -> &TableState {
        &self.table
    }
    pub fn board(&self) -> &[Card] {
        self.table.board()
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn round(&self) -> u32 {
        self.round
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn starter_index(&self) -> usize {
        self.starter_index
    }
    pub fn total_chips(&self) -> u32 {
        self.total_chips
    }
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn street(&self) -> Street {
        Street::from_board_len(self.table.community_cards.len()).unwrap_or(Street::Showdown)
    }

    /// Seat whose turn it is, if the game is still running.
    pub fn active_index(&self) -> Option<usize> {
        if self.is_game_over() {
            return None;
        }
        self.players.iter().position(PlayerState::is_active)
    }

    pub fn rotate_starter(&mut self) {
        self.starter_index = 1 - self.starter_index;
        for (i, p) in self.players.iter_mut().enumerate() {
            p.set_round_starter(i == self.starter_index);
        }
    }

    /// Hands the turn to `seat`. The waiting player's hole cards go face down.
    pub(crate) fn set_turn(&mut self, seat: usize) {
        for (i, p) in self.players.iter_mut().enumerate() {
            p.set_active(i == seat);
            p.hole_cards.set_face_down(i != seat);
        }
    }

    pub(crate) fn clear_turn(&mut self) {
        for p in self.players.iter_mut() {
            p.set_active(false);
        }
    }

    pub(crate) fn reveal_hands(&mut self) {
        for p in self.players.iter_mut() {
            p.hole_cards.set_face_down(false);
        }
    }

    /// Moves both current bets into the pot.
    pub(crate) fn sweep_bets(&mut self) {
        let swept: u32 = self.players.iter_mut().map(PlayerState::take_bet).sum();
        self.pot += swept;
    }

    /// Returns the part of the larger bet that an all-in opponent cannot match.
    pub(crate) fn return_uncalled(&mut self) -> Result<u32, GameError> {
        let [a, b] = [self.players[0].current_bet(), self.players[1].current_bet()];
        let (big, small) = if a > b { (0, 1) } else { (1, 0) };
        let excess = a.abs_diff(b);
        if excess == 0 || self.players[small].stack() > 0 {
            return Ok(0);
        }
        self.players[big].refund(excess)?;
        Ok(excess)
    }

    pub fn chips_in_play(&self) -> u32 {
        self.players.iter().map(PlayerState::total_chips).sum::<u32>() + self.pot
    }

    pub fn check_conservation(&self) -> Result<(), GameError> {
        let actual = self.chips_in_play();
        if actual != self.total_chips {
            return Err(GameError::ChipsNotConserved {
                expected: self.total_chips,
                actual,
            });
        }
        Ok(())
    }
}
