use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::table::HandCards;

/// A command a player can issue on their turn.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Check when bets are level, otherwise call the difference
    CheckOrCall,
    /// Raise to this much above the opponent's current bet
    BetOrRaise(u32),
    /// Fold and forfeit the pot
    Fold,
    /// Commit the whole remaining stack
    AllIn,
}

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 100;

/// One of the two seats: chips, the current street's bet, turn flags and hole cards.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerState {
    name: String,
    stack: u32,
    current_bet: u32,
    active: bool,
    is_round_starter: bool,
    wins: u32,
    pub hole_cards: HandCards,
}

impl PlayerState {
    pub fn new(name: impl Into<String>, stack: u32) -> Self {
        Self {
            name: name.into(),
            stack,
            current_bet: 0,
            active: false,
            is_round_starter: false,
            wins: 0,
            hole_cards: HandCards::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn is_active(&self) -> bool {
        self.active
    }
    pub fn is_round_starter(&self) -> bool {
        self.is_round_starter
    }
    /// Number of pots (or pot shares) this player has been paid.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Stack plus what is already committed this street.
    pub fn total_chips(&self) -> u32 {
        self.stack + self.current_bet
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub(crate) fn set_round_starter(&mut self, starter: bool) {
        self.is_round_starter = starter;
    }

    /// Moves `amount` from the stack into the current bet.
    pub(crate) fn commit(&mut self, amount: u32) -> Result<(), GameError> {
        self.stack = self.stack.checked_sub(amount).ok_or_else(|| {
            GameError::Invariant(format!(
                "{} cannot commit {} from a stack of {}",
                self.name, amount, self.stack
            ))
        })?;
        self.current_bet += amount;
        Ok(())
    }

    /// Clears the current bet and returns what it held.
    pub(crate) fn take_bet(&mut self) -> u32 {
        std::mem::take(&mut self.current_bet)
    }

    /// Hands back part of the current bet nobody could match.
    pub(crate) fn refund(&mut self, amount: u32) -> Result<(), GameError> {
        self.current_bet = self.current_bet.checked_sub(amount).ok_or_else(|| {
            GameError::Invariant(format!(
                "cannot refund {} from a bet of {}",
                amount, self.current_bet
            ))
        })?;
        self.stack += amount;
        Ok(())
    }

    pub(crate) fn won(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
        self.wins += 1;
    }
}
