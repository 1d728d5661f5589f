use serde::{Deserialize, Serialize};

use crate::errors::Rejection;
use crate::player::PlayerState;

/// Forced bets posted at the start of each round. Off unless configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blinds {
    pub small: u32,
    pub big: u32,
}

/// Parses a bet amount typed by a user.
///
/// Blank input counts as a zero bet; anything that is not a whole
/// non-negative number is rejected.
///
/// ```
/// use holdem_engine::rules::parse_amount;
/// use holdem_engine::errors::Rejection;
///
/// assert_eq!(parse_amount(" 25 "), Ok(25));
/// assert_eq!(parse_amount(""), Err(Rejection::ZeroBet));
/// assert!(matches!(parse_amount("ten"), Err(Rejection::InvalidAmount(_))));
/// ```
pub fn parse_amount(text: &str) -> Result<u32, Rejection> {
    let t = text.trim();
    if t.is_empty() {
        return Err(Rejection::ZeroBet);
    }
    t.parse::<u32>()
        .map_err(|_| Rejection::InvalidAmount(t.to_string()))
}

/// Validates a bet or raise and returns the chips the active player must add.
///
/// `amount` is a raise above the opponent's current bet, so the increment is
/// `amount + opponent.current_bet - active.current_bet`. The bet is refused when
/// the increment is zero, exceeds the active stack, equals the active stack
/// (that is an all-in and must be declared as one), or would put the active
/// player's bet beyond everything the opponent holds.
///
/// An `amount` of zero is always refused with [`Rejection::ZeroBet`], even when
/// facing a bet where the increment would be a plain call. Calls go through
/// `check_or_call`.
///
/// # Examples
///
/// ```
/// use holdem_engine::player::PlayerState;
/// use holdem_engine::rules::validate_bet_or_raise;
///
/// let me = PlayerState::new("Ann", 100);
/// let them = PlayerState::new("Bob", 100);
/// assert_eq!(validate_bet_or_raise(&me, &them, 20), Ok(20));
/// assert!(validate_bet_or_raise(&me, &them, 150).is_err());
/// ```
pub fn validate_bet_or_raise(
    active: &PlayerState,
    opponent: &PlayerState,
    amount: u32,
) -> Result<u32, Rejection> {
    if amount == 0 {
        return Err(Rejection::ZeroBet);
    }
    let increment = amount
        .saturating_add(opponent.current_bet())
        .saturating_sub(active.current_bet());
    if increment > active.stack() {
        return Err(Rejection::InsufficientChips {
            wanted: increment,
            stack: active.stack(),
        });
    }
    if increment == active.stack() {
        return Err(Rejection::UseAllIn { amount: increment });
    }
    let new_bet = active.current_bet() + increment;
    if new_bet > opponent.total_chips() {
        return Err(Rejection::ExceedsOpponent {
            wanted: new_bet,
            limit: opponent.total_chips(),
        });
    }
    Ok(increment)
}

/// Validates an all-in and returns the chips it commits (the whole stack).
///
/// Refused when the active player holds more in total than the opponent could
/// ever match.
pub fn validate_all_in(active: &PlayerState, opponent: &PlayerState) -> Result<u32, Rejection> {
    if active.total_chips() > opponent.total_chips() {
        return Err(Rejection::AllInExceedsOpponent {
            total: active.total_chips(),
            limit: opponent.total_chips(),
        });
    }
    Ok(active.stack())
}

/// Amount needed to call, capped at what the player has left.
pub fn call_amount(active: &PlayerState, opponent: &PlayerState) -> u32 {
    opponent
        .current_bet()
        .saturating_sub(active.current_bet())
        .min(active.stack())
}

/// Splits a tied pot. An odd chip goes to the round starter.
///
/// ```
/// use holdem_engine::rules::split_pot;
///
/// assert_eq!(split_pot(40, 1), [20, 20]);
/// assert_eq!(split_pot(41, 1), [20, 21]);
/// ```
pub fn split_pot(pot: u32, starter: usize) -> [u32; 2] {
    let half = pot / 2;
    let mut shares = [half, half];
    shares[starter.min(1)] += pot % 2;
    shares
}
