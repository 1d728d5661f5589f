//! Input parsing and validation for interactive commands.
//!
//! Functions here only interpret text. Whether an action is legal is decided
//! by the engine, which reports refusals through its event channel.

use std::collections::HashSet;

use holdem_engine::cards::Card;
use holdem_engine::player::PlayerAction;

/// Outcome of parsing one line typed at the play prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(PlayerAction),
    /// A bet or raise whose amount is not a plain number; the engine parses it
    /// and explains the refusal
    BetText(String),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a line typed at the play prompt.
///
/// Accepts the following input formats (case-insensitive):
/// - "check", "call" or "c" → check or call
/// - "bet X" or "raise X" → raise X above the opponent's bet
/// - "fold" or "f" → fold
/// - "allin" or "all-in" → all-in
/// - "q" or "quit" → quit
///
/// # Example
///
/// ```rust
/// # use holdem_cli::validation::{parse_player_action, ParseResult};
/// use holdem_engine::player::PlayerAction;
///
/// assert_eq!(
///     parse_player_action("fold"),
///     ParseResult::Action(PlayerAction::Fold)
/// );
/// assert_eq!(
///     parse_player_action("bet 100"),
///     ParseResult::Action(PlayerAction::BetOrRaise(100))
/// );
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("invalid") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match parts[0] {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "call" | "c" => ParseResult::Action(PlayerAction::CheckOrCall),
        "allin" | "all-in" => ParseResult::Action(PlayerAction::AllIn),
        "bet" | "raise" => {
            let amount = parts[1..].join(" ");
            match amount.parse::<u32>() {
                Ok(v) if v > 0 => ParseResult::Action(PlayerAction::BetOrRaise(v)),
                _ => ParseResult::BetText(amount),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: check, call, bet <amount>, raise <amount>, fold, allin, q",
            parts[0]
        )),
    }
}

/// Parses card tokens such as `Qd`, `10h` or `A♠`, rejecting repeats.
///
/// ```rust
/// # use holdem_cli::validation::parse_card_list;
/// assert_eq!(parse_card_list(&["Ah", "Kd"]).unwrap().len(), 2);
/// assert!(parse_card_list(&["Ah", "ah"]).is_err());
/// assert!(parse_card_list(&["Xx"]).is_err());
/// ```
pub fn parse_card_list<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, String> {
    let mut seen = HashSet::new();
    let mut cards = Vec::with_capacity(tokens.len());
    for t in tokens {
        let text = t.as_ref();
        let card: Card = text
            .parse()
            .map_err(|e| format!("'{}': {}", text, e))?;
        if !seen.insert(card) {
            return Err(format!("Card {} appears more than once", text));
        }
        cards.push(card);
    }
    Ok(cards)
}

/// Fails if any card appears in both sets.
pub fn ensure_disjoint(a: &[Card], b: &[Card]) -> Result<(), String> {
    match a.iter().find(|c| b.contains(c)) {
        Some(c) => Err(format!("{} is in both hands", c)),
        None => Ok(()),
    }
}
