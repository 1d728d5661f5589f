//! Card, table and action formatters for terminal display.
//!
//! Suits are drawn with ♥ ♦ ♣ ♠ where the terminal supports it and with
//! h d c s letters otherwise.
//!
//! ## Example
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_cards(&[ace_spades]).starts_with("[A"));
//! ```

use holdem_engine::cards::Card;
use holdem_engine::game::GameState;
use holdem_engine::player::{PlayerAction, PlayerState};
use holdem_engine::table::{CardContainer, HandCards};

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_card(card: &Card) -> String {
    card.short(supports_unicode())
}

/// Format a list of cards in bracket notation, e.g. `[A♠ K♥ Q♦]` or `[]`.
pub fn format_cards(cards: &[Card]) -> String {
    let parts: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", parts.join(" "))
}

/// Hole cards as the seat should see them: hidden while face down.
pub fn format_hand(hand: &HandCards) -> String {
    if hand.face_down() {
        let hidden = vec!["??"; hand.len()];
        format!("[{}]", hidden.join(" "))
    } else {
        format_cards(&hand.sorted())
    }
}

pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::CheckOrCall => "check/call".to_string(),
        PlayerAction::BetOrRaise(amount) => format!("bet/raise {}", amount),
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::AllIn => "all-in".to_string(),
    }
}

fn format_seat(player: &PlayerState) -> String {
    let mut line = format!("{}: {} chips", player.name(), player.stack());
    if player.current_bet() > 0 {
        line.push_str(&format!(", bet {}", player.current_bet()));
    }
    line.push(' ');
    line.push_str(&format_hand(&player.hole_cards));
    if player.is_active() {
        line.push_str(" <- to act");
    }
    line
}

/// Multi-line table summary shown before every prompt.
pub fn format_table(state: &GameState) -> String {
    let mut lines = vec![
        format!(
            "Round {} | {} | Pot {}",
            state.round(),
            state.street().name(),
            state.total_pot()
        ),
        format!("Board: {}", format_cards(state.board())),
    ];
    lines.extend(state.players().iter().map(format_seat));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::parse_cards;
    use holdem_engine::config::TableConfig;
    use holdem_engine::engine::Engine;

    #[test]
    fn test_format_cards_brackets() {
        assert_eq!(format_cards(&[]), "[]");
        let cards = parse_cards("Ah 10d").unwrap();
        let shown = format_cards(&cards);
        assert!(shown == "[A♥ 10♦]" || shown == "[Ah 10d]");
    }

    #[test]
    fn test_face_down_hand_is_hidden() {
        let mut hand = HandCards::new();
        for c in parse_cards("Ah Kd").unwrap() {
            hand.add_card(c);
        }
        hand.set_face_down(true);
        assert_eq!(format_hand(&hand), "[?? ??]");
        hand.set_face_down(false);
        assert!(format_hand(&hand).starts_with("[K"));
    }

    #[test]
    fn test_format_action() {
        assert_eq!(format_action(&PlayerAction::BetOrRaise(5)), "bet/raise 5");
        assert_eq!(format_action(&PlayerAction::AllIn), "all-in");
    }

    #[test]
    fn test_table_shows_active_seat_only() {
        let mut eng = Engine::new();
        eng.start_game(&TableConfig::new("Ann", "Bob", 100).with_seed(3))
            .unwrap();
        let text = format_table(eng.state().unwrap());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Round 1 | Preflop | Pot 0");
        assert_eq!(lines[1], "Board: []");
        assert!(lines[2].starts_with("Ann: 100 chips"));
        assert!(lines[2].ends_with("<- to act"));
        assert!(!lines[2].contains("??"));
        assert_eq!(lines[3], "Bob: 100 chips [?? ??]");
    }
}
