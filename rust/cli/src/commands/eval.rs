//! # Eval Command
//!
//! Evaluates 2 to 7 cards and prints the hand category, the tiebreak vector
//! and a description. With `--vs`, a second set is evaluated and the two are
//! compared.

use std::cmp::Ordering;
use std::io::Write;

use holdem_engine::cards::Card;
use holdem_engine::hand::{EvaluatedHand, compare_hands, evaluate};

use crate::error::CliError;
use crate::formatters::format_cards;
use crate::validation::{ensure_disjoint, parse_card_list};

pub fn handle_eval_command(
    cards: &[String],
    vs: Option<&[String]>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let first = parse_card_list(cards).map_err(CliError::InvalidInput)?;
    let hand = evaluate(&first)?;
    write_hand(out, "Hand", &first, &hand)?;

    let Some(other) = vs else {
        return Ok(());
    };
    let second = parse_card_list(other).map_err(CliError::InvalidInput)?;
    ensure_disjoint(&first, &second).map_err(CliError::InvalidInput)?;
    let theirs = evaluate(&second)?;
    writeln!(out)?;
    write_hand(out, "Versus", &second, &theirs)?;

    let verdict = match compare_hands(&hand, &theirs) {
        Ordering::Greater => "first hand wins",
        Ordering::Less => "second hand wins",
        Ordering::Equal => "tie",
    };
    writeln!(out)?;
    writeln!(out, "Result: {}", verdict)?;
    Ok(())
}

fn write_hand(
    out: &mut dyn Write,
    label: &str,
    cards: &[Card],
    hand: &EvaluatedHand,
) -> Result<(), CliError> {
    writeln!(out, "{}: {}", label, format_cards(cards))?;
    writeln!(out, "Category: {}", hand.category.name())?;
    writeln!(out, "Tiebreak: {:?}", hand.tiebreak)?;
    writeln!(out, "Best: {}", hand)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cards: &[&str]) -> Vec<String> {
        cards.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_eval_prints_category_and_tiebreak() {
        let mut out = Vec::new();
        let cards = strings(&["Qd", "Kh", "10d", "9d", "8c", "6s"]);
        handle_eval_command(&cards, None, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Category: High Card"));
        assert!(output.contains("Tiebreak: [13, 12, 10, 9, 8]"));
        assert!(output.contains("Best: High Card [K, Q, 10, 9, 8]"));
    }

    #[test]
    fn test_eval_vs_reports_tie_across_suits() {
        let mut out = Vec::new();
        let a = strings(&["Kd", "Kh"]);
        let b = strings(&["Kc", "Ks"]);
        handle_eval_command(&a, Some(b.as_slice()), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Result: tie"));
    }

    #[test]
    fn test_eval_vs_picks_winner() {
        let mut out = Vec::new();
        let a = strings(&["Qd", "Kh", "Qc", "Qs", "Kc", "Ks"]);
        let b = strings(&["2c", "3d", "4h", "5s", "6c"]);
        handle_eval_command(&a, Some(b.as_slice()), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Best: Full House, Kings full of Queens"));
        assert!(output.contains("Result: first hand wins"));
    }

    #[test]
    fn test_eval_rejects_bad_input() {
        let mut out = Vec::new();
        let bad = strings(&["Qd", "Zz"]);
        assert!(matches!(
            handle_eval_command(&bad, None, &mut out),
            Err(CliError::InvalidInput(_))
        ));
        let dup = strings(&["Qd", "Qd"]);
        assert!(handle_eval_command(&dup, None, &mut out).is_err());
        let one = strings(&["Qd"]);
        assert!(matches!(
            handle_eval_command(&one, None, &mut out),
            Err(CliError::InvalidInput(_))
        ));
        let a = strings(&["Ah", "Kh"]);
        let overlap = strings(&["Ah", "2c"]);
        assert!(handle_eval_command(&a, Some(overlap.as_slice()), &mut out).is_err());
    }
}
