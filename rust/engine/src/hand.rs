use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::cards::{all_suits, Card, Rank, Suit};
use crate::errors::GameError;

/// Poker hand tier, declared lowest to highest so the derived ordering is the
/// poker ordering.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

/// Result of [`evaluate`].
///
/// Equality and ordering look at `category` and `tiebreak` only. The suit of a
/// flush and the source cards are carried for display and never decide a
/// showdown, so two hands can compare equal across suits (a split pot).
#[derive(Debug, Clone, Serialize)]
pub struct EvaluatedHand {
    pub category: Category,
    /// Rank values compared lexicographically, higher wins. Primary ranks come
    /// first (e.g. trips rank), kickers last; fewer cards give shorter keys.
    pub tiebreak: Vec<u8>,
    /// Suit of a flush or straight flush.
    pub suit: Option<Suit>,
    /// The cards considered, sorted ascending.
    pub cards: Vec<Card>,
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.tiebreak == other.tiebreak
    }
}

impl Eq for EvaluatedHand {}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_hands(self, other)
    }
}

pub fn compare_hands(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.tiebreak.cmp(&b.tiebreak),
        ord => ord,
    }
}

impl EvaluatedHand {
    pub fn describe(&self) -> String {
        let t = &self.tiebreak;
        let suit = self.suit.map(Suit::name).unwrap_or("?");
        match self.category {
            Category::StraightFlush if t[0] == 14 => format!("Royal Flush in {}", suit),
            Category::StraightFlush => {
                format!("Straight Flush in {}, {} high", suit, rank_name(t[0]))
            }
            Category::FourOfAKind => {
                format!("Four {}{}", rank_plural(t[0]), kicker_suffix(&t[1..]))
            }
            Category::FullHouse => format!(
                "Full House, {} full of {}",
                rank_plural(t[0]),
                rank_plural(t[1])
            ),
            Category::Flush => format!("Flush in {} {}", suit, rank_list(t)),
            Category::Straight => format!("Straight, {} high", rank_name(t[0])),
            Category::ThreeOfAKind => {
                format!("Three {}{}", rank_plural(t[0]), kicker_suffix(&t[1..]))
            }
            Category::TwoPair => format!(
                "Two Pair, {} and {}{}",
                rank_plural(t[0]),
                rank_plural(t[1]),
                kicker_suffix(&t[2..])
            ),
            Category::Pair => format!("Pair of {}{}", rank_plural(t[0]), kicker_suffix(&t[1..])),
            Category::HighCard => format!("High Card {}", rank_list(t)),
        }
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Classifies 2 to 7 cards into the best poker hand they contain.
///
/// Tiers needing five cards simply never match on shorter inputs; high card is
/// the floor and always matches. The result does not depend on input order.
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, GameError> {
    if !(2..=7).contains(&cards.len()) {
        return Err(GameError::InvalidCardCount(cards.len()));
    }
    let mut sorted = cards.to_vec();
    sorted.sort_unstable();
    let profile = Profile::new(&sorted);
    let made = TIERS
        .iter()
        .find_map(|tier| tier(&profile))
        .ok_or_else(|| GameError::Invariant("no hand tier matched".into()))?;
    Ok(EvaluatedHand {
        category: made.category,
        tiebreak: made.tiebreak,
        suit: made.suit,
        cards: sorted,
    })
}

/// Evaluates hole cards together with the community cards.
pub fn evaluate_with_board(hole: &[Card], board: &[Card]) -> Result<EvaluatedHand, GameError> {
    let mut all = Vec::with_capacity(hole.len() + board.len());
    all.extend_from_slice(hole);
    all.extend_from_slice(board);
    evaluate(&all)
}

struct Made {
    category: Category,
    tiebreak: Vec<u8>,
    suit: Option<Suit>,
}

impl Made {
    fn new(category: Category, tiebreak: Vec<u8>) -> Self {
        Self {
            category,
            tiebreak,
            suit: None,
        }
    }
}

type Tier = fn(&Profile) -> Option<Made>;

// Highest tier first; the first match wins.
const TIERS: [Tier; 9] = [
    straight_flush,
    four_of_a_kind,
    full_house,
    flush,
    straight,
    three_of_a_kind,
    two_pair,
    pair,
    high_card,
];

/// Rank and suit histograms over a rank-sorted card slice.
struct Profile<'a> {
    sorted: &'a [Card],
    rank_counts: [u8; 15],
    by_suit: [Vec<u8>; 4],
}

impl<'a> Profile<'a> {
    fn new(sorted: &'a [Card]) -> Self {
        let mut rank_counts = [0u8; 15];
        let mut by_suit: [Vec<u8>; 4] = [vec![], vec![], vec![], vec![]];
        // descending so per-suit lists come out high to low
        for c in sorted.iter().rev() {
            rank_counts[c.rank.value() as usize] += 1;
            by_suit[c.suit.index()].push(c.rank.value());
        }
        Self {
            sorted,
            rank_counts,
            by_suit,
        }
    }

    /// Highest rank held at least `min` times, skipping `exclude`.
    fn highest_with(&self, min: u8, exclude: &[u8]) -> Option<u8> {
        (2..=14u8)
            .rev()
            .find(|r| self.rank_counts[*r as usize] >= min && !exclude.contains(r))
    }

    /// Up to `n` highest card ranks whose rank is not in `exclude`.
    fn kickers(&self, exclude: &[u8], n: usize) -> Vec<u8> {
        self.sorted
            .iter()
            .rev()
            .map(|c| c.rank.value())
            .filter(|r| !exclude.contains(r))
            .take(n)
            .collect()
    }

    fn flush_suits(&self) -> Vec<(Suit, &[u8])> {
        all_suits()
            .into_iter()
            .map(|s| (s, self.by_suit[s.index()].as_slice()))
            .filter(|(_, ranks)| ranks.len() >= 5)
            .collect()
    }
}

fn rank_mask(ranks: impl IntoIterator<Item = u8>) -> u16 {
    ranks.into_iter().fold(0u16, |m, r| m | (1 << r))
}

fn straight_high_from_mask(mask: u16) -> Option<u8> {
    let mut m = mask;
    // Ace also plays low
    if (m & (1 << 14)) != 0 {
        m |= 1 << 1;
    }
    (5..=14u8).rev().find(|&high| {
        let window = 0b1_1111u16 << (high - 4);
        (m & window) == window
    })
}

fn straight_flush(p: &Profile) -> Option<Made> {
    p.flush_suits()
        .into_iter()
        .filter_map(|(s, ranks)| {
            straight_high_from_mask(rank_mask(ranks.iter().copied())).map(|h| (h, s))
        })
        .max_by_key(|(h, _)| *h)
        .map(|(high, s)| Made {
            category: Category::StraightFlush,
            tiebreak: vec![high],
            suit: Some(s),
        })
}

fn four_of_a_kind(p: &Profile) -> Option<Made> {
    let quad = p.highest_with(4, &[])?;
    let mut t = vec![quad];
    t.extend(p.kickers(&[quad], 1));
    Some(Made::new(Category::FourOfAKind, t))
}

fn full_house(p: &Profile) -> Option<Made> {
    let trip = p.highest_with(3, &[])?;
    // a second set of trips can supply the pair
    let pair = p.highest_with(2, &[trip])?;
    Some(Made::new(Category::FullHouse, vec![trip, pair]))
}

fn flush(p: &Profile) -> Option<Made> {
    p.flush_suits()
        .into_iter()
        .map(|(s, ranks)| (s, ranks[..5].to_vec()))
        .max_by(|a, b| a.1.cmp(&b.1))
        .map(|(s, top)| Made {
            category: Category::Flush,
            tiebreak: top,
            suit: Some(s),
        })
}

fn straight(p: &Profile) -> Option<Made> {
    let mask = rank_mask(p.sorted.iter().map(|c| c.rank.value()));
    let high = straight_high_from_mask(mask)?;
    Some(Made::new(Category::Straight, vec![high]))
}

fn three_of_a_kind(p: &Profile) -> Option<Made> {
    let trip = p.highest_with(3, &[])?;
    let mut t = vec![trip];
    t.extend(p.kickers(&[trip], 2));
    Some(Made::new(Category::ThreeOfAKind, t))
}

fn two_pair(p: &Profile) -> Option<Made> {
    let high = p.highest_with(2, &[])?;
    let low = p.highest_with(2, &[high])?;
    // the kicker may come from a third pair, never from either paired rank
    let mut t = vec![high, low];
    t.extend(p.kickers(&[high, low], 1));
    Some(Made::new(Category::TwoPair, t))
}

fn pair(p: &Profile) -> Option<Made> {
    let rank = p.highest_with(2, &[])?;
    let mut t = vec![rank];
    t.extend(p.kickers(&[rank], 3));
    Some(Made::new(Category::Pair, t))
}

fn high_card(p: &Profile) -> Option<Made> {
    Some(Made::new(Category::HighCard, p.kickers(&[], 5)))
}

fn rank_of(v: u8) -> Option<Rank> {
    Rank::from_u8(v)
}

fn rank_name(v: u8) -> &'static str {
    rank_of(v).map(Rank::name).unwrap_or("?")
}

fn rank_plural(v: u8) -> &'static str {
    rank_of(v).map(Rank::plural).unwrap_or("?")
}

fn rank_list(values: &[u8]) -> String {
    let parts: Vec<&str> = values
        .iter()
        .map(|v| rank_of(*v).map(Rank::short).unwrap_or("?"))
        .collect();
    format!("[{}]", parts.join(", "))
}

fn kicker_suffix(values: &[u8]) -> String {
    match values.len() {
        0 => String::new(),
        1 => format!(" with kicker {}", rank_list(values)),
        _ => format!(" with kickers {}", rank_list(values)),
    }
}
