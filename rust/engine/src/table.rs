use serde::Serialize;

use crate::cards::Card;

/// Something that holds an ordered run of cards.
pub trait CardContainer {
    fn cards(&self) -> &[Card];
    fn add_card(&mut self, card: Card);
    fn clear(&mut self);

    fn len(&self) -> usize {
        self.cards().len()
    }

    fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }
}

/// Exposes a counter that moves whenever the observable contents change, so a
/// display can tell whether it needs to redraw.
pub trait ChangeNotifier {
    fn revision(&self) -> u64;
}

/// Hole cards or community cards, plus the display-only face-down flag.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HandCards {
    cards: Vec<Card>,
    face_down: bool,
    #[serde(skip)]
    revision: u64,
}

impl HandCards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn face_down(&self) -> bool {
        self.face_down
    }

    pub fn set_face_down(&mut self, face_down: bool) {
        if self.face_down != face_down {
            self.face_down = face_down;
            self.revision += 1;
        }
    }

    /// Cards sorted by rank (suit breaks ties) for display.
    pub fn sorted(&self) -> Vec<Card> {
        let mut v = self.cards.clone();
        v.sort();
        v
    }
}

impl CardContainer for HandCards {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.revision += 1;
    }

    fn clear(&mut self) {
        self.cards.clear();
        self.revision += 1;
    }
}

impl ChangeNotifier for HandCards {
    fn revision(&self) -> u64 {
        self.revision
    }
}

/// The community cards. Only ever 0, 3, 4 or 5 of them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TableState {
    pub community_cards: HandCards,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &[Card] {
        self.community_cards.cards()
    }
}
