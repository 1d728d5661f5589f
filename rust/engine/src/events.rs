//! Change notifications for whatever presents the game.
//!
//! The engine pushes a [`GameEvent`] to every subscribed [`EventListener`]
//! synchronously, in the order state changed. Listeners only observe; they get
//! a shared reference to the event and no access to engine state.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::cards::Card;
use crate::game::Street;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    RoundStarted {
        round: u32,
        starter: usize,
        starter_name: String,
    },
    BlindPosted {
        player: usize,
        name: String,
        amount: u32,
    },
    CardsDealt {
        street: Street,
        cards: Vec<Card>,
    },
    Checked {
        player: usize,
        name: String,
    },
    Called {
        player: usize,
        name: String,
        opponent: String,
        amount: u32,
    },
    Bet {
        player: usize,
        name: String,
        amount: u32,
    },
    Raised {
        player: usize,
        name: String,
        opponent: String,
        /// Raise above the opponent's bet
        raise: u32,
        /// Chips added, call included
        amount: u32,
    },
    AllIn {
        player: usize,
        name: String,
        amount: u32,
    },
    ActionRejected {
        player: usize,
        message: String,
    },
    Folded {
        player: usize,
        name: String,
        winner: usize,
        winner_name: String,
        pot: u32,
    },
    Showdown {
        names: [String; 2],
        hands: [String; 2],
        /// `None` on a split pot
        winner: Option<usize>,
        pot: u32,
        payouts: [u32; 2],
    },
    RoundEnded {
        round: u32,
    },
    GameEnded {
        winner: usize,
        winner_name: String,
    },
}

impl GameEvent {
    /// Human-readable notification text.
    pub fn message(&self) -> String {
        match self {
            GameEvent::RoundStarted {
                round,
                starter_name,
                ..
            } => format!("Round {}: {} starts", round, starter_name),
            GameEvent::BlindPosted { name, amount, .. } => format!("{} posts {}", name, amount),
            GameEvent::CardsDealt { street, cards } => {
                let shown: Vec<String> = cards.iter().map(|c| c.short(true)).collect();
                format!("{}: {}", street.name(), shown.join(" "))
            }
            GameEvent::Checked { name, .. } => format!("{} checked", name),
            GameEvent::Called { name, opponent, .. } => format!("{} called {}", name, opponent),
            GameEvent::Bet { name, amount, .. } => format!("{} bet {}", name, amount),
            GameEvent::Raised {
                name,
                opponent,
                raise,
                ..
            } => format!("{} called {} and raised them {}", name, opponent, raise),
            GameEvent::AllIn { name, .. } => format!("{} is all in!", name),
            GameEvent::ActionRejected { message, .. } => message.clone(),
            GameEvent::Folded {
                name,
                winner_name,
                pot,
                ..
            } => format!("{} folded!\n{} wins the pot of {}.", name, winner_name, pot),
            GameEvent::Showdown {
                names,
                hands,
                winner,
                pot,
                ..
            } => {
                let shown = format!(
                    "{} has {}, {} has {}. ",
                    names[0], hands[0], names[1], hands[1]
                );
                match winner {
                    Some(w) => format!("{}{} wins the pot of {}!", shown, names[*w], pot),
                    None => format!("{}The pot of {} is split between the players.", shown, pot),
                }
            }
            GameEvent::RoundEnded { round } => format!("Round {} ended", round),
            GameEvent::GameEnded { winner_name, .. } => {
                format!("The winner of the game is {}", winner_name)
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub trait EventListener {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> EventListener for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Listener that records every event. Clones share one journal, so a caller
/// can keep a handle while the engine owns the subscribed copy.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns and forgets everything recorded so far.
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventListener for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}

/// Fans events out to the subscribed listeners in subscription order.
#[derive(Default)]
pub(crate) struct EventBus {
    listeners: Vec<Box<dyn EventListener>>,
}

impl EventBus {
    pub(crate) fn subscribe(&mut self, listener: Box<dyn EventListener>) {
        self.listeners.push(listener);
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        tracing::debug!(event = ?event, "game event");
        for l in self.listeners.iter_mut() {
            l.on_event(&event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
