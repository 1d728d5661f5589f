//! # holdem-engine: Heads-Up Texas Hold'em Core
//!
//! A two-player Texas Hold'em engine. It tracks chip stacks, deals hole and
//! community cards, enforces betting legality and ranks up to seven cards to
//! settle each showdown. It performs no I/O: a front end issues commands,
//! reads state, and listens for [`events::GameEvent`] notifications.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), parsing and display
//! - [`deck`] - Seeded 52-card deck with shuffle and draw
//! - [`hand`] - Poker hand evaluation and total-order comparison
//! - [`table`] - Card containers for hole cards and the board
//! - [`player`] - Player state, actions and chip movement
//! - [`rules`] - Bet, raise and all-in validation, blinds, pot splitting
//! - [`game`] - Game state: seats, pot, deck, board, streets
//! - [`engine`] - The betting-round state machine
//! - [`events`] - Change notifications and listeners
//! - [`config`] - Table setup and its defaults
//! - [`errors`] - Rejections and fatal engine errors
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{evaluate, Category};
//!
//! let cards = parse_cards("Qd Kh 10d 9d 8c 6s").unwrap();
//! let best = evaluate(&cards).unwrap();
//! assert_eq!(best.category, Category::HighCard);
//! assert_eq!(best.tiebreak, vec![13, 12, 10, 9, 8]);
//! ```
//!
//! ## Playing a Hand
//!
//! ```rust
//! use holdem_engine::config::TableConfig;
//! use holdem_engine::engine::Engine;
//!
//! let mut engine = Engine::new();
//! engine.start_game(&TableConfig::default().with_seed(42)).unwrap();
//! engine.bet_or_raise(10).unwrap();
//! engine.fold().unwrap();
//! let state = engine.state().unwrap();
//! assert_eq!(state.players()[0].stack(), 100);
//! assert_eq!(state.round(), 2);
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod hand;
pub mod player;
pub mod rules;
pub mod table;
