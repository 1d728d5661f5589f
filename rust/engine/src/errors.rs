use thiserror::Error;

/// A player command the engine refused. Nothing was mutated; the caller may
/// retry with corrected input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("You don't have enough money!\nTry a smaller bet!")]
    InsufficientChips { wanted: u32, stack: u32 },
    #[error("You need to at least bet 1 or check!")]
    ZeroBet,
    #[error("Are you sure you want to go all in?\nPress All In button")]
    UseAllIn { amount: u32 },
    #[error("You can't bet more than your opponent's money!\nTry a smaller bet!")]
    ExceedsOpponent { wanted: u32, limit: u32 },
    #[error("You can't bet more than your opponent's money!")]
    AllInExceedsOpponent { total: u32, limit: u32 },
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("The game is over")]
    GameOver,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Rejected(#[from] Rejection),
    #[error("Cannot draw from an empty deck")]
    EmptyDeck,
    #[error("Invalid setup: {0}")]
    InvalidSetup(String),
    #[error("Hand evaluation needs 2 to 7 cards, got {0}")]
    InvalidCardCount(usize),
    #[error("No game in progress")]
    NotStarted,
    #[error("Chip conservation violated: expected {expected}, found {actual}")]
    ChipsNotConserved { expected: u32, actual: u32 },
    #[error("Invariant violated: {0}")]
    Invariant(String),
}

impl GameError {
    /// Everything except a [`Rejection`] means the engine itself is broken and
    /// the session must not continue.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, GameError::Rejected(_))
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            GameError::Rejected(r) => Some(r),
            _ => None,
        }
    }
}
