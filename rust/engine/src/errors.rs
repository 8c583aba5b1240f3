use thiserror::Error;

use crate::session::GameState;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Not enough credits: have {credits}, bet {bet}")]
    InsufficientCredits { credits: u32, bet: u32 },
    #[error("Operation requires {expected:?} state, session is {actual:?}")]
    WrongState {
        expected: GameState,
        actual: GameState,
    },
    #[error("Hold index {0} is out of range (0..=4)")]
    InvalidHoldIndex(usize),
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("Deck failed validation after {attempts} shuffle attempts")]
    CorruptDeck { attempts: u32 },
    #[error("Deck exhausted: requested {requested}, remaining {remaining}")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Session is drawing but holds no dealt hand")]
    MissingHand,
}

impl GameError {
    /// True for engine-invariant faults, which indicate a defect rather than bad input.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            GameError::CorruptDeck { .. }
                | GameError::DeckExhausted { .. }
                | GameError::MissingHand
        )
    }
}
