use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Pair count must be positive")]
    InvalidPairCount,
    #[error("Card index out of range")]
    IndexOutOfRange,
    #[error("Deck must hold exactly two cards for every pair id")]
    InvalidDeck,
    #[error("Saved game state is inconsistent with its deck")]
    InconsistentState,
}

pub type Result<T> = core::result::Result<T, GameError>;
