use thiserror::Error;

use super::{Card, CardSet};

/// This is the core error type for the cards, sets and
/// hand ranking code. It uses `thiserror` to provide
/// readable error messages.
///
/// None of these are transient. They all point at a caller
/// handing in bad input, so nothing here is worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokerError {
    #[error("Unable to parse value from '{0}'")]
    UnexpectedValueChar(char),
    #[error("Unable to parse suit from '{0}'")]
    UnexpectedSuitChar(char),
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card already used {0}")]
    DuplicateCard(Card),
    #[error("Card sets share cards {0:?}")]
    Overlap(CardSet),
    #[error("Holdem hands are ranked from 5 to 7 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("Expected {expected} cards, got {actual}")]
    WrongCardCount { expected: usize, actual: usize },
    #[error("Card index {0} is outside of 0..52")]
    CardIndexOutOfRange(u8),
    #[error("Starting hand index {0} is outside of 0..169")]
    StartingHandIndexOutOfRange(usize),
    #[error("Card mask {0:#x} has bits set above the 52 card universe")]
    InvalidMask(u64),
    #[error("Unable to parse starting hand '{0}'")]
    InvalidStartingHand(String),
    #[error("A board holds at most 5 cards, got {0}")]
    InvalidBoardSize(usize),
    #[error("Equity needs at least two hands, got {0}")]
    NotEnoughHands(usize),
}
