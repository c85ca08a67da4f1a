use thiserror::Error;

use crate::core::PokerError;

use super::action::Action;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameStateError {
    #[error("Seat {position} can't {action} here")]
    IllegalAction { position: usize, action: Action },
    #[error("Seat {actual} acted but seat {expected} is next to act")]
    WrongPlayer { expected: usize, actual: usize },
    #[error("The hand is over, no more actions are accepted")]
    HandComplete,
    #[error("A table seats 2 to 10 players, got {0}")]
    InvalidPlayerCount(usize),
    #[error("At least two players need chips to play a hand")]
    NotEnoughPlayers,
    #[error("Blinds must be positive with the small blind not above the big blind")]
    InvalidBlinds,
    #[error("Stacks add up to {0} chips, more than a pot can hold")]
    TooManyChips(u64),
    #[error("The hand did not reach showdown")]
    NotShowdown,
    #[error("The hand is still being played")]
    NotComplete,
    #[error("Card error: {0}")]
    Cards(#[from] PokerError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HoldemSimulationError {
    #[error("Builder needs a game state")]
    NeedGameState,
    #[error("Expected one agent per seat")]
    AgentCountMismatch,
    #[error("Game state error: {0}")]
    GameState(#[from] GameStateError),
    #[error("Card error: {0}")]
    Cards(#[from] PokerError),
}
