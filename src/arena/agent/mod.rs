//! `Agent`s are the automatic players in the poker simulations. They are
//! the logic and strategies behind figuring out what to do.
//!
//! Some basic agents are provided as a way of testing baseline value.
mod calling;
mod folding;
mod range;

use crate::core::{CardSet, HoleCards};

use super::{action::Action, game_state::GameState};

/// This is the trait that you need to implement in order to implement
/// different strategies. It's up to you to implement the logic and state.
///
/// Anything shared between agents (ranking tables, lookup data) is
/// handed in when the agent is built, never read from global state.
pub trait Agent {
    /// Pick an action for the active player. `board` holds only the
    /// cards that are face up.
    fn act(&mut self, game_state: &GameState, hole_cards: &HoleCards, board: &CardSet) -> Action;
}

pub use calling::CallingAgent;
pub use folding::FoldingAgent;
pub use range::RangeAgent;
