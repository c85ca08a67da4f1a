//! Texas holdem specific code: starting hand classes, rankings of
//! them and exact equity.

/// Module that can generate possible cards for a starting hand.
mod starting_hand;
/// Export `StartingHand`
pub use self::starting_hand::{NUM_STARTING_HANDS, StartingHand, Suitedness};

/// Hole cards to starting hand classes and back.
pub mod range;
pub use self::range::HandRanking;

/// Exhaustive board enumeration.
mod equity;
pub use self::equity::{EquityResult, exhaustive_equity};
