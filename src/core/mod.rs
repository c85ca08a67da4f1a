//! This is the core module. It exports the non-holdem
//! related code: cards, sets of cards and ranking.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, DECK_SIZE, Suit, Value};

/// The 52 bit card set.
mod card_set;
pub use self::card_set::{CardSet, CardSetIter};

/// Two card private hands.
mod hole_cards;
pub use self::hole_cards::{HoleCards, NUM_HOLE_CARDS};

/// We want to be able to iterate over subsets of cards.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::CardIter;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{
    HandCategory, HoldemResult, Rankable, evaluate, evaluate_cards, evaluate_split,
};

mod error;
pub use self::error::PokerError;

/// Sets of seats, used for who still has to act.
mod seat_set;
pub use self::seat_set::{SeatSet, SeatSetIter};
