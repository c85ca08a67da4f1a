//! holdem_core is a library for Texas Hold'em.
//!
//! It has three layers:
//!
//! - [`core`]: cards, 64 bit card sets, decks, subset iteration and a
//!   5 to 7 card hand evaluator that needs no lookup tables.
//! - [`holdem`]: the 169 starting hand classes, rankings over them and
//!   exact equity by enumerating every remaining board.
//! - [`arena`]: a no-limit betting engine with blinds, all-ins and side
//!   pots, plus agents that can play it.
//!
//! ```
//! use holdem_core::core::{CardSet, HandCategory, Rankable};
//!
//! let hand: CardSet = "AdKdQdJdTd2c3h".parse().unwrap();
//! assert_eq!(HandCategory::StraightFlush, hand.rank().category());
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Allow all the holdem specific code to be used externally.
pub mod holdem;
/// The betting engine and agent simulations.
pub mod arena;
