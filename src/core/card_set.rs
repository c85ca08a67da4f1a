use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not};

use super::{Card, PokerError};

#[cfg(feature = "serde")]
use serde::ser::SerializeSeq;

/// This struct is a bitset for cards
/// Each card is represented by a bit in a 64 bit integer,
/// the bit index being `Card::index`.
///
/// The bit is set if the card present
/// The bit is unset if the card not in the set
///
/// No bit above 51 is ever set. Every constructor
/// and operator keeps it that way.
///
/// It is `Copy`, so a copy is an independent set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardSet {
    // The bitset
    cards: u64,
}

const FIFTY_TWO_ONES: u64 = (1 << 52) - 1;

impl CardSet {
    /// Create a new empty set
    ///
    /// ```
    /// use holdem_core::core::CardSet;
    /// let cards = CardSet::new();
    /// assert!(cards.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self { cards: 0 }
    }

    /// Every one of the 52 cards.
    pub const fn full() -> Self {
        Self {
            cards: FIFTY_TWO_ONES,
        }
    }

    /// Build a set from a raw mask. Fails if anything above bit 51 is set.
    ///
    /// ```
    /// use holdem_core::core::CardSet;
    ///
    /// let cards = CardSet::from_mask(0b1011).unwrap();
    /// assert_eq!(3, cards.count());
    /// assert!(CardSet::from_mask(1 << 52).is_err());
    /// ```
    pub fn from_mask(mask: u64) -> Result<Self, PokerError> {
        if mask & !FIFTY_TWO_ONES != 0 {
            return Err(PokerError::InvalidMask(mask));
        }
        Ok(Self { cards: mask })
    }

    /// Build a set from a list of cards. A repeated card is an error.
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Result<Self, PokerError> {
        let mut set = Self::new();
        for card in cards {
            if set.contains(card) {
                return Err(PokerError::DuplicateCard(card));
            }
            set.insert(card);
        }
        Ok(set)
    }

    /// Build a set from card indices. A repeated index or one outside
    /// `0..52` is an error.
    ///
    /// ```
    /// use holdem_core::core::{CardSet, PokerError};
    ///
    /// assert_eq!(2, CardSet::from_indices([0, 51]).unwrap().count());
    /// assert!(matches!(
    ///     CardSet::from_indices([7, 7]),
    ///     Err(PokerError::DuplicateCard(_))
    /// ));
    /// assert!(CardSet::from_indices([52]).is_err());
    /// ```
    pub fn from_indices<I: IntoIterator<Item = u8>>(indices: I) -> Result<Self, PokerError> {
        let mut set = Self::new();
        for idx in indices {
            let card = Card::from_index(idx)?;
            if set.contains(card) {
                return Err(PokerError::DuplicateCard(card));
            }
            set.insert(card);
        }
        Ok(set)
    }

    /// The raw mask.
    pub const fn mask(&self) -> u64 {
        self.cards
    }

    /// This does what it says on the tin it inserts a card into the set
    ///
    /// ```
    /// use holdem_core::core::{Card, CardSet, Suit, Value};
    /// let mut cards = CardSet::new();
    ///
    /// cards.insert(Card::new(Value::Six, Suit::Club));
    /// cards.insert(Card::new(Value::King, Suit::Club));
    /// cards.insert(Card::new(Value::Ace, Suit::Club));
    /// assert_eq!(3, cards.count());
    /// ```
    pub fn insert(&mut self, card: Card) {
        self.cards |= 1 << card.index();
    }

    /// Remove a card from the set
    pub fn remove(&mut self, card: Card) {
        self.cards &= !(1 << card.index());
    }

    /// Is the card in the set ?
    pub fn contains(&self, card: Card) -> bool {
        (self.cards & (1 << card.index())) != 0
    }

    /// Is the set empty ?
    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// How many cards are in the set ?
    ///
    /// ```
    /// use holdem_core::core::{Card, CardSet};
    /// let mut cards = CardSet::new();
    ///
    /// assert_eq!(0, cards.count());
    /// for idx in 0..13 {
    ///    cards.insert(Card::from_index(idx).unwrap());
    ///    assert_eq!(idx as usize + 1, cards.count());
    /// }
    /// ```
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    pub fn clear(&mut self) {
        self.cards = 0;
    }

    /// Do the two sets share no card?
    pub fn disjoint(&self, other: &Self) -> bool {
        self.cards & other.cards == 0
    }

    /// The union of two disjoint sets.
    ///
    /// Combining sets that share a card is a caller bug and
    /// fails with `PokerError::Overlap` carrying the shared cards.
    ///
    /// ```
    /// use holdem_core::core::CardSet;
    ///
    /// let board: CardSet = "AsKsQs".parse().unwrap();
    /// let hole: CardSet = "JsTs".parse().unwrap();
    /// assert_eq!(5, board.combine(&hole).unwrap().count());
    /// assert!(board.combine(&board).is_err());
    /// ```
    pub fn combine(&self, other: &Self) -> Result<Self, PokerError> {
        let shared = self.cards & other.cards;
        if shared != 0 {
            return Err(PokerError::Overlap(Self { cards: shared }));
        }
        Ok(Self {
            cards: self.cards | other.cards,
        })
    }

    /// Iterate the cards from lowest index to highest.
    pub fn iter(&self) -> CardSetIter {
        CardSetIter(self.cards)
    }
}

impl Default for CardSet {
    /// An empty set.
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

/// Concatenated two character cards, lowest index first.
impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in *self {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for CardSet {
    type Err = PokerError;

    /// Parse concatenated cards like `"AsKd7h"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let mut set = Self::new();

        // Keep looping until we explicitly break
        loop {
            let Some(value_char) = chars.next() else {
                break;
            };
            let suit_char = chars.next().ok_or(PokerError::TooFewChars)?;
            let value = super::Value::from_char(value_char)
                .ok_or(PokerError::UnexpectedValueChar(value_char))?;
            let suit = super::Suit::from_char(suit_char)
                .ok_or(PokerError::UnexpectedSuitChar(suit_char))?;
            let card = Card::new(value, suit);

            if set.contains(card) {
                return Err(PokerError::DuplicateCard(card));
            }
            set.insert(card);
        }

        Ok(set)
    }
}

impl From<Card> for CardSet {
    fn from(card: Card) -> Self {
        Self {
            cards: 1 << card.index(),
        }
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = Self::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

impl BitOr<CardSet> for CardSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards | rhs.cards,
        }
    }
}

impl BitOr<Card> for CardSet {
    type Output = Self;

    fn bitor(self, rhs: Card) -> Self::Output {
        Self {
            cards: self.cards | (1 << rhs.index()),
        }
    }
}

impl BitOrAssign<CardSet> for CardSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.cards |= rhs.cards;
    }
}

impl BitOrAssign<Card> for CardSet {
    fn bitor_assign(&mut self, rhs: Card) {
        self.cards |= 1 << rhs.index();
    }
}

impl BitXor<Card> for CardSet {
    type Output = Self;

    fn bitxor(self, rhs: Card) -> Self::Output {
        Self {
            cards: self.cards ^ (1 << rhs.index()),
        }
    }
}

impl BitAnd for CardSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards & rhs.cards,
        }
    }
}

impl BitAndAssign for CardSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.cards &= rhs.cards;
    }
}

impl Not for CardSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self {
            cards: !self.cards & FIFTY_TWO_ONES, // Ensure we only keep the first 52 bits
        }
    }
}

/// The iterator for the CardSet
/// It iterates over the cards in the set
pub struct CardSetIter(u64);

impl IntoIterator for CardSet {
    type Item = Card;
    type IntoIter = CardSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardSetIter(self.cards)
    }
}

impl Iterator for CardSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }

        let idx = self.0.trailing_zeros();
        self.0 &= self.0 - 1;

        Some(Card {
            value: super::Value::from_u8((idx / 4) as u8),
            suit: super::Suit::from_u8((idx % 4) as u8),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CardSetIter {}

#[cfg(feature = "serde")]
impl serde::Serialize for CardSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.count()))?;
        for card in *self {
            seq.serialize_element(&card)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct CardSetVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for CardSetVisitor {
    type Value = CardSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of distinct cards")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = CardSet::new();
        while let Some(card) = seq.next_element::<Card>()? {
            if set.contains(card) {
                return Err(serde::de::Error::custom(PokerError::DuplicateCard(card)));
            }
            set.insert(card);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CardSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(CardSetVisitor)
    }
}
