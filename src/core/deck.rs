use rand::Rng;
use rand::seq::SliceRandom;

use super::{Card, CardSet, PokerError};

/// An ordered supply of distinct cards.
///
/// The deck never shuffles itself. Callers that want a random
/// order hand in their own `Rng`, which keeps seeded runs
/// reproducible. Cards are dealt from the top, which is the end
/// of the internal vector.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck from an explicit order. The first card
    /// given is the last one dealt.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, PokerError> {
        // Validates that no card repeats.
        CardSet::from_cards(cards.iter().copied())?;
        Ok(Self { cards })
    }

    /// Shuffle the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Take the top card.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Take the top `n` cards, in the order they come off the deck.
    ///
    /// ```
    /// use holdem_core::core::Deck;
    ///
    /// let mut deck = Deck::default();
    /// let cards = deck.deal_n(9).unwrap();
    /// assert_eq!(9, cards.len());
    /// assert_eq!(43, deck.len());
    /// assert!(deck.deal_n(44).is_err());
    /// ```
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, PokerError> {
        if n > self.cards.len() {
            return Err(PokerError::WrongCardCount {
                expected: n,
                actual: self.cards.len(),
            });
        }
        Ok((0..n).filter_map(|_| self.cards.pop()).collect())
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: Card) -> bool {
        self.cards.contains(&c)
    }

    /// Given a card remove it from the deck if it is present.
    pub fn remove(&mut self, c: Card) -> bool {
        match self.cards.iter().position(|&d| d == c) {
            Some(pos) => {
                self.cards.remove(pos);
                true
            }
            None => false,
        }
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards still in the deck as a set.
    pub fn remaining(&self) -> CardSet {
        self.cards.iter().copied().collect()
    }
}

impl Default for Deck {
    /// The full 52 card deck in index order.
    fn default() -> Self {
        Self {
            cards: Card::all().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_contains_in() {
        let d = Deck::default();
        assert_eq!(52, d.len());
        assert!(d.contains(Card {
            value: Value::Eight,
            suit: Suit::Heart,
        }));
    }

    #[test]
    fn test_remove() {
        let mut d = Deck::default();
        let c = Card {
            value: Value::Ace,
            suit: Suit::Heart,
        };
        assert!(d.contains(c));
        assert!(d.remove(c));
        assert!(!d.contains(c));
        assert!(!d.remove(c));
        assert_eq!(51, d.len());
    }

    #[test]
    fn test_deal_all() {
        let mut d = Deck::default();
        let mut seen = CardSet::new();
        while let Some(c) = d.deal() {
            assert!(!seen.contains(c));
            seen.insert(c);
        }
        assert!(d.is_empty());
        assert_eq!(CardSet::full(), seen);
    }

    #[test]
    fn test_seeded_shuffle_is_repeatable() {
        let mut a = Deck::default();
        let mut b = Deck::default();
        a.shuffle(&mut StdRng::seed_from_u64(420));
        b.shuffle(&mut StdRng::seed_from_u64(420));
        assert_eq!(a, b);
        assert_ne!(Deck::default(), a);
        assert_eq!(CardSet::full(), a.remaining());
    }

    #[test]
    fn test_from_cards_rejects_repeats() {
        let ace = Card::try_from("As").unwrap();
        assert_eq!(
            Err(PokerError::DuplicateCard(ace)),
            Deck::from_cards(vec![ace, ace])
        );
        let deck = Deck::from_cards(vec![ace, Card::try_from("Kd").unwrap()]).unwrap();
        assert_eq!(2, deck.len());
    }
}
