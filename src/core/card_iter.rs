use super::{Card, CardSet, Deck};

/// Iterate every `num_cards` sized subset of a `CardSet`.
///
/// Subsets come out in lexicographic order of the card indices.
/// Asking for zero cards yields the empty set once, and asking for
/// more cards than there are yields nothing.
///
/// ```
/// use holdem_core::core::{CardIter, CardSet};
///
/// let cards: CardSet = "AsKsQsJs".parse().unwrap();
/// assert_eq!(6, CardIter::new(cards, 2).count());
/// ```
#[derive(Debug, Clone)]
pub struct CardIter {
    // All the possible cards that can be dealt
    possible_cards: Vec<Card>,

    // Set of current offsets being used to create card sets.
    idx: Vec<usize>,

    // size of card sets requested.
    num_cards: usize,

    done: bool,
}

impl CardIter {
    pub fn new(possible_cards: CardSet, num_cards: usize) -> CardIter {
        let possible_cards: Vec<Card> = possible_cards.iter().collect();
        CardIter {
            done: num_cards > possible_cards.len(),
            possible_cards,
            idx: (0..num_cards).collect(),
            num_cards,
        }
    }

    fn current(&self) -> CardSet {
        self.idx
            .iter()
            .fold(CardSet::new(), |set, &i| set | self.possible_cards[i])
    }

    /// Move the offsets forward to the next subset. Returns false
    /// when there isn't one.
    fn advance(&mut self) -> bool {
        let n = self.possible_cards.len();
        // Find the right most offset that still has room to move.
        let mut level = self.num_cards;
        while level > 0 {
            level -= 1;
            if self.idx[level] < n - (self.num_cards - level) {
                self.idx[level] += 1;
                for next in level + 1..self.num_cards {
                    self.idx[next] = self.idx[next - 1] + 1;
                }
                return true;
            }
        }
        false
    }
}

impl Iterator for CardIter {
    type Item = CardSet;

    fn next(&mut self) -> Option<CardSet> {
        if self.done {
            return None;
        }
        let result = self.current();
        self.done = !self.advance();
        Some(result)
    }
}

/// This is useful for trying every possible 5 card hand
///
/// Probably not something that's going to be done in real
/// use cases, but still not bad.
impl IntoIterator for Deck {
    type Item = CardSet;
    type IntoIter = CardIter;

    fn into_iter(self) -> CardIter {
        CardIter::new(self.remaining(), 5)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_iter_one() {
        let set: CardSet = "2s".parse().unwrap();
        for cards in CardIter::new(set, 1) {
            assert_eq!(1, cards.count());
        }
        assert_eq!(1, CardIter::new(set, 1).count());
    }

    #[test]
    fn test_iter_zero() {
        let set: CardSet = "2s3s".parse().unwrap();
        let all: Vec<CardSet> = CardIter::new(set, 0).collect();
        assert_eq!(vec![CardSet::new()], all);
    }

    #[test]
    fn test_too_many_asked_for() {
        let set: CardSet = "2s3s".parse().unwrap();
        assert_eq!(0, CardIter::new(set, 3).count());
        assert_eq!(0, CardIter::new(CardSet::new(), 1).count());
    }

    #[test]
    fn test_iter_two() {
        let set: CardSet = "2s3s4s".parse().unwrap();
        let subsets: Vec<CardSet> = CardIter::new(set, 2).collect();
        assert_eq!(3, subsets.len());
        assert_eq!(
            vec![
                "2s3s".parse::<CardSet>().unwrap(),
                "2s4s".parse().unwrap(),
                "3s4s".parse().unwrap(),
            ],
            subsets
        );
    }

    #[test]
    fn test_iter_seven_choose_five() {
        let set: CardSet = "AsKsQsJsTs9s8s".parse().unwrap();
        let subsets: HashSet<CardSet> = CardIter::new(set, 5).collect();
        assert_eq!(21, subsets.len());
        assert!(subsets.iter().all(|s| s.count() == 5));
    }

    #[test]
    fn test_full_deck_two_cards() {
        assert_eq!(1326, CardIter::new(CardSet::full(), 2).count());
    }

    #[test]
    fn test_deck_into_iter() {
        let mut deck = Deck::default();
        for c in Card::all().skip(7) {
            deck.remove(c);
        }
        assert_eq!(21, deck.into_iter().count());
    }
}
