use std::fmt;

use super::{Card, CardSet, PokerError, Value};

/// The nine hand categories, weakest first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum HandCategory {
    /// The lowest rank.
    /// No matches
    HighCard,
    /// One Card matches another.
    OnePair,
    /// Two different pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all for the same suit.
    StraightFlush,
}

impl HandCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::OnePair => "One Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The strength of the best five card hand.
///
/// Ordering is the category first and then the tie break
/// value, so derived `Ord` is the poker ordering. Two results
/// are equal exactly when the hands chop.
///
/// The tie break is a bit packed value. For straights it is the
/// index of the straight (wheel is 0, broadway is 9). For
/// everything else the upper bits (`<< 13`) hold the rank mask of
/// the cards that make the category and the lower 13 bits hold
/// the rank mask of the kickers that play.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct HoldemResult {
    category: HandCategory,
    tie_break: u32,
}

const LOW_MASK: u32 = (1 << 13) - 1;

impl HoldemResult {
    pub fn new(category: HandCategory, tie_break: u32) -> Self {
        Self {
            category,
            tie_break,
        }
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    pub fn tie_break(&self) -> u32 {
        self.tie_break
    }

    /// The values of the five cards that play, most significant first.
    ///
    /// ```
    /// use holdem_core::core::{CardSet, Rankable, Value};
    ///
    /// let cards: CardSet = "9s9d9cAhAd2c3c".parse().unwrap();
    /// assert_eq!(
    ///     [Value::Nine, Value::Nine, Value::Nine, Value::Ace, Value::Ace],
    ///     cards.rank().values()
    /// );
    /// ```
    pub fn values(&self) -> [Value; 5] {
        let major = self.tie_break >> 13;
        let minor = self.tie_break & LOW_MASK;
        let mut out = [Value::Two; 5];
        let mut idx = 0;
        let mut push = |mask: u32, times: usize| {
            for v in values_desc(mask) {
                for _ in 0..times {
                    if idx < 5 {
                        out[idx] = v;
                        idx += 1;
                    }
                }
            }
        };
        match self.category {
            HandCategory::HighCard | HandCategory::Flush => push(self.tie_break, 1),
            HandCategory::Straight | HandCategory::StraightFlush => {
                if self.tie_break == 0 {
                    // The wheel plays the ace low.
                    push(0b1111, 1);
                    push(1 << Value::Ace as u32, 1);
                } else {
                    push(0b11111 << (self.tie_break - 1), 1);
                }
            }
            HandCategory::OnePair | HandCategory::TwoPair => {
                push(major, 2);
                push(minor, 1);
            }
            HandCategory::ThreeOfAKind => {
                push(major, 3);
                push(minor, 1);
            }
            HandCategory::FullHouse => {
                push(major, 3);
                push(minor, 2);
            }
            HandCategory::FourOfAKind => {
                push(major, 4);
                push(minor, 1);
            }
        }
        out
    }
}

fn values_desc(mask: u32) -> impl Iterator<Item = Value> {
    (0..13u8)
        .rev()
        .filter(move |v| mask & (1 << v) != 0)
        .map(Value::from_u8)
}

impl fmt::Display for HoldemResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.category)?;
        for (i, v) in self.values().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str(")")
    }
}

/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u32 = 0b1_0000_0000_1111;
/// Given a bitset of hand ranks. This method
/// will determine if there's a straight, and will give the
/// rank. Wheel is the lowest, broadway is the highest value.
///
/// Returns None if the hand ranks represented don't correspond
/// to a straight.
fn rank_straight(value_set: u32) -> Option<u32> {
    // Keep only the bits that start a run of five.
    //
    //       0000111111100
    //       0001111111000
    //       0011111110000
    //       0111111100000
    //       1111111000000
    //       -------------
    //       0000111000000
    let left =
        value_set & (value_set << 1) & (value_set << 2) & (value_set << 3) & (value_set << 4);
    let idx = left.leading_zeros();
    if idx < 32 {
        Some(32 - 4 - idx)
    } else if value_set & WHEEL == WHEEL {
        Some(0)
    } else {
        None
    }
}

/// Keep only the most significant bit.
fn keep_highest(rank: u32) -> u32 {
    if rank == 0 {
        return 0;
    }
    1 << (32 - rank.leading_zeros() - 1)
}

/// Keep the N most significant bits.
///
/// This works by removing the least significant bits.
fn keep_n(rank: u32, to_keep: u32) -> u32 {
    let mut result = rank;
    while result.count_ones() > to_keep {
        result &= result - 1;
    }
    result
}

/// From a slice of values sets find if there's one that has a
/// flush
fn find_flush(suit_value_sets: &[u32]) -> Option<usize> {
    suit_value_sets.iter().position(|sv| sv.count_ones() >= 5)
}

/// Anything that can hand over its cards can be ranked.
///
/// `rank` does no validation. It is the hot path for enumeration
/// and expects the caller to have produced 5 to 7 distinct cards.
/// Use [`evaluate`] when the input is not already known to be good.
pub trait Rankable {
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Rank the cards to find the best 5 card hand.
    ///
    /// Work is bounded by the fixed hand size: one pass over the
    /// cards and a fixed number of 13 bit mask operations.
    ///
    /// # Examples
    /// ```
    /// use holdem_core::core::{CardSet, HandCategory, Rankable};
    ///
    /// let hand: CardSet = "2h2d8d8sKd6sTh".parse().unwrap();
    /// assert_eq!(HandCategory::TwoPair, hand.rank().category());
    /// ```
    fn rank(&self) -> HoldemResult {
        let mut value_to_count: [u8; 13] = [0; 13];
        let mut count_to_value: [u32; 8] = [0; 8];
        let mut suit_value_sets: [u32; 4] = [0; 4];
        let mut value_set: u32 = 0;

        for c in self.cards() {
            let v = c.value as u8;
            let s = c.suit as u8;
            value_set |= 1 << v;
            value_to_count[v as usize] += 1;
            suit_value_sets[s as usize] |= 1 << v;
        }

        // Now rotate the value to count map.
        for (value, &count) in value_to_count.iter().enumerate() {
            count_to_value[count as usize] |= 1 << value;
        }

        // If this is a flush then it could be a straight flush
        // or a flush. With at most seven cards there's no room
        // for quads or a full house alongside a flush.
        if let Some(flush_idx) = find_flush(&suit_value_sets) {
            return if let Some(rank) = rank_straight(suit_value_sets[flush_idx]) {
                HoldemResult::new(HandCategory::StraightFlush, rank)
            } else {
                HoldemResult::new(
                    HandCategory::Flush,
                    keep_n(suit_value_sets[flush_idx], 5),
                )
            };
        }

        if count_to_value[4] != 0 {
            let quads = keep_highest(count_to_value[4]);
            let high = keep_highest(value_set ^ quads);
            HoldemResult::new(HandCategory::FourOfAKind, (quads << 13) | high)
        } else if count_to_value[3].count_ones() >= 2 {
            // Two sets. The best we can make is a full house.
            let set = keep_highest(count_to_value[3]);
            let pair = count_to_value[3] ^ set;
            HoldemResult::new(HandCategory::FullHouse, (set << 13) | pair)
        } else if count_to_value[3] != 0 && count_to_value[2] != 0 {
            let set = count_to_value[3];
            let pair = keep_highest(count_to_value[2]);
            HoldemResult::new(HandCategory::FullHouse, (set << 13) | pair)
        } else if let Some(s_rank) = rank_straight(value_set) {
            HoldemResult::new(HandCategory::Straight, s_rank)
        } else if count_to_value[3] != 0 {
            let low = keep_n(value_set ^ count_to_value[3], 2);
            HoldemResult::new(HandCategory::ThreeOfAKind, (count_to_value[3] << 13) | low)
        } else if count_to_value[2].count_ones() >= 2 {
            // That can be because we have 3 pairs and a high card.
            // Or we could have two pair and two high cards.
            let pairs = keep_n(count_to_value[2], 2);
            let low = keep_highest(value_set ^ pairs);
            HoldemResult::new(HandCategory::TwoPair, (pairs << 13) | low)
        } else if count_to_value[2] == 0 {
            HoldemResult::new(HandCategory::HighCard, keep_n(value_set, 5))
        } else {
            let pair = count_to_value[2];
            let low = keep_n(value_set ^ pair, 3);
            HoldemResult::new(HandCategory::OnePair, (pair << 13) | low)
        }
    }
}

impl Rankable for CardSet {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter()
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

/// Checked evaluation of a 5, 6 or 7 card set.
///
/// ```
/// use holdem_core::core::{evaluate, CardSet, HandCategory, PokerError};
///
/// let cards: CardSet = "AsKsQsJsTs".parse().unwrap();
/// assert_eq!(HandCategory::StraightFlush, evaluate(&cards).unwrap().category());
///
/// let four: CardSet = "AsKsQsJs".parse().unwrap();
/// assert_eq!(Err(PokerError::InvalidHandSize(4)), evaluate(&four));
/// ```
pub fn evaluate(cards: &CardSet) -> Result<HoldemResult, PokerError> {
    match cards.count() {
        5..=7 => Ok(cards.rank()),
        n => Err(PokerError::InvalidHandSize(n)),
    }
}

/// Combine a board and a hand then evaluate the result.
///
/// Fails with `Overlap` if the two share a card.
pub fn evaluate_split(board: &CardSet, hole: &CardSet) -> Result<HoldemResult, PokerError> {
    evaluate(&board.combine(hole)?)
}

/// Checked evaluation of a list of cards. Repeats are an error.
pub fn evaluate_cards(cards: &[Card]) -> Result<HoldemResult, PokerError> {
    evaluate(&CardSet::from_cards(cards.iter().copied())?)
}
