use std::fmt;

use super::{Card, CardSet, PokerError};

/// Number of distinct two card hands.
pub const NUM_HOLE_CARDS: usize = 1326;

/// The two private cards dealt to one player.
///
/// The higher card is always stored first, so two `HoleCards`
/// built from the same cards in either order are equal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HoleCards {
    high: Card,
    low: Card,
}

impl HoleCards {
    /// Create hole cards. Using the same card twice is an error.
    ///
    /// ```
    /// use holdem_core::core::{Card, HoleCards};
    ///
    /// let ace = Card::try_from("As").unwrap();
    /// let king = Card::try_from("Kd").unwrap();
    /// assert_eq!(
    ///     HoleCards::new(ace, king).unwrap(),
    ///     HoleCards::new(king, ace).unwrap()
    /// );
    /// assert!(HoleCards::new(ace, ace).is_err());
    /// ```
    pub fn new(first: Card, second: Card) -> Result<Self, PokerError> {
        match first.cmp(&second) {
            std::cmp::Ordering::Equal => Err(PokerError::DuplicateCard(first)),
            std::cmp::Ordering::Greater => Ok(Self {
                high: first,
                low: second,
            }),
            std::cmp::Ordering::Less => Ok(Self {
                high: second,
                low: first,
            }),
        }
    }

    /// The higher of the two cards.
    pub fn high(&self) -> Card {
        self.high
    }

    /// The lower of the two cards.
    pub fn low(&self) -> Card {
        self.low
    }

    pub fn is_pair(&self) -> bool {
        self.high.value == self.low.value
    }

    pub fn is_suited(&self) -> bool {
        self.high.suit == self.low.suit
    }

    pub fn as_card_set(&self) -> CardSet {
        CardSet::from(self.high) | self.low
    }

    /// A stable key in `0..1326`.
    ///
    /// This is the colex rank of the pair of card indices,
    /// `high * (high - 1) / 2 + low`.
    pub fn index(&self) -> usize {
        let high = self.high.index() as usize;
        let low = self.low.index() as usize;
        high * (high - 1) / 2 + low
    }

    /// Every possible hand, ordered by `index`.
    pub fn all() -> Vec<Self> {
        let mut hands = Vec::with_capacity(NUM_HOLE_CARDS);
        for high in Card::all() {
            for low in Card::all().take_while(|c| *c < high) {
                hands.push(Self { high, low });
            }
        }
        hands
    }
}

impl TryFrom<CardSet> for HoleCards {
    type Error = PokerError;

    fn try_from(set: CardSet) -> Result<Self, Self::Error> {
        let mut iter = set.iter();
        match (iter.next(), iter.next(), iter.next()) {
            (Some(low), Some(high), None) => Ok(Self { high, low }),
            _ => Err(PokerError::WrongCardCount {
                expected: 2,
                actual: set.count(),
            }),
        }
    }
}

impl std::str::FromStr for HoleCards {
    type Err = PokerError;

    /// Parse four characters like `"AsKd"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards: CardSet = s.parse()?;
        match cards.count() {
            0 | 1 => Err(PokerError::TooFewChars),
            2 => Self::try_from(cards),
            _ => Err(PokerError::UnparsedCharsRemaining),
        }
    }
}

impl TryFrom<String> for HoleCards {
    type Error = PokerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HoleCards> for String {
    fn from(hand: HoleCards) -> Self {
        hand.to_string()
    }
}

impl From<HoleCards> for CardSet {
    fn from(hand: HoleCards) -> Self {
        hand.as_card_set()
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high, self.low)
    }
}

impl fmt::Debug for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HoleCards({self})")
    }
}
