use std::fmt;

use crate::core::{Card, HoleCards, PokerError, Suit, Value};

/// Number of suit isomorphic starting hand classes.
pub const NUM_STARTING_HANDS: usize = 169;

/// Enum to represent how the suits of a hand correspond to each other.
/// `Suitedness::Suited` will mean that all cards have the same suit
/// `Suitedness::OffSuit` will mean that the cards have different suits.
/// Pocket pairs are always `OffSuit`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Suitedness {
    /// All of the cards are the same suit
    Suited,
    /// None of the cards are the same suit
    OffSuit,
}

/// `StartingHand` represents the class of a two card starting hand
/// of texas holdem once suits are forgotten. There are 169 of
/// them: 13 pairs, 78 suited and 78 offsuit.
///
/// It can generate all the possible actual starting hands.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[derive(Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct StartingHand {
    high: Value,
    low: Value,
    suitedness: Suitedness,
}

impl StartingHand {
    /// Create a starting hand from two values in either order.
    ///
    /// ```
    /// use holdem_core::core::Value;
    /// use holdem_core::holdem::{StartingHand, Suitedness};
    ///
    /// let hand = StartingHand::new(Value::King, Value::Ace, Suitedness::Suited).unwrap();
    /// assert_eq!("AKs", hand.to_string());
    /// assert!(StartingHand::new(Value::Ace, Value::Ace, Suitedness::Suited).is_err());
    /// ```
    pub fn new(
        value_one: Value,
        value_two: Value,
        suitedness: Suitedness,
    ) -> Result<Self, PokerError> {
        let (high, low) = if value_one >= value_two {
            (value_one, value_two)
        } else {
            (value_two, value_one)
        };
        // Can't have a suited pair. Not unless you're cheating.
        if high == low && suitedness == Suitedness::Suited {
            return Err(PokerError::InvalidStartingHand(format!(
                "{}{}s",
                high.to_char(),
                low.to_char()
            )));
        }
        Ok(Self {
            high,
            low,
            suitedness,
        })
    }

    /// The class of concrete hole cards.
    pub fn from_hole_cards(hole: &HoleCards) -> Self {
        Self {
            high: hole.high().value,
            low: hole.low().value,
            suitedness: if hole.is_suited() {
                Suitedness::Suited
            } else {
                Suitedness::OffSuit
            },
        }
    }

    pub fn high(&self) -> Value {
        self.high
    }

    pub fn low(&self) -> Value {
        self.low
    }

    pub fn suitedness(&self) -> Suitedness {
        self.suitedness
    }

    /// Is this starting hand a pocket pair?
    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    pub fn is_suited(&self) -> bool {
        self.suitedness == Suitedness::Suited
    }

    /// Position of this class in the 13x13 grid, read row by row.
    ///
    /// Aces are row and column 0. Pairs sit on the diagonal, suited
    /// hands above it and offsuit hands below it. So `AA` is 0,
    /// `AKs` is 1, `AKo` is 13 and `22` is 168.
    pub fn index(&self) -> usize {
        let hi = 12 - self.high as usize;
        let lo = 12 - self.low as usize;
        let (row, col) = match self.suitedness {
            Suitedness::Suited => (hi, lo),
            Suitedness::OffSuit => (lo, hi),
        };
        row * 13 + col
    }

    /// Inverse of `index`.
    pub fn from_index(idx: usize) -> Result<Self, PokerError> {
        if idx >= NUM_STARTING_HANDS {
            return Err(PokerError::StartingHandIndexOutOfRange(idx));
        }
        let row = idx / 13;
        let col = idx % 13;
        let value = |x: usize| Value::from_u8((12 - x) as u8);
        Ok(if row < col {
            Self {
                high: value(row),
                low: value(col),
                suitedness: Suitedness::Suited,
            }
        } else {
            Self {
                high: value(col),
                low: value(row),
                suitedness: Suitedness::OffSuit,
            }
        })
    }

    /// Create every possible unique StartingHand, ordered by `index`.
    pub fn all() -> Vec<Self> {
        (0..NUM_STARTING_HANDS)
            .filter_map(|idx| Self::from_index(idx).ok())
            .collect()
    }

    /// The first concrete hand of this class by suit index. Suited
    /// hands are both clubs. Otherwise the high card is a club and the
    /// low card a diamond.
    pub fn representative(&self) -> HoleCards {
        let high = Card::new(self.high, Suit::Club);
        let low_suit = match self.suitedness {
            Suitedness::Suited => Suit::Club,
            Suitedness::OffSuit => Suit::Diamond,
        };
        Self::hole(high, Card::new(self.low, low_suit))
    }

    /// Get all the possible hole cards this starting hand could be.
    ///
    /// That's 6 for a pair, 4 for a suited hand and 12 for the rest.
    pub fn possible_hands(&self) -> Vec<HoleCards> {
        let suits = Suit::suits();
        match self.suitedness {
            Suitedness::Suited => suits
                .iter()
                .map(|s| Self::hole(Card::new(self.high, *s), Card::new(self.low, *s)))
                .collect(),
            Suitedness::OffSuit => {
                let expected_hands = if self.is_pair() { 6 } else { 12 };
                let mut hands = Vec::with_capacity(expected_hands);
                for (i, suit_one) in suits.iter().enumerate() {
                    for suit_two in &suits[i + 1..] {
                        hands.push(Self::hole(
                            Card::new(self.high, *suit_one),
                            Card::new(self.low, *suit_two),
                        ));
                        // If this isn't a pair then the flipped suits is needed.
                        if !self.is_pair() {
                            hands.push(Self::hole(
                                Card::new(self.high, *suit_two),
                                Card::new(self.low, *suit_one),
                            ));
                        }
                    }
                }
                hands
            }
        }
    }

    /// Does this class contain the given hole cards?
    pub fn contains(&self, hole: &HoleCards) -> bool {
        Self::from_hole_cards(hole) == *self
    }

    fn hole(a: Card, b: Card) -> HoleCards {
        // Every caller builds two cards that differ in value or suit.
        match HoleCards::new(a, b) {
            Ok(h) => h,
            Err(_) => unreachable!("starting hand cards are distinct"),
        }
    }
}

impl From<HoleCards> for StartingHand {
    fn from(hole: HoleCards) -> Self {
        Self::from_hole_cards(&hole)
    }
}

impl From<&HoleCards> for StartingHand {
    fn from(hole: &HoleCards) -> Self {
        Self::from_hole_cards(hole)
    }
}

impl std::str::FromStr for StartingHand {
    type Err = PokerError;

    /// Parse `"AA"`, `"AKs"` or `"AKo"`. The values can come in either order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PokerError::InvalidStartingHand(s.to_string());
        let mut chars = s.chars();
        let one = chars.next().ok_or(PokerError::TooFewChars)?;
        let two = chars.next().ok_or(PokerError::TooFewChars)?;
        let one = Value::from_char(one).ok_or(PokerError::UnexpectedValueChar(one))?;
        let two = Value::from_char(two).ok_or(PokerError::UnexpectedValueChar(two))?;
        let suitedness = match chars.next() {
            None if one == two => Suitedness::OffSuit,
            Some('s') if one != two => Suitedness::Suited,
            Some('o') if one != two => Suitedness::OffSuit,
            _ => return Err(invalid()),
        };
        if chars.next().is_some() {
            return Err(PokerError::UnparsedCharsRemaining);
        }
        Self::new(one, two, suitedness)
    }
}

impl TryFrom<String> for StartingHand {
    type Error = PokerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StartingHand> for String {
    fn from(hand: StartingHand) -> Self {
        hand.to_string()
    }
}

impl fmt::Display for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high, self.low)?;
        match (self.is_pair(), self.suitedness) {
            (true, _) => Ok(()),
            (false, Suitedness::Suited) => f.write_str("s"),
            (false, Suitedness::OffSuit) => f.write_str("o"),
        }
    }
}

impl fmt::Debug for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StartingHand({self})")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_aces() {
        let sh: StartingHand = "AA".parse().unwrap();
        assert_eq!(6, sh.possible_hands().len());
        assert_eq!(0, sh.index());
    }

    #[test]
    fn test_suited_connector() {
        let sh: StartingHand = "AKs".parse().unwrap();
        assert_eq!(4, sh.possible_hands().len());
        assert_eq!(1, sh.index());
    }

    #[test]
    fn test_unsuited_connector() {
        let sh: StartingHand = "AKo".parse().unwrap();
        assert_eq!(12, sh.possible_hands().len());
        assert_eq!(13, sh.index());
    }

    #[test]
    fn test_deuces_last() {
        assert_eq!(168, "22".parse::<StartingHand>().unwrap().index());
    }

    #[test]
    fn test_starting_hand_count() {
        let all = StartingHand::all();
        assert_eq!(NUM_STARTING_HANDS, all.len());
        let num_hands: usize = all.iter().map(|h| h.possible_hands().len()).sum();
        assert_eq!(1326, num_hands);
    }

    #[test]
    fn test_index_round_trip() {
        for (idx, hand) in StartingHand::all().into_iter().enumerate() {
            assert_eq!(idx, hand.index());
            assert_eq!(hand, hand.to_string().parse().unwrap());
            assert_eq!(hand, StartingHand::from(hand.representative()));
            for hole in hand.possible_hands() {
                assert!(hand.contains(&hole));
            }
        }
        assert_eq!(
            Err(PokerError::StartingHandIndexOutOfRange(169)),
            StartingHand::from_index(169)
        );
    }

    #[test]
    fn test_group_sizes() {
        let mut counts: HashMap<StartingHand, usize> = HashMap::new();
        for hole in HoleCards::all() {
            *counts.entry(hole.into()).or_default() += 1;
        }
        assert_eq!(NUM_STARTING_HANDS, counts.len());
        let pairs = counts.iter().filter(|(h, _)| h.is_pair()).count();
        let suited = counts.iter().filter(|(h, _)| h.is_suited()).count();
        assert_eq!(13, pairs);
        assert_eq!(78, suited);
        for (hand, count) in counts {
            let expected = match (hand.is_pair(), hand.is_suited()) {
                (true, _) => 6,
                (false, true) => 4,
                (false, false) => 12,
            };
            assert_eq!(expected, count, "{hand}");
        }
    }

    #[test]
    fn test_representative() {
        assert_eq!("AcKc", "AKs".parse::<StartingHand>().unwrap().representative().to_string());
        assert_eq!("AcKd", "KAo".parse::<StartingHand>().unwrap().representative().to_string());
        assert_eq!("7d7c", "77".parse::<StartingHand>().unwrap().representative().to_string());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "AAs".parse::<StartingHand>(),
            Err(PokerError::InvalidStartingHand(_))
        ));
        assert!(matches!(
            "AK".parse::<StartingHand>(),
            Err(PokerError::InvalidStartingHand(_))
        ));
        assert!(matches!(
            "AKx".parse::<StartingHand>(),
            Err(PokerError::InvalidStartingHand(_))
        ));
        assert_eq!(Err(PokerError::TooFewChars), "A".parse::<StartingHand>());
        assert_eq!(
            Err(PokerError::UnexpectedValueChar('1')),
            "1As".parse::<StartingHand>()
        );
        assert_eq!(
            Err(PokerError::UnparsedCharsRemaining),
            "AKsx".parse::<StartingHand>()
        );
    }
}
