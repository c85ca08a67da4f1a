use std::fmt;

use super::error::PokerError;

/// Card rank or value.
/// This is basically the face value - 2
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a u8 and convert it to a value.
    ///
    /// Values above 12 wrap around, so callers are expected
    /// to only pass in values from `0..13`.
    ///
    /// ```
    /// use holdem_core::core::Value;
    ///
    /// assert_eq!(Value::Two, Value::from_u8(0));
    /// assert_eq!(Value::Ace, Value::from_u8(12));
    /// ```
    pub fn from_u8(v: u8) -> Self {
        VALUES[(v % 13) as usize]
    }

    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when generating all possible starting hands.
    pub fn values() -> [Self; 13] {
        VALUES
    }

    /// Given a character parse that char into a value.
    /// Case is important.
    ///
    /// ```
    /// use holdem_core::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(None, Value::from_char('t'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'T' => Some(Self::Ten),
            '9' => Some(Self::Nine),
            '8' => Some(Self::Eight),
            '7' => Some(Self::Seven),
            '6' => Some(Self::Six),
            '5' => Some(Self::Five),
            '4' => Some(Self::Four),
            '3' => Some(Self::Three),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    /// Convert this Value to a char.
    pub fn to_char(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::Ten => 'T',
            Self::Nine => '9',
            Self::Eight => '8',
            Self::Seven => '7',
            Self::Six => '6',
            Self::Five => '5',
            Self::Four => '4',
            Self::Three => '3',
            Self::Two => '2',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Clubs
    Club = 0,
    /// Diamonds
    Diamond = 1,
    /// Hearts
    Heart = 2,
    /// Spades
    Spade = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Self; 4] {
        SUITS
    }

    /// Translate a suit from a u8. Values wrap around at 4.
    pub fn from_u8(s: u8) -> Self {
        SUITS[(s % 4) as usize]
    }

    /// Given a character that represents a suit try and parse that char.
    /// Suits are lower case.
    pub fn from_char(s: char) -> Option<Self> {
        match s {
            'c' => Some(Self::Club),
            'd' => Some(Self::Diamond),
            'h' => Some(Self::Heart),
            's' => Some(Self::Spade),
            _ => None,
        }
    }

    /// This Suit to a character.
    pub fn to_char(self) -> char {
        match self {
            Self::Club => 'c',
            Self::Diamond => 'd',
            Self::Heart => 'h',
            Self::Spade => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The number of distinct cards.
pub const DECK_SIZE: u8 = 52;

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Every card maps to exactly one index in `0..52` with
/// `index = value * 4 + suit`. So `2c` is 0 and `As` is 51.
/// Ordering follows that index, rank first then suit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Build a card from its index, failing for anything outside `0..52`.
    ///
    /// ```
    /// use holdem_core::core::{Card, Suit, Value};
    ///
    /// assert_eq!(Card::new(Value::Ace, Suit::Spade), Card::from_index(51).unwrap());
    /// assert!(Card::from_index(52).is_err());
    /// ```
    pub fn from_index(idx: u8) -> Result<Self, PokerError> {
        if idx >= DECK_SIZE {
            return Err(PokerError::CardIndexOutOfRange(idx));
        }
        Ok(Self {
            value: Value::from_u8(idx / 4),
            suit: Suit::from_u8(idx % 4),
        })
    }

    /// The index of this card in `0..52`.
    pub fn index(self) -> u8 {
        (self.value as u8) * 4 + self.suit as u8
    }

    /// Iterate over all 52 cards in index order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..DECK_SIZE).map(|idx| Card {
            value: Value::from_u8(idx / 4),
            suit: Suit::from_u8(idx % 4),
        })
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.index()
    }
}

impl TryFrom<u8> for Card {
    type Error = PokerError;

    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        Self::from_index(idx)
    }
}

impl TryFrom<&str> for Card {
    type Error = PokerError;

    /// Parse the two character notation, value then suit.
    ///
    /// ```
    /// use holdem_core::core::{Card, Suit, Value};
    ///
    /// let card = Card::try_from("Td").unwrap();
    /// assert_eq!(Card::new(Value::Ten, Suit::Diamond), card);
    /// assert!(Card::try_from("td").is_err());
    /// assert!(Card::try_from("Td2").is_err());
    /// ```
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        let value_char = chars.next().ok_or(PokerError::TooFewChars)?;
        let suit_char = chars.next().ok_or(PokerError::TooFewChars)?;
        if chars.next().is_some() {
            return Err(PokerError::UnparsedCharsRemaining);
        }
        let value =
            Value::from_char(value_char).ok_or(PokerError::UnexpectedValueChar(value_char))?;
        let suit = Suit::from_char(suit_char).ok_or(PokerError::UnexpectedSuitChar(suit_char))?;
        Ok(Self { value, suit })
    }
}

impl TryFrom<String> for Card {
    type Error = PokerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl std::str::FromStr for Card {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}
