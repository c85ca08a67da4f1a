use std::fmt;

use crate::core::{Card, CardSet, Deck, HoleCards, PokerError};

use super::game_state::Round;

/// All the cards for one hand: five board cards and two hole
/// cards per seat.
///
/// The engine never shuffles. Whoever builds this decides the
/// order, which is what makes replaying a hand exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCards {
    board: [Card; 5],
    hands: Vec<HoleCards>,
}

impl GameCards {
    /// Build from `5 + 2 * num_players` distinct cards. The first five
    /// are the board, then each following pair is a seat's hand.
    ///
    /// ```
    /// use holdem_core::arena::GameCards;
    /// use holdem_core::core::Card;
    ///
    /// let cards: Vec<Card> = Card::all().take(9).collect();
    /// let game_cards = GameCards::new(&cards, 2).unwrap();
    /// assert_eq!("2c2d2h2s3c", game_cards.board().to_string());
    /// assert_eq!("4c3s", game_cards.hand(1).unwrap().to_string());
    /// assert!(GameCards::new(&cards, 3).is_err());
    /// ```
    pub fn new(cards: &[Card], num_players: usize) -> Result<Self, PokerError> {
        let expected = 5 + 2 * num_players;
        if cards.len() != expected {
            return Err(PokerError::WrongCardCount {
                expected,
                actual: cards.len(),
            });
        }
        CardSet::from_cards(cards.iter().copied())?;

        let board = [cards[0], cards[1], cards[2], cards[3], cards[4]];
        let hands = cards[5..]
            .chunks_exact(2)
            .map(|pair| HoleCards::new(pair[0], pair[1]))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { board, hands })
    }

    /// Deal board and hands off the top of a deck.
    pub fn from_deck(deck: &mut Deck, num_players: usize) -> Result<Self, PokerError> {
        let cards = deck.deal_n(5 + 2 * num_players)?;
        Self::new(&cards, num_players)
    }

    pub fn num_players(&self) -> usize {
        self.hands.len()
    }

    /// The full five card board.
    pub fn board(&self) -> CardSet {
        self.board_n(5)
    }

    /// The first `n` board cards.
    pub fn board_n(&self, n: usize) -> CardSet {
        self.board.iter().take(n).copied().collect()
    }

    /// The board that is face up during a round.
    pub fn board_for(&self, round: Round) -> CardSet {
        self.board_n(round.board_cards())
    }

    pub fn board_cards(&self) -> &[Card; 5] {
        &self.board
    }

    pub fn hand(&self, seat: usize) -> Option<&HoleCards> {
        self.hands.get(seat)
    }

    pub fn hands(&self) -> &[HoleCards] {
        &self.hands
    }
}

impl fmt::Display for GameCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "board:")?;
        for c in &self.board {
            write!(f, " {c}")?;
        }
        for (seat, hand) in self.hands.iter().enumerate() {
            write!(f, "\nseat {seat}: {hand}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_layout() {
        let cards: Vec<Card> = ["Ah", "Kh", "Qh", "Jh", "Th", "2c", "3d", "4s", "5s"]
            .iter()
            .map(|s| Card::try_from(*s).unwrap())
            .collect();
        let gc = GameCards::new(&cards, 2).unwrap();
        assert_eq!(2, gc.num_players());
        assert_eq!(0, gc.board_for(Round::Preflop).count());
        assert_eq!(3, gc.board_for(Round::Flop).count());
        assert_eq!(4, gc.board_for(Round::Turn).count());
        assert_eq!(5, gc.board_for(Round::River).count());
        assert_eq!(5, gc.board_for(Round::Showdown).count());
        assert_eq!("3d2c", gc.hand(0).unwrap().to_string());
        assert!(gc.hand(2).is_none());
        assert_eq!(
            "board: Ah Kh Qh Jh Th\nseat 0: 3d2c\nseat 1: 5s4s",
            gc.to_string()
        );
    }

    #[test]
    fn test_wrong_card_count() {
        let cards: Vec<Card> = Card::all().take(8).collect();
        let err = GameCards::new(&cards, 2).unwrap_err();
        assert_eq!(
            PokerError::WrongCardCount {
                expected: 9,
                actual: 8
            },
            err
        );
        assert_eq!("Expected 9 cards, got 8", err.to_string());

        let mut deck = Deck::default();
        assert_eq!(
            Err(PokerError::WrongCardCount {
                expected: 5 + 2 * 24,
                actual: 52
            }),
            GameCards::from_deck(&mut deck, 24)
        );
    }

    #[test]
    fn test_rejects_repeats() {
        let ace = Card::try_from("As").unwrap();
        let mut cards: Vec<Card> = Card::all().take(8).collect();
        cards.push(ace);
        cards[0] = ace;
        assert_eq!(
            Err(PokerError::DuplicateCard(ace)),
            GameCards::new(&cards, 2)
        );
    }

    #[test]
    fn test_from_shuffled_deck() {
        let mut deck = Deck::default();
        deck.shuffle(&mut StdRng::seed_from_u64(3));
        let gc = GameCards::from_deck(&mut deck, 6).unwrap();
        assert_eq!(6, gc.hands().len());
        assert_eq!(52 - 17, deck.len());
        let mut all = gc.board();
        for hand in gc.hands() {
            all = all.combine(&hand.as_card_set()).unwrap();
        }
        assert_eq!(17, all.count());
    }
}
