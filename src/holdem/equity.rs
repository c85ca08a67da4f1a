use crate::core::{CardIter, CardSet, HoleCards, PokerError, Rankable};

/// Totals from running out every possible board.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityResult {
    /// How many distinct boards were evaluated.
    pub boards: u64,
    /// Boards where the hand was the only winner.
    pub wins: Vec<u64>,
    /// Boards where the hand shared the best hand.
    pub ties: Vec<u64>,
    /// Pot share summed over all boards. A tie between `k`
    /// hands adds `1 / k` to each of them.
    pub shares: Vec<f64>,
}

impl EquityResult {
    /// The share of the pot each hand can expect, in `0.0..=1.0`.
    pub fn equity(&self) -> Vec<f64> {
        self.shares
            .iter()
            .map(|s| s / self.boards as f64)
            .collect()
    }
}

/// Work out the exact equity of each hand by dealing every
/// possible completion of the board.
///
/// `board` may hold 0 to 5 cards. `dead` cards are known to be out
/// of the deck and will not be dealt. The hands, board and dead
/// cards must not share any card.
///
/// Preflop heads up this is 1,712,304 boards so it's not quick,
/// but it is exact.
///
/// ```
/// use holdem_core::core::CardSet;
/// use holdem_core::holdem::exhaustive_equity;
///
/// let hands = ["AsAh".parse().unwrap(), "KsKh".parse().unwrap()];
/// let board: CardSet = "2c7d9hJs".parse().unwrap();
/// let result = exhaustive_equity(&hands, &board, &CardSet::new()).unwrap();
/// assert_eq!(44, result.boards);
/// assert_eq!(vec![42, 2], result.wins);
/// ```
pub fn exhaustive_equity(
    hands: &[HoleCards],
    board: &CardSet,
    dead: &CardSet,
) -> Result<EquityResult, PokerError> {
    if hands.len() < 2 {
        return Err(PokerError::NotEnoughHands(hands.len()));
    }
    if board.count() > 5 {
        return Err(PokerError::InvalidBoardSize(board.count()));
    }

    let mut used = board.combine(dead)?;
    for hand in hands {
        used = used.combine(&hand.as_card_set())?;
    }

    let hole_sets: Vec<CardSet> = hands.iter().map(|h| h.as_card_set()).collect();
    let mut result = EquityResult {
        boards: 0,
        wins: vec![0; hands.len()],
        ties: vec![0; hands.len()],
        shares: vec![0.0; hands.len()],
    };

    for runout in CardIter::new(!used, 5 - board.count()) {
        let full_board = *board | runout;
        let winners = best_hands(&full_board, &hole_sets);
        result.boards += 1;

        // each player gets the pot divided by the number of people with exactly the
        // same hand value. This is to make sure that ties are correctly valued.
        let value = 1.0 / winners.len() as f64;
        for &idx in &winners {
            result.shares[idx] += value;
            if winners.len() == 1 {
                result.wins[idx] += 1;
            } else {
                result.ties[idx] += 1;
            }
        }
    }

    Ok(result)
}

/// Which of the hands hold the best rank on this board.
///
/// Up to 23 hands fit in a deck, more than a table has seats, so
/// this is a plain list of indices.
fn best_hands(board: &CardSet, hole_sets: &[CardSet]) -> Vec<usize> {
    let mut found = Vec::new();
    let mut max_rank = None;
    for (idx, hole) in hole_sets.iter().enumerate() {
        let rank = (*board | *hole).rank();
        match max_rank.map(|m| rank.cmp(&m)) {
            // If this is a tie then add the index.
            Some(std::cmp::Ordering::Equal) => found.push(idx),
            Some(std::cmp::Ordering::Less) => {}
            // If this is the highest then reset the set and
            // keep only the current hand.
            _ => {
                found.clear();
                found.push(idx);
                max_rank = Some(rank);
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Card;

    fn hole(s: &str) -> HoleCards {
        s.parse().unwrap()
    }

    fn set(s: &str) -> CardSet {
        s.parse().unwrap()
    }

    #[test]
    fn test_turn_aces_vs_kings() {
        let result = exhaustive_equity(
            &[hole("AsAh"), hole("KsKh")],
            &set("2c7d9hJs"),
            &CardSet::new(),
        )
        .unwrap();
        assert_eq!(44, result.boards);
        assert_eq!(vec![42, 2], result.wins);
        assert_eq!(vec![0, 0], result.ties);
        let equity = result.equity();
        assert!((equity[0] - 42.0 / 44.0).abs() < 1e-9);
    }

    #[test]
    fn test_dead_cards_are_not_dealt() {
        let result = exhaustive_equity(
            &[hole("AsAh"), hole("KsKh")],
            &set("2c7d9hJs"),
            &set("KcKd"),
        )
        .unwrap();
        assert_eq!(42, result.boards);
        assert_eq!(vec![42, 0], result.wins);
    }

    #[test]
    fn test_board_plays_splits() {
        let result = exhaustive_equity(
            &[hole("2c3c"), hole("4d5d")],
            &set("AhKhQhJhTh"),
            &CardSet::new(),
        )
        .unwrap();
        assert_eq!(1, result.boards);
        assert_eq!(vec![1, 1], result.ties);
        assert_eq!(vec![0.5, 0.5], result.equity());
    }

    #[test]
    fn test_flop_equity_sums_to_one() {
        let result = exhaustive_equity(
            &[hole("AsKs"), hole("7c7d"), hole("Th9h")],
            &set("2c3dQh"),
            &CardSet::new(),
        )
        .unwrap();
        // 52 - 6 hole cards - 3 board = 43 left, choose 2
        assert_eq!(903, result.boards);
        let total: f64 = result.equity().iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    fn deal_hands(n: usize, skip: &CardSet) -> Vec<HoleCards> {
        let cards: Vec<Card> = Card::all().filter(|c| !skip.contains(*c)).collect();
        cards
            .chunks_exact(2)
            .take(n)
            .map(|pair| HoleCards::new(pair[0], pair[1]).unwrap())
            .collect()
    }

    #[test]
    fn test_more_hands_than_seats_all_chop() {
        let board = set("AhKhQhJhTh");
        let hands = deal_hands(17, &board);
        assert_eq!(17, hands.len());
        let result = exhaustive_equity(&hands, &board, &CardSet::new()).unwrap();
        assert_eq!(1, result.boards);
        assert_eq!(vec![1; 17], result.ties);
        assert_eq!(vec![0; 17], result.wins);
        for equity in result.equity() {
            assert!((equity - 1.0 / 17.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_full_deck_of_hands() {
        // 23 hands leave 6 cards, so 6 boards.
        let hands = deal_hands(23, &CardSet::new());
        let result = exhaustive_equity(&hands, &CardSet::new(), &CardSet::new()).unwrap();
        assert_eq!(6, result.boards);
        let total: f64 = result.equity().iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            Err(PokerError::NotEnoughHands(1)),
            exhaustive_equity(&[hole("AsAh")], &CardSet::new(), &CardSet::new())
        );
        assert!(matches!(
            exhaustive_equity(
                &[hole("AsAh"), hole("AsKd")],
                &CardSet::new(),
                &CardSet::new()
            ),
            Err(PokerError::Overlap(_))
        ));
        assert_eq!(
            Err(PokerError::InvalidBoardSize(6)),
            exhaustive_equity(
                &[hole("AsAh"), hole("KsKd")],
                &set("2c3c4c5c6c7c"),
                &CardSet::new()
            )
        );
    }
}
