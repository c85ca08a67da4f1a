//! Mapping between concrete hole cards and the 169 starting hand
//! classes, plus ordered rankings of those classes.

use crate::core::{HoleCards, PokerError};

use super::starting_hand::{NUM_STARTING_HANDS, StartingHand};

/// The class index in `0..169` of some hole cards.
///
/// Relabeling suits never changes the result.
///
/// ```
/// use holdem_core::holdem::range;
///
/// let a = range::index(&"AhKh".parse().unwrap());
/// let b = range::index(&"KsAs".parse().unwrap());
/// assert_eq!(a, b);
/// assert_eq!("AKs", range::hand(a).unwrap().to_string());
/// ```
pub fn index(hole: &HoleCards) -> usize {
    StartingHand::from_hole_cards(hole).index()
}

/// The starting hand class for an index.
pub fn hand(idx: usize) -> Result<StartingHand, PokerError> {
    StartingHand::from_index(idx)
}

/// A best to worst ordering of all 169 starting hands.
///
/// Built once and then only read, so it can be shared between
/// threads and agents with an `Arc`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<StartingHand>", into = "Vec<StartingHand>"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandRanking {
    order: Vec<StartingHand>,
    // position of each class by class index
    positions: Vec<usize>,
}

impl HandRanking {
    /// Build from a complete ordering. Every class must appear exactly once.
    pub fn new(order: Vec<StartingHand>) -> Result<Self, PokerError> {
        if order.len() != NUM_STARTING_HANDS {
            return Err(PokerError::InvalidStartingHand(format!(
                "ranking has {} hands, expected {}",
                order.len(),
                NUM_STARTING_HANDS
            )));
        }
        let mut positions = vec![usize::MAX; NUM_STARTING_HANDS];
        for (pos, hand) in order.iter().enumerate() {
            let slot = &mut positions[hand.index()];
            if *slot != usize::MAX {
                return Err(PokerError::InvalidStartingHand(hand.to_string()));
            }
            *slot = pos;
        }
        Ok(Self { order, positions })
    }

    /// Build from a score per class. Higher scores rank better and
    /// equal scores keep class index order.
    ///
    /// This is how an aggregate statistic (average showdown place,
    /// win rate) loaded from some external store becomes a ranking.
    pub fn from_scores<I>(scores: I) -> Result<Self, PokerError>
    where
        I: IntoIterator<Item = (StartingHand, f64)>,
    {
        let mut scored: Vec<(StartingHand, f64)> = scores.into_iter().collect();
        scored.sort_by(|a, b| {
            b.1.total_cmp(&a.1)
                .then_with(|| a.0.index().cmp(&b.0.index()))
        });
        Self::new(scored.into_iter().map(|(h, _)| h).collect())
    }

    /// The ranking in class index order.
    pub fn by_index() -> Self {
        let order = StartingHand::all();
        let positions = (0..NUM_STARTING_HANDS).collect();
        Self { order, positions }
    }

    /// Zero based place of a class, 0 is the best.
    pub fn position(&self, hand: &StartingHand) -> usize {
        self.positions[hand.index()]
    }

    pub fn hands(&self) -> &[StartingHand] {
        &self.order
    }

    /// The best `169 * pct / 100` classes, truncated toward zero.
    pub fn top_percent(&self, pct: f32) -> &[StartingHand] {
        let absolute = (NUM_STARTING_HANDS as f32 * pct / 100.0).clamp(0.0, NUM_STARTING_HANDS as f32);
        &self.order[..absolute as usize]
    }

    /// Are the hole cards in the best `pct` percent of classes?
    pub fn contains_top_percent(&self, hole: &HoleCards, pct: f32) -> bool {
        let absolute = NUM_STARTING_HANDS as f32 * pct / 100.0;
        (self.position(&StartingHand::from_hole_cards(hole)) as f32) < absolute.floor()
    }
}

impl TryFrom<Vec<StartingHand>> for HandRanking {
    type Error = PokerError;

    fn try_from(value: Vec<StartingHand>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HandRanking> for Vec<StartingHand> {
    fn from(ranking: HandRanking) -> Self {
        ranking.order
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

    use super::*;
    use crate::core::{Card, Suit};

    fn permute_suits(hole: &HoleCards, perm: &[Suit; 4]) -> HoleCards {
        let swap = |c: Card| Card::new(c.value, perm[c.suit as usize]);
        HoleCards::new(swap(hole.high()), swap(hole.low())).unwrap()
    }

    #[test]
    fn test_index_counts() {
        let indexes: HashSet<usize> = HoleCards::all().iter().map(index).collect();
        assert_eq!(NUM_STARTING_HANDS, indexes.len());
        assert!(indexes.iter().all(|i| *i < NUM_STARTING_HANDS));
    }

    #[test]
    fn test_suit_isomorphism() {
        let mut rng = StdRng::seed_from_u64(169);
        let mut perm = Suit::suits();
        for _ in 0..24 {
            perm.shuffle(&mut rng);
            for hole in HoleCards::all() {
                assert_eq!(index(&hole), index(&permute_suits(&hole, &perm)));
            }
        }
    }

    #[test]
    fn test_round_trip_idempotent() {
        for hole in HoleCards::all() {
            let class = hand(index(&hole)).unwrap();
            let again = hand(index(&class.representative())).unwrap();
            assert_eq!(class, again);
            assert!(class.contains(&hole));
        }
        assert!(hand(NUM_STARTING_HANDS).is_err());
    }

    #[test]
    fn test_ranking_rejects_bad_orders() {
        let mut order = StartingHand::all();
        order.pop();
        assert!(HandRanking::new(order.clone()).is_err());
        order.push(order[0]);
        assert!(HandRanking::new(order).is_err());
    }

    #[test]
    fn test_top_percent() {
        let ranking = HandRanking::by_index();
        // 169 * 10 / 100 = 16.9 which truncates to 16
        assert_eq!(16, ranking.top_percent(10.0).len());
        assert_eq!(0, ranking.top_percent(0.0).len());
        assert_eq!(169, ranking.top_percent(100.0).len());

        let aces: HoleCards = "AsAd".parse().unwrap();
        let deuces: HoleCards = "2s2d".parse().unwrap();
        assert!(ranking.contains_top_percent(&aces, 1.0));
        assert!(!ranking.contains_top_percent(&aces, 0.5));
        assert!(!ranking.contains_top_percent(&deuces, 99.0));
        assert!(ranking.contains_top_percent(&deuces, 100.0));
    }

    #[test]
    fn test_from_scores() {
        // Favor lower cards: the reverse of index order.
        let scores = StartingHand::all()
            .into_iter()
            .map(|h| (h, h.index() as f64));
        let ranking = HandRanking::from_scores(scores).unwrap();
        assert_eq!("22", ranking.hands()[0].to_string());
        assert_eq!(168, ranking.position(&"AA".parse().unwrap()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let ranking = HandRanking::by_index();
        let json = serde_json::to_string(&ranking).unwrap();
        assert!(json.starts_with("[\"AA\",\"AKs\""));
        let back: HandRanking = serde_json::from_str(&json).unwrap();
        assert_eq!(ranking, back);
    }
}
