use std::fmt;

/// One pot at the end of a hand.
///
/// Each pot is funded by the slice `[lower, upper)` of every
/// player's total contribution. Folded players can fund a pot but
/// are never eligible to win it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pot {
    pub amount: u32,
    /// Seats that can win this pot, lowest first.
    pub eligible: Vec<usize>,
    pub lower: u32,
    pub upper: u32,
}

impl fmt::Display for Pot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} chips for seats {:?}", self.amount, self.eligible)
    }
}

/// Split the contributions into a main pot and side pots.
///
/// Bands come from the sorted distinct contributions of the players
/// still in the hand. Chips that folded players put in above the top
/// band go into the last pot.
///
/// ```
/// use holdem_core::arena::pot::build_pots;
///
/// let pots = build_pots(&[50, 100, 100], &[true, true, true]);
/// assert_eq!(2, pots.len());
/// assert_eq!(150, pots[0].amount);
/// assert_eq!(vec![0, 1, 2], pots[0].eligible);
/// assert_eq!(100, pots[1].amount);
/// assert_eq!(vec![1, 2], pots[1].eligible);
/// ```
pub fn build_pots(contributions: &[u32], in_hand: &[bool]) -> Vec<Pot> {
    let mut thresholds: Vec<u32> = contributions
        .iter()
        .zip(in_hand)
        .filter(|(c, live)| **live && **c > 0)
        .map(|(c, _)| *c)
        .collect();
    thresholds.sort_unstable();
    thresholds.dedup();

    let mut pots: Vec<Pot> = Vec::with_capacity(thresholds.len());
    let mut lower = 0;
    for &upper in &thresholds {
        let amount = contributions
            .iter()
            .map(|c| (*c).min(upper) - (*c).min(lower))
            .sum();
        let eligible = (0..contributions.len())
            .filter(|&idx| in_hand[idx] && contributions[idx] >= upper)
            .collect();
        pots.push(Pot {
            amount,
            eligible,
            lower,
            upper,
        });
        lower = upper;
    }

    // Dead money above the last band.
    let leftover: u32 = contributions.iter().map(|c| c.saturating_sub(lower)).sum();
    if leftover > 0 {
        match pots.last_mut() {
            Some(last) => last.amount += leftover,
            None => pots.push(Pot {
                amount: leftover,
                eligible: (0..contributions.len()).filter(|&idx| in_hand[idx]).collect(),
                lower,
                upper: lower,
            }),
        }
    }

    pots
}

/// Divide a pot between the winners. Odd chips go one at a time to
/// the winners in seat order, starting from seat 0.
pub fn split_pot(amount: u32, winners: &[usize]) -> Vec<(usize, u32)> {
    if winners.is_empty() {
        return vec![];
    }
    let mut sorted = winners.to_vec();
    sorted.sort_unstable();
    let share = amount / sorted.len() as u32;
    let remainder = (amount % sorted.len() as u32) as usize;
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, seat)| (seat, share + u32::from(i < remainder)))
        .collect()
}
