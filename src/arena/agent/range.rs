use std::sync::Arc;

use crate::arena::{action::Action, game_state::GameState};
use crate::core::{CardSet, HoleCards};
use crate::holdem::HandRanking;

use super::Agent;

/// Plays a fixed top percentage of starting hands.
///
/// With a hand in range it raises as close to the size of the pot as
/// it's allowed. Otherwise it takes the most passive option, which is
/// a check when that's free and a fold when it isn't.
///
/// The ranking is shared and read only, so a whole table of these can
/// point at one copy.
#[derive(Debug, Clone)]
pub struct RangeAgent {
    ranking: Arc<HandRanking>,
    open_percent: f32,
}

impl RangeAgent {
    pub fn new(ranking: Arc<HandRanking>, open_percent: f32) -> Self {
        Self {
            ranking,
            open_percent,
        }
    }

    pub fn in_range(&self, hole_cards: &HoleCards) -> bool {
        self.ranking
            .contains_top_percent(hole_cards, self.open_percent)
    }

    /// The legal action closest to a pot sized raise.
    ///
    /// A pot sized raise puts in the call plus the pot after calling,
    /// `2 * to_call + pot`.
    fn raise_pot(game_state: &GameState) -> Action {
        let legal = game_state.possible_actions();
        let target = game_state
            .amount_to_call()
            .saturating_mul(2)
            .saturating_add(game_state.pot_size());
        if let Some(range) = legal.raise {
            Action::Raise(target.clamp(*range.start(), *range.end()))
        } else if let Some(range) = legal.bet {
            Action::Bet(target.clamp(*range.start(), *range.end()))
        } else if legal.call.is_some() {
            Action::Call
        } else {
            Action::Check
        }
    }
}

impl Agent for RangeAgent {
    fn act(&mut self, game_state: &GameState, hole_cards: &HoleCards, _board: &CardSet) -> Action {
        if self.in_range(hole_cards) {
            Self::raise_pot(game_state)
        } else {
            game_state
                .possible_actions()
                .to_vec()
                .first()
                .copied()
                .unwrap_or(Action::Check)
        }
    }
}
