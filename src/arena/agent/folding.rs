use crate::arena::{action::Action, game_state::GameState};
use crate::core::{CardSet, HoleCards};

use super::Agent;

/// A simple agent that folds whenever it's asked to put chips in.
#[derive(Default, Debug, Clone, Copy)]
pub struct FoldingAgent {}

impl Agent for FoldingAgent {
    fn act(&mut self, game_state: &GameState, _hole_cards: &HoleCards, _board: &CardSet) -> Action {
        if game_state.amount_to_call() > 0 {
            Action::Fold
        } else {
            Action::Check
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use crate::arena::{
        GameState, HoldemSimulationBuilder, TableConfig, game_state::Round,
    };

    use super::*;

    #[test_log::test]
    fn test_folding_agents() {
        let game_state = GameState::new(vec![100; 2], TableConfig::new(5, 10)).unwrap();
        let mut sim = HoldemSimulationBuilder::default()
            .rng(StdRng::seed_from_u64(420))
            .game_state(game_state)
            .agents(vec![Box::new(FoldingAgent {}), Box::new(FoldingAgent {})])
            .build()
            .unwrap();

        let result = sim.run().unwrap();

        assert_eq!(Round::Complete, sim.game_state().round());
        assert!(!result.showdown);
        // Small blind folds, the big blind wins it.
        assert_eq!(vec![-5, 5], result.payouts);
        assert_eq!(vec![95, 105], result.final_stacks);
    }
}
