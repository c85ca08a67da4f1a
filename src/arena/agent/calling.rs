use crate::arena::{action::Action, game_state::GameState};
use crate::core::{CardSet, HoleCards};

use super::Agent;

/// Calls anything and never bets.
#[derive(Default, Debug, Clone, Copy)]
pub struct CallingAgent {}

impl Agent for CallingAgent {
    fn act(&mut self, game_state: &GameState, _hole_cards: &HoleCards, _board: &CardSet) -> Action {
        if game_state.amount_to_call() > 0 {
            Action::Call
        } else {
            Action::Check
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use crate::arena::{Agent, GameState, HoldemSimulationBuilder, TableConfig};

    use super::*;

    #[test_log::test]
    fn test_call_agents() {
        let game_state = GameState::new(vec![100; 4], TableConfig::new(5, 10)).unwrap();
        let agents: Vec<Box<dyn Agent>> = (0..4)
            .map(|_| Box::<CallingAgent>::default() as Box<dyn Agent>)
            .collect();
        let mut sim = HoldemSimulationBuilder::default()
            .rng(StdRng::seed_from_u64(7))
            .game_state(game_state)
            .agents(agents)
            .build()
            .unwrap();

        let result = sim.run().unwrap();

        assert!(result.showdown);
        assert_eq!(40, sim.game_state().pot_size());
        assert_eq!(0, result.payouts.iter().sum::<i64>());
        assert_eq!(400, result.final_stacks.iter().sum::<u32>());
    }
}
