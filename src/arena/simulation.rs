use std::fmt;

use tracing::{Level, event};

use super::Agent;
use super::action::{Action, PlayerAction};
use super::errors::{GameStateError, HoldemSimulationError};
use super::game_cards::GameCards;
use super::game_state::GameState;
use super::pot::Pot;

/// What came out of one simulated hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandResult {
    /// Net chips per seat, summing to zero.
    pub payouts: Vec<i64>,
    /// Stacks to carry into the next hand.
    pub final_stacks: Vec<u32>,
    pub showdown: bool,
    pub pots: Vec<Pot>,
}

/// Plays a hand of holdem with agents deciding for each seat.
///
/// Build one with [`super::HoldemSimulationBuilder`].
pub struct HoldemSimulation {
    pub(crate) agents: Vec<Box<dyn Agent>>,
    pub(crate) game_state: GameState,
    pub(crate) cards: GameCards,
}

impl HoldemSimulation {
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn cards(&self) -> &GameCards {
        &self.cards
    }

    pub fn more_actions(&self) -> bool {
        !self.game_state.is_terminal()
    }

    /// Ask the active agent for an action and apply it.
    ///
    /// An illegal action is logged and replaced with a fold, or a
    /// check when nothing is owed.
    pub fn step(&mut self) -> Result<(), HoldemSimulationError> {
        let Some(idx) = self.game_state.active_player() else {
            return Ok(());
        };
        let hole_cards = *self
            .cards
            .hand(idx)
            .ok_or(HoldemSimulationError::AgentCountMismatch)?;
        let board = self.cards.board_for(self.game_state.round());
        let action = self.agents[idx].act(&self.game_state, &hole_cards, &board);

        match self
            .game_state
            .execute_action(PlayerAction::new(idx, action))
        {
            Err(GameStateError::IllegalAction { .. }) => {
                let fallback = if self.game_state.amount_to_call() > 0 {
                    Action::Fold
                } else {
                    Action::Check
                };
                event!(
                    Level::WARN,
                    position = idx,
                    %action,
                    %fallback,
                    "illegal agent action replaced"
                );
                self.game_state
                    .execute_action(PlayerAction::new(idx, fallback))?;
            }
            other => other?,
        }
        Ok(())
    }

    /// Play until the hand is over and settle the pots.
    pub fn run(&mut self) -> Result<HandResult, HoldemSimulationError> {
        while self.more_actions() {
            self.step()?;
        }

        let payouts = self.game_state.payouts(&self.cards)?;
        let final_stacks = self
            .game_state
            .starting_stacks()
            .iter()
            .zip(payouts.iter())
            .map(|(start, net)| (i64::from(*start) + net) as u32)
            .collect();
        let result = HandResult {
            payouts,
            final_stacks,
            showdown: self.game_state.is_showdown(),
            pots: self.game_state.all_pots(),
        };

        event!(
            Level::INFO,
            showdown = result.showdown,
            pot = self.game_state.pot_size(),
            actions = self.game_state.history().len(),
            payouts = ?result.payouts,
            "hand finished"
        );
        Ok(result)
    }
}

impl fmt::Debug for HoldemSimulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoldemSimulation")
            .field("game_state", &self.game_state)
            .field("cards", &self.cards)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::arena::{
        HoldemSimulationBuilder, TableConfig, agent::CallingAgent, test_util::cards_from_str,
    };
    use crate::core::{CardSet, HoleCards};

    /// Always tries to check, even when that's not allowed.
    struct StubbornAgent;

    impl Agent for StubbornAgent {
        fn act(&mut self, _gs: &GameState, _hole: &HoleCards, _board: &CardSet) -> Action {
            Action::Check
        }
    }

    /// Bets everything it has at every chance.
    struct ShoveAgent;

    impl Agent for ShoveAgent {
        fn act(&mut self, gs: &GameState, _hole: &HoleCards, _board: &CardSet) -> Action {
            let legal = gs.possible_actions();
            if let Some(r) = legal.raise {
                Action::Raise(*r.end())
            } else if let Some(r) = legal.bet {
                Action::Bet(*r.end())
            } else {
                Action::Call
            }
        }
    }

    #[test_log::test]
    fn test_illegal_action_becomes_fold() {
        let gs = GameState::new(vec![100; 2], TableConfig::new(5, 10)).unwrap();
        let mut sim = HoldemSimulationBuilder::default()
            .rng(StdRng::seed_from_u64(1))
            .game_state(gs)
            .agents(vec![Box::new(StubbornAgent), Box::new(CallingAgent {})])
            .build()
            .unwrap();
        let result = sim.run().unwrap();
        assert!(!result.showdown);
        assert_eq!(vec![-5, 5], result.payouts);
        assert_eq!(Action::Fold, sim.game_state().history()[0].action);
    }

    #[test_log::test]
    fn test_shove_and_call_three_way() {
        let gs = GameState::new(vec![50, 100, 200], TableConfig::new(5, 10)).unwrap();
        let cards = cards_from_str("2c7d9hJs4s", &["AsAh", "3c3d", "KsKh"]);
        let mut sim = HoldemSimulationBuilder::default()
            .game_state(gs)
            .cards(cards)
            .agents(vec![
                Box::new(CallingAgent {}),
                Box::new(CallingAgent {}),
                Box::new(ShoveAgent),
            ])
            .build()
            .unwrap();
        let result = sim.run().unwrap();
        assert!(result.showdown);
        assert_eq!(2, result.pots.len());
        assert_eq!(vec![100, -100, 0], result.payouts);
        assert_eq!(vec![150, 0, 200], result.final_stacks);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let run = |seed: u64| {
            let gs = GameState::new(vec![500; 3], TableConfig::new(5, 10)).unwrap();
            let mut sim = HoldemSimulationBuilder::default()
                .rng(StdRng::seed_from_u64(seed))
                .game_state(gs)
                .agents(vec![
                    Box::new(ShoveAgent),
                    Box::new(CallingAgent {}),
                    Box::new(CallingAgent {}),
                ])
                .build()
                .unwrap();
            let result = sim.run().unwrap();
            (sim.cards().clone(), result)
        };
        assert_eq!(run(99), run(99));
    }
}
