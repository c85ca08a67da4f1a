use rand::{Rng, rngs::ThreadRng};

use crate::core::Deck;

use super::{
    Agent, GameState, HoldemSimulation, agent::FoldingAgent, errors::HoldemSimulationError,
    game_cards::GameCards,
};

// Some builder methods to help with turning a builder struct into a ready
// simulation
fn build_cards<R: Rng>(num_players: usize, rng: &mut R) -> Result<GameCards, HoldemSimulationError> {
    let mut deck = Deck::default();
    deck.shuffle(rng);
    Ok(GameCards::from_deck(&mut deck, num_players)?)
}

fn build_agents(num_agents: usize) -> Vec<Box<dyn Agent>> {
    (0..num_agents)
        .map(|_| -> Box<dyn Agent> { Box::<FoldingAgent>::default() })
        .collect()
}

/// # HoldemSimulationBuilder
///
/// `RngHoldemSimulationBuilder` is a builder to allow for complex
/// configurations of a holdem simulation played via agents. A game state is
/// required, other fields are optional.
///
/// `HoldemSimulationBuilder` is a type alias
/// for `RngHoldemSimulationBuilder<ThreadRng>` which is the default builder.
///
/// While agents are not required the default is a full ring of folding agents.
/// So likely not that interesting a simulation.
///
/// ## Examples
///
/// ```
/// use holdem_core::arena::{GameState, HoldemSimulationBuilder, TableConfig};
///
/// let game_state = GameState::new(vec![100; 5], TableConfig::new(1, 2)).unwrap();
/// let sim = HoldemSimulationBuilder::default()
///     .game_state(game_state)
///     .build()
///     .unwrap();
/// ```
/// However sometimes you want to use a known but random simulation. In that
/// case you can pass in the rng like this:
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use holdem_core::arena::{GameState, HoldemSimulationBuilder, TableConfig};
///
/// let game_state = GameState::new(vec![100; 5], TableConfig::new(1, 2)).unwrap();
/// let rng = StdRng::seed_from_u64(420);
/// let sim = HoldemSimulationBuilder::default()
///     .game_state(game_state)
///     .rng(rng)
///     .build()
///     .unwrap();
/// ```
pub struct RngHoldemSimulationBuilder<R: Rng> {
    agents: Option<Vec<Box<dyn Agent>>>,
    game_state: Option<GameState>,
    cards: Option<GameCards>,
    rng: Option<R>,
}

impl<R: Rng> RngHoldemSimulationBuilder<R> {
    /// Set the agents for the simulation created by this builder.
    pub fn agents(mut self, agents: Vec<Box<dyn Agent>>) -> Self {
        self.agents = Some(agents);
        self
    }

    /// Set the game state for the simulation created by this builder.
    pub fn game_state(mut self, game_state: GameState) -> Self {
        self.game_state = Some(game_state);
        self
    }

    /// Set the cards. If not set they're dealt from a freshly
    /// shuffled deck.
    pub fn cards(mut self, cards: GameCards) -> Self {
        self.cards = Some(cards);
        self
    }

    /// Deal with this rng instead. Swapping the rng changes the
    /// builder's type, so any seedable rng can be used.
    pub fn rng<R2: Rng>(self, rng: R2) -> RngHoldemSimulationBuilder<R2> {
        RngHoldemSimulationBuilder {
            agents: self.agents,
            game_state: self.game_state,
            cards: self.cards,
            rng: Some(rng),
        }
    }

    /// Given the fields already specified build any that are not specified and
    /// create a new HoldemSimulation.
    ///
    /// Fails if no game state was given, or if the agents or cards
    /// don't match the number of seats.
    pub fn build(self) -> Result<HoldemSimulation, HoldemSimulationError> {
        let game_state = self
            .game_state
            .ok_or(HoldemSimulationError::NeedGameState)?;
        let num_players = game_state.num_players();

        let agents = self.agents.unwrap_or_else(|| build_agents(num_players));
        if agents.len() != num_players {
            return Err(HoldemSimulationError::AgentCountMismatch);
        }

        // If the cards were passed in use them as is, which keeps
        // the simulation deterministic.
        let cards = match self.cards {
            Some(cards) => cards,
            None => match self.rng {
                Some(mut rng) => build_cards(num_players, &mut rng)?,
                None => build_cards(num_players, &mut rand::rng())?,
            },
        };
        if cards.num_players() != num_players {
            return Err(HoldemSimulationError::AgentCountMismatch);
        }

        Ok(HoldemSimulation {
            agents,
            game_state,
            cards,
        })
    }
}

impl<R: Rng> Default for RngHoldemSimulationBuilder<R> {
    fn default() -> Self {
        Self {
            agents: None,
            game_state: None,
            cards: None,
            rng: None,
        }
    }
}

/// The rng is ThreadRng.
pub type HoldemSimulationBuilder = RngHoldemSimulationBuilder<ThreadRng>;
