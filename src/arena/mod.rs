//! This is the arena module for playing no-limit holdem hands.
//!
//! [`GameState`] is the betting engine. It posts blinds, tracks whose
//! turn it is, validates every action and splits the chips into main and
//! side pots. It never deals or ranks cards itself; those come in as
//! [`GameCards`] when it's time to settle.
//!
//! # Driving the engine by hand
//!
//! ```
//! use holdem_core::arena::action::{Action, PlayerAction};
//! use holdem_core::arena::game_state::Round;
//! use holdem_core::arena::{GameState, TableConfig};
//!
//! let mut game_state = GameState::new(vec![100, 100, 100], TableConfig::new(5, 10)).unwrap();
//! assert_eq!(Some(2), game_state.active_player());
//!
//! game_state
//!     .execute_action(PlayerAction::new(2, Action::Raise(30)))
//!     .unwrap();
//! game_state
//!     .execute_action(PlayerAction::new(0, Action::Fold))
//!     .unwrap();
//! game_state
//!     .execute_action(PlayerAction::new(1, Action::Fold))
//!     .unwrap();
//!
//! assert_eq!(Round::Complete, game_state.round());
//! assert_eq!(vec![-5, -10, 15], game_state.payouts_noshowdown().unwrap());
//! ```
//!
//! # Simulation with agents
//!
//! The tools allow explicit control over the
//! simulation all the way down to the rng.
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use holdem_core::arena::agent::{CallingAgent, FoldingAgent};
//! use holdem_core::arena::{Agent, GameState, HoldemSimulationBuilder, TableConfig};
//!
//! let agents: Vec<Box<dyn Agent>> = vec![
//!     Box::<CallingAgent>::default(),
//!     Box::<FoldingAgent>::default(),
//! ];
//! let game_state = GameState::new(vec![100, 100], TableConfig::new(5, 10)).unwrap();
//! let mut sim = HoldemSimulationBuilder::default()
//!     .game_state(game_state)
//!     .agents(agents)
//!     .rng(StdRng::seed_from_u64(420))
//!     .build()
//!     .unwrap();
//!
//! let result = sim.run().unwrap();
//! assert_eq!(0, result.payouts.iter().sum::<i64>());
//! ```
pub mod action;
pub mod agent;
mod config;
pub mod errors;
mod game_cards;
pub mod game_state;
pub mod pot;
pub mod sim_builder;
pub mod simulation;

#[cfg(any(test, feature = "arena-test-util"))]
pub mod test_util;

pub use agent::Agent;
pub use config::TableConfig;
pub use game_cards::GameCards;
pub use game_state::GameState;
pub use sim_builder::{HoldemSimulationBuilder, RngHoldemSimulationBuilder};
pub use simulation::{HandResult, HoldemSimulation};
