use std::fmt;

use tracing::{Level, event};

use crate::core::{Rankable, SeatSet};

use super::action::{Action, LegalActions, PlayerAction};
use super::config::TableConfig;
use super::errors::GameStateError;
use super::game_cards::GameCards;
use super::pot::{Pot, build_pots, split_pot};

/// The most players that fit at a table.
pub const MAX_PLAYERS: usize = 10;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Round {
    Preflop,
    Flop,
    Turn,
    River,
    /// Terminal. Two or more players are left and hands are compared.
    Showdown,
    /// Terminal. Everyone but one player folded.
    Complete,
}

impl Round {
    /// The next betting street. Terminal rounds stay put.
    pub fn advance(&self) -> Self {
        match *self {
            Round::Preflop => Round::Flop,
            Round::Flop => Round::Turn,
            Round::Turn => Round::River,
            Round::River => Round::Showdown,
            Round::Showdown => Round::Showdown,
            Round::Complete => Round::Complete,
        }
    }

    /// How many board cards are face up during this round.
    pub fn board_cards(&self) -> usize {
        match *self {
            Round::Preflop => 0,
            Round::Flop => 3,
            Round::Turn => 4,
            Round::River | Round::Showdown | Round::Complete => 5,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Round::Showdown | Round::Complete)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Round::Preflop => "preflop",
            Round::Flop => "flop",
            Round::Turn => "turn",
            Round::River => "river",
            Round::Showdown => "showdown",
            Round::Complete => "complete",
        };
        f.write_str(name)
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlayerState {
    /// Still in the hand with chips behind.
    Alive,
    Folded,
    /// Still in the hand with nothing behind.
    AllIn,
    /// Sat down with no chips. Takes no part in the hand.
    Out,
}

impl PlayerState {
    /// Can this player still win a pot?
    pub fn in_hand(&self) -> bool {
        matches!(self, PlayerState::Alive | PlayerState::AllIn)
    }
}

/// Betting state for the current street.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundData {
    /// The largest amount anyone has put in this street.
    pub bet: u32,
    /// The smallest allowed raise increment.
    pub min_raise: u32,
    /// How much each player has put in this street.
    pub player_bet: Vec<u32>,
    /// Players that still owe a decision before the street closes.
    pub needs_action: SeatSet,
}

impl RoundData {
    fn new(num_players: usize, min_raise: u32) -> Self {
        Self {
            bet: 0,
            min_raise,
            player_bet: vec![0; num_players],
            needs_action: SeatSet::default(),
        }
    }

    fn owed(&self, idx: usize) -> u32 {
        self.bet - self.player_bet[idx]
    }
}

/// The state of a single hand of no limit holdem.
///
/// Created with blinds posted and the first player to act set. It is
/// only changed by `execute_action`, and a rejected action leaves it
/// exactly as it was. Stacks for the next hand are carried forward by
/// the caller.
///
/// Seats are `0..N` with the dealer button on seat `N - 1`. The small
/// blind is the first seat from 0 with chips and the big blind the
/// next one after it.
///
/// ```
/// use holdem_core::arena::action::{Action, PlayerAction};
/// use holdem_core::arena::game_state::{GameState, Round};
/// use holdem_core::arena::TableConfig;
///
/// let mut game_state = GameState::new(vec![1000; 3], TableConfig::new(5, 10)).unwrap();
/// // Seat 2 is the button and acts first preflop.
/// assert_eq!(Some(2), game_state.active_player());
/// game_state.execute_action(PlayerAction::new(2, Action::Fold)).unwrap();
/// game_state.execute_action(PlayerAction::new(0, Action::Fold)).unwrap();
/// assert_eq!(Round::Complete, game_state.round());
/// assert_eq!(vec![-5, 5, 0], game_state.payouts_noshowdown().unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct GameState {
    config: TableConfig,
    starting_stacks: Vec<u32>,
    stacks: Vec<u32>,
    contributions: Vec<u32>,
    player_states: Vec<PlayerState>,
    round: Round,
    round_data: RoundData,
    active: Option<usize>,
    small_blind_idx: usize,
    big_blind_idx: usize,
    history: Vec<PlayerAction>,
}

impl GameState {
    /// Start a hand. Posts the blinds and finds the first player to act.
    ///
    /// All the stacks together must fit in a `u32`.
    pub fn new(stacks: Vec<u32>, config: TableConfig) -> Result<Self, GameStateError> {
        let num_players = stacks.len();
        if !(2..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameStateError::InvalidPlayerCount(num_players));
        }
        config.validate()?;
        // Pots and payouts are summed in u32.
        let total: u64 = stacks.iter().map(|s| u64::from(*s)).sum();
        if total > u64::from(u32::MAX) {
            return Err(GameStateError::TooManyChips(total));
        }

        let player_states: Vec<PlayerState> = stacks
            .iter()
            .map(|s| {
                if *s == 0 {
                    PlayerState::Out
                } else {
                    PlayerState::Alive
                }
            })
            .collect();

        let seated: SeatSet = (0..num_players)
            .filter(|idx| player_states[*idx] != PlayerState::Out)
            .collect();
        if seated.count() < 2 {
            return Err(GameStateError::NotEnoughPlayers);
        }
        let small_blind_idx = seated
            .next_from(0, num_players)
            .ok_or(GameStateError::NotEnoughPlayers)?;
        let big_blind_idx = seated
            .next_from(small_blind_idx + 1, num_players)
            .ok_or(GameStateError::NotEnoughPlayers)?;

        let mut gs = GameState {
            config,
            starting_stacks: stacks.clone(),
            stacks,
            contributions: vec![0; num_players],
            player_states,
            round: Round::Preflop,
            round_data: RoundData::new(num_players, config.big_blind),
            active: None,
            small_blind_idx,
            big_blind_idx,
            history: vec![],
        };

        gs.post_blind(small_blind_idx, config.small_blind);
        gs.post_blind(big_blind_idx, config.big_blind);
        gs.round_data.needs_action = gs.alive_set();

        // Preflop action starts left of the big blind.
        gs.active = gs.next_to_act(big_blind_idx + 1);
        if gs.active.is_none() {
            gs.close_street();
        }
        Ok(gs)
    }

    fn post_blind(&mut self, idx: usize, amount: u32) {
        let amount = amount.min(self.stacks[idx]);
        self.move_chips(idx, amount);
        self.round_data.bet = self.round_data.bet.max(self.round_data.player_bet[idx]);
    }

    pub fn num_players(&self) -> usize {
        self.stacks.len()
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The seat that has to act next, `None` once the hand is over.
    pub fn active_player(&self) -> Option<usize> {
        self.active
    }

    pub fn small_blind_idx(&self) -> usize {
        self.small_blind_idx
    }

    pub fn big_blind_idx(&self) -> usize {
        self.big_blind_idx
    }

    pub fn dealer_idx(&self) -> usize {
        self.num_players() - 1
    }

    /// What the active player has to put in to call. Zero when the
    /// hand is over.
    pub fn amount_to_call(&self) -> u32 {
        self.active.map_or(0, |idx| self.round_data.owed(idx))
    }

    /// Every chip committed this hand, including the current street.
    pub fn pot_size(&self) -> u32 {
        self.contributions.iter().sum()
    }

    pub fn player_states(&self) -> &[PlayerState] {
        &self.player_states
    }

    pub fn stacks(&self) -> &[u32] {
        &self.stacks
    }

    pub fn starting_stacks(&self) -> &[u32] {
        &self.starting_stacks
    }

    /// Total chips each player has put in this hand.
    pub fn contributions(&self) -> &[u32] {
        &self.contributions
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn round_data(&self) -> &RoundData {
        &self.round_data
    }

    pub fn history(&self) -> &[PlayerAction] {
        &self.history
    }

    pub fn is_terminal(&self) -> bool {
        self.round.is_terminal()
    }

    pub fn is_showdown(&self) -> bool {
        self.round == Round::Showdown
    }

    pub fn num_alive(&self) -> usize {
        self.alive_set().count()
    }

    /// Players that have not folded and were dealt in.
    pub fn num_in_hand(&self) -> usize {
        self.player_states.iter().filter(|s| s.in_hand()).count()
    }

    fn alive_set(&self) -> SeatSet {
        (0..self.num_players())
            .filter(|idx| self.player_states[*idx] == PlayerState::Alive)
            .collect()
    }

    /// Does this seat have a decision to make?
    ///
    /// A lone alive player that owes nothing has nobody left to bet
    /// against, so they don't.
    fn has_decision(&self, idx: usize) -> bool {
        self.round_data.needs_action.get(idx)
            && self.player_states[idx] == PlayerState::Alive
            && (self.round_data.owed(idx) > 0 || self.num_alive() > 1)
    }

    fn next_to_act(&self, start: usize) -> Option<usize> {
        let n = self.num_players();
        (0..n)
            .map(|offset| (start + offset) % n)
            .find(|idx| self.has_decision(*idx))
    }

    /// The legal choices for the active player.
    ///
    /// Empty once the hand is over.
    pub fn possible_actions(&self) -> LegalActions {
        let Some(idx) = self.active else {
            return LegalActions::default();
        };
        let stack = self.stacks[idx];
        let owed = self.round_data.owed(idx);
        // Betting needs somebody left to bet against.
        let can_bet = self.num_alive() > 1;

        let mut legal = LegalActions::default();
        if owed > 0 {
            legal.fold = true;
            legal.call = Some(owed.min(stack));
            if can_bet && stack > owed {
                let min = owed.saturating_add(self.round_data.min_raise).min(stack);
                legal.raise = Some(min..=stack);
            }
        } else {
            legal.check = true;
            if can_bet {
                if self.round_data.bet == 0 {
                    legal.bet = Some(self.config.big_blind.min(stack)..=stack);
                } else {
                    // The big blind's option preflop.
                    let min = self.round_data.min_raise.min(stack);
                    legal.raise = Some(min..=stack);
                }
            }
        }
        legal
    }

    /// Apply an action from the active player.
    ///
    /// Fails without changing anything if the hand is over, the wrong
    /// seat acts, or the action isn't in `possible_actions()`.
    pub fn execute_action(&mut self, player_action: PlayerAction) -> Result<(), GameStateError> {
        let idx = self.active.ok_or(GameStateError::HandComplete)?;
        if player_action.position != idx {
            return Err(GameStateError::WrongPlayer {
                expected: idx,
                actual: player_action.position,
            });
        }
        if !self.possible_actions().contains(&player_action.action) {
            return Err(GameStateError::IllegalAction {
                position: idx,
                action: player_action.action,
            });
        }

        // Validated. From here on we only mutate.
        match player_action.action {
            Action::Fold => {
                self.player_states[idx] = PlayerState::Folded;
            }
            Action::Check => {}
            Action::Call => {
                let amount = self.round_data.owed(idx).min(self.stacks[idx]);
                self.move_chips(idx, amount);
            }
            Action::Bet(amount) | Action::Raise(amount) => {
                let prev_bet = self.round_data.bet;
                self.move_chips(idx, amount);
                let new_bet = self.round_data.player_bet[idx];
                let increment = new_bet - prev_bet;
                // Only a full raise moves the minimum. A short all in doesn't.
                if increment >= self.round_data.min_raise {
                    self.round_data.min_raise = increment;
                }
                self.round_data.bet = new_bet;
                // Everyone else gets to act again.
                self.round_data.needs_action = self.alive_set();
            }
        }
        self.round_data.needs_action.disable(idx);
        self.history.push(player_action);

        event!(
            Level::TRACE,
            position = idx,
            action = %player_action.action,
            round = %self.round,
            stack = self.stacks[idx],
            pot = self.pot_size(),
            "action executed"
        );

        if self.num_in_hand() == 1 {
            self.finish(Round::Complete);
        } else {
            self.active = self.next_to_act(idx + 1);
            if self.active.is_none() {
                self.close_street();
            }
        }
        Ok(())
    }

    fn move_chips(&mut self, idx: usize, amount: u32) {
        self.stacks[idx] -= amount;
        self.round_data.player_bet[idx] += amount;
        self.contributions[idx] += amount;
        if self.stacks[idx] == 0 && self.player_states[idx] == PlayerState::Alive {
            self.player_states[idx] = PlayerState::AllIn;
            self.round_data.needs_action.disable(idx);
        }
    }

    /// Move to the next street, or to showdown when no more betting
    /// can happen.
    fn close_street(&mut self) {
        let next = self.round.advance();
        if next == Round::Showdown || self.num_alive() <= 1 {
            self.finish(Round::Showdown);
            return;
        }

        self.round = next;
        self.round_data = RoundData::new(self.num_players(), self.config.big_blind);
        self.round_data.needs_action = self.alive_set();
        event!(
            Level::DEBUG,
            round = %self.round,
            pot = self.pot_size(),
            alive = self.num_alive(),
            "street started"
        );

        // Postflop action starts from seat 0.
        self.active = self.next_to_act(0);
        if self.active.is_none() {
            self.finish(Round::Showdown);
        }
    }

    fn finish(&mut self, round: Round) {
        self.round = round;
        self.active = None;
        self.round_data.needs_action = SeatSet::default();
        self.return_uncalled();
        event!(
            Level::DEBUG,
            round = %self.round,
            pot = self.pot_size(),
            in_hand = self.num_in_hand(),
            "hand finished"
        );
    }

    /// Give back the part of the largest contribution that nobody
    /// matched.
    fn return_uncalled(&mut self) {
        let Some((top_idx, &top)) = self
            .contributions
            .iter()
            .enumerate()
            .max_by_key(|(idx, c)| (**c, std::cmp::Reverse(*idx)))
        else {
            return;
        };
        let second = self
            .contributions
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != top_idx)
            .map(|(_, c)| *c)
            .max()
            .unwrap_or(0);
        let excess = top - second;
        if excess > 0 {
            self.contributions[top_idx] -= excess;
            self.stacks[top_idx] += excess;
            self.round_data.player_bet[top_idx] =
                self.round_data.player_bet[top_idx].saturating_sub(excess);
            if self.player_states[top_idx] == PlayerState::AllIn {
                self.player_states[top_idx] = PlayerState::Alive;
            }
            event!(Level::TRACE, position = top_idx, excess, "uncalled bet returned");
        }
    }

    /// The main pot and side pots, smallest band first.
    pub fn all_pots(&self) -> Vec<Pot> {
        let in_hand: Vec<bool> = self.player_states.iter().map(|s| s.in_hand()).collect();
        build_pots(&self.contributions, &in_hand)
    }

    /// Net result per seat after a showdown. Sums to zero.
    pub fn payouts_showdown(&self, cards: &GameCards) -> Result<Vec<i64>, GameStateError> {
        if self.round != Round::Showdown {
            return Err(GameStateError::NotShowdown);
        }
        if cards.num_players() != self.num_players() {
            return Err(GameStateError::InvalidPlayerCount(cards.num_players()));
        }

        let board = cards.board();
        let ranks: Vec<_> = cards
            .hands()
            .iter()
            .map(|hand| (board | hand.as_card_set()).rank())
            .collect();

        let mut winnings = vec![0u32; self.num_players()];
        for pot in self.all_pots() {
            let Some(best) = pot.eligible.iter().map(|idx| ranks[*idx]).max() else {
                continue;
            };
            let winners: Vec<usize> = pot
                .eligible
                .iter()
                .copied()
                .filter(|idx| ranks[*idx] == best)
                .collect();
            for (idx, amount) in split_pot(pot.amount, &winners) {
                event!(Level::TRACE, position = idx, amount, rank = %best, "pot awarded");
                winnings[idx] += amount;
            }
        }
        Ok(self.net(&winnings))
    }

    /// Net result per seat when everyone else folded. Sums to zero.
    pub fn payouts_noshowdown(&self) -> Result<Vec<i64>, GameStateError> {
        if self.round != Round::Complete {
            return Err(GameStateError::NotComplete);
        }
        let mut winnings = vec![0u32; self.num_players()];
        if let Some(winner) = self.player_states.iter().position(|s| s.in_hand()) {
            winnings[winner] = self.pot_size();
        }
        Ok(self.net(&winnings))
    }

    /// Payouts for however the hand ended.
    pub fn payouts(&self, cards: &GameCards) -> Result<Vec<i64>, GameStateError> {
        match self.round {
            Round::Showdown => self.payouts_showdown(cards),
            Round::Complete => self.payouts_noshowdown(),
            _ => Err(GameStateError::NotComplete),
        }
    }

    fn net(&self, winnings: &[u32]) -> Vec<i64> {
        winnings
            .iter()
            .zip(self.contributions.iter())
            .map(|(w, c)| i64::from(*w) - i64::from(*c))
            .collect()
    }

    /// A readable view of the hand including the face up board.
    pub fn dump(&self, cards: &GameCards) -> String {
        let board = cards.board_for(self.round);
        let mut out = format!("{self}board: {board}\n");
        for pot in self.all_pots() {
            out.push_str(&format!("pot: {pot}\n"));
        }
        out
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "round: {} pot: {}", self.round, self.pot_size())?;
        for idx in 0..self.num_players() {
            let marker = if self.active == Some(idx) { "*" } else { " " };
            writeln!(
                f,
                "{marker}seat {idx}: stack {} in {} {:?}",
                self.stacks[idx], self.contributions[idx], self.player_states[idx]
            )?;
        }
        Ok(())
    }
}
