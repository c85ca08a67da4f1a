use crate::core::{Card, CardSet};

use super::game_cards::GameCards;
use super::game_state::{GameState, PlayerState};

/// Check the bookkeeping that must hold after every action.
pub fn assert_valid_game_state(game_state: &GameState) {
    let round_data = game_state.round_data();

    // Nobody can have put in more this street than the bet to call.
    for bet in &round_data.player_bet {
        assert!(*bet <= round_data.bet);
    }

    for (idx, state) in game_state.player_states().iter().enumerate() {
        match state {
            PlayerState::AllIn => assert_eq!(0, game_state.stacks()[idx]),
            PlayerState::Out => assert_eq!(0, game_state.contributions()[idx]),
            PlayerState::Alive => assert!(game_state.stacks()[idx] > 0),
            PlayerState::Folded => {}
        }
    }

    match game_state.active_player() {
        Some(idx) => {
            assert!(!game_state.is_terminal());
            assert_eq!(PlayerState::Alive, game_state.player_states()[idx]);
            assert!(!game_state.possible_actions().is_empty());
        }
        None => assert!(game_state.is_terminal()),
    }

    let pot_total: u32 = game_state.all_pots().iter().map(|p| p.amount).sum();
    assert_eq!(game_state.pot_size(), pot_total);
}

/// Build the cards for a hand from a board string and one hand
/// string per seat.
pub fn cards_from_str(board: &str, hands: &[&str]) -> GameCards {
    let mut cards: Vec<Card> = parse_ordered(board);
    for hand in hands {
        cards.extend(parse_ordered(hand));
    }
    GameCards::new(&cards, hands.len()).unwrap()
}

fn parse_ordered(s: &str) -> Vec<Card> {
    let set: CardSet = s.parse().unwrap();
    assert_eq!(s.len() / 2, set.count());
    (0..s.len() / 2)
        .map(|i| Card::try_from(&s[i * 2..i * 2 + 2]).unwrap())
        .collect()
}
