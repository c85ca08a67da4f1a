use std::fmt;
use std::ops::RangeInclusive;

/// Something a player can do when it's their turn.
///
/// Amounts are the chips moved from the player's stack by this
/// action, not the total they have in front of them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Fold,
    Check,
    /// Match the current bet, or as much of it as the stack allows.
    Call,
    /// Open the betting on a street.
    Bet(u32),
    /// Increase an existing bet.
    Raise(u32),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => f.write_str("fold"),
            Action::Check => f.write_str("check"),
            Action::Call => f.write_str("call"),
            Action::Bet(amount) => write!(f, "bet {amount}"),
            Action::Raise(amount) => write!(f, "raise {amount}"),
        }
    }
}

/// An action together with the seat taking it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerAction {
    pub action: Action,
    pub position: usize,
}

impl PlayerAction {
    pub fn new(position: usize, action: Action) -> Self {
        Self { action, position }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {}: {}", self.position, self.action)
    }
}

/// The legal choices for the player to act.
///
/// Bet and raise sizes are continuous in no limit so they're kept
/// as inclusive ranges of chips.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LegalActions {
    pub fold: bool,
    pub check: bool,
    /// The chips a call would move, if calling is possible.
    pub call: Option<u32>,
    pub bet: Option<RangeInclusive<u32>>,
    pub raise: Option<RangeInclusive<u32>>,
}

impl LegalActions {
    pub fn contains(&self, action: &Action) -> bool {
        match action {
            Action::Fold => self.fold,
            Action::Check => self.check,
            Action::Call => self.call.is_some(),
            Action::Bet(amount) => self.bet.as_ref().is_some_and(|r| r.contains(amount)),
            Action::Raise(amount) => self.raise.as_ref().is_some_and(|r| r.contains(amount)),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.fold && !self.check && self.call.is_none() && self.bet.is_none() && self.raise.is_none()
    }

    /// A concrete list of actions, passive first. Bets and raises
    /// are listed at their smallest and largest sizes.
    ///
    /// ```
    /// use holdem_core::arena::action::{Action, LegalActions};
    ///
    /// let legal = LegalActions {
    ///     fold: true,
    ///     call: Some(100),
    ///     raise: Some(200..=1000),
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     vec![Action::Fold, Action::Call, Action::Raise(200), Action::Raise(1000)],
    ///     legal.to_vec()
    /// );
    /// ```
    pub fn to_vec(&self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(5);
        if self.fold {
            actions.push(Action::Fold);
        }
        if self.check {
            actions.push(Action::Check);
        }
        if self.call.is_some() {
            actions.push(Action::Call);
        }
        if let Some(range) = &self.bet {
            push_range(&mut actions, range, Action::Bet);
        }
        if let Some(range) = &self.raise {
            push_range(&mut actions, range, Action::Raise);
        }
        actions
    }
}

fn push_range(actions: &mut Vec<Action>, range: &RangeInclusive<u32>, f: fn(u32) -> Action) {
    actions.push(f(*range.start()));
    if range.end() != range.start() {
        actions.push(f(*range.end()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bet() {
        let a = Action::Bet(100);
        assert_eq!(Action::Bet(100), a);
        assert_eq!("bet 100", a.to_string());
    }

    #[test]
    fn test_contains() {
        let legal = LegalActions {
            check: true,
            bet: Some(100..=500),
            ..Default::default()
        };
        assert!(legal.contains(&Action::Check));
        assert!(legal.contains(&Action::Bet(100)));
        assert!(legal.contains(&Action::Bet(500)));
        assert!(!legal.contains(&Action::Bet(99)));
        assert!(!legal.contains(&Action::Bet(501)));
        assert!(!legal.contains(&Action::Fold));
        assert!(!legal.contains(&Action::Call));
        assert!(!legal.contains(&Action::Raise(200)));
    }

    #[test]
    fn test_all_in_only_bet() {
        let legal = LegalActions {
            check: true,
            bet: Some(40..=40),
            ..Default::default()
        };
        assert_eq!(vec![Action::Check, Action::Bet(40)], legal.to_vec());
    }

    #[test]
    fn test_player_action_display() {
        let pa = PlayerAction::new(3, Action::Raise(250));
        assert_eq!("seat 3: raise 250", pa.to_string());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let pa = PlayerAction::new(1, Action::Bet(300));
        let json = serde_json::to_string(&pa).unwrap();
        assert_eq!(pa, serde_json::from_str(&json).unwrap());
    }
}
