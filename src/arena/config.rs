use super::errors::GameStateError;

/// Stakes for a table.
///
/// ```
/// use holdem_core::arena::TableConfig;
///
/// let config = TableConfig::new(5, 10);
/// assert_eq!(10, config.big_blind);
/// assert!(TableConfig::new(20, 10).validate().is_err());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableConfig {
    pub small_blind: u32,
    pub big_blind: u32,
}

impl TableConfig {
    pub fn new(small_blind: u32, big_blind: u32) -> Self {
        Self {
            small_blind,
            big_blind,
        }
    }

    pub fn validate(&self) -> Result<(), GameStateError> {
        if self.big_blind == 0 || self.small_blind == 0 || self.small_blind > self.big_blind {
            Err(GameStateError::InvalidBlinds)
        } else {
            Ok(())
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(50, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Ok(()), TableConfig::default().validate());
    }

    #[test]
    fn test_bad_blinds() {
        assert_eq!(
            Err(GameStateError::InvalidBlinds),
            TableConfig::new(0, 10).validate()
        );
        assert_eq!(
            Err(GameStateError::InvalidBlinds),
            TableConfig::new(5, 0).validate()
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let config: TableConfig =
            serde_json::from_str(r#"{"small_blind": 1, "big_blind": 2}"#).unwrap();
        assert_eq!(TableConfig::new(1, 2), config);
    }
}
