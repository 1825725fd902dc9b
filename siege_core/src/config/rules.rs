//! Siege rules configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rule constants of the current game season
pub mod constants {
    /// Length of one turn in seconds (5 minutes)
    pub const TURN_SECONDS: u64 = 300;

    /// Hard ceiling imposed by the game: a siege taking more turns fails
    pub const MAX_SIEGE_TURNS: u64 = 9;

    /// Turn target used when recommending a unit count.
    /// Kept separate from [`MAX_SIEGE_TURNS`] to leave one turn of margin.
    pub const RECOMMENDED_SIEGE_TURNS: u64 = 8;
}

/// Siege rules used by the estimator and solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiegeRules {
    /// Seconds per turn
    #[serde(default = "default_turn_seconds")]
    pub turn_seconds: u64,
    /// Pass/fail threshold for the estimated turn count
    #[serde(default = "default_max_turns")]
    pub max_turns: u64,
    /// Turn target for the minimum unit recommendation
    #[serde(default = "default_recommended_turns")]
    pub recommended_turns: u64,
}

impl Default for SiegeRules {
    fn default() -> Self {
        SiegeRules {
            turn_seconds: constants::TURN_SECONDS,
            max_turns: constants::MAX_SIEGE_TURNS,
            recommended_turns: constants::RECOMMENDED_SIEGE_TURNS,
        }
    }
}

fn default_turn_seconds() -> u64 {
    constants::TURN_SECONDS
}
fn default_max_turns() -> u64 {
    constants::MAX_SIEGE_TURNS
}
fn default_recommended_turns() -> u64 {
    constants::RECOMMENDED_SIEGE_TURNS
}

impl SiegeRules {
    /// Check the rules are usable by the estimator
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.turn_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "turn_seconds must be at least 1".to_string(),
            ));
        }
        if self.max_turns == 0 || self.recommended_turns == 0 {
            return Err(ConfigError::ValidationError(
                "max_turns and recommended_turns must be at least 1".to_string(),
            ));
        }
        if self.recommended_turns > self.max_turns {
            return Err(ConfigError::ValidationError(format!(
                "recommended_turns ({}) exceeds max_turns ({})",
                self.recommended_turns, self.max_turns
            )));
        }
        Ok(())
    }
}

/// Load and validate siege rules from a TOML file
pub fn load_rules(path: &Path) -> Result<SiegeRules, ConfigError> {
    let rules: SiegeRules = super::load_toml(path)?;
    rules.validate()?;
    Ok(rules)
}

/// Parse and validate siege rules from a TOML string
pub fn parse_rules(content: &str) -> Result<SiegeRules, ConfigError> {
    let rules: SiegeRules = super::parse_toml(content)?;
    rules.validate()?;
    Ok(rules)
}

/// Rules shipped with the crate
pub fn default_rules() -> SiegeRules {
    let toml = include_str!("../../config/rules.toml");
    parse_rules(toml).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = SiegeRules::default();
        assert_eq!(rules.turn_seconds, 300);
        assert_eq!(rules.max_turns, 9);
        assert_eq!(rules.recommended_turns, 8);
    }

    #[test]
    fn test_shipped_rules_match_defaults() {
        assert_eq!(default_rules(), SiegeRules::default());
    }

    #[test]
    fn test_parse_partial_rules() {
        let rules = parse_rules("max_turns = 12\n").unwrap();
        assert_eq!(rules.max_turns, 12);
        assert_eq!(rules.turn_seconds, constants::TURN_SECONDS);
        assert_eq!(rules.recommended_turns, constants::RECOMMENDED_SIEGE_TURNS);
    }

    #[test]
    fn test_reject_recommended_above_max() {
        let err = parse_rules("max_turns = 5\nrecommended_turns = 6\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_reject_zero_turn_length() {
        let err = parse_rules("turn_seconds = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_reject_bad_toml() {
        let err = parse_rules("max_turns = \"nine\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
