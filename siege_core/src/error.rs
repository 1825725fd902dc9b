//! Error types for siege calculation

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias using [`SiegeError`]
pub type Result<T> = std::result::Result<T, SiegeError>;

/// Numeric input a [`SiegeError::InvalidNumber`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberField {
    Durability,
    UnitCount,
    TurnCap,
}

impl fmt::Display for NumberField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumberField::Durability => "durability",
            NumberField::UnitCount => "unit count",
            NumberField::TurnCap => "turn cap",
        };
        f.write_str(name)
    }
}

/// Rejected siege input. Every variant is user-correctable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiegeError {
    /// Unit type label not recognized
    #[error("unknown unit type: {input:?}")]
    InvalidUnitType { input: String },

    /// Aptitude outside S/A/B/C. `slot` is 1-based.
    #[error("aptitude {slot} must be one of S/A/B/C, got {input:?}")]
    InvalidAptitude { slot: usize, input: String },

    /// Non-numeric, non-positive or out of range number
    #[error("{field} must be a whole number of at least 1, got {input:?}")]
    InvalidNumber { field: NumberField, input: String },

    /// Unit attack of zero, so durability can never be reduced
    #[error("unit attack {unit_attack} cannot reduce durability")]
    DegenerateAttack { unit_attack: u64 },
}

impl SiegeError {
    /// Message shown to the person filling in the form
    pub fn user_message(&self) -> String {
        match self {
            SiegeError::InvalidUnitType { input } => format!(
                "Unknown unit type \"{}\". Choose one of: siege, spear, cavalry, archer, shield",
                input.trim()
            ),
            SiegeError::InvalidAptitude { slot, input } => format!(
                "Aptitude {} is \"{}\". Enter S / A / B / C (lowercase is fine)",
                slot,
                input.trim()
            ),
            SiegeError::InvalidNumber { .. } => {
                "Durability and unit count must be whole numbers of 1 or more".to_string()
            }
            SiegeError::DegenerateAttack { .. } => {
                "The unit siege value is 0, so the castle can never fall".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiegeError::InvalidAptitude {
            slot: 2,
            input: "x".to_string(),
        };
        assert_eq!(err.to_string(), "aptitude 2 must be one of S/A/B/C, got \"x\"");

        let err = SiegeError::InvalidNumber {
            field: NumberField::UnitCount,
            input: "-1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unit count must be a whole number of at least 1, got \"-1\""
        );
    }

    #[test]
    fn test_user_message_names_the_slot() {
        let err = SiegeError::InvalidAptitude {
            slot: 3,
            input: " D ".to_string(),
        };
        let msg = err.user_message();
        assert!(msg.contains("Aptitude 3"));
        assert!(msg.contains("\"D\""));
    }
}
