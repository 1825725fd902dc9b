//! Siege request - Validated input for one calculation

use crate::error::{NumberField, Result, SiegeError};
use crate::types::{AptitudeGrade, UnitType};
use serde::{Deserialize, Serialize};

/// Number of commander slots in a formation
pub const APTITUDE_SLOTS: usize = 3;

/// One siege calculation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiegeRequest {
    pub unit_type: UnitType,
    /// Commander aptitudes in slot order
    pub aptitudes: [AptitudeGrade; APTITUDE_SLOTS],
    /// Durability of the structure, always > 0
    pub durability: u64,
    /// Participating formations, always > 0
    pub unit_count: u64,
}

impl SiegeRequest {
    /// Build a request from typed values, rejecting zero durability or unit count
    pub fn new(
        unit_type: UnitType,
        aptitudes: [AptitudeGrade; APTITUDE_SLOTS],
        durability: u64,
        unit_count: u64,
    ) -> Result<Self> {
        if durability == 0 {
            return Err(SiegeError::InvalidNumber {
                field: NumberField::Durability,
                input: durability.to_string(),
            });
        }
        if unit_count == 0 {
            return Err(SiegeError::InvalidNumber {
                field: NumberField::UnitCount,
                input: unit_count.to_string(),
            });
        }

        Ok(SiegeRequest {
            unit_type,
            aptitudes,
            durability,
            unit_count,
        })
    }

    /// Validate raw form text into a request
    ///
    /// Checks run in order: unit type, the three aptitudes, durability, unit count.
    /// The first failure is returned.
    pub fn parse(
        unit_type: &str,
        aptitudes: [&str; APTITUDE_SLOTS],
        durability_text: &str,
        unit_count_text: &str,
    ) -> Result<Self> {
        let unit_type: UnitType = unit_type.parse()?;

        let mut grades = [AptitudeGrade::A; APTITUDE_SLOTS];
        for (slot, (grade, raw)) in grades.iter_mut().zip(aptitudes).enumerate() {
            *grade = AptitudeGrade::parse(raw).ok_or_else(|| SiegeError::InvalidAptitude {
                slot: slot + 1,
                input: raw.to_string(),
            })?;
        }

        let durability = parse_positive(NumberField::Durability, durability_text)?;
        let unit_count = parse_positive(NumberField::UnitCount, unit_count_text)?;

        Self::new(unit_type, grades, durability, unit_count)
    }
}

/// Parse a base-10 integer that must be at least 1
pub fn parse_positive(field: NumberField, text: &str) -> Result<u64> {
    match text.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(SiegeError::InvalidNumber {
            field,
            input: text.to_string(),
        }),
    }
}
