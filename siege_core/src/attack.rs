//! Unit attack - Siege value of one unit from its type and commander aptitudes

use crate::error::{Result, SiegeError};
use crate::types::{AptitudeGrade, UnitType, COEFFICIENT_SCALE};
use serde::{Deserialize, Serialize};

/// Siege value of a single unit, with the formula that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitAttack {
    /// Final per-unit siege value
    pub value: u64,
    /// Base value of the unit type
    pub base: u64,
    /// Human-readable breakdown, e.g. "100 × (1.2 + 1.0 + 0.8)"
    pub formula_text: String,
}

/// Evaluate the siege value of one unit
///
/// `Unit attack = floor(Base × Σ coefficient)`
///
/// The result is truncated, never rounded, which is how the game itself
/// reports siege values. The sum is taken over exact tenths so that grade
/// combinations like C + C + C (2.1) do not lose a point to float error.
///
/// # Arguments
/// * `unit_type` - The formation's unit type
/// * `aptitudes` - Aptitude grade of each commander, in slot order
///
/// # Errors
/// `InvalidAptitude` if no aptitudes are given.
pub fn evaluate_unit_attack(unit_type: UnitType, aptitudes: &[AptitudeGrade]) -> Result<UnitAttack> {
    if aptitudes.is_empty() {
        return Err(SiegeError::InvalidAptitude {
            slot: 1,
            input: String::new(),
        });
    }

    let base = unit_type.base_attack();
    let total_tenths: u64 = aptitudes.iter().map(|grade| grade.coefficient_tenths()).sum();
    let value = base * total_tenths / COEFFICIENT_SCALE;

    Ok(UnitAttack {
        value,
        base,
        formula_text: format_formula(base, aptitudes),
    })
}

/// Render `base × (c1 + c2 + ...)`
pub fn format_formula(base: u64, aptitudes: &[AptitudeGrade]) -> String {
    let coefficients: Vec<String> = aptitudes.iter().map(|grade| grade.coefficient_text()).collect();
    format!("{} × ({})", base, coefficients.join(" + "))
}
