//! Turn estimate - How long a set of formations needs to bring durability to zero

use crate::config::SiegeRules;
use crate::error::{NumberField, Result, SiegeError};
use serde::{Deserialize, Serialize};

/// Seconds per minute, for splitting durations for display
const SECONDS_PER_MINUTE: u64 = 60;

/// Estimated length of a siege
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiegeEstimate {
    /// Siege value of all participating units together
    pub total_attack: u64,
    /// Turns needed, not rounded
    pub turns: f64,
    /// Whole seconds needed, truncated
    pub seconds: u64,
    /// Whether the siege finishes within the rules' turn limit
    pub within_cap: bool,
}

impl SiegeEstimate {
    pub fn minutes(&self) -> u64 {
        self.seconds / SECONDS_PER_MINUTE
    }

    pub fn remainder_seconds(&self) -> u64 {
        self.seconds % SECONDS_PER_MINUTE
    }
}

/// Estimate turns and time to break a structure
///
/// `Turns = Durability / (Unit attack × Units)`
///
/// Seconds and the cap check are taken from the exact ratio rather than the
/// float, so a siege of exactly `max_turns` turns always passes.
///
/// # Errors
/// * `DegenerateAttack` if the total attack is zero
/// * `InvalidNumber` if the total attack or duration overflows
pub fn estimate_siege(
    unit_attack: u64,
    unit_count: u64,
    durability: u64,
    rules: &SiegeRules,
) -> Result<SiegeEstimate> {
    let total_attack = unit_attack
        .checked_mul(unit_count)
        .ok_or_else(|| SiegeError::InvalidNumber {
            field: NumberField::UnitCount,
            input: unit_count.to_string(),
        })?;

    if total_attack == 0 {
        return Err(SiegeError::DegenerateAttack { unit_attack });
    }

    let turns = durability as f64 / total_attack as f64;

    let seconds = u64::try_from(
        u128::from(durability) * u128::from(rules.turn_seconds) / u128::from(total_attack),
    )
    .map_err(|_| SiegeError::InvalidNumber {
        field: NumberField::Durability,
        input: durability.to_string(),
    })?;

    let within_cap =
        u128::from(durability) <= u128::from(total_attack) * u128::from(rules.max_turns);

    Ok(SiegeEstimate {
        total_attack,
        turns,
        seconds,
        within_cap,
    })
}
