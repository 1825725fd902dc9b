//! Minimum unit solver

use crate::error::{NumberField, Result, SiegeError};

/// Smallest unit count that breaks `durability` within `cap_turns`
///
/// `Units = ceil(Durability / (Unit attack × Cap))`
///
/// Equivalently the smallest `u` with `durability <= unit_attack × u × cap_turns`.
///
/// # Errors
/// * `DegenerateAttack` if `unit_attack` is zero
/// * `InvalidNumber` if `cap_turns` is zero
pub fn minimum_units_for_cap(durability: u64, unit_attack: u64, cap_turns: u64) -> Result<u64> {
    if unit_attack == 0 {
        return Err(SiegeError::DegenerateAttack { unit_attack });
    }
    if cap_turns == 0 {
        return Err(SiegeError::InvalidNumber {
            field: NumberField::TurnCap,
            input: cap_turns.to_string(),
        });
    }

    let per_unit = u128::from(unit_attack) * u128::from(cap_turns);
    let units = u128::from(durability).div_ceil(per_unit);

    // per_unit >= 1, so units <= durability
    let units = u64::try_from(units).unwrap_or(durability);
    tracing::trace!(durability, unit_attack, cap_turns, units, "solved minimum units");
    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_example() {
        // 50000 / (300 × 8) = 20.83 -> 21
        assert_eq!(minimum_units_for_cap(50_000, 300, 8).unwrap(), 21);
    }

    #[test]
    fn test_exact_division_does_not_round_up() {
        assert_eq!(minimum_units_for_cap(2400, 300, 8).unwrap(), 1);
        assert_eq!(minimum_units_for_cap(2401, 300, 8).unwrap(), 2);
    }

    #[test]
    fn test_result_is_minimal() {
        let units = minimum_units_for_cap(123_457, 88, 8).unwrap();
        assert!(123_457 <= 88 * units * 8);
        assert!(123_457 > 88 * (units - 1) * 8);
    }

    #[test]
    fn test_zero_attack() {
        assert_eq!(
            minimum_units_for_cap(1000, 0, 8).unwrap_err(),
            SiegeError::DegenerateAttack { unit_attack: 0 }
        );
    }

    #[test]
    fn test_zero_cap() {
        assert!(matches!(
            minimum_units_for_cap(1000, 100, 0).unwrap_err(),
            SiegeError::InvalidNumber {
                field: NumberField::TurnCap,
                ..
            }
        ));
    }
}
