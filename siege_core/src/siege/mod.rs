//! Siege estimation - Unit attack -> turn estimate -> unit recommendation

mod estimate;
mod request;
mod result;
mod solver;

pub use estimate::{estimate_siege, SiegeEstimate};
pub use request::{parse_positive, SiegeRequest, APTITUDE_SLOTS};
pub use result::SiegeResult;
pub use solver::minimum_units_for_cap;

use crate::attack::evaluate_unit_attack;
use crate::config::SiegeRules;
use crate::error::Result;

/// Runs siege calculations under a fixed set of rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiegeCalculator {
    rules: SiegeRules,
}

impl SiegeCalculator {
    pub fn new(rules: SiegeRules) -> Self {
        SiegeCalculator { rules }
    }

    pub fn rules(&self) -> &SiegeRules {
        &self.rules
    }

    /// Compute the full result for a validated request
    ///
    /// The minimum unit recommendation is only computed when the estimate
    /// exceeds `max_turns`, and targets `recommended_turns`.
    pub fn compute(&self, request: &SiegeRequest) -> Result<SiegeResult> {
        let attack = evaluate_unit_attack(request.unit_type, &request.aptitudes)?;
        let estimate = estimate_siege(
            attack.value,
            request.unit_count,
            request.durability,
            &self.rules,
        )?;

        let recommended_min_units = if estimate.within_cap {
            None
        } else {
            Some(minimum_units_for_cap(
                request.durability,
                attack.value,
                self.rules.recommended_turns,
            )?)
        };

        tracing::debug!(
            unit_type = request.unit_type.label(),
            unit_attack = attack.value,
            total_attack = estimate.total_attack,
            turns = estimate.turns,
            within_cap = estimate.within_cap,
            ?recommended_min_units,
            "computed siege result"
        );

        Ok(SiegeResult::assemble(
            *request,
            self.rules,
            attack,
            estimate,
            recommended_min_units,
        ))
    }

    /// Validate raw form text and compute the result
    pub fn compute_from_text(
        &self,
        unit_type: &str,
        aptitudes: [&str; APTITUDE_SLOTS],
        durability_text: &str,
        unit_count_text: &str,
    ) -> Result<SiegeResult> {
        let request = SiegeRequest::parse(unit_type, aptitudes, durability_text, unit_count_text)?;
        self.compute(&request)
    }
}

/// Validate raw form text and compute the result under the default rules
pub fn compute_siege_result(
    unit_type: &str,
    aptitudes: [&str; APTITUDE_SLOTS],
    durability_text: &str,
    unit_count_text: &str,
) -> Result<SiegeResult> {
    SiegeCalculator::default().compute_from_text(unit_type, aptitudes, durability_text, unit_count_text)
}
