//! Siege result types

use super::estimate::SiegeEstimate;
use super::request::SiegeRequest;
use crate::attack::UnitAttack;
use crate::config::SiegeRules;
use serde::{Deserialize, Serialize};

/// Fully computed outcome of one siege request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiegeResult {
    /// The request this result was computed from
    pub request: SiegeRequest,
    /// Rules in effect for the calculation
    pub rules: SiegeRules,
    /// Siege value of one unit
    pub unit_attack: u64,
    /// Breakdown of `unit_attack`, e.g. "100 × (1.2 + 1.0 + 0.8)"
    pub formula_text: String,
    /// `unit_attack × unit_count`
    pub total_attack: u64,
    /// Turns to bring durability to zero
    pub estimated_turns: f64,
    /// Time to bring durability to zero, truncated to whole seconds
    pub estimated_seconds: u64,
    /// Whether the siege finishes within `rules.max_turns`
    pub within_turn_cap: bool,
    /// Units needed to finish within `rules.recommended_turns`. Only set when over the cap.
    pub recommended_min_units: Option<u64>,
}

impl SiegeResult {
    pub(crate) fn assemble(
        request: SiegeRequest,
        rules: SiegeRules,
        attack: UnitAttack,
        estimate: SiegeEstimate,
        recommended_min_units: Option<u64>,
    ) -> Self {
        SiegeResult {
            request,
            rules,
            unit_attack: attack.value,
            formula_text: attack.formula_text,
            total_attack: estimate.total_attack,
            estimated_turns: estimate.turns,
            estimated_seconds: estimate.seconds,
            within_turn_cap: estimate.within_cap,
            recommended_min_units,
        }
    }

    pub fn minutes(&self) -> u64 {
        self.estimated_seconds / 60
    }

    pub fn remainder_seconds(&self) -> u64 {
        self.estimated_seconds % 60
    }

    /// Additional units beyond the request needed to meet the recommendation
    pub fn additional_units(&self) -> Option<u64> {
        self.recommended_min_units
            .map(|units| units.saturating_sub(self.request.unit_count))
    }
}
