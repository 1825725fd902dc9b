//! siege_core - Siege value calculation engine
//!
//! This library provides:
//! - Unit attack: siege value of one unit from its type and commander aptitudes
//! - Siege estimate: turns and time needed to bring a castle's durability to zero
//! - Minimum unit solver: units needed to finish within the recommended turn count
//! - SiegeReport: the rendered lines shown to the user
//!
//! All calculations are pure and can be called from any thread.

pub mod attack;
pub mod config;
pub mod error;
pub mod prelude;
pub mod report;
pub mod siege;
pub mod types;

// Re-export core types for convenience
pub use attack::{evaluate_unit_attack, UnitAttack};
pub use config::{default_rules, load_rules, ConfigError, SiegeRules};
pub use error::{NumberField, Result, SiegeError};
pub use report::{SiegeReport, MODIFIER_DISCLAIMER};
pub use siege::{
    compute_siege_result, estimate_siege, minimum_units_for_cap, SiegeCalculator, SiegeEstimate,
    SiegeRequest, SiegeResult,
};
pub use types::{AptitudeGrade, UnitType};
