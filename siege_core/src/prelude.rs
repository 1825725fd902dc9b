//! Prelude module for convenient imports
//!
//! ```rust
//! use siege_core::prelude::*;
//! ```

// Core types
pub use crate::types::{AptitudeGrade, UnitType};
pub use crate::error::{NumberField, SiegeError};

// Calculation
pub use crate::attack::{evaluate_unit_attack, UnitAttack};
pub use crate::siege::{
    compute_siege_result, estimate_siege, minimum_units_for_cap, SiegeCalculator, SiegeEstimate,
    SiegeRequest, SiegeResult,
};

// Rendering
pub use crate::report::{LineKind, ReportLine, SiegeReport, MODIFIER_DISCLAIMER};

// Config
pub use crate::config::{default_rules, SiegeRules};
