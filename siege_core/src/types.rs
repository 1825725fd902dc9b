//! Core types for siege calculation: unit types and commander aptitude grades

use crate::error::SiegeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coefficients are stored as integer tenths so the attack formula stays exact
pub const COEFFICIENT_SCALE: u64 = 10;

/// Unit type of a formation taking part in the siege
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    /// Siege weapons (battering rams, catapults)
    Siege,
    Spear,
    Cavalry,
    Archer,
    Shield,
}

impl UnitType {
    /// Get all unit types in menu order
    pub fn all() -> &'static [UnitType] {
        &[
            UnitType::Siege,
            UnitType::Spear,
            UnitType::Cavalry,
            UnitType::Archer,
            UnitType::Shield,
        ]
    }

    /// Base siege value of a single unit before aptitude scaling
    pub fn base_attack(self) -> u64 {
        match self {
            UnitType::Siege => 100,
            UnitType::Spear => 40,
            UnitType::Cavalry => 40,
            UnitType::Archer => 40,
            UnitType::Shield => 40,
        }
    }

    /// Machine label accepted on the command line
    pub fn label(self) -> &'static str {
        match self {
            UnitType::Siege => "siege",
            UnitType::Spear => "spear",
            UnitType::Cavalry => "cavalry",
            UnitType::Archer => "archer",
            UnitType::Shield => "shield",
        }
    }

    /// Label used by the game client
    pub fn game_label(self) -> &'static str {
        match self {
            UnitType::Siege => "兵器",
            UnitType::Spear => "槍",
            UnitType::Cavalry => "騎",
            UnitType::Archer => "弓",
            UnitType::Shield => "盾",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            UnitType::Siege => "Siege Weapon",
            UnitType::Spear => "Spear",
            UnitType::Cavalry => "Cavalry",
            UnitType::Archer => "Archer",
            UnitType::Shield => "Shield",
        }
    }
}

impl FromStr for UnitType {
    type Err = SiegeError;

    /// Accepts either the machine label (case-insensitive) or the game label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        UnitType::all()
            .iter()
            .copied()
            .find(|unit| {
                unit.label().eq_ignore_ascii_case(trimmed) || unit.game_label() == trimmed
            })
            .ok_or_else(|| SiegeError::InvalidUnitType {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.game_label())
    }
}

/// Aptitude grade of one commanding character for the formation's unit type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AptitudeGrade {
    S,
    A,
    B,
    C,
}

impl AptitudeGrade {
    pub fn all() -> &'static [AptitudeGrade] {
        &[
            AptitudeGrade::S,
            AptitudeGrade::A,
            AptitudeGrade::B,
            AptitudeGrade::C,
        ]
    }

    /// Coefficient in tenths (S = 1.2 -> 12)
    pub fn coefficient_tenths(self) -> u64 {
        match self {
            AptitudeGrade::S => 12,
            AptitudeGrade::A => 10,
            AptitudeGrade::B => 8,
            AptitudeGrade::C => 7,
        }
    }

    pub fn coefficient(self) -> f64 {
        self.coefficient_tenths() as f64 / COEFFICIENT_SCALE as f64
    }

    /// Coefficient rendered with one decimal place, e.g. "1.0"
    pub fn coefficient_text(self) -> String {
        let tenths = self.coefficient_tenths();
        format!("{}.{}", tenths / COEFFICIENT_SCALE, tenths % COEFFICIENT_SCALE)
    }

    pub fn letter(self) -> &'static str {
        match self {
            AptitudeGrade::S => "S",
            AptitudeGrade::A => "A",
            AptitudeGrade::B => "B",
            AptitudeGrade::C => "C",
        }
    }

    /// Trim and upper-case raw input ahead of the strict match
    pub fn normalize(input: &str) -> String {
        input.trim().to_ascii_uppercase()
    }

    /// Parse a grade after normalization. Returns `None` for anything outside S/A/B/C.
    pub fn parse(input: &str) -> Option<AptitudeGrade> {
        match Self::normalize(input).as_str() {
            "S" => Some(AptitudeGrade::S),
            "A" => Some(AptitudeGrade::A),
            "B" => Some(AptitudeGrade::B),
            "C" => Some(AptitudeGrade::C),
            _ => None,
        }
    }
}

impl fmt::Display for AptitudeGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}
