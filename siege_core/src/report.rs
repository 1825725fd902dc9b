//! Report rendering - turns a [`SiegeResult`] into the lines shown to the user

use crate::siege::SiegeResult;
use std::fmt;

/// Attached to every report: the siege value is the raw formula only
pub const MODIFIER_DISCLAIMER: &str =
    "Note: this siege value does not include weapon research level or facility bonuses";

/// Role of a report line, for styling by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    Field,
    Blank,
    Disclaimer,
    Pass,
    Fail,
    Recommendation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub kind: LineKind,
    pub text: String,
}

impl ReportLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        ReportLine {
            kind,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        ReportLine::new(LineKind::Blank, "")
    }
}

/// Rendered view of a siege result
#[derive(Debug, Clone, Copy)]
pub struct SiegeReport<'a> {
    result: &'a SiegeResult,
}

impl<'a> SiegeReport<'a> {
    pub fn new(result: &'a SiegeResult) -> Self {
        SiegeReport { result }
    }

    /// Echo of the request as entered
    pub fn summary_lines(&self) -> Vec<ReportLine> {
        let request = &self.result.request;
        let mut lines = vec![ReportLine::new(LineKind::Heading, "Input")];
        lines.push(ReportLine::new(
            LineKind::Field,
            format!("- Unit type: {}", request.unit_type),
        ));
        for (slot, grade) in request.aptitudes.iter().enumerate() {
            lines.push(ReportLine::new(
                LineKind::Field,
                format!("- Commander {} aptitude: {}", slot + 1, grade),
            ));
        }
        lines.push(ReportLine::new(
            LineKind::Field,
            format!("- Castle durability: {}", request.durability),
        ));
        lines.push(ReportLine::new(
            LineKind::Field,
            format!("- Participating units: {}", request.unit_count),
        ));
        lines
    }

    /// Computed values, the disclaimer, the cap verdict and any recommendation
    pub fn result_lines(&self) -> Vec<ReportLine> {
        let result = self.result;
        let rules = &result.rules;

        let mut lines = vec![
            ReportLine::new(
                LineKind::Field,
                format!(
                    "Total siege value: {} (unit siege value: {} = {})",
                    result.total_attack, result.unit_attack, result.formula_text
                ),
            ),
            ReportLine::new(LineKind::Disclaimer, MODIFIER_DISCLAIMER),
            ReportLine::new(
                LineKind::Field,
                format!("Estimated turns: {:.1}", result.estimated_turns),
            ),
            ReportLine::new(
                LineKind::Field,
                format!(
                    "Time required: about {} min {} s",
                    result.minutes(),
                    result.remainder_seconds()
                ),
            ),
        ];

        if result.within_turn_cap {
            lines.push(ReportLine::new(
                LineKind::Pass,
                "The castle falls within the time limit",
            ));
        } else {
            lines.push(ReportLine::new(
                LineKind::Fail,
                format!("Out of time: exceeds the {}-turn limit", rules.max_turns),
            ));
        }

        if let Some(units) = result.recommended_min_units {
            lines.push(ReportLine::new(
                LineKind::Recommendation,
                format!(
                    "To take the castle within {} turns, at least {} participating units are needed",
                    rules.recommended_turns, units
                ),
            ));
        }

        lines
    }

    /// Summary, a blank separator, then the result lines
    pub fn lines(&self) -> Vec<ReportLine> {
        let mut lines = self.summary_lines();
        lines.push(ReportLine::blank());
        lines.extend(self.result_lines());
        lines
    }
}

impl fmt::Display for SiegeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line.text)?;
        }
        Ok(())
    }
}
