//! Application state

use siege_core::{SiegeCalculator, SiegeError, SiegeResult, UnitType};

/// Longest text accepted in a single form field
const MAX_FIELD_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Calculator,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Calculator, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Calculator => "Calculator",
            Tab::Help => "Help",
        }
    }
}

/// Text fields of the siege form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Aptitude1,
    Aptitude2,
    Aptitude3,
    Durability,
    UnitCount,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Aptitude1,
            FormField::Aptitude2,
            FormField::Aptitude3,
            FormField::Durability,
            FormField::UnitCount,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Aptitude1 => "Commander 1 aptitude (S/A/B/C)",
            FormField::Aptitude2 => "Commander 2 aptitude",
            FormField::Aptitude3 => "Commander 3 aptitude",
            FormField::Durability => "Castle durability",
            FormField::UnitCount => "Participating units",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Aptitude1 => "e.g. S",
            FormField::Aptitude2 => "e.g. A",
            FormField::Aptitude3 => "e.g. B",
            FormField::Durability => "e.g. 50000",
            FormField::UnitCount => "e.g. 3",
        }
    }

    fn index(&self) -> usize {
        FormField::all().iter().position(|f| f == self).unwrap_or(0)
    }
}

/// Which part of the calculator has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    UnitType,
    Field(FormField),
}

pub struct App {
    pub current_tab: Tab,
    pub calculator: SiegeCalculator,
    pub selected_unit: usize,
    pub focus: Focus,
    pub inputs: [String; 5],
    pub outcome: Option<Result<SiegeResult, SiegeError>>,
    pub result_scroll: usize,
}

impl App {
    pub fn new(calculator: SiegeCalculator) -> Self {
        App {
            current_tab: Tab::Calculator,
            calculator,
            selected_unit: 0,
            focus: Focus::UnitType,
            inputs: Default::default(),
            outcome: None,
            result_scroll: 0,
        }
    }

    pub fn selected_unit_type(&self) -> UnitType {
        let units = UnitType::all();
        units[self.selected_unit.min(units.len() - 1)]
    }

    pub fn input(&self, field: FormField) -> &str {
        &self.inputs[field.index()]
    }

    pub fn toggle_help(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Help => Tab::Calculator,
            Tab::Calculator => Tab::Help,
        };
    }

    /// Move focus to the next form element, wrapping to the unit list
    pub fn next_focus(&mut self) {
        let fields = FormField::all();
        self.focus = match self.focus {
            Focus::UnitType => Focus::Field(fields[0]),
            Focus::Field(field) => match fields.get(field.index() + 1) {
                Some(next) => Focus::Field(*next),
                None => Focus::UnitType,
            },
        };
    }

    pub fn prev_focus(&mut self) {
        let fields = FormField::all();
        self.focus = match self.focus {
            Focus::UnitType => Focus::Field(fields[fields.len() - 1]),
            Focus::Field(field) if field.index() == 0 => Focus::UnitType,
            Focus::Field(field) => Focus::Field(fields[field.index() - 1]),
        };
    }

    pub fn on_up(&mut self) {
        if self.current_tab == Tab::Calculator {
            self.prev_focus();
        }
    }

    pub fn on_down(&mut self) {
        if self.current_tab == Tab::Calculator {
            self.next_focus();
        }
    }

    pub fn on_left(&mut self) {
        if self.focus == Focus::UnitType {
            let count = UnitType::all().len();
            self.selected_unit = (self.selected_unit + count - 1) % count;
        }
    }

    pub fn on_right(&mut self) {
        if self.focus == Focus::UnitType {
            self.selected_unit = (self.selected_unit + 1) % UnitType::all().len();
        }
    }

    pub fn on_char(&mut self, c: char) {
        if self.current_tab != Tab::Calculator {
            return;
        }
        if let Focus::Field(field) = self.focus {
            let input = &mut self.inputs[field.index()];
            if input.chars().count() < MAX_FIELD_LEN && !c.is_control() {
                input.push(c);
            }
        }
    }

    pub fn on_backspace(&mut self) {
        if let Focus::Field(field) = self.focus {
            self.inputs[field.index()].pop();
        }
    }

    pub fn scroll_result(&mut self, down: bool) {
        if down {
            self.result_scroll += 1;
        } else {
            self.result_scroll = self.result_scroll.saturating_sub(1);
        }
    }

    /// Run the calculation on the current form contents
    pub fn calculate(&mut self) {
        let [a1, a2, a3, durability, units] = &self.inputs;
        let unit_type = self.selected_unit_type();

        let outcome = self.calculator.compute_from_text(
            unit_type.label(),
            [a1.as_str(), a2.as_str(), a3.as_str()],
            durability,
            units,
        );

        match &outcome {
            Ok(result) => tracing::info!(
                unit_type = unit_type.label(),
                total_attack = result.total_attack,
                within_cap = result.within_turn_cap,
                "siege calculated"
            ),
            Err(err) => tracing::debug!(%err, "siege input rejected"),
        }

        self.outcome = Some(outcome);
        self.result_scroll = 0;
    }

    /// Clear the form and result, keeping the selected unit type
    pub fn reset(&mut self) {
        self.inputs = Default::default();
        self.outcome = None;
        self.focus = Focus::UnitType;
        self.result_scroll = 0;
    }
}
