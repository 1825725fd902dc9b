//! Help tab view

use super::heading;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use siege_core::{AptitudeGrade, UnitType, MODIFIER_DISCLAIMER};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let rules = app.calculator.rules();

    let mut lines = vec![
        heading("Navigation"),
        key_line("↑/↓  Tab/Shift+Tab", "Move between unit type and form fields"),
        key_line("←/→", "Change unit type"),
        key_line("Enter", "Calculate"),
        key_line("Backspace", "Delete last character"),
        key_line("PgUp/PgDn", "Scroll the result"),
        key_line("Ctrl+R", "Clear the form"),
        key_line("?", "Toggle help"),
        key_line("Esc / Ctrl+C", "Quit"),
        Line::from(""),
        heading("Siege Value"),
        Line::from(""),
        formula_line("Unit value", "floor(Base × (Apt1 + Apt2 + Apt3))"),
        formula_line("Total value", "Unit value × Participating units"),
        formula_line("Turns", "Durability / Total value"),
        formula_line(
            "Time",
            &format!("floor(Turns × {} s)", rules.turn_seconds),
        ),
        Line::from(""),
        Line::from(Span::styled("Base values:", Style::default().fg(Color::Yellow))),
    ];

    for unit in UnitType::all() {
        lines.push(Line::from(format!("  {:24} {}", unit.to_string(), unit.base_attack())));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Aptitude coefficients:",
        Style::default().fg(Color::Yellow),
    )));
    let coefficients: Vec<String> = AptitudeGrade::all()
        .iter()
        .map(|grade| format!("{} = {}", grade, grade.coefficient_text()))
        .collect();
    lines.push(Line::from(format!("  {}", coefficients.join("   "))));

    lines.push(Line::from(""));
    lines.push(heading("Turn Limit"));
    lines.push(Line::from(format!(
        "  A siege must finish within {} turns",
        rules.max_turns
    )));
    lines.push(Line::from(format!(
        "  Over the limit, the unit count for {} turns is recommended",
        rules.recommended_turns
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        MODIFIER_DISCLAIMER,
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Rules "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}

fn formula_line(name: &str, formula: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:14}", name), Style::default().fg(Color::Gray)),
        Span::styled(formula.to_string(), Style::default().fg(Color::White)),
    ])
}
