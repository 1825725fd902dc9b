//! Calculator tab view

use super::heading;
use crate::app::{App, Focus, FormField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use siege_core::{
    report::{LineKind, SiegeReport},
    UnitType,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_form(f, app, chunks[0]);
    draw_result(f, app, chunks[1]);
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let unit_focused = app.focus == Focus::UnitType;
    let selected = app.selected_unit_type();

    let mut lines = vec![heading("Unit Type"), Line::from("")];

    for unit in UnitType::all() {
        let is_selected = *unit == selected;
        let marker = if is_selected { "▶ " } else { "  " };
        let style = match (is_selected, unit_focused) {
            (true, true) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            (false, _) => Style::default().fg(Color::DarkGray),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{:14}", marker, unit.to_string()), style),
            Span::styled(
                format!(" base {}", unit.base_attack()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(heading("Siege Conditions"));
    lines.push(Line::from(""));

    for field in FormField::all() {
        lines.push(field_line(app, *field));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Input ")
            .border_style(Style::default().fg(Color::Gray)),
    );

    f.render_widget(paragraph, area);
}

fn field_line(app: &App, field: FormField) -> Line<'static> {
    let focused = app.focus == Focus::Field(field);
    let value = app.input(field);

    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value_span = if value.is_empty() {
        Span::styled(field.placeholder().to_string(), Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(value.to_string(), Style::default().fg(Color::White))
    };

    let mut spans = vec![
        Span::styled(format!("{:32}", field.label()), label_style),
        value_span,
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

fn draw_result(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = match &app.outcome {
        None => vec![
            Line::from(Span::styled(
                "Fill in the form and press Enter",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        Some(Err(err)) => vec![Line::from(Span::styled(
            format!("⚠ {}", err.user_message()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))],
        Some(Ok(result)) => SiegeReport::new(result)
            .lines()
            .into_iter()
            .skip(app.result_scroll)
            .map(|line| Line::from(Span::styled(line.text, line_style(line.kind))))
            .collect(),
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Result "))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn line_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Heading => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        LineKind::Field | LineKind::Blank => Style::default().fg(Color::White),
        LineKind::Disclaimer => Style::default().fg(Color::DarkGray),
        LineKind::Pass => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        LineKind::Fail => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        LineKind::Recommendation => Style::default().fg(Color::Yellow),
    }
}
