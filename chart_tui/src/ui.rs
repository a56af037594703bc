//! UI rendering

mod calculator_view;
mod grid_view;
mod help_view;
mod prompt_view;

use crate::app::{App, Mode, Tab};
use chart_core::{Effectiveness, Multiplier};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status line
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Chart => grid_view::draw(f, app, chunks[1]),
        Tab::Calculator => calculator_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_status(f, app, chunks[2]);
    draw_keybindings(f, app, chunks[3]);

    match &app.mode {
        Mode::Normal => {}
        Mode::AddingType { input } => prompt_view::draw_input(f, input),
        Mode::Confirm(action) => prompt_view::draw_confirm(f, &action.question()),
    }
}

/// Cell background for a matchup value
pub fn effectiveness_color(value: Effectiveness) -> Color {
    match value {
        Effectiveness::Known(Multiplier::Neutral) => Color::White,
        Effectiveness::Known(Multiplier::SuperEffective) => Color::Rgb(0x4e, 0x9a, 0x06),
        Effectiveness::Known(Multiplier::Resisted) => Color::Rgb(0xa4, 0x00, 0x00),
        Effectiveness::Known(Multiplier::Immune) => Color::Rgb(0x2e, 0x34, 0x36),
        Effectiveness::Unknown => Color::Rgb(0xad, 0xd8, 0xe6),
    }
}

/// Readable text color on top of [`effectiveness_color`]
pub fn effectiveness_text_color(value: Effectiveness) -> Color {
    match value {
        Effectiveness::Known(Multiplier::Neutral) | Effectiveness::Unknown => Color::Black,
        Effectiveness::Known(_) => Color::White,
    }
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" » ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.status.clone(), Style::default().fg(Color::White)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("Tab", "Next tab"), ("s", "Save"), ("L", "Load"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Chart => vec![
            ("←↑↓→", "Move"),
            ("Enter/Space", "Toggle"),
            ("a", "Add type"),
            ("d", "Remove type"),
            ("R", "Reset"),
        ],
        Tab::Calculator => vec![
            ("←/→", "Slot"),
            ("↑/↓", "Change type"),
            ("Enter", "Calculate"),
        ],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    // Add tab-specific keys first
    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Type Chart "),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

/// Rect of the given size centered in `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
