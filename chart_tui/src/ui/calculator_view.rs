//! Calculator tab view

use crate::app::App;
use chart_core::{Outcome, MAX_DEFENDERS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    draw_slots(f, app, chunks[0]);
    draw_breakdown(f, app, chunks[1]);
}

fn draw_slots(f: &mut Frame, app: &App, area: Rect) {
    let slot_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, MAX_DEFENDERS as u32); MAX_DEFENDERS])
        .split(area);

    for (slot, chunk) in slot_chunks.iter().enumerate() {
        let name = app.selection.get(slot).unwrap_or("None");
        let focused = slot == app.focused_slot;
        let (border_style, text_style) = if focused {
            (
                Style::default().fg(Color::Yellow),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else {
            (Style::default().fg(Color::DarkGray), Style::default().fg(Color::White))
        };

        let paragraph = Paragraph::new(Line::from(Span::styled(name.to_string(), text_style)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(format!(" Defender {} ", slot + 1)),
            )
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, *chunk);
    }
}

fn draw_breakdown(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    match &app.breakdown {
        Some(breakdown) => {
            for (outcome, names) in breakdown.iter() {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:>2}x  ", outcome.label()),
                        Style::default()
                            .fg(outcome_color(outcome))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(names.join(", "), Style::default().fg(Color::White)),
                ]));
                lines.push(Line::from(""));
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Pick up to three defending types and press Enter.",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Attack Effectiveness "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Octuple | Outcome::Quadruple | Outcome::Double => Color::Green,
        Outcome::Neutral => Color::White,
        Outcome::Half | Outcome::Quarter | Outcome::Eighth => Color::Red,
        Outcome::Immune => Color::DarkGray,
        Outcome::Unknown => Color::LightBlue,
    }
}
