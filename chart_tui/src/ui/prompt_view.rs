//! Modal prompts: new type entry and yes/no confirmation

use super::centered_rect;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw_input(f: &mut Frame, input: &str) {
    let area = centered_rect(44, 5, f.area());
    let lines = vec![
        Line::from(vec![
            Span::styled(input.to_string(), Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(Span::styled(
            "[Enter] Add  [Esc] Cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Enter new type "),
    );
    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

pub fn draw_confirm(f: &mut Frame, question: &str) {
    let width = (question.chars().count() as u16 + 4).max(30);
    let area = centered_rect(width, 5, f.area());
    let lines = vec![
        Line::from(Span::styled(
            question.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "[y] Yes  [n] No",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Confirm "),
        )
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
