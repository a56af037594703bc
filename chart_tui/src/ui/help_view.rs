//! Help tab view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let paths = &app.config.paths;
    let lines = vec![
        Line::from(Span::styled(
            "═══ Navigation ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("1-3", "Jump to tab (Chart/Calc/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Chart ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("←↑↓→ / hjkl", "Move the cell cursor"),
        key_line("Enter / Space", "Toggle matchup 1 → 2 → ½ → 0"),
        key_line("a", "Add a new type"),
        key_line("d", "Remove the type on the cursor row"),
        key_line("s", "Save"),
        key_line("L", "Load (replaces unsaved edits)"),
        key_line("R", "Reset to the factory chart"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Calculator ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("←/→", "Focus a defender slot"),
        key_line("↑/↓", "Change the slot's type"),
        key_line("Enter", "Group attacking types by multiplier"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Rules ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from("  Unset base-type matchups count as 1x."),
        Line::from("  Unset matchups involving an added type show as ?."),
        Line::from("  Combined multiplier = product over the selected defenders;"),
        Line::from("  any ? makes the whole result ?, even next to a 0."),
        Line::from("  Added types are restored on load only if a matchup names them."),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Files ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("  Working chart: {}", paths.working.display())),
        Line::from(format!("  Factory chart: {}", paths.factory.display())),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "));

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
