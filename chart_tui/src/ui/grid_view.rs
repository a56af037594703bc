//! Chart tab view: the attacker × defender grid

use super::{effectiveness_color, effectiveness_text_color};
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CELL_WIDTH: usize = 3;
const MAX_LABEL_WIDTH: usize = 12;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let types = app.chart.types();
    let label_width = types
        .iter()
        .map(|t| t.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_LABEL_WIDTH)
        + 1;

    // Inside the border, one header row and the label column
    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    let visible_cols = (inner_width.saturating_sub(label_width) / CELL_WIDTH).max(1);
    let visible_rows = inner_height.saturating_sub(1).max(1);

    let first_col = window_start(app.cursor_col, visible_cols);
    let first_row = window_start(app.cursor_row, visible_rows);

    let mut lines = Vec::with_capacity(visible_rows + 1);

    // Column header: first three letters of each defender
    let mut header = vec![Span::raw(" ".repeat(label_width))];
    for (col, name) in types.iter().enumerate().skip(first_col).take(visible_cols) {
        let short: String = name.chars().take(CELL_WIDTH).collect();
        let style = if col == app.cursor_col {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        header.push(Span::styled(format!("{:<width$}", short, width = CELL_WIDTH), style));
    }
    lines.push(Line::from(header));

    for (row, attacker) in types.iter().enumerate().skip(first_row).take(visible_rows) {
        let label: String = attacker.chars().take(MAX_LABEL_WIDTH).collect();
        let label_style = if row == app.cursor_row {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if app.chart.is_custom(attacker) {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        let mut spans = vec![Span::styled(
            format!("{:<width$}", label, width = label_width),
            label_style,
        )];

        for (col, defender) in types.iter().enumerate().skip(first_col).take(visible_cols) {
            let value = app.chart.get(attacker, defender);
            let mut style = Style::default()
                .bg(effectiveness_color(value))
                .fg(effectiveness_text_color(value));
            if row == app.cursor_row && col == app.cursor_col {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            spans.push(Span::styled(format!(" {} ", value.symbol()), style));
        }
        lines.push(Line::from(spans));
    }

    let title = match app.focused_matchup() {
        Some((attacker, defender)) => format!(
            " {} → {} : {} ",
            attacker,
            defender,
            app.chart.get(attacker, defender)
        ),
        None => " Chart ".to_string(),
    };

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, area);
}

/// First index of a window of `len` items that keeps `cursor` visible
fn window_start(cursor: usize, len: usize) -> usize {
    cursor.saturating_sub(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_start() {
        assert_eq!(window_start(0, 10), 0);
        assert_eq!(window_start(9, 10), 0);
        assert_eq!(window_start(10, 10), 1);
        assert_eq!(window_start(5, 1), 5);
    }
}
