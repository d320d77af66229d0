//! Footer widget with keyboard hints

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::theme;

/// Render the footer with keyboard hints, or a status message in their place
pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    hints: &[(&str, &str)],
    status: Option<&str>,
) {
    let accent = theme::accent();
    let text = theme::text();

    let line = match status {
        Some(message) => Line::from(Span::styled(message.to_string(), Style::default().fg(text))),
        None => {
            let spans: Vec<Span> = hints
                .iter()
                .enumerate()
                .flat_map(|(i, (key, action))| {
                    let mut result = vec![
                        Span::styled(format!("[{}]", key), Style::default().fg(accent)),
                        Span::styled(format!(" {}", action), Style::default().fg(text)),
                    ];
                    if i < hints.len() - 1 {
                        result.push(Span::raw("   "));
                    }
                    result
                })
                .collect();
            Line::from(spans)
        }
    };

    let footer = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::border())),
    );

    frame.render_widget(footer, area);
}
