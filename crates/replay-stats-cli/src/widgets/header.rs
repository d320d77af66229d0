//! Header widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::theme;

/// Render the application header, with the current context on the right of the title
pub fn render_header(frame: &mut Frame, area: Rect, context: &str) {
    let accent = theme::accent();
    let subtle = theme::subtle();

    let mut spans = vec![
        Span::styled(" replay", Style::default().fg(theme::text()).bold()),
        Span::styled("-stats ", Style::default().fg(accent).bold()),
        Span::styled(
            format!("v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(subtle),
        ),
    ];
    if !context.is_empty() {
        spans.push(Span::styled("\u{2502} ", Style::default().fg(subtle)));
        spans.push(Span::styled(
            context.to_string(),
            Style::default().fg(theme::text()).italic(),
        ));
    }

    let title = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .border_type(BorderType::Rounded),
        );

    frame.render_widget(title, area);
}
