//! Help overlay showing keyboard shortcuts

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let accent = theme::accent();
    let modal_area = centered_rect(46, 22, area);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(Span::styled(
            " Keyboard Shortcuts ",
            Style::default().fg(accent).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let lines = vec![
        Line::from(Span::styled("Match List", Style::default().fg(accent).bold())),
        shortcut_line("\u{2191}/\u{2193} or j/k", "Move selection"),
        shortcut_line("PgUp/PgDn", "Move by page"),
        shortcut_line("Enter", "Open stats"),
        shortcut_line("r", "Rescan directory"),
        Line::from(""),
        Line::from(Span::styled("Stats", Style::default().fg(accent).bold())),
        shortcut_line("\u{2191}/\u{2193} or j/k", "Scroll"),
        shortcut_line("s", "Swap sides"),
        shortcut_line("e / c", "Export JSON / CSV"),
        shortcut_line("Esc", "Back to list"),
        Line::from(""),
        Line::from(Span::styled("General", Style::default().fg(accent).bold())),
        shortcut_line("t", "Next color theme"),
        shortcut_line("?", "This help screen"),
        shortcut_line("q", "Quit"),
    ];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(inner);

    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let separator = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(accent));
    frame.render_widget(separator, chunks[1]);

    let footer = Paragraph::new(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme::subtle()).italic(),
    )))
    .alignment(Alignment::Center);
    let footer_inner = Rect::new(chunks[1].x, chunks[1].y + 1, chunks[1].width, 1);
    frame.render_widget(footer, footer_inner);
}

fn shortcut_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:<14}", key), Style::default().fg(theme::text())),
        Span::styled(description.to_string(), Style::default().fg(theme::subtle())),
    ])
}

fn centered_rect(width: u16, height: u16, parent: Rect) -> Rect {
    let x = parent.x + (parent.width.saturating_sub(width)) / 2;
    let y = parent.y + (parent.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(parent.width), height.min(parent.height))
}
