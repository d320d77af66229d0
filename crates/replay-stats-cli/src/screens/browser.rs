//! Match file list

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};

use crate::app::App;
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App, selected: usize) {
    if let Some(error) = &app.last_error {
        let message = Paragraph::new(vec![
            Line::from(Span::styled(
                "Could not read the replay directory",
                Style::default().fg(theme::error()).bold(),
            )),
            Line::from(Span::styled(error.clone(), Style::default().fg(theme::subtle()))),
        ])
        .alignment(Alignment::Center)
        .block(bordered(" Matches "));
        frame.render_widget(message, area);
        return;
    }

    if app.rows.is_empty() {
        let empty = Paragraph::new("No match files found")
            .style(Style::default().fg(theme::subtle()))
            .alignment(Alignment::Center)
            .block(bordered(" Matches "));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["File", "Date", "Players"])
        .style(Style::default().fg(theme::accent()).bold());

    let rows: Vec<Row> = app
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                row.name.clone(),
                row.date_display.clone(),
                row.players_display(),
            ])
            .style(Style::default().fg(theme::text()))
        })
        .collect();

    let title = if app.scan_errors.is_empty() {
        format!(" Matches ({}) ", app.rows.len())
    } else {
        format!(
            " Matches ({}, {} skipped) ",
            app.rows.len(),
            app.scan_errors.len()
        )
    };

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Length(24),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(bordered(&title))
    .row_highlight_style(
        Style::default()
            .bg(theme::selection_bg())
            .fg(theme::accent())
            .bold(),
    )
    .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn bordered(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(theme::accent()).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::border()))
}
