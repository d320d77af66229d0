//! Side-by-side comparison table for one match

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use replay_stats_core::listing::MatchComparison;
use replay_stats_core::table::{Cell as StatCell, TableDescriptor};

use crate::theme;

/// Minimum width of a competitor column
const MIN_VALUE_WIDTH: usize = 12;

pub fn render(frame: &mut Frame, area: Rect, comparison: &MatchComparison, scroll: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_players(frame, chunks[0], comparison);

    match &comparison.table {
        TableDescriptor::Placeholder { message } => {
            let placeholder = Paragraph::new(message.clone())
                .style(Style::default().fg(theme::error()).bold())
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme::border())),
                );
            frame.render_widget(placeholder, chunks[1]);
        }
        TableDescriptor::Stats { .. } => render_table(frame, chunks[1], comparison, scroll),
    }
}

fn render_players(frame: &mut Frame, area: Rect, comparison: &MatchComparison) {
    let accent = Style::default().fg(theme::accent()).bold();
    let line = Line::from(vec![
        Span::styled(comparison.left.name.clone(), accent),
        Span::styled("  vs  ", Style::default().fg(theme::subtle())),
        Span::styled(comparison.right.name.clone(), accent),
    ]);

    let players = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::border())),
    );
    frame.render_widget(players, area);
}

fn render_table(frame: &mut Frame, area: Rect, comparison: &MatchComparison, scroll: usize) {
    let sections = comparison.table.sections();

    let value_width = sections
        .iter()
        .flat_map(|s| s.rows.iter())
        .flat_map(|r| r.cells())
        .map(|c| c.display.chars().count())
        .chain([
            comparison.left.name.chars().count(),
            comparison.right.name.chars().count(),
            MIN_VALUE_WIDTH,
        ])
        .max()
        .unwrap_or(MIN_VALUE_WIDTH);

    let section_style = Style::default().fg(theme::accent()).bold();
    let rows: Vec<Row> = sections
        .iter()
        .flat_map(|section| {
            let title = Row::new(vec![Cell::from(section.title.clone()).style(section_style)]);
            let stats = section.rows.iter().map(|row| {
                Row::new(vec![
                    Cell::from(row.header.clone()).style(Style::default().fg(theme::text())),
                    stat_cell(&row.left),
                    stat_cell(&row.right),
                ])
            });
            std::iter::once(title).chain(stats)
        })
        .skip(scroll)
        .collect();

    let header = Row::new(vec![
        String::new(),
        comparison.left.name.clone(),
        comparison.right.name.clone(),
    ])
    .style(Style::default().fg(theme::subtle()).bold());

    let table = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(value_width as u16),
            Constraint::Length(value_width as u16),
        ],
    )
    .header(header)
    .column_spacing(3)
    .block(
        Block::default()
            .title(Span::styled(" Overall ", section_style))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::border())),
    );

    frame.render_widget(table, area);
}

fn stat_cell(cell: &StatCell) -> Cell<'static> {
    let style = if cell.highlighted {
        Style::default().fg(theme::winner()).bold()
    } else {
        Style::default().fg(theme::text())
    };
    Cell::from(cell.display.clone()).style(style)
}
