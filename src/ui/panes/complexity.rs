//! Complexity table pane with the derivation notes for the selected algorithm

use crate::recommend::profiles::{self, ComplexityCell};
use crate::sorting::AlgorithmKey;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

fn note_line<'a>(label: &'a str, cell: &ComplexityCell) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<8}", label), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!("{:<11}", cell.bound),
            Style::default().fg(DEFAULT_THEME.secondary),
        ),
        Span::styled(cell.note, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// Render the complexity pane, highlighting `selected`
pub fn render_complexity_pane(frame: &mut Frame, area: Rect, selected: AlgorithmKey) {
    let block = Block::default()
        .title(" Time Complexity ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let header = Row::new(vec!["Algorithm", "Best", "Average", "Worst"]).style(
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = AlgorithmKey::ALL
        .into_iter()
        .map(|key| {
            let info = profiles::complexity(key);
            let row = Row::new(vec![
                Cell::from(profiles::profile(key).name),
                Cell::from(info.best.bound),
                Cell::from(info.average.bound),
                Cell::from(info.worst.bound),
            ]);
            if key == selected {
                row.style(
                    Style::default()
                        .bg(DEFAULT_THEME.current_line_bg)
                        .fg(DEFAULT_THEME.accent),
                )
            } else {
                row.style(Style::default().fg(DEFAULT_THEME.fg))
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(15),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(11),
        ],
    )
    .header(header);
    frame.render_widget(table, halves[0]);

    let info = profiles::complexity(selected);
    let notes = vec![
        Line::from(Span::styled(
            profiles::profile(selected).name,
            Style::default()
                .fg(DEFAULT_THEME.accent)
                .add_modifier(Modifier::BOLD),
        )),
        note_line("Best", &info.best),
        note_line("Average", &info.average),
        note_line("Worst", &info.worst),
    ];
    frame.render_widget(
        Paragraph::new(notes).wrap(ratatui::widgets::Wrap { trim: true }),
        halves[1],
    );
}
