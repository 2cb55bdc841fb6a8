//! Recommender pane: the data characteristics and the winning algorithm

use crate::config::VisualizerConfig;
use crate::recommend::{self, Recommendation};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn param_line<'a>(key: &'a str, label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!(" {} ", key),
            Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black),
        ),
        Span::styled(format!(" {:<13}", label), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// Render the recommender pane
pub fn render_recommender_pane(
    frame: &mut Frame,
    area: Rect,
    config: &VisualizerConfig,
    recommendation: &Recommendation,
) {
    let block = Block::default()
        .title(" Recommender ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let params = config.recommendation_params();
    let mut lines = vec![
        param_line("+/-", "Array size", params.array_size.to_string()),
        param_line("d", "Distribution", params.distribution.label().to_string()),
        param_line("t", "Stable", checkbox(params.stability_required).to_string()),
        param_line("m", "Low memory", checkbox(params.low_memory_required).to_string()),
        Line::from(""),
    ];

    let is_selected = recommendation.algorithm == config.algorithm;
    lines.push(Line::from(vec![
        Span::styled(
            recommendation.name.clone(),
            Style::default()
                .fg(DEFAULT_THEME.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            if is_selected {
                "  ✓ selected"
            } else {
                "  (a) apply"
            },
            Style::default().fg(if is_selected {
                DEFAULT_THEME.success
            } else {
                DEFAULT_THEME.comment
            }),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        format!(
            "time {}  ·  space {}",
            recommendation.time_complexity, recommendation.space_complexity
        ),
        Style::default().fg(DEFAULT_THEME.secondary),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        recommend::describe(recommendation),
        Style::default().fg(DEFAULT_THEME.fg),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
