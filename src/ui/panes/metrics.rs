//! Metrics pane: counters at the current frame plus the per-array scoreboard

use crate::metrics::Metrics;
use crate::recommend::profiles;
use crate::snapshot::{Frame as RunFrame, FrameHistory};
use crate::sorting::AlgorithmKey;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};
use std::collections::HashMap;
use std::hash::BuildHasher;

fn count_text(algorithm: AlgorithmKey, value: u64) -> String {
    if algorithm.records_metrics() {
        value.to_string()
    } else {
        "-".to_string()
    }
}

fn row<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<13}", label), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// Render the metrics pane
pub fn render_metrics_pane<S: BuildHasher>(
    frame: &mut Frame,
    area: Rect,
    algorithm: AlgorithmKey,
    current: Option<&RunFrame>,
    history: &FrameHistory,
    scoreboard: &HashMap<AlgorithmKey, Metrics, S>,
) {
    let block = Block::default()
        .title(" Metrics ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 0, 0, 0));

    let metrics = current.map(|f| f.metrics).unwrap_or_default();
    let mut lines = vec![
        row("Comparisons", count_text(algorithm, metrics.comparisons)),
        row("Swaps", count_text(algorithm, metrics.swaps)),
        row(
            "Frame",
            format!("{}/{}", history.position() + 1, history.len()),
        ),
        row(
            "History",
            format!("{} KB", history.memory_usage().div_ceil(1024)),
        ),
    ];

    if !algorithm.records_metrics() {
        lines.push(Line::from(Span::styled(
            "(comparisons and swaps are not counted)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Scoreboard",
        Style::default()
            .fg(DEFAULT_THEME.accent)
            .add_modifier(Modifier::BOLD),
    )));

    if scoreboard.is_empty() {
        lines.push(Line::from(Span::styled(
            "(play a run to the end)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    // Table order keeps the list stable as entries are added
    for key in AlgorithmKey::ALL {
        let Some(result) = scoreboard.get(&key) else {
            continue;
        };
        let style = if key == algorithm {
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        lines.push(Line::from(Span::styled(
            format!(
                "{:<15} cmp {:>5}  swp {:>5}",
                profiles::profile(key).name,
                count_text(key, result.comparisons),
                count_text(key, result.swaps)
            ),
            style,
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
