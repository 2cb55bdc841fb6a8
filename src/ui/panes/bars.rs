//! Bars pane: one vertical bar per slot, coloured by its tag
//!
//! Idle slots are drawn in the idle colour and selected slots in the
//! highlight colour. Once playback reaches the last frame of a successful
//! run every bar switches to the sorted colour.

use crate::recommend::profiles;
use crate::snapshot::{Frame as RunFrame, StepCue};
use crate::sorting::AlgorithmKey;
use crate::store::{ElementState, ElementTag, VALUE_RANGE};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

/// Width and gap for `count` bars in `available` columns
pub fn bar_layout(available: u16, count: usize) -> (u16, u16) {
    let count = u16::try_from(count.max(1)).unwrap_or(u16::MAX);
    let gap = if available >= count.saturating_mul(2) {
        1
    } else {
        0
    };
    let width = (available.saturating_sub(gap * (count - 1)) / count).max(1);
    (width, gap)
}

fn bar_color(element: &ElementState, finished: bool) -> Color {
    match element.state {
        ElementTag::Selected => DEFAULT_THEME.bar_selected,
        ElementTag::Idle if finished => DEFAULT_THEME.bar_sorted,
        ElementTag::Idle => DEFAULT_THEME.bar_idle,
    }
}

fn cue_label(cue: StepCue) -> &'static str {
    match cue {
        StepCue::Compare => "compare",
        StepCue::Swap => "swap",
        StepCue::Place => "place",
        StepCue::Idle => "idle",
    }
}

/// Render the bars pane for the frame under the playback cursor
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    current: Option<&RunFrame>,
    algorithm: AlgorithmKey,
    finished: bool,
) {
    let name = profiles::profile(algorithm).name;
    let title = match current {
        Some(run_frame) => format!(" {} · {} ", name, cue_label(run_frame.cue)),
        None => format!(" {} ", name),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let Some(run_frame) = current.filter(|f| !f.elements.is_empty()) else {
        let paragraph = Paragraph::new("(no frames recorded)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let (width, gap) = bar_layout(area.width.saturating_sub(2), run_frame.elements.len());
    let bars: Vec<Bar> = run_frame
        .elements
        .iter()
        .map(|element| {
            let color = bar_color(element, finished);
            // Values only fit on bars at least three columns wide
            let text = if width >= 3 {
                element.value.to_string()
            } else {
                String::new()
            };
            Bar::default()
                .value(u64::from(element.value))
                .text_value(text)
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(gap)
        .max(u64::from(VALUE_RANGE.end));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_layout_fits_width() {
        let (width, gap) = bar_layout(100, 12);
        assert_eq!(gap, 1);
        assert!(width * 12 + gap * 11 <= 100);
        assert_eq!(width, 7);

        // Too narrow for gaps: bars touch
        assert_eq!(bar_layout(60, 50), (1, 0));
        // Never zero-width, even when nothing fits
        assert_eq!(bar_layout(0, 50), (1, 0));
        assert_eq!(bar_layout(10, 0), (10, 1));
    }

    #[test]
    fn test_selected_bars_override_sorted_colour() {
        let selected = ElementState {
            value: 5,
            state: ElementTag::Selected,
        };
        assert_eq!(bar_color(&selected, true), DEFAULT_THEME.bar_selected);
        assert_eq!(bar_color(&ElementState::idle(5), true), DEFAULT_THEME.bar_sorted);
        assert_eq!(bar_color(&ElementState::idle(5), false), DEFAULT_THEME.bar_idle);
    }
}
