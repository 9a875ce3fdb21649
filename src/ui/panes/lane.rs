//! One quadrant of the four-up view

use super::bars::bar_lines;
use crate::race::Lane;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Padding, Paragraph},
    Frame,
};
use std::time::Duration;

/// Longest status text shown before trimming
const STATUS_WIDTH: usize = 52;

/// Trim `text` to `STATUS_WIDTH` characters, marking the cut with `...`
pub(crate) fn trim_status(text: &str) -> String {
    if text.chars().count() > STATUS_WIDTH {
        let mut trimmed: String = text.chars().take(STATUS_WIDTH).collect();
        trimmed.push_str("...");
        trimmed
    } else {
        text.to_string()
    }
}

pub(crate) fn format_elapsed(elapsed: Option<Duration>) -> String {
    match elapsed {
        Some(d) => format!("time: {:.3}s", d.as_secs_f64()),
        None => "time: --".to_string(),
    }
}

/// Render a lane: title, status, timer, and the bar chart
pub fn render_lane_pane(frame: &mut Frame, area: Rect, lane: &Lane) {
    let border_style = if lane.is_done() {
        Style::default()
            .fg(DEFAULT_THEME.border_done)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", lane.algorithm()),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ))
        .title(
            Title::from(Span::styled(
                format!(" n = {} ", lane.data().len()),
                Style::default().fg(DEFAULT_THEME.comment),
            ))
            .alignment(Alignment::Right),
        )
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(DEFAULT_THEME.panel_bg))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let info = Paragraph::new(vec![
        Line::from(Span::styled(
            trim_status(&lane.status()),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Line::from(Span::styled(
            format_elapsed(lane.elapsed()),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ]);
    frame.render_widget(info, rows[0]);

    let chart = rows[1];
    let lines = bar_lines(
        lane.data(),
        lane.highlights(),
        chart.width as usize,
        chart.height as usize,
    );
    frame.render_widget(Paragraph::new(lines), chart);
}
