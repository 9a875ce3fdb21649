//! Control panel across the top of the screen

use crate::race::Race;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// `4-up Compare | mode=random | RUN | speed=180 steps/s | n=80`
pub(crate) fn summary_line(race: &Race) -> String {
    let config = race.config();
    format!(
        "4-up Compare | mode={} | {} | speed={} steps/s | n={}",
        config.order,
        if race.is_running() { "RUN" } else { "PAUSE" },
        config.steps_per_second,
        config.size
    )
}

pub fn render_header_pane(frame: &mut Frame, area: Rect, race: &Race) {
    let block = Block::default()
        .title(" sortty ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .style(Style::default().bg(DEFAULT_THEME.panel_bg));

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default().fg(DEFAULT_THEME.fg);

    let mut controls = Vec::new();
    for (key, desc) in [
        (" ⎵ ", " start/pause "),
        (" r ", " reset "),
        (" - / + ", " size "),
        (" [ / ] ", " speed "),
        (" 1 ", " random "),
        (" 2 ", " sorted "),
        (" 3 ", " reverse "),
        (" ↵ ", " finish "),
    ] {
        controls.push(Span::styled(key, key_style));
        controls.push(Span::styled(desc, desc_style));
        controls.push(Span::raw(" "));
    }

    let summary = Span::styled(
        summary_line(race),
        Style::default()
            .fg(DEFAULT_THEME.fg)
            .add_modifier(Modifier::BOLD),
    );

    let paragraph = Paragraph::new(vec![Line::from(controls), Line::from(summary)]).block(block);
    frame.render_widget(paragraph, area);
}
