//! Vertical bar chart of a lane's array
//!
//! Each element becomes a bar whose height is scaled against the largest
//! value, drawn with eighth-block characters for sub-cell precision. When the
//! array is wider than the pane, each terminal column shows the tallest
//! element of the slice it covers.

use crate::engine::Highlights;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

const BLOCKS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One terminal column of the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Column {
    Gap,
    Bar { index: usize, highlighted: bool },
}

/// Map array elements onto `width` terminal columns
pub(crate) fn layout_columns(values: &[i64], highlights: Highlights, width: usize) -> Vec<Column> {
    let len = values.len();
    if len == 0 || width == 0 {
        return Vec::new();
    }

    if len <= width {
        let bar_width = width / len;
        let mut columns = Vec::with_capacity(width);
        for index in 0..len {
            let highlighted = highlights.contains(index);
            // Leave a one-column gap between bars when there is room
            let solid = if bar_width >= 2 { bar_width - 1 } else { 1 };
            columns.extend(std::iter::repeat(Column::Bar { index, highlighted }).take(solid));
            if bar_width >= 2 {
                columns.push(Column::Gap);
            }
        }
        return columns;
    }

    (0..width)
        .map(|c| {
            let start = c * len / width;
            let end = ((c + 1) * len / width).max(start + 1);
            let index = (start..end)
                .max_by_key(|&i| values[i])
                .unwrap_or(start);
            let highlighted = (start..end).any(|i| highlights.contains(i));
            Column::Bar { index, highlighted }
        })
        .collect()
}

/// Height of `value` in eighths of a cell, for a chart `rows` cells tall
fn scaled_height(value: i64, max: i64, rows: usize) -> usize {
    let max = max.max(1) as u128;
    let value = value.max(0) as u128;
    (value * rows as u128 * 8 / max) as usize
}

/// Build the chart as `rows` lines, top row first
pub(crate) fn bar_lines(
    values: &[i64],
    highlights: Highlights,
    width: usize,
    rows: usize,
) -> Vec<Line<'static>> {
    let columns = layout_columns(values, highlights, width);
    let max = values.iter().copied().max().unwrap_or(0);
    let heights: Vec<Option<(usize, bool)>> = columns
        .iter()
        .map(|column| match *column {
            Column::Gap => None,
            Column::Bar { index, highlighted } => {
                Some((scaled_height(values[index], max, rows), highlighted))
            }
        })
        .collect();

    let normal = Style::default().fg(DEFAULT_THEME.bar);
    let accent = Style::default().fg(DEFAULT_THEME.bar_highlight);

    (0..rows)
        .map(|row| {
            let level = (rows - 1 - row) * 8;
            let spans: Vec<Span> = heights
                .iter()
                .map(|cell| match *cell {
                    None => Span::raw(" "),
                    Some((height, highlighted)) => {
                        let glyph = if height >= level + 8 {
                            BLOCKS[8]
                        } else if height > level {
                            BLOCKS[height - level]
                        } else {
                            BLOCKS[0]
                        };
                        let style = if highlighted { accent } else { normal };
                        Span::styled(glyph.to_string(), style)
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
