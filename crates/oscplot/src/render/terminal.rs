//! Character-cell line charts.
//!
//! Each panel renders as:
//!
//! ```text
//! Simple Harmonic Motion
//! Position (m)
//!    1.000 ┤*        **        **
//!          │ *      *  *      *
//!    0.000 ┤··*····*····*····*····
//!          │   *  *      *  *
//!   -1.000 ┤    **        **
//!          └──────────────────────
//!           0.00               20.00
//!                  Time (s)
//! ```

use colored::{Color, Colorize};

use crate::figure::{Figure, Panel, POSITION_LABEL, Rgb, TIME_LABEL};

const LABEL_WIDTH: usize = 9;
const POINT: char = '*';
const GRID: char = '·';

/// Options for the text renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    /// Plot area width in cells.
    pub width: usize,
    /// Plot area height in rows.
    pub height: usize,
    /// Whether to emit ANSI colors.
    pub color: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            width: 72,
            height: 12,
            color: false,
        }
    }
}

/// Renders every panel of `figure`, stacked with a blank line between them.
pub fn render(figure: &Figure, options: &TextOptions) -> String {
    figure
        .panels()
        .iter()
        .map(|panel| render_panel(figure, panel, options))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_panel(figure: &Figure, panel: &Panel, options: &TextOptions) -> String {
    let width = options.width.max(2);
    let height = options.height.max(2);
    let mut out = String::new();

    let title = if options.color {
        panel.title().bold().to_string()
    } else {
        panel.title().to_string()
    };
    out.push_str(&title);
    out.push('\n');
    out.push_str(POSITION_LABEL);
    out.push('\n');

    let canvas = plot_cells(figure.times(), panel.positions(), panel.padded_bounds(), width, height);
    let (lo, hi) = panel.padded_bounds();
    let middle = height / 2;

    for (row, cells) in canvas.iter().enumerate() {
        let label = if row == 0 {
            Some(hi)
        } else if row == middle {
            Some(value_at_row(row, lo, hi, height))
        } else if row == height - 1 {
            Some(lo)
        } else {
            None
        };

        match label {
            Some(value) => out.push_str(&format!("{value:>width$.3} ┤", width = LABEL_WIDTH - 1)),
            None => out.push_str(&format!("{:LABEL_WIDTH$}│", "")),
        }

        for &cell in cells {
            if cell == POINT && options.color {
                out.push_str(&paint(cell, panel.color()));
            } else {
                out.push(cell);
            }
        }
        out.push('\n');
    }

    out.push_str(&format!("{:LABEL_WIDTH$}└{}\n", "", "─".repeat(width)));

    let (start, end) = figure.time_range();
    let start_label = format!("{start:.2}");
    let end_label = format!("{end:.2}");
    let gap = (width + 1).saturating_sub(start_label.len() + end_label.len()).max(1);
    out.push_str(&format!(
        "{:LABEL_WIDTH$}{start_label}{:gap$}{end_label}\n",
        "", ""
    ));

    let caption_indent = LABEL_WIDTH + (width + 1).saturating_sub(TIME_LABEL.len()) / 2;
    out.push_str(&format!("{:caption_indent$}{TIME_LABEL}\n", ""));

    if panel.positions().is_empty() {
        out.push_str(&format!("{:LABEL_WIDTH$}(no samples)\n", ""));
    }

    out
}

fn paint(cell: char, Rgb(r, g, b): Rgb) -> String {
    cell.to_string()
        .color(Color::TrueColor { r, g, b })
        .to_string()
}

/// Row index (0 = top) for `value` inside `[lo, hi]`.
fn row_for(value: f64, lo: f64, hi: f64, height: usize) -> usize {
    let scaled = (hi - value) / (hi - lo) * (height - 1) as f64;
    // NaN and out-of-range values clamp onto the frame
    scaled.round().clamp(0.0, (height - 1) as f64) as usize
}

fn value_at_row(row: usize, lo: f64, hi: f64, height: usize) -> f64 {
    hi - (hi - lo) * row as f64 / (height - 1) as f64
}

/// Rasterizes one series onto a `height × width` grid of cells.
///
/// Samples are bucketed by time into columns; each column draws a vertical
/// run spanning its samples and the previous column's last sample, so steep
/// stretches stay connected.
fn plot_cells(
    times: &[f64],
    positions: &[f64],
    (lo, hi): (f64, f64),
    width: usize,
    height: usize,
) -> Vec<Vec<char>> {
    let mut canvas = vec![vec![' '; width]; height];

    if lo < 0.0 && hi > 0.0 {
        let zero = row_for(0.0, lo, hi, height);
        canvas[zero].fill(GRID);
    }

    let (Some(&start), Some(&end)) = (times.first(), times.last()) else {
        return canvas;
    };
    let span = end - start;

    let mut previous: Option<usize> = None;
    let mut column_rows: Vec<Option<(usize, usize)>> = vec![None; width];
    let mut last_in_column: Vec<Option<usize>> = vec![None; width];

    for (&t, &x) in times.iter().zip(positions) {
        let column = if span > 0.0 {
            (((t - start) / span) * (width - 1) as f64).round() as usize
        } else {
            0
        }
        .min(width - 1);
        let row = row_for(x, lo, hi, height);

        let entry = column_rows[column].get_or_insert((row, row));
        entry.0 = entry.0.min(row);
        entry.1 = entry.1.max(row);
        last_in_column[column] = Some(row);
    }

    for column in 0..width {
        let Some((mut top, mut bottom)) = column_rows[column] else {
            continue;
        };
        if let Some(prev) = previous {
            top = top.min(prev);
            bottom = bottom.max(prev);
        }
        for row in canvas.iter_mut().take(bottom + 1).skip(top) {
            row[column] = POINT;
        }
        previous = last_in_column[column];
    }

    canvas
}
