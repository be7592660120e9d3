//! Terminal rendering of the contribution chart.

use colored::Colorize;
use greensquares_core::layout::{legend, LevelColors, WEEKDAY_LABELS};
use greensquares_core::ChartLayout;

const CELL: &str = "■";
const CELL_WIDTH: usize = 2;
const LABEL_WIDTH: usize = 4;

fn swatch(colors: LevelColors) -> String {
    CELL.truecolor(colors.fill.r, colors.fill.g, colors.fill.b)
        .to_string()
}

/// Month header, padded so each label starts above its column.
fn month_header(layout: &ChartLayout) -> String {
    let mut header = " ".repeat(LABEL_WIDTH);
    for label in &layout.month_labels {
        let column = LABEL_WIDTH + label.week_index * CELL_WIDTH;
        if header.len() < column {
            header.push_str(&" ".repeat(column - header.len()));
        } else if !header.ends_with(' ') {
            header.push(' ');
        }
        header.push_str(label.label);
    }
    header
}

/// Renders the chart as text lines (header, seven rows, legend).
pub fn render_chart(layout: &ChartLayout) -> Vec<String> {
    let mut lines = Vec::with_capacity(WEEKDAY_LABELS.len() + 3);
    lines.push(format!("{}", layout.year).bold().to_string());
    lines.push(month_header(layout));

    for (day_of_week, label) in WEEKDAY_LABELS.iter().enumerate() {
        let mut line = format!("{:<width$}", label, width = LABEL_WIDTH);
        for week_index in 0..layout.num_weeks {
            match layout.cell_at(week_index, day_of_week) {
                Some(cell) => line.push_str(&swatch(cell.colors())),
                None => line.push(' '),
            }
            line.push(' ');
        }
        lines.push(line.trim_end().to_string());
    }

    let swatches = legend()
        .into_iter()
        .map(swatch)
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(format!("{}Less {swatches} More", " ".repeat(LABEL_WIDTH)));
    lines
}
