//! Line chart rendering of the figure.

use super::formatters::format_axis_label;
use super::ThemeColors;
use crate::app::App;
use crate::data::downsample;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
    Frame,
};

/// Draw the figure's curves, axes, legend and the cursor line.
pub(super) fn draw_chart(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let figure = &app.figure;
    let x_range = app.view;
    let y_range = app
        .visible_y_range()
        .pad_by(app.layout.y_axis_padding_factor);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(chart_title(app))
        .title_style(
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(colors.bg));

    if figure.sample_count() == 0 {
        let para = Paragraph::new("No valid data to display")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    }

    // Downsample to fit width
    let max_points = app.layout.max_points(area.width);
    let curves: Vec<Vec<(f64, f64)>> = figure
        .series()
        .iter()
        .map(|s| downsample(&s.points_within(x_range), max_points))
        .collect();

    // Cursor as an unnamed vertical line so it stays out of the legend
    let cursor_line: Option<[(f64, f64); 2]> = app
        .cursor_x()
        .filter(|x| x_range.contains(*x))
        .map(|x| [(x, y_range.min), (x, y_range.max)]);

    let mut datasets: Vec<Dataset<'_>> = figure
        .series()
        .iter()
        .zip(&curves)
        .enumerate()
        .map(|(i, (series, points))| {
            Dataset::default()
                .name(series.label.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.series_color(i)))
                .data(points)
        })
        .collect();

    if let Some(ref line) = cursor_line {
        datasets.push(
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.cursor))
                .data(line),
        );
    }

    let axis_style = Style::default().fg(colors.label);

    let x_axis = Axis::default()
        .title(figure.x_label_text().unwrap_or_default().to_string())
        .style(axis_style)
        .bounds([x_range.min, x_range.max])
        .labels(axis_labels(x_range.min, x_range.max));

    let y_axis = Axis::default()
        .title(figure.y_label_text().unwrap_or_default().to_string())
        .style(axis_style)
        .bounds([y_range.min, y_range.max])
        .labels(axis_labels(y_range.min, y_range.max));

    let legend_position = if app.legend_visible() {
        Some(LegendPosition::TopRight)
    } else {
        None
    };

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(legend_position)
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    f.render_widget(chart, area);
}

/// Min, middle and max labels for an axis.
fn axis_labels(min: f64, max: f64) -> Vec<String> {
    vec![
        format_axis_label(min),
        format_axis_label((min + max) / 2.0),
        format_axis_label(max),
    ]
}

fn chart_title(app: &App) -> String {
    match (app.figure.title_text(), app.file_name.as_deref()) {
        (Some(title), _) => format!(" {} ", title),
        (None, Some(name)) => format!(" {} ", name),
        (None, None) => " odeview ".to_string(),
    }
}
