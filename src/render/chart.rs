use std::path::Path;

use plotters::prelude::*;

use super::style::{
    padded_range, AXIS_DESC_FONT_SIZE, FIGURE_BACKGROUND, FONT_FAMILY, GRID_COLOR,
    LEGEND_SWATCH_WIDTH, LINE_WIDTH, MARKER_RADIUS, PLOT_BACKGROUND, TICK_FONT_SIZE,
    TITLE_FONT_SIZE,
};
use super::RenderError;
use crate::color::ColorMap;
use crate::data::model::{Metric, WorkloadGroup};

// ---------------------------------------------------------------------------
// Series preparation
// ---------------------------------------------------------------------------

/// One plotted line: a workload's `(threads, value)` points and its colour.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: RGBColor,
    pub points: Vec<(f64, f64)>,
}

/// One series per workload group, in group order.
pub fn build_series(groups: &[WorkloadGroup<'_>], colors: &ColorMap, metric: Metric) -> Vec<Series> {
    groups
        .iter()
        .map(|group| Series {
            label: group.workload.to_string(),
            color: colors.color_for(group.workload),
            points: group.points(metric),
        })
        .collect()
}

fn legend_position(metric: Metric) -> SeriesLabelPosition {
    // Throughput climbs then flattens, latency climbs: keep the box off the curves.
    match metric {
        Metric::Throughput => SeriesLabelPosition::LowerRight,
        Metric::ResponseTime => SeriesLabelPosition::UpperLeft,
    }
}

// ---------------------------------------------------------------------------
// PNG rendering
// ---------------------------------------------------------------------------

/// Draw `series` as a marker-connected line chart for `metric` and write it
/// to `path` as a PNG of `size` pixels.
pub fn render_chart(
    path: &Path,
    size: (u32, u32),
    metric: Metric,
    series: &[Series],
) -> Result<(), RenderError> {
    let draw_err = |e: &dyn std::fmt::Display| RenderError::Draw {
        metric,
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let x_range = padded_range(series.iter().flat_map(|s| s.points.iter().map(|p| p.0)))
        .ok_or(RenderError::AxisRange { metric, axis: "x" })?;
    let y_range = padded_range(series.iter().flat_map(|s| s.points.iter().map(|p| p.1)))
        .ok_or(RenderError::AxisRange { metric, axis: "y" })?;

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&FIGURE_BACKGROUND).map_err(|e| draw_err(&e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(metric.title(), (FONT_FAMILY, TITLE_FONT_SIZE).into_font())
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| draw_err(&e))?;

    chart
        .plotting_area()
        .fill(&PLOT_BACKGROUND)
        .map_err(|e| draw_err(&e))?;

    chart
        .configure_mesh()
        .bold_line_style(GRID_COLOR.stroke_width(1))
        .light_line_style(PLOT_BACKGROUND)
        .axis_style(GRID_COLOR)
        .x_desc(metric.x_label())
        .y_desc(metric.y_label())
        .axis_desc_style((FONT_FAMILY, AXIS_DESC_FONT_SIZE).into_font())
        .label_style((FONT_FAMILY, TICK_FONT_SIZE).into_font())
        .draw()
        .map_err(|e| draw_err(&e))?;

    for s in series {
        let color = s.color;
        chart
            .draw_series(LineSeries::new(
                s.points.iter().copied(),
                color.stroke_width(LINE_WIDTH),
            ))
            .map_err(|e| draw_err(&e))?
            .label(s.label.as_str())
            .legend(move |(x, y)| {
                EmptyElement::at((x, y))
                    + PathElement::new(
                        vec![(0, 0), (LEGEND_SWATCH_WIDTH, 0)],
                        color.stroke_width(LINE_WIDTH),
                    )
                    + Circle::new((LEGEND_SWATCH_WIDTH / 2, 0), MARKER_RADIUS, color.filled())
            });

        chart
            .draw_series(
                s.points
                    .iter()
                    .map(|&p| Circle::new(p, MARKER_RADIUS, color.filled())),
            )
            .map_err(|e| draw_err(&e))?;
    }

    if !series.is_empty() {
        chart
            .configure_series_labels()
            .position(legend_position(metric))
            .background_style(WHITE.mix(0.8))
            .border_style(PLOT_BACKGROUND)
            .label_font((FONT_FAMILY, TICK_FONT_SIZE).into_font())
            .draw()
            .map_err(|e| draw_err(&e))?;
    }

    root.present().map_err(|e| draw_err(&e))?;
    log::info!("wrote {metric} chart to {}", path.display());
    Ok(())
}
