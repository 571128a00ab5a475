use std::ops::Range;

use plotters::style::{RGBColor, WHITE};

// ---------------------------------------------------------------------------
// "darkgrid" look: pale plotting area, white grid, no heavy frame
// ---------------------------------------------------------------------------

pub const FIGURE_BACKGROUND: RGBColor = WHITE;
pub const PLOT_BACKGROUND: RGBColor = RGBColor(0xea, 0xea, 0xf2);
pub const GRID_COLOR: RGBColor = WHITE;

pub const FONT_FAMILY: &str = "sans-serif";
pub const TITLE_FONT_SIZE: u32 = 24;
pub const AXIS_DESC_FONT_SIZE: u32 = 18;
pub const TICK_FONT_SIZE: u32 = 14;

pub const LINE_WIDTH: u32 = 2;
pub const MARKER_RADIUS: u32 = 4;
pub const LEGEND_SWATCH_WIDTH: i32 = 24;

/// Fraction of the data span added on each side of an axis.
const AXIS_MARGIN: f64 = 0.05;

/// Axis range covering `values` with a 5% margin on both ends.
///
/// Non-finite values are ignored. An empty input yields `0..1`; a zero span
/// (one point, or all values equal) is widened around the value so the
/// resulting range is never empty. Returns `None` when the padded range
/// overflows `f64`, since such an axis cannot be laid out.
pub fn padded_range<I>(values: I) -> Option<Range<f64>>
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return Some(0.0..1.0);
    }

    let span = max - min;
    let pad = if span > f64::EPSILON {
        span * AXIS_MARGIN
    } else {
        (min.abs() * AXIS_MARGIN).max(0.5)
    };
    let range = (min - pad)..(max + pad);
    (range.end - range.start).is_finite().then_some(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pads_five_percent_each_side() {
        let r = padded_range([0.0, 100.0, 50.0]);
        assert_eq!(r, Some(-5.0..105.0));
    }

    #[test]
    fn empty_input_has_unit_range() {
        assert_eq!(padded_range(Vec::<f64>::new()), Some(0.0..1.0));
    }

    #[test]
    fn single_point_is_widened() {
        let r = padded_range([100.0]).unwrap();
        assert!(r.start < 100.0 && r.end > 100.0);
        assert_eq!(r, 95.0..105.0);

        let zero = padded_range([0.0, 0.0]);
        assert_eq!(zero, Some(-0.5..0.5));
    }

    #[test]
    fn non_finite_values_are_skipped() {
        let r = padded_range([f64::NAN, 10.0, f64::INFINITY, 20.0]);
        assert_eq!(r, Some(9.5..20.5));
    }

    #[test]
    fn overflowing_span_has_no_range() {
        assert_eq!(padded_range([-1e308, 1e308]), None);
        assert_eq!(padded_range([f64::MAX]), None);
        assert!(padded_range([0.0, 1e300]).is_some());
    }
}
