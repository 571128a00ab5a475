use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// The qualitative "tab10" palette. The first four entries are the colours
/// historically used for the four load-generator workloads.
pub const TAB10: [RGBColor; 10] = [
    RGBColor(0x1f, 0x77, 0xb4), // blue
    RGBColor(0xff, 0x7f, 0x0e), // orange
    RGBColor(0x2c, 0xa0, 0x2c), // green
    RGBColor(0xd6, 0x27, 0x28), // red
    RGBColor(0x94, 0x67, 0xbd), // purple
    RGBColor(0x8c, 0x56, 0x4b), // brown
    RGBColor(0xe3, 0x77, 0xc2), // pink
    RGBColor(0x7f, 0x7f, 0x7f), // grey
    RGBColor(0xbc, 0xbd, 0x22), // olive
    RGBColor(0x17, 0xbe, 0xcf), // cyan
];

const FALLBACK_COLOR: RGBColor = RGBColor(0x80, 0x80, 0x80);

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<RGBColor> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            RGBColor(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Palette with exactly `n` distinct entries: a prefix of [`TAB10`] while it
/// lasts, evenly spaced hues beyond that.
pub fn palette_for(n: usize) -> Vec<RGBColor> {
    if n <= TAB10.len() {
        TAB10[..n].to_vec()
    } else {
        log::warn!(
            "{n} workloads exceed the {}-colour qualitative palette, using generated hues",
            TAB10.len()
        );
        generate_palette(n)
    }
}

// ---------------------------------------------------------------------------
// Color mapping: workload → RGBColor
// ---------------------------------------------------------------------------

/// Assigns each workload a colour, shared by every chart of a run so the
/// same workload looks the same everywhere.
#[derive(Debug, Clone)]
pub struct ColorMap {
    entries: Vec<(String, RGBColor)>,
    default_color: RGBColor,
}

impl ColorMap {
    /// Build a colour map from workload labels in legend order.
    pub fn new<S: AsRef<str>>(workloads: &[S]) -> Self {
        let entries = workloads
            .iter()
            .zip(palette_for(workloads.len()))
            .map(|(w, c)| (w.as_ref().to_string(), c))
            .collect();

        ColorMap {
            entries,
            default_color: FALLBACK_COLOR,
        }
    }

    /// Look up the colour for a workload.
    pub fn color_for(&self, workload: &str) -> RGBColor {
        self.entries
            .iter()
            .find(|(w, _)| w == workload)
            .map(|(_, c)| *c)
            .unwrap_or(self.default_color)
    }
}
