use std::path::Path;

use eframe::egui::Color32;

use powerlaw_scope::analysis::fit::PowerLawFit;
use powerlaw_scope::analysis::report::Report;
use powerlaw_scope::data::model::Point;
use powerlaw_scope::Analysis;

use crate::color::generate_palette;

// ---------------------------------------------------------------------------
// Highlighted points
// ---------------------------------------------------------------------------

/// One of the reported extreme or boundary points, drawn on top of the
/// sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub label: &'static str,
    pub point: Point,
    pub color: Color32,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Plot title, names the analysed file.
    pub title: String,

    /// `[index, value]` for every entry of the sample, in file order.
    pub points: Vec<[f64; 2]>,

    /// y-max, x-max, y-min and x-min points.
    pub markers: Vec<Marker>,

    pub report: Report,

    pub fit: PowerLawFit,

    /// Whether the markers are drawn.
    pub show_markers: bool,
}

impl AppState {
    pub fn from_analysis(path: &Path, analysis: Analysis) -> Self {
        let points = analysis
            .sample
            .points()
            .map(|p| p.as_plot_point())
            .collect();

        let s = &analysis.report.summary;
        let labelled = [
            ("y-max", s.y_max),
            ("x-max", s.x_max),
            ("y-min", s.y_min),
            ("x-min", s.x_min),
        ];
        let markers = labelled
            .into_iter()
            .zip(generate_palette(labelled.len()))
            .map(|((label, point), color)| Marker { label, point, color })
            .collect();

        Self {
            title: format!("Scatter Plot of {}", path.display()),
            points,
            markers,
            report: analysis.report,
            fit: analysis.fit,
            show_markers: true,
        }
    }
}
