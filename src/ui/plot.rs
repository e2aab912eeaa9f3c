use eframe::egui::Ui;
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::color::SAMPLE_COLOR;
use crate::state::AppState;

pub const X_AXIS_LABEL: &str = "Number of Neighbors (#)";
pub const Y_AXIS_LABEL: &str = "Frequency (#)";

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the sample as a scatter plot: index on x, value on y.
pub fn scatter_plot(ui: &mut Ui, state: &AppState, radius: f32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&state.title);
    });

    Plot::new("scatter_plot")
        .legend(Legend::default())
        .x_axis_label(X_AXIS_LABEL)
        .y_axis_label(Y_AXIS_LABEL)
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let points: PlotPoints = state.points.iter().copied().collect();
            plot_ui.points(
                Points::new(points)
                    .name("sample")
                    .color(SAMPLE_COLOR)
                    .radius(radius),
            );

            if !state.show_markers {
                return;
            }
            for marker in &state.markers {
                let at: PlotPoints = vec![marker.point.as_plot_point()].into();
                plot_ui.points(
                    Points::new(at)
                        .name(format!("{} {}", marker.label, marker.point))
                        .color(marker.color)
                        .shape(MarkerShape::Diamond)
                        .filled(true)
                        .radius(radius * 2.5),
                );
            }
        });
}
