use eframe::egui::{self, Grid, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – report
// ---------------------------------------------------------------------------

/// Render the statistics that were printed to stdout, plus the fit itself.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Power-law fit");
    ui.separator();

    let fit = &state.fit;
    Grid::new("fit_grid").num_columns(2).striped(true).show(ui, |ui: &mut Ui| {
        ui.label("KS distance");
        ui.label(format!("{:.4}", fit.ks_distance));
        ui.end_row();
        ui.label("alpha");
        ui.label(format!("{:.4} ± {:.4}", fit.alpha, fit.sigma));
        ui.end_row();
        ui.label("xmin");
        ui.label(format!("{}", fit.xmin));
        ui.end_row();
        ui.label("tail size");
        ui.label(fit.n_tail.to_string());
        ui.end_row();
    });

    ui.add_space(8.0);
    ui.heading("Sample");
    ui.separator();

    let s = &state.report.summary;
    Grid::new("summary_grid").num_columns(2).striped(true).show(ui, |ui: &mut Ui| {
        ui.label("Mean");
        ui.label(format!("{:.4}", s.mean));
        ui.end_row();
        ui.label("Median");
        ui.label(format!("{:.4}", s.median));
        ui.end_row();
        ui.label("Std. deviation");
        ui.label(format!("{:.4}", s.std_dev));
        ui.end_row();
        for marker in &state.markers {
            ui.label(RichText::new(marker.label).color(marker.color).strong());
            ui.label(marker.point.to_string());
            ui.end_row();
        }
    });

    ui.add_space(8.0);
    ui.checkbox(&mut state.show_markers, "Highlight extremes");
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(&state.title);
        ui.separator();
        ui.label(format!("{} values", state.points.len()));
    });
}
