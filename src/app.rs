use std::path::Path;

use eframe::egui;

use powerlaw_scope::{Analysis, AnalysisError};

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// Window configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct PlotConfig {
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    pub point_radius: f32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            inner_size: [1000.0, 700.0],
            min_inner_size: [480.0, 320.0],
            point_radius: 2.5,
        }
    }
}

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ScatterApp {
    pub state: AppState,
    config: PlotConfig,
}

impl ScatterApp {
    pub fn new(state: AppState, config: PlotConfig) -> Self {
        Self { state, config }
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: file name ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: report ----
        egui::SidePanel::left("report_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &self.state, self.config.point_radius);
        });
    }
}

/// Open the scatter window and block until the user closes it.
pub fn show(path: &Path, analysis: Analysis, config: PlotConfig) -> Result<(), AnalysisError> {
    let state = AppState::from_analysis(path, analysis);
    let title = state.title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size),
        ..Default::default()
    };

    log::debug!("Opening plot window for {}", path.display());
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ScatterApp::new(state, config)))),
    )
    .map_err(|e| AnalysisError::Display(e.to_string()))
}
