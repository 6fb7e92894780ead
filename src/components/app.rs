use crate::canvas::layout::{build_dashboard, Dashboard};
use crate::components::panel::show_panel;
use crate::components::summary::show_summary;
use wavelab_core::Analysis;

/// Maximum plot points per time-domain trace.
const MAX_TRACE_POINTS: usize = 1200;

pub struct DashboardApp {
    analysis: Analysis,
    dashboard: Dashboard,
    show_summary: bool,
}

impl DashboardApp {
    pub fn new(analysis: Analysis) -> Self {
        let dashboard = build_dashboard(&analysis, MAX_TRACE_POINTS);
        log::debug!("dashboard laid out with {} panels", dashboard.panel_count());
        Self {
            analysis,
            dashboard,
            show_summary: true,
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&self.dashboard.title);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.checkbox(&mut self.show_summary, "Summary");
                });
            });
        });

        if self.show_summary {
            egui::SidePanel::right("summary")
                .resizable(true)
                .default_width(260.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| show_summary(ui, &self.analysis));
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            // Four rows of plots, each with a title line above it.
            let row_height = (ui.available_height() / 4.0 - 28.0).max(80.0);

            for row in &self.dashboard.grid {
                ui.columns(row.len(), |columns| {
                    for (col, panel) in columns.iter_mut().zip(row) {
                        show_panel(col, panel, row_height);
                    }
                });
            }
            show_panel(ui, &self.dashboard.spectrum, row_height);
        });
    }
}

/// Open the dashboard window and block until it is closed.
pub fn run(analysis: Analysis) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1600.0, 1200.0])
            .with_min_inner_size([900.0, 700.0])
            .with_title("wavelab - Signal Visualization and Analysis"),
        ..Default::default()
    };

    eframe::run_native(
        "wavelab",
        native_options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(analysis)))),
    )
}
