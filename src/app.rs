use eframe::egui::{self, ScrollArea, Ui};

use tl_compare::config::Settings;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TlCompareApp {
    pub state: AppState,
}

impl TlCompareApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: AppState::new(settings),
        }
    }
}

impl eframe::App for TlCompareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: panel selector ----
        egui::SidePanel::left("settings_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: sheets and plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Interactive acoustic comparison");

            if self.state.selection.is_empty() {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.label("Select panels in the side panel to display their data.");
                });
                return;
            }

            ScrollArea::vertical().show(ui, |ui: &mut Ui| {
                panels::panel_sheets(ui, &self.state);
                ui.separator();
                plot::tl_plot(ui, &self.state);
                panels::missing_files(ui, &self.state);
            });
        });
    }
}
