use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

const IMAGE_WIDTH: f32 = 250.0;

// ---------------------------------------------------------------------------
// Left side panel – panel selector
// ---------------------------------------------------------------------------

/// Render the left settings panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Settings");
    ui.separator();

    ui.strong("Panels to compare");
    if state.catalog.is_empty() {
        ui.label("No panels in the catalog.");
        return;
    }
    let names: Vec<String> = state.catalog.names().map(str::to_string).collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let mut toggled = None;
            for name in &names {
                let mut checked = state.is_selected(name);
                let text = RichText::new(name).color(state.colors.color_for(name));
                if ui.checkbox(&mut checked, text).changed() {
                    toggled = Some(name.clone());
                }
            }
            // Rerun the pipeline once, after every checkbox is drawn.
            if let Some(name) = toggled {
                state.toggle_panel(&name);
            }

            ui.separator();
            ui.checkbox(&mut state.show_raw, "Show narrow bands");
            ui.label(
                RichText::new(format!("Moving average: {} Hz", state.settings.window))
                    .small()
                    .weak(),
            );
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.refresh();
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(format!("Data: {}", state.data_dir.display()));

        ui.separator();
        ui.label(format!(
            "{} selected, {} curves loaded",
            state.selection.len(),
            state.comparison.curves.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Technical sheets
// ---------------------------------------------------------------------------

/// One column per selected panel: photo and static description.
pub fn panel_sheets(ui: &mut Ui, state: &AppState) {
    ui.heading("Technical sheets");
    ui.add_space(4.0);

    let panels: Vec<_> = state
        .selection
        .iter()
        .filter_map(|name| state.catalog.get(name))
        .collect();
    if panels.is_empty() {
        return;
    }

    ui.columns(panels.len(), |cols: &mut [Ui]| {
        for (ui, panel) in cols.iter_mut().zip(&panels) {
            let image_path = state.data_dir.join(&panel.image);
            if image_path.is_file() {
                ui.add(
                    egui::Image::new(format!("file://{}", image_path.display()))
                        .max_width(IMAGE_WIDTH),
                );
            } else {
                ui.label(RichText::new(format!("({} not found)", panel.image.display())).weak());
            }

            ui.label(
                RichText::new(&panel.name)
                    .strong()
                    .color(state.colors.color_for(&panel.name)),
            );
            ui.label(format!("Model: {}", panel.model));
            ui.label(format!("Thickness: {}", panel.thickness));
            ui.label(format!("Composition: {}", panel.composition));
        }
    });
}

/// One warning line per selected panel without a data file.
pub fn missing_files(ui: &mut Ui, state: &AppState) {
    for missing in &state.comparison.missing {
        ui.label(RichText::new(format!("Warning: {missing}")).color(Color32::from_rgb(220, 120, 0)));
    }
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open data folder")
        .set_directory(&state.data_dir)
        .pick_folder();

    if let Some(dir) = folder {
        state.set_data_dir(dir);
        log::info!(
            "{} panels in catalog, {} curves loaded",
            state.catalog.len(),
            state.comparison.curves.len()
        );
    }
}
