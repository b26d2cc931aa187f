use std::path::Path;

use anyhow::Context;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::loader::load_file;
use crate::data::model::SeriesKind;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – series toggles
// ---------------------------------------------------------------------------

/// Render the left series panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Series");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for kind in SeriesKind::ALL {
                let text = RichText::new(kind.name()).color(state.colors.color_for(kind));
                let mut checked = state.is_visible(kind);
                if ui.checkbox(&mut checked, text).changed() {
                    state.set_visible(kind, checked);
                }

                // Min / max under each toggle
                let summary = match state.dataset.range(kind) {
                    Some((lo, hi)) => format!("min {lo:.3}   max {hi:.3}"),
                    None => "no samples".to_string(),
                };
                ui.label(RichText::new(summary).small().weak());
                ui.add_space(4.0);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let source = state.source();
            if ui
                .add_enabled(source.is_some(), egui::Button::new("Reload"))
                .clicked()
            {
                if let Some(path) = source {
                    load_into_state(state, &path);
                }
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} samples from {} lines",
            state.dataset.len(),
            state.dataset.lines_scanned
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File loading from the UI
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    if let Some(path) = trace_file_dialog(state.dialog_start_dir().as_deref()).pick_file() {
        load_into_state(state, &path);
    }
}

/// Unfiltered: trace captures such as `tmp` usually have no extension.
fn trace_file_dialog(start_dir: Option<&Path>) -> rfd::FileDialog {
    let dialog = rfd::FileDialog::new().set_title("Open trace log");
    match start_dir {
        Some(dir) => dialog.set_directory(dir),
        None => dialog,
    }
}

/// Load `path` and swap it in; on failure keep the current trace and show
/// the error instead of exiting.
fn load_into_state(state: &mut AppState, path: &Path) {
    match load_file(path).with_context(|| format!("loading {}", path.display())) {
        Ok(dataset) => state.set_dataset(dataset),
        Err(e) => state.set_error(&e),
    }
}
