use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::data::export;
use crate::data::model::Side;
use crate::data::pipeline::SortDirection;
use crate::state::{AppState, CHART_HEIGHT_MAX, CHART_HEIGHT_MIN};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open Left CSV…").clicked() {
                open_file_dialog(state, Side::Left);
                ui.close_menu();
            }
            if ui.button("Open Right CSV…").clicked() {
                open_file_dialog(state, Side::Right);
                ui.close_menu();
            }
            ui.separator();
            let can_export = state.analysis.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Download Summary CSV…"))
                .clicked()
            {
                save_summary_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        let left_rows = state.left.as_ref().map_or(0, |d| d.len());
        let right_rows = state.right.as_ref().map_or(0, |d| d.len());
        ui.label(format!("{left_rows} left rows, {right_rows} right rows"));

        if let Some(analysis) = &state.analysis {
            ui.separator();
            ui.label(format!("{} angles", analysis.traces.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – display configuration
// ---------------------------------------------------------------------------

/// Render the left configuration panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Display");
    ui.separator();

    ui.strong("Angle order");
    let mut direction = state.sort_direction;
    ui.radio_value(&mut direction, SortDirection::Ascending, "Ascending");
    ui.radio_value(&mut direction, SortDirection::Descending, "Descending");
    state.set_sort_direction(direction);

    ui.add_space(8.0);
    ui.strong("Chart height");
    ui.add(
        Slider::new(&mut state.chart_height, CHART_HEIGHT_MIN..=CHART_HEIGHT_MAX)
            .suffix(" px"),
    );

    ui.separator();

    let Some(analysis) = &state.analysis else {
        ui.label("Load both CSV files to see the analysis.");
        return;
    };

    ui.strong("Angles");
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for trace in &analysis.traces {
                let n_left = trace.samples.iter().filter(|s| s.left.is_some()).count();
                let n_right = trace.samples.iter().filter(|s| s.right.is_some()).count();
                let color = state.palette.color_for(&trace.angle);
                ui.label(
                    RichText::new(format!(
                        "{}  ({n_left} left / {n_right} right)",
                        trace.angle
                    ))
                    .color(color),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState, side: Side) {
    let file = rfd::FileDialog::new()
        .set_title(format!("Open {side} plate CSV"))
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_side(side, &path);
    }
}

pub fn save_summary_dialog(state: &mut AppState) {
    let Some(analysis) = &state.analysis else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Save summary CSV")
        .set_file_name("summary.csv")
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        match export::write_summary(&path, &analysis.summary) {
            Ok(()) => {
                log::info!("Wrote summary to {}", path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to write summary: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
