use std::path::Path;

use anyhow::Context as _;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::chart::ChartSpec;
use crate::data::error::DataError;
use crate::state::{AppState, StatusMessage, Tab};
use crate::ui::{plot, table};
use crate::view;

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
                state.reload();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Export chart specs…").clicked() {
                export_chart_specs(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some((loaded, visible)) = state.breed_counts() {
            ui.label(format!("{loaded} breeds loaded, {visible} visible"));
            ui.separator();
        }

        if let Some(status) = &state.status {
            match status {
                StatusMessage::Info(msg) => {
                    ui.label(msg);
                }
                StatusMessage::Warning(msg) => {
                    ui.label(RichText::new(msg).color(Color32::YELLOW));
                }
                StatusMessage::Error(msg) => {
                    ui.label(RichText::new(msg).color(Color32::RED));
                }
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – grooming filter
// ---------------------------------------------------------------------------

/// Render the persistent sidebar. Its selection is session state and
/// survives tab switches.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Filter Options");
    ui.separator();

    if state.breeds.is_err() {
        ui.label("Breeds data unavailable.");
        return;
    }

    ui.strong("Filter Breeds by Grooming Needs");
    let selected_text = state.grooming_selection.label();
    egui::ComboBox::from_id_salt("grooming_filter")
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            let options = state.grooming_options.clone();
            for option in options {
                let is_selected = state.grooming_selection == option;
                if ui.selectable_label(is_selected, option.label()).clicked() {
                    state.grooming_selection = option;
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Central panel – tabbed dashboard
// ---------------------------------------------------------------------------

/// Render the central panel: background, heading, tab bar, active tab.
pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    paint_background(ui, state);

    ui.heading("Guinea Pig Dashboard 🐹");
    ui.add_space(4.0);

    ui.horizontal(|ui: &mut Ui| {
        for tab in Tab::ALL {
            if ui
                .selectable_label(state.active_tab == tab, tab.label())
                .clicked()
            {
                state.active_tab = tab;
            }
        }
    });
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| match state.active_tab {
            Tab::Breeds => breeds_tab(ui, state),
            Tab::Diet => diet_tab(ui, state),
            Tab::Health => health_tab(ui, state),
        });
}

fn paint_background(ui: &mut Ui, state: &AppState) {
    if let Some(path) = &state.background {
        let uri = format!("file://{}", path.display());
        egui::Image::from_uri(uri)
            .tint(Color32::from_white_alpha(40))
            .paint_at(ui, ui.max_rect());
    }
}

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

fn breeds_tab(ui: &mut Ui, state: &AppState) {
    ui.heading("Guinea Pig Breed Data");
    let breeds = match &state.breeds {
        Ok(table) => table,
        Err(e) => {
            tab_error(ui, e);
            return;
        }
    };

    match view::breeds_view(breeds, &state.grooming_selection) {
        Ok(breeds_view) => {
            ui.strong(format!(
                "Available Breeds with '{}' Grooming Needs",
                state.grooming_selection.label()
            ));
            table::data_table(ui, "breeds_table", &breeds_view.table);
            ui.add_space(8.0);
            plot::chart(ui, "breeds_weight_chart", &breeds_view.weight_chart);
            ui.add_space(8.0);
            plot::chart(ui, "breeds_origin_chart", &breeds_view.origin_chart);
        }
        Err(e) => tab_error(ui, &e),
    }
}

fn diet_tab(ui: &mut Ui, state: &AppState) {
    ui.heading("Guinea Pig Diet & Nutrition Data");
    let diet = match &state.diet {
        Ok(table) => table,
        Err(e) => {
            tab_error(ui, e);
            return;
        }
    };

    ui.strong("Nutritional Breakdown of Common Foods");
    table::data_table(ui, "diet_table", diet);
    ui.add_space(8.0);

    match view::diet_view(diet) {
        Ok(diet_view) => {
            ui.strong("Calcium vs. Phosphorus in Diet (Ca:P Ratio)");
            plot::chart(ui, "diet_mineral_chart", &diet_view.mineral_chart);
        }
        Err(e) => tab_error(ui, &e),
    }
}

fn health_tab(ui: &mut Ui, state: &AppState) {
    ui.heading("Breed Health Disorder Risk Data");
    let health = match &state.health {
        Ok(table) => table,
        Err(e) => {
            tab_error(ui, e);
            return;
        }
    };

    table::data_table(ui, "health_table", health);
    ui.add_space(8.0);

    match view::health_view(health) {
        Ok(health_view) => {
            ui.strong("Comparison of Health Risks by Breed (Index 1-5)");
            plot::chart(ui, "health_risk_chart", &health_view.risk_chart);
        }
        Err(e) => tab_error(ui, &e),
    }
}

/// A failed dataset halts its own tab only.
fn tab_error(ui: &mut Ui, error: &DataError) {
    ui.label(RichText::new(format!("Error: {error}")).color(Color32::RED));
}

// ---------------------------------------------------------------------------
// Dialogs and export
// ---------------------------------------------------------------------------

fn open_folder_dialog(state: &mut AppState) {
    if let Some(dir) = rfd::FileDialog::new()
        .set_title("Open data folder")
        .pick_folder()
    {
        state.set_data_dir(dir);
    }
}

fn export_chart_specs(state: &mut AppState) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Export chart specs")
        .set_file_name("chart_specs.json")
        .add_filter("JSON", &["json"])
        .save_file()
    else {
        return;
    };

    match write_chart_specs(state, &path) {
        Ok(count) => {
            log::info!("exported {count} chart specs to {}", path.display());
            state.status = Some(StatusMessage::Info(format!(
                "Exported {count} chart specs"
            )));
        }
        Err(e) => {
            log::error!("chart spec export failed: {e:#}");
            state.status = Some(StatusMessage::Error(format!("Export failed: {e:#}")));
        }
    }
}

/// Serialize the current views' specs from every loadable tab.
fn write_chart_specs(state: &AppState, path: &Path) -> anyhow::Result<usize> {
    let mut specs: Vec<ChartSpec> = Vec::new();
    if let Ok(breeds) = &state.breeds {
        let breeds_view = view::breeds_view(breeds, &state.grooming_selection)?;
        specs.push(breeds_view.weight_chart);
        specs.push(breeds_view.origin_chart);
    }
    if let Ok(diet) = &state.diet {
        specs.push(view::diet_view(diet)?.mineral_chart);
    }
    if let Ok(health) = &state.health {
        specs.push(view::health_view(health)?.risk_chart);
    }

    let json = serde_json::to_string_pretty(&specs).context("serializing chart specs")?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(specs.len())
}
