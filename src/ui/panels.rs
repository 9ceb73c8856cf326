use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::data::filter::SiteSelection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – dashboard controls
// ---------------------------------------------------------------------------

/// Render the left control panel: site dropdown + payload range sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Launch Filters");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone what we need so we can mutate state inside the widgets.
    let sites = dataset.sites.clone();
    let (slider_min, slider_max) = state.slider_bounds;

    // ---- Site dropdown ----
    ui.strong("Launch Site");
    let current = state.site_selection.clone();
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(current.label())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == SiteSelection::All, "All Sites")
                .clicked()
            {
                state.set_site(SiteSelection::All);
            }
            for site in &sites {
                let selected = current == SiteSelection::Site(site.clone());
                if ui.selectable_label(selected, site).clicked() {
                    state.set_site(SiteSelection::Site(site.clone()));
                }
            }
        });
    ui.separator();

    // ---- Payload range sliders ----
    ui.strong("Payload range (kg)");

    let mut lo = state.payload_range.lo;
    if ui
        .add(Slider::new(&mut lo, slider_min..=slider_max).text("Min"))
        .changed()
    {
        state.set_payload_lo(lo);
    }

    let mut hi = state.payload_range.hi;
    if ui
        .add(Slider::new(&mut hi, slider_min..=slider_max).text("Max"))
        .changed()
    {
        state.set_payload_hi(hi);
    }

    ui.add_space(4.0);
    ui.label(format!(
        "{:.0} – {:.0} kg",
        state.payload_range.lo, state.payload_range.hi
    ));
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
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} launches loaded, {} matching",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if state.loading {
            ui.separator();
            ui.label("Loading…");
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launch records from {} sites",
                    dataset.len(),
                    dataset.sites.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
