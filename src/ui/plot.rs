use std::f64::consts::TAU;

use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points, Polygon};

use crate::data::filter::SiteSelection;
use crate::data::summary::{PieSummary, pie_summary, scatter_points};
use crate::state::AppState;

const SUCCESS_COLOR: Color32 = Color32::from_rgb(0x2e, 0xa0, 0x4e);
const FAILURE_COLOR: Color32 = Color32::from_rgb(0xc8, 0x3c, 0x3c);

// ---------------------------------------------------------------------------
// Pie chart – launch outcomes
// ---------------------------------------------------------------------------

/// Render the outcome pie chart.  An empty filter result (or zero successes
/// in the all-sites view) shows a placeholder instead of a chart.
pub fn success_pie(ui: &mut Ui, state: &AppState, height: f32) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a launch records file to begin  (File → Open…)");
            });
            return;
        }
    };

    let summary = pie_summary(dataset, &state.site_selection, &state.visible_indices);

    let Some(summary) = summary else {
        let message = match state.site_selection {
            SiteSelection::All => "No successful launches available",
            SiteSelection::Site(_) => "No launches match the current selection",
        };
        ui.strong(message);
        ui.add_space(height - 20.0);
        return;
    };

    ui.strong(summary.title());

    let slices = summary.slices();
    let total: usize = slices.iter().map(|(_, n)| n).sum();

    Plot::new("success_pie")
        .height(height - 20.0)
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            // Slices start at 12 o'clock and run clockwise.
            let mut angle = TAU / 4.0;
            for (label, count) in &slices {
                let fraction = *count as f64 / total as f64;
                let sweep = fraction * TAU;
                let color = slice_color(state, &summary, label);

                let polygon = Polygon::new(pie_slice_points(angle, sweep))
                    .fill_color(color)
                    .name(format!("{label} ({count})"));
                plot_ui.polygon(polygon);

                angle -= sweep;
            }
        });
}

/// Vertex fan for one pie slice on the unit circle, starting at `angle`
/// (radians) and sweeping `sweep` radians clockwise.
fn pie_slice_points(angle: f64, sweep: f64) -> PlotPoints<'static> {
    // Enough arc segments that even thin slices stay round.
    let segments = ((sweep / TAU) * 96.0).ceil().max(2.0) as usize;

    let mut points = Vec::with_capacity(segments + 2);
    points.push([0.0, 0.0]);
    for i in 0..=segments {
        let a = angle - sweep * (i as f64 / segments as f64);
        points.push([a.cos(), a.sin()]);
    }
    PlotPoints::new(points)
}

fn slice_color(state: &AppState, summary: &PieSummary, label: &str) -> Color32 {
    match summary {
        PieSummary::SuccessesBySite(_) => state.site_colors.color_for(label),
        PieSummary::SiteOutcomes { .. } => {
            if label == "Success" {
                SUCCESS_COLOR
            } else {
                FAILURE_COLOR
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Scatter chart – payload vs outcome
// ---------------------------------------------------------------------------

/// Render the payload/outcome scatter chart, one point per matching record,
/// coloured by booster version category.
pub fn payload_scatter(ui: &mut Ui, state: &AppState, height: f32) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => return,
    };

    let points = scatter_points(dataset, &state.visible_indices);
    if points.is_empty() {
        ui.strong("No launches match the current selection");
        return;
    }

    let title = match &state.site_selection {
        SiteSelection::All => "Payload vs. Outcome for All Sites".to_string(),
        SiteSelection::Site(site) => format!("Payload vs. Outcome for {site}"),
    };
    ui.strong(title);

    Plot::new("payload_scatter")
        .height(height - 20.0)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Outcome (1 = success)")
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One series per booster category so the legend stays usable.
            for category in &dataset.booster_categories {
                let series: Vec<[f64; 2]> = points
                    .iter()
                    .filter(|p| p.booster_category == *category)
                    .map(|p| [p.payload_mass, p.outcome.as_f64()])
                    .collect();
                if series.is_empty() {
                    continue;
                }

                let markers = Points::new(PlotPoints::new(series))
                    .name(category)
                    .color(state.booster_colors.color_for(category))
                    .shape(MarkerShape::Circle)
                    .radius(4.0);
                plot_ui.points(markers);
            }
        });
}
