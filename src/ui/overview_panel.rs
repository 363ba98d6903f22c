//! Catalog overview bar chart
//!
//! Value counts of one catalog column. When the chosen attribute is the
//! title column, clicking a bar selects that movie, mirroring the hint
//! next to the dropdown.

use crate::app::Marquee;
use crate::constants::catalog::TITLE_COLUMN;
use crate::constants::layout::{OVERVIEW_CHART_HEIGHT, OVERVIEW_MAX_BARS};
use crate::ui::palette_color;
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

/// Render the value-counts bar chart for the selected catalog attribute
pub fn render_overview_panel(app: &mut Marquee, ui: &mut egui::Ui) {
    profiling::scope!("render_overview_panel");

    let columns = app.state.catalog.column_names();
    let mut attribute = app
        .state
        .view
        .overview_attribute
        .clone()
        .unwrap_or_else(|| TITLE_COLUMN.to_string());

    egui::ComboBox::from_id_salt("overview-attr")
        .selected_text(attribute.clone())
        .show_ui(ui, |ui| {
            for column in &columns {
                ui.selectable_value(&mut attribute, column.clone(), column);
            }
        });
    app.state.view.overview_attribute = Some(attribute.clone());

    let mut counts = match app.state.catalog.value_counts(&attribute) {
        Ok(counts) => counts,
        Err(e) => {
            app.state.ui.set_error(format!("{}: {}", e.title(), e.user_message()));
            return;
        }
    };
    counts.truncate(OVERVIEW_MAX_BARS);

    let labels: Vec<String> = counts.iter().map(|(value, _)| value.clone()).collect();
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, (_, count))| {
            Bar::new(i as f64, *count as f64)
                .width(0.7)
                .fill(palette_color(0))
        })
        .collect();

    let axis_labels = labels.clone();
    let response = Plot::new("overview")
        .height(OVERVIEW_CHART_HEIGHT)
        .show_grid(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            let nearest = mark.value.round();
            if (mark.value - nearest).abs() < 0.05
                && nearest >= 0.0
                && (nearest as usize) < axis_labels.len()
            {
                axis_labels[nearest as usize].clone()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("count", bars));
            plot_ui.pointer_coordinate()
        });

    // Bar click selects the movie when the attribute is the title column
    if attribute == TITLE_COLUMN && response.response.clicked() {
        if let Some(coord) = response.inner {
            let index = coord.x.round();
            if index >= 0.0 && (index as usize) < labels.len() {
                let title = labels[index as usize].clone();
                if title != app.state.selected {
                    app.state.selected = title;
                    app.handle_selection_changed();
                }
            }
        }
    }
}
