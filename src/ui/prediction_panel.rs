//! Live box-office prediction chart
//!
//! Line+markers over the full rolling history, with a title that always
//! names the selection and its most recent value.

use crate::app::Marquee;
use crate::ui::palette_color;
use chrono::{DateTime, Utc};
use eframe::egui;
use egui_plot::{Legend, Line, Plot, Points};

/// Chart title: always embeds the selected title and the latest value
pub fn prediction_title(title: &str, latest: f64) -> String {
    format!("Live box office for \"{}\" is {:.1}$", title, latest)
}

/// Render the live prediction panel (chart area)
pub fn render_prediction_panel(app: &mut Marquee, ui: &mut egui::Ui) {
    profiling::scope!("render_prediction_panel");

    ui.heading("Box office prediction");
    match app.state.history.latest() {
        Some(latest) => {
            ui.label(prediction_title(&app.state.selected, latest.value));
        }
        None => {
            ui.label("Waiting for the first sample...");
        }
    }
    ui.separator();

    let points = app.state.history.points();

    let mut plot = Plot::new("prediction")
        .show_grid(app.state.view.show_grid)
        .height(ui.available_height().max(160.0))
        .x_axis_formatter(|mark, _range| {
            let secs = mark.value.floor() as i64;
            if let Some(dt) = DateTime::<Utc>::from_timestamp(secs, 0) {
                dt.format("%H:%M:%S").to_string()
            } else {
                format!("{:.0}", mark.value)
            }
        })
        .label_formatter(|name, value| {
            let secs = value.x.floor() as i64;
            let when = DateTime::<Utc>::from_timestamp(secs, 0)
                .map(|dt| dt.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| format!("{:.0}", value.x));
            if name.is_empty() {
                format!("{}\n{:.1}$", when, value.y)
            } else {
                format!("{}\n{}\n{:.1}$", name, when, value.y)
            }
        });

    if app.state.view.reset_bounds {
        plot = plot.reset();
        app.state.view.reset_bounds = false;
    }

    if app.state.view.show_legend {
        plot = plot.legend(Legend::default().position(egui_plot::Corner::RightTop));
    }

    plot.show(ui, |plot_ui| {
        plot_ui.line(
            Line::new("prediction", points.clone())
                .color(palette_color(0))
                .width(1.5),
        );
        plot_ui.points(
            Points::new("prediction", points)
                .radius(3.0)
                .color(palette_color(0)),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_embeds_name_and_value() {
        let title = prediction_title("Inception", 0.7);
        assert!(title.contains("Inception"));
        assert!(title.contains("0.7$"));
    }

    #[test]
    fn test_title_rounds_to_one_decimal() {
        assert_eq!(
            prediction_title("Heat", -1.25),
            "Live box office for \"Heat\" is -1.2$"
        );
    }
}
