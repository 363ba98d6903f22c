//! Word cloud view
//!
//! Text markers at the layout's computed positions, sized by relative
//! frequency and colored from the shared palette.

use crate::app::Marquee;
use crate::constants::words::{CANVAS_HEIGHT, CANVAS_WIDTH, FONT_SCALE};
use crate::ui::palette_color;
use eframe::egui;
use egui_plot::{Plot, PlotPoint, Points, Text};

/// Smallest on-screen text size still worth drawing
const MIN_DRAW_SIZE: f32 = 8.0;

/// Render the word cloud panel
pub fn render_wordcloud_panel(app: &mut Marquee, ui: &mut egui::Ui) {
    profiling::scope!("render_wordcloud_panel");

    let Some(layout) = app.state.words.as_ref() else {
        ui.centered_and_justified(|ui| {
            ui.label("No comment data for this movie");
        });
        return;
    };
    if layout.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No comment data for this movie");
        });
        return;
    }

    Plot::new("wordcloud")
        .height(ui.available_height().max(120.0))
        .show_grid(false)
        .show_axes([false, false])
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            // Invisible corner markers pin the view to the layout canvas
            plot_ui.points(
                Points::new(
                    "",
                    vec![[0.0, 0.0], [CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64]],
                )
                .radius(0.0),
            );

            for word in &layout.words {
                let size = (word.relative as f32 * FONT_SCALE).max(MIN_DRAW_SIZE);
                let rich = egui::RichText::new(&word.word)
                    .size(size)
                    .color(palette_color(word.color_index));
                plot_ui.text(Text::new(
                    format!("{} - {}", word.word, word.count),
                    PlotPoint::new(word.x as f64, word.y as f64),
                    rich,
                ));
            }
        });
}
