//! Word frequency bar chart
//!
//! Horizontal bars over the top words of the current corpus, reversed so
//! the most frequent word renders at the top.

use crate::app::Marquee;
use crate::text::PlacedWord;
use crate::ui::palette_color;
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

/// Bar rows in draw order: the top slice reversed, so the most frequent
/// word gets the highest y position and renders first.
pub fn bar_rows(top: &[PlacedWord]) -> Vec<(String, u32)> {
    top.iter()
        .rev()
        .map(|w| (w.word.clone(), w.count))
        .collect()
}

/// Render the frequency bar panel
pub fn render_frequency_panel(app: &mut Marquee, ui: &mut egui::Ui) {
    profiling::scope!("render_frequency_panel");

    ui.heading("Most frequent words in comments");
    ui.separator();

    let Some(layout) = app.state.words.as_ref() else {
        ui.label("No comment data for this movie");
        return;
    };
    if layout.is_empty() {
        ui.label("No comment data for this movie");
        return;
    }

    let rows = bar_rows(layout.top_words());
    let labels: Vec<String> = rows.iter().map(|(word, _)| word.clone()).collect();

    let bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .map(|(i, (_, count))| {
            Bar::new(i as f64, *count as f64)
                .width(0.6)
                .fill(palette_color(0))
        })
        .collect();

    Plot::new("word-frequency")
        .height(ui.available_height().max(120.0))
        .show_grid(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .y_axis_formatter(move |mark, _range| {
            let nearest = mark.value.round();
            if (mark.value - nearest).abs() < 0.05
                && nearest >= 0.0
                && (nearest as usize) < labels.len()
            {
                labels[nearest as usize].clone()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("count", bars).horizontal());
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::frequency::count_words;
    use crate::text::layout::layout_words;

    #[test]
    fn test_bar_rows_reverse_frequency_order() {
        let counts = count_words("heist heist heist crew crew pacing");
        let layout = layout_words(&counts);
        let rows = bar_rows(layout.top_words());

        // Reversed: least frequent first, most frequent last (top of chart)
        assert_eq!(rows.last().map(|(w, _)| w.as_str()), Some("heist"));
        assert_eq!(rows.last().map(|(_, c)| *c), Some(3));
        for pair in rows.windows(2) {
            assert!(pair[0].1 <= pair[1].1);
        }
    }

    #[test]
    fn test_bar_rows_empty_for_empty_layout() {
        assert!(bar_rows(&[]).is_empty());
    }
}
