//! Treemap view
//!
//! Squarified treemap (Bruls et al. layout) over the same top-word slice
//! as the frequency bars, drawn directly with the painter.

use crate::app::Marquee;
use crate::text::PlacedWord;
use crate::ui::palette_color;
use eframe::egui::{self, Align2, Color32, CornerRadius, FontId, Pos2, Rect, Stroke, StrokeKind};

/// (word, weight) rows feeding the treemap, in frequency order.
/// Must reference exactly the same words and counts as the bar chart.
pub fn treemap_rows(top: &[PlacedWord]) -> Vec<(String, f64)> {
    top.iter().map(|w| (w.word.clone(), w.count as f64)).collect()
}

/// Worst aspect ratio in a row of areas laid against a side of length `w`
fn worst(row: &[f64], w: f64) -> f64 {
    if row.is_empty() {
        return f64::INFINITY;
    }
    let s: f64 = row.iter().sum();
    if s <= 0.0 {
        return f64::INFINITY;
    }
    let max = row.iter().cloned().fold(f64::MIN, f64::max);
    let min = row.iter().cloned().fold(f64::MAX, f64::min);
    let w2 = w * w;
    let s2 = s * s;
    (w2 * max / s2).max(s2 / (w2 * min))
}

/// Lay one finished row along the shorter side of `remaining`, pushing a
/// tile per area and returning the leftover rect.
fn layout_row(row: &[f64], remaining: Rect, out: &mut Vec<Rect>) -> Rect {
    let s: f64 = row.iter().sum();
    if s <= 0.0 {
        return remaining;
    }

    if remaining.width() >= remaining.height() {
        // Vertical strip against the left edge
        let thickness = (s / remaining.height() as f64) as f32;
        let mut y = remaining.top();
        for &area in row {
            let h = (area / thickness as f64) as f32;
            out.push(Rect::from_min_size(
                Pos2::new(remaining.left(), y),
                egui::vec2(thickness, h),
            ));
            y += h;
        }
        Rect::from_min_max(
            Pos2::new(remaining.left() + thickness, remaining.top()),
            remaining.max,
        )
    } else {
        // Horizontal strip against the top edge
        let thickness = (s / remaining.width() as f64) as f32;
        let mut x = remaining.left();
        for &area in row {
            let w = (area / thickness as f64) as f32;
            out.push(Rect::from_min_size(
                Pos2::new(x, remaining.top()),
                egui::vec2(w, thickness),
            ));
            x += w;
        }
        Rect::from_min_max(
            Pos2::new(remaining.left(), remaining.top() + thickness),
            remaining.max,
        )
    }
}

/// Squarified treemap: one tile per value, partitioning `rect`.
/// Values are expected positive and sorted descending (the top-word slice
/// already is).
pub fn squarify(values: &[f64], rect: Rect) -> Vec<Rect> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 || rect.width() <= 0.0 || rect.height() <= 0.0 {
        return Vec::new();
    }

    let scale = rect.width() as f64 * rect.height() as f64 / total;
    let areas: Vec<f64> = values.iter().map(|v| v * scale).collect();

    let mut tiles = Vec::with_capacity(areas.len());
    let mut remaining = rect;
    let mut row: Vec<f64> = Vec::new();

    let mut i = 0;
    while i < areas.len() {
        let side = remaining.width().min(remaining.height()) as f64;
        let mut extended = row.clone();
        extended.push(areas[i]);

        if row.is_empty() || worst(&extended, side) <= worst(&row, side) {
            row = extended;
            i += 1;
        } else {
            remaining = layout_row(&row, remaining, &mut tiles);
            row.clear();
        }
    }
    if !row.is_empty() {
        layout_row(&row, remaining, &mut tiles);
    }

    tiles
}

/// Render the treemap panel
pub fn render_treemap_panel(app: &mut Marquee, ui: &mut egui::Ui) {
    profiling::scope!("render_treemap_panel");

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

    let rows = treemap_rows(layout.top_words());
    let top = layout.top_words();

    let size = egui::vec2(
        ui.available_width(),
        ui.available_height().max(120.0),
    );
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;

    let values: Vec<f64> = rows.iter().map(|(_, v)| *v).collect();
    let tiles = squarify(&values, rect);

    let background = ui.visuals().extreme_bg_color;
    for (word, tile) in top.iter().zip(&tiles) {
        let fill = palette_color(word.color_index).linear_multiply(0.8);
        painter.rect_filled(*tile, CornerRadius::ZERO, fill);
        painter.rect_stroke(
            *tile,
            CornerRadius::ZERO,
            Stroke::new(1.0, background),
            StrokeKind::Inside,
        );

        // Label only when the tile has room for it
        if tile.width() > 42.0 && tile.height() > 26.0 {
            painter.text(
                tile.center(),
                Align2::CENTER_CENTER,
                format!("{}\n{}", word.word, word.count),
                FontId::proportional(12.0),
                Color32::WHITE,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::frequency::count_words;
    use crate::text::layout::layout_words;
    use crate::ui::frequency_panel::bar_rows;

    fn target() -> Rect {
        Rect::from_min_size(Pos2::new(10.0, 20.0), egui::vec2(300.0, 200.0))
    }

    #[test]
    fn test_one_tile_per_value() {
        let tiles = squarify(&[6.0, 4.0, 3.0, 2.0, 1.0], target());
        assert_eq!(tiles.len(), 5);
    }

    #[test]
    fn test_tiles_partition_the_rect() {
        let rect = target();
        let tiles = squarify(&[10.0, 7.0, 5.0, 3.0, 2.0, 1.0], rect);

        let total_area: f32 = tiles.iter().map(|t| t.width() * t.height()).sum();
        let rect_area = rect.width() * rect.height();
        assert!((total_area - rect_area).abs() / rect_area < 1e-3);

        let grown = rect.expand(0.01);
        for tile in &tiles {
            assert!(grown.contains_rect(*tile), "tile {:?} escapes {:?}", tile, rect);
        }
    }

    #[test]
    fn test_tiles_do_not_overlap() {
        let tiles = squarify(&[9.0, 8.0, 5.0, 4.0, 2.0, 2.0, 1.0], target());
        for i in 0..tiles.len() {
            for j in (i + 1)..tiles.len() {
                let a = tiles[i].shrink(0.01);
                let b = tiles[j].shrink(0.01);
                assert!(!a.intersects(b), "tiles {} and {} overlap", i, j);
            }
        }
    }

    #[test]
    fn test_zero_total_gives_no_tiles() {
        assert!(squarify(&[], target()).is_empty());
        assert!(squarify(&[0.0, 0.0], target()).is_empty());
    }

    #[test]
    fn test_treemap_and_bars_reference_identical_words_and_counts() {
        let counts = count_words(
            "heist heist heist crew crew pacing tense tense score score score night",
        );
        let layout = layout_words(&counts);

        let bars = bar_rows(layout.top_words());
        let tree = treemap_rows(layout.top_words());

        assert_eq!(bars.len(), tree.len());
        // Same word set and same counts, bar rows just reversed for display
        let mut bars_sorted: Vec<(String, f64)> =
            bars.into_iter().map(|(w, c)| (w, c as f64)).collect();
        bars_sorted.sort_by(|a, b| a.0.cmp(&b.0));
        let mut tree_sorted = tree.clone();
        tree_sorted.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(bars_sorted, tree_sorted);
    }
}
