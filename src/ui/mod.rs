mod frequency_panel;
mod help_dialog;
mod overview_panel;
mod prediction_panel;
mod selector_panel;
mod treemap_panel;
mod wordcloud_panel;

pub use frequency_panel::render_frequency_panel;
pub use help_dialog::render_help_dialog;
pub use overview_panel::render_overview_panel;
pub use prediction_panel::{prediction_title, render_prediction_panel};
pub use selector_panel::render_selector_panel;
pub use treemap_panel::render_treemap_panel;
pub use wordcloud_panel::render_wordcloud_panel;

/// Shared categorical palette (tab10 order)
pub fn palette_color(index: usize) -> eframe::egui::Color32 {
    let colors = [
        eframe::egui::Color32::from_rgb(31, 119, 180),  // Blue
        eframe::egui::Color32::from_rgb(255, 127, 14),  // Orange
        eframe::egui::Color32::from_rgb(44, 160, 44),   // Green
        eframe::egui::Color32::from_rgb(214, 39, 40),   // Red
        eframe::egui::Color32::from_rgb(148, 103, 189), // Purple
        eframe::egui::Color32::from_rgb(140, 86, 75),   // Brown
        eframe::egui::Color32::from_rgb(227, 119, 194), // Pink
        eframe::egui::Color32::from_rgb(127, 127, 127), // Gray
        eframe::egui::Color32::from_rgb(188, 189, 34),  // Yellow
        eframe::egui::Color32::from_rgb(23, 190, 207),  // Cyan
    ];
    colors[index % colors.len()]
}
