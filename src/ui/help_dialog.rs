//! Keyboard shortcut help window

use crate::app::Marquee;
use eframe::egui;

/// Render the help dialog window
pub fn render_help_dialog(app: &mut Marquee, ctx: &egui::Context) {
    if app.state.view.show_help {
        egui::Window::new("⌨ Keyboard Shortcuts")
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .show(ctx, |ui| {
                ui.heading("View");
                ui.label("R - Reset live chart bounds");
                ui.label("G - Toggle grid");
                ui.label("L - Toggle legend");
                ui.label("T - Toggle dark/light theme");
                ui.label("W - Switch treemap/wordcloud tab");
                ui.label("H / F1 - Toggle help");
                ui.label("ESC - Close help");

                ui.separator();
                ui.heading("Selection");
                ui.label("Pick a movie from the dropdown");
                ui.label("Or click a bar in the catalog overview");

                ui.separator();
                if ui.button("Close").clicked() {
                    app.state.view.show_help = false;
                }
            });
    }
}
