//! Movie selector panel (left column)

use crate::app::Marquee;
use eframe::egui;

/// Render the movie dropdown and the panel footer controls
pub fn render_selector_panel(app: &mut Marquee, ui: &mut egui::Ui) {
    ui.heading("Coming movies");
    ui.separator();

    ui.label("Select a movie");
    ui.small("(use the dropdown or click a bar in the catalog overview)");
    ui.add_space(4.0);

    let titles = app.state.titles.clone();
    let mut selected = app.state.selected.clone();

    egui::ComboBox::from_id_salt("movie-drop")
        .width(ui.available_width() - 8.0)
        .selected_text(selected.clone())
        .show_ui(ui, |ui| {
            for title in &titles {
                ui.selectable_value(&mut selected, title.clone(), title);
            }
        });

    if selected != app.state.selected {
        app.state.selected = selected;
        app.handle_selection_changed();
    }

    ui.add_space(8.0);
    ui.separator();

    ui.checkbox(&mut app.state.view.show_overview, "Catalog overview");
    if app.state.view.show_overview {
        crate::ui::render_overview_panel(app, ui);
    }

    // Footer: theme, view config, help
    ui.separator();
    ui.horizontal(|ui| {
        if ui
            .button(if app.state.view.dark_mode { "🌙" } else { "☀" })
            .on_hover_text("Toggle theme (T)")
            .clicked()
        {
            app.state.view.toggle_dark_mode();
        }
        if ui.button("💾").on_hover_text("Save view settings").clicked() {
            app.save_view_config();
        }
        if ui.button("❓").on_hover_text("Help (F1)").clicked() {
            app.state.view.show_help = !app.state.view.show_help;
        }
    });
}
