//! Application shell
//!
//! Owns the state and the two reactive handlers. The binding between
//! inputs and outputs is explicit: the dropdown and the overview bar
//! click invoke `handle_selection_changed`, the 2-second cadence invokes
//! `handle_tick`, and each frame simply redraws from state.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::Utc;
use eframe::egui::{self, CentralPanel};
use egui_extras::{Size, StripBuilder};
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::data::{Catalog, Corpus};
use crate::error::Result;
use crate::state::{AppState, WordTab};
use crate::text::{count_words, layout_words};
use crate::ui;

/// Persisted view settings
#[derive(Serialize, Deserialize)]
pub struct ViewConfig {
    pub dark_mode: bool,
    pub show_grid: bool,
    pub show_legend: bool,
    pub word_tab: WordTab,
    pub show_overview: bool,
}

pub struct Marquee {
    pub state: AppState,
}

impl Marquee {
    /// Build the app from a loaded catalog, apply any saved view config,
    /// and run the selection handler once so the default movie has word
    /// figures and a first sample before the first frame.
    pub fn new(catalog: Catalog, comments_dir: PathBuf) -> Result<Self> {
        let state = AppState::new(catalog, comments_dir)?;
        let mut app = Self { state };
        app.apply_view_config();
        app.handle_selection_changed();
        Ok(app)
    }

    /// Selection-change handler: reload the corpus, recompute the word
    /// figures, then force an immediate prediction sample.
    pub fn handle_selection_changed(&mut self) {
        log::debug!("selection changed to '{}'", self.state.selected);
        self.state.ui.clear_error();

        match Corpus::load(&self.state.comments_dir, &self.state.selected) {
            Ok(corpus) => {
                let counts = count_words(&corpus.text());
                log::debug!(
                    "'{}': {} comment lines, {} words kept",
                    self.state.selected,
                    corpus.len(),
                    counts.len()
                );
                self.state.words = Some(layout_words(&counts));
            }
            Err(e) => {
                log::warn!("{}", e);
                self.state
                    .ui
                    .set_error(format!("{}: {}", e.title(), e.user_message()));
                self.state.words = None;
            }
        }

        self.handle_tick();
        self.state.view.reset_plot_bounds();
    }

    /// Tick handler: push one prediction sample into the rolling history.
    /// The single writer of the history.
    pub fn handle_tick(&mut self) {
        let now = Utc::now().timestamp() as f64;
        match self
            .state
            .predictor
            .sample(&self.state.titles, &self.state.selected)
        {
            Ok(value) => {
                log::debug!("sample {:.1} for '{}'", value, self.state.selected);
                self.state.history.push(now, value);
            }
            Err(e) => {
                log::warn!("{}", e);
                self.state
                    .ui
                    .set_error(format!("{}: {}", e.title(), e.user_message()));
            }
        }
        self.state.last_sample = Some(Instant::now());
    }

    /// Seconds until the next automatic sample is due
    fn seconds_until_due(&self) -> f64 {
        match self.state.last_sample {
            Some(at) => constants::predict::TICK_SECONDS - at.elapsed().as_secs_f64(),
            None => 0.0,
        }
    }

    fn view_config(&self) -> ViewConfig {
        ViewConfig {
            dark_mode: self.state.view.dark_mode,
            show_grid: self.state.view.show_grid,
            show_legend: self.state.view.show_legend,
            word_tab: self.state.view.word_tab,
            show_overview: self.state.view.show_overview,
        }
    }

    /// Write the current view settings next to the binary
    pub fn save_view_config(&mut self) {
        match serde_json::to_string_pretty(&self.view_config()) {
            Ok(json) => {
                if let Err(e) = std::fs::write(constants::files::VIEW_CONFIG_FILE, json) {
                    self.state
                        .ui
                        .set_error(format!("Failed to save view config: {}", e));
                }
            }
            Err(e) => {
                self.state
                    .ui
                    .set_error(format!("Failed to serialize view config: {}", e));
            }
        }
    }

    /// Load saved view settings if present; a broken file is logged and
    /// ignored rather than blocking startup.
    fn apply_view_config(&mut self) {
        let path = Path::new(constants::files::VIEW_CONFIG_FILE);
        if !path.is_file() {
            return;
        }
        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|contents| {
                serde_json::from_str::<ViewConfig>(&contents).map_err(|e| e.to_string())
            });
        match parsed {
            Ok(config) => {
                self.state.view.dark_mode = config.dark_mode;
                self.state.view.show_grid = config.show_grid;
                self.state.view.show_legend = config.show_legend;
                self.state.view.word_tab = config.word_tab;
                self.state.view.show_overview = config.show_overview;
            }
            Err(e) => log::warn!("ignoring view config: {}", e),
        }
    }

    fn render_status_bar(&mut self, ui: &mut egui::Ui) {
        ui.separator();
        ui.horizontal(|ui| {
            if let Some(path) = self.state.catalog.file_path() {
                if let Some(name) = path.file_name() {
                    ui.label(format!("📁 {}", name.to_string_lossy()));
                    ui.separator();
                }
            }
            ui.label(format!("Movies: {}", self.state.titles.len()));
            ui.separator();
            ui.label(format!(
                "Samples: {}/{}",
                self.state.history.len(),
                self.state.history.capacity()
            ));
            if let Some(msg) = self.state.ui.error_message.clone() {
                ui.separator();
                ui.colored_label(egui::Color32::from_rgb(255, 80, 80), msg);
            }
        });
    }
}

impl eframe::App for Marquee {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::scope!("update");

        // Set theme
        if self.state.view.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // Handle keyboard shortcuts
        ctx.input(|i| {
            if i.key_pressed(egui::Key::R) {
                self.state.view.reset_bounds = true;
            }
            if i.key_pressed(egui::Key::G) {
                self.state.view.show_grid = !self.state.view.show_grid;
            }
            if i.key_pressed(egui::Key::L) {
                self.state.view.show_legend = !self.state.view.show_legend;
            }
            if i.key_pressed(egui::Key::T) {
                self.state.view.dark_mode = !self.state.view.dark_mode;
            }
            if i.key_pressed(egui::Key::W) {
                self.state.view.word_tab = match self.state.view.word_tab {
                    WordTab::Treemap => WordTab::Wordcloud,
                    WordTab::Wordcloud => WordTab::Treemap,
                };
            }
            if i.key_pressed(egui::Key::H) || i.key_pressed(egui::Key::F1) {
                self.state.view.show_help = !self.state.view.show_help;
            }
            if i.key_pressed(egui::Key::Escape) {
                self.state.view.show_help = false;
            }
        });

        // Fixed 2-second cadence; selection changes also sample immediately
        if self.seconds_until_due() <= 0.0 {
            self.handle_tick();
        }
        ctx.request_repaint_after(Duration::from_secs_f64(
            self.seconds_until_due()
                .clamp(0.05, constants::predict::TICK_SECONDS),
        ));

        CentralPanel::default().show(ctx, |ui| {
            StripBuilder::new(ui)
                .size(Size::remainder())
                .size(Size::exact(constants::layout::STATUS_BAR_HEIGHT))
                .vertical(|mut strip| {
                    strip.cell(|ui| {
                        StripBuilder::new(ui)
                            .size(Size::exact(constants::layout::SELECTOR_PANEL_WIDTH))
                            .size(Size::remainder())
                            .horizontal(|mut strip| {
                                // Left panel: movie selection and overview
                                strip.cell(|ui| {
                                    ui::render_selector_panel(self, ui);
                                });

                                // Center: live chart above the word figures
                                strip.cell(|ui| {
                                    StripBuilder::new(ui)
                                        .size(Size::remainder())
                                        .size(Size::exact(constants::layout::WORD_ROW_HEIGHT))
                                        .vertical(|mut strip| {
                                            strip.cell(|ui| {
                                                ui::render_prediction_panel(self, ui);
                                            });
                                            strip.cell(|ui| {
                                                StripBuilder::new(ui)
                                                    .size(Size::relative(0.4))
                                                    .size(Size::remainder())
                                                    .horizontal(|mut strip| {
                                                        strip.cell(|ui| {
                                                            ui::render_frequency_panel(self, ui);
                                                        });
                                                        strip.cell(|ui| {
                                                            ui.horizontal(|ui| {
                                                                ui.selectable_value(
                                                                    &mut self.state.view.word_tab,
                                                                    WordTab::Treemap,
                                                                    "Treemap",
                                                                );
                                                                ui.selectable_value(
                                                                    &mut self.state.view.word_tab,
                                                                    WordTab::Wordcloud,
                                                                    "Wordcloud",
                                                                );
                                                            });
                                                            ui.separator();
                                                            match self.state.view.word_tab {
                                                                WordTab::Treemap => {
                                                                    ui::render_treemap_panel(
                                                                        self, ui,
                                                                    );
                                                                }
                                                                WordTab::Wordcloud => {
                                                                    ui::render_wordcloud_panel(
                                                                        self, ui,
                                                                    );
                                                                }
                                                            }
                                                        });
                                                    });
                                            });
                                        });
                                });
                            });
                    });

                    // Status bar at bottom
                    strip.cell(|ui| {
                        self.render_status_bar(ui);
                    });
                });
        });

        // Help dialog
        ui::render_help_dialog(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::prediction_title;

    /// Catalog with two movies, comments for both, none for a third
    fn sample_app() -> (Marquee, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();

        let catalog_path = dir.path().join("movies.csv");
        std::fs::write(
            &catalog_path,
            "movie title,genre\nHeat,Crime\nInception,Sci-Fi\nTenet,Sci-Fi\n",
        )
        .unwrap();

        let comments = dir.path().join("comments");
        std::fs::create_dir(&comments).unwrap();
        std::fs::write(
            comments.join("Heat.csv"),
            "the diner scene is legendary\nthe shootout is unmatched\n",
        )
        .unwrap();
        std::fs::write(
            comments.join("Inception.csv"),
            "dreams nested within dreams\nthe hallway fight holds up\n",
        )
        .unwrap();

        let catalog = Catalog::load(&catalog_path).unwrap();
        let app = Marquee::new(catalog, comments).unwrap();
        (app, dir)
    }

    #[test]
    fn test_boot_selects_first_title_and_samples_once() {
        let (app, _dir) = sample_app();
        assert_eq!(app.state.selected, "Heat");
        assert_eq!(app.state.history.len(), 1);
        assert!(app.state.words.as_ref().is_some_and(|w| !w.is_empty()));
    }

    #[test]
    fn test_selection_change_retitles_chart_from_latest_sample() {
        let (mut app, _dir) = sample_app();
        app.state.selected = "Inception".to_string();
        app.handle_selection_changed();

        let latest = app.state.history.latest().unwrap();
        let title = prediction_title(&app.state.selected, latest.value);
        assert!(title.contains("Inception"));
        assert!(title.contains(&format!("{:.1}$", latest.value)));
        assert_eq!(
            app.state.history.points().last(),
            Some(&[latest.timestamp, latest.value])
        );
    }

    #[test]
    fn test_missing_corpus_surfaces_error_but_still_samples() {
        let (mut app, _dir) = sample_app();
        app.state.selected = "Tenet".to_string();
        app.handle_selection_changed();

        assert!(app.state.ui.has_error());
        assert!(app.state.words.is_none());
        // The live chart keeps going: Tenet has a catalog row
        assert_eq!(app.state.history.len(), 2);
    }

    #[test]
    fn test_history_never_exceeds_capacity() {
        let (mut app, _dir) = sample_app();
        for _ in 0..120 {
            app.handle_tick();
        }
        assert_eq!(
            app.state.history.len(),
            constants::predict::HISTORY_CAPACITY
        );
    }
}
