//! Application state management
//!
//! This module organizes the Marquee application state into logical
//! components: the boot-time catalog, the live prediction state, the
//! per-selection word figures, and the view/UI toggles.

mod ui;
mod view;

pub use ui::UiState;
pub use view::{ViewState, WordTab};

use std::path::PathBuf;
use std::time::Instant;

use crate::constants::predict::HISTORY_CAPACITY;
use crate::data::Catalog;
use crate::error::Result;
use crate::predict::{History, Predictor};
use crate::text::WordLayout;

/// Main application state container
pub struct AppState {
    /// Movie catalog, loaded once at boot and read-only afterwards
    pub catalog: Catalog,

    /// Sorted distinct movie titles (dropdown contents)
    pub titles: Vec<String>,

    /// Currently selected movie title
    pub selected: String,

    /// Rolling prediction history behind the live chart.
    /// Single writer: only the tick handler pushes into it.
    pub history: History,

    /// Placeholder predictor
    pub predictor: Predictor,

    /// Word figures for the current selection, None until the first
    /// corpus load (or when the corpus was missing)
    pub words: Option<WordLayout>,

    /// Directory holding per-movie comment files
    pub comments_dir: PathBuf,

    /// Instant of the most recent prediction sample
    pub last_sample: Option<Instant>,

    /// View and visualization state
    pub view: ViewState,

    /// UI interaction state
    pub ui: UiState,
}

impl AppState {
    /// Build the boot state from a loaded catalog. Fails when the title
    /// column is missing; the first title (alphabetically) starts selected.
    pub fn new(catalog: Catalog, comments_dir: PathBuf) -> Result<Self> {
        let titles = catalog.titles()?;
        let selected = titles.first().cloned().unwrap_or_default();

        let mut view = ViewState::default();
        // Default overview attribute: first non-title column, if any
        view.overview_attribute = catalog
            .column_names()
            .into_iter()
            .find(|c| c != crate::constants::catalog::TITLE_COLUMN);

        Ok(Self {
            catalog,
            titles,
            selected,
            history: History::new(HISTORY_CAPACITY),
            predictor: Predictor::new(),
            words: None,
            comments_dir,
            last_sample: None,
            view,
            ui: UiState::default(),
        })
    }
}
