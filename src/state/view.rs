//! View and visualization state

use serde::{Deserialize, Serialize};

/// Which word figure the right-hand tab shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordTab {
    Treemap,
    Wordcloud,
}

impl Default for WordTab {
    fn default() -> Self {
        WordTab::Treemap
    }
}

/// View state manages all visualization and display options
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Dark mode theme toggle
    pub dark_mode: bool,

    /// Show help panel
    pub show_help: bool,

    /// Grid visibility on the live chart
    pub show_grid: bool,

    /// Legend visibility on the live chart
    pub show_legend: bool,

    /// Reset live chart bounds flag
    pub reset_bounds: bool,

    /// Active word figure tab
    pub word_tab: WordTab,

    /// Catalog overview bar chart visibility
    pub show_overview: bool,

    /// Column shown in the catalog overview chart
    pub overview_attribute: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            dark_mode: true,
            show_help: false,
            show_grid: true,
            show_legend: false,
            reset_bounds: false,
            word_tab: WordTab::default(),
            show_overview: false,
            overview_attribute: None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset live chart bounds on next frame
    pub fn reset_plot_bounds(&mut self) {
        self.reset_bounds = true;
    }

    /// Toggle dark mode
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}
