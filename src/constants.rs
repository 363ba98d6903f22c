//! Application-wide constants and default values
//!
//! This module centralizes all magic numbers and default values used throughout
//! the application, making them easier to maintain and configure.

/// Input file locations
pub mod files {
    /// Default catalog CSV path (overridable by the first CLI argument)
    pub const CATALOG_FILE: &str = "data/movies.csv";

    /// Directory holding one comment file per movie
    pub const COMMENTS_DIR: &str = "comments";

    /// View configuration file name
    pub const VIEW_CONFIG_FILE: &str = "marquee-view.json";
}

/// Catalog schema
pub mod catalog {
    /// Column carrying the selectable movie titles
    pub const TITLE_COLUMN: &str = "movie title";
}

/// Live prediction defaults
pub mod predict {
    /// Rolling history capacity (most recent samples kept)
    pub const HISTORY_CAPACITY: usize = 50;

    /// Seconds between automatic prediction samples
    pub const TICK_SECONDS: f64 = 2.0;

    /// Jitter added to each sample, uniform integer in [-JITTER, JITTER]
    pub const JITTER: i64 = 2;
}

/// Word statistics and word-cloud layout defaults
pub mod words {
    /// Maximum number of words kept from a corpus
    pub const MAX_WORDS: usize = 100;

    /// Number of words shown in the frequency bars and treemap
    pub const TOP_WORDS: usize = 25;

    /// Largest font size assigned by the layout (most frequent word)
    pub const MAX_FONT_SIZE: f32 = 90.0;

    /// Smallest font size the layout will assign
    pub const MIN_FONT_SIZE: f32 = 4.0;

    /// Scale applied to relative frequency for on-screen text size
    pub const FONT_SCALE: f32 = 80.0;

    /// Layout canvas dimensions (layout coordinates, not pixels)
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 200.0;
}

/// UI layout defaults
pub mod layout {
    /// Left panel (movie selector) default width
    pub const SELECTOR_PANEL_WIDTH: f32 = 260.0;

    /// Word figure row default height
    pub const WORD_ROW_HEIGHT: f32 = 320.0;

    /// Catalog overview chart height inside the selector panel
    pub const OVERVIEW_CHART_HEIGHT: f32 = 180.0;

    /// Most bars the overview chart will draw
    pub const OVERVIEW_MAX_BARS: usize = 12;

    /// Status bar height
    pub const STATUS_BAR_HEIGHT: f32 = 20.0;
}
