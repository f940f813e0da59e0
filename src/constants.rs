//! Module for shared constants used across the codebase

/// Geometry of a comment block line
pub mod block {
    /// Default width of every line in a comment block
    pub const DEFAULT_LINE_WIDTH: usize = 72;

    /// Columns taken by the delimiter plus one space of margin on each side,
    /// on top of the two spaces used to left-align the text.
    pub const WRAP_MARGIN: usize = 6;

    /// Smallest line width leaving at least one usable column
    pub const MIN_LINE_WIDTH: usize = WRAP_MARGIN + 1;

    /// Indentation written after the opening delimiter of left-aligned lines
    pub const LEFT_INDENT: &str = "  ";

    /// Number of spaces a tab expands to
    pub const TAB_SIZE: usize = 4;

    /// Leading hyphens marking a line as a title
    pub const TITLE_MARKER: &str = "-----";
}

/// Bounds applied to the text handed to the transforms
pub mod limits {
    /// Inputs of this many characters or more are rejected
    pub const MAX_INPUT_CHARS: usize = 1_000_000;
}

pub mod config {
    /// Name of the main configuration file
    pub const DEFAULT_CONF_FILE: &str = "cblock.toml";

    /// Name of the application folder inside the platform config directory
    pub const APP_DIR: &str = "cblock";

    /// Default delimiter used to draw the block
    pub const DEFAULT_DELIMITER: char = '#';
}
