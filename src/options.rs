use serde::Deserialize;

use crate::constants::block::{DEFAULT_LINE_WIDTH, MIN_LINE_WIDTH};
use crate::delimiter::Delimiter;
use crate::error::*;

/// Horizontal placement of wrapped text inside the block
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// Options driving the conversion of plain text into a comment block.
///
/// Built with chained setters; [`FormatOptions::validate`] checks the
/// line width before use.
///
/// ```
/// use cblock::{delimiter::Delimiter, options::{Alignment, FormatOptions}};
///
/// let options = FormatOptions::new()
///     .align(Alignment::Center)
///     .center_titles(true)
///     .delimiter(Delimiter::Slash)
///     .line_width(40);
/// assert!(options.validate().is_ok());
/// assert_eq!(options.wrap_width(), 34);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub align: Alignment,
    pub center_titles: bool,
    pub pad_count: usize,
    pub delimiter: Delimiter,
    pub line_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            align: Alignment::Left,
            center_titles: false,
            pad_count: 0,
            delimiter: Delimiter::Hash,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn center_titles(mut self, center_titles: bool) -> Self {
        self.center_titles = center_titles;
        self
    }

    pub fn pad_count(mut self, pad_count: usize) -> Self {
        self.pad_count = pad_count;
        self
    }

    pub fn delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width;
        self
    }

    /// Checks that the line width leaves room for at least one column of text
    pub fn validate(&self) -> Result<()> {
        if self.line_width < MIN_LINE_WIDTH {
            return Err(Error::InvalidLineWidth {
                width: self.line_width,
                min: MIN_LINE_WIDTH,
            });
        }
        Ok(())
    }

    /// Columns available to the text once delimiters and margins are taken
    pub fn wrap_width(&self) -> usize {
        self.line_width.saturating_sub(crate::constants::block::WRAP_MARGIN)
    }

    /// Width of the region between the two delimiters
    pub fn inner_width(&self) -> usize {
        self.line_width.saturating_sub(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FormatOptions::default();
        assert_eq!(options.align, Alignment::Left);
        assert!(!options.center_titles);
        assert_eq!(options.pad_count, 0);
        assert_eq!(options.delimiter, Delimiter::Hash);
        assert_eq!(options.line_width, 72);
        assert_eq!(options.wrap_width(), 66);
        assert_eq!(options.inner_width(), 70);
    }

    #[test]
    fn test_validate_line_width() {
        assert!(FormatOptions::new().line_width(7).validate().is_ok());
        assert!(matches!(
            FormatOptions::new().line_width(6).validate(),
            Err(Error::InvalidLineWidth { width: 6, min: 7 })
        ));
    }

    #[test]
    fn test_alignment_names() {
        #[derive(Deserialize)]
        struct Holder {
            align: Alignment,
        }

        let holder: Holder = toml::from_str("align = \"center\"").unwrap();
        assert_eq!(holder.align, Alignment::Center);
        assert!(toml::from_str::<Holder>("align = \"right\"").is_err());
    }
}
