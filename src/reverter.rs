//! Best-effort conversion of a comment block back to plain text.
//!
//! The block is rewritten by an ordered chain of regular expression passes.
//! Order matters: each pass sees the output of the previous one, and the
//! later passes rely on the earlier ones having removed borders and blank
//! lines. The result is an approximation; original spacing and the
//! difference between wrapped and intentional line breaks are lost.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::delimiter::Delimiter;
use crate::string_utils::{char_len, normalize_newlines};
use crate::transforms::{RegexReplace, ThresholdUnwrap, TransformChain};

/// Compiled passes for one delimiter
struct RevertPatterns {
    blank_lines: Regex,
    borders: Regex,
    centered_lines: Regex,
    short_lines: Regex,
    wrapped_lines: Regex,
    leading_delimiters: Regex,
    trailing_delimiters: Regex,
}

impl RevertPatterns {
    fn compile(delimiter: Delimiter) -> Self {
        let d = delimiter.escaped();
        let build = |pattern: String| Regex::new(&pattern).expect("revert pattern should compile");
        RevertPatterns {
            blank_lines: build(format!(r"(?m)^{d}[ ]+{d}$\n")),
            borders: build(format!(r"(?m)^{d}+$\n?")),
            centered_lines: build(format!(r"(?m)^{d}[ ]{{4,}}([^ ].+?)[ ]+{d}$\n")),
            short_lines: build(format!(r"(?m)^{d}[ ]+([^ ].+?)([ ]*){d}$\n")),
            wrapped_lines: build(format!(r"([^ \n]+)[ ]+{d}\n{d}?[ ]*([^ \n]+)")),
            leading_delimiters: build(format!(r"(?m)^{d}[ ]+")),
            trailing_delimiters: build(format!(r"(?m)[ ]+{d}$")),
        }
    }
}

// Indexed by the delimiter discriminant
static PATTERNS: Lazy<Vec<RevertPatterns>> =
    Lazy::new(|| Delimiter::ALL.into_iter().map(RevertPatterns::compile).collect());

/// Minimum trailing-space run marking a left-aligned line as standing on its
/// own, derived from the length of the block's first line.
pub fn short_line_threshold(block: &str) -> usize {
    let first_len = block.lines().next().map_or(0, char_len);
    first_len.saturating_sub(4) / 3
}

/// Reverts comment blocks drawn with a given delimiter
pub struct CommentReverter {
    delimiter: Delimiter,
}

impl CommentReverter {
    pub fn new(delimiter: Delimiter) -> Self {
        Self { delimiter }
    }

    /// Builds the ordered pass chain for a block whose short-line threshold
    /// is `min_spaces`.
    pub fn chain(&self, min_spaces: usize) -> TransformChain {
        let p: &'static RevertPatterns = &PATTERNS[self.delimiter as usize];
        TransformChain::new()
            .with(RegexReplace::new("blank_lines", &p.blank_lines, "\n"))
            .with(RegexReplace::new("borders", &p.borders, ""))
            .with(RegexReplace::new("centered_lines", &p.centered_lines, "${1}\n"))
            .with(ThresholdUnwrap::new("short_lines", &p.short_lines, min_spaces))
            .with(RegexReplace::new("wrapped_lines", &p.wrapped_lines, "${1} ${2}"))
            .with(RegexReplace::new("leading_delimiters", &p.leading_delimiters, ""))
            .with(RegexReplace::new("trailing_delimiters", &p.trailing_delimiters, ""))
    }

    /// Reverts the block. Never fails; input not produced by the formatter
    /// comes back partially reverted.
    pub fn revert(&self, block: &str) -> String {
        let block = normalize_newlines(block);
        if block.is_empty() {
            return String::new();
        }
        let min_spaces = short_line_threshold(&block);
        crate::debug!(
            "Reverting {} characters with delimiter '{}' (short line threshold: {})",
            char_len(&block),
            self.delimiter,
            min_spaces
        );
        self.chain(min_spaces).process(&block)
    }
}

/// Reverts a comment block to an approximation of its plain text.
///
/// # Examples
///
/// ```
/// use cblock::delimiter::Delimiter;
/// use cblock::formatter::convert_to_comment;
/// use cblock::options::FormatOptions;
/// use cblock::reverter::revert_to_plain;
///
/// let block = convert_to_comment("Hello world", &FormatOptions::default()).unwrap();
/// assert_eq!(revert_to_plain(&block, Delimiter::Hash), "Hello world\n");
/// ```
pub fn revert_to_plain(block: &str, delimiter: Delimiter) -> String {
    CommentReverter::new(delimiter).revert(block)
}
