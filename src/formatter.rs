use crate::constants::block::LEFT_INDENT;
use crate::error::*;
use crate::options::{Alignment, FormatOptions};
use crate::string_utils::{
    center, char_len, expand_tabs, ljust, normalize_newlines, strip_title_marker,
};
use crate::wrap::wrap;

/// Turns plain text into a bordered comment block
pub struct CommentFormatter {
    options: FormatOptions,
}

impl CommentFormatter {
    /// Creates a formatter, rejecting line widths too narrow to hold any text
    pub fn new(options: FormatOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Expands tabs, unifies line terminators, makes sure a non-empty text
    /// ends with a line break and adds the padding lines.
    fn prepare(&self, text: &str) -> String {
        let mut text = normalize_newlines(&expand_tabs(text)).into_owned();
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        if self.options.pad_count > 0 {
            let pad = "\n".repeat(self.options.pad_count);
            text = format!("{}{}{}", pad, text, pad);
        }
        text
    }

    fn bordered(&self, content: &str) -> String {
        let d = self.options.delimiter.as_char();
        format!("{}{}{}", d, content, d)
    }

    fn blank_line(&self) -> String {
        self.bordered(&" ".repeat(self.options.inner_width()))
    }

    fn title_line(&self, line: &str) -> Option<String> {
        if !self.options.center_titles {
            return None;
        }
        strip_title_marker(line)
            .filter(|title| char_len(title) <= self.options.wrap_width())
            .map(|title| self.bordered(&center(title, self.options.inner_width())))
    }

    fn body_line(&self, text: &str) -> String {
        match self.options.align {
            Alignment::Center => self.bordered(&center(text, self.options.inner_width())),
            Alignment::Left => self.bordered(&format!(
                "{}{}",
                LEFT_INDENT,
                ljust(text, self.options.inner_width() - LEFT_INDENT.len())
            )),
        }
    }

    /// Empty lines become blank block lines. Lines holding only whitespace
    /// wrap to nothing and are dropped.
    fn push_lines(&self, block: &mut Vec<String>, line: &str) {
        if line.is_empty() {
            block.push(self.blank_line());
        } else if let Some(title) = self.title_line(line) {
            block.push(title);
        } else {
            block.extend(
                wrap(line, self.options.wrap_width())
                    .iter()
                    .map(|sub| self.body_line(sub)),
            );
        }
    }

    /// Formats the text as a comment block.
    ///
    /// # Arguments
    /// * `text` - The plain text to convert
    ///
    /// # Returns
    /// The comment block, without a line break after the bottom border
    pub fn format(&self, text: &str) -> String {
        let text = self.prepare(text);
        let border = self.options.delimiter.repeat(self.options.line_width);

        let mut block = vec![border.clone()];
        for line in text.lines() {
            self.push_lines(&mut block, line);
        }
        block.push(border);
        block.join("\n")
    }
}

/// Converts plain text into a comment block using the given options.
///
/// # Errors
/// Returns `InvalidLineWidth` when the line width leaves no usable column.
///
/// # Examples
///
/// ```
/// use cblock::formatter::convert_to_comment;
/// use cblock::options::FormatOptions;
///
/// let block = convert_to_comment("Hello world", &FormatOptions::default()).unwrap();
/// let lines: Vec<&str> = block.lines().collect();
/// assert_eq!(lines.len(), 3);
/// assert_eq!(lines[0], "#".repeat(72));
/// assert_eq!(lines[1], format!("#  Hello world{}#", " ".repeat(57)));
/// assert_eq!(lines[2], "#".repeat(72));
/// ```
pub fn convert_to_comment(text: &str, options: &FormatOptions) -> Result<String> {
    Ok(CommentFormatter::new(options.clone())?.format(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delimiter::Delimiter;

    const SAMPLE: &str = "Comment Block Maker is a utility for programmers, converting plain \
                          text into a fixed width comment block. The interface is quite \
                          self-explanatory.";

    fn format(text: &str, options: FormatOptions) -> String {
        convert_to_comment(text, &options).unwrap()
    }

    fn assert_geometry(block: &str, options: &FormatOptions) {
        let lines: Vec<&str> = block.lines().collect();
        let border = options.delimiter.repeat(options.line_width);
        assert!(lines.len() >= 2);
        assert_eq!(lines[0], border);
        assert_eq!(lines[lines.len() - 1], border);
        let d = options.delimiter.as_char();
        for line in &lines[1..lines.len() - 1] {
            assert_eq!(char_len(line), options.line_width, "line {:?}", line);
            assert!(line.starts_with(d) && line.ends_with(d), "line {:?}", line);
        }
    }

    #[test]
    fn test_hello_world() {
        let block = format("Hello world", FormatOptions::default());
        let expected = format!(
            "{}\n#  Hello world{}#\n{}",
            "#".repeat(72),
            " ".repeat(57),
            "#".repeat(72)
        );
        assert_eq!(block, expected);
    }

    #[test]
    fn test_empty_input_gives_bare_borders() {
        let block = format("", FormatOptions::default());
        assert_eq!(block, format!("{}\n{}", "#".repeat(72), "#".repeat(72)));
    }

    #[test]
    fn test_blank_lines() {
        let block = format("a\n\n\nb\n", FormatOptions::default());
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 6);
        let blank = format!("#{}#", " ".repeat(70));
        assert_eq!(lines[2], blank);
        assert_eq!(lines[3], blank);
    }

    #[test]
    fn test_whitespace_only_lines_are_dropped() {
        assert_eq!(
            format("   ", FormatOptions::default()),
            format("", FormatOptions::default())
        );

        let block = format("a\n   \nb", FormatOptions::default());
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("#  a "));
        assert!(lines[2].starts_with("#  b "));
    }

    #[test]
    fn test_trailing_line_break_is_not_an_extra_line() {
        assert_eq!(
            format("Hello\n", FormatOptions::default()),
            format("Hello", FormatOptions::default())
        );
    }

    #[test]
    fn test_wrapping_keeps_geometry() {
        let options = FormatOptions::default();
        let block = format(SAMPLE, options.clone());
        assert_geometry(&block, &options);
        let lines: Vec<&str> = block.lines().collect();
        assert!(lines.len() > 3);
        for line in &lines[1..lines.len() - 1] {
            let text = line[3..line.len() - 1].trim_end();
            assert!(char_len(text) <= 66);
        }
    }

    #[test]
    fn test_wrapping_preserves_interior_spaces() {
        let block = format("a    b", FormatOptions::default());
        assert!(block.contains("#  a    b "));
    }

    #[test]
    fn test_long_words_are_broken() {
        let options = FormatOptions::new().line_width(12);
        let block = format("abcdefghijklmnop", options.clone());
        assert_geometry(&block, &options);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[1], "#  abcdef  #");
        assert_eq!(lines[2], "#  ghijkl  #");
        assert_eq!(lines[3], "#  mnop    #");
    }

    #[test]
    fn test_center_alignment() {
        let options = FormatOptions::new().align(Alignment::Center);
        let block = format("abc", options.clone());
        assert_geometry(&block, &options);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[1], format!("#{}abc{}#", " ".repeat(33), " ".repeat(34)));
    }

    #[test]
    fn test_title_centering() {
        let options = FormatOptions::new().center_titles(true);
        let block = format("-----Hello", options.clone());
        assert_geometry(&block, &options);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], format!("#{}Hello{}#", " ".repeat(32), " ".repeat(33)));
        assert!(!lines[1].contains('-'));
    }

    #[test]
    fn test_titles_left_alone_when_disabled() {
        let block = format("-----Hello", FormatOptions::default());
        assert!(block.contains("#  -----Hello "));
    }

    #[test]
    fn test_too_long_titles_are_wrapped() {
        let options = FormatOptions::new().center_titles(true).line_width(20);
        let block = format("-----A rather long title here", options.clone());
        assert_geometry(&block, &options);
        assert!(block.lines().count() > 3);
        assert!(block.contains("-----"));
    }

    #[test]
    fn test_padding() {
        let options = FormatOptions::new().pad_count(1);
        let block = format("Hello", options.clone());
        assert_geometry(&block, &options);
        let lines: Vec<&str> = block.lines().collect();
        let blank = format!("#{}#", " ".repeat(70));
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], blank);
        assert_eq!(lines[3], blank);

        let options = FormatOptions::new().pad_count(2);
        assert_eq!(format("Hello", options).lines().count(), 7);
    }

    #[test]
    fn test_tabs_become_spaces() {
        let block = format("\tindented", FormatOptions::default());
        assert!(block.contains("#      indented"));
    }

    #[test]
    fn test_escape_sequences_keep_geometry() {
        let options = FormatOptions::default();
        let block = format(&format!("\x1b[31m{}", "a".repeat(66)), options.clone());
        assert_geometry(&block, &options);
        assert_eq!(block.lines().count(), 4);

        let options = options.align(Alignment::Center);
        let block = format(&format!("\x1b[1mbold\x1b[0m {}", "b".repeat(70)), options.clone());
        assert_geometry(&block, &options);
    }

    #[test]
    fn test_em_dashes_are_break_points() {
        let options = FormatOptions::new().line_width(18);
        let block = format("em--dash text--more--text", options.clone());
        assert_geometry(&block, &options);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[1], "#  em--dash      #");
        assert_eq!(lines[2], "#  text--more--  #");
        assert_eq!(lines[3], "#  text          #");
    }

    #[test]
    fn test_other_delimiters_and_widths() {
        for d in Delimiter::ALL {
            let options = FormatOptions::new().delimiter(d).line_width(40);
            let block = format(SAMPLE, options.clone());
            assert_geometry(&block, &options);
        }
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(
            format("one\r\ntwo\r\n", FormatOptions::default()),
            format("one\ntwo\n", FormatOptions::default())
        );
    }

    #[test]
    fn test_form_feeds_and_unicode_separators_break_lines() {
        let expected = format("one\ntwo\nthree", FormatOptions::default());
        assert_eq!(format("one\x0ctwo\u{2028}three", FormatOptions::default()), expected);
        assert_eq!(format("one\x0btwo\u{85}three", FormatOptions::default()), expected);
    }

    #[test]
    fn test_rejects_narrow_widths() {
        assert!(matches!(
            convert_to_comment("x", &FormatOptions::new().line_width(5)),
            Err(Error::InvalidLineWidth { width: 5, min: 7 })
        ));
    }
}
