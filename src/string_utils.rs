use std::borrow::Cow;

use crate::constants::block::{TAB_SIZE, TITLE_MARKER};

/// Number of characters in a string. Block geometry is measured in
/// characters, not bytes nor display columns.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Centers a string within `width` columns, padding with spaces.
///
/// Matches the usual string-centering bias: when the padding is odd and the
/// width is even the extra space goes to the right, otherwise to the left.
/// Strings already at least `width` long are returned unchanged.
///
/// # Examples
///
/// ```
/// use cblock::string_utils::center;
///
/// assert_eq!(center("abc", 10), "   abc    ");
/// assert_eq!(center("abc", 9), "   abc   ");
/// assert_eq!(center("ab", 5), "  ab ");
/// ```
pub fn center(text: &str, width: usize) -> String {
    let len = char_len(text);
    if len >= width {
        return text.to_string();
    }
    let marg = width - len;
    let left = marg / 2 + (marg & width & 1);
    let right = marg - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Left-justifies a string within `width` columns, padding with trailing spaces.
///
/// # Examples
///
/// ```
/// use cblock::string_utils::ljust;
///
/// assert_eq!(ljust("abc", 5), "abc  ");
/// assert_eq!(ljust("abcdef", 3), "abcdef");
/// ```
pub fn ljust(text: &str, width: usize) -> String {
    let len = char_len(text);
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - len))
}

/// Replaces every tab with a fixed run of spaces
pub fn expand_tabs(text: &str) -> Cow<'_, str> {
    if text.contains('\t') {
        Cow::Owned(text.replace('\t', &" ".repeat(TAB_SIZE)))
    } else {
        Cow::Borrowed(text)
    }
}

/// Characters other than `\n` that end a line
const LINE_BREAKS: [char; 9] = [
    '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Converts every line terminator (`\r\n`, lone `\r`, vertical tab, form
/// feed, the file/group/record separators, next line and the Unicode line
/// and paragraph separators) to `\n`
///
/// # Examples
///
/// ```
/// use cblock::string_utils::normalize_newlines;
///
/// assert_eq!(normalize_newlines("a\r\nb\x0cc\u{2028}d"), "a\nb\nc\nd");
/// ```
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains(&LINE_BREAKS[..]) {
        Cow::Owned(text.replace("\r\n", "\n").replace(&LINE_BREAKS[..], "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Returns the text following the leading hyphen run of a title line
/// (a line starting with at least five hyphens), or `None` otherwise.
///
/// # Examples
///
/// ```
/// use cblock::string_utils::strip_title_marker;
///
/// assert_eq!(strip_title_marker("-----Hello"), Some("Hello"));
/// assert_eq!(strip_title_marker("--------- Hi -"), Some(" Hi -"));
/// assert_eq!(strip_title_marker("----Hello"), None);
/// ```
pub fn strip_title_marker(line: &str) -> Option<&str> {
    line.starts_with(TITLE_MARKER)
        .then(|| line.trim_start_matches('-'))
}
