//! Greedy word wrapping measured in characters.
//!
//! A line is first split into chunks: whitespace runs, words, the leading
//! part of hyphenated words (`well-` + `known`) and em-dashes written as two
//! or more hyphens (`word--word`). Chunks are then packed first-fit into
//! lines. A chunk longer than a whole line is broken, after its last hyphen
//! when there is one in reach. Every character counts as one column, escape
//! sequences and wide characters included, so wrapped lines never exceed
//! the requested width.

use crate::string_utils::char_len;

const WHITESPACE: [char; 6] = ['\t', '\n', '\x0b', '\x0c', '\r', ' '];

fn is_space(c: char) -> bool {
    WHITESPACE.contains(&c)
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_letter(c: char) -> bool {
    is_word(c) && !c.is_numeric()
}

/// Characters an em-dash may follow
fn is_word_punct(c: char) -> bool {
    is_word(c) || matches!(c, '!' | '"' | '\'' | '&' | '.' | ',' | '?')
}

fn is_blank_chunk(chunk: &str) -> bool {
    chunk.trim().is_empty()
}

/// Length of the em-dash starting at `at`: two or more hyphens followed by a
/// word character.
fn em_dash_len(chars: &[char], at: usize) -> Option<usize> {
    let hyphens = chars[at..].iter().take_while(|&&c| c == '-').count();
    let followed_by_word = chars.get(at + hyphens).is_some_and(|&c| is_word(c));
    (hyphens >= 2 && followed_by_word).then_some(hyphens)
}

/// Whether the hyphen at `at` ends a chunk: it must follow two letters (or a
/// single letter after another hyphenated letter) and precede two letters,
/// optionally separated by one more hyphen.
fn breaks_after_hyphen(chars: &[char], at: usize) -> bool {
    let letter = |i: usize| chars.get(i).is_some_and(|&c| is_letter(c));
    let before = (at >= 2 && letter(at - 2) && letter(at - 1))
        || (at >= 3 && letter(at - 3) && chars[at - 2] == '-' && letter(at - 1));
    let after = letter(at + 1)
        && (letter(at + 2) || (chars.get(at + 2) == Some(&'-') && letter(at + 3)));
    before && after
}

fn chunk_end(chars: &[char], start: usize) -> usize {
    if is_space(chars[start]) {
        return start + chars[start..].iter().take_while(|&&c| is_space(c)).count();
    }
    if start > 0 && is_word_punct(chars[start - 1]) {
        if let Some(len) = em_dash_len(chars, start) {
            return start + len;
        }
    }

    let mut end = start + 1;
    loop {
        match chars.get(end) {
            None => return end,
            Some(&c) if is_space(c) => return end,
            Some('-') if breaks_after_hyphen(chars, end) => return end + 1,
            Some(_) if is_word_punct(chars[end - 1]) && em_dash_len(chars, end).is_some() => {
                return end
            }
            Some(_) => end += 1,
        }
    }
}

/// Splits a line into the chunks the wrapper packs into lines
///
/// # Examples
///
/// ```
/// use cblock::wrap::split_chunks;
///
/// assert_eq!(split_chunks("a  well-known"), vec!["a", "  ", "well-", "known"]);
/// assert_eq!(split_chunks("yes--no"), vec!["yes", "--", "no"]);
/// ```
pub fn split_chunks(line: &str) -> Vec<&str> {
    let chars: Vec<char> = line.chars().collect();
    let offsets: Vec<usize> = line
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()))
        .collect();

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = chunk_end(&chars, start);
        chunks.push(&line[offsets[start]..offsets[end]]);
        start = end;
    }
    chunks
}

/// Moves as much of the next (too long) chunk as fits onto the current line
fn break_long_chunk<'a>(
    chunks: &mut Vec<&'a str>,
    current: &mut Vec<&'a str>,
    current_len: usize,
    width: usize,
) {
    let Some(chunk) = chunks.pop() else {
        return;
    };
    let space_left = width - current_len;
    let head: Vec<char> = chunk.chars().take(space_left).collect();
    let end = match head.iter().rposition(|&c| c == '-') {
        Some(hyphen) if hyphen > 0 && head[..hyphen].iter().any(|&c| c != '-') => hyphen + 1,
        _ => space_left,
    };
    let split = chunk.char_indices().nth(end).map_or(chunk.len(), |(i, _)| i);
    current.push(&chunk[..split]);
    chunks.push(&chunk[split..]);
}

/// Wraps a single line into lines of at most `width` characters.
///
/// Leading whitespace is kept on the first line only, trailing whitespace is
/// dropped from every line and interior runs of spaces are left untouched.
/// A line holding nothing but whitespace wraps to no lines at all.
///
/// # Examples
///
/// ```
/// use cblock::wrap::wrap;
///
/// assert_eq!(wrap("The quick brown fox", 10), vec!["The quick", "brown fox"]);
/// assert_eq!(wrap("ab cdefghijklmnop", 10), vec!["ab cdefghi", "jklmnop"]);
/// assert!(wrap("    ", 10).is_empty());
/// ```
pub fn wrap(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut chunks = split_chunks(line);
    chunks.reverse();

    let mut lines: Vec<String> = Vec::new();
    while !chunks.is_empty() {
        if !lines.is_empty() && chunks.last().is_some_and(|c| is_blank_chunk(c)) {
            chunks.pop();
        }

        let mut current = Vec::new();
        let mut current_len = 0;
        while let Some(&chunk) = chunks.last() {
            let len = char_len(chunk);
            if current_len + len > width {
                break;
            }
            current.push(chunk);
            current_len += len;
            chunks.pop();
        }

        if chunks.last().is_some_and(|c| char_len(c) > width) {
            break_long_chunk(&mut chunks, &mut current, current_len, width);
        }
        if current.last().is_some_and(|c| is_blank_chunk(c)) {
            current.pop();
        }
        if !current.is_empty() {
            lines.push(current.concat());
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words_and_spaces() {
        assert_eq!(split_chunks("Hello world"), vec!["Hello", " ", "world"]);
        assert_eq!(split_chunks("  a    b "), vec!["  ", "a", "    ", "b", " "]);
        assert!(split_chunks("").is_empty());
    }

    #[test]
    fn test_split_hyphenated_words() {
        assert_eq!(split_chunks("self-explanatory."), vec!["self-", "explanatory."]);
        assert_eq!(split_chunks("e-mail-address"), vec!["e-mail-", "address"]);
        // Too short on either side of the hyphen
        assert_eq!(split_chunks("a-b"), vec!["a-b"]);
        assert_eq!(split_chunks("ab-c"), vec!["ab-c"]);
        // Digits are not letters
        assert_eq!(split_chunks("1234-5678"), vec!["1234-5678"]);
    }

    #[test]
    fn test_split_em_dashes() {
        assert_eq!(
            split_chunks("em--dash text--more"),
            vec!["em", "--", "dash", " ", "text", "--", "more"]
        );
        // Not followed by a word character
        assert_eq!(split_chunks("end--"), vec!["end--"]);
        // Not preceded by a word character
        assert_eq!(split_chunks("--flag"), vec!["--flag"]);
    }

    #[test]
    fn test_wrap_fits_on_one_line() {
        assert_eq!(wrap("Hello world", 66), vec!["Hello world"]);
        assert_eq!(wrap("  indented  text", 66), vec!["  indented  text"]);
    }

    #[test]
    fn test_wrap_drops_whitespace_at_line_edges() {
        assert_eq!(wrap("aaaa bbbb", 6), vec!["aaaa", "bbbb"]);
        assert_eq!(wrap("aaaa    bbbb cc", 9), vec!["aaaa", "bbbb cc"]);
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_wrap_breaks_long_words() {
        assert_eq!(wrap("abcdefghijklmnop", 6), vec!["abcdef", "ghijkl", "mnop"]);
        // The broken word fills the rest of the current line
        assert_eq!(wrap("ab cdefghijklmnop", 10), vec!["ab cdefghi", "jklmnop"]);
    }

    #[test]
    fn test_wrap_breaks_long_words_after_hyphens() {
        assert_eq!(wrap("1234-5678-90123", 8), vec!["1234-", "5678-", "90123"]);
        assert_eq!(wrap("----------", 4), vec!["----", "----", "--"]);
    }

    #[test]
    fn test_wrap_splits_at_em_dashes() {
        assert_eq!(
            wrap("em--dash text--more--text", 12),
            vec!["em--dash", "text--more--", "text"]
        );
    }

    #[test]
    fn test_wrap_counts_every_character() {
        let line = format!("\x1b[31m{}", "a".repeat(66));
        let lines = wrap(&line, 66);
        assert_eq!(lines.len(), 2);
        assert_eq!(char_len(&lines[0]), 66);
        assert_eq!(lines[1], "aaaaa");

        for line in wrap("こんにちは 世界 こんにちは世界", 6) {
            assert!(char_len(&line) <= 6, "line {:?}", line);
        }
    }
}
