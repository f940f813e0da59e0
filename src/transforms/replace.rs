use regex::{Captures, Regex};

use crate::transforms::Transform;

/// Replaces every match of a pattern, expanding `$n` groups in the replacement
pub struct RegexReplace {
    name: &'static str,
    pattern: &'static Regex,
    replacement: &'static str,
}

impl RegexReplace {
    pub fn new(name: &'static str, pattern: &'static Regex, replacement: &'static str) -> Self {
        Self {
            name,
            pattern,
            replacement,
        }
    }
}

impl Transform for RegexReplace {
    fn name(&self) -> &str {
        self.name
    }

    fn transform(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement)
            .into_owned()
    }
}

/// Unwraps lines whose trailing space run reaches a minimum length.
///
/// The pattern must capture the kept text as group 1 and the trailing spaces
/// as group 2; matches with a shorter run are left untouched.
pub struct ThresholdUnwrap {
    name: &'static str,
    pattern: &'static Regex,
    min_spaces: usize,
}

impl ThresholdUnwrap {
    pub fn new(name: &'static str, pattern: &'static Regex, min_spaces: usize) -> Self {
        Self {
            name,
            pattern,
            min_spaces,
        }
    }
}

impl Transform for ThresholdUnwrap {
    fn name(&self) -> &str {
        self.name
    }

    fn transform(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| {
                if caps[2].len() >= self.min_spaces {
                    format!("{}\n", &caps[1])
                } else {
                    caps[0].to_string()
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)=(\w+)").unwrap());
    static TRAILING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\|(\w+)([ ]*)\|$\n").unwrap());

    #[test]
    fn test_regex_replace_expands_groups() {
        let swap = RegexReplace::new("swap", &WORD, "${2}=${1}");
        assert_eq!(swap.transform("a=b c=d"), "b=a d=c");
        assert_eq!(swap.name(), "swap");
    }

    #[test]
    fn test_threshold_unwrap() {
        let unwrap = ThresholdUnwrap::new("unwrap", &TRAILING, 3);
        assert_eq!(unwrap.transform("|ab   |\n|cd  |\n"), "ab\n|cd  |\n");
        let unwrap = ThresholdUnwrap::new("unwrap", &TRAILING, 0);
        assert_eq!(unwrap.transform("|ab|\n"), "ab\n");
    }
}
