use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::error::*;

/// Single character drawn around every line of a comment block.
///
/// Only characters opening a line comment in common languages are allowed;
/// multi-character delimiters are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delimiter {
    #[default]
    Hash,
    Dollar,
    Semicolon,
    Colon,
    Slash,
    Asterisk,
    Backslash,
}

impl Delimiter {
    pub const ALL: [Delimiter; 7] = [
        Delimiter::Hash,
        Delimiter::Dollar,
        Delimiter::Semicolon,
        Delimiter::Colon,
        Delimiter::Slash,
        Delimiter::Asterisk,
        Delimiter::Backslash,
    ];

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Hash => '#',
            Delimiter::Dollar => '$',
            Delimiter::Semicolon => ';',
            Delimiter::Colon => ':',
            Delimiter::Slash => '/',
            Delimiter::Asterisk => '*',
            Delimiter::Backslash => '\\',
        }
    }

    /// Returns the delimiter repeated `count` times (a border line).
    pub fn repeat(self, count: usize) -> String {
        std::iter::repeat(self.as_char()).take(count).collect()
    }

    /// Returns the delimiter escaped for use inside a regular expression
    pub fn escaped(self) -> String {
        regex::escape(&self.as_char().to_string())
    }
}

impl TryFrom<char> for Delimiter {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        Delimiter::ALL
            .into_iter()
            .find(|d| d.as_char() == c)
            .ok_or_else(|| Error::UnsupportedDelimiter(c.to_string()))
    }
}

impl FromStr for Delimiter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Delimiter::try_from(c),
            _ => Err(Error::UnsupportedDelimiter(s.to_string())),
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl<'de> Deserialize<'de> for Delimiter {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Delimiter::from_str(&raw).map_err(de::Error::custom)
    }
}
