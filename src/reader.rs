use crate::{error::*, log};

use nu_ansi_term::Color::Yellow;

use std::fs::File;
use std::io::{stdin, Read};
use std::path::PathBuf;

/// Where the text to transform comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Maps a command line value to a source; no value or `-` means stdin.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => InputSource::Stdin,
            Some(path) => InputSource::File(PathBuf::from(path)),
        }
    }

    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.to_string_lossy().to_string(),
        }
    }
}

pub struct InputReader {}

impl InputReader {
    /// Reads the whole input as UTF-8 text.
    ///
    /// # Arguments
    /// * `source` - The file or stream to read.
    ///
    /// # Returns
    /// The text read.
    ///
    /// # Errors
    /// Returns `InputReadError` if the input cannot be opened or is not valid UTF-8.
    ///
    /// # Examples
    /// ```
    /// use std::fs;
    /// use cblock::reader::{InputReader, InputSource};
    ///
    /// let temp_dir = tempfile::tempdir().unwrap();
    /// let path = temp_dir.path().join("notes.txt");
    /// fs::write(&path, "Some notes\n").unwrap();
    ///
    /// let text = InputReader::read(&InputSource::File(path)).unwrap();
    /// assert_eq!(text, "Some notes\n");
    /// ```
    pub fn read(source: &InputSource) -> Result<String> {
        match source {
            InputSource::Stdin => InputReader::read_from(stdin().lock(), &source.name()),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|e| Error::InputReadError {
                    file: source.name(),
                    cause: log::debug_message(
                        e.to_string(),
                        Yellow
                            .paint(format!("\n[Input path] {}", path.to_string_lossy()))
                            .to_string(),
                    ),
                })?;
                InputReader::read_from(file, &source.name())
            }
        }
    }

    /// Reads the whole content of any reader, naming it `name` in errors.
    pub fn read_from<R: Read>(mut reader: R, name: &str) -> Result<String> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| Error::InputReadError {
                file: name.to_string(),
                cause: e.to_string(),
            })?;
        Ok(text)
    }
}
