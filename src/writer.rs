use std::{
    fs::create_dir_all,
    io::{stdout, Write},
    path::{Path, PathBuf},
};

use crate::error::*;

/// Where the transformed text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Maps a command line value to a target. Relative paths are placed
    /// under `base_dir` when one is configured.
    pub fn from_arg(arg: Option<&str>, base_dir: Option<&Path>) -> Self {
        match arg {
            None | Some("-") => OutputTarget::Stdout,
            Some(path) => {
                let path = PathBuf::from(path);
                match base_dir {
                    Some(dir) if path.is_relative() => OutputTarget::File(dir.join(path)),
                    _ => OutputTarget::File(path),
                }
            }
        }
    }
}

pub struct OutputWriter {}

impl OutputWriter {
    /// Writes the content to the target, followed by a line break unless
    /// `skip_newline` is set.
    pub fn write(target: &OutputTarget, content: &str, skip_newline: bool) -> Result<()> {
        match target {
            OutputTarget::Stdout => {
                let mut out = stdout().lock();
                OutputWriter::write_to(&mut out, content, skip_newline)?;
                out.flush()?;
                Ok(())
            }
            OutputTarget::File(path) => OutputWriter::write_file(path, content, skip_newline),
        }
    }

    /// Writes the content to any writer
    pub fn write_to<W: Write>(out: &mut W, content: &str, skip_newline: bool) -> Result<()> {
        out.write_all(content.as_bytes())?;
        if !skip_newline {
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    fn write_file(file_path: &Path, content: &str, skip_newline: bool) -> Result<()> {
        let write_error = |e: std::io::Error| Error::OutputWriteError {
            file: file_path.to_string_lossy().to_string(),
            cause: e.to_string(),
        };

        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir_all(parent).map_err(write_error)?;
        }
        let mut data = content.to_string();
        if !skip_newline {
            data.push('\n');
        }
        std::fs::write(file_path, data).map_err(write_error)
    }
}
