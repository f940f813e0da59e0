use crate::{
    constants::limits::MAX_INPUT_CHARS,
    debug,
    error::*,
    formatter::CommentFormatter,
    options::FormatOptions,
    reader::{InputReader, InputSource},
    reverter::revert_to_plain,
    string_utils::char_len,
    writer::{OutputTarget, OutputWriter},
};

/// Direction of the transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Convert,
    Revert,
}

/// Rejects inputs of `MAX_INPUT_CHARS` characters or more.
///
/// # Examples
/// ```
/// use cblock::controller::guard_input_size;
///
/// assert!(guard_input_size(&"x".repeat(999_999)).is_ok());
/// assert!(guard_input_size(&"x".repeat(1_000_000)).is_err());
/// ```
pub fn guard_input_size(text: &str) -> Result<()> {
    // Byte length bounds the character count from above
    if text.len() < MAX_INPUT_CHARS {
        return Ok(());
    }
    let size = char_len(text);
    if size >= MAX_INPUT_CHARS {
        return Err(Error::InputTooLarge {
            size,
            limit: MAX_INPUT_CHARS,
        });
    }
    Ok(())
}

/// Runs conversions and reversions with a fixed set of options, taking care
/// of the size guard and of moving text in and out.
pub struct BlockController {
    formatter: CommentFormatter,
}

impl BlockController {
    pub fn new(options: FormatOptions) -> Result<Self> {
        Ok(Self {
            formatter: CommentFormatter::new(options)?,
        })
    }

    pub fn options(&self) -> &FormatOptions {
        self.formatter.options()
    }

    /// Converts plain text into a comment block
    pub fn convert(&self, text: &str) -> Result<String> {
        guard_input_size(text)?;
        debug!("Converting {} characters with {:?}", char_len(text), self.options());
        Ok(self.formatter.format(text))
    }

    /// Reverts a comment block drawn with the configured delimiter
    pub fn revert(&self, block: &str) -> Result<String> {
        guard_input_size(block)?;
        Ok(revert_to_plain(block, self.options().delimiter))
    }

    /// Applies the transformation for the given mode
    pub fn apply(&self, mode: Mode, text: &str) -> Result<String> {
        match mode {
            Mode::Convert => self.convert(text),
            Mode::Revert => self.revert(text),
        }
    }

    /// Reads the input, transforms it and writes the result.
    ///
    /// # Arguments
    /// * `mode` - Whether to convert or revert.
    /// * `input` - The source of the text.
    /// * `output` - The destination of the result.
    /// * `skip_newline` - Do not end the output with a line break.
    ///
    /// # Returns
    /// `Ok(true)` once the result has been written.
    pub fn run(
        &self,
        mode: Mode,
        input: &InputSource,
        output: &OutputTarget,
        skip_newline: bool,
    ) -> Result<bool> {
        let text = InputReader::read(input)?;
        debug!("Read {} bytes from {}", text.len(), input.name());
        let result = self.apply(mode, &text)?;
        OutputWriter::write(output, &result, skip_newline)?;
        if let OutputTarget::File(path) = output {
            debug!("Result written to {}", path.to_string_lossy());
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delimiter::Delimiter;
    use std::fs;

    #[test]
    fn test_guard_boundary() {
        assert!(guard_input_size("").is_ok());
        assert!(guard_input_size(&"a".repeat(MAX_INPUT_CHARS - 1)).is_ok());
        assert!(matches!(
            guard_input_size(&"a".repeat(MAX_INPUT_CHARS)),
            Err(Error::InputTooLarge {
                size: 1_000_000,
                limit: 1_000_000
            })
        ));
    }

    #[test]
    fn test_guard_counts_characters() {
        // Two bytes per character: well over the byte limit, under the char limit
        assert!(guard_input_size(&"é".repeat(MAX_INPUT_CHARS - 1)).is_ok());
        assert!(guard_input_size(&"é".repeat(MAX_INPUT_CHARS)).is_err());
    }

    #[test]
    fn test_oversized_input_is_not_processed() {
        let controller = BlockController::new(FormatOptions::default()).unwrap();
        let text = "a".repeat(MAX_INPUT_CHARS);
        assert!(controller.convert(&text).is_err());
        assert!(controller.revert(&text).is_err());
    }

    #[test]
    fn test_apply_both_ways() {
        let controller =
            BlockController::new(FormatOptions::new().delimiter(Delimiter::Semicolon)).unwrap();
        let block = controller.apply(Mode::Convert, "Hello world").unwrap();
        assert!(block.starts_with(&";".repeat(72)));
        assert_eq!(controller.apply(Mode::Revert, &block).unwrap(), "Hello world\n");
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        assert!(BlockController::new(FormatOptions::new().line_width(3)).is_err());
    }

    #[test]
    fn test_run_with_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("plain.txt");
        let output = temp_dir.path().join("block.txt");
        fs::write(&input, "Hello world\n").unwrap();

        let controller = BlockController::new(FormatOptions::default()).unwrap();
        let done = controller
            .run(
                Mode::Convert,
                &InputSource::File(input),
                &OutputTarget::File(output.clone()),
                true,
            )
            .unwrap();
        assert!(done);

        let block = fs::read_to_string(&output).unwrap();
        assert_eq!(block.lines().count(), 3);
        assert!(block.ends_with(&"#".repeat(72)));

        let reverted = temp_dir.path().join("plain_again.txt");
        controller
            .run(
                Mode::Revert,
                &InputSource::File(output),
                &OutputTarget::File(reverted.clone()),
                true,
            )
            .unwrap();
        assert_eq!(fs::read_to_string(reverted).unwrap(), "Hello world\n");
    }
}
