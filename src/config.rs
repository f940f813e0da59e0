use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::block::DEFAULT_LINE_WIDTH;
use crate::delimiter::Delimiter;
use crate::error::*;
use crate::options::{Alignment, FormatOptions};

#[derive(Deserialize, Debug, Default)]
pub struct MainConfig {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub output: Output,
}

/// Formatting defaults, overridden by command line flags
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Defaults {
    pub align: Alignment,
    pub center_titles: bool,
    pub padding: usize,
    pub delimiter: Delimiter,
    pub line_width: usize,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Output {
    pub directory: Option<String>,
}

impl Default for Defaults {
    fn default() -> Defaults {
        Defaults {
            align: Alignment::Left,
            center_titles: false,
            padding: 0,
            delimiter: Delimiter::Hash,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl MainConfig {
    /// Parses the TOML contents of a configuration file.
    ///
    /// # Arguments
    /// * `toml_data` - The file contents.
    /// * `file_name` - The file name, used in error messages.
    ///
    /// # Examples
    /// ```
    /// use cblock::config::MainConfig;
    ///
    /// let config = MainConfig::from_toml("[defaults]\ndelimiter = \";\"\n", "cblock.toml").unwrap();
    /// assert_eq!(config.defaults.delimiter.as_char(), ';');
    /// assert_eq!(config.defaults.line_width, 72);
    /// ```
    pub fn from_toml(toml_data: &str, file_name: &str) -> Result<MainConfig> {
        toml::from_str::<MainConfig>(toml_data).map_err(|e| Error::SerdeTomlError {
            location: ConfigType::MAIN,
            file: file_name.to_string(),
            cause: e.to_string(),
        })
    }

    /// Builds validated format options out of the configured defaults
    pub fn format_options(&self) -> Result<FormatOptions> {
        let options = FormatOptions::new()
            .align(self.defaults.align)
            .center_titles(self.defaults.center_titles)
            .pad_count(self.defaults.padding)
            .delimiter(self.defaults.delimiter)
            .line_width(self.defaults.line_width);
        options.validate()?;
        Ok(options)
    }

    /// Resolves the output directory, expanding `~` and environment variables
    pub fn output_dir(&self) -> Result<Option<PathBuf>> {
        match &self.output.directory {
            None => Ok(None),
            Some(dir) => shellexpand::full(dir)
                .map(|expanded| Some(PathBuf::from(expanded.as_ref())))
                .map_err(|e| Error::InterpolationError {
                    location: ConfigType::OUTPUT,
                    cause: e.to_string(),
                }),
        }
    }
}

pub fn parse(file_path: &Path) -> Result<String> {
    let mut config_content = String::new();
    File::open(file_path)?.read_to_string(&mut config_content)?;
    Ok(config_content)
}
