use chrono::prelude::*;
use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};

use cblock::constants::block::DEFAULT_LINE_WIDTH;
use cblock::constants::config::{DEFAULT_CONF_FILE, DEFAULT_DELIMITER};
use cblock::debug;
use cblock::{
    config::{parse as config_parse, MainConfig},
    error::*,
};

use crate::directories::PROJECT_DIRS;

static DEFAULT_CONF: &str = "# File automatically generated on ${date}\n\
                            [defaults]\n\
                            align         = \"left\"\n\
                            center_titles = false\n\
                            padding       = 0\n\
                            delimiter     = \"${delimiter}\"\n\
                            line_width    = ${line_width}\n\n\
                            [output]\n\
                            # directory   = \"$HOME/comments\"\n";

#[derive(Debug)]
pub struct BootStrap {
    config: MainConfig,
    config_file: PathBuf,
}

impl BootStrap {
    pub fn new() -> Result<Self> {
        let config_file = PROJECT_DIRS.config_file();
        Ok(BootStrap {
            config: parse_main_config(&config_file)?,
            config_file,
        })
    }

    pub fn get_config(&self) -> &MainConfig {
        &self.config
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }
}

/// Renders the contents of a fresh configuration file
fn default_config_data() -> String {
    let current_date: DateTime<Local> = Local::now();
    DEFAULT_CONF
        .replacen("${date}", &current_date.to_string(), 1)
        .replacen("${delimiter}", &DEFAULT_DELIMITER.to_string(), 1)
        .replacen("${line_width}", &DEFAULT_LINE_WIDTH.to_string(), 1)
}

/// Creates the default main configuration file in the config directory
/// # Arguments
/// * `config_file` - The path to the configuration file
///
/// # Returns
/// A `Result` containing the configuration data as a `String`
///
/// # Errors
/// * `ConfigError` - If the configuration file cannot be created
/// * `IoError` - If an I/O error occurs while creating the configuration file
fn create_default_config(config_file: &Path) -> Result<String> {
    let parent_dir = config_file
        .parent()
        .ok_or_else(|| Error::ConfigError(config_file.to_string_lossy().into_owned()))?;
    std::fs::create_dir_all(parent_dir)?;
    let config_data = default_config_data();

    File::create(config_file)?.write_all(config_data.as_bytes())?;
    debug!("Created default configuration in {}", config_file.to_string_lossy());
    Ok(config_data)
}

/// Processes the main configuration file retrieving the associated `MainConfig` structure
///
/// This function reads the configuration file and returns a `MainConfig` structure.
/// If the file does not exist, it creates a default configuration file.
///
/// # Errors
///
/// This function returns an error if the configuration file cannot be read or parsed.
pub fn parse_main_config(conf_file: &Path) -> Result<MainConfig> {
    let toml_data = match config_parse(conf_file) {
        Ok(data) => data,
        Err(Error::Io(e)) if e.kind() == ::std::io::ErrorKind::NotFound => {
            create_default_config(conf_file)?
        }
        Err(Error::Io(e)) => {
            return Err(Error::ConfigReadError {
                file: String::from(DEFAULT_CONF_FILE),
                cause: e.to_string(),
            });
        }
        Err(e) => return Err(e),
    };

    debug!("Using configuration {}", conf_file.to_string_lossy());
    MainConfig::from_toml(&toml_data, DEFAULT_CONF_FILE)
}
