use std::io::IsTerminal;

use crate::{bootstrap::BootStrap, clap_app};
use cblock::{
    config::{parse as config_parse, MainConfig},
    controller::{BlockController, Mode},
    debug,
    delimiter::Delimiter,
    error::*,
    options::{Alignment, FormatOptions},
    reader::InputSource,
    writer::OutputTarget,
};
use clap::ArgMatches;

pub struct App {
    pub matches: ArgMatches,
}

impl App {
    pub fn new() -> Result<Self> {
        #[cfg(windows)]
        let _ = nu_ansi_term::enable_ansi_support();

        let interactive_output = std::io::stdout().is_terminal();

        Ok(App {
            matches: Self::matches(interactive_output)?,
        })
    }

    pub fn matches(interactive_output: bool) -> Result<ArgMatches> {
        Ok(clap_app::build_app(interactive_output).get_matches())
    }

    /// Builds the format options out of the configuration defaults, replacing
    /// them with the values supplied in the command line arguments.
    ///
    /// # Returns
    /// A `Result` containing the validated options.
    fn build_options(&self, config: &MainConfig) -> Result<FormatOptions> {
        let mut options = config.format_options()?;

        if self.matches.get_flag("center") {
            options = options.align(Alignment::Center);
        } else if self.matches.get_flag("left") {
            options = options.align(Alignment::Left);
        }
        if self.matches.get_flag("titles") {
            options = options.center_titles(true);
        }
        if let Some(pad) = self.matches.get_one::<usize>("pad") {
            options = options.pad_count(*pad);
        }
        if let Some(delimiter) = self.matches.get_one::<Delimiter>("delimiter") {
            options = options.delimiter(*delimiter);
        }
        if let Some(width) = self.matches.get_one::<usize>("width") {
            options = options.line_width(*width);
        }

        options.validate()?;
        debug!("Resolved options: {:?}", options);
        Ok(options)
    }

    /// Runs any of the config subcommands. Currently supported :
    /// - path : prints the location of the configuration file
    /// - show : prints the configuration file
    /// - edit : opens the configuration file in the default system editor
    ///
    /// # Returns
    /// A `Result` indicating success or failure.
    fn run_config_subcommand(&self, bootstrap: &BootStrap, params: &ArgMatches) -> Result<bool> {
        let config_file = bootstrap.config_file();
        match params.subcommand_name() {
            Some("path") => {
                println!("{}", config_file.to_string_lossy());
                Ok(true)
            }
            Some("show") => {
                print!("{}", config_parse(config_file)?);
                Ok(true)
            }
            Some("edit") => match edit::edit_file(config_file) {
                Ok(_) => Ok(true),
                Err(e) => Err(Error::CommandError(format!(
                    "unable to edit {} -> {}",
                    config_file.to_string_lossy(),
                    e
                ))),
            },
            _ => Err(Error::ArgsProcessingError(
                "Invalid subcommand provided".to_string(),
            )),
        }
    }

    /// Start the application, bootstraps the configuration and forwards the request to the controller.
    ///
    /// # Returns
    /// A `Result` indicating whether the application completed successfully.
    pub fn start(&self) -> Result<bool> {
        let bootstrap = BootStrap::new()?;

        match self.matches.subcommand() {
            Some(("config", params)) => self.run_config_subcommand(&bootstrap, params),
            _ => {
                let config = bootstrap.get_config();
                let controller = BlockController::new(self.build_options(config)?)?;

                let mode = if self.matches.get_flag("revert") {
                    Mode::Revert
                } else {
                    Mode::Convert
                };
                let input =
                    InputSource::from_arg(self.matches.get_one::<String>("file").map(|s| s.as_str()));
                let output_dir = config.output_dir()?;
                let output = OutputTarget::from_arg(
                    self.matches.get_one::<String>("output").map(|s| s.as_str()),
                    output_dir.as_deref(),
                );

                controller.run(mode, &input, &output, self.matches.get_flag("no-newline"))
            }
        }
    }
}
