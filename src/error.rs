use std::io::Write;
use strum_macros::Display;
use thiserror::Error;

#[derive(Debug, Display)]
pub enum ConfigType {
    #[strum(serialize = "Main config")]
    MAIN,
    #[strum(serialize = "Output")]
    OUTPUT,
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("error processing args. Cause : {0}")]
    ArgsProcessingError(String),
    #[error("unable to create default configuration file in {0}")]
    ConfigError(String),
    #[error("unable to read configuration file {file:?}. Cause : {cause}")]
    ConfigReadError { file: String, cause: String },
    #[error("Error executing command. Cause : {0}")]
    CommandError(String),
    #[error("input too large ({size} characters). Work with chunks shorter than {limit} characters")]
    InputTooLarge { size: usize, limit: usize },
    #[error("unable to read input {file:?}. Cause : {cause}")]
    InputReadError { file: String, cause: String },
    #[error("invalid line width {width} (must be at least {min})")]
    InvalidLineWidth { width: usize, min: usize },
    #[error("unable to parse {location} file {file:?}. Cause : {cause}")]
    SerdeTomlError {
        location: ConfigType,
        file: String,
        cause: String,
    },
    #[error(transparent)]
    Io(#[from] ::std::io::Error),
    #[error("unable to interpolate variable. Cause : {cause}")]
    InterpolationError { location: ConfigType, cause: String },
    #[error("unable to write output {file:?}. Cause : {cause}")]
    OutputWriteError { file: String, cause: String },
    #[error("unsupported delimiter \"{0}\" (expected one of #$;:/*\\)")]
    UnsupportedDelimiter(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn default_error_handler(error: &Error, output: &mut dyn Write) {
    use nu_ansi_term::Color::Red;

    match error {
        Error::Io(io_error) if io_error.kind() == ::std::io::ErrorKind::BrokenPipe => {
            ::std::process::exit(0);
        }
        Error::ConfigReadError { file: _, cause: _ }
        | Error::SerdeTomlError {
            location: _,
            file: _,
            cause: _,
        }
        | Error::InterpolationError {
            location: _,
            cause: _,
        } => {
            writeln!(output, "{}: {}", Red.paint("[config error]"), error).ok();
        }
        Error::InputTooLarge { size: _, limit: _ }
        | Error::UnsupportedDelimiter(_)
        | Error::InvalidLineWidth { width: _, min: _ } => {
            writeln!(output, "{}: {}", Red.paint("[format error]"), error).ok();
        }
        Error::InputReadError { file: _, cause: _ }
        | Error::OutputWriteError { file: _, cause: _ } => {
            writeln!(output, "{}: {}", Red.paint("[io error]"), error).ok();
        }
        _ => {
            writeln!(output, "{}: {}", Red.paint("[cblock error]"), error).ok();
        }
    };
}
