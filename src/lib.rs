//! `cblock` is a library to turn plain text into fixed width comment blocks
//! and back.
//!
//! Blocks are framed by a single delimiter character. Every line has the
//! same width, text is word-wrapped and either left-aligned or centered, and
//! lines starting with five hyphens can be centered as titles:
//!
//! ```text
//! ########################################################################
//! #                                                                      #
//! #                                USAGE                                 #
//! #                                                                      #
//! #  Text wraps at the line width and is padded up to the closing        #
//! #  delimiter.                                                          #
//! #                                                                      #
//! ########################################################################
//! ```
//!
//! The main entry points are `formatter::convert_to_comment` and
//! `reverter::revert_to_plain`. `controller::BlockController` adds the input
//! size guard and file handling used by the command line tool.
//!
//! "Hello world" example:
//! ```
//! use cblock::prelude::*;
//!
//! let options = FormatOptions::new().align(Alignment::Center);
//! let block = convert_to_comment("Hello world", &options).unwrap();
//! assert_eq!(revert_to_plain(&block, Delimiter::Hash), "Hello world\n");
//! ```

pub mod config;
pub mod constants;
pub mod controller;
pub mod delimiter;
pub mod error;
pub mod formatter;
pub mod log;
pub mod options;
pub mod reader;
pub mod reverter;
pub mod string_utils;
pub mod transforms;
pub mod wrap;
pub mod writer;

#[doc(hidden)]
pub use nu_ansi_term;

/// The cblock prelude
///
/// This module re-exports the most commonly used items from cblock.
/// You can use it with `use cblock::prelude::*;` to bring all common items into scope.
pub mod prelude {
    // Re-export commonly used types
    pub use crate::controller::{BlockController, Mode};
    pub use crate::delimiter::Delimiter;
    pub use crate::error::Result;
    pub use crate::options::{Alignment, FormatOptions};

    // Re-export commonly used functions
    pub use crate::formatter::convert_to_comment;
    pub use crate::reverter::revert_to_plain;
}
