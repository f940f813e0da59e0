mod app;
mod bootstrap;
mod clap_app;
mod directories;

use app::App;
use cblock::error::*;
use std::process;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;

/// Returns `Err(..)` upon fatal errors, `Ok(false)` when nothing was produced.
fn run() -> Result<bool> {
    App::new()?.start()
}

fn main() {
    let code = match run() {
        Ok(true) => EXIT_SUCCESS,
        Ok(false) => EXIT_FAILURE,
        Err(error) => {
            default_error_handler(&error, &mut std::io::stderr().lock());
            EXIT_FAILURE
        }
    };
    process::exit(code);
}
