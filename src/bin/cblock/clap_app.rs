use cblock::delimiter::Delimiter;
use clap::{
    arg,
    builder::{styling::AnsiColor, Styles},
    crate_description, crate_name, crate_version, value_parser, ColorChoice, Command,
};

fn env_no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|x| !x.is_empty())
}

// Builds the application command line interface defining the commands, subcommands
// and arguments
pub fn build_app(interactive_output: bool) -> Command {
    let color_when = if interactive_output && !env_no_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Green.on_default())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default());

    let app = Command::new(crate_name!())
    .styles(styles)
    .version(crate_version!())
    .about(crate_description!())
    .color(color_when)
    .args_conflicts_with_subcommands(true)
    .arg(
        arg!([file] "Text file to read (defaults to stdin)")
        .long_help(
            "Path of the text to convert, or of the comment block to revert. \
                    When missing or \"-\", the text is read from the standard input.",
        ),
    )
    .arg(
        arg!(-r --revert "Reverts a comment block back to plain text.")
        .long_help(
            "Reverts the comment block back to plain text. This may not reproduce the \
                    original text: tabs become spaces, some spaces may be removed and line \
                    breaks may change.",
        ),
    )
    .arg(
        arg!(-c --center "Centers every line of the block.")
        .conflicts_with("left"),
    )
    .arg(
        arg!(-l --left "Left-aligns every line of the block.")
        .long_help("Left-aligns the text, overriding the alignment set in the configuration."),
    )
    .arg(
        arg!(-t --titles "Centers lines starting with five hyphens as titles.")
        .long_help(
            "Lines starting with 5 hyphens or more (e.g. \"-----Usage\") and short enough \
                    to fit a single line are centered, without the leading hyphens.",
        ),
    )
    .arg(
        arg!(-p --pad [COUNT] "Adds empty lines at the start and end of the block.")
        .long_help(
            "Adds the given number of empty lines at the beginning and end of the \
                    comment block (1 when no count is given).",
        )
        .value_parser(value_parser!(usize))
        .default_missing_value("1"),
    )
    .arg(
        arg!(-d --delimiter <CHAR> "Sets the comment character framing the block.")
        .long_help("Explicitly sets the comment character. Must be one of: # $ ; : / * \\")
        .value_parser(value_parser!(Delimiter)),
    )
    .arg(
        arg!(-w --width <COLUMNS> "Sets the width of every line of the block.")
        .long_help("Explicitly sets the line width, delimiters included (defaults to 72).")
        .value_parser(value_parser!(usize)),
    )
    .arg(
        arg!(-o --output <FILE> "Writes the result to a file instead of stdout.")
        .long_help(
            "Writes the result to the given file. Relative paths are resolved against the \
                    output directory of the configuration, when set.",
        ),
    )
    .arg(
        arg!(-n --"no-newline" "Supress new line after the generated output.")
        .long_help("Prevents writing a line break after the block or the reverted text.")
    );

    app.subcommand(configure_subcommands())
}

/// Configure the config subcommands
fn configure_subcommands() -> Command {
    Command::new("config")
    .about("Inspect or modify the configuration")
    .arg_required_else_help(true)
    .subcommand(
        Command::new("path")
        .about("Prints the location of the configuration file."),
    )
    .subcommand(
        Command::new("show")
        .alias("cat")
        .about("Displays the contents of the configuration file."),
    )
    .subcommand(
        Command::new("edit")
        .about("Opens the configuration file.")
        .long_about(
            "Opens the configuration file in the platform's default text editor \
                    (see $VISUAL and $EDITOR).",
        ),
    )
}
