//! Command line parsing and [`Config`] construction.

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

/// Description of a single `convfont` run.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Config {
    /// The `.FON` or `.FNT` file to read.
    pub font_path: PathBuf,
    /// Which of the decoded fonts to convert.
    pub font_index: usize,
    /// Where to write the output. Standard output is used when `None`.
    pub output: Option<PathBuf>,
    /// List the decoded fonts instead of converting one.
    pub list: bool,
}

/// Parses `convfont`'s arguments to construct a [`Config`].
pub fn get_config() -> Config {
    parse_arguments(&command_parser().get_matches())
}

/// Parses the arguments required to produce a valid [`Config`].
pub fn parse_arguments(matches: &ArgMatches) -> Config {
    let font_path = matches
        .get_one::<PathBuf>("font")
        .cloned()
        .unwrap_or_else(|| unreachable!("`font` is a required argument"));

    let font_index = matches
        .get_one::<usize>("font-index")
        .copied()
        .unwrap_or_else(|| unreachable!("`font-index` should have a default value"));

    let output = matches.get_one::<PathBuf>("output").cloned();
    let list = matches.get_flag("list");

    Config {
        font_path,
        font_index,
        output,
        list,
    }
}

/// Returns the command parser for `convfont`.
pub fn command_parser() -> Command {
    let font = Arg::new("font")
        .help("Path to the .FON or .FNT file")
        .value_parser(value_parser!(PathBuf))
        .required(true);

    let font_index = Arg::new("font-index")
        .short('i')
        .long("font-index")
        .help("Which of the decoded fonts to convert")
        .env("CONVFONT_FONT_INDEX")
        .value_parser(value_parser!(usize))
        .default_value("0");

    let output = Arg::new("output")
        .short('o')
        .long("output")
        .help("Write the table to this file instead of standard output")
        .value_parser(value_parser!(PathBuf));

    let list = Arg::new("list")
        .short('l')
        .long("list")
        .help("List the fonts in the file instead of converting one")
        .action(ArgAction::SetTrue);

    Command::new("convfont")
        .about("Converts a Windows bitmap font into a static `phf_map!` glyph table")
        .arg(font)
        .arg(font_index)
        .arg(output)
        .arg(list)
}
