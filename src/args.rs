use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the command-line definition
pub fn build_command() -> Command {
    Command::new("btcheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Checks which files of a torrent download are complete")
        .arg(
            Arg::new("torrents")
                .help("Torrent files, or directories containing them")
                .required(true)
                .num_args(1..)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("content-dir")
                .short('c')
                .long("content-dir")
                .help("Directory holding the downloaded data")
                .default_value(".")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("link-dir")
                .short('l')
                .long("link-dir")
                .help("Hard-link complete files into this directory")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("cheat")
                .long("cheat")
                .action(ArgAction::SetTrue)
                .requires("link-dir")
                .help("Trust files already present under the link directory without hashing"),
        )
        .arg(
            Arg::new("only-new")
                .long("only-new")
                .action(ArgAction::SetTrue)
                .requires("link-dir")
                .help("Only report files that were not already linked"),
        )
        .arg(
            Arg::new("selection")
                .short('s')
                .long("selection")
                .action(ArgAction::SetTrue)
                .help("Print a 1-based selection list of complete files instead of names"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Suppress progress and summary output"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Report per-piece and per-file progress"),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_command().get_matches()
}
