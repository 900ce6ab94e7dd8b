//! Torrent completeness checker
//!
//! Runs against an in-progress or finished download and decides, per file,
//! whether every covering piece hashes to the digest recorded in the
//! torrent metadata. Complete files can be listed by name, hard-linked into
//! a separate directory, or summarized as a selection list for a downstream
//! client.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Result};

use btcheck::check::{self, CheckConfig};
use btcheck::file_ops;
use btcheck::materialize::OutputDir;
use btcheck::metainfo::Metainfo;
use btcheck::reporters::{CheckReporter, ConsoleCheckReporter, SilentCheckReporter};
use btcheck::selection;

fn main() -> Result<()> {
    let matches = btcheck::parse_args();
    let quiet = matches.get_flag("quiet");
    let config = CheckConfig::from_args(&matches);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(match () {
        _ if quiet => "error",
        _ if config.verbose => "info",
        _ => "warn",
    }))
    .format_timestamp(None)
    .format_module_path(false)
    .format_target(false)
    .init();

    let content_dir = matches
        .get_one::<PathBuf>("content-dir")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));
    let output = matches.get_one::<PathBuf>("link-dir").map(OutputDir::new);
    let selection_mode = matches.get_flag("selection");

    let inputs: Vec<PathBuf> = matches
        .get_many::<PathBuf>("torrents")
        .expect("torrents are required")
        .cloned()
        .collect();
    let torrents = file_ops::collect_torrent_files(&inputs);
    if torrents.is_empty() {
        bail!("no torrent files found in the given inputs");
    }

    let ok = if quiet {
        run(
            &torrents,
            &content_dir,
            &config,
            output.as_ref(),
            selection_mode,
            &SilentCheckReporter::new(),
        )
    } else {
        run(
            &torrents,
            &content_dir,
            &config,
            output.as_ref(),
            selection_mode,
            &ConsoleCheckReporter::new(config.verbose, !selection_mode),
        )
    };

    if !ok {
        process::exit(1);
    }
    Ok(())
}

/// Check each torrent in turn; returns false if anything failed to parse or
/// any checked file is incomplete
fn run<R: CheckReporter>(
    torrents: &[PathBuf],
    content_dir: &Path,
    config: &CheckConfig,
    output: Option<&OutputDir>,
    selection_mode: bool,
    reporter: &R,
) -> bool {
    let mut ok = true;

    for torrent in torrents {
        // A metadata file that fails to load is fatal for its own run only
        let metainfo = match Metainfo::from_file(torrent) {
            Ok(metainfo) => metainfo,
            Err(err) => {
                log::error!("{}: {}", torrent.display(), err);
                ok = false;
                continue;
            }
        };

        let results = check::check_torrent(&metainfo, content_dir, config, output, reporter);

        if selection_mode {
            println!("{}", selection::collapse_ranges(&results.complete_ordinals()));
        }
        if !results.all_complete() {
            ok = false;
        }
    }

    ok
}
