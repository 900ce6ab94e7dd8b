//! Configuration for completeness checking

/// Configuration for a check run
///
/// Passed explicitly into the checker and verifier; there is no ambient
/// global state. Verbosity only shapes notifications, never decisions.
#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    /// Trust files already present at the link directory without hashing
    pub cheat: bool,
    /// Only report files that were not already materialized
    pub only_new: bool,
    /// Emit per-piece and per-file progress notifications
    pub verbose: bool,
}

impl CheckConfig {
    pub fn new(cheat: bool, only_new: bool, verbose: bool) -> Self {
        Self {
            cheat,
            only_new,
            verbose,
        }
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        Self::new(
            matches.get_flag("cheat"),
            matches.get_flag("only-new"),
            matches.get_flag("verbose"),
        )
    }
}
