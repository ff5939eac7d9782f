use std::path::{Path, PathBuf};

use clap::ArgMatches;

use crate::evaluator::DEFAULT_MAX_DEPTH;

/// Settings for a run, assembled from command line args and their
/// environment variable fallbacks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub max_depth: usize,
    pub debug: bool,
    pub show_tokens: bool,
    /// `None` disables REPL history.
    pub history_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            debug: false,
            show_tokens: false,
            history_path: default_history_path(),
        }
    }
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let max_depth =
            matches.get_one::<usize>("max_depth").copied().unwrap_or(DEFAULT_MAX_DEPTH);

        let history_path = if matches.get_flag("no_history") {
            None
        } else if let Some(path) = matches.get_one::<String>("history_path") {
            expand_home(path)
        } else {
            default_history_path()
        };

        Self {
            max_depth,
            debug: matches.get_flag("debug"),
            show_tokens: matches.get_flag("tokens"),
            history_path,
        }
    }
}

/// ~/.config/intcalc/repl-history, if the home directory is known.
pub fn default_history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("intcalc").join("repl-history"))
}

/// Replace a leading `~` with the home directory. Returns `None` if
/// that's needed but the home directory can't be determined.
fn expand_home(path: &str) -> Option<PathBuf> {
    match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => {
            let rest = rest.trim_start_matches('/');
            dirs::home_dir().map(|home| home.join(rest))
        }
        _ => Some(Path::new(path).to_path_buf()),
    }
}
