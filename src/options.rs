//! How memviz gets its options, from the command line and from a config
//! file.

pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use self::error::{OptionError, OptionResult};
use self::{args::Args, config::Config};
use crate::{canvas::bar_graph::DEFAULT_GRAPH_LENGTH, collection::ProcFs};

/// Where the config file is looked for if none is given, relative to the
/// user's config directory.
pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "memviz/memviz.toml";

/// How sizes and bars are shown. This doesn't change once set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub human_readable: bool,
    pub graph_length: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            human_readable: false,
            graph_length: DEFAULT_GRAPH_LENGTH,
        }
    }
}

/// Everything a single run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemvizOptions {
    pub display: DisplayOptions,
    pub procfs: ProcFs,

    /// The program to report on, or `None` for system-wide memory.
    pub program: Option<String>,
}

/// Returns the config path to use. If `override_config_path` is set, that
/// is used; otherwise the default location in the user's config directory,
/// if there is one.
pub fn get_config_path(override_config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(conf_loc) = override_config_path {
        return Some(conf_loc.to_path_buf());
    }

    dirs::config_dir().map(|path| path.join(DEFAULT_CONFIG_FILE_LOCATION))
}

/// Reads the config file at `config_path`. A missing file is only an error
/// if it was asked for explicitly; memviz never creates one.
pub fn get_config(config_path: Option<&Path>, is_explicit: bool) -> OptionResult<Config> {
    let Some(path) = config_path else {
        return Ok(Config::default());
    };

    if !path.exists() {
        return if is_explicit {
            Err(OptionError::config(format!(
                "The config file '{}' does not exist.",
                path.display()
            )))
        } else {
            Ok(Config::default())
        };
    }

    crate::info!("Reading config from {}", path.display());
    let config_string = fs::read_to_string(path)?;

    Ok(toml_edit::de::from_str(&config_string)?)
}

/// Builds the options for a run from the arguments, reading the config file
/// they point to (or the default one).
pub fn init(args: Args) -> OptionResult<MemvizOptions> {
    let override_config_path = args.config.as_deref().map(Path::new);
    let config_path = get_config_path(override_config_path);
    let config = get_config(config_path.as_deref(), override_config_path.is_some())?;

    merge(args, &config)
}

/// Merges arguments over the config file over the defaults.
pub fn merge(args: Args, config: &Config) -> OptionResult<MemvizOptions> {
    let flags = config.flags.clone().unwrap_or_default();

    let human_readable = args.human_readable || flags.human_readable.unwrap_or(false);
    let graph_length = get_graph_length(args.length, flags.graph_length)?;

    let procfs = match args.procfs.or(flags.procfs) {
        Some(root) => ProcFs::new(root),
        None => ProcFs::default(),
    };

    Ok(MemvizOptions {
        display: DisplayOptions {
            human_readable,
            graph_length,
        },
        procfs,
        program: args.program,
    })
}

fn get_graph_length(arg: Option<usize>, config: Option<u64>) -> OptionResult<usize> {
    match (arg, config) {
        (Some(0), _) => Err(OptionError::arg("'--length' must be greater than 0.")),
        (Some(length), _) => Ok(length),
        (None, Some(0)) => Err(OptionError::config("'graph_length' must be greater than 0.")),
        (None, Some(length)) => usize::try_from(length).map_err(|_| {
            OptionError::config(format!("'graph_length' was set with an invalid value '{length}'."))
        }),
        (None, None) => Ok(DEFAULT_GRAPH_LENGTH),
    }
}
