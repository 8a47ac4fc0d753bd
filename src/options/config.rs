use serde::Deserialize;

/// The config file. Every field is optional; anything unset falls back to
/// the command line or the built-in default.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    pub(crate) flags: Option<ConfigFlags>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct ConfigFlags {
    pub(crate) human_readable: Option<bool>,
    pub(crate) graph_length: Option<u64>,
    pub(crate) procfs: Option<String>,
}
