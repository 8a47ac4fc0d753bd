// Argument parsing via clap.
//
// Note that you probably want to keep this as a single file so the build script doesn't
// trip all over itself.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "memviz [OPTIONS] [PROGRAM]";

/// The arguments for memviz.
#[derive(Parser, Debug, Default)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[arg(
        short = 'H',
        long = "human-readable",
        help = "Also shows sizes in binary units (KiB, MiB, GiB, TiB).",
        long_help = "Also shows sizes in binary units (KiB, MiB, GiB, TiB) next to the raw \
                    kilobyte counts. Sizes are shown with two decimal places."
    )]
    pub human_readable: bool,

    #[arg(
        short = 'l',
        long,
        value_name = "N",
        help = "Sets the length of each usage bar. Defaults to 20.",
        long_help = "Sets the number of characters in each usage bar. Must be greater than 0, \
                    and defaults to 20."
    )]
    pub length: Option<usize>,

    #[arg(
        short = 'C',
        long,
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = indoc! {
            "Sets the location of the config file. Expects a config file in the TOML
            format, for example:

            [flags]
            human_readable = true
            graph_length = 30

            If not set, memviz looks in the default config directory and skips the
            file if it isn't there."
        }
    )]
    pub config: Option<String>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Reads from a different procfs mount. Defaults to /proc.",
        long_help = "Reads memory data from a procfs mounted somewhere other than /proc. When \
                    set, processes are found by scanning this directory rather than by asking \
                    'pidof'."
    )]
    pub procfs: Option<String>,

    #[arg(
        value_name = "PROGRAM",
        help = "Shows memory usage for every process of this program.",
        long_help = "Shows resident memory usage for every running process of this program, \
                    and their total. If not given, system-wide memory usage is shown instead."
    )]
    pub program: Option<String>,
}

/// Returns the parsed arguments from the command line.
pub fn get_args() -> Args {
    Args::parse()
}

/// Returns the underlying [`Command`], e.g. for generating completions.
pub fn build_cmd() -> Command {
    Args::command()
}
