use std::path::PathBuf;

use crate::{cli::Cli, modes::Mode};

/// Everything a run needs, built once at startup and passed by reference.
#[derive(Clone)]
pub struct Config {
    pub mode: Mode,

    pub input: PathBuf,
    pub output: PathBuf,

    /// An address whose port count reaches this limit is dropped entirely in
    /// filter mode. Defaults to 100.
    pub port_limit: usize,

    /// Optional file of extra deny-list entries for clean mode, parsed by
    /// [`crate::exclude`]. The built-in deny list always applies.
    pub exclude_file: Option<PathBuf>,

    pub logging_dir: Option<PathBuf>,
}

impl Config {
    pub fn new(cli: Cli, mode: Mode) -> Self {
        Self {
            mode,
            input: cli.input,
            output: cli.output,
            port_limit: cli.port_limit,
            exclude_file: cli.exclude,
            logging_dir: cli.logging_dir,
        }
    }
}
