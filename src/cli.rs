use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "scansieve")]
#[command(about = "Curates line-oriented scan exports before further recon.")]
pub struct Cli {
    /// Path to the input file.
    #[arg(long)]
    pub input: PathBuf,

    /// Path to the output file, including the file name.
    #[arg(long)]
    pub output: PathBuf,

    /// Mode of operation: 'filter', 'clean', 'quote', or 'cidr'.
    #[arg(long)]
    pub mode: String,

    /// Limit on the number of open ports per IP (filter mode).
    #[arg(short = 'l', long = "limit", default_value_t = 100)]
    pub port_limit: usize,

    /// Extra deny-list file for clean mode. One entry per line, either a
    /// single address, a CIDR like 1.2.3.0/24, or a range like
    /// 1.2.3.4-1.2.3.9. Lines starting with # are ignored.
    #[arg(long)]
    pub exclude: Option<PathBuf>,

    /// If set, debug logs are also written to a daily rolling file in this
    /// directory.
    #[arg(long)]
    pub logging_dir: Option<PathBuf>,
}
