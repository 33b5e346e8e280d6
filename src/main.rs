use std::str::FromStr;

use clap::Parser;
use eyre::eyre;
use scansieve::{
    cli::Cli, config::Config, exclude, modes::Mode, runner, tracing::init_tracing,
};
use tracing::info;

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    let mode = Mode::from_str(&cli.mode).map_err(|()| {
        eyre!(
            "invalid mode {:?}, expected one of 'filter', 'clean', 'quote', 'cidr'",
            cli.mode
        )
    })?;
    let config = Config::new(cli, mode);

    init_tracing(&config);
    info!("logging initialized");

    let deny = if mode == Mode::Clean {
        let deny = exclude::deny_list(config.exclude_file.as_deref())?;
        println!(
            "denying {} ips ({} ranges)",
            deny.count(),
            deny.ranges().len()
        );
        deny
    } else {
        Default::default()
    };

    println!(
        "running {mode:?} on {}",
        config.input.as_os_str().to_string_lossy()
    );
    let stats = runner::run(&config, &deny)?;

    println!(
        "read {} lines, wrote {} to {}",
        stats.lines_in,
        stats.lines_out,
        config.output.as_os_str().to_string_lossy()
    );
    info!(
        "Finished {mode:?}: {} lines in, {} lines out",
        stats.lines_in, stats.lines_out
    );

    Ok(())
}
