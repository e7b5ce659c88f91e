//! CLI entry point for the dice mosaic tool

use clap::Parser;
use dicemosaic::io::cli::{Cli, MosaicRunner, normalize_legacy_flags};
use dicemosaic::io::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_legacy_flags(std::env::args_os()));
    init_logging(cli.quiet);
    let runner = MosaicRunner::new(cli);

    match runner.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
