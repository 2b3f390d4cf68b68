mod cli;

use clap::Parser;
use cli::output::{AlreadyReported, print_error, should_use_color};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::args::Cli::parse();
    let use_color = should_use_color(cli.global.no_color);

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.is::<AlreadyReported>() {
                print_error(e.as_ref(), use_color);
            }
            ExitCode::FAILURE
        }
    }
}
