use std::process::ExitCode;

use clap::Parser;
use lokey::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match lokey::cli::run_cli(args) {
        Ok(()) => ExitStatus::Success.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
