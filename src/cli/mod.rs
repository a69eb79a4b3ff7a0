use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<()> {
    run::run(args)
}
