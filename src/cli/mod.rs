use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;

pub use args::{Arguments, CheckCommand, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Check(cmd)) => commands::check::check(cmd),
        Some(Command::Words) => commands::words::words(),
        Some(Command::Init) => commands::init::init(),
        None => unreachable!("with_command_or_help returned Some without a command"),
    }
}
