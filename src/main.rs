//! Binary entrypoint for the `task-bridge` setuid executable.

use std::process::ExitCode;

fn main() -> ExitCode {
    match task_bridge::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
