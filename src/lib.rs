//! Core library for the `task-bridge` setuid binary.
//!
//! The bridge lets an unprivileged caller register a scheduled backup task:
//! it validates the caller's three arguments, elevates to root, and invokes
//! the external task provisioner with a structured argument vector. All
//! validation completes before any privileged step is reachable.

pub mod adapters;
pub mod bridge;
pub mod cli;
pub mod error;
pub mod grammar;
pub mod ports;
pub mod request;

use clap::Parser;
use clap::error::ErrorKind;

use crate::adapters::live::{ProcessProvisioner, SetuidEscalator};
use crate::error::BridgeError;
use crate::request::TaskRequest;

/// Run the bridge with the provided arguments.
///
/// `--help` and `--version` print to stdout and succeed; everything else
/// follows the validate → elevate → invoke pass.
///
/// # Errors
///
/// Returns a [`BridgeError`] describing which stage failed; its
/// [`exit_code`](BridgeError::exit_code) is the status to exit with.
pub fn run<I, T>(args: I) -> Result<(), BridgeError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(BridgeError::Usage(err.to_string())),
    };

    let request = TaskRequest::parse(cli.name, cli.schedule, cli.prune_schedule)?;
    bridge::create_task(
        &request,
        &SetuidEscalator,
        &ProcessProvisioner::new(bridge::PROVISIONER_PATH),
    )
}
