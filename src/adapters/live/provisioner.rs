//! Live provisioner adapter spawning the external binary.

use std::path::PathBuf;
use std::process::Command;

use crate::ports::provisioner::{ProvisionOutcome, TaskProvisioner};
use crate::request::TaskRequest;

/// Runs the task provisioner as a child process.
///
/// The three request values occupy their own argv slots, so shell
/// metacharacters are inert regardless of the validation grammar: no command
/// interpreter ever parses them.
pub struct ProcessProvisioner {
    path: PathBuf,
}

impl ProcessProvisioner {
    /// Creates an adapter that will execute the binary at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TaskProvisioner for ProcessProvisioner {
    fn provision(&self, request: &TaskRequest) -> std::io::Result<ProvisionOutcome> {
        let status = Command::new(&self.path)
            .arg(request.name())
            .arg(request.schedule())
            .arg(request.prune_schedule())
            .status()?;
        Ok(ProvisionOutcome {
            exit_code: status.code(),
        })
    }
}
