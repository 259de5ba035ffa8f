//! Task provisioner port.

use crate::request::TaskRequest;

/// The reported result of one provisioner run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisionOutcome {
    /// The child's exit code, or `None` when it was killed by a signal.
    pub exit_code: Option<i32>,
}

impl ProvisionOutcome {
    /// Returns `true` when the provisioner reported success.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Invokes the external task provisioner with a validated request.
///
/// The provisioner registers the recurring backup and prune jobs; the bridge
/// treats it as an opaque black box and only relays its status.
pub trait TaskProvisioner {
    /// Runs the provisioner to completion and returns its reported status.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the provisioner process cannot be started
    /// at all.
    fn provision(&self, request: &TaskRequest) -> std::io::Result<ProvisionOutcome>;
}
