//! The elevate-then-delegate core.
//!
//! Control flow is a single pass: `Validating → {Rejected | Elevating →
//! Invoking → {Success | ProvisionerFailure}}`. Validation has already
//! happened by the time this module is reachable, because [`create_task`]
//! only accepts a [`TaskRequest`].

use crate::error::BridgeError;
use crate::ports::privilege::PrivilegeEscalator;
use crate::ports::provisioner::TaskProvisioner;
use crate::request::TaskRequest;

/// Where the deployed task provisioner lives. Fixed at compile time; caller
/// input never influences what gets executed, only the arguments it sees.
pub const PROVISIONER_PATH: &str = "/srv/peerstash/scripts/create_task.sh";

/// Elevates privilege and delegates the validated request to the
/// provisioner, waiting for it to complete.
///
/// Elevation happens exactly once, immediately before the provisioner
/// invocation; nothing caller-controlled runs in between.
///
/// # Errors
///
/// [`BridgeError::Elevation`] when the root identity cannot be acquired (no
/// provisioner invocation occurs), [`BridgeError::ProvisionerStart`] when
/// the provisioner cannot be spawned, and [`BridgeError::ProvisionerFailed`]
/// when it runs but reports failure.
pub fn create_task(
    request: &TaskRequest,
    privilege: &dyn PrivilegeEscalator,
    provisioner: &dyn TaskProvisioner,
) -> Result<(), BridgeError> {
    privilege.elevate().map_err(BridgeError::Elevation)?;
    let outcome = provisioner
        .provision(request)
        .map_err(BridgeError::ProvisionerStart)?;
    if outcome.success() {
        Ok(())
    } else {
        Err(BridgeError::ProvisionerFailed(outcome.exit_code))
    }
}
