//! Port traits defining the bridge's privileged boundaries.
//!
//! Each trait represents one boundary the core crosses: acquiring the root
//! identity, and invoking the external task provisioner. Implementations
//! live in `src/adapters/`.

pub mod privilege;
pub mod provisioner;

pub use privilege::PrivilegeEscalator;
pub use provisioner::{ProvisionOutcome, TaskProvisioner};
