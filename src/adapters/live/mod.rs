//! Live adapters backed by the operating system.

pub mod privilege;
pub mod provisioner;

pub use privilege::SetuidEscalator;
pub use provisioner::ProcessProvisioner;
