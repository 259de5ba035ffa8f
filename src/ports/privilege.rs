//! Privilege escalation port.

/// Switches the current process to the privileged identity the task
/// provisioner requires.
///
/// Abstracting the syscall keeps the ordered state machine testable: unit
/// tests substitute a recording implementation and assert that elevation is
/// never reached for a rejected request.
pub trait PrivilegeEscalator {
    /// Irreversibly adopts the root identity for this process.
    ///
    /// # Errors
    ///
    /// Returns the OS error when the identity change is refused, typically
    /// because the executable lacks its setuid bit.
    fn elevate(&self) -> std::io::Result<()>;
}
