//! Live privilege escalation via `setuid(0)`.

use crate::ports::privilege::PrivilegeEscalator;

/// Adopts the root identity through the setuid bit on the installed binary.
pub struct SetuidEscalator;

impl PrivilegeEscalator for SetuidEscalator {
    #[allow(unsafe_code)]
    fn elevate(&self) -> std::io::Result<()> {
        // SAFETY: setuid takes no pointers and only mutates this process's
        // credentials; the result is checked below.
        let rc = unsafe { libc::setuid(0) };
        if rc == 0 {
            Ok(())
        } else {
            Err(std::io::Error::last_os_error())
        }
    }
}
