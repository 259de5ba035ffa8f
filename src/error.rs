//! Error taxonomy and exit-status mapping.
//!
//! Every error is terminal for the invocation. The variants mirror the four
//! failure classes a caller can branch on: usage, validation, elevation, and
//! provisioner failure.

use thiserror::Error;

/// The field of a task request that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The task name argument.
    Name,
    /// The backup schedule argument.
    Schedule,
    /// The prune schedule argument.
    PruneSchedule,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => f.write_str("NAME"),
            Self::Schedule => f.write_str("SCHEDULE"),
            Self::PruneSchedule => f.write_str("PRUNE_SCHEDULE"),
        }
    }
}

/// An error raised anywhere along the bridge's single pass.
///
/// Validation messages name the rule that was violated but never echo the
/// rejected value itself.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The invocation did not supply exactly three arguments.
    #[error("{0}")]
    Usage(String),

    /// An argument failed its grammar; no privileged action was taken.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Which argument was rejected.
        field: Field,
        /// The grammar rule it violated.
        reason: String,
    },

    /// The process could not acquire the root identity.
    #[error("could not elevate to root ({0}); is the setuid bit set?")]
    Elevation(std::io::Error),

    /// The provisioner binary could not be spawned at all.
    #[error("could not start task provisioner ({0})")]
    ProvisionerStart(std::io::Error),

    /// The provisioner ran but reported failure. `None` means it was
    /// terminated by a signal and produced no exit code.
    #[error("task provisioner failed{}", exit_label(.0))]
    ProvisionerFailed(Option<i32>),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " (killed by signal)".to_string(),
    }
}

impl BridgeError {
    /// The process exit status for this error.
    ///
    /// Usage and validation errors exit 1, elevation failure exits 3, and a
    /// provisioner failure propagates the provisioner's own code when it is
    /// representable, falling back to 2.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) | Self::Validation { .. } => 1,
            Self::Elevation(_) => 3,
            Self::ProvisionerStart(_) => 2,
            Self::ProvisionerFailed(code) => {
                code.and_then(|c| u8::try_from(c).ok()).unwrap_or(2)
            }
        }
    }
}
