//! The validated task request.
//!
//! `TaskRequest` is the only type the elevation and invocation path accepts,
//! so raw argument strings cannot reach a privileged context: the one
//! constructor validates every field, and the fields are immutable after
//! construction.

use crate::error::{BridgeError, Field};
use crate::grammar;

/// A validated `(name, schedule, prune_schedule)` triple.
///
/// Lives for a single bridge invocation; never persisted, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRequest {
    name: String,
    schedule: String,
    prune_schedule: String,
}

impl TaskRequest {
    /// Validates the three caller-supplied arguments and builds the request.
    ///
    /// Validation is syntactic and side-effect-free; the inputs are kept
    /// byte-for-byte when accepted.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Validation`] naming the first field that fails
    /// its grammar.
    pub fn parse(
        name: String,
        schedule: String,
        prune_schedule: String,
    ) -> Result<Self, BridgeError> {
        grammar::check_name(&name).map_err(|reason| BridgeError::Validation {
            field: Field::Name,
            reason,
        })?;
        grammar::check_schedule(&schedule).map_err(|reason| BridgeError::Validation {
            field: Field::Schedule,
            reason,
        })?;
        grammar::check_schedule(&prune_schedule).map_err(|reason| BridgeError::Validation {
            field: Field::PruneSchedule,
            reason,
        })?;
        Ok(Self {
            name,
            schedule,
            prune_schedule,
        })
    }

    /// The task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The backup schedule.
    #[must_use]
    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    /// The prune schedule.
    #[must_use]
    pub fn prune_schedule(&self) -> &str {
        &self.prune_schedule
    }
}
