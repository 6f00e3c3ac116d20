//! User-declared job policy.
//!
//! Every field is optional on the wire; the accessors below resolve the
//! defaults so evaluators never have to.

use serde::{Deserialize, Serialize};

/// What to do when a job fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RestartPolicy {
    Never,
    FromSavepointOnFailure,

    /// A policy name this build does not understand. Never restarts.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSpec {
    /// Absent means "never restart".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart_policy: Option<RestartPolicy>,

    /// Oldest savepoint (in seconds) still usable for recovery.
    /// Absent means only a final savepoint is usable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_state_age_to_restore_seconds: Option<u32>,

    /// Take a savepoint before applying an update. Defaults to true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_savepoint_on_update: Option<bool>,

    /// Savepoint explicitly chosen by the user to start from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_savepoint: Option<String>,
}

impl JobSpec {
    pub fn with_restart_policy(mut self, policy: RestartPolicy) -> Self {
        self.restart_policy = Some(policy);
        self
    }

    pub fn with_max_state_age(mut self, seconds: u32) -> Self {
        self.max_state_age_to_restore_seconds = Some(seconds);
        self
    }

    pub fn with_take_savepoint_on_update(mut self, take: bool) -> Self {
        self.take_savepoint_on_update = Some(take);
        self
    }

    pub fn with_from_savepoint(mut self, location: impl Into<String>) -> Self {
        self.from_savepoint = Some(location.into());
        self
    }

    pub fn restart_policy(&self) -> RestartPolicy {
        self.restart_policy.unwrap_or(RestartPolicy::Never)
    }

    pub fn restarts_from_savepoint_on_failure(&self) -> bool {
        self.restart_policy() == RestartPolicy::FromSavepointOnFailure
    }

    pub fn takes_savepoint_on_update(&self) -> bool {
        self.take_savepoint_on_update.unwrap_or(true)
    }

    /// `from_savepoint` is set to something other than whitespace.
    pub fn has_explicit_from_savepoint(&self) -> bool {
        self.from_savepoint
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }
}
