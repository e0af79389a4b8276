//! Resolution records
//!
//! What happened to each candidate provider during one invocation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Position of a candidate in its chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateRole {
    /// The configured primary provider (chain index 0)
    Primary,
    /// Any later candidate
    Fallback,
}

impl CandidateRole {
    /// Role of the candidate at `index`
    pub fn at(index: usize) -> Self {
        if index == 0 {
            Self::Primary
        } else {
            Self::Fallback
        }
    }
}

impl fmt::Display for CandidateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

/// Step at which a candidate failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureStage {
    /// The name is not registered for the capability
    Lookup,
    /// The provider could not be initialized
    Construction,
    /// The capability call itself failed
    Operation,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lookup => f.write_str("unknown provider"),
            Self::Construction => f.write_str("construction failed"),
            Self::Operation => f.write_str("operation failed"),
        }
    }
}

/// Reporting label attached to a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorClass {
    /// Quota or rate-limit condition expected to clear on its own
    Transient,
    /// Anything else
    Unknown,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transient => f.write_str("transient"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// Why a candidate did not serve the invocation
#[derive(Debug)]
pub struct CandidateFailure {
    /// Where it failed
    pub stage: FailureStage,
    /// Classification of the error
    pub class: ErrorClass,
    /// The error itself
    pub error: Error,
}

impl fmt::Display for CandidateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.stage, self.class, self.error)
    }
}

/// Outcome of one candidate attempt
#[derive(Debug)]
pub enum AttemptStatus {
    /// The candidate produced the result
    Succeeded,
    /// The candidate failed and the chain moved on
    Failed(CandidateFailure),
}

/// One entry of an invocation's attempt history
#[derive(Debug)]
pub struct AttemptRecord {
    /// Position in the chain
    pub index: usize,
    /// Candidate provider name
    pub provider: String,
    /// Primary or fallback
    pub role: CandidateRole,
    /// What happened
    pub status: AttemptStatus,
}

impl AttemptRecord {
    /// Record a successful attempt
    pub fn succeeded(index: usize, provider: impl Into<String>) -> Self {
        Self {
            index,
            provider: provider.into(),
            role: CandidateRole::at(index),
            status: AttemptStatus::Succeeded,
        }
    }

    /// Record a failed attempt
    pub fn failed(index: usize, provider: impl Into<String>, failure: CandidateFailure) -> Self {
        Self {
            index,
            provider: provider.into(),
            role: CandidateRole::at(index),
            status: AttemptStatus::Failed(failure),
        }
    }

    /// Whether this attempt served the invocation
    pub fn is_success(&self) -> bool {
        matches!(self.status, AttemptStatus::Succeeded)
    }

    /// The failure, if any
    pub fn failure(&self) -> Option<&CandidateFailure> {
        match &self.status {
            AttemptStatus::Failed(failure) => Some(failure),
            AttemptStatus::Succeeded => None,
        }
    }
}

impl fmt::Display for AttemptRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            AttemptStatus::Succeeded => write!(f, "{} ({}): succeeded", self.provider, self.role),
            AttemptStatus::Failed(failure) => {
                write!(f, "{} ({}): {}", self.provider, self.role, failure)
            }
        }
    }
}
