//! Events emitted by the fallback executor

use serde::{Deserialize, Serialize};

use crate::value_objects::{CandidateRole, CapabilityName, ErrorClass, FailureStage};

/// One step of a capability invocation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ResolutionEvent {
    /// The chain for an invocation was computed
    ChainResolved {
        /// Capability being invoked
        capability: CapabilityName,
        /// Candidates in order
        chain: Vec<String>,
    },
    /// A candidate is about to be tried
    AttemptStarted {
        /// Capability being invoked
        capability: CapabilityName,
        /// Candidate provider name
        candidate: String,
        /// Position in the chain
        index: usize,
        /// Number of candidates in the chain
        chain_len: usize,
        /// Whether the cached instance is reused instead of constructed
        reused_instance: bool,
    },
    /// A candidate failed and the chain moves on
    CandidateFailed {
        /// Capability being invoked
        capability: CapabilityName,
        /// Candidate provider name
        candidate: String,
        /// Position in the chain
        index: usize,
        /// Number of candidates in the chain
        chain_len: usize,
        /// Where the candidate failed
        stage: FailureStage,
        /// Classification of the error
        class: ErrorClass,
        /// Rendered error
        message: String,
    },
    /// A candidate served the invocation
    CandidateSucceeded {
        /// Capability being invoked
        capability: CapabilityName,
        /// Candidate provider name
        candidate: String,
        /// Position in the chain
        index: usize,
        /// Number of candidates in the chain
        chain_len: usize,
        /// Primary or fallback
        role: CandidateRole,
    },
    /// Every candidate failed
    ChainExhausted {
        /// Capability being invoked
        capability: CapabilityName,
        /// Number of candidates tried
        attempts: usize,
        /// Number of candidates in the chain
        chain_len: usize,
        /// Rendered last error
        last_error: String,
    },
}

impl ResolutionEvent {
    /// Capability the event belongs to
    pub fn capability(&self) -> CapabilityName {
        match self {
            Self::ChainResolved { capability, .. }
            | Self::AttemptStarted { capability, .. }
            | Self::CandidateFailed { capability, .. }
            | Self::CandidateSucceeded { capability, .. }
            | Self::ChainExhausted { capability, .. } => *capability,
        }
    }

    /// Candidate the event refers to, if it refers to a single one
    pub fn candidate(&self) -> Option<&str> {
        match self {
            Self::AttemptStarted { candidate, .. }
            | Self::CandidateFailed { candidate, .. }
            | Self::CandidateSucceeded { candidate, .. } => Some(candidate),
            Self::ChainResolved { .. } | Self::ChainExhausted { .. } => None,
        }
    }
}
