//! Fallback policy

use reel_domain::value_objects::CandidateFailure;

/// Decides whether a candidate failure advances the chain
pub trait FallbackPolicy: Send + Sync {
    /// `true` to try the next candidate, `false` to stop the chain
    fn should_fall_back(&self, failure: &CandidateFailure) -> bool;
}

/// Every failure is fallback-eligible
#[derive(Debug, Clone, Copy, Default)]
pub struct FallBackOnAnyError;

impl FallbackPolicy for FallBackOnAnyError {
    fn should_fall_back(&self, _failure: &CandidateFailure) -> bool {
        true
    }
}
