//! Resolution observers
//!
//! | Observer | Description |
//! |----------|-------------|
//! | [`TracingObserver`] | Writes each resolution step to the log |
//! | [`BroadcastObserver`] | Republishes steps on a tokio broadcast channel |

use std::sync::Arc;

use reel_application::ports::ResolutionObserver;
use reel_domain::events::ResolutionEvent;
use reel_domain::value_objects::{CandidateRole, ErrorClass};
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use crate::constants::EVENT_CHANNEL_CAPACITY;

/// Observer logging resolution steps through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ResolutionObserver for TracingObserver {
    fn notify(&self, event: &ResolutionEvent) {
        match event {
            ResolutionEvent::ChainResolved { capability, chain } => {
                debug!(capability = %capability, chain = ?chain, "Resolution chain computed");
            }
            ResolutionEvent::AttemptStarted {
                capability,
                candidate,
                index,
                chain_len,
                reused_instance,
            } => {
                info!(
                    capability = %capability,
                    candidate = %candidate,
                    reused = reused_instance,
                    "Trying {} provider {} ({}/{})",
                    capability,
                    candidate,
                    index + 1,
                    chain_len
                );
            }
            ResolutionEvent::CandidateFailed {
                capability,
                candidate,
                index,
                chain_len,
                stage,
                class,
                message,
            } => {
                let quota = *class == ErrorClass::Transient;
                warn!(
                    capability = %capability,
                    candidate = %candidate,
                    stage = %stage,
                    quota = quota,
                    "{} provider {} failed ({}/{}): {}",
                    capability,
                    candidate,
                    index + 1,
                    chain_len,
                    message
                );
            }
            ResolutionEvent::CandidateSucceeded {
                capability,
                candidate,
                role,
                ..
            } => {
                let label = if *role == CandidateRole::Fallback {
                    "Fallback "
                } else {
                    ""
                };
                info!(
                    capability = %capability,
                    candidate = %candidate,
                    role = %role,
                    "{}{} provider {} succeeded",
                    label,
                    capability,
                    candidate
                );
            }
            ResolutionEvent::ChainExhausted {
                capability,
                attempts,
                chain_len,
                last_error,
            } => {
                error!(
                    capability = %capability,
                    attempts = attempts,
                    chain_len = chain_len,
                    "All {} providers failed. Last error: {}",
                    capability,
                    last_error
                );
            }
        }
    }
}

/// Observer publishing every event to broadcast subscribers
///
/// Events are dropped when nobody is subscribed; slow subscribers lag
/// instead of blocking the invocation.
#[derive(Clone)]
pub struct BroadcastObserver {
    sender: Arc<broadcast::Sender<ResolutionEvent>>,
}

impl BroadcastObserver {
    /// Create with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(EVENT_CHANNEL_CAPACITY)
    }

    /// Create with a custom per-subscriber capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Receive every event published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<ResolutionEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionObserver for BroadcastObserver {
    fn notify(&self, event: &ResolutionEvent) {
        if self.sender.receiver_count() > 0 {
            // Only fails when every receiver was dropped in between
            let _ = self.sender.send(event.clone());
        }
    }
}
