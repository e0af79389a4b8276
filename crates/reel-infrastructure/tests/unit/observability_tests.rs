//! Observer Tests

use reel_application::ports::ResolutionObserver;
use reel_domain::events::ResolutionEvent;
use reel_domain::value_objects::{CapabilityName, ErrorClass, FailureStage};
use reel_infrastructure::observability::{BroadcastObserver, TracingObserver};

fn failed_event() -> ResolutionEvent {
    ResolutionEvent::CandidateFailed {
        capability: CapabilityName::Ai,
        candidate: "groq".into(),
        index: 0,
        chain_len: 2,
        stage: FailureStage::Operation,
        class: ErrorClass::Transient,
        message: "groq error: rate limit exceeded (429)".into(),
    }
}

#[test]
fn test_broadcast_delivers_to_every_subscriber() {
    let observer = BroadcastObserver::with_capacity(8);
    let mut first = observer.subscribe();
    let mut second = observer.subscribe();
    assert_eq!(observer.subscriber_count(), 2);

    observer.notify(&failed_event());

    assert_eq!(first.try_recv().unwrap(), failed_event());
    assert_eq!(second.try_recv().unwrap(), failed_event());
}

#[test]
fn test_broadcast_without_subscribers_drops_events() {
    let observer = BroadcastObserver::new();
    observer.notify(&failed_event());

    let mut late = observer.subscribe();
    assert!(late.try_recv().is_err());
}

#[test]
fn test_tracing_observer_handles_every_event() {
    let observer = TracingObserver;
    observer.notify(&ResolutionEvent::ChainResolved {
        capability: CapabilityName::Content,
        chain: vec!["reddit".into(), "quotes".into()],
    });
    observer.notify(&failed_event());
    observer.notify(&ResolutionEvent::ChainExhausted {
        capability: CapabilityName::Ai,
        attempts: 1,
        chain_len: 2,
        last_error: "boom".into(),
    });
}
