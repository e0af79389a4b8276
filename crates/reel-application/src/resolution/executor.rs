//! Fallback executor
//!
//! `ProviderResolver` drives one logical capability call across its
//! resolution chain. Candidates are tried strictly in order and one at a
//! time; each gets exactly one attempt per invocation. A candidate whose
//! provider is already cached is reused, otherwise it is constructed through
//! the registry and cached before its operation runs.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reel_domain::error::{Error, Result};
use reel_domain::events::ResolutionEvent;
use reel_domain::ports::Capability;
use reel_domain::value_objects::{
    AttemptRecord, CandidateFailure, CandidateRole, CapabilityName, FailureStage,
};
use tracing::debug;

use super::{
    ErrorClassifier, FallBackOnAnyError, FallbackPolicy, InstanceCache, QuotaPatternClassifier,
    ResolutionChain,
};
use crate::ports::infrastructure::{CapabilityConfigSource, NullObserver, ResolutionObserver};
use crate::ports::registry::ProviderRegistry;

/// Per-invocation options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvokeOptions {
    /// Construct every candidate anew even when its instance is cached
    pub force_reload: bool,
}

impl InvokeOptions {
    /// Options requesting a forced reload
    pub fn force_reload() -> Self {
        Self { force_reload: true }
    }
}

/// Result of a successful invocation with its full attempt history
#[derive(Debug)]
pub struct InvocationOutcome<T> {
    /// Capability that was invoked
    pub capability: CapabilityName,
    /// Provider that produced the value
    pub provider: String,
    /// Chain position of that provider
    pub index: usize,
    /// The operation's result
    pub value: T,
    /// Every attempt in chain order, the successful one last
    pub attempts: Vec<AttemptRecord>,
}

impl<T> InvocationOutcome<T> {
    /// Whether the primary or a fallback served the call
    pub fn role(&self) -> CandidateRole {
        CandidateRole::at(self.index)
    }

    /// Whether a fallback served the call
    pub fn served_by_fallback(&self) -> bool {
        self.index > 0
    }

    /// Discard the history and keep the value
    pub fn into_value(self) -> T {
        self.value
    }

    /// Transform the value, keeping the history
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> InvocationOutcome<U> {
        InvocationOutcome {
            capability: self.capability,
            provider: self.provider,
            index: self.index,
            value: f(self.value),
            attempts: self.attempts,
        }
    }
}

/// Resolves capabilities to providers and executes calls with fallback
pub struct ProviderResolver {
    registry: Arc<ProviderRegistry>,
    config: Arc<dyn CapabilityConfigSource>,
    cache: Arc<InstanceCache>,
    classifier: Arc<dyn ErrorClassifier>,
    policy: Arc<dyn FallbackPolicy>,
    observer: Arc<dyn ResolutionObserver>,
}

impl ProviderResolver {
    /// Create a resolver with an empty cache, the quota classifier, the
    /// fall-back-on-any-error policy and no observer
    pub fn new(registry: Arc<ProviderRegistry>, config: Arc<dyn CapabilityConfigSource>) -> Self {
        Self {
            registry,
            config,
            cache: Arc::new(InstanceCache::new()),
            classifier: Arc::new(QuotaPatternClassifier::default()),
            policy: Arc::new(FallBackOnAnyError),
            observer: Arc::new(NullObserver),
        }
    }

    /// Use a shared instance cache
    pub fn with_cache(mut self, cache: Arc<InstanceCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Use another error classifier
    pub fn with_classifier(mut self, classifier: Arc<dyn ErrorClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Use another fallback policy
    pub fn with_policy(mut self, policy: Arc<dyn FallbackPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Report resolution progress to `observer`
    pub fn with_observer(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The provider registry
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// The instance cache
    pub fn cache(&self) -> &Arc<InstanceCache> {
        &self.cache
    }

    /// Chain computed from the current configuration of `capability`
    pub fn chain_for(&self, capability: CapabilityName) -> Result<ResolutionChain> {
        if !self.registry.contains_capability(capability) {
            return Err(Error::unknown_capability(capability.as_str()));
        }
        let config = self.config.capability_config(capability)?;
        Ok(ResolutionChain::from_config(&config))
    }

    /// Name of the provider currently cached for `capability`
    pub fn active_provider(&self, capability: CapabilityName) -> Option<String> {
        self.cache.provider_name(capability)
    }

    /// Drop the cached provider of `capability`
    pub fn invalidate(&self, capability: CapabilityName) -> bool {
        self.cache.invalidate(capability)
    }

    /// Drop every cached provider
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Construct the named provider of `C`, bypassing the chain and the cache
    pub async fn load_specific<C: Capability>(&self, name: &str) -> Result<Arc<C::Provider>> {
        let descriptor = self.registry.resolve_descriptor(C::NAME, name)?;
        let config = self.config.provider_config(C::NAME, name)?;
        let instance = descriptor.construct(config).await?;
        C::unwrap(&instance).ok_or_else(|| mismatched_instance(C::NAME, name))
    }

    /// Run `op` against the chain of `C`
    pub async fn invoke<C, T, F, Fut>(&self, op: F) -> Result<InvocationOutcome<T>>
    where
        C: Capability,
        F: Fn(Arc<C::Provider>) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.invoke_with::<C, T, F, Fut>(InvokeOptions::default(), op)
            .await
    }

    /// Run `op` against the chain of `C`, failing with `DeadlineExceeded`
    /// once `deadline` elapses
    ///
    /// The deadline covers every candidate attempt. When it elapses the
    /// running attempt is dropped and no further candidate is tried.
    pub async fn invoke_within<C, T, F, Fut>(
        &self,
        deadline: Duration,
        op: F,
    ) -> Result<InvocationOutcome<T>>
    where
        C: Capability,
        F: Fn(Arc<C::Provider>) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        tokio::time::timeout(deadline, self.invoke::<C, T, F, Fut>(op))
            .await
            .map_err(|_| Error::DeadlineExceeded {
                capability: C::NAME,
                after: deadline,
            })?
    }

    /// Run `op` against the chain of `C` with explicit options
    pub async fn invoke_with<C, T, F, Fut>(
        &self,
        options: InvokeOptions,
        op: F,
    ) -> Result<InvocationOutcome<T>>
    where
        C: Capability,
        F: Fn(Arc<C::Provider>) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let capability = C::NAME;
        let chain = self.chain_for(capability)?;
        let chain_len = chain.len();
        debug!(%capability, %chain, "resolution chain built");
        self.observer.notify(&ResolutionEvent::ChainResolved {
            capability,
            chain: chain.candidates().to_vec(),
        });

        let mut attempts = Vec::with_capacity(chain_len);
        for (index, candidate) in chain.iter().enumerate() {
            let result = match self.acquire::<C>(candidate, index, chain_len, options).await {
                Ok(provider) => op(provider)
                    .await
                    .map_err(|error| self.failure(FailureStage::Operation, error)),
                Err(failure) => Err(failure),
            };

            match result {
                Ok(value) => {
                    self.observer.notify(&ResolutionEvent::CandidateSucceeded {
                        capability,
                        candidate: candidate.to_string(),
                        index,
                        chain_len,
                        role: CandidateRole::at(index),
                    });
                    attempts.push(AttemptRecord::succeeded(index, candidate));
                    return Ok(InvocationOutcome {
                        capability,
                        provider: candidate.to_string(),
                        index,
                        value,
                        attempts,
                    });
                }
                Err(failure) => {
                    self.observer.notify(&ResolutionEvent::CandidateFailed {
                        capability,
                        candidate: candidate.to_string(),
                        index,
                        chain_len,
                        stage: failure.stage,
                        class: failure.class,
                        message: failure.error.to_string(),
                    });
                    let advance = self.policy.should_fall_back(&failure);
                    attempts.push(AttemptRecord::failed(index, candidate, failure));
                    if !advance {
                        debug!(%capability, candidate, "fallback policy stopped the chain");
                        break;
                    }
                }
            }
        }

        let last_error = attempts
            .last()
            .and_then(AttemptRecord::failure)
            .map(|failure| failure.error.to_string())
            .unwrap_or_default();
        self.observer.notify(&ResolutionEvent::ChainExhausted {
            capability,
            attempts: attempts.len(),
            chain_len,
            last_error,
        });
        Err(Error::ChainExhausted {
            capability,
            attempts,
        })
    }

    /// Reuse the cached instance of `candidate` or construct and cache a new one
    async fn acquire<C: Capability>(
        &self,
        candidate: &str,
        index: usize,
        chain_len: usize,
        options: InvokeOptions,
    ) -> std::result::Result<Arc<C::Provider>, CandidateFailure> {
        let capability = C::NAME;
        let cached = if options.force_reload {
            None
        } else {
            self.cache
                .get_named(capability, candidate)
                .and_then(|instance| C::unwrap(&instance))
        };

        self.observer.notify(&ResolutionEvent::AttemptStarted {
            capability,
            candidate: candidate.to_string(),
            index,
            chain_len,
            reused_instance: cached.is_some(),
        });
        if let Some(provider) = cached {
            return Ok(provider);
        }

        let descriptor = self
            .registry
            .resolve_descriptor(capability, candidate)
            .map_err(|error| self.failure(FailureStage::Lookup, error))?;
        let config = self
            .config
            .provider_config(capability, candidate)
            .map_err(|error| self.failure(FailureStage::Construction, error))?;

        // Release the previous instance before building its replacement.
        self.cache.invalidate(capability);
        let instance = descriptor
            .construct(config)
            .await
            .map_err(|error| self.failure(FailureStage::Construction, error))?;
        let provider = C::unwrap(&instance).ok_or_else(|| {
            self.failure(
                FailureStage::Construction,
                mismatched_instance(capability, candidate),
            )
        })?;
        self.cache.put(capability, candidate, instance);
        debug!(%capability, candidate, "provider constructed and cached");
        Ok(provider)
    }

    fn failure(&self, stage: FailureStage, error: Error) -> CandidateFailure {
        CandidateFailure {
            stage,
            class: self.classifier.classify(&error),
            error,
        }
    }
}

fn mismatched_instance(capability: CapabilityName, provider: &str) -> Error {
    Error::construction(
        capability,
        provider,
        "factory returned an instance of another capability",
    )
}
