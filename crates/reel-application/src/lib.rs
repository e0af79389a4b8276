//! Application Layer - Reel
//!
//! Resolves every pipeline capability to a concrete provider at runtime and
//! drives capability calls across an ordered chain of candidates, so callers
//! see one logical operation that either succeeds or exhausts the chain.
//!
//! ## Architecture
//!
//! The application layer:
//! - Declares the provider registry that adapters self-register into
//! - Builds resolution chains from live configuration
//! - Owns the instance cache and the fallback executor
//! - Defines ports for configuration and observation
//! - Implements the pipeline use case on top of the resolver
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `reel-domain`: capability contracts, value objects and errors
//! - Pure Rust libraries for async, concurrency and registration

pub mod ports;
pub mod resolution;
pub mod use_cases;

pub use ports::*;
pub use resolution::*;
pub use use_cases::*;
