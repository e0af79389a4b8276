//! Provider Utilities
//!
//! Shared utilities used by provider implementations.

mod http_response;
mod json;
pub mod text;

pub use http_response::{HttpResponseUtils, build_http_client, request_error};
pub use json::JsonExt;
