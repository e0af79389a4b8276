//! Use Cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`PipelineService`] | Content → script → speech → video → upload → persist |

pub mod pipeline_service;

pub use pipeline_service::{PipelineReport, PipelineRequest, PipelineService, StepReport};
