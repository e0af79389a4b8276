//! Plain-text rendering of command results

use std::fmt::Write as _;

use reel_application::use_cases::PipelineReport;
use reel_domain::value_objects::{CandidateRole, CapabilityName};
use reel_infrastructure::di::{AvailableProviders, ChainEntry};

/// Summary of a finished pipeline run
pub fn report(report: &PipelineReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Content:  {} ({})",
        report.content.title, report.content.source
    );
    let _ = writeln!(out, "Hook:     {}", report.script.hook);
    let _ = writeln!(
        out,
        "Audio:    {} ({:.1}s)",
        report.audio.path.display(),
        report.audio.duration_secs
    );
    let _ = writeln!(
        out,
        "Video:    {} ({:.1}s)",
        report.video.path.display(),
        report.video.duration_secs
    );
    let _ = writeln!(
        out,
        "Upload:   {} [{}]",
        report.upload.url, report.upload.status
    );
    let _ = writeln!(out, "Record:   {}", report.record_id);
    let _ = writeln!(out, "Elapsed:  {:.1}s", report.elapsed.as_secs_f64());
    let _ = writeln!(out);
    let _ = writeln!(out, "Providers:");
    for step in &report.steps {
        let marker = if step.role == CandidateRole::Fallback {
            " (fallback)"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "  {:<9} {}{} after {} attempt(s)",
            step.capability.as_str(),
            step.provider,
            marker,
            step.attempts
        );
    }
    out
}

/// Providers of one capability, or all of them
pub fn providers(available: &AvailableProviders, capability: Option<CapabilityName>) -> String {
    let Some(capability) = capability else {
        return available.to_string();
    };
    let mut out = String::new();
    let _ = writeln!(out, "{capability} providers:");
    for (name, description) in available.for_capability(capability) {
        let _ = writeln!(out, "  - {name}: {description}");
    }
    out
}

/// Resolution chain of one capability
pub fn chain(capability: CapabilityName, entries: &[ChainEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{capability} chain:");
    for (index, entry) in entries.iter().enumerate() {
        let role = CandidateRole::at(index);
        let mut notes = Vec::new();
        if !entry.registered {
            notes.push("not registered");
        }
        if entry.active {
            notes.push("active");
        }
        let suffix = if notes.is_empty() {
            String::new()
        } else {
            format!(" [{}]", notes.join(", "))
        };
        let _ = writeln!(out, "  {}. {} ({role}){suffix}", index + 1, entry.name);
    }
    out
}
