// src/debug/mod.rs

// Optionale Beobachtung der Pipeline; der Kern hängt nicht davon ab.
pub mod report;
pub mod visualization;

pub use report::{LogReporter, NoopReporter, PipelineReporter};
pub use visualization::SvgReporter;
