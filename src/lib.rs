// ./src/lib.rs

// Eigene Module deklarieren
pub mod debug;
pub mod math;
pub mod pipeline;

pub use math::{MathError, MathResult};
pub use pipeline::{ObstaclePipeline, PipelineConfig, PipelineOutput};
