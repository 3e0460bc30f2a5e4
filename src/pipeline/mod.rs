// src/pipeline/mod.rs

// Einstiegspunkt: Konfiguration und Ausführung der Hindernis-Pipeline
pub mod config;
pub mod runner;

pub use config::PipelineConfig;
pub use runner::{ObstaclePipeline, PipelineOutput};
