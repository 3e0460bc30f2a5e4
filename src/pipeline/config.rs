// src/pipeline/config.rs

use crate::math::{
    error::{MathError, MathResult},
    types::BoundingRegion,
};
use bevy::log::warn;
use std::path::PathBuf;

/// Kantenlänge der quadratischen Standard-Begrenzung.
pub const DEFAULT_REGION_SIZE: f64 = 400.0;
pub const DEFAULT_FUSION_RADIUS: f64 = 6.0;
pub const DEFAULT_IMAGE_PATH: &str = "map_voronoi_big.png";

/// Konfiguration für die Hindernis-Pipeline (Karte → Sites → Voronoi-Diagramm).
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Pfad zur Rasterkarte (jedes vom `image`-Crate lesbare Format).
    pub image_path: PathBuf,
    /// Punkte, die näher als dieser Radius am Seed liegen, werden fusioniert.
    /// Werte ≤ 0 schalten die Fusion ab.
    pub fusion_radius: f64,
    /// Konvexe Region, an der die Voronoi-Zellen beschnitten werden.
    pub bounding_region: BoundingRegion,
    /// Optionales Ziel für eine SVG-Darstellung des Ergebnisses.
    pub svg_output: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            image_path: PathBuf::from(DEFAULT_IMAGE_PATH),
            fusion_radius: DEFAULT_FUSION_RADIUS,
            bounding_region: default_region(),
            svg_output: None,
        }
    }
}

fn default_region() -> BoundingRegion {
    match BoundingRegion::square(DEFAULT_REGION_SIZE) {
        Ok(region) => region,
        Err(e) => unreachable!("default region is a valid square: {e}"),
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.image_path = path.into();
        self
    }

    pub fn with_fusion_radius(mut self, radius: f64) -> Self {
        self.fusion_radius = radius;
        self
    }

    pub fn with_bounding_region(mut self, region: BoundingRegion) -> Self {
        self.bounding_region = region;
        self
    }

    pub fn with_svg_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.svg_output = Some(path.into());
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if self.image_path.as_os_str().is_empty() {
            return Err(MathError::InvalidConfiguration {
                message: "Pipeline needs an image path.".to_string(),
            });
        }
        if !(self.fusion_radius > 0.0) {
            warn!(
                "PipelineConfig: fusion_radius {} is not positive, every obstacle cell becomes its own site.",
                self.fusion_radius
            );
        }
        Ok(())
    }
}
