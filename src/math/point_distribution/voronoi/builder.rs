// src/math/point_distribution/voronoi/builder.rs

use super::voronoi_diagram::{VoronoiDiagram, VoronoiExtractor};
use crate::math::{
    error::{MathError, MathResult},
    types::{BoundingRegion, Point2D, SpadePoint, to_spade},
    utils::constants,
};
use bevy::log::debug;
use spade::{DelaunayTriangulation, Triangulation};

/// Baut aus Sites und einer Begrenzungsregion ein Voronoi-Diagramm.
pub trait DiagramBuilder {
    fn build(&self, sites: &[Point2D], region: &BoundingRegion) -> MathResult<VoronoiDiagram>;
}

/// [`DiagramBuilder`] auf Basis der Delaunay-Triangulation von `spade`.
#[derive(Debug, Clone, Copy)]
pub struct SpadeDiagramBuilder {
    tolerance: f64,
}

impl Default for SpadeDiagramBuilder {
    fn default() -> Self {
        Self {
            tolerance: constants::GEOMETRY_TOLERANCE,
        }
    }
}

impl SpadeDiagramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }
}

impl DiagramBuilder for SpadeDiagramBuilder {
    fn build(&self, sites: &[Point2D], region: &BoundingRegion) -> MathResult<VoronoiDiagram> {
        if sites.is_empty() {
            return Err(MathError::InsufficientPoints {
                expected: 1,
                actual: 0,
            });
        }

        let mut triangulation: DelaunayTriangulation<SpadePoint> = DelaunayTriangulation::new();
        let mut handles = Vec::with_capacity(sites.len());
        let mut outside = 0usize;

        for site in sites {
            let before = triangulation.num_vertices();
            let handle = triangulation
                .insert(to_spade(*site))
                .map_err(|e| MathError::TriangulationFailed {
                    reason: format!("site {:?} rejected: {:?}", site, e),
                })?;
            if triangulation.num_vertices() == before {
                debug!("SpadeDiagramBuilder: duplicate site {:?} merged", site);
                continue;
            }
            if !region.contains(*site) {
                outside += 1;
            }
            handles.push(handle);
        }

        if outside > 0 {
            debug!(
                "SpadeDiagramBuilder: {} of {} sites lie outside the bounding region",
                outside,
                handles.len()
            );
        }

        Ok(VoronoiExtractor::new(self.tolerance).extract(&triangulation, &handles, region))
    }
}
