// src/debug/report.rs

use crate::math::{
    error::MathResult,
    point_distribution::{FusedCluster, Grid, VoronoiDiagram},
    types::{BoundingRegion, GridPoint},
};
use bevy::log::info;

/// Beobachter für die einzelnen Pipeline-Schritte.
///
/// Every hook defaults to doing nothing. The pipeline never reads anything
/// back from a reporter; an error returned by a hook aborts the run.
pub trait PipelineReporter {
    fn raw_points(&mut self, _grid: &Grid, _points: &[GridPoint]) -> MathResult<()> {
        Ok(())
    }

    fn fused(&mut self, _clusters: &[FusedCluster]) -> MathResult<()> {
        Ok(())
    }

    fn diagram(&mut self, _diagram: &VoronoiDiagram, _region: &BoundingRegion) -> MathResult<()> {
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl PipelineReporter for NoopReporter {}

/// Schreibt eine Zusammenfassung jedes Schritts ins Log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl PipelineReporter for LogReporter {
    fn raw_points(&mut self, grid: &Grid, points: &[GridPoint]) -> MathResult<()> {
        info!(
            "{} obstacle cells in {}x{} map",
            points.len(),
            grid.height(),
            grid.width()
        );
        Ok(())
    }

    fn fused(&mut self, clusters: &[FusedCluster]) -> MathResult<()> {
        let largest = clusters.iter().map(FusedCluster::len).max().unwrap_or(0);
        info!(
            "{} sites after fusion (largest cluster: {} cells)",
            clusters.len(),
            largest
        );
        Ok(())
    }

    fn diagram(&mut self, diagram: &VoronoiDiagram, region: &BoundingRegion) -> MathResult<()> {
        info!(
            "Voronoi diagram: {} sites, {} edges, {} vertices, {:.1} of {:.1} area covered",
            diagram.sites().len(),
            diagram.edges().len(),
            diagram.vertices().len(),
            diagram.total_cell_area(),
            region.area()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point_distribution::{DiagramBuilder, PointFuser, SpadeDiagramBuilder};

    #[test]
    fn builtin_reporters_accept_every_stage() {
        let grid = Grid::from_rows(&[[0u8, 255], [255, 0]]).unwrap();
        let raw = vec![GridPoint::new(1, 1), GridPoint::new(2, 2)];
        let clusters = PointFuser::new(0.5).fuse_clusters(&raw);
        let region = BoundingRegion::square(3.0).unwrap();
        let sites: Vec<_> = clusters.iter().map(|c| c.centroid).collect();
        let diagram = SpadeDiagramBuilder::new().build(&sites, &region).unwrap();

        let reporters: Vec<Box<dyn PipelineReporter>> =
            vec![Box::new(NoopReporter), Box::new(LogReporter)];
        for mut reporter in reporters {
            assert!(reporter.raw_points(&grid, &raw).is_ok());
            assert!(reporter.fused(&clusters).is_ok());
            assert!(reporter.diagram(&diagram, &region).is_ok());
        }
    }
}
