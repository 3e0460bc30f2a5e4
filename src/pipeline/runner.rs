// src/pipeline/runner.rs

use super::config::PipelineConfig;
use crate::debug::{report::PipelineReporter, visualization::SvgReporter};
use crate::math::{
    error::MathResult,
    point_distribution::{
        DiagramBuilder, FusedCluster, Grid, PointFuser, SpadeDiagramBuilder, VoronoiDiagram,
        extract_obstacles,
    },
    types::{FusedPoint, GridPoint},
};
use bevy::log::{debug, info};

/// Ergebnis eines Pipeline-Durchlaufs.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub grid_height: usize,
    pub grid_width: usize,
    /// Hinderniszellen in Scan-Reihenfolge (1-basiert).
    pub raw_points: Vec<GridPoint>,
    /// Fusionierte Cluster in Seed-Reihenfolge.
    pub clusters: Vec<FusedCluster>,
    pub diagram: VoronoiDiagram,
}

impl PipelineOutput {
    /// The sites handed to the diagram builder.
    pub fn fused_points(&self) -> Vec<FusedPoint> {
        self.clusters.iter().map(|c| c.centroid).collect()
    }
}

/// Rasterkarte → Hinderniszellen → fusionierte Sites → Voronoi-Diagramm.
///
/// Each stage runs to completion or fails the whole run.
pub struct ObstaclePipeline<B: DiagramBuilder = SpadeDiagramBuilder> {
    config: PipelineConfig,
    builder: B,
    reporters: Vec<Box<dyn PipelineReporter>>,
}

impl ObstaclePipeline<SpadeDiagramBuilder> {
    /// Pipeline with the `spade` builder. Adds an [`SvgReporter`] when
    /// `config.svg_output` is set.
    pub fn new(config: PipelineConfig) -> Self {
        let reporters: Vec<Box<dyn PipelineReporter>> = match &config.svg_output {
            Some(path) => vec![Box::new(SvgReporter::new(path.clone()))],
            None => Vec::new(),
        };
        Self {
            config,
            builder: SpadeDiagramBuilder::new(),
            reporters,
        }
    }
}

impl<B: DiagramBuilder> ObstaclePipeline<B> {
    /// Replaces the diagram builder.
    pub fn with_builder<C: DiagramBuilder>(self, builder: C) -> ObstaclePipeline<C> {
        ObstaclePipeline {
            config: self.config,
            builder,
            reporters: self.reporters,
        }
    }

    pub fn with_reporter(mut self, reporter: impl PipelineReporter + 'static) -> Self {
        self.reporters.push(Box::new(reporter));
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Decodes `config.image_path` and runs all stages on it.
    pub fn run(&mut self) -> MathResult<PipelineOutput> {
        self.config.validate()?;
        info!(
            "Running obstacle pipeline on '{}' (fusion radius {})",
            self.config.image_path.display(),
            self.config.fusion_radius
        );
        let grid = Grid::open(&self.config.image_path)?;
        self.run_on_grid(&grid)
    }

    /// Runs extraction, fusion and diagram construction on an in-memory grid.
    pub fn run_on_grid(&mut self, grid: &Grid) -> MathResult<PipelineOutput> {
        let raw_points = extract_obstacles(grid);
        for reporter in &mut self.reporters {
            reporter.raw_points(grid, &raw_points)?;
        }

        let clusters = PointFuser::new(self.config.fusion_radius).fuse_clusters(&raw_points);
        for reporter in &mut self.reporters {
            reporter.fused(&clusters)?;
        }

        let sites: Vec<FusedPoint> = clusters.iter().map(|c| c.centroid).collect();
        debug!(
            "Handing {} sites to the diagram builder ({} raw cells)",
            sites.len(),
            raw_points.len()
        );
        let diagram = self.builder.build(&sites, &self.config.bounding_region)?;
        for reporter in &mut self.reporters {
            reporter.diagram(&diagram, &self.config.bounding_region)?;
        }

        Ok(PipelineOutput {
            grid_height: grid.height(),
            grid_width: grid.width(),
            raw_points,
            clusters,
            diagram,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{
        error::MathError,
        types::{BoundingRegion, Point2D},
    };
    use approx::assert_relative_eq;
    use image::{GrayImage, Luma};
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("obstacle_voronoi_{}_{}", std::process::id(), name))
    }

    /// Records the sites it receives and returns an empty diagram.
    #[derive(Default, Clone)]
    struct RecordingBuilder {
        received: Rc<RefCell<Vec<Point2D>>>,
    }

    impl DiagramBuilder for RecordingBuilder {
        fn build(&self, sites: &[Point2D], _region: &BoundingRegion) -> MathResult<VoronoiDiagram> {
            self.received.borrow_mut().extend_from_slice(sites);
            Ok(VoronoiDiagram::default())
        }
    }

    #[derive(Default, Clone)]
    struct StageLog {
        stages: Rc<RefCell<Vec<&'static str>>>,
    }

    impl PipelineReporter for StageLog {
        fn raw_points(&mut self, _grid: &Grid, _points: &[GridPoint]) -> MathResult<()> {
            self.stages.borrow_mut().push("raw");
            Ok(())
        }

        fn fused(&mut self, _clusters: &[FusedCluster]) -> MathResult<()> {
            self.stages.borrow_mut().push("fused");
            Ok(())
        }

        fn diagram(&mut self, _diagram: &VoronoiDiagram, _region: &BoundingRegion) -> MathResult<()> {
            self.stages.borrow_mut().push("diagram");
            Ok(())
        }
    }

    #[test]
    fn centre_obstacle_becomes_single_site() {
        let grid = Grid::from_rows(&[[255u8, 255, 255], [255, 0, 255], [255, 255, 255]]).unwrap();
        let config = PipelineConfig::new()
            .with_bounding_region(BoundingRegion::square(4.0).unwrap());
        let output = ObstaclePipeline::new(config).run_on_grid(&grid).unwrap();

        assert_eq!(output.raw_points, vec![GridPoint::new(2, 2)]);
        assert_eq!(output.fused_points(), vec![FusedPoint::new(2.0, 2.0)]);
        assert_eq!(output.diagram.sites().len(), 1);
        assert_relative_eq!(output.diagram.sites()[0].cell_size(), 16.0);
    }

    #[test]
    fn fused_points_reach_the_builder_in_seed_order() {
        let mut rows = vec![[255u8; 10]; 10];
        rows[0][0] = 0;
        rows[0][1] = 0;
        rows[9][9] = 0;
        let grid = Grid::from_rows(&rows).unwrap();

        let builder = RecordingBuilder::default();
        let stages = StageLog::default();
        let mut pipeline = ObstaclePipeline::new(PipelineConfig::new().with_fusion_radius(3.0))
            .with_builder(builder.clone())
            .with_reporter(stages.clone());
        let output = pipeline.run_on_grid(&grid).unwrap();

        assert_eq!(output.raw_points.len(), 3);
        assert_eq!(
            *builder.received.borrow(),
            vec![Point2D::new(1.0, 1.5), Point2D::new(10.0, 10.0)]
        );
        assert_eq!(*stages.stages.borrow(), vec!["raw", "fused", "diagram"]);
        assert_eq!((output.grid_height, output.grid_width), (10, 10));
    }

    #[test]
    fn blank_map_fails_in_the_diagram_builder() {
        let grid = Grid::new(5, 5, vec![255; 25]).unwrap();
        let stages = StageLog::default();
        let result = ObstaclePipeline::new(PipelineConfig::new())
            .with_reporter(stages.clone())
            .run_on_grid(&grid);
        assert!(matches!(
            result,
            Err(MathError::InsufficientPoints { expected: 1, actual: 0 })
        ));
        assert_eq!(*stages.stages.borrow(), vec!["raw", "fused"]);
    }

    #[test]
    fn missing_image_is_fatal() {
        let config = PipelineConfig::new().with_image_path(temp_path("missing.png"));
        let result = ObstaclePipeline::new(config).run();
        assert!(matches!(result, Err(MathError::ImageDecode { .. })));
    }

    #[test]
    fn runs_on_decoded_image_and_writes_svg() {
        let image_path = temp_path("map.png");
        let svg_path = temp_path("map.svg");
        let mut img = GrayImage::from_pixel(40, 30, Luma([255]));
        for (x, y) in [(5, 5), (6, 5), (5, 6), (30, 20), (31, 21)] {
            img.put_pixel(x, y, Luma([0]));
        }
        img.put_pixel(15, 25, Luma([128]));
        img.save(&image_path).unwrap();

        let config = PipelineConfig::new()
            .with_image_path(&image_path)
            .with_fusion_radius(3.0)
            .with_bounding_region(BoundingRegion::rectangle(Point2D::ZERO, Point2D::new(31.0, 41.0)).unwrap())
            .with_svg_output(&svg_path);
        let result = ObstaclePipeline::new(config).run();
        let svg_written = svg_path.exists();
        std::fs::remove_file(&image_path).ok();
        std::fs::remove_file(&svg_path).ok();
        let output = result.unwrap();

        assert_eq!((output.grid_height, output.grid_width), (30, 40));
        assert_eq!(output.raw_points.len(), 6);
        // Pixel (x, y) is cell (row y + 1, col x + 1).
        assert_eq!(output.raw_points[0], GridPoint::new(6, 6));
        assert_eq!(output.clusters.len(), 3);
        assert_eq!(output.diagram.sites().len(), 3);
        assert_relative_eq!(output.diagram.total_cell_area(), 31.0 * 41.0, max_relative = 1e-9);
        assert!(svg_written);
    }
}
