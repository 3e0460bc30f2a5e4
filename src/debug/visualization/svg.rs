// src/debug/visualization/svg.rs
use crate::debug::report::PipelineReporter;
use crate::math::{
    error::MathResult,
    point_distribution::{FusedCluster, Grid, VoronoiDiagram},
    types::{Bounds2D, BoundingRegion, GridPoint, Point2D},
};
use bevy::log::info;
use std::path::{Path, PathBuf};
use svg::{Document, Node};
use svg::node::element::{Circle, Line, Polygon, Rectangle, Style};

/// Default edge length of the written SVG in pixels.
pub const DEFAULT_SVG_PIXEL_SIZE: f64 = 800.0;

/// Pipeline coordinates are `(row, col)`; the canvas draws columns along x.
#[inline]
fn to_canvas(p: Point2D) -> Point2D {
    Point2D::new(p.y, p.x)
}

// ===================================================================================
// HILFS-STRUCT für die SVG-Erstellung
// ===================================================================================
/// Ein Helfer zum Erstellen einer SVG-Datei.
struct SvgBuilder {
    document: Document,
    nodes: Vec<Box<dyn Node>>,
    point_radius: f64,
}

impl SvgBuilder {
    /// Erstellt ein neues SVG-Grundgerüst mit Stil und Hintergrund.
    fn new(display_bounds: &Bounds2D, svg_pixel_size: f64) -> Self {
        let (min_x, min_y) = (display_bounds.min.x, display_bounds.min.y);
        let (width, height) = (display_bounds.width(), display_bounds.height());

        let mean_extent = (width + height) / 2.0;
        let stroke_w_normal = mean_extent * 0.003;
        let stroke_w_thin = mean_extent * 0.0015;
        let point_radius = mean_extent * 0.004;

        let style = Style::new(format!(
            r#"
    .background {{ fill: #f0f0f0; }}
    .region {{ fill: none; stroke: #888888; stroke-width: {stroke_w_normal}; stroke-dasharray: 4,4; }}
    .cell {{ fill: rgba(150, 255, 150, 0.35); stroke: #00aa00; stroke-width: {stroke_w_thin}; }}
    .edge {{ stroke: #005500; stroke-width: {stroke_w_normal}; }}
    .raw-point {{ fill: #ffaaaa; }}
    .site {{ fill: #aaccff; stroke: #0000cc; stroke-width: {stroke_w_thin}; }}
"#
        ));

        let document = Document::new()
            .set("width", svg_pixel_size)
            .set("height", svg_pixel_size)
            .set("viewBox", format!("{min_x} {min_y} {width} {height}"))
            .add(style)
            .add(
                Rectangle::new()
                    .set("x", min_x)
                    .set("y", min_y)
                    .set("width", width)
                    .set("height", height)
                    .set("class", "background"),
            );

        Self {
            document,
            nodes: Vec::new(),
            point_radius,
        }
    }

    /// Zeichnet ein Polygon.
    fn draw_polygon(&mut self, vertices: &[Point2D], class: &str) {
        if vertices.len() < 2 {
            return;
        }
        let points_str = vertices
            .iter()
            .map(|p| format!("{:.3},{:.3}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        self.push(Polygon::new().set("points", points_str).set("class", class));
    }

    /// Zeichnet einen Kreis.
    fn draw_circle(&mut self, center: Point2D, radius: f64, class: &str) {
        self.push(
            Circle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", radius)
                .set("class", class),
        );
    }

    /// Zeichnet eine Linie.
    fn draw_line(&mut self, start: Point2D, end: Point2D, class: &str) {
        self.push(
            Line::new()
                .set("x1", start.x)
                .set("y1", start.y)
                .set("x2", end.x)
                .set("y2", end.y)
                .set("class", class),
        );
    }

    fn push<N: Node + 'static>(&mut self, node: N) {
        self.nodes.push(Box::new(node));
    }

    /// Speichert die SVG-Datei.
    fn save(self, path: &Path) -> MathResult<()> {
        let document = self
            .nodes
            .into_iter()
            .fold(self.document, |document, node| document.add(node));
        svg::save(path, &document)?;
        info!("Debug SVG '{}' wurde erstellt.", path.display());
        Ok(())
    }
}

// ===================================================================================
// REPORTER
// ===================================================================================
/// Schreibt Region, Zellen, Kanten, Rohpunkte und Sites in eine SVG-Datei.
///
/// Raw and fused points are buffered from the earlier hooks; the file is
/// written once the diagram arrives.
pub struct SvgReporter {
    path: PathBuf,
    svg_pixel_size: f64,
    raw_points: Vec<Point2D>,
    sites: Vec<Point2D>,
}

impl SvgReporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            svg_pixel_size: DEFAULT_SVG_PIXEL_SIZE,
            raw_points: Vec::new(),
            sites: Vec::new(),
        }
    }

    pub fn with_pixel_size(mut self, size: f64) -> Self {
        self.svg_pixel_size = size.max(1.0);
        self
    }
}

impl PipelineReporter for SvgReporter {
    fn raw_points(&mut self, _grid: &Grid, points: &[GridPoint]) -> MathResult<()> {
        self.raw_points = points.iter().map(GridPoint::to_dvec2).collect();
        Ok(())
    }

    fn fused(&mut self, clusters: &[FusedCluster]) -> MathResult<()> {
        self.sites = clusters.iter().map(|c| c.centroid).collect();
        Ok(())
    }

    fn diagram(&mut self, diagram: &VoronoiDiagram, region: &BoundingRegion) -> MathResult<()> {
        let region_canvas: Vec<Point2D> = region.vertices().iter().map(|&p| to_canvas(p)).collect();
        let display_bounds = Bounds2D::from_points_iter(region_canvas.iter().copied())
            .unwrap_or_else(|| Bounds2D::from_points(Point2D::ZERO, Point2D::ONE));
        let display_bounds = display_bounds.expand(display_bounds.width().max(1.0) * 0.02);

        let mut svg = SvgBuilder::new(&display_bounds, self.svg_pixel_size);

        for site in diagram.sites() {
            let cell: Vec<Point2D> = site.cell.iter().map(|&p| to_canvas(p)).collect();
            svg.draw_polygon(&cell, "cell");
        }
        for edge in diagram.edges() {
            svg.draw_line(to_canvas(edge.start), to_canvas(edge.end), "edge");
        }
        svg.draw_polygon(&region_canvas, "region");

        let point_radius = svg.point_radius;
        for &p in &self.raw_points {
            svg.draw_circle(to_canvas(p), point_radius * 0.4, "raw-point");
        }
        for &p in &self.sites {
            svg.draw_circle(to_canvas(p), point_radius, "site");
        }

        svg.save(&self.path)
    }
}
