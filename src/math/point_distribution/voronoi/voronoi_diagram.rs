// src/math/point_distribution/voronoi/voronoi_diagram.rs

use crate::math::{
    algorithms::clipping::{HalfPlane, LabeledVertex, PolygonClipper},
    types::{BoundingRegion, Point2D, SpadePoint, from_spade, to_geo_polygon},
    utils::constants,
};
use bevy::log::debug;
use geo::Area;
use spade::{DelaunayTriangulation, Triangulation, handles::FixedVertexHandle};
use std::collections::{HashMap, HashSet};

/// Eine Site des Voronoi-Diagramms mit ihrer auf die Region beschnittenen Zelle.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiSite {
    /// Eindeutige ID der Site (Position in [`VoronoiDiagram::sites`]).
    pub id: usize,
    /// Der Generatorpunkt.
    pub position: Point2D,
    /// Zellpolygon in CCW-Reihenfolge; leer, wenn die Zelle außerhalb der Region liegt.
    pub cell: Vec<Point2D>,
    /// IDs der Sites, mit denen die Zelle eine Kante teilt.
    pub neighbor_ids: Vec<usize>,
}

impl VoronoiSite {
    pub fn coordinates(&self) -> (f64, f64) {
        (self.position.x, self.position.y)
    }

    /// Fläche der Zelle.
    pub fn cell_size(&self) -> f64 {
        if self.cell.len() < 3 {
            return 0.0;
        }
        to_geo_polygon(&self.cell).unsigned_area()
    }

    /// Umfang der Zelle.
    pub fn perimeter(&self) -> f64 {
        if self.cell.len() < 2 {
            return 0.0;
        }
        let n = self.cell.len();
        (0..n)
            .map(|i| self.cell[i].distance(self.cell[(i + 1) % n]))
            .sum()
    }
}

/// Eine Kante zwischen zwei benachbarten Zellen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoronoiEdge {
    pub start: Point2D,
    pub end: Point2D,
    /// IDs der beiden Sites, die diese Kante teilen (kleinere zuerst).
    pub sites: [usize; 2],
}

impl VoronoiEdge {
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// Enthält die Sites, Kanten und Ecken eines beschnittenen Voronoi-Diagramms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoronoiDiagram {
    pub sites: Vec<VoronoiSite>,
    pub edges: Vec<VoronoiEdge>,
    pub vertices: Vec<Point2D>,
}

impl VoronoiDiagram {
    pub fn sites(&self) -> &[VoronoiSite] {
        &self.sites
    }

    pub fn edges(&self) -> &[VoronoiEdge] {
        &self.edges
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn total_cell_area(&self) -> f64 {
        self.sites.iter().map(VoronoiSite::cell_size).sum()
    }
}

/// Extrahiert ein auf eine Region beschnittenes Voronoi-Diagramm aus einer Delaunay-Triangulation.
///
/// Each cell starts as the region and is clipped by the perpendicular bisector
/// towards every Delaunay neighbour. That intersection is exactly the Voronoi
/// cell restricted to the region, including cells that are unbounded in the
/// plane.
pub struct VoronoiExtractor {
    clipper: PolygonClipper,
    tolerance: f64,
}

impl Default for VoronoiExtractor {
    fn default() -> Self {
        Self::new(constants::GEOMETRY_TOLERANCE)
    }
}

impl VoronoiExtractor {
    pub fn new(tolerance: f64) -> Self {
        let tolerance = tolerance.max(0.0);
        Self {
            clipper: PolygonClipper::new().with_tolerance(tolerance),
            tolerance,
        }
    }

    /// `site_handles[i]` is the triangulation vertex of site `i`.
    pub fn extract(
        &self,
        triangulation: &DelaunayTriangulation<SpadePoint>,
        site_handles: &[FixedVertexHandle],
        region: &BoundingRegion,
    ) -> VoronoiDiagram {
        let handle_to_id: HashMap<FixedVertexHandle, usize> = site_handles
            .iter()
            .enumerate()
            .map(|(id, handle)| (*handle, id))
            .collect();

        let labeled_cells: Vec<Vec<LabeledVertex<Option<usize>>>> = site_handles
            .iter()
            .map(|handle| self.clip_cell(triangulation, *handle, &handle_to_id, region))
            .collect();

        let mut sites: Vec<VoronoiSite> = site_handles
            .iter()
            .zip(&labeled_cells)
            .enumerate()
            .map(|(id, (handle, cell))| VoronoiSite {
                id,
                position: from_spade(triangulation.vertex(*handle).position()),
                cell: cell.iter().map(|v| v.position).collect(),
                neighbor_ids: Vec::new(),
            })
            .collect();

        let edges = self.collect_edges(&labeled_cells);
        for edge in &edges {
            let [a, b] = edge.sites;
            sites[a].neighbor_ids.push(b);
            sites[b].neighbor_ids.push(a);
        }
        for site in &mut sites {
            site.neighbor_ids.sort_unstable();
            site.neighbor_ids.dedup();
        }

        let vertices = Self::collect_vertices(&edges);
        debug!(
            "VoronoiExtractor: {} sites, {} edges, {} vertices",
            sites.len(),
            edges.len(),
            vertices.len()
        );

        VoronoiDiagram {
            sites,
            edges,
            vertices,
        }
    }

    fn clip_cell(
        &self,
        triangulation: &DelaunayTriangulation<SpadePoint>,
        handle: FixedVertexHandle,
        handle_to_id: &HashMap<FixedVertexHandle, usize>,
        region: &BoundingRegion,
    ) -> Vec<LabeledVertex<Option<usize>>> {
        let vertex = triangulation.vertex(handle);
        let site = from_spade(vertex.position());
        let mut cell = PolygonClipper::labeled(region.vertices(), None);

        for edge in vertex.out_edges() {
            let neighbor = edge.to();
            let Some(&neighbor_id) = handle_to_id.get(&neighbor.fix()) else {
                continue;
            };
            let plane = HalfPlane::closer_to(site, from_spade(neighbor.position()));
            cell = self.clipper.clip_half_plane(&cell, &plane, Some(neighbor_id));
            if cell.is_empty() {
                debug!("VoronoiExtractor: cell of site {:?} lies outside the region", site);
                break;
            }
        }
        cell
    }

    /// One edge per adjacent pair, taken from the cell of the lower site id.
    fn collect_edges(&self, cells: &[Vec<LabeledVertex<Option<usize>>>]) -> Vec<VoronoiEdge> {
        let mut edges = Vec::new();
        for (site_id, cell) in cells.iter().enumerate() {
            for (k, vertex) in cell.iter().enumerate() {
                let Some(other_id) = vertex.edge_label else {
                    continue;
                };
                if other_id <= site_id {
                    continue;
                }
                let edge = VoronoiEdge {
                    start: vertex.position,
                    end: cell[(k + 1) % cell.len()].position,
                    sites: [site_id, other_id],
                };
                if edge.length() > self.tolerance {
                    edges.push(edge);
                }
            }
        }
        edges
    }

    fn collect_vertices(edges: &[VoronoiEdge]) -> Vec<Point2D> {
        let mut seen = HashSet::new();
        let mut vertices = Vec::new();
        for point in edges.iter().flat_map(|e| [e.start, e.end]) {
            let key = ((point.x * 1e6).round() as i64, (point.y * 1e6).round() as i64);
            if seen.insert(key) {
                vertices.push(point);
            }
        }
        vertices
    }
}
