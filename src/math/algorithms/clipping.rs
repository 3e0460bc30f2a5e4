// src/math/algorithms/clipping.rs

//! # Polygon Clipping Module
//!
//! Clips convex polygons against half-planes, one constraint at a time, in the
//! manner of Sutherland-Hodgman. Every output edge carries the label of the
//! constraint that produced it, so a Voronoi cell built by successive clipping
//! knows which neighbouring site generated each of its edges.

use crate::math::{types::Point2D, utils::constants};

/// A vertex of a labelled polygon. `edge_label` belongs to the edge that starts
/// at this vertex and ends at the next one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledVertex<L> {
    pub position: Point2D,
    pub edge_label: L,
}

/// Half-plane `{ x | (x - origin) · normal <= 0 }`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlane {
    pub origin: Point2D,
    pub normal: Point2D,
}

impl HalfPlane {
    /// The half-plane of points at least as close to `site` as to `other`.
    ///
    /// Its boundary is the perpendicular bisector of the two points.
    pub fn closer_to(site: Point2D, other: Point2D) -> Self {
        Self {
            origin: (site + other) * 0.5,
            normal: other - site,
        }
    }

    /// Signed offset of `point` from the boundary line; negative is inside.
    #[inline]
    pub fn signed_offset(&self, point: Point2D) -> f64 {
        (point - self.origin).dot(self.normal)
    }
}

/// Performs half-plane clipping on convex polygons.
pub struct PolygonClipper {
    tolerance: f64, // Tolerance for floating-point comparisons
}

impl Default for PolygonClipper {
    /// Default: `tolerance = constants::GEOMETRY_TOLERANCE`
    fn default() -> Self {
        Self {
            tolerance: constants::GEOMETRY_TOLERANCE,
        }
    }
}

impl PolygonClipper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tolerance for floating-point comparisons. Must be non-negative.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }

    /// Builds a labelled polygon whose edges all carry `label`.
    pub fn labeled<L: Copy>(vertices: &[Point2D], label: L) -> Vec<LabeledVertex<L>> {
        vertices
            .iter()
            .map(|&position| LabeledVertex {
                position,
                edge_label: label,
            })
            .collect()
    }

    /// Clips a convex polygon against one half-plane.
    ///
    /// Edges created along the half-plane boundary get `label`; surviving parts
    /// of existing edges keep theirs. Returns an empty list once fewer than
    /// three vertices remain.
    ///
    /// # Arguments
    /// * `subject` - Convex polygon, vertices in order (either orientation).
    /// * `plane` - The half-plane to keep.
    /// * `label` - Label assigned to the new edge on the boundary line.
    pub fn clip_half_plane<L: Copy>(
        &self,
        subject: &[LabeledVertex<L>],
        plane: &HalfPlane,
        label: L,
    ) -> Vec<LabeledVertex<L>> {
        if subject.len() < 3 {
            return Vec::new();
        }

        // Scale the tolerance with the normal so it is measured in distance units.
        let tol = self.tolerance * plane.normal.length().max(1.0);
        let mut clipped = Vec::with_capacity(subject.len() + 1);

        for (i, start) in subject.iter().enumerate() {
            let end = &subject[(i + 1) % subject.len()];
            let s_offset = plane.signed_offset(start.position);
            let e_offset = plane.signed_offset(end.position);
            let s_inside = s_offset <= tol;
            let e_inside = e_offset <= tol;

            if s_inside {
                clipped.push(*start);
                if !e_inside {
                    // Edge leaves the region; the boundary line continues from the exit point.
                    clipped.push(LabeledVertex {
                        position: intersect(start.position, end.position, s_offset, e_offset),
                        edge_label: label,
                    });
                }
            } else if e_inside {
                // Edge enters the region; the remainder keeps the original label.
                clipped.push(LabeledVertex {
                    position: intersect(start.position, end.position, s_offset, e_offset),
                    edge_label: start.edge_label,
                });
            }
        }

        self.remove_degenerate(clipped)
    }

    /// Drops vertices that coincide with their successor, merging zero-length edges away.
    fn remove_degenerate<L: Copy>(&self, polygon: Vec<LabeledVertex<L>>) -> Vec<LabeledVertex<L>> {
        let mut result: Vec<LabeledVertex<L>> = Vec::with_capacity(polygon.len());
        for vertex in polygon {
            match result.last() {
                Some(prev) if prev.position.distance(vertex.position) <= self.tolerance => {
                    // prev → vertex has no length; vertex's outgoing edge replaces it.
                    let last = result.len() - 1;
                    result[last].edge_label = vertex.edge_label;
                }
                _ => result.push(vertex),
            }
        }
        while result.len() > 1 {
            let first = result[0].position;
            let last = result[result.len() - 1].position;
            if first.distance(last) > self.tolerance {
                break;
            }
            result.pop();
        }
        if result.len() < 3 { Vec::new() } else { result }
    }
}

/// Intersection of segment `a → b` with the boundary line, given the signed offsets.
#[inline]
fn intersect(a: Point2D, b: Point2D, a_offset: f64, b_offset: f64) -> Point2D {
    let denominator = a_offset - b_offset;
    if denominator.abs() < constants::EPSILON_F64 {
        return a;
    }
    let t = (a_offset / denominator).clamp(0.0, 1.0);
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<LabeledVertex<Option<usize>>> {
        PolygonClipper::labeled(
            &[
                Point2D::new(0.0, 0.0),
                Point2D::new(4.0, 0.0),
                Point2D::new(4.0, 4.0),
                Point2D::new(0.0, 4.0),
            ],
            None,
        )
    }

    fn area<L>(polygon: &[LabeledVertex<L>]) -> f64 {
        let n = polygon.len();
        let twice: f64 = (0..n)
            .map(|i| polygon[i].position.perp_dot(polygon[(i + 1) % n].position))
            .sum();
        0.5 * twice.abs()
    }

    #[test]
    fn bisector_halves_square_and_labels_new_edge() {
        let plane = HalfPlane::closer_to(Point2D::new(1.0, 2.0), Point2D::new(3.0, 2.0));
        let clipped = PolygonClipper::new().clip_half_plane(&square(), &plane, Some(7));

        assert_eq!(clipped.len(), 4);
        assert_relative_eq!(area(&clipped), 8.0, epsilon = 1e-9);
        assert!(clipped.iter().all(|v| v.position.x <= 2.0 + 1e-9));

        let labeled: Vec<_> = clipped.iter().filter(|v| v.edge_label == Some(7)).collect();
        assert_eq!(labeled.len(), 1);
        assert_relative_eq!(labeled[0].position.x, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn plane_outside_polygon_keeps_it_unchanged() {
        let plane = HalfPlane::closer_to(Point2D::new(2.0, 2.0), Point2D::new(20.0, 2.0));
        let clipped = PolygonClipper::new().clip_half_plane(&square(), &plane, Some(1));
        assert_eq!(clipped, square());
    }

    #[test]
    fn plane_excluding_polygon_empties_it() {
        let plane = HalfPlane::closer_to(Point2D::new(20.0, 2.0), Point2D::new(10.0, 2.0));
        let clipped = PolygonClipper::new().clip_half_plane(&square(), &plane, Some(1));
        assert!(clipped.is_empty());
    }

    #[test]
    fn cut_through_corner_removes_duplicate_vertex() {
        // Boundary passes exactly through (4,0) and (0,4).
        let plane = HalfPlane {
            origin: Point2D::new(2.0, 2.0),
            normal: Point2D::new(1.0, 1.0),
        };
        let clipped = PolygonClipper::new().clip_half_plane(&square(), &plane, Some(3));
        assert_eq!(clipped.len(), 3);
        assert_relative_eq!(area(&clipped), 8.0, epsilon = 1e-9);
        assert_eq!(clipped.iter().filter(|v| v.edge_label == Some(3)).count(), 1);
    }
}
