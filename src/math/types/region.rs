// src/math/types/region.rs

use crate::math::{
    error::{MathError, MathResult},
    types::{Bounds2D, Point2D},
    utils::constants,
};
use geo::{Area, ConvexHull, LineString, MultiPoint, Polygon};

/// Konvexes Begrenzungspolygon, an dem die Voronoi-Zellen abgeschnitten werden.
///
/// Corners may be given in any order; they are stored counter-clockwise in
/// convex-hull order. Sites are not required to lie inside the region.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingRegion {
    vertices: Vec<Point2D>,
}

impl BoundingRegion {
    /// Builds a region from its corner points.
    ///
    /// Fails if fewer than three corners are given, if a coordinate is not
    /// finite, if the corners enclose no area, or if a corner lies strictly
    /// inside the hull of the others (non-convex input).
    pub fn new(corners: Vec<Point2D>) -> MathResult<Self> {
        if corners.len() < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: corners.len(),
            });
        }
        if corners.iter().any(|c| !c.is_finite()) {
            return Err(MathError::InvalidConfiguration {
                message: format!("Bounding region has non-finite corners: {:?}", corners),
            });
        }

        let mut distinct: Vec<Point2D> = Vec::with_capacity(corners.len());
        for corner in &corners {
            if !distinct.contains(corner) {
                distinct.push(*corner);
            }
        }

        let hull = MultiPoint::from(
            distinct
                .iter()
                .map(|p| (p.x, p.y))
                .collect::<Vec<(f64, f64)>>(),
        )
        .convex_hull();

        if hull.unsigned_area() <= constants::EPSILON_F64 {
            return Err(MathError::InvalidConfiguration {
                message: format!("Bounding region {:?} encloses no area", corners),
            });
        }

        // Exterior ring is closed; drop the repeated first coordinate.
        let ring: Vec<Point2D> = hull.exterior().coords().map(|c| Point2D::new(c.x, c.y)).collect();
        let mut vertices = ring[..ring.len().saturating_sub(1)].to_vec();

        if signed_area(&vertices) < 0.0 {
            vertices.reverse();
        }

        // Corners dropped by the hull may still lie on one of its edges.
        if let Some(inner) = distinct.iter().find(|c| strictly_inside(&vertices, **c)) {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Bounding region must be convex: corner {:?} lies inside the hull",
                    inner
                ),
            });
        }

        Ok(Self { vertices })
    }

    /// Achsenparalleles Rechteck von `min` bis `max`.
    pub fn rectangle(min: Point2D, max: Point2D) -> MathResult<Self> {
        let bounds = Bounds2D::new(min, max)?;
        Self::new(bounds.corners().to_vec())
    }

    /// Quadrat `[0, size]²`, as used for the default occupancy map.
    pub fn square(size: f64) -> MathResult<Self> {
        Self::rectangle(Point2D::ZERO, Point2D::splat(size))
    }

    /// Corners in counter-clockwise order.
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn bounds(&self) -> Bounds2D {
        // Non-empty by construction.
        let mut bounds = Bounds2D::from_points(self.vertices[0], self.vertices[0]);
        for v in &self.vertices[1..] {
            bounds.expand_to_include_point(*v);
        }
        bounds
    }

    pub fn area(&self) -> f64 {
        self.to_geo_polygon().unsigned_area()
    }

    /// Point-in-polygon test; points on the boundary count as inside.
    pub fn contains(&self, point: Point2D) -> bool {
        let n = self.vertices.len();
        (0..n).all(|i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            (b - a).perp_dot(point - a) >= -constants::EPSILON_F64
        })
    }

    pub fn to_geo_polygon(&self) -> Polygon<f64> {
        to_geo_polygon(&self.vertices)
    }
}

/// Wandelt einen Eckpunktzug in ein `geo::Polygon` um.
pub fn to_geo_polygon(vertices: &[Point2D]) -> Polygon<f64> {
    let coords: Vec<(f64, f64)> = vertices.iter().map(|p| (p.x, p.y)).collect();
    Polygon::new(LineString::from(coords), vec![])
}

/// `true` if `point` is farther than the geometry tolerance inside every edge
/// of the counter-clockwise polygon.
fn strictly_inside(ccw: &[Point2D], point: Point2D) -> bool {
    let n = ccw.len();
    (0..n).all(|i| {
        let a = ccw[i];
        let edge = ccw[(i + 1) % n] - a;
        edge.perp_dot(point - a) > constants::GEOMETRY_TOLERANCE * edge.length()
    })
}

fn signed_area(vertices: &[Point2D]) -> f64 {
    let n = vertices.len();
    let mut sum = 0.0;
    for i in 0..n {
        sum += vertices[i].perp_dot(vertices[(i + 1) % n]);
    }
    0.5 * sum
}
