// src/math/point_distribution/obstacles/fusion.rs

use crate::math::types::{FusedPoint, Point2D};
use bevy::log::debug;

/// Ein Cluster fusionierter Rohpunkte.
#[derive(Debug, Clone, PartialEq)]
pub struct FusedCluster {
    /// Koordinatenweiser Mittelwert aller Mitglieder.
    pub centroid: FusedPoint,
    /// Index of the seed point in the input.
    pub seed_index: usize,
    /// Input indices of all members, seed first, ascending.
    pub member_indices: Vec<usize>,
}

impl FusedCluster {
    pub fn len(&self) -> usize {
        self.member_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.member_indices.is_empty()
    }
}

/// Greedy single-pass point fusion.
///
/// Points are visited in input order. Each point not yet consumed seeds a
/// cluster and absorbs every later unconsumed point whose squared distance *to
/// the seed* is strictly below `radius²`. Membership is never tested against the
/// running centroid or other members, so two members of one cluster may be
/// farther apart than the radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointFuser {
    radius: f64,
}

impl PointFuser {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Squared threshold, or `None` when the radius disables fusion (≤ 0 or not finite).
    fn threshold_squared(&self) -> Option<f64> {
        (self.radius > 0.0 && self.radius.is_finite()).then(|| self.radius * self.radius)
    }

    /// Fuses `points` and returns the clusters in seed order.
    ///
    /// Accepts raw [`GridPoint`](crate::math::types::GridPoint)s as well as already fused points.
    pub fn fuse_clusters<P>(&self, points: &[P]) -> Vec<FusedCluster>
    where
        P: Into<Point2D> + Copy,
    {
        let threshold = self.threshold_squared();
        let positions: Vec<Point2D> = points.iter().map(|&p| p.into()).collect();
        let mut consumed = vec![false; positions.len()];
        let mut clusters = Vec::new();

        for (i, &seed) in positions.iter().enumerate() {
            if consumed[i] {
                continue;
            }
            consumed[i] = true;

            let mut members = vec![i];
            let mut sum = seed;

            if let Some(threshold) = threshold {
                for (j, &candidate) in positions.iter().enumerate().skip(i + 1) {
                    if consumed[j] || seed.distance_squared(candidate) >= threshold {
                        continue;
                    }
                    consumed[j] = true;
                    members.push(j);
                    sum += candidate;
                }
            }

            clusters.push(FusedCluster {
                centroid: sum / members.len() as f64,
                seed_index: i,
                member_indices: members,
            });
        }

        debug!(
            "Fused {} points into {} clusters (radius {})",
            positions.len(),
            clusters.len(),
            self.radius
        );
        clusters
    }

    /// Fuses `points` and returns only the centroids, in seed order.
    pub fn fuse<P>(&self, points: &[P]) -> Vec<FusedPoint>
    where
        P: Into<Point2D> + Copy,
    {
        self.fuse_clusters(points)
            .into_iter()
            .map(|c| c.centroid)
            .collect()
    }
}

/// Shorthand for `PointFuser::new(radius).fuse(points)`.
pub fn fuse_points<P>(points: &[P], radius: f64) -> Vec<FusedPoint>
where
    P: Into<Point2D> + Copy,
{
    PointFuser::new(radius).fuse(points)
}
