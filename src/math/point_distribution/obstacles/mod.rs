// src/math/point_distribution/obstacles/mod.rs

// Hindernis-Extraktion aus Rasterkarten und Fusion zu Voronoi-Sites
pub mod extract;
pub mod fusion;
pub mod grid;
pub mod jitter;

pub use self::extract::{BACKGROUND_INTENSITY, extract_obstacles};
pub use self::fusion::{FusedCluster, PointFuser, fuse_points};
pub use self::grid::Grid;
pub use self::jitter::{corner_offsets, push_corner_offsets};
