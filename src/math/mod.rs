// src/math/mod.rs
pub mod algorithms;
pub mod error;
pub mod point_distribution;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{MathError, MathResult},
        point_distribution::{
            obstacles::{
                BACKGROUND_INTENSITY, FusedCluster, Grid, PointFuser, corner_offsets,
                extract_obstacles, fuse_points, push_corner_offsets,
            },
            voronoi::{DiagramBuilder, SpadeDiagramBuilder, VoronoiDiagram, VoronoiEdge, VoronoiSite},
        },
        types::*,
        utils::rounding::{round_to_base, round_to_default_base, snap_point},
    };
}
