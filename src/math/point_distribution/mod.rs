// src/math/point_distribution/mod.rs

// Hindernispunkte aus Rasterkarten gewinnen und als Voronoi-Sites weiterreichen
pub mod obstacles;
pub mod voronoi;

pub use self::obstacles::{
    FusedCluster, Grid, PointFuser, extract_obstacles, fuse_points,
};
pub use self::voronoi::{
    DiagramBuilder, SpadeDiagramBuilder, VoronoiDiagram, VoronoiEdge, VoronoiSite,
};
