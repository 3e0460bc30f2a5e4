// src/math/point_distribution/voronoi/mod.rs

// Anbindung an die externe Delaunay-Bibliothek (spade) und Extraktion des Diagramms
pub mod builder;
pub mod voronoi_diagram;

pub use self::builder::{DiagramBuilder, SpadeDiagramBuilder};
pub use self::voronoi_diagram::{VoronoiDiagram, VoronoiEdge, VoronoiExtractor, VoronoiSite};
