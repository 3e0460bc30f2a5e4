// src/math/algorithms/mod.rs

pub mod clipping;

pub use clipping::{HalfPlane, LabeledVertex, PolygonClipper};
