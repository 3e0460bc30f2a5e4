// src/math/types/mod.rs
pub mod bounds;
pub mod point;
pub mod region;

pub use bounds::*;
pub use point::*;
pub use region::*;

// Re-export häufig verwendete externe Typen
pub use bevy::math::DVec2;
pub use spade::Point2;

// Einheitliche Typen für das gesamte Modul
pub type Point2D = DVec2;
pub type SpadePoint = Point2<f64>;

/// Ein fusionierter Punkt: Mittelwert der Rohpunkte eines Clusters (`x` = Zeile, `y` = Spalte).
pub type FusedPoint = DVec2;

pub fn to_spade(p: Point2D) -> SpadePoint {
    SpadePoint::new(p.x, p.y)
}

pub fn from_spade(p: SpadePoint) -> Point2D {
    Point2D::new(p.x, p.y)
}
