// src/math/types/point.rs
use super::*;

/// Eine Rasterzelle in 1-basierter `(row, col)`-Zählung.
///
/// Row 1 is the top scan line, col 1 the leftmost column. The coordinates are
/// signed so that offsets around a cell may step outside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPoint {
    pub row: i32,
    pub col: i32,
}

impl GridPoint {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Quadrierter euklidischer Abstand, exakt in Ganzzahlen.
    pub fn distance_squared(&self, other: GridPoint) -> i64 {
        let dr = i64::from(self.row) - i64::from(other.row);
        let dc = i64::from(self.col) - i64::from(other.col);
        dr * dr + dc * dc
    }

    /// `x` carries the row, `y` the column.
    pub fn to_dvec2(&self) -> Point2D {
        Point2D::new(f64::from(self.row), f64::from(self.col))
    }
}

impl From<GridPoint> for Point2D {
    fn from(p: GridPoint) -> Self {
        p.to_dvec2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_squared_is_symmetric_and_exact() {
        let a = GridPoint::new(1, 1);
        let b = GridPoint::new(4, 5);
        assert_eq!(a.distance_squared(b), 25);
        assert_eq!(b.distance_squared(a), 25);
        assert_eq!(a.distance_squared(a), 0);
    }

    #[test]
    fn conversion_keeps_component_order() {
        let p: Point2D = GridPoint::new(3, 7).into();
        assert_eq!(p, Point2D::new(3.0, 7.0));
    }
}
