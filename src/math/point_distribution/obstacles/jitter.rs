// src/math/point_distribution/obstacles/jitter.rs

use crate::math::types::GridPoint;

/// Die vier diagonalen Nachbarn eines Punktes.
///
/// Order: `(r-1, c-1)`, `(r+1, c-1)`, `(r-1, c+1)`, `(r+1, c+1)`.
pub fn corner_offsets(center: GridPoint) -> [GridPoint; 4] {
    let GridPoint { row, col } = center;
    [
        GridPoint::new(row - 1, col - 1),
        GridPoint::new(row + 1, col - 1),
        GridPoint::new(row - 1, col + 1),
        GridPoint::new(row + 1, col + 1),
    ]
}

/// Appends the four corner offsets of `center` to `points`.
pub fn push_corner_offsets(points: &mut Vec<GridPoint>, center: GridPoint) {
    points.extend(corner_offsets(center));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_surround_center() {
        let corners = corner_offsets(GridPoint::new(5, 8));
        assert_eq!(
            corners,
            [
                GridPoint::new(4, 7),
                GridPoint::new(6, 7),
                GridPoint::new(4, 9),
                GridPoint::new(6, 9),
            ]
        );
        assert!(corners.iter().all(|c| c.distance_squared(GridPoint::new(5, 8)) == 2));
    }

    #[test]
    fn push_appends_after_existing_points() {
        let mut points = vec![GridPoint::new(1, 1)];
        push_corner_offsets(&mut points, GridPoint::new(1, 1));
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], GridPoint::new(1, 1));
        assert_eq!(points[1], GridPoint::new(0, 0));
    }
}
