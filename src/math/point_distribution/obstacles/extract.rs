// src/math/point_distribution/obstacles/extract.rs

use super::grid::Grid;
use crate::math::types::GridPoint;
use bevy::log::debug;

/// Intensität freier Zellen (reines Weiß).
pub const BACKGROUND_INTENSITY: u8 = 255;

/// Collects every obstacle cell of `grid` as a 1-based `(row, col)` point.
///
/// A cell is an obstacle unless its value is exactly [`BACKGROUND_INTENSITY`].
/// Points come out in row-major scan order. [`Grid`] caps both sides at
/// [`MAX_DIMENSION`](super::grid::MAX_DIMENSION), so the `i32` counters cannot overflow.
pub fn extract_obstacles(grid: &Grid) -> Vec<GridPoint> {
    let mut points = Vec::new();
    for (values, row) in grid.rows().zip(1..) {
        for (&value, col) in values.iter().zip(1..) {
            if value != BACKGROUND_INTENSITY {
                points.push(GridPoint::new(row, col));
            }
        }
    }
    debug!(
        "Extracted {} obstacle cells from {}x{} grid",
        points.len(),
        grid.height(),
        grid.width()
    );
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_centre_obstacle() {
        let grid = Grid::from_rows(&[[255u8, 255, 255], [255, 0, 255], [255, 255, 255]]).unwrap();
        assert_eq!(extract_obstacles(&grid), vec![GridPoint::new(2, 2)]);
    }

    #[test]
    fn only_pure_white_is_background() {
        let grid = Grid::from_rows(&[[254u8, 255], [255, 1]]).unwrap();
        assert_eq!(
            extract_obstacles(&grid),
            vec![GridPoint::new(1, 1), GridPoint::new(2, 2)]
        );
    }

    #[test]
    fn row_major_one_based_order() {
        let grid = Grid::from_rows(&[[0u8, 0, 0], [0, 0, 0]]).unwrap();
        let expected: Vec<GridPoint> = (1..=2)
            .flat_map(|r| (1..=3).map(move |c| GridPoint::new(r, c)))
            .collect();
        assert_eq!(extract_obstacles(&grid), expected);
    }

    #[test]
    fn background_and_empty_grids_yield_nothing() {
        let white = Grid::new(4, 3, vec![BACKGROUND_INTENSITY; 12]).unwrap();
        assert!(extract_obstacles(&white).is_empty());
        let empty = Grid::new(0, 0, Vec::new()).unwrap();
        assert!(extract_obstacles(&empty).is_empty());
    }

    #[test]
    fn matches_cellwise_definition() {
        let rows: Vec<Vec<u8>> = (0..5)
            .map(|r| (0..7).map(|c| if (r * 7 + c) % 3 == 0 { 255 } else { (r * c) as u8 }).collect())
            .collect();
        let grid = Grid::from_rows(&rows).unwrap();
        let points = extract_obstacles(&grid);

        let mut expected = Vec::new();
        for r in 0..5 {
            for c in 0..7 {
                if grid.get(r, c) != Some(BACKGROUND_INTENSITY) {
                    expected.push(GridPoint::new(r as i32 + 1, c as i32 + 1));
                }
            }
        }
        assert_eq!(points, expected);
    }
}
