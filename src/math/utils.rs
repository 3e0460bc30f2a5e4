// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON_F64: f64 = 1e-10;
    /// Toleranz für geometrische Vergleiche in Pixelkoordinaten.
    pub const GEOMETRY_TOLERANCE: f64 = 1e-7;
}

/// Rundung auf Vielfache einer Basis
pub mod rounding {
    use crate::math::types::Point2D;

    /// Default base used by the occupancy-map tooling.
    pub const DEFAULT_BASE: i64 = 5;

    /// Snaps `value` to the nearest multiple of `base`.
    ///
    /// Ties go to the even quotient (`12.5` with base 5 → `10`, `17.5` → `20`).
    /// A zero base snaps to the nearest integer under the same tie rule.
    /// Computed in `f64`: huge inputs stay finite, NaN and infinities pass through.
    pub fn round_to_base(value: f64, base: i64) -> f64 {
        if base == 0 {
            return value.round_ties_even();
        }
        let b = base as f64;
        b * (value / b).round_ties_even()
    }

    pub fn round_to_default_base(value: f64) -> f64 {
        round_to_base(value, DEFAULT_BASE)
    }

    /// Snaps both components of a point.
    pub fn snap_point(point: Point2D, base: i64) -> Point2D {
        Point2D::new(round_to_base(point.x, base), round_to_base(point.y, base))
    }

}
