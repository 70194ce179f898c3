//! Planar geometry primitives for the toroidal predator world
//!
//! All positions are `glam::DVec2`. The world is the square `[-1, 1] x [-1, 1]`
//! and wraps on both axes. Distances are plain Euclidean (not toroidal), which
//! matches how perception ranges are measured.

use std::f64::consts::{PI, TAU};

use glam::DVec2;
use thiserror::Error;

/// Lower edge of the world on both axes
pub const WORLD_MIN: f64 = -1.0;
/// Upper edge of the world on both axes
pub const WORLD_MAX: f64 = 1.0;

/// Failures raised by the geometry primitives
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A vector or scalar held NaN or infinity
    #[error("non-finite {what}")]
    NonFinite { what: &'static str },

    /// Sector grid parameters cannot describe any cell
    #[error("invalid sector grid: cell size {cell_size}, {cells} cells per side")]
    InvalidSectorGrid { cell_size: f64, cells: usize },
}

/// Reject vectors containing NaN or infinity
pub fn ensure_finite(v: DVec2, what: &'static str) -> Result<DVec2, GeometryError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GeometryError::NonFinite { what })
    }
}

/// Wrap an angle into `[0, 2π)`
pub fn wrap_angle(theta: f64) -> f64 {
    let wrapped = theta.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an angle into `(-π, π]`
pub fn signed_angle(theta: f64) -> f64 {
    let wrapped = wrap_angle(theta);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Unit vector pointing along `theta`
#[inline]
pub fn unit_vector(theta: f64) -> DVec2 {
    DVec2::new(theta.cos(), theta.sin())
}

/// Wrap `value` into `[min, max]`, re-entering from the opposite edge.
///
/// Values more than one width outside the range are folded as many times as
/// needed.
pub fn wrap_float_in(value: f64, min: f64, max: f64) -> f64 {
    if (min..=max).contains(&value) {
        return value;
    }
    let width = max - min;
    min + (value - min).rem_euclid(width)
}

/// Wrap a position onto the world torus
pub fn wrap_position(pos: DVec2) -> DVec2 {
    DVec2::new(
        wrap_float_in(pos.x, WORLD_MIN, WORLD_MAX),
        wrap_float_in(pos.y, WORLD_MIN, WORLD_MAX),
    )
}

/// Euclidean distance between two points, failing on malformed input
pub fn distance(a: DVec2, b: DVec2) -> Result<f64, GeometryError> {
    let a = ensure_finite(a, "observer position")?;
    let b = ensure_finite(b, "target position")?;
    Ok(a.distance(b))
}

/// Absolute bearing from `from` to `to`, in `[0, 2π)`
pub fn bearing(from: DVec2, to: DVec2) -> Result<f64, GeometryError> {
    let from = ensure_finite(from, "observer position")?;
    let to = ensure_finite(to, "target position")?;
    let delta = to - from;
    Ok(wrap_angle(delta.y.atan2(delta.x)))
}

/// Turn needed by an observer at `pos` facing `heading` to face `target`.
///
/// The result lies in `(-π, π]`; positive values are counter-clockwise turns.
pub fn lead_angle(pos: DVec2, heading: f64, target: DVec2) -> Result<f64, GeometryError> {
    if !heading.is_finite() {
        return Err(GeometryError::NonFinite { what: "heading" });
    }
    Ok(signed_angle(bearing(pos, target)? - heading))
}

/// Map a world position to a `(row, col)` cell of an `n x n` grid with cell
/// size `cell_size`, anchored at the world's minimum corner.
///
/// Rows follow the y axis and columns the x axis. Positions past the grid edge
/// are clamped onto the border cells.
pub fn position_to_sector(
    cell_size: f64,
    cells: usize,
    pos: DVec2,
) -> Result<(usize, usize), GeometryError> {
    if cells == 0 || !cell_size.is_finite() || cell_size <= 0.0 {
        return Err(GeometryError::InvalidSectorGrid { cell_size, cells });
    }
    let pos = ensure_finite(pos, "sector sample")?;
    let last = (cells - 1) as f64;
    let index = |v: f64| ((v - WORLD_MIN) / cell_size).floor().clamp(0.0, last) as usize;
    Ok((index(pos.y), index(pos.x)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_wrap_angle_range() {
        for raw in [-7.0 * PI, -TAU, -0.1, 0.0, 1.0, TAU, TAU + 0.5, 13.0 * PI] {
            let w = wrap_angle(raw);
            assert!((0.0..TAU).contains(&w), "{raw} wrapped to {w}");
        }
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < EPS);
        assert!((wrap_angle(-0.5) - (TAU - 0.5)).abs() < EPS);
    }

    #[test]
    fn test_signed_angle() {
        assert!((signed_angle(1.5 * PI) + 0.5 * PI).abs() < EPS);
        assert!((signed_angle(0.25 * PI) - 0.25 * PI).abs() < EPS);
        assert!((signed_angle(PI) - PI).abs() < EPS);
    }

    #[test]
    fn test_wrap_float_multiple_widths() {
        assert_eq!(wrap_float_in(0.5, -1.0, 1.0), 0.5);
        assert!((wrap_float_in(1.25, -1.0, 1.0) + 0.75).abs() < EPS);
        assert!((wrap_float_in(-1.25, -1.0, 1.0) - 0.75).abs() < EPS);
        // Five widths plus a quarter
        assert!((wrap_float_in(10.5, -1.0, 1.0) - 0.5).abs() < EPS);
        assert!((wrap_float_in(-9.5, -1.0, 1.0) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_distance_rejects_nan() {
        let err = distance(DVec2::new(f64::NAN, 0.0), DVec2::ZERO).unwrap_err();
        assert!(matches!(err, GeometryError::NonFinite { .. }));
        assert!((distance(DVec2::ZERO, DVec2::new(3.0, 4.0)).unwrap() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_lead_angle_accounts_for_heading() {
        // Target straight up, observer already facing up
        let a = lead_angle(DVec2::ZERO, 0.5 * PI, DVec2::new(0.0, 1.0)).unwrap();
        assert!(a.abs() < EPS);

        // Target straight up, observer facing along +x: quarter turn left
        let a = lead_angle(DVec2::ZERO, 0.0, DVec2::new(0.0, 1.0)).unwrap();
        assert!((a - 0.5 * PI).abs() < EPS);

        // Target straight down, observer facing along +x: quarter turn right
        let a = lead_angle(DVec2::ZERO, 0.0, DVec2::new(0.0, -1.0)).unwrap();
        assert!((a + 0.5 * PI).abs() < EPS);
    }

    #[test]
    fn test_position_to_sector() {
        // 4 x 4 grid of 0.5 cells over [-1, 1]
        assert_eq!(position_to_sector(0.5, 4, DVec2::new(-1.0, -1.0)).unwrap(), (0, 0));
        assert_eq!(position_to_sector(0.5, 4, DVec2::new(0.1, -0.6)).unwrap(), (0, 2));
        assert_eq!(position_to_sector(0.5, 4, DVec2::new(1.0, 1.0)).unwrap(), (3, 3));
        // Off-grid samples clamp to the border
        assert_eq!(position_to_sector(0.5, 4, DVec2::new(-3.0, 5.0)).unwrap(), (3, 0));
        assert!(position_to_sector(0.0, 4, DVec2::ZERO).is_err());
        assert!(position_to_sector(0.5, 0, DVec2::ZERO).is_err());
    }
}
