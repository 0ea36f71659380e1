//! Smooth chart paths through sampled points.

use crate::{
    foundation::core::{BezPath, Point},
    foundation::error::{ReelError, ReelResult},
    foundation::math::{Fnv1a64, content_id},
};

pub const DEFAULT_TENSION: f64 = 0.35;

/// How consecutive samples are joined.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStyle {
    /// Catmull-Rom spline emitted as cubic Bezier segments.
    Smooth { tension: f64 },
    /// Straight polyline.
    Linear,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::Smooth {
            tension: DEFAULT_TENSION,
        }
    }
}

/// Validate inputs, then build the path for `style`.
pub fn build_path(points: &[Point], style: PathStyle) -> ReelResult<BezPath> {
    if let Some(p) = points.iter().find(|p| !p.is_finite()) {
        return Err(ReelError::validation(format!(
            "path points must be finite, got {p:?}"
        )));
    }
    match style {
        PathStyle::Smooth { tension } => {
            if !tension.is_finite() || tension < 0.0 {
                return Err(ReelError::validation(format!(
                    "spline tension must be finite and >= 0, got {tension}"
                )));
            }
            Ok(build_smooth_path(points, tension))
        }
        PathStyle::Linear => Ok(build_polyline(points)),
    }
}

/// Interpolating Catmull-Rom spline through every point, in order.
///
/// End segments reuse the first/last point as their missing neighbour, so the curve never
/// overshoots past the data at the boundaries. Fewer than two points yield an empty path.
pub fn build_smooth_path(points: &[Point], tension: f64) -> BezPath {
    let mut path = BezPath::new();
    if points.len() < 2 {
        return path;
    }

    path.move_to(points[0]);
    let last = points.len() - 1;
    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];

        let cp1 = p1 + (p2 - p0) * (tension / 6.0);
        let cp2 = p2 - (p3 - p1) * (tension / 6.0);
        path.curve_to(cp1, cp2, p2);
    }
    path
}

pub fn build_polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if points.len() < 2 {
        return path;
    }
    path.move_to(points[0]);
    for &p in &points[1..] {
        path.line_to(p);
    }
    path
}

/// Deterministic id for rendering-layer defs (glow filters, gradients) attached to a series.
pub fn path_id(prefix: &str, points: &[Point]) -> String {
    let mut h = Fnv1a64::new_default();
    h.write_u64(points.len() as u64);
    for p in points {
        h.write_f64(p.x);
        h.write_f64(p.y);
    }
    content_id(prefix, h.finish())
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/spline.rs"]
mod tests;
