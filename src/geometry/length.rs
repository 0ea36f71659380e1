//! Arc length of chart paths, memoized for stroke-dash draw-on animations.

use kurbo::ParamCurveArclen as _;

use crate::{
    foundation::core::{BezPath, Point},
    foundation::error::ReelResult,
    foundation::math::clamp01,
    geometry::spline::{PathStyle, build_path},
};

const ARCLEN_ACCURACY: f64 = 1e-6;

pub fn path_length(path: &BezPath) -> f64 {
    path.segments().map(|seg| seg.arclen(ARCLEN_ACCURACY)).sum()
}

/// Stroke dash offset that reveals `draw_progress` of a path of `length`.
pub fn dash_offset(length: f64, draw_progress: f64) -> f64 {
    length * (1.0 - clamp01(draw_progress))
}

#[derive(Clone, Debug)]
struct CacheEntry {
    points: Vec<Point>,
    style: PathStyle,
    length: f64,
}

/// Single-entry memo of a series' path length.
///
/// The entry is keyed on the exact point values and path style; any difference recomputes, so a
/// stale length is never returned.
#[derive(Clone, Debug, Default)]
pub struct PathLengthCache {
    entry: Option<CacheEntry>,
}

impl PathLengthCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(&mut self, points: &[Point], style: PathStyle) -> ReelResult<f64> {
        if let Some(entry) = &self.entry
            && entry.style == style
            && entry.points == points
        {
            return Ok(entry.length);
        }

        let length = path_length(&build_path(points, style)?);
        tracing::debug!(points = points.len(), length, "path length recomputed");
        self.entry = Some(CacheEntry {
            points: points.to_vec(),
            style,
            length,
        });
        Ok(length)
    }

    pub fn is_cached_for(&self, points: &[Point], style: PathStyle) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|e| e.style == style && e.points == points)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/length.rs"]
mod tests;
