use crate::{
    foundation::core::Point,
    foundation::error::{ReelError, ReelResult},
};

/// Plot rectangle a series is mapped into (SVG coordinates, y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChartArea {
    pub width: f64,
    pub height: f64,
    /// Horizontal inset on both sides so end points are not clipped.
    #[serde(default)]
    pub x_padding: f64,
}

impl Default for ChartArea {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 200.0,
            x_padding: 0.0,
        }
    }
}

/// Vertical value scale shared by every series drawn in one chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub padded_min: f64,
    pub padded_range: f64,
}

impl ValueScale {
    /// Fit all series with 10% headroom above and below. Flat data gets a unit range.
    pub fn fit(series: &[&[f64]]) -> ReelResult<Self> {
        let mut values = series.iter().flat_map(|s| s.iter().copied()).peekable();
        if values.peek().is_none() {
            return Err(ReelError::validation("value scale needs at least one value"));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            if !v.is_finite() {
                return Err(ReelError::validation(format!(
                    "chart values must be finite, got {v}"
                )));
            }
            min = min.min(v);
            max = max.max(v);
        }

        let range = if max > min { max - min } else { 1.0 };
        Ok(Self {
            padded_min: min - range * 0.1,
            padded_range: range * 1.2,
        })
    }
}

/// Map a series onto evenly spaced plot points. Series shorter than two values map to nothing.
pub fn chart_points(values: &[f64], scale: ValueScale, area: ChartArea) -> Vec<Point> {
    if values.len() < 2 {
        return Vec::new();
    }
    let drawable = (area.width - area.x_padding * 2.0).max(1.0);
    let last = (values.len() - 1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Point::new(
                area.x_padding + (i as f64 / last) * drawable,
                area.height - ((v - scale.padded_min) / scale.padded_range) * area.height,
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/chart.rs"]
mod tests;
