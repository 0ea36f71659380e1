//! Keyframed camera moves: zoom, pan and roll resolved per frame.

use crate::{
    animation::ease::Ease,
    foundation::core::{Affine, FrameIndex, Size, Vec2},
    foundation::error::{ReelError, ReelResult},
    foundation::math::{clamp01, lerp},
};

/// One camera anchor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraKeyframe {
    pub frame: u64,
    /// Zoom factor (1 = 100%).
    pub scale: f64,
    /// Horizontal pan in percent of the viewport; positive pans the camera right.
    pub x: f64,
    /// Vertical pan in percent of the viewport; positive pans the camera down.
    pub y: f64,
    /// Roll in degrees. Absent means 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// Easing for the move *into* this keyframe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Ease>,
}

impl CameraKeyframe {
    pub fn new(frame: u64, scale: f64, x: f64, y: f64) -> Self {
        Self {
            frame,
            scale,
            x,
            y,
            rotation: None,
            easing: None,
        }
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = Some(easing);
        self
    }

    fn state(&self) -> CameraState {
        CameraState {
            scale: self.scale,
            x: self.x,
            y: self.y,
            rotation: self.rotation.unwrap_or(0.0),
        }
    }
}

/// Instantaneous camera value vector.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CameraState {
    pub scale: f64,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
        }
    }
}

impl CameraState {
    /// Content transform: content moves opposite to the camera pan.
    pub fn transform(&self) -> CameraTransform {
        CameraTransform {
            scale: self.scale,
            translate_x_pct: -self.x,
            translate_y_pct: -self.y,
            rotation_deg: self.rotation,
        }
    }
}

/// Content-space transform, applied as `scale`, then `translate` (percent), then `rotate`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CameraTransform {
    pub scale: f64,
    pub translate_x_pct: f64,
    pub translate_y_pct: f64,
    pub rotation_deg: f64,
}

impl CameraTransform {
    /// Equivalent affine map for a viewport, pivoting about its centre.
    pub fn to_affine(&self, viewport: Size) -> Affine {
        let center = Vec2::new(viewport.width * 0.5, viewport.height * 0.5);
        let pan = Vec2::new(
            viewport.width * self.translate_x_pct / 100.0,
            viewport.height * self.translate_y_pct / 100.0,
        );

        // Canonical order:
        // T(center) * S(scale) * T(pan) * R(rot) * T(-center)
        Affine::translate(center)
            * Affine::scale(self.scale)
            * Affine::translate(pan)
            * Affine::rotate(self.rotation_deg.to_radians())
            * Affine::translate(-center)
    }
}

/// Keyframes sorted by frame, one key per frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CameraTimeline {
    keys: Vec<CameraKeyframe>,
}

impl CameraTimeline {
    /// Sort a copy of `keys`. When several keys share a frame the last declared one wins.
    pub fn new(keys: &[CameraKeyframe]) -> ReelResult<Self> {
        if keys.is_empty() {
            return Err(ReelError::validation(
                "camera timeline needs at least one keyframe",
            ));
        }
        for k in keys {
            let values = [k.scale, k.x, k.y, k.rotation.unwrap_or(0.0)];
            if values.iter().any(|v| !v.is_finite()) {
                return Err(ReelError::validation(format!(
                    "camera keyframe at frame {} has non-finite values",
                    k.frame
                )));
            }
            if let Some(easing) = k.easing
                && !easing.is_valid()
            {
                return Err(ReelError::validation(format!(
                    "camera keyframe at frame {} has invalid easing {easing:?}",
                    k.frame
                )));
            }
        }

        // Stable sort keeps declaration order within equal frames.
        let mut sorted = keys.to_vec();
        sorted.sort_by_key(|k| k.frame);

        let mut deduped: Vec<CameraKeyframe> = Vec::with_capacity(sorted.len());
        for k in sorted {
            match deduped.last_mut() {
                Some(prev) if prev.frame == k.frame => *prev = k,
                _ => deduped.push(k),
            }
        }
        if deduped.len() != keys.len() {
            tracing::warn!(
                declared = keys.len(),
                kept = deduped.len(),
                "duplicate camera keyframe frames collapsed (last declared wins)"
            );
        }

        Ok(Self { keys: deduped })
    }

    pub fn keys(&self) -> &[CameraKeyframe] {
        &self.keys
    }

    /// Camera value at `frame`. Holds the first/last key outside the keyed span.
    pub fn resolve(&self, frame: FrameIndex) -> CameraState {
        let f = frame.0;
        let idx = self.keys.partition_point(|k| k.frame <= f);

        if idx == 0 {
            return self.keys[0].state();
        }
        if idx >= self.keys.len() {
            return self.keys[self.keys.len() - 1].state();
        }

        let current = &self.keys[idx - 1];
        let next = &self.keys[idx];
        let span = (next.frame - current.frame) as f64;
        let mut t = clamp01((f - current.frame) as f64 / span);
        if let Some(easing) = next.easing {
            t = easing.apply(t);
        }

        let (a, b) = (current.state(), next.state());
        let out = CameraState {
            scale: lerp(a.scale, b.scale, t),
            x: lerp(a.x, b.x, t),
            y: lerp(a.y, b.y, t),
            rotation: lerp(a.rotation, b.rotation, t),
        };
        debug_assert!(
            [out.scale, out.x, out.y, out.rotation]
                .iter()
                .all(|v| v.is_finite()),
            "camera resolved to {out:?}"
        );
        out
    }
}

/// One-shot resolution. Prefer [`CameraTimeline`] when the keyframes are reused every frame.
pub fn resolve_camera(frame: FrameIndex, keyframes: &[CameraKeyframe]) -> ReelResult<CameraState> {
    Ok(CameraTimeline::new(keyframes)?.resolve(frame))
}

#[cfg(test)]
#[path = "../../tests/unit/camera/timeline.rs"]
mod tests;
