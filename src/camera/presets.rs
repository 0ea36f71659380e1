use crate::{animation::ease::Ease, camera::timeline::CameraKeyframe};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanDirection {
    Left,
    #[default]
    Right,
    Up,
    Down,
    Diagonal,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KenBurnsOpts {
    pub start_scale: f64,
    pub end_scale: f64,
    pub direction: PanDirection,
    /// Pan distance from centre, in viewport percent.
    pub amount: f64,
}

impl Default for KenBurnsOpts {
    fn default() -> Self {
        Self {
            start_scale: 1.0,
            end_scale: 1.15,
            direction: PanDirection::Right,
            amount: 10.0,
        }
    }
}

/// Slow zoom with a drift across the frame, eased with [`Ease::CAMERA_SMOOTH`].
pub fn ken_burns(start_frame: u64, end_frame: u64, opts: KenBurnsOpts) -> Vec<CameraKeyframe> {
    let a = opts.amount;
    let ((sx, sy), (ex, ey)) = match opts.direction {
        PanDirection::Left => ((a, 0.0), (-a, 0.0)),
        PanDirection::Right => ((-a, 0.0), (a, 0.0)),
        PanDirection::Up => ((0.0, a), (0.0, -a)),
        PanDirection::Down => ((0.0, -a), (0.0, a)),
        PanDirection::Diagonal => ((-a, -a), (a, a)),
    };

    vec![
        CameraKeyframe::new(start_frame, opts.start_scale, sx, sy),
        CameraKeyframe::new(end_frame, opts.end_scale, ex, ey).with_easing(Ease::CAMERA_SMOOTH),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ZoomToFeatureOpts {
    pub zoom_scale: f64,
    pub start_scale: f64,
    pub end_scale: f64,
}

impl Default for ZoomToFeatureOpts {
    fn default() -> Self {
        Self {
            zoom_scale: 1.5,
            start_scale: 0.8,
            end_scale: 0.8,
        }
    }
}

/// Push in on `(target_x, target_y)` by `hold_frame`, then pull back out by `end_frame`.
pub fn zoom_to_feature(
    start_frame: u64,
    hold_frame: u64,
    end_frame: u64,
    target_x: f64,
    target_y: f64,
    opts: ZoomToFeatureOpts,
) -> Vec<CameraKeyframe> {
    vec![
        CameraKeyframe::new(start_frame, opts.start_scale, 0.0, 0.0),
        CameraKeyframe::new(hold_frame, opts.zoom_scale, target_x, target_y)
            .with_easing(Ease::CAMERA_ZOOM_IN),
        CameraKeyframe::new(end_frame, opts.end_scale, 0.0, 0.0).with_easing(Ease::CAMERA_ZOOM_OUT),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/camera/presets.rs"]
mod tests;
