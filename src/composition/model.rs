use std::collections::BTreeMap;

use crate::{
    animation::spring::Spring,
    beat::grid::{BeatGrid, DEFAULT_TOLERANCE_FRAMES},
    camera::{
        drift::HandheldDrift,
        timeline::{CameraKeyframe, CameraTimeline},
    },
    effects::transitions::{FlashPulse, ShotTransition},
    foundation::{
        core::{Fps, FrameIndex, Size},
        error::{ReelError, ReelResult},
    },
};

/// Declarative description of one shot's motion, as read from JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub fps: Fps,
    /// Total frames; valid frames are `0..duration`.
    pub duration: FrameIndex,
    /// Pixel size used to turn camera percentages into an affine map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Size>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub camera: Vec<CameraKeyframe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drift: Option<HandheldDrift>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shot: Option<ShotTransition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beat: Option<BeatTrack>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flashes: Vec<FlashPulse>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub springs: BTreeMap<String, Spring>, // stable keys
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BeatTrack {
    #[serde(flatten)]
    pub grid: BeatGrid,
    #[serde(default = "default_pulse_frequency")]
    pub pulse_frequency: f64,
    #[serde(default = "default_tolerance_frames")]
    pub tolerance_frames: f64,
}

fn default_pulse_frequency() -> f64 {
    1.0
}

fn default_tolerance_frames() -> f64 {
    DEFAULT_TOLERANCE_FRAMES
}

impl Default for BeatTrack {
    fn default() -> Self {
        Self {
            grid: BeatGrid::default(),
            pulse_frequency: default_pulse_frequency(),
            tolerance_frames: default_tolerance_frames(),
        }
    }
}

impl Scene {
    pub fn new(fps: Fps, duration: FrameIndex) -> Self {
        Self {
            fps,
            duration,
            viewport: None,
            camera: Vec::new(),
            drift: None,
            shot: None,
            beat: None,
            flashes: Vec::new(),
            springs: BTreeMap::new(),
        }
    }

    pub fn from_json(s: &str) -> ReelResult<Self> {
        let scene: Self = serde_json::from_str(s)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn validate(&self) -> ReelResult<()> {
        self.validate_with_camera().map(|_| ())
    }

    /// Validates the scene and returns the camera timeline built along the way,
    /// so callers that need it do not normalize the keyframes a second time.
    pub(crate) fn validate_with_camera(&self) -> ReelResult<Option<CameraTimeline>> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(ReelError::validation("fps must have num>0 and den>0"));
        }
        if self.duration.0 == 0 {
            return Err(ReelError::validation("duration must be > 0 frames"));
        }
        if let Some(viewport) = self.viewport
            && !(viewport.width.is_finite()
                && viewport.height.is_finite()
                && viewport.width > 0.0
                && viewport.height > 0.0)
        {
            return Err(ReelError::validation(
                "viewport width/height must be finite and > 0",
            ));
        }

        let camera = if self.camera.is_empty() {
            None
        } else {
            Some(CameraTimeline::new(&self.camera)?)
        };
        if let Some(drift) = &self.drift
            && [drift.drift_x, drift.drift_y, drift.rotate_scale]
                .iter()
                .any(|v| !v.is_finite())
        {
            return Err(ReelError::validation("drift amplitudes must be finite"));
        }
        if let Some(shot) = &self.shot {
            shot.validate()?;
        }
        if let Some(beat) = &self.beat {
            beat.grid.validate()?;
            if !beat.pulse_frequency.is_finite() || beat.pulse_frequency <= 0.0 {
                return Err(ReelError::validation(
                    "beat pulse_frequency must be finite and > 0",
                ));
            }
            if !beat.tolerance_frames.is_finite() || beat.tolerance_frames < 0.0 {
                return Err(ReelError::validation(
                    "beat tolerance_frames must be finite and >= 0",
                ));
            }
        }
        for flash in &self.flashes {
            flash.validate()?;
        }
        for (name, spring) in &self.springs {
            if name.trim().is_empty() {
                return Err(ReelError::validation("spring names must be non-empty"));
            }
            spring.validate().map_err(|e| match e {
                ReelError::Validation(msg) => {
                    ReelError::validation(format!("spring '{name}': {msg}"))
                }
                other => other,
            })?;
        }
        Ok(camera)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
