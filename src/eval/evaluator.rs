use std::collections::BTreeMap;

use crate::{
    camera::{
        drift::DriftSample,
        timeline::{CameraState, CameraTimeline, CameraTransform},
    },
    composition::model::Scene,
    effects::transitions::{ShotPhase, TransitionState},
    foundation::{
        core::{Affine, FrameIndex, FrameRange},
        error::{ReelError, ReelResult},
    },
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Every value a renderer needs for one frame of a [`Scene`].
pub struct FrameSample {
    pub frame: FrameIndex,
    /// Presentation time of the frame at the scene fps.
    pub time_secs: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<CameraSample>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drift: Option<DriftSample>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shot: Option<ShotSample>,
    /// Strongest white-flash overlay active on this frame, in `[0, 1]`.
    pub flash: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beat: Option<BeatSample>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub springs: BTreeMap<String, f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CameraSample {
    pub state: CameraState,
    pub transform: CameraTransform,
    /// Present when the scene declares a viewport.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affine: Option<Affine>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ShotSample {
    pub phase: ShotPhase,
    pub state: TransitionState,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BeatSample {
    /// Continuous beat position.
    pub beat: f64,
    pub on_beat: bool,
    pub pulse: f64,
}

/// Stateless evaluator from scene description to per-frame samples.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(scene))]
    /// Evaluate a single frame. Frames do not depend on each other, so any order is valid.
    pub fn eval_frame(scene: &Scene, frame: FrameIndex) -> ReelResult<FrameSample> {
        PreparedScene::new(scene)?.sample(frame)
    }

    #[tracing::instrument(skip(scene))]
    /// Evaluate every frame in `range`, validating the scene once.
    pub fn eval_range(scene: &Scene, range: FrameRange) -> ReelResult<Vec<FrameSample>> {
        let prepared = PreparedScene::new(scene)?;
        range.frames().map(|f| prepared.sample(f)).collect()
    }
}

/// A validated scene with its camera keys already sorted.
pub struct PreparedScene<'a> {
    scene: &'a Scene,
    camera: Option<CameraTimeline>,
}

impl<'a> PreparedScene<'a> {
    pub fn new(scene: &'a Scene) -> ReelResult<Self> {
        let camera = scene.validate_with_camera()?;
        Ok(Self { scene, camera })
    }

    pub fn scene(&self) -> &Scene {
        self.scene
    }

    pub fn sample(&self, frame: FrameIndex) -> ReelResult<FrameSample> {
        let scene = self.scene;
        if frame.0 >= scene.duration.0 {
            return Err(ReelError::evaluation(format!(
                "frame {} is out of bounds (duration {})",
                frame.0, scene.duration.0
            )));
        }

        let camera = self.camera.as_ref().map(|timeline| {
            let state = timeline.resolve(frame);
            let transform = state.transform();
            CameraSample {
                state,
                transform,
                affine: scene.viewport.map(|v| transform.to_affine(v)),
            }
        });

        let shot = scene.shot.map(|shot| ShotSample {
            phase: shot.phase(frame),
            state: shot.state_at(frame),
        });

        let flash = scene
            .flashes
            .iter()
            .map(|p| p.sample(frame))
            .chain(shot.map(|s| s.state.flash))
            .fold(0.0, f64::max)
            .min(1.0);

        let beat = scene.beat.map(|track| {
            let grid = track.grid;
            BeatSample {
                beat: grid.beat_at_frame(frame),
                on_beat: grid.is_on_beat(frame, track.tolerance_frames),
                pulse: grid.beat_pulse(frame, track.pulse_frequency),
            }
        });

        let springs = scene
            .springs
            .iter()
            .map(|(name, spring)| (name.clone(), spring.sample(frame.as_f64())))
            .collect();

        Ok(FrameSample {
            frame,
            time_secs: scene.fps.frames_to_secs(frame.0),
            camera,
            drift: scene.drift.map(|d| d.sample(frame)),
            shot,
            flash,
            beat,
            springs,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
