//! Reelmotion is a deterministic, frame-indexed motion engine for programmatic video.
//!
//! Every value it produces is a pure function of a frame number and a declarative description:
//! easing curves, springs, camera keyframes, shot transitions and a musical beat grid. Frames
//! can be evaluated in any order, in isolation or in parallel, and always give the same result.
//!
//! # Building blocks
//!
//! - **Easing / interpolation**: [`Ease`], [`interpolate`], [`Interpolation`]
//! - **Springs**: [`SpringConfig`], [`spring_value`], [`Spring`]
//! - **Paths**: [`build_smooth_path`] (Catmull-Rom through every point), [`PathLengthCache`],
//!   [`chart_points`]
//! - **Camera**: [`CameraTimeline`], [`resolve_camera`], [`ken_burns`], [`HandheldDrift`]
//! - **Shot transitions**: [`ShotTransition`], [`TransitionState`], [`flash_overlay`]
//! - **Beat grid**: [`BeatGrid`], [`frame_at_beat`], [`beat_at_frame`], [`is_on_beat`]
//!
//! [`Scene`] bundles all of the above as JSON and [`Evaluator`] samples it per frame.
//!
//! Configuration mistakes (empty keyframe lists, non-positive spring constants, non-ascending
//! interpolation breakpoints) are reported as [`ReelError::Validation`] when a value is built,
//! never as a NaN in a rendered frame.
#![forbid(unsafe_code)]

mod animation;
mod beat;
mod camera;
mod composition;
mod effects;
mod eval;
mod foundation;
mod geometry;

pub use animation::ease::Ease;
pub use animation::interpolate::{Extrapolate, InterpolateOptions, Interpolation, interpolate};
pub use animation::spring::{REFERENCE_FPS, Spring, SpringConfig, settle_frame, spring_value};
pub use beat::grid::{
    BEATS_PER_MEASURE, BeatGrid, DEFAULT_TOLERANCE_FRAMES, beat_at_frame, beat_pulse,
    frame_at_beat, is_on_beat,
};
pub use camera::drift::{DriftSample, HandheldDrift};
pub use camera::presets::{
    KenBurnsOpts, PanDirection, ZoomToFeatureOpts, ken_burns, zoom_to_feature,
};
pub use camera::timeline::{
    CameraKeyframe, CameraState, CameraTimeline, CameraTransform, resolve_camera,
};
pub use composition::model::{BeatTrack, Scene};
pub use effects::transitions::{
    DEFAULT_FLASH_FRAMES, DEFAULT_TRANSITION_EASE, DEFAULT_TRANSITION_FRAMES, FlashPulse,
    ShotPhase, ShotTransition, TransitionKind, TransitionState, ZoomDirection, ZoomThroughState,
    flash_overlay, parse_transition_kind, zoom_through,
};
pub use eval::evaluator::{
    BeatSample, CameraSample, Evaluator, FrameSample, PreparedScene, ShotSample,
};
pub use foundation::core::{Affine, BezPath, Fps, FrameIndex, FrameRange, Point, Size, Vec2};
pub use foundation::error::{ReelError, ReelResult};
pub use geometry::chart::{ChartArea, ValueScale, chart_points};
pub use geometry::length::{PathLengthCache, dash_offset, path_length};
pub use geometry::spline::{
    DEFAULT_TENSION, PathStyle, build_path, build_polyline, build_smooth_path, path_id,
};
