//! Shot enter/exit transitions.
//!
//! A shot of `duration_in_frames` frames is `Entering` for its first `enter_duration` frames,
//! `Exiting` once the frame passes `duration_in_frames - exit_duration`, and `Steady` otherwise.
//! Each [`TransitionKind`] maps window progress onto a [`TransitionState`] through a fixed
//! breakpoint table.

use std::{fmt, str::FromStr};

use crate::{
    animation::{
        ease::Ease,
        interpolate::{InterpolateOptions, eval_breakpoints},
    },
    foundation::{
        core::FrameIndex,
        error::{ReelError, ReelResult},
    },
};

pub const DEFAULT_TRANSITION_FRAMES: u64 = 12;
pub const DEFAULT_TRANSITION_EASE: Ease = Ease::CAMERA_SMOOTH;
pub const DEFAULT_FLASH_FRAMES: u64 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    #[default]
    Fade,
    ZoomThrough,
    Push,
    Morph,
    Flash,
    BlurZoom,
}

impl TransitionKind {
    pub const ALL: [Self; 6] = [
        Self::Fade,
        Self::ZoomThrough,
        Self::Push,
        Self::Morph,
        Self::Flash,
        Self::BlurZoom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::ZoomThrough => "zoom-through",
            Self::Push => "push",
            Self::Morph => "morph",
            Self::Flash => "flash",
            Self::BlurZoom => "blur-zoom",
        }
    }
}

pub fn parse_transition_kind(s: &str) -> ReelResult<TransitionKind> {
    let kind = s.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(ReelError::validation("transition kind must be non-empty"));
    }

    match kind.as_str() {
        "fade" | "crossfade" => Ok(TransitionKind::Fade),
        "zoom-through" | "zoom_through" | "zoomthrough" => Ok(TransitionKind::ZoomThrough),
        "push" => Ok(TransitionKind::Push),
        "morph" => Ok(TransitionKind::Morph),
        "flash" => Ok(TransitionKind::Flash),
        "blur-zoom" | "blur_zoom" | "blurzoom" => Ok(TransitionKind::BlurZoom),
        other => Err(ReelError::validation(format!(
            "unknown transition kind '{other}'"
        ))),
    }
}

impl FromStr for TransitionKind {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_transition_kind(s)
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for TransitionKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for TransitionKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_transition_kind(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotPhase {
    Entering,
    Steady,
    Exiting,
}

/// Per-frame presentation values for a shot. `Default` is the steady identity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TransitionState {
    pub scale: f64,
    pub opacity: f64,
    /// Gaussian blur radius in pixels.
    pub blur: f64,
    /// Perspective depth offset in pixels.
    pub translate_z: f64,
    pub rotate_x: f64,
    /// Full-frame white overlay opacity, composited separately from the content transform.
    pub flash: f64,
}

impl Default for TransitionState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransitionState {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        opacity: 1.0,
        blur: 0.0,
        translate_z: 0.0,
        rotate_x: 0.0,
        flash: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShotTransition {
    pub duration_in_frames: u64,
    #[serde(default)]
    pub enter: TransitionKind,
    #[serde(default)]
    pub exit: TransitionKind,
    #[serde(default = "default_transition_frames")]
    pub enter_duration: u64,
    #[serde(default = "default_transition_frames")]
    pub exit_duration: u64,
    #[serde(default = "default_transition_ease")]
    pub easing: Ease,
}

fn default_transition_frames() -> u64 {
    DEFAULT_TRANSITION_FRAMES
}

fn default_transition_ease() -> Ease {
    DEFAULT_TRANSITION_EASE
}

impl ShotTransition {
    /// Fade in and out over 12 frames with the smooth camera curve.
    pub fn new(duration_in_frames: u64) -> Self {
        Self {
            duration_in_frames,
            enter: TransitionKind::Fade,
            exit: TransitionKind::Fade,
            enter_duration: DEFAULT_TRANSITION_FRAMES,
            exit_duration: DEFAULT_TRANSITION_FRAMES,
            easing: DEFAULT_TRANSITION_EASE,
        }
    }

    pub fn with_kinds(mut self, enter: TransitionKind, exit: TransitionKind) -> Self {
        self.enter = enter;
        self.exit = exit;
        self
    }

    pub fn with_durations(mut self, enter: u64, exit: u64) -> Self {
        self.enter_duration = enter;
        self.exit_duration = exit;
        self
    }

    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self
    }

    /// Overlapping windows are tolerated: both are evaluated with their own math.
    pub fn validate(&self) -> ReelResult<()> {
        if self.duration_in_frames == 0 {
            return Err(ReelError::validation("shot duration_in_frames must be > 0"));
        }
        if !self.easing.is_valid() {
            return Err(ReelError::validation(format!(
                "shot easing {:?} is not a valid curve",
                self.easing
            )));
        }
        if self.enter_duration.saturating_add(self.exit_duration) > self.duration_in_frames {
            tracing::warn!(
                duration = self.duration_in_frames,
                enter = self.enter_duration,
                exit = self.exit_duration,
                "shot is shorter than its transition windows; enter and exit will overlap"
            );
        }
        Ok(())
    }

    fn exit_start(&self) -> f64 {
        self.duration_in_frames as f64 - self.exit_duration as f64
    }

    pub fn phase(&self, frame: FrameIndex) -> ShotPhase {
        let f = frame.as_f64();
        if frame.0 < self.enter_duration {
            ShotPhase::Entering
        } else if f > self.exit_start() {
            ShotPhase::Exiting
        } else {
            ShotPhase::Steady
        }
    }

    /// Eased progress through the enter window, clamped to `[0, 1]`.
    pub fn enter_progress(&self, frame: FrameIndex) -> f64 {
        window_progress(
            frame.as_f64(),
            0.0,
            self.enter_duration as f64,
            self.easing,
        )
    }

    /// Eased progress through the exit window, clamped to `[0, 1]`.
    pub fn exit_progress(&self, frame: FrameIndex) -> f64 {
        window_progress(
            frame.as_f64(),
            self.exit_start(),
            self.duration_in_frames as f64,
            self.easing,
        )
    }

    /// The enter archetype evaluated at this frame, regardless of phase.
    pub fn enter_state(&self, frame: FrameIndex) -> TransitionState {
        enter_archetype(self.enter, self.enter_progress(frame))
    }

    /// The exit archetype evaluated at this frame, regardless of phase.
    pub fn exit_state(&self, frame: FrameIndex) -> TransitionState {
        exit_archetype(self.exit, self.exit_progress(frame))
    }

    pub fn state_at(&self, frame: FrameIndex) -> TransitionState {
        let state = match self.phase(frame) {
            ShotPhase::Entering => self.enter_state(frame),
            ShotPhase::Exiting => self.exit_state(frame),
            ShotPhase::Steady => TransitionState::IDENTITY,
        };
        debug_assert!(
            state.scale.is_finite() && state.opacity.is_finite() && state.blur.is_finite(),
            "transition produced {state:?}"
        );
        state
    }
}

fn window_progress(frame: f64, start: f64, end: f64, easing: Ease) -> f64 {
    // Zero-length window: already complete once reached.
    if end <= start {
        return if frame >= end { 1.0 } else { 0.0 };
    }
    eval_breakpoints(
        frame,
        &[start, end],
        &[0.0, 1.0],
        InterpolateOptions::clamped().with_easing(easing),
    )
}

fn ramp(p: f64, input: &[f64], output: &[f64]) -> f64 {
    eval_breakpoints(p, input, output, InterpolateOptions::default())
}

const UNIT: [f64; 2] = [0.0, 1.0];

fn enter_archetype(kind: TransitionKind, p: f64) -> TransitionState {
    let id = TransitionState::IDENTITY;
    match kind {
        TransitionKind::ZoomThrough => TransitionState {
            scale: ramp(p, &UNIT, &[0.7, 1.0]),
            opacity: ramp(p, &[0.0, 0.4, 1.0], &[0.0, 1.0, 1.0]),
            blur: ramp(p, &[0.0, 0.5, 1.0], &[15.0, 5.0, 0.0]),
            translate_z: ramp(p, &UNIT, &[-200.0, 0.0]),
            ..id
        },
        TransitionKind::Push => TransitionState {
            scale: ramp(p, &UNIT, &[1.1, 1.0]),
            opacity: ramp(p, &[0.0, 0.3, 1.0], &[0.0, 1.0, 1.0]),
            blur: ramp(p, &[0.0, 0.6, 1.0], &[8.0, 2.0, 0.0]),
            translate_z: ramp(p, &UNIT, &[100.0, 0.0]),
            rotate_x: ramp(p, &UNIT, &[-5.0, 0.0]),
            ..id
        },
        TransitionKind::Morph => TransitionState {
            scale: ramp(p, &UNIT, &[0.9, 1.0]),
            opacity: ramp(p, &[0.0, 0.5, 1.0], &[0.0, 0.8, 1.0]),
            blur: ramp(p, &UNIT, &[5.0, 0.0]),
            ..id
        },
        TransitionKind::Flash => TransitionState {
            flash: ramp(p, &[0.0, 0.15, 0.4, 1.0], &[1.0, 1.0, 0.0, 0.0]),
            ..id
        },
        TransitionKind::BlurZoom => TransitionState {
            scale: ramp(p, &UNIT, &[1.2, 1.0]),
            opacity: ramp(p, &[0.0, 0.3, 1.0], &[0.0, 1.0, 1.0]),
            blur: ramp(p, &UNIT, &[20.0, 0.0]),
            ..id
        },
        TransitionKind::Fade => TransitionState {
            opacity: p,
            blur: ramp(p, &UNIT, &[3.0, 0.0]),
            ..id
        },
    }
}

fn exit_archetype(kind: TransitionKind, p: f64) -> TransitionState {
    let id = TransitionState::IDENTITY;
    match kind {
        TransitionKind::ZoomThrough => TransitionState {
            scale: ramp(p, &UNIT, &[1.0, 1.3]),
            opacity: ramp(p, &[0.0, 0.6, 1.0], &[1.0, 1.0, 0.0]),
            blur: ramp(p, &[0.0, 0.5, 1.0], &[0.0, 5.0, 15.0]),
            translate_z: ramp(p, &UNIT, &[0.0, 200.0]),
            ..id
        },
        TransitionKind::Push => TransitionState {
            scale: ramp(p, &UNIT, &[1.0, 0.9]),
            opacity: ramp(p, &[0.0, 0.7, 1.0], &[1.0, 1.0, 0.0]),
            blur: ramp(p, &[0.0, 0.4, 1.0], &[0.0, 2.0, 8.0]),
            translate_z: ramp(p, &UNIT, &[0.0, -100.0]),
            rotate_x: ramp(p, &UNIT, &[0.0, 5.0]),
            ..id
        },
        TransitionKind::Morph => TransitionState {
            scale: ramp(p, &UNIT, &[1.0, 1.1]),
            opacity: ramp(p, &[0.0, 0.5, 1.0], &[1.0, 0.8, 0.0]),
            blur: ramp(p, &UNIT, &[0.0, 5.0]),
            ..id
        },
        TransitionKind::Flash => TransitionState {
            flash: ramp(p, &[0.0, 0.6, 0.85, 1.0], &[0.0, 0.0, 1.0, 1.0]),
            ..id
        },
        TransitionKind::BlurZoom => TransitionState {
            scale: ramp(p, &UNIT, &[1.0, 0.8]),
            opacity: ramp(p, &[0.0, 0.7, 1.0], &[1.0, 1.0, 0.0]),
            blur: ramp(p, &UNIT, &[0.0, 20.0]),
            ..id
        },
        TransitionKind::Fade => TransitionState {
            opacity: 1.0 - p,
            blur: ramp(p, &UNIT, &[0.0, 3.0]),
            ..id
        },
    }
}

/// A standalone white flash: ramps up over the first 30% of `duration`, then decays.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlashPulse {
    pub at: u64,
    #[serde(default = "default_flash_frames")]
    pub duration: u64,
    #[serde(default = "default_intensity")]
    pub intensity: f64,
}

fn default_flash_frames() -> u64 {
    DEFAULT_FLASH_FRAMES
}

fn default_intensity() -> f64 {
    1.0
}

impl FlashPulse {
    pub fn new(at: u64) -> Self {
        Self {
            at,
            duration: DEFAULT_FLASH_FRAMES,
            intensity: 1.0,
        }
    }

    pub fn validate(&self) -> ReelResult<()> {
        if self.duration == 0 {
            return Err(ReelError::validation("flash duration must be > 0"));
        }
        if !self.intensity.is_finite() || !(0.0..=1.0).contains(&self.intensity) {
            return Err(ReelError::validation("flash intensity must be in [0, 1]"));
        }
        Ok(())
    }

    pub fn sample(&self, frame: FrameIndex) -> f64 {
        let at = self.at as f64;
        let d = self.duration as f64;
        eval_breakpoints(
            frame.as_f64(),
            &[at, at + d * 0.3, at + d],
            &[0.0, 1.0, 0.0],
            InterpolateOptions::clamped(),
        ) * self.intensity
    }
}

pub fn flash_overlay(frame: FrameIndex, at: u64, duration: u64, intensity: f64) -> ReelResult<f64> {
    let pulse = FlashPulse {
        at,
        duration,
        intensity,
    };
    pulse.validate()?;
    Ok(pulse.sample(frame))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomDirection {
    In,
    Out,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ZoomThroughState {
    pub scale: f64,
    pub opacity: f64,
    pub blur: f64,
}

/// Zoom-through look driven by caller-supplied progress, without depth translation.
pub fn zoom_through(direction: ZoomDirection, progress: f64) -> ZoomThroughState {
    let s = match direction {
        ZoomDirection::In => enter_archetype(TransitionKind::ZoomThrough, progress),
        ZoomDirection::Out => exit_archetype(TransitionKind::ZoomThrough, progress),
    };
    ZoomThroughState {
        scale: s.scale,
        opacity: s.opacity,
        blur: s.blur,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
