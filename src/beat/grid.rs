//! Conversions between musical beats and frames on a fixed tempo grid.

use std::f64::consts::PI;

use crate::foundation::{
    core::FrameIndex,
    error::{ReelError, ReelResult},
};

pub const BEATS_PER_MEASURE: u32 = 4;
pub const DEFAULT_TOLERANCE_FRAMES: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BeatGrid {
    pub bpm: f64,
    pub fps: f64,
}

impl Default for BeatGrid {
    /// 120 bpm at 30 fps: 15 frames per beat.
    fn default() -> Self {
        Self {
            bpm: 120.0,
            fps: 30.0,
        }
    }
}

impl BeatGrid {
    pub fn new(bpm: f64, fps: f64) -> ReelResult<Self> {
        let grid = Self { bpm, fps };
        grid.validate()?;
        Ok(grid)
    }

    pub fn validate(&self) -> ReelResult<()> {
        if !self.bpm.is_finite() || self.bpm <= 0.0 {
            return Err(ReelError::validation(format!(
                "bpm must be finite and > 0, got {}",
                self.bpm
            )));
        }
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(ReelError::validation(format!(
                "fps must be finite and > 0, got {}",
                self.fps
            )));
        }
        Ok(())
    }

    pub fn frames_per_beat(&self) -> f64 {
        60.0 / self.bpm * self.fps
    }

    /// Nearest whole frame for `beat`. Negative beats land on frame 0.
    pub fn frame_at_beat(&self, beat: f64) -> FrameIndex {
        let f = (beat * self.frames_per_beat()).round();
        debug_assert!(f.is_finite(), "frame_at_beat produced {f}");
        FrameIndex(f.max(0.0) as u64)
    }

    /// Continuous beat position; not rounded.
    pub fn beat_at_frame(&self, frame: FrameIndex) -> f64 {
        frame.as_f64() / self.frames_per_beat()
    }

    /// True when `frame` lies strictly within `tolerance_frames` of a beat, on either side.
    pub fn is_on_beat(&self, frame: FrameIndex, tolerance_frames: f64) -> bool {
        let beat = self.beat_at_frame(frame);
        let frac = beat - beat.floor();
        let tolerance = tolerance_frames / self.frames_per_beat();
        frac < tolerance || frac > 1.0 - tolerance
    }

    /// `0 -> 1 -> 0` half-sine once per `1 / frequency` beats.
    pub fn beat_pulse(&self, frame: FrameIndex, frequency: f64) -> f64 {
        let period = self.frames_per_beat() / frequency;
        let phase = frame.as_f64().rem_euclid(period) / period;
        (phase * PI).sin()
    }

    /// Frame offset covered by `count` beats.
    pub fn beats(&self, count: u32) -> FrameIndex {
        self.frame_at_beat(f64::from(count))
    }

    /// Length of one 4/4 measure in frames.
    pub fn measure_frames(&self) -> f64 {
        self.frames_per_beat() * f64::from(BEATS_PER_MEASURE)
    }

    pub fn snap_to_beat(&self, frame: FrameIndex) -> FrameIndex {
        self.frame_at_beat(self.beat_at_frame(frame).round())
    }
}

pub fn frame_at_beat(beat: f64, bpm: f64, fps: f64) -> ReelResult<FrameIndex> {
    if !beat.is_finite() || beat < 0.0 {
        return Err(ReelError::validation(format!(
            "beat must be finite and >= 0, got {beat}"
        )));
    }
    Ok(BeatGrid::new(bpm, fps)?.frame_at_beat(beat))
}

pub fn beat_at_frame(frame: FrameIndex, bpm: f64, fps: f64) -> ReelResult<f64> {
    Ok(BeatGrid::new(bpm, fps)?.beat_at_frame(frame))
}

pub fn is_on_beat(frame: FrameIndex, bpm: f64, fps: f64, tolerance_frames: f64) -> ReelResult<bool> {
    if !tolerance_frames.is_finite() || tolerance_frames < 0.0 {
        return Err(ReelError::validation("tolerance_frames must be finite and >= 0"));
    }
    Ok(BeatGrid::new(bpm, fps)?.is_on_beat(frame, tolerance_frames))
}

pub fn beat_pulse(frame: FrameIndex, grid: &BeatGrid, frequency: f64) -> ReelResult<f64> {
    grid.validate()?;
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(ReelError::validation(format!(
            "pulse frequency must be finite and > 0, got {frequency}"
        )));
    }
    Ok(grid.beat_pulse(frame, frequency))
}

#[cfg(test)]
#[path = "../../tests/unit/beat/grid.rs"]
mod tests;
