use crate::foundation::core::FrameIndex;

/// Procedural "handheld" camera sway. Pure function of the frame, so seeking is free.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HandheldDrift {
    /// Peak horizontal sway in pixels.
    pub drift_x: f64,
    /// Peak vertical sway in pixels.
    pub drift_y: f64,
    /// Multiplier on the tilt amplitudes (2deg around X, 3deg around Y).
    pub rotate_scale: f64,
}

impl Default for HandheldDrift {
    fn default() -> Self {
        Self {
            drift_x: 20.0,
            drift_y: 15.0,
            rotate_scale: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct DriftSample {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

impl HandheldDrift {
    pub fn sample(&self, frame: FrameIndex) -> DriftSample {
        let f = frame.as_f64();
        // Incommensurate periods so the motion never visibly loops.
        DriftSample {
            translate_x: (f / 45.0).sin() * self.drift_x,
            translate_y: (f / 60.0).cos() * self.drift_y,
            rotate_x_deg: (f / 90.0).sin() * 2.0 * self.rotate_scale,
            rotate_y_deg: (f / 75.0).cos() * 3.0 * self.rotate_scale,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/drift.rs"]
mod tests;
