//! Damped harmonic oscillator reveals.
//!
//! Springs start at rest at `0` and converge on `1`. Frame offsets are continuous time in frame
//! units; the physical constants are per-second values read against a fixed
//! [`REFERENCE_FPS`] clock, so a spring looks the same whatever fps the host renders at.

use crate::foundation::error::{ReelError, ReelResult};

/// Frames per second of physical time assumed by every spring.
pub const REFERENCE_FPS: f64 = 30.0;

/// Frame horizon scanned by [`settle_frame`].
const MAX_SETTLE_FRAMES: u64 = 60 * 60 * 30;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Viscous damping coefficient (not the damping ratio; see [`SpringConfig::damping_ratio`]).
    pub damping: f64,
    pub stiffness: f64,
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            stiffness: 100.0,
            mass: 1.0,
        }
    }
}

impl SpringConfig {
    /// Light and quick, with a barely visible overshoot.
    pub const SNAPPY: Self = Self::new(12.0, 100.0, 0.5);
    pub const CINEMATIC: Self = Self::new(12.0, 180.0, 0.8);
    /// Critically damped; never overshoots.
    pub const GENTLE: Self = Self::new(20.0, 100.0, 1.0);
    /// Bouncy reveal that swings ~13% past the target.
    pub const OVERSHOOT: Self = Self::new(12.0, 150.0, 0.8);

    pub const fn new(damping: f64, stiffness: f64, mass: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass,
        }
    }

    pub fn validate(&self) -> ReelResult<()> {
        for (name, v) in [
            ("damping", self.damping),
            ("stiffness", self.stiffness),
            ("mass", self.mass),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ReelError::validation(format!(
                    "spring {name} must be finite and > 0, got {v}"
                )));
            }
        }
        Ok(())
    }

    /// Undamped angular frequency in radians per second.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// `< 1` oscillates, `== 1` is critically damped, `> 1` creeps in monotonically.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Progress of a spring `frame_offset` frames after it started; `0` before the start.
pub fn spring_value(frame_offset: f64, config: &SpringConfig) -> ReelResult<f64> {
    config.validate()?;
    if frame_offset.is_nan() {
        return Err(ReelError::animation("spring frame offset must not be NaN"));
    }
    Ok(step_response(frame_offset, config))
}

/// First frame after which the spring stays within `threshold` of its target.
pub fn settle_frame(config: &SpringConfig, threshold: f64) -> ReelResult<u64> {
    config.validate()?;
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(ReelError::validation(format!(
            "settle threshold must be finite and > 0, got {threshold}"
        )));
    }

    let mut last_outside = None;
    for f in 0..=MAX_SETTLE_FRAMES {
        if (step_response(f as f64, config) - 1.0).abs() > threshold {
            last_outside = Some(f);
        }
    }
    match last_outside {
        None => Ok(0),
        Some(f) if f == MAX_SETTLE_FRAMES => Err(ReelError::animation(format!(
            "spring {config:?} does not settle within {MAX_SETTLE_FRAMES} frames"
        ))),
        Some(f) => Ok(f + 1),
    }
}

fn step_response(frame_offset: f64, config: &SpringConfig) -> f64 {
    if frame_offset <= 0.0 {
        return 0.0;
    }
    if frame_offset.is_infinite() {
        // Fully settled; the closed forms below would produce 0 * inf.
        return 1.0;
    }
    // Step response from 0 to 1 with x(0)=0, v(0)=0.
    let t = frame_offset / REFERENCE_FPS;
    let w0 = config.natural_frequency();
    let zeta = config.damping_ratio();

    let v = if (zeta - 1.0).abs() < 1e-6 {
        // Critically damped.
        let e = (-w0 * t).exp();
        1.0 - e * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        // Underdamped.
        let root = (1.0 - zeta * zeta).sqrt();
        let wd = w0 * root;
        let e = (-zeta * w0 * t).exp();
        1.0 - e * ((wd * t).cos() + (zeta / root) * (wd * t).sin())
    } else {
        // Overdamped.
        let z2 = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - z2);
        let r2 = -w0 * (zeta + z2);
        let c2 = (zeta + z2) / (2.0 * z2);
        let c1 = (zeta - z2) / (2.0 * z2);
        1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
    };
    debug_assert!(v.is_finite(), "spring produced {v} for {config:?}");
    v
}

/// A spring bound to a start frame and an output range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spring {
    #[serde(default)]
    pub config: SpringConfig,
    /// Frames to wait before the spring starts moving.
    #[serde(default)]
    pub delay: f64,
    #[serde(default)]
    pub from: f64,
    #[serde(default = "default_to")]
    pub to: f64,
    /// Stop at `to` instead of swinging past it.
    #[serde(default)]
    pub overshoot_clamping: bool,
}

fn default_to() -> f64 {
    1.0
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            config: SpringConfig::default(),
            delay: 0.0,
            from: 0.0,
            to: 1.0,
            overshoot_clamping: false,
        }
    }
}

impl Spring {
    pub fn new(config: SpringConfig) -> ReelResult<Self> {
        let spring = Self {
            config,
            ..Self::default()
        };
        spring.validate()?;
        Ok(spring)
    }

    pub fn with_delay(mut self, frames: f64) -> Self {
        self.delay = frames;
        self
    }

    pub fn with_range(mut self, from: f64, to: f64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn with_overshoot_clamping(mut self, clamp: bool) -> Self {
        self.overshoot_clamping = clamp;
        self
    }

    pub fn validate(&self) -> ReelResult<()> {
        self.config.validate()?;
        if [self.delay, self.from, self.to].iter().any(|v| !v.is_finite()) {
            return Err(ReelError::validation(
                "spring delay/from/to must be finite",
            ));
        }
        Ok(())
    }

    /// Value at absolute `frame`; holds `from` until `delay` has elapsed.
    pub fn sample(&self, frame: f64) -> f64 {
        let p = step_response(frame - self.delay, &self.config);
        let v = self.from + (self.to - self.from) * p;
        if !self.overshoot_clamping {
            return v;
        }
        if self.to >= self.from {
            v.min(self.to)
        } else {
            v.max(self.to)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
